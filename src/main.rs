mod archive;
mod catalog;
mod config;
mod detect;
mod error;
mod expand;
mod logger;
mod manager;
mod paths;
mod pcgw;
mod scan;

use clap::{Parser, Subcommand};
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::config::BackupPolicy;
use crate::error::{ErrorKind, Result, SaveError};
use crate::expand::EnvView;
use crate::manager::Manager;
use crate::paths::PATH_DATA;
use crate::pcgw::{PcgwClient, Selection};

#[derive(Parser, Debug)]
#[command(author, version, about = "Back up game saves", long_about = None)]
struct Args {
    /// Directory holding settings.json and catalog.json
    #[arg(long, value_name = "DIR", global = true)]
    data_dir: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Discover save directories and refresh every record
    Scan,
    /// List tracked applications
    List,
    /// Show one application with fresh stats
    Show { id: String },
    /// Snapshot an application's saves
    Backup { id: String },
    /// Track a save directory by hand
    Add {
        name: String,
        path: String,
        /// File glob to back up; repeatable. Defaults to common save files
        #[arg(short = 'p', long = "pattern")]
        patterns: Vec<String>,
    },
    /// Look up save locations on PCGamingWiki
    Search {
        #[arg(required_unless_present = "steam_appid")]
        name: Option<String>,
        #[arg(long, conflicts_with = "name")]
        steam_appid: Option<String>,
    },
    /// Track an application using its PCGamingWiki save locations
    Import {
        name: String,
        /// Index of the search result to use
        #[arg(long, default_value_t = 0)]
        pick: usize,
        /// Extra save directory to track alongside the wiki ones
        #[arg(long)]
        custom_path: Option<String>,
    },
    /// Print or change the backup root
    Root { path: Option<String> },
    /// Check which save paths of an application exist
    Validate { id: String },
    /// Stop tracking an application
    Remove { id: String },
    /// Print the backup policy, changing the given settings first
    Config(PolicyArgs),
    /// Back up several applications by name
    Batch {
        #[arg(required = true)]
        names: Vec<String>,
        /// Backup root for this batch only
        #[arg(long)]
        dest: Option<String>,
    },
}

#[derive(clap::Args, Debug, Default)]
struct PolicyArgs {
    /// Snapshots kept per application
    #[arg(long)]
    max_backups: Option<usize>,
    /// Write zip archives (true) or plain directory copies (false)
    #[arg(long)]
    compression: Option<bool>,
    /// File glob never backed up; repeatable, replaces the current list
    #[arg(long = "exclude")]
    exclude: Vec<String>,
    #[arg(long)]
    auto_backup: Option<bool>,
    /// Deepest directory level a scan descends to
    #[arg(long)]
    scan_max_depth: Option<usize>,
}

impl PolicyArgs {
    /// `current` with the requested changes, or None when nothing was asked for
    fn apply(self, current: &BackupPolicy) -> Option<BackupPolicy> {
        let mut policy = current.clone();
        let mut changed = false;
        if let Some(max) = self.max_backups {
            policy.max_backups = max;
            changed = true;
        }
        if let Some(compression) = self.compression {
            policy.compression_enabled = compression;
            changed = true;
        }
        if !self.exclude.is_empty() {
            policy.exclude_patterns = self.exclude;
            changed = true;
        }
        if let Some(auto) = self.auto_backup {
            policy.auto_backup = auto;
            changed = true;
        }
        if let Some(depth) = self.scan_max_depth {
            policy.scan_max_depth = depth;
            changed = true;
        }
        changed.then_some(policy)
    }
}

fn write_json<W: Write, T: Serialize + ?Sized>(mut out: W, value: &T) -> Result<()> {
    // failures here are about the output stream, not the data
    serde_json::to_writer_pretty(&mut out, value)
        .map_err(|e| SaveError::io("stdout", std::io::Error::from(e)))?;
    writeln!(out).map_err(|e| SaveError::io("stdout", e))
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    write_json(std::io::stdout().lock(), value)
}

fn exit_code(kind: ErrorKind) -> ExitCode {
    ExitCode::from(match kind {
        ErrorKind::Validation => 2,
        ErrorKind::NotFound => 3,
        ErrorKind::Io => 4,
        ErrorKind::Transport => 5,
    })
}

fn run(args: Args) -> Result<()> {
    let data_dir = args.data_dir.unwrap_or_else(|| PATH_DATA.clone());
    let source = Box::new(PcgwClient::new()?);
    let mut manager = Manager::open(&data_dir, source, EnvView::from_process())?;

    match args.command {
        Command::Scan => print_json(&manager.scan_all()),
        Command::List => print_json(&manager.list_applications()),
        Command::Show { id } => print_json(manager.show(&id)?),
        Command::Backup { id } => print_json(&manager.create_backup(&id)?),
        Command::Add { name, path, patterns } => {
            print_json(manager.add_custom_application(&name, &path, &patterns)?)
        }
        Command::Search { name, steam_appid } => match (steam_appid, name) {
            (Some(app_id), _) => print_json(&manager.search_by_steam_app_id(&app_id)?),
            (None, Some(name)) => print_json(&manager.search_knowledge_source(&name)?),
            (None, None) => Ok(()),
        },
        Command::Import { name, pick, custom_path } => {
            let selected = manager.search_knowledge_source(&name)?.into_iter().nth(pick);
            let selection = Selection {
                name,
                selected,
                custom_path,
            };
            print_json(manager.add_from_knowledge_source(&selection)?)
        }
        Command::Root { path: Some(path) } => print_json(manager.set_backup_root(&path)?),
        Command::Root { path: None } => print_json(manager.backup_root()),
        Command::Validate { id } => print_json(&manager.validate_paths(&id)?),
        Command::Remove { id } => print_json(&manager.remove_application(&id)?),
        Command::Config(changes) => match changes.apply(manager.policy()) {
            Some(policy) => print_json(manager.update_policy(policy)?),
            None => print_json(manager.policy()),
        },
        Command::Batch { names, dest } => {
            print_json(&manager.batch_create_backups(&names, dest.as_deref()))
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    logger::init(&args.log_level);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            exit_code(e.kind())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn output_failure_is_an_io_error() {
        let err = write_json(ClosedPipe, &vec!["a", "b"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
    }

    #[test]
    fn json_goes_to_the_writer() {
        let mut out = Vec::new();
        write_json(&mut out, &BackupPolicy::default()).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with("}\n"));
        assert!(text.contains("\"max_backups\": 10"));
    }

    #[test]
    fn config_flags_change_only_what_was_given() {
        let args = Args::try_parse_from([
            "savekeep",
            "config",
            "--max-backups",
            "3",
            "--compression",
            "false",
            "--exclude",
            "*.log",
        ])
        .unwrap();
        let Command::Config(changes) = args.command else {
            panic!("expected config command");
        };

        let current = BackupPolicy::default();
        let policy = changes.apply(&current).unwrap();
        assert_eq!(policy.max_backups, 3);
        assert!(!policy.compression_enabled);
        assert_eq!(policy.exclude_patterns, vec!["*.log".to_string()]);
        assert_eq!(policy.scan_max_depth, current.scan_max_depth);
        assert_eq!(policy.backup_dir, current.backup_dir);
    }

    #[test]
    fn config_without_flags_is_a_read() {
        assert!(PolicyArgs::default().apply(&BackupPolicy::default()).is_none());
    }

    #[test]
    fn exit_codes_differ_per_kind() {
        assert_ne!(exit_code(ErrorKind::Validation), exit_code(ErrorKind::NotFound));
        assert_ne!(exit_code(ErrorKind::Io), exit_code(ErrorKind::Transport));
    }
}
