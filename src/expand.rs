//! Placeholder expansion for save-path templates
//!
//! Templates use the Windows-style tokens the wiki documents
//! (`%USERPROFILE%`, `%APPDATA%`, ...) as well as POSIX ones (`~`, `$HOME`,
//! `$XDG_CONFIG_HOME`, `$XDG_DATA_HOME`). Expansion is a single left-to-right
//! pass, so a substituted value is never expanded again.

use crate::error::{Result, SaveError};
use regex::Regex;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::LazyLock;

struct Placeholder {
    token: &'static str,
    var: &'static str,
}

const PLACEHOLDERS: &[Placeholder] = &[
    Placeholder { token: "%USERPROFILE%", var: "USERPROFILE" },
    Placeholder { token: "%APPDATA%", var: "APPDATA" },
    Placeholder { token: "%LOCALAPPDATA%", var: "LOCALAPPDATA" },
    Placeholder { token: "%PROGRAMFILES(X86)%", var: "PROGRAMFILES(X86)" },
    Placeholder { token: "%PROGRAMFILES%", var: "PROGRAMFILES" },
    Placeholder { token: "$XDG_CONFIG_HOME", var: "XDG_CONFIG_HOME" },
    Placeholder { token: "$XDG_DATA_HOME", var: "XDG_DATA_HOME" },
    Placeholder { token: "$HOME", var: "HOME" },
];

static UNKNOWN_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^%[A-Za-z_][A-Za-z0-9_()]*%").expect("static regex"));

/// Snapshot of the environment variables placeholders resolve against.
#[derive(Clone, Debug, Default)]
pub struct EnvView {
    vars: HashMap<String, String>,
}

impl EnvView {
    /// Capture the placeholder variables of the running process.
    pub fn from_process() -> Self {
        let vars = PLACEHOLDERS
            .iter()
            .filter_map(|p| std::env::var(p.var).ok().map(|v| (p.var.to_string(), v)))
            .collect();
        Self { vars }
    }

    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }

    /// Value of `var`, or None when unset or empty.
    pub fn get(&self, var: &str) -> Option<&str> {
        self.vars.get(var).map(String::as_str).filter(|v| !v.is_empty())
    }
}

#[derive(Default)]
struct Unresolved {
    missing: Vec<&'static str>,
    unknown: Vec<String>,
}

/// `rest` starts with `token`; a `$NAME` token must also end at an
/// identifier boundary so `$HOMEPATH` is not read as `$HOME` + `PATH`.
fn matches_token(rest: &str, token: &str) -> bool {
    let Some(after) = rest.strip_prefix(token) else {
        return false;
    };
    !token.starts_with('$')
        || !after
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn substitute(path: &str, env: &EnvView, unresolved: &mut Unresolved) -> String {
    let mut out = String::with_capacity(path.len());
    let mut rest = path;

    if rest == "~" || rest.starts_with("~/") {
        match env.get("HOME") {
            Some(home) => out.push_str(home),
            None => unresolved.missing.push("HOME"),
        }
        rest = &rest[1..];
    }

    while let Some(ch) = rest.chars().next() {
        if let Some(p) = PLACEHOLDERS.iter().find(|p| matches_token(rest, p.token)) {
            match env.get(p.var) {
                Some(value) => out.push_str(value),
                None => unresolved.missing.push(p.var),
            }
            rest = &rest[p.token.len()..];
            continue;
        }
        if ch == '%'
            && let Some(m) = UNKNOWN_TOKEN.find(rest)
        {
            unresolved.unknown.push(m.as_str().to_string());
            out.push_str(m.as_str());
            rest = &rest[m.end()..];
            continue;
        }
        out.push(ch);
        rest = &rest[ch.len_utf8()..];
    }

    out
}

/// Expand every known placeholder in `path`.
///
/// Never fails: a variable that is unset substitutes an empty string and
/// unknown tokens are left verbatim. Use [`expand_strict`] when the result
/// must name a real location.
pub fn expand(path: &str, env: &EnvView) -> String {
    substitute(path, env, &mut Unresolved::default())
}

/// Like [`expand`], but rejects templates whose placeholders cannot all be
/// resolved (unset variable, or a `%TOKEN%` outside the known set).
pub fn expand_strict(path: &str, env: &EnvView) -> Result<PathBuf> {
    let mut unresolved = Unresolved::default();
    let expanded = substitute(path, env, &mut unresolved);

    if let Some(var) = unresolved.missing.first() {
        return Err(SaveError::Validation(format!(
            "'{}' needs environment variable {} which is not set",
            path, var
        )));
    }
    if let Some(token) = unresolved.unknown.first() {
        return Err(SaveError::Validation(format!(
            "'{}' contains unknown placeholder {}",
            path, token
        )));
    }
    Ok(PathBuf::from(expanded))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env() -> EnvView {
        EnvView::from_pairs([
            ("HOME", "/home/deck"),
            ("USERPROFILE", "C:\\Users\\deck"),
            ("APPDATA", "C:\\Users\\deck\\AppData\\Roaming"),
            ("XDG_CONFIG_HOME", "/home/deck/.config"),
        ])
    }

    #[test]
    fn expands_windows_tokens() {
        assert_eq!(
            expand("%APPDATA%\\EldenRing", &env()),
            "C:\\Users\\deck\\AppData\\Roaming\\EldenRing"
        );
        assert_eq!(
            expand("%USERPROFILE%/Saved Games", &env()),
            "C:\\Users\\deck/Saved Games"
        );
    }

    #[test]
    fn expands_posix_tokens() {
        assert_eq!(expand("~/.local/share/foo", &env()), "/home/deck/.local/share/foo");
        assert_eq!(expand("~", &env()), "/home/deck");
        assert_eq!(expand("$HOME/games", &env()), "/home/deck/games");
        assert_eq!(expand("$XDG_CONFIG_HOME/foo", &env()), "/home/deck/.config/foo");
    }

    #[test]
    fn dollar_tokens_stop_at_identifier_boundary() {
        assert_eq!(expand("$HOMEPATH/x", &env()), "$HOMEPATH/x");
        assert_eq!(expand("$HOME_DIR", &env()), "$HOME_DIR");
        assert_eq!(expand("$HOME", &env()), "/home/deck");
        assert_eq!(expand("$HOME.bak", &env()), "/home/deck.bak");
        assert!(expand_strict("$HOMEPATH/x", &EnvView::default()).is_ok());
    }

    #[test]
    fn tilde_only_at_start() {
        assert_eq!(expand("C:/PROGRA~1/Foo", &env()), "C:/PROGRA~1/Foo");
        assert_eq!(expand("~user/x", &env()), "~user/x");
    }

    #[test]
    fn missing_variable_substitutes_empty() {
        assert_eq!(expand("%LOCALAPPDATA%/Foo", &env()), "/Foo");
    }

    #[test]
    fn unknown_tokens_left_verbatim() {
        assert_eq!(expand("%GAME_DIR%/saves", &env()), "%GAME_DIR%/saves");
        assert_eq!(expand("100% done", &env()), "100% done");
    }

    #[test]
    fn substituted_values_are_not_reexpanded() {
        let env = EnvView::from_pairs([("USERPROFILE", "%APPDATA%"), ("APPDATA", "nope")]);
        assert_eq!(expand("%USERPROFILE%/x", &env), "%APPDATA%/x");
    }

    #[test]
    fn idempotent_without_placeholders() {
        for s in ["/plain/path", "C:\\Games\\Foo", "relative/dir", "", "50%"] {
            let once = expand(s, &env());
            assert_eq!(expand(&once, &env()), once);
            assert_eq!(once, s);
        }
    }

    #[test]
    fn strict_rejects_missing_variable() {
        let err = expand_strict("%LOCALAPPDATA%/Foo", &env()).unwrap_err();
        assert!(matches!(err, SaveError::Validation(_)));
    }

    #[test]
    fn strict_rejects_unknown_token() {
        let err = expand_strict("%GAME_DIR%/saves", &env()).unwrap_err();
        assert!(err.to_string().contains("%GAME_DIR%"));
    }

    #[test]
    fn strict_accepts_resolved_path() {
        assert_eq!(
            expand_strict("~/saves", &env()).unwrap(),
            PathBuf::from("/home/deck/saves")
        );
    }

    #[test]
    fn empty_variable_counts_as_missing() {
        let env = EnvView::from_pairs([("HOME", "")]);
        assert!(expand_strict("$HOME/x", &env).is_err());
    }
}
