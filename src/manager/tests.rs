// End-to-end scenarios against a temp data directory and a fake knowledge source

use super::*;
use crate::error::ErrorKind;
use crate::pcgw::fake::FakeSource;
use std::fs;
use tempfile::TempDir;

struct Fixture {
    dir: TempDir,
    manager: Manager,
}

impl Fixture {
    fn path(&self, rel: &str) -> PathBuf {
        self.dir.path().join(rel)
    }
}

fn env_for(dir: &Path) -> EnvView {
    EnvView::from_pairs([
        ("HOME", dir.join("home").to_string_lossy().into_owned()),
        ("APPDATA", dir.join("home/AppData/Roaming").to_string_lossy().into_owned()),
    ])
}

fn fixture_with(source: FakeSource) -> Fixture {
    let dir = TempDir::new().unwrap();
    let data = dir.path().join("data");
    let policy = BackupPolicy {
        backup_dir: dir.path().join("backups"),
        ..BackupPolicy::default()
    };
    let manager = Manager::new(
        Catalog::empty(data.join(CATALOG_FILE)),
        policy,
        data.join(SETTINGS_FILE),
        Box::new(source),
        env_for(dir.path()),
    );
    Fixture { dir, manager }
}

fn fixture() -> Fixture {
    fixture_with(FakeSource::default())
}

fn write_save(root: &Path, name: &str, bytes: &[u8]) {
    fs::create_dir_all(root).unwrap();
    fs::write(root.join(name), bytes).unwrap();
}

#[test]
fn add_custom_with_missing_path_changes_nothing() {
    let mut fx = fixture();
    let err = fx
        .manager
        .add_custom_application("Foo", "/nonexistent/path", &["*.sav".to_string()])
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Validation);
    assert!(fx.manager.catalog().is_empty());
    assert!(!fx.manager.catalog().path().exists());
}

#[test]
fn add_custom_tracks_path_and_stats() {
    let mut fx = fixture();
    let saves = fx.path("home/Games/Foo");
    write_save(&saves, "slot1.sav", b"12345");
    write_save(&saves, "notes.txt", b"ignored");

    let record = fx
        .manager
        .add_custom_application("Foo Quest", "~/Games/Foo", &["*.sav".to_string()])
        .unwrap()
        .clone();

    assert_eq!(record.id, "foo-quest");
    assert_eq!(record.platform, Platform::Custom);
    assert_eq!(record.custom_paths, vec![saves.to_string_lossy().into_owned()]);
    assert_eq!(record.save_paths, record.custom_paths);
    assert_eq!(record.file_count, 1);
    assert_eq!(record.total_size_bytes, 5);

    let reopened = Catalog::open(fx.manager.catalog().path()).unwrap();
    assert_eq!(reopened.get("foo-quest"), Some(&record));
}

#[test]
fn readding_keeps_earlier_custom_paths() {
    let mut fx = fixture();
    let first = fx.path("home/first");
    let second = fx.path("home/second");
    write_save(&first, "a.sav", b"a");
    write_save(&second, "b.sav", b"b");

    fx.manager.add_custom_application("Foo", &first.to_string_lossy(), &[]).unwrap();
    let record = fx
        .manager
        .add_custom_application("Foo", &second.to_string_lossy(), &[])
        .unwrap();

    let first = first.to_string_lossy().into_owned();
    let second = second.to_string_lossy().into_owned();
    assert_eq!(record.custom_paths, vec![second.clone(), first.clone()]);
    assert!(record.save_paths.contains(&first) && record.save_paths.contains(&second));
    assert_eq!(record.file_count, 2);
}

#[test]
fn backup_then_remove() {
    let mut fx = fixture();
    let saves = fx.path("home/Games/Foo");
    write_save(&saves, "slot1.sav", b"data");
    fx.manager
        .add_custom_application("Foo", &saves.to_string_lossy(), &[])
        .unwrap();

    let snapshot = fx.manager.create_backup("foo").unwrap();
    assert!(snapshot.path.starts_with(fx.path("backups/foo")));
    assert!(fx.manager.catalog().get("foo").unwrap().last_backup.is_some());

    let removed = fx.manager.remove_application("foo").unwrap();
    assert_eq!(removed.id, "foo");
    assert!(snapshot.path.exists());
    assert_eq!(fx.manager.remove_application("foo").unwrap_err().kind(), ErrorKind::NotFound);
    assert_eq!(fx.manager.create_backup("foo").unwrap_err().kind(), ErrorKind::NotFound);
}

#[test]
fn batch_continues_past_unknown_names() {
    let source = FakeSource::default()
        .with_page("Hollow Knight", "1", &["%APPDATA%\\Team Cherry\\Hollow Knight"])
        .with_page("Silksong", "2", &[])
        .with_page("Celeste", "3", &["%APPDATA%\\Celeste"]);
    let mut fx = fixture_with(source);
    write_save(&fx.path("home/AppData/Roaming/Celeste"), "0.sav", b"c");

    let names: Vec<String> = ["Nonexistent Game", "Silksong", "Celeste"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let outcome = fx.manager.batch_create_backups(&names, None);

    assert_eq!(outcome.total_games, 3);
    assert_eq!(outcome.success_count, 1);
    assert_eq!(outcome.error_count, 2);
    assert!(outcome.errors[0].starts_with("Nonexistent Game: "));
    assert!(outcome.errors[1].starts_with("Silksong: "));
    assert!(!fx.manager.catalog().contains("silksong"));
    assert_eq!(outcome.backup_path, fx.path("backups"));

    let celeste = fx.manager.catalog().get("celeste").unwrap();
    assert!(celeste.file_count > 0);
    assert!(celeste.last_backup.is_some());
}

#[test]
fn batch_item_without_local_save_location_fails() {
    let source = FakeSource::default().with_page("Celeste", "3", &["%LOCALAPPDATA%\\Celeste"]);
    let mut fx = fixture_with(source);

    let outcome = fx.manager.batch_create_backups(&["Celeste".to_string()], None);

    assert_eq!(outcome.success_count, 0);
    assert_eq!(outcome.error_count, 1);
    assert!(outcome.errors[0].starts_with("Celeste: no save location"));
    assert!(!fx.manager.catalog().contains("celeste"));
    assert!(!fx.path("backups/celeste").exists());
}

#[test]
fn batch_transport_failure_is_an_item_failure() {
    let source = FakeSource {
        offline: true,
        ..FakeSource::default()
    };
    let mut fx = fixture_with(source);
    let names = vec!["A".to_string(), "B".to_string()];

    let outcome = fx.manager.batch_create_backups(&names, None);
    assert_eq!(outcome.error_count, 2);
    assert_eq!(outcome.success_count, 0);
}

#[test]
fn batch_destination_overrides_root_for_the_batch_only() {
    let source = FakeSource::default().with_page("Celeste", "3", &["%APPDATA%\\Celeste"]);
    let mut fx = fixture_with(source);
    write_save(&fx.path("home/AppData/Roaming/Celeste"), "0.sav", b"c");
    let dest = fx.path("usb/saves");

    let outcome = fx
        .manager
        .batch_create_backups(&["Celeste".to_string()], Some(&*dest.to_string_lossy()));

    assert_eq!(outcome.success_count, 1);
    assert_eq!(outcome.backup_path, dest);
    assert!(dest.join("celeste").is_dir());
    assert_eq!(fx.manager.backup_root(), fx.path("backups"));
}

#[test]
fn add_from_knowledge_source_requires_an_existing_path() {
    let source = FakeSource::default().with_page("Celeste", "3", &["%APPDATA%\\Celeste"]);
    let mut fx = fixture_with(source);

    let candidate = fx.manager.search_knowledge_source("Celeste").unwrap().remove(0);
    assert!(candidate.available);

    let selection = Selection {
        name: "Celeste".into(),
        selected: Some(candidate),
        custom_path: None,
    };
    let err = fx.manager.add_from_knowledge_source(&selection).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert!(fx.manager.catalog().is_empty());

    write_save(&fx.path("home/custom"), "0.celeste", b"c");
    let selection = Selection {
        custom_path: Some("~/custom".into()),
        ..selection
    };
    let record = fx.manager.add_from_knowledge_source(&selection).unwrap();
    assert_eq!(record.platform, Platform::Pcgw);
    assert_eq!(record.metadata.get("pcgw_page_id").map(String::as_str), Some("3"));
    assert_eq!(record.custom_paths.len(), 1);
}

#[test]
fn set_backup_root_persists_policy() {
    let mut fx = fixture();
    let root = fx.manager.set_backup_root("~/NewBackups").unwrap().to_path_buf();

    assert_eq!(root, fx.path("home/NewBackups"));
    assert!(root.is_dir());
    assert!(!root.join(".test_write").exists());
    let saved = load_policy(&fx.path("data").join(SETTINGS_FILE));
    assert_eq!(saved.backup_dir, root);
}

#[test]
fn set_backup_root_rejects_unresolvable_template() {
    let mut fx = fixture();
    let err = fx.manager.set_backup_root("%LOCALAPPDATA%/Backups").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert_eq!(fx.manager.backup_root(), fx.path("backups"));
}

#[test]
fn update_policy_validates() {
    let mut fx = fixture();
    let bad = BackupPolicy {
        max_backups: 0,
        ..fx.manager.policy().clone()
    };
    assert_eq!(fx.manager.update_policy(bad).unwrap_err().kind(), ErrorKind::Validation);
    assert_eq!(fx.manager.policy().max_backups, 10);
}

#[test]
fn scan_all_uses_configured_roots() {
    let fx = fixture();
    let Fixture { dir, manager } = fx;
    write_save(&dir.path().join("home/AppData/Roaming/Hades"), "slot0.sav", b"x");
    let mut manager = manager.with_scan_roots(vec![ScanRoot::new(Platform::Steam, "%APPDATA%")]);

    let outcome = manager.scan_all();
    assert_eq!(outcome.new_ids, vec!["hades"]);
    assert_eq!(manager.list_applications().len(), 1);

    let validation = manager.validate_paths("hades").unwrap();
    assert_eq!(validation.valid.len(), 1);
    assert!(validation.invalid.is_empty());

    let shown = manager.show("hades").unwrap();
    assert_eq!(shown.file_count, 1);
    assert_eq!(manager.show("ghost").unwrap_err().kind(), ErrorKind::NotFound);
}
