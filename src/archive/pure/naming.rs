// Snapshot and archive-entry names

use chrono::{DateTime, TimeZone};
use std::fmt::Display;
use std::path::{Component, Path};

/// Sortable timestamp embedded in snapshot names
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

/// `<id>_<timestamp>`, without extension
pub fn snapshot_basename<Tz>(id: &str, at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    format!("{}_{}", id, at.format(TIMESTAMP_FORMAT))
}

/// Directory prefix for entries from save path `index` of `root_count`.
///
/// A record with a single save path keeps bare relative names; with several,
/// each root gets `<index>_<root dir name>` so equal relative paths don't collide.
pub fn entry_prefix(index: usize, root: &Path, root_count: usize) -> Option<String> {
    if root_count <= 1 {
        return None;
    }
    let dir_name = root
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| "root".to_string());
    Some(format!("{}_{}", index, dir_name))
}

/// Entry name with `/` separators regardless of platform
pub fn entry_name(prefix: Option<&str>, relative: &Path) -> String {
    let mut parts: Vec<String> = prefix.map(str::to_string).into_iter().collect();
    parts.extend(relative.components().filter_map(|c| match c {
        Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
        _ => None,
    }));
    parts.join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn basename_embeds_sortable_timestamp() {
        let at = NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(7, 5, 1)
            .unwrap()
            .and_utc();
        assert_eq!(snapshot_basename("elden-ring", &at), "elden-ring_2024-03-09_07-05-01");
    }

    #[test]
    fn single_root_has_no_prefix() {
        assert_eq!(entry_prefix(0, Path::new("/saves/Foo"), 1), None);
    }

    #[test]
    fn multiple_roots_are_namespaced() {
        assert_eq!(entry_prefix(1, Path::new("/saves/Foo"), 2).as_deref(), Some("1_Foo"));
        assert_eq!(entry_prefix(0, Path::new("/"), 2).as_deref(), Some("0_root"));
    }

    #[test]
    fn entry_names_use_forward_slashes() {
        assert_eq!(entry_name(None, Path::new("slot1/a.sav")), "slot1/a.sav");
        assert_eq!(entry_name(Some("0_Foo"), Path::new("a.sav")), "0_Foo/a.sav");
    }
}
