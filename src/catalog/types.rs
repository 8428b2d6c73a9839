use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Where a record came from
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Steam,
    Epic,
    Uplay,
    Origin,
    Gog,
    Xbox,
    /// Released on several stores; save location is store-independent
    Multiple,
    /// Added by hand
    #[default]
    Custom,
    /// Resolved from PCGamingWiki
    Pcgw,
    #[serde(other)]
    Other,
}

/// One tracked application and its save data
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ApplicationRecord {
    pub id: String,
    pub name: String,
    /// Templates or already-expanded paths, in the order they were added
    #[serde(default, deserialize_with = "null_as_default")]
    pub save_paths: Vec<String>,
    /// Globs selecting which files under the save paths are backed up
    #[serde(default, rename = "patterns", deserialize_with = "null_as_default")]
    pub file_patterns: Vec<String>,
    #[serde(default)]
    pub platform: Platform,
    #[serde(default, rename = "last_backup", deserialize_with = "deserialize_last_backup")]
    pub last_backup: Option<DateTime<Utc>>,
    #[serde(default, rename = "total_size")]
    pub total_size_bytes: u64,
    #[serde(default)]
    pub file_count: u64,
    /// User-entered paths; discovery never removes these
    #[serde(default, deserialize_with = "null_as_default")]
    pub custom_paths: Vec<String>,
    /// Provenance: pcgw_page_id, steam_app_id, release_date, cover_url, ...
    #[serde(default, deserialize_with = "null_as_default")]
    pub metadata: BTreeMap<String, String>,
}

/// Older catalogs write `null` for empty lists and maps
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Older catalogs store "never backed up" as the zero timestamp
fn deserialize_last_backup<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<DateTime<Utc>>::deserialize(deserializer)?;
    Ok(value.filter(|t| t.year() > 1))
}

impl ApplicationRecord {
    pub fn new(id: impl Into<String>, name: impl Into<String>, platform: Platform) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            save_paths: Vec::new(),
            file_patterns: Vec::new(),
            platform,
            last_backup: None,
            total_size_bytes: 0,
            file_count: 0,
            custom_paths: Vec::new(),
            metadata: BTreeMap::new(),
        }
    }

    /// Carry over user-entered paths from a record this one replaces
    pub fn absorb_custom_paths(&mut self, previous: &ApplicationRecord) {
        for path in &previous.custom_paths {
            if !self.custom_paths.contains(path) {
                self.custom_paths.push(path.clone());
            }
            if !self.save_paths.contains(path) {
                self.save_paths.push(path.clone());
            }
        }
    }
}

/// On-disk catalog document, rewritten whole on every save
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct CatalogFile {
    #[serde(default, deserialize_with = "null_as_default")]
    pub detected_games: BTreeMap<String, ApplicationRecord>,
    #[serde(default)]
    pub last_update: Option<DateTime<Utc>>,
}

/// Existence check results for a record's save paths
#[derive(Serialize, Clone, Debug, Default, PartialEq)]
pub struct PathValidation {
    pub valid: Vec<String>,
    pub invalid: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_time_loads_as_never() {
        let json = r#"{
            "id": "foo", "name": "Foo", "save_paths": [], "patterns": ["*.sav"],
            "platform": "steam", "last_backup": "0001-01-01T00:00:00Z",
            "total_size": 10, "file_count": 1, "custom_paths": null, "metadata": {}
        }"#;
        let record: ApplicationRecord = serde_json::from_str(json).unwrap();
        assert!(record.custom_paths.is_empty());
        assert_eq!(record.last_backup, None);
        assert_eq!(record.platform, Platform::Steam);
        assert_eq!(record.file_patterns, vec!["*.sav"]);
    }

    #[test]
    fn unknown_platform_tag() {
        let record: ApplicationRecord =
            serde_json::from_str(r#"{ "id": "a", "name": "A", "platform": "itch" }"#).unwrap();
        assert_eq!(record.platform, Platform::Other);
    }

    #[test]
    fn absorb_keeps_user_paths() {
        let mut old = ApplicationRecord::new("foo", "Foo", Platform::Custom);
        old.custom_paths.push("/a".into());
        old.save_paths.push("/a".into());

        let mut new = ApplicationRecord::new("foo", "Foo", Platform::Custom);
        new.save_paths.push("/b".into());
        new.custom_paths.push("/b".into());
        new.absorb_custom_paths(&old);

        assert_eq!(new.custom_paths, vec!["/b", "/a"]);
        assert_eq!(new.save_paths, vec!["/b", "/a"]);
    }
}
