// Catalog file I/O

use crate::catalog::types::{ApplicationRecord, CatalogFile};
use crate::error::{Result, SaveError};
use chrono::Utc;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Read the catalog document; a missing file is an empty catalog
pub fn load_catalog(path: &Path) -> Result<BTreeMap<String, ApplicationRecord>> {
    if !path.exists() {
        return Ok(BTreeMap::new());
    }

    let file = File::open(path).map_err(|e| SaveError::io(path, e))?;
    let document: CatalogFile = serde_json::from_reader(BufReader::new(file))
        .map_err(|e| SaveError::io(path, std::io::Error::from(e)))?;

    let mut records = document.detected_games;
    for (id, record) in records.iter_mut() {
        if record.id.is_empty() {
            record.id = id.clone();
        }
    }
    Ok(records)
}

/// Rewrite the whole catalog document
pub fn save_catalog(path: &Path, records: &BTreeMap<String, ApplicationRecord>) -> Result<()> {
    #[derive(serde::Serialize)]
    struct Document<'a> {
        detected_games: &'a BTreeMap<String, ApplicationRecord>,
        last_update: chrono::DateTime<Utc>,
    }

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| SaveError::io(parent, e))?;
    }

    let file = File::create(path).map_err(|e| SaveError::io(path, e))?;
    let document = Document {
        detected_games: records,
        last_update: Utc::now(),
    };
    serde_json::to_writer_pretty(file, &document)
        .map_err(|e| SaveError::io(path, std::io::Error::from(e)))?;
    Ok(())
}
