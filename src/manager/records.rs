// Build catalog records from knowledge-source candidates

use tracing::debug;

use crate::catalog::{ApplicationRecord, Platform};
use crate::detect::{SAVE_FILE_PATTERNS, generate_id};
use crate::error::{Result, SaveError};
use crate::expand::{EnvView, expand, expand_strict};
use crate::pcgw::{SearchResult, Selection};

fn insert_if_set(record: &mut ApplicationRecord, key: &str, value: &str) {
    if !value.is_empty() {
        record.metadata.insert(key.to_string(), value.to_string());
    }
}

/// Wiki templates use Windows separators
fn native_separators(template: &str) -> String {
    if cfg!(windows) {
        template.to_string()
    } else {
        template.replace('\\', "/")
    }
}

/// Record for `name` from a candidate: templates that resolve on this
/// machine are stored expanded, the rest are dropped.
pub fn from_candidate(name: &str, candidate: &SearchResult, env: &EnvView) -> ApplicationRecord {
    let display_name = if candidate.name.is_empty() { name } else { candidate.name.as_str() };
    let mut record = ApplicationRecord::new(generate_id(name), display_name, Platform::Pcgw);
    record.file_patterns = SAVE_FILE_PATTERNS.iter().map(|p| p.to_string()).collect();

    for template in &candidate.save_paths {
        let template = native_separators(template);
        match expand_strict(&template, env) {
            Ok(path) => {
                let path = path.to_string_lossy().into_owned();
                if !record.save_paths.contains(&path) {
                    record.save_paths.push(path);
                }
            }
            Err(e) => debug!(
                "{}: dropping save path {}: {}",
                record.id,
                expand(&template, env),
                e
            ),
        }
    }

    insert_if_set(&mut record, "pcgw_page_id", &candidate.page_id);
    insert_if_set(&mut record, "steam_app_id", &candidate.steam_app_id);
    insert_if_set(&mut record, "release_date", &candidate.release_date);
    insert_if_set(&mut record, "cover_url", &candidate.cover_url);
    record
}

/// Record for a user's selection: the chosen candidate's paths plus an
/// optional custom path
pub fn from_selection(selection: &Selection, env: &EnvView) -> Result<ApplicationRecord> {
    let custom_path = selection
        .custom_path
        .as_deref()
        .map(str::trim)
        .filter(|p| !p.is_empty());

    let name = match (selection.name.trim(), &selection.selected) {
        ("", Some(candidate)) => candidate.name.clone(),
        (name, _) => name.to_string(),
    };
    if name.is_empty() {
        return Err(SaveError::Validation("application name is empty".to_string()));
    }

    let mut record = match &selection.selected {
        Some(candidate) => from_candidate(&name, candidate, env),
        None if custom_path.is_some() => {
            let mut record = ApplicationRecord::new(generate_id(&name), name.as_str(), Platform::Pcgw);
            record.file_patterns = SAVE_FILE_PATTERNS.iter().map(|p| p.to_string()).collect();
            record
        }
        None => {
            return Err(SaveError::Validation(format!(
                "nothing selected for {} and no custom path given",
                name
            )));
        }
    };

    if let Some(custom) = custom_path {
        let path = expand_strict(custom, env)?.to_string_lossy().into_owned();
        if !record.save_paths.contains(&path) {
            record.save_paths.push(path.clone());
        }
        record.custom_paths.push(path);
    }

    Ok(record)
}
