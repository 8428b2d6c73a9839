// Record id and display-name derivation

use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;
use std::time::{SystemTime, UNIX_EPOCH};

static NON_SLUG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9\-_]").expect("static regex"));

/// Last path component, accepting both separator styles
fn last_component(source: &str) -> &str {
    let trimmed = source.trim_end_matches(['/', '\\']);
    trimmed.rsplit(['/', '\\']).next().unwrap_or(trimmed)
}

/// Stable slug for a path or application name
pub fn generate_id(source: &str) -> String {
    let base = last_component(source).to_lowercase();
    let slug = NON_SLUG.replace_all(&base, "-");
    let slug = slug.trim_matches('-');
    if slug.is_empty() {
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        return format!("unknown-game-{}", secs);
    }
    slug.to_string()
}

/// Human-friendly name from a directory: separators become spaces, words title-cased
pub fn infer_name(path: &Path) -> String {
    let Some(dir) = path.file_name() else {
        return "Unknown Game".to_string();
    };
    let spaced = dir.to_string_lossy().replace(['_', '-'], " ");
    let words: Vec<String> = spaced
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect();
    if words.is_empty() {
        "Unknown Game".to_string()
    } else {
        words.join(" ")
    }
}
