// Save-location extraction from PCGamingWiki markup (pure functions)
//
// Two passes over the page:
//   1. Section scan: lines inside a `{{Game data/saves ...` template that
//      carry a `{{P|...}}` path template are split on `|` and the segments
//      holding a substituted placeholder are kept.
//   2. Fallback, only when the section scan found nothing: a few common
//      path prefixes are searched anywhere in the page and the text right
//      after the match is taken as the path.
// Missing or malformed structure never fails; it just yields fewer paths.

use regex::{Captures, Regex};
use std::collections::HashSet;
use std::sync::LazyLock;

const SECTION_OPEN: &str = "{{Game data/saves";
const SECTION_CLOSE: &str = "}}";
const PATH_MARKER: &str = "{{p|";

/// Wiki path templates and the placeholders they become
const PLACEHOLDER_MAP: &[(&str, &str)] = &[
    ("userprofile\\documents", "%USERPROFILE%\\Documents"),
    ("userprofile", "%USERPROFILE%"),
    ("appdata", "%APPDATA%"),
    ("localappdata", "%LOCALAPPDATA%"),
    ("game", "%GAME_DIR%"),
    ("documents", "%USERPROFILE%\\Documents"),
];

const SUBSTITUTED_TOKENS: &[&str] = &["%USERPROFILE%", "%APPDATA%", "%LOCALAPPDATA%", "%GAME_DIR%"];

const COMMON_PATTERNS: &[&str] = &[
    "{{P|userprofile}}\\Documents\\My Games\\",
    "{{P|appdata}}\\",
    "{{P|localappdata}}\\",
    "{{P|userprofile}}\\Saved Games\\",
];

/// Bytes after a common-pattern match that may belong to the path
const FALLBACK_WINDOW: usize = 100;

static PATH_TEMPLATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\{\{p\|(userprofile\\documents|userprofile|appdata|localappdata|game|documents)\}\}")
        .expect("static regex")
});

/// Replace known `{{P|...}}` templates with placeholder tokens
pub fn substitute_placeholders(text: &str) -> String {
    PATH_TEMPLATE
        .replace_all(text, |caps: &Captures| {
            let key = caps[1].to_lowercase();
            PLACEHOLDER_MAP
                .iter()
                .find(|(name, _)| *name == key)
                .map(|(_, token)| token.to_string())
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

fn has_path_marker(line: &str) -> bool {
    line.to_ascii_lowercase().contains(PATH_MARKER)
}

fn brace_balance(text: &str) -> isize {
    text.matches("{{").count() as isize - text.matches("}}").count() as isize
}

/// Pipe-separated segments of one line that hold a substituted placeholder
/// and no leftover template opener.
pub fn extract_paths_from_line(line: &str) -> Vec<String> {
    substitute_placeholders(line)
        .split('|')
        .map(str::trim)
        .filter(|part| SUBSTITUTED_TOKENS.iter().any(|t| part.contains(t)))
        .filter(|part| !part.contains("{{"))
        .map(str::to_string)
        .collect()
}

/// Strip leftover markup, whitespace and quotes from an extracted path
pub fn clean_path(path: &str) -> String {
    let substituted = substitute_placeholders(path);
    let stripped = substituted.replace("{{", "").replace("}}", "").replace('|', "");
    stripped
        .trim()
        .trim_matches(|c: char| c == '"' || c == '\'')
        .trim()
        .to_string()
}

/// Clean every path, drop empties and duplicates, keep first-seen order
pub fn clean_and_dedupe(paths: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut seen = HashSet::new();
    paths
        .into_iter()
        .map(|p| clean_path(&p))
        .filter(|p| !p.is_empty() && seen.insert(p.clone()))
        .collect()
}

fn scan_save_section(markup: &str) -> Vec<String> {
    let mut found = Vec::new();
    let mut in_section = false;

    for raw in markup.lines() {
        let line = raw.trim();

        if let Some(idx) = line.find(SECTION_OPEN) {
            let tail = &line[idx..];
            if has_path_marker(tail) {
                found.extend(extract_paths_from_line(tail));
            }
            // a template closed on its own line leaves no open section
            in_section = brace_balance(tail) > 0;
            continue;
        }

        if in_section && line.starts_with(SECTION_CLOSE) {
            in_section = false;
            continue;
        }

        if in_section && has_path_marker(line) {
            found.extend(extract_paths_from_line(line));
        }
    }

    found
}

fn floor_char_boundary(text: &str, mut index: usize) -> usize {
    while index > 0 && !text.is_char_boundary(index) {
        index -= 1;
    }
    index
}

fn scan_common_patterns(markup: &str) -> Vec<String> {
    COMMON_PATTERNS
        .iter()
        .filter_map(|pattern| {
            let start = markup.find(pattern)?;
            let end = floor_char_boundary(markup, (start + pattern.len() + FALLBACK_WINDOW).min(markup.len()));
            markup[start..end].lines().next().map(str::to_string)
        })
        .collect()
}

/// Extract save-path templates from a page's wikitext.
pub fn parse_save_templates(markup: &str) -> Vec<String> {
    let from_section = clean_and_dedupe(scan_save_section(markup));
    if !from_section.is_empty() {
        return from_section;
    }
    clean_and_dedupe(scan_common_patterns(markup))
}
