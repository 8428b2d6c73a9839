// Case-insensitive glob matching on file names

use glob::Pattern;

/// Compile globs lowercased; invalid ones are logged and skipped
pub fn compile_patterns<S: AsRef<str>>(globs: &[S]) -> Vec<Pattern> {
    globs
        .iter()
        .filter_map(|glob| match Pattern::new(&glob.as_ref().to_lowercase()) {
            Ok(pattern) => Some(pattern),
            Err(e) => {
                tracing::warn!("Invalid glob pattern '{}': {}", glob.as_ref(), e);
                None
            }
        })
        .collect()
}

pub fn matches_any(file_name: &str, patterns: &[Pattern]) -> bool {
    let lower = file_name.to_lowercase();
    patterns.iter().any(|p| p.matches(&lower))
}
