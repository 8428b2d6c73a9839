use glob::Pattern;

use super::pure::{compile_patterns, matches_any};

/// File name globs that usually denote save or settings data
pub const SAVE_FILE_PATTERNS: &[&str] = &[
    "*.sav", "*.save", "*.dat", "*.bin", "*.cfg", "save*", "*.slot", "profile*", "*.bak",
    "*.json", "*.xml", "*.ini", "*.txt", "*.sl2",
];

/// Case-insensitive substrings that mark a file name as save-related
pub const SAVE_KEYWORDS: &[&str] = &["save", "profile", "config", "settings", "user", "player"];

/// Pattern and keyword table the classifier scores against
#[derive(Clone, Debug)]
pub struct Heuristics {
    pub patterns: Vec<Pattern>,
    /// Stored lowercase
    pub keywords: Vec<String>,
}

impl Heuristics {
    pub fn new<S: AsRef<str>>(patterns: &[S], keywords: &[S]) -> Self {
        Self {
            patterns: compile_patterns(patterns),
            keywords: keywords.iter().map(|k| k.as_ref().to_lowercase()).collect(),
        }
    }
}

impl Default for Heuristics {
    fn default() -> Self {
        Self::new(SAVE_FILE_PATTERNS, SAVE_KEYWORDS)
    }
}

/// Result of scoring one directory listing
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ListingScore {
    /// Regular files seen (subdirectories are not counted)
    pub total_files: usize,
    /// One point per file matching a pattern, one more if it also contains a keyword
    pub score: usize,
}

/// Selects backup-eligible files: must match an include glob and no exclude glob
#[derive(Clone, Debug)]
pub struct FileFilter {
    include: Vec<Pattern>,
    exclude: Vec<Pattern>,
}

impl FileFilter {
    pub fn new<S: AsRef<str>, T: AsRef<str>>(include: &[S], exclude: &[T]) -> Self {
        Self {
            include: compile_patterns(include),
            exclude: compile_patterns(exclude),
        }
    }

    pub fn accepts(&self, file_name: &str) -> bool {
        !matches_any(file_name, &self.exclude) && matches_any(file_name, &self.include)
    }
}
