// Save-directory scoring (pure functions)

use crate::detect::types::{Heuristics, ListingScore};

use super::patterns::matches_any;

/// Score the file names of one directory listing.
///
/// A file earns a point for matching any pattern and another for containing
/// any keyword, so a single file can contribute two points.
pub fn score_listing<S: AsRef<str>>(file_names: &[S], heuristics: &Heuristics) -> ListingScore {
    let mut result = ListingScore::default();

    for name in file_names {
        result.total_files += 1;
        let lower = name.as_ref().to_lowercase();

        if matches_any(&lower, &heuristics.patterns) {
            result.score += 1;
        }
        if heuristics.keywords.iter().any(|k| lower.contains(k.as_str())) {
            result.score += 1;
        }
    }

    result
}

/// Classification rule: at least one scoring file.
///
/// The small-directory clause (`0 < total < 20 && score > 0`) is implied by
/// `score >= 1`, so it never changes the outcome.
pub fn is_save_listing(listing: &ListingScore) -> bool {
    let small_with_hits = listing.total_files > 0 && listing.total_files < 20 && listing.score > 0;
    listing.score >= 1 || small_with_hits
}
