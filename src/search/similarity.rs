//! Case-insensitive string similarity
//!
//! Exact matches score 1.0, containment scores a fixed 0.9, anything else
//! falls back to a Levenshtein ratio over grapheme clusters.

use unicode_segmentation::UnicodeSegmentation;

/// Score for a query contained in the target without being equal to it.
pub const CONTAINS_SCORE: f64 = 0.9;

/// Calculate the Levenshtein (edit) distance between two strings.
/// Returns the minimum number of single-grapheme edits (insertions,
/// deletions, or substitutions) required to change one string into the other.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_graphemes: Vec<&str> = a.graphemes(true).collect();
    let b_graphemes: Vec<&str> = b.graphemes(true).collect();
    distance(&a_graphemes, &b_graphemes)
}

fn distance(a: &[&str], b: &[&str]) -> usize {
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    // Two rows instead of the full matrix
    let mut prev_row: Vec<usize> = (0..=b.len()).collect();
    let mut curr_row: Vec<usize> = vec![0; b.len() + 1];

    for (i, a_grapheme) in a.iter().enumerate() {
        curr_row[0] = i + 1;

        for (j, b_grapheme) in b.iter().enumerate() {
            let cost = if a_grapheme == b_grapheme { 0 } else { 1 };

            curr_row[j + 1] = (prev_row[j + 1] + 1) // deletion
                .min(curr_row[j] + 1) // insertion
                .min(prev_row[j] + cost); // substitution
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[b.len()]
}

/// Normalized edit similarity: `(longest - distance) / longest`.
fn edit_ratio(a: &str, b: &str) -> f64 {
    let a_graphemes: Vec<&str> = a.graphemes(true).collect();
    let b_graphemes: Vec<&str> = b.graphemes(true).collect();
    let longest = a_graphemes.len().max(b_graphemes.len());
    if longest == 0 {
        return 1.0;
    }
    let edits = distance(&a_graphemes, &b_graphemes);
    (longest - edits) as f64 / longest as f64
}

/// Similarity between a query and a target text, in `[0, 1]`.
///
/// An empty target never matches.
pub fn similarity(query: &str, target: &str) -> f64 {
    if target.is_empty() {
        return 0.0;
    }

    let query_lower = query.to_lowercase();
    let target_lower = target.to_lowercase();

    if query_lower == target_lower {
        return 1.0;
    }
    if target_lower.contains(&query_lower) {
        return CONTAINS_SCORE;
    }
    edit_ratio(&query_lower, &target_lower)
}
