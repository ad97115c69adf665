//! Whole-word identifier location in rendered text.

use once_cell::sync::Lazy;
use regex::Regex;

// Maximal identifier-character runs; compiled once for the whole process.
static WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Za-z0-9_]+").expect("word pattern is valid"));

/// 1-based number of the first line containing `ident` on a whole-word
/// boundary, or `None` if no line matches.
///
/// Lines are scanned as runs of `[A-Za-z0-9_]`, so `price` never matches
/// inside `sum_price`.
pub fn locate_identifier(text: &str, ident: &str) -> Option<usize> {
    text.lines()
        .position(|line| WORD.find_iter(line).any(|m| m.as_str() == ident))
        .map(|i| i + 1)
}
