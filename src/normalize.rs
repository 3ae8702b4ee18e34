//! Canonical form for suburb-name comparison.

use unicode_normalization::UnicodeNormalization;

/// Combining diacritical marks stripped after NFD decomposition.
const COMBINING_MARKS: std::ops::RangeInclusive<char> = '\u{0300}'..='\u{036f}';

/// Characters ignored entirely when comparing names.
const IGNORED: [char; 5] = [' ', '-', '\'', '(', ')'];

/// Canonicalize a suburb name for matching: decompose accents, drop the
/// diacritic marks, drop spaces/hyphens/apostrophes/parentheses, lowercase.
/// Two names are the same submission iff their canonical forms are equal.
/// Display always uses the original catalog name, never this form.
#[must_use]
pub fn sanitize_name(name: &str) -> String {
    name.nfd()
        .filter(|c| !COMBINING_MARKS.contains(c))
        .filter(|c| !IGNORED.contains(c))
        .flat_map(char::to_lowercase)
        .collect()
}
