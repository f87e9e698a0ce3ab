//! Product code rules.
//!
//! A canonical product code is four groups of four upper-case letters or
//! digits joined by hyphens, e.g. `AB12-CD34-EF56-GH78`.

use once_cell::sync::Lazy;
use regex::Regex;

/// Number of significant characters in a product code (hyphens excluded).
pub const CODE_CHARS: usize = 16;

/// Characters per hyphen-separated group.
pub const GROUP_LEN: usize = 4;

static PRODUCT_CODE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Z0-9]{4}-[A-Z0-9]{4}-[A-Z0-9]{4}-[A-Z0-9]{4}$")
        .expect("Invalid product code regex")
});

/// Check whether `code` is in canonical `XXXX-XXXX-XXXX-XXXX` form.
pub fn validate(code: &str) -> bool {
    PRODUCT_CODE_REGEX.is_match(code)
}

/// Reshape partially typed input into the canonical grouping.
///
/// Existing hyphens are dropped, the remainder is cut to 16 characters and a
/// hyphen is placed between every group of four. Characters are not
/// filtered or re-cased here; see [`sanitize_keystroke`].
pub fn format_while_typing(code: &str) -> String {
    let mut formatted = String::with_capacity(CODE_CHARS + 3);
    for (i, c) in code.chars().filter(|c| *c != '-').take(CODE_CHARS).enumerate() {
        if i > 0 && i % GROUP_LEN == 0 {
            formatted.push('-');
        }
        formatted.push(c);
    }
    formatted
}

/// Upper-case raw input and drop anything outside `A-Z`, `0-9` and `-`.
pub fn sanitize_keystroke(raw: &str) -> String {
    raw.to_uppercase()
        .chars()
        .filter(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || *c == '-')
        .collect()
}
