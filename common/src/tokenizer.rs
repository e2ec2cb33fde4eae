//! Operator name tokenizer
//!
//! Names are lowercased and trimmed, every character other than an ASCII
//! letter, digit or space is removed (not replaced), and the rest is split
//! on whitespace. `"O.K. Lines-2"` therefore becomes `{"ok", "lines2"}`.

use regex::Regex;
use std::collections::HashSet;

lazy_static::lazy_static! {
    static ref NON_TOKEN_RE: Regex = Regex::new(r"[^a-zA-Z0-9 ]").unwrap();
}

/// Split a free-text name into its set of normalized word tokens.
///
/// # Examples
/// ```
/// use vessel_mapper_common::tokenize;
///
/// let tokens = tokenize("  Maersk Line A/S ");
/// assert_eq!(tokens.len(), 3);
/// assert!(tokens.contains("as"));
/// assert!(tokenize("   ").is_empty());
/// ```
pub fn tokenize(name: &str) -> HashSet<String> {
    let lowered = name.to_lowercase();
    let cleaned = NON_TOKEN_RE.replace_all(lowered.trim(), "");
    cleaned.split_whitespace().map(str::to_string).collect()
}

/// Tokenize an optional name; a missing name has no tokens.
pub fn tokenize_opt(name: Option<&str>) -> HashSet<String> {
    name.map(tokenize).unwrap_or_default()
}
