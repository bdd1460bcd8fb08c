//! Tech-keyword matching for the achievement list.

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

/// Keywords that mark an achievement as tech-related.
///
/// Matched as substrings of the lower-cased text, so `"ai"` also hits
/// words that merely contain it. That looseness is part of the observed
/// behavior and is kept as-is.
pub const TECH_KEYWORDS: [&str; 9] = [
    "python",
    "unity",
    "game",
    "raspberry",
    "ai",
    "tool",
    "hacking",
    "security",
    "c#",
];

/// Whether an achievement's text counts as tech-related.
#[must_use]
pub fn is_tech(text: &str) -> bool {
    let lower = text.to_lowercase();
    TECH_KEYWORDS.iter().any(|k| lower.contains(k))
}
