//! Order-preserving skill list merge.

#[cfg(test)]
#[path = "skills_test.rs"]
mod skills_test;

/// Core skill list.
pub const CORE: [&str; 3] = ["Unity", "Python", "Cybersecurity"];

/// Additional skills, overlapping with [`CORE`].
pub const EXTRA: [&str; 3] = ["Raspberry Pi", "Automation", "Unity"];

/// Separator glyph between rendered skills.
pub const SEPARATOR: &str = " \u{2022} ";

/// Concatenate two lists and drop exact duplicates, keeping the first
/// occurrence of each value in order.
#[must_use]
pub fn merge_unique(first: &[&str], second: &[&str]) -> Vec<String> {
    let mut merged: Vec<String> = Vec::with_capacity(first.len() + second.len());
    for skill in first.iter().chain(second) {
        if !merged.iter().any(|s| s == skill) {
            merged.push((*skill).to_owned());
        }
    }
    merged
}

/// Join a merged list for display.
#[must_use]
pub fn joined(skills: &[String]) -> String {
    skills.join(SEPARATOR)
}
