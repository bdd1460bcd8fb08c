//! Browser info summary line.

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

/// Format the single-line browser report.
///
/// The language falls back to `"en"` when the browser reports none.
#[must_use]
pub fn summary(user_agent: &str, language: Option<&str>, online: bool) -> String {
    let lang = language.unwrap_or("en");
    let network = if online { "online" } else { "offline" };
    format!("User agent: {user_agent} | Language: {lang} | Network: {network}")
}
