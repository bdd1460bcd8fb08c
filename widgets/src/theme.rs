//! Dark-mode flag semantics.
//!
//! The preference is persisted as the literal string `"true"` or
//! `"false"`. Only an exact `"true"` restores dark mode; any other value,
//! including a missing entry, falls back to the light default.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// localStorage key for the dark-mode flag.
pub const STORAGE_KEY: &str = "prefersDark";

/// Whether a stored value means dark mode.
#[must_use]
pub fn is_dark_stored(stored: Option<&str>) -> bool {
    stored == Some("true")
}

/// The string persisted for a dark-mode flag.
#[must_use]
pub fn stored_value(dark: bool) -> &'static str {
    if dark { "true" } else { "false" }
}
