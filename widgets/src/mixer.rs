//! RGB mixer value parsing and formatting.

#[cfg(test)]
#[path = "mixer_test.rs"]
mod mixer_test;

/// Parse a channel input's raw string value.
///
/// Inputs are nominally 0–255 but are not validated here; out-of-range
/// numbers pass through unchanged and unparseable text falls back to `0`.
#[must_use]
pub fn channel_value(raw: &str) -> i64 {
    raw.trim().parse().unwrap_or(0)
}

/// CSS color string for the mixed channels, also used as the label text.
#[must_use]
pub fn rgb_css(r: i64, g: i64, b: i64) -> String {
    format!("rgb({r}, {g}, {b})")
}
