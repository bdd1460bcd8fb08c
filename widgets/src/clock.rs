//! Live clock formatting.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

/// Format hours, minutes, and seconds as zero-padded 24-hour `HH:MM:SS`.
#[must_use]
pub fn format_hms(hours: u32, minutes: u32, seconds: u32) -> String {
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}
