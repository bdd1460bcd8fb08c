//! Scroll progress percentage math.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Percentage of the scrollable distance already scrolled.
///
/// Returns `0.0` when the page is not scrollable (content height does not
/// exceed the viewport height). Values are not otherwise clamped — the
/// browser never reports a scroll offset past the maximum.
#[must_use]
pub fn progress_percent(scrolled: f64, page_height: f64, viewport_height: f64) -> f64 {
    let max = page_height - viewport_height;
    if max > 0.0 { scrolled / max * 100.0 } else { 0.0 }
}
