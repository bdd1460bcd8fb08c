#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn not_scrollable_is_zero() {
    assert_eq!(progress_percent(0.0, 500.0, 800.0), 0.0);
    assert_eq!(progress_percent(100.0, 800.0, 800.0), 0.0);
}

#[test]
fn top_of_page_is_zero() {
    assert_eq!(progress_percent(0.0, 2000.0, 800.0), 0.0);
}

#[test]
fn max_scroll_is_hundred() {
    assert_eq!(progress_percent(1200.0, 2000.0, 800.0), 100.0);
}

#[test]
fn midpoint_is_fifty() {
    assert_eq!(progress_percent(600.0, 2000.0, 800.0), 50.0);
}
