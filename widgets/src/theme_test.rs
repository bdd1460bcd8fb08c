use super::*;

// =============================================================
// is_dark_stored
// =============================================================

#[test]
fn exact_true_restores_dark() {
    assert!(is_dark_stored(Some("true")));
}

#[test]
fn false_string_stays_light() {
    assert!(!is_dark_stored(Some("false")));
}

#[test]
fn missing_value_stays_light() {
    assert!(!is_dark_stored(None));
}

#[test]
fn near_miss_values_stay_light() {
    assert!(!is_dark_stored(Some("True")));
    assert!(!is_dark_stored(Some(" true")));
    assert!(!is_dark_stored(Some("true ")));
    assert!(!is_dark_stored(Some("1")));
    assert!(!is_dark_stored(Some("")));
}

// =============================================================
// stored_value
// =============================================================

#[test]
fn stored_value_strings() {
    assert_eq!(stored_value(true), "true");
    assert_eq!(stored_value(false), "false");
}

#[test]
fn toggle_twice_round_trips_flag() {
    let original = false;
    let once = !original;
    let twice = !once;
    assert_eq!(twice, original);
    assert_eq!(stored_value(twice), stored_value(original));
    assert_eq!(is_dark_stored(Some(stored_value(once))), once);
}
