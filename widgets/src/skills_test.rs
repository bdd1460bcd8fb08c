use super::*;

#[test]
fn merge_drops_duplicates_and_keeps_order() {
    let merged = merge_unique(&CORE, &EXTRA);
    assert_eq!(merged, ["Unity", "Python", "Cybersecurity", "Raspberry Pi", "Automation"]);
}

#[test]
fn merge_of_disjoint_lists_keeps_everything() {
    let merged = merge_unique(&["a", "b"], &["c"]);
    assert_eq!(merged, ["a", "b", "c"]);
}

#[test]
fn merge_is_case_sensitive_exact_equality() {
    let merged = merge_unique(&["Unity"], &["unity"]);
    assert_eq!(merged.len(), 2);
}

#[test]
fn empty_inputs_merge_to_empty() {
    assert!(merge_unique(&[], &[]).is_empty());
}

#[test]
fn joined_uses_bullet_separator() {
    let merged = merge_unique(&["a", "b"], &[]);
    assert_eq!(joined(&merged), "a \u{2022} b");
}
