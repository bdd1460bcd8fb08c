use super::*;

#[test]
fn full_report_line() {
    let line = summary("TestAgent/1.0", Some("en-US"), true);
    assert_eq!(line, "User agent: TestAgent/1.0 | Language: en-US | Network: online");
}

#[test]
fn missing_language_defaults_to_en() {
    let line = summary("TestAgent/1.0", None, true);
    assert!(line.contains("| Language: en |"));
}

#[test]
fn offline_status() {
    let line = summary("TestAgent/1.0", Some("de"), false);
    assert!(line.ends_with("| Network: offline"));
}

#[test]
fn idempotent_for_same_inputs() {
    let a = summary("UA", Some("fr"), true);
    let b = summary("UA", Some("fr"), true);
    assert_eq!(a, b);
}
