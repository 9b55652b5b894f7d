use super::*;

const MARKER: &str = "//";

#[test]
fn plain_name_is_kept() {
    assert_eq!(
        clean_name("test 1", MARKER),
        CleanName {
            name: "test 1".into(),
            deferred: false,
        }
    );
}

#[test]
fn surrounding_whitespace_is_trimmed() {
    let cleaned = clean_name("  spaced out \t", MARKER);
    assert_eq!(cleaned.name, "spaced out");
    assert!(!cleaned.deferred);
}

#[test]
fn leading_marker_defers() {
    let cleaned = clean_name("//test", MARKER);
    assert_eq!(cleaned.name, "test");
    assert!(cleaned.deferred);
}

#[test]
fn marker_after_whitespace_defers() {
    let cleaned = clean_name("   // test", MARKER);
    assert_eq!(cleaned.name, "test");
    assert!(cleaned.deferred);
}

#[test]
fn marker_inside_name_is_kept() {
    let cleaned = clean_name("parses a // comment", MARKER);
    assert_eq!(cleaned.name, "parses a // comment");
    assert!(!cleaned.deferred);
}

#[test]
fn single_slash_is_not_a_marker() {
    let cleaned = clean_name("/path", MARKER);
    assert_eq!(cleaned.name, "/path");
    assert!(!cleaned.deferred);
}

#[test]
fn only_first_marker_is_stripped() {
    let cleaned = clean_name("// // twice", MARKER);
    assert_eq!(cleaned.name, "// twice");
    assert!(cleaned.deferred);
}

#[test]
fn custom_marker() {
    let cleaned = clean_name("  xit works", "xit");
    assert_eq!(cleaned.name, "works");
    assert!(cleaned.deferred);
    assert!(!clean_name("// works", "xit").deferred);
}

#[test]
fn empty_marker_disables_deferral() {
    let cleaned = clean_name(" // test ", "");
    assert_eq!(cleaned.name, "// test");
    assert!(!cleaned.deferred);
}
