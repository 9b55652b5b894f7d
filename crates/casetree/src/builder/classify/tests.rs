use super::*;

const MARKER: &str = "//";

#[test]
fn hooks_are_recognized_by_exact_key() {
    let f = Declaration::func(|| {});
    let expected = f.as_func().cloned();

    assert!(matches!(
        classify("setUp", &f, MARKER),
        Entry::Hook(Hook::SetUp, g) if Some(g) == expected.as_ref()
    ));
    assert!(matches!(
        classify("tearDown", &f, MARKER),
        Entry::Hook(Hook::TearDown, _)
    ));
    // Near misses are ordinary tests.
    assert!(matches!(classify("setup", &f, MARKER), Entry::Test { .. }));
    assert!(matches!(classify(" setUp", &f, MARKER), Entry::Test { .. }));
}

#[test]
fn non_function_hook_is_ignored() {
    let v = Declaration::from("not a function");
    assert_eq!(
        classify("setUp", &v, MARKER),
        Entry::Ignored(Ignored::HookNotFunction(DeclKind::String))
    );
}

#[test]
fn requirement_keys_keep_value_verbatim() {
    let block = Declaration::Map(DeclMap::new().entry("featureA", true));

    for (key, expected) in [
        ("requiresSupportForAll", RequirementKey::All),
        ("requiresSupportFor", RequirementKey::AllAlias),
        ("requiresSupportForAny", RequirementKey::Any),
    ] {
        assert_eq!(
            classify(key, &block, MARKER),
            Entry::Requirement(expected, &block)
        );
        assert_eq!(expected.as_str(), key);
    }
}

#[test]
fn null_is_ignored() {
    assert_eq!(
        classify("doingIt", &Declaration::Null, MARKER),
        Entry::Ignored(Ignored::Null)
    );
}

#[test]
fn scalars_are_ignored() {
    assert_eq!(
        classify("id", &Declaration::from(42), MARKER),
        Entry::Ignored(Ignored::Unsupported(DeclKind::Number))
    );
    assert_eq!(
        classify("flag", &Declaration::from(true), MARKER),
        Entry::Ignored(Ignored::Unsupported(DeclKind::Boolean))
    );
}

#[test]
fn function_becomes_runnable_test() {
    let f = Declaration::func(|| {});
    let Entry::Test {
        name,
        body,
        deferred,
    } = classify("  test 1 ", &f, MARKER)
    else {
        panic!("expected a test entry");
    };

    assert_eq!(name, "test 1");
    assert!(!deferred);
    assert_eq!(Some(&body), f.as_func().cloned().map(TestBody::Runnable).as_ref());
}

#[test]
fn marked_function_is_deferred() {
    let f = Declaration::func(|| {});
    let entry = classify("   // test", &f, MARKER);
    assert!(matches!(
        entry,
        Entry::Test { ref name, deferred: true, .. } if name == "test"
    ));
}

#[test]
fn string_becomes_deferred_test_with_comment() {
    let v = Declaration::from("Later, peeps");
    assert_eq!(
        classify("// test", &v, MARKER),
        Entry::Test {
            name: "test".into(),
            body: TestBody::Deferred {
                comment: "Later, peeps".into(),
            },
            deferred: true,
        }
    );
}

#[test]
fn mapping_becomes_context() {
    let v = Declaration::Map(DeclMap::new().test("a", || {}));
    let Entry::Context {
        name,
        deferred,
        body,
    } = classify("// up next", &v, MARKER)
    else {
        panic!("expected a context entry");
    };

    assert_eq!(name, "up next");
    assert!(deferred);
    assert_eq!(body.len(), 1);
}
