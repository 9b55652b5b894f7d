//! Walks a built tree the way an execution engine does.
//!
//! Each runnable test gets its context's `setUp` chain, its body and its
//! `tearDown` chain; deferred tests and contexts with unmet requirements are
//! reported without running anything.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use std::sync::Arc;

use casetree::{
    build_context, ContextTree, DeclMap, Declaration, FeatureSet, FeatureSupport, TestContext,
};
use parking_lot::Mutex;
use pretty_assertions::assert_eq;

#[derive(Debug, PartialEq, Eq)]
enum Report {
    Passed(String),
    Pending(String),
    Skipped { context: String, reason: String },
}

fn run(tree: &ContextTree, support: &impl FeatureSupport) -> Vec<Report> {
    let mut reports = Vec::new();
    run_context(tree.root(), support, &mut reports);
    reports
}

fn run_context(context: TestContext<'_>, support: &impl FeatureSupport, out: &mut Vec<Report>) {
    if let Some(reason) = context.unsupported_reason(support) {
        out.push(Report::Skipped {
            context: context.full_name(),
            reason,
        });
        return;
    }
    for test in context.tests() {
        match test.func() {
            Some(body) if !test.deferred() => {
                for hook in context.set_up_chain() {
                    hook.call();
                }
                body.call();
                for hook in context.tear_down_chain() {
                    hook.call();
                }
                out.push(Report::Passed(test.full_name()));
            }
            _ => out.push(Report::Pending(test.full_name())),
        }
    }
    for child in context.contexts() {
        run_context(child, support, out);
    }
}

fn recorder() -> (Arc<Mutex<Vec<String>>>, impl Fn(&str) -> casetree::TestFn) {
    let log: Arc<Mutex<Vec<String>>> = Arc::default();
    let sink = Arc::clone(&log);
    let step = move |label: &str| {
        let sink = Arc::clone(&sink);
        let label = label.to_owned();
        casetree::TestFn::new(move || sink.lock().push(label.clone()))
    };
    (log, step)
}

#[test]
fn hooks_wrap_each_test_outermost_first() {
    let (log, step) = recorder();
    let decl = DeclMap::new()
        .entry("setUp", step("outer setUp"))
        .entry("tearDown", step("outer tearDown"))
        .context(
            "inner",
            DeclMap::new()
                .entry("setUp", step("inner setUp"))
                .entry("tearDown", step("inner tearDown"))
                .entry("works", step("works")),
        );
    let tree = build_context("Suite", &Declaration::Map(decl)).unwrap();

    let reports = run(&tree, &FeatureSet::new());

    assert_eq!(reports, vec![Report::Passed("Suite inner works".into())]);
    assert_eq!(
        *log.lock(),
        vec![
            "outer setUp",
            "inner setUp",
            "works",
            "inner tearDown",
            "outer tearDown",
        ]
    );
}

#[test]
fn deferred_tests_are_reported_not_run() {
    let (log, step) = recorder();
    let decl = DeclMap::new()
        .entry("setUp", step("setUp"))
        .entry("// skipped", step("skipped body"))
        .pending("described", "Later, peeps")
        .context("// up next", DeclMap::new().entry("feature", step("feature body")));
    let tree = build_context("Suite", &Declaration::Map(decl)).unwrap();

    let reports = run(&tree, &FeatureSet::new());

    assert_eq!(
        reports,
        vec![
            Report::Pending("Suite skipped".into()),
            Report::Pending("Suite described".into()),
            Report::Pending("Suite up next feature".into()),
        ]
    );
    assert!(log.lock().is_empty());
}

#[test]
fn contexts_with_unmet_requirements_are_skipped() {
    let (log, step) = recorder();
    let decl = DeclMap::new()
        .context(
            "needs gpu",
            DeclMap::new()
                .requires_support_for_all(["gpu"])
                .entry("renders", step("renders")),
        )
        .context(
            "needs a shell",
            DeclMap::new()
                .requires_support_for_any(["bash", "zsh"])
                .entry("spawns", step("spawns")),
        );
    let tree = build_context("Suite", &Declaration::Map(decl)).unwrap();

    let zsh: FeatureSet = ["zsh"].into_iter().collect();
    let reports = run(&tree, &zsh);

    assert_eq!(
        reports,
        vec![
            Report::Skipped {
                context: "Suite needs gpu".into(),
                reason: "requires support for all of: gpu".into(),
            },
            Report::Passed("Suite needs a shell spawns".into()),
        ]
    );
    assert_eq!(*log.lock(), vec!["spawns"]);
}
