use super::*;
use std::sync::atomic::{AtomicUsize, Ordering};

#[test]
fn clones_are_identical() {
    let f = TestFn::new(|| {});
    let g = f.clone();
    assert_eq!(f, g);
    assert!(f.ptr_eq(&g));
}

#[test]
fn separately_wrapped_closures_differ() {
    let f = TestFn::new(|| {});
    let g = TestFn::new(|| {});
    assert_ne!(f, g);
}

#[test]
fn call_runs_body() {
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&hits);
    let f = TestFn::new(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    f.call();
    f.clone().call();

    assert_eq!(hits.load(Ordering::SeqCst), 2);
}

#[test]
fn debug_shows_address() {
    let f = TestFn::new(|| {});
    assert!(format!("{f:?}").starts_with("TestFn(0x"));
}
