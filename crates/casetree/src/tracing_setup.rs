//! Logging setup.
//!
//! The library only emits `tracing` events. Binaries and test harnesses that
//! want to see them call [`init_tracing`]:
//!
//! - `RUST_LOG=casetree=debug`: one event per context built.
//! - `RUST_LOG=casetree=trace`: every classified entry.
//! - `CASETREE_LOG_TREE=1`: indent output by span nesting instead of
//!   plain lines.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install a global subscriber for casetree's events.
///
/// Does nothing unless `RUST_LOG` is set. Safe to call more than once, and
/// leaves an already installed subscriber alone.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var_os("RUST_LOG").is_none() {
            return;
        }
        let filter = EnvFilter::from_default_env();

        // `try_init` fails only when another subscriber is already set.
        let _ = if std::env::var_os("CASETREE_LOG_TREE").is_some() {
            tracing_subscriber::registry()
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_bracketed_fields(true),
                )
                .with(filter)
                .try_init()
        } else {
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init()
        };
    });
}
