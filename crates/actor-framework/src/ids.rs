//! # Id Generators
//!
//! A `ResourceActor` receives its id generator at construction as a plain
//! `Fn() -> Id` closure. These are the two generators the application uses.

use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// Returns a generator producing `"{prefix}_1"`, `"{prefix}_2"`, …
///
/// Deterministic, which makes it the generator of choice in tests.
pub fn sequential(prefix: &'static str) -> impl Fn() -> String + Send + Sync + 'static {
    let counter = AtomicU64::new(1);
    move || {
        let id = counter.fetch_add(1, Ordering::SeqCst);
        format!("{prefix}_{id}")
    }
}

/// Returns 32 lowercase hex characters (128 random bits).
pub fn random_hex() -> String {
    Uuid::new_v4().simple().to_string()
}
