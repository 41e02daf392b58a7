// Host-side tests for the outstanding frame request bookkeeping.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod pending {
    include!("../src/pending.rs");
}

use pending::*;

#[test]
fn starts_idle() {
    assert!(PendingFrame::default().is_idle());
}

#[test]
fn take_hands_over_the_handle_once() {
    let mut pending = PendingFrame::Animation(7);
    assert!(!pending.is_idle());
    assert_eq!(pending.take(), PendingFrame::Animation(7));
    assert!(pending.is_idle());
    // a second teardown finds nothing left to cancel
    assert_eq!(pending.take(), PendingFrame::Idle);
}

#[test]
fn timeout_fallback_is_tracked_separately() {
    let mut pending = PendingFrame::Timeout(3);
    assert_eq!(pending.take(), PendingFrame::Timeout(3));
    assert!(pending.is_idle());
}
