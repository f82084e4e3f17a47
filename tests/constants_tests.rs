// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn scroll_thresholds_are_ordered() {
    // navbar restyles before the back-to-top button appears
    assert!(NAVBAR_SCROLLED_THRESHOLD_PX < BACK_TO_TOP_THRESHOLD_PX);
    assert!(ACTIVE_SECTION_LOOKAHEAD_PX > 0.0);
    assert!(ANCHOR_SCROLL_OFFSET_PX > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn typewriter_pacing_is_sensible() {
    assert!(DELETE_DELAY_MS < TYPE_DELAY_MS);
    assert!(TYPE_DELAY_MS < PAUSE_AT_FULL_MS);
    assert!(TYPEWRITER_START_DELAY_MS > 0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn particle_ranges_are_positive() {
    assert!(MAX_PARTICLES > 0);
    assert!(VIEWPORT_PX_PER_PARTICLE > 0.0);
    assert!(PARTICLE_SIZE_MIN_PX > 0.0 && PARTICLE_SIZE_SPAN_PX > 0.0);
    assert!(PARTICLE_DURATION_MIN_SEC > 0.0 && PARTICLE_DURATION_SPAN_SEC > 0.0);
    assert!(PARTICLE_DRIFT_STEP_PERCENT > 0.0 && PARTICLE_DRIFT_STEP_PERCENT < 100.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn timings_nest_correctly() {
    // toasts are fully shown before they auto-dismiss
    assert!(NOTIFICATION_SHOW_MS < NOTIFICATION_AUTO_DISMISS_MS);
    assert!(LOADING_REMOVE_MS < LOADING_HIDE_MS);
    assert!(CARD_HOVER_INIT_MS < TOOLTIP_INIT_MS);
    assert!(REVEAL_THRESHOLD > 0.0 && REVEAL_THRESHOLD <= 1.0);
    assert_eq!(THEME_STORAGE_KEY, "theme");
}
