// Host-side tests for the Konami sequence matcher.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod konami {
    include!("../src/core/konami.rs");
}

use konami::*;

fn feed(m: &mut KonamiMatcher, keys: &[&str]) -> Vec<bool> {
    keys.iter().map(|k| m.push(k)).collect()
}

#[test]
fn exact_sequence_fires_on_last_key() {
    let mut m = KonamiMatcher::new();
    let fired = feed(&mut m, &KONAMI_SEQUENCE);
    assert_eq!(fired.iter().filter(|f| **f).count(), 1);
    assert!(fired[KONAMI_SEQUENCE.len() - 1]);
    assert_eq!(m.buffered(), 0);
}

#[test]
fn noise_before_sequence_is_ignored() {
    let mut m = KonamiMatcher::new();
    feed(&mut m, &["x", "Enter", "ArrowUp", "a"]);
    let fired = feed(&mut m, &KONAMI_SEQUENCE);
    assert!(*fired.last().unwrap());
}

#[test]
fn extra_leading_key_still_matches_trailing_window() {
    let mut m = KonamiMatcher::new();
    let mut keys = vec!["ArrowUp"];
    keys.extend_from_slice(&KONAMI_SEQUENCE);
    let fired = feed(&mut m, &keys);
    assert!(*fired.last().unwrap());
}

#[test]
fn keys_are_case_sensitive() {
    let mut m = KonamiMatcher::new();
    let mut keys = KONAMI_SEQUENCE.to_vec();
    keys[8] = "B";
    let fired = feed(&mut m, &keys);
    assert!(fired.iter().all(|f| !f));
}

#[test]
fn buffer_never_exceeds_sequence_length() {
    let mut m = KonamiMatcher::new();
    for _ in 0..50 {
        m.push("z");
        assert!(m.buffered() <= KONAMI_SEQUENCE.len());
    }
    assert_eq!(m.buffered(), KONAMI_SEQUENCE.len());
}

#[test]
fn fires_again_after_reset() {
    let mut m = KonamiMatcher::new();
    assert!(*feed(&mut m, &KONAMI_SEQUENCE).last().unwrap());
    assert!(*feed(&mut m, &KONAMI_SEQUENCE).last().unwrap());
}

#[test]
fn tail_of_a_match_does_not_count_toward_the_next() {
    let mut m = KonamiMatcher::new();
    feed(&mut m, &KONAMI_SEQUENCE);
    // a partial replay right after a match must not fire
    let fired = feed(&mut m, &KONAMI_SEQUENCE[2..]);
    assert!(fired.iter().all(|f| !f));
}

#[test]
fn window_stays_inline_under_long_input() {
    let mut m = KonamiMatcher::new();
    for _ in 0..11 {
        assert!(!m.push("z"));
    }
    assert_eq!(m.buffered(), KONAMI_SEQUENCE.len());
    assert!(!m.spilled());
}
