// Host-side tests for the scroll/viewport controller.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod viewport {
    include!("../src/core/viewport.rs");
}

use viewport::*;

fn section(id: &str, top: f64, height: f64) -> SectionGeometry {
    SectionGeometry {
        id: id.to_string(),
        top,
        height,
    }
}

fn snapshot(scroll_y: f64, sections: Vec<SectionGeometry>) -> ViewportSnapshot {
    ViewportSnapshot {
        scroll_y,
        viewport_width: 1280.0,
        viewport_height: 800.0,
        sections,
    }
}

fn two_sections() -> Vec<SectionGeometry> {
    vec![section("a", 0.0, 500.0), section("b", 500.0, 500.0)]
}

#[test]
fn top_of_page_has_no_scrolled_flags() {
    let flags = recompute(&snapshot(0.0, two_sections()), None);
    assert!(!flags.navbar_scrolled);
    assert!(!flags.back_to_top_visible);
}

#[test]
fn thresholds_are_strict() {
    let at_50 = recompute(&snapshot(50.0, vec![]), None);
    assert!(!at_50.navbar_scrolled);
    let at_51 = recompute(&snapshot(51.0, vec![]), None);
    assert!(at_51.navbar_scrolled);
    assert!(!at_51.back_to_top_visible);

    let at_300 = recompute(&snapshot(300.0, vec![]), None);
    assert!(!at_300.back_to_top_visible);
    let at_301 = recompute(&snapshot(301.0, vec![]), None);
    assert!(at_301.back_to_top_visible);
}

#[test]
fn active_section_uses_lookahead_offset() {
    let top = recompute(&snapshot(0.0, two_sections()), None);
    assert_eq!(top.active_section_id.as_deref(), Some("a"));

    let lower = recompute(&snapshot(400.0, two_sections()), Some("a"));
    assert_eq!(lower.active_section_id.as_deref(), Some("b"));

    // lookahead at 499 is still inside a; at 500 it belongs to b
    assert_eq!(active_section(&two_sections(), 349.0), Some("a"));
    assert_eq!(active_section(&two_sections(), 350.0), Some("b"));
}

#[test]
fn active_section_is_sticky_across_gaps() {
    let sections = vec![section("a", 0.0, 100.0), section("b", 400.0, 100.0)];
    let in_gap = recompute(&snapshot(100.0, sections.clone()), Some("a"));
    assert_eq!(in_gap.active_section_id.as_deref(), Some("a"));

    let no_prior = recompute(&snapshot(100.0, sections), None);
    assert_eq!(no_prior.active_section_id, None);
}

#[test]
fn overlapping_sections_prefer_document_order() {
    let sections = vec![section("first", 0.0, 1000.0), section("second", 100.0, 500.0)];
    assert_eq!(active_section(&sections, 200.0), Some("first"));
}

#[test]
fn particle_count_scales_with_width_and_caps() {
    assert_eq!(desired_particle_count(400.0), 20);
    assert_eq!(desired_particle_count(2000.0), 30);
    assert_eq!(desired_particle_count(600.0), 30);
    assert_eq!(desired_particle_count(619.0), 30);
    assert_eq!(desired_particle_count(39.9), 1);
    assert_eq!(desired_particle_count(19.9), 0);
    assert_eq!(desired_particle_count(0.0), 0);
    assert_eq!(desired_particle_count(-50.0), 0);
    assert_eq!(desired_particle_count(f64::NAN), 0);
}

#[test]
fn recompute_reports_particle_count_from_snapshot_width() {
    let mut snap = snapshot(0.0, vec![]);
    snap.viewport_width = 400.0;
    assert_eq!(recompute(&snap, None).desired_particle_count, 20);
}

#[test]
fn menu_closes_only_when_open_on_wide_viewport() {
    assert!(should_close_menu_on_resize(1024.0, true));
    assert!(!should_close_menu_on_resize(768.0, true));
    assert!(!should_close_menu_on_resize(1024.0, false));
}

#[test]
fn anchor_scroll_leaves_room_for_navbar() {
    assert_eq!(anchor_scroll_top(600.0), 500.0);
}

#[test]
fn skill_width_parsing_defaults_to_zero() {
    assert_eq!(parse_skill_width(Some("85")), 85.0);
    assert_eq!(parse_skill_width(Some(" 42.5% ")), 42.5);
    assert_eq!(parse_skill_width(Some("abc")), 0.0);
    assert_eq!(parse_skill_width(Some("")), 0.0);
    assert_eq!(parse_skill_width(Some("NaN")), 0.0);
    assert_eq!(parse_skill_width(None), 0.0);
    assert_eq!(parse_skill_width(Some("150")), 100.0);
    assert_eq!(parse_skill_width(Some("-3")), 0.0);
}

#[test]
fn skill_bar_visibility_window() {
    assert!(skill_bar_visible(100.0, 200.0, 800.0));
    assert!(skill_bar_visible(750.0, 770.0, 800.0));
    assert!(!skill_bar_visible(751.0, 770.0, 800.0));
    assert!(skill_bar_visible(-100.0, 0.0, 800.0));
    assert!(!skill_bar_visible(-100.0, -1.0, 800.0));
}

#[test]
fn skill_bars_stagger_by_index() {
    assert_eq!(skill_bar_delay_ms(0), 0);
    assert_eq!(skill_bar_delay_ms(3), 300);
}

#[test]
fn skill_bar_is_scheduled_once() {
    let mut queue = RevealQueue::default();
    assert!(!queue.is_scheduled(2));
    assert!(queue.schedule(2));
    assert!(!queue.schedule(2));
    assert!(queue.is_scheduled(2));
    assert!(!queue.is_scheduled(0));
}
