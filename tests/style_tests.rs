// Host-side tests for inline style strings.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod style {
    include!("../src/style.rs");
}

use folio_core::{tilt_for, CardRect, TiltConfig};
use glam::DVec2;
use style::*;

#[test]
fn translate_formats_pixels() {
    assert_eq!(translate(12.5, -4.0), "translate(12.5px, -4px)");
    assert_eq!(translate_x(0.0), "translateX(0px)");
    assert_eq!(translate_y(37.5), "translateY(37.5px)");
}

#[test]
fn tilt_transform_matches_card_math() {
    let cfg = TiltConfig::default();
    let rect = CardRect::new(0.0, 0.0, 200.0, 100.0);
    let t = tilt_for(rect, DVec2::new(200.0, 0.0), &cfg);
    assert_eq!(
        tilt(cfg.perspective_px, t.rotate_x_deg, t.rotate_y_deg),
        "perspective(1000px) rotateX(2.5deg) rotateY(5deg)"
    );
    assert_eq!(
        tilt_reset(cfg.perspective_px),
        "perspective(1000px) rotateX(0) rotateY(0)"
    );
}

#[test]
fn progress_and_delay_units() {
    assert_eq!(percent(42.5), "42.5%");
    assert_eq!(percent(0.0), "0%");
    assert_eq!(millis(90), "90ms");
}

#[test]
fn slider_return_transition() {
    assert_eq!(transform_transition(300), "transform 0.3s ease");
}
