// Host-side tests for the scroll reactor.

use folio_core::{scroll_progress, PageMetrics, ScrollConfig, ScrollDirection, ScrollReactor};

fn metrics(scroll_height: f64, viewport_height: f64) -> PageMetrics {
    PageMetrics {
        scroll_height,
        viewport_height,
    }
}

#[test]
fn scroll_down_then_stop_clears_after_idle_window() {
    let mut r = ScrollReactor::new(ScrollConfig::default(), 0.0);
    let frame = r.on_scroll(500.0, metrics(3_000.0, 800.0));
    assert_eq!(frame.direction, ScrollDirection::Down);
    assert_eq!(frame.clear_after_ms, 150);
    assert_eq!(r.direction(), ScrollDirection::Down);

    assert!(r.clear_direction(frame.clear_ticket));
    assert_eq!(r.direction(), ScrollDirection::Neutral);
}

#[test]
fn continued_scrolling_postpones_the_clear() {
    let mut r = ScrollReactor::new(ScrollConfig::default(), 0.0);
    let tickets: Vec<_> = (1..=60)
        .map(|i| r.on_scroll(f64::from(i) * 10.0, metrics(3_000.0, 800.0)).clear_ticket)
        .collect();
    let (last, superseded) = tickets.split_last().unwrap();
    for t in superseded {
        assert!(!r.clear_direction(*t));
        assert_eq!(r.direction(), ScrollDirection::Down);
    }
    assert!(r.clear_direction(*last));
    assert_eq!(r.direction(), ScrollDirection::Neutral);
    assert!(!r.clear_direction(*last));
}

#[test]
fn scrolling_back_reports_up() {
    let mut r = ScrollReactor::new(ScrollConfig::default(), 600.0);
    let f = r.on_scroll(550.0, metrics(3_000.0, 800.0));
    assert_eq!(f.direction, ScrollDirection::Up);
}

#[test]
fn no_events_means_neutral() {
    let r = ScrollReactor::new(ScrollConfig::default(), 0.0);
    assert_eq!(r.direction(), ScrollDirection::Neutral);
}

#[test]
fn header_markers_use_strict_thresholds() {
    let mut r = ScrollReactor::new(ScrollConfig::default(), 0.0);
    let m = metrics(3_000.0, 800.0);
    let f = r.on_scroll(50.0, m);
    assert!(!f.header_scrolled && !f.header_hidden);
    let f = r.on_scroll(51.0, m);
    assert!(f.header_scrolled && !f.header_hidden);
    let f = r.on_scroll(300.0, m);
    assert!(f.header_scrolled && !f.header_hidden);
    let f = r.on_scroll(301.0, m);
    assert!(f.header_scrolled && f.header_hidden);
    let f = r.on_scroll(10.0, m);
    assert!(!f.header_scrolled && !f.header_hidden);
}

#[test]
fn progress_is_zero_when_page_does_not_scroll() {
    assert_eq!(scroll_progress(0.0, metrics(800.0, 800.0)), 0.0);
    assert_eq!(scroll_progress(120.0, metrics(600.0, 800.0)), 0.0);
}

#[test]
fn progress_stays_within_percent_range() {
    let m = metrics(2_800.0, 800.0);
    assert_eq!(scroll_progress(1_000.0, m), 50.0);
    assert_eq!(scroll_progress(2_000.0, m), 100.0);
    for offset in [-500.0, -1.0, 0.0, 1.0, 999.0, 2_000.0, 2_500.0, 1e9, f64::NAN] {
        let p = scroll_progress(offset, m);
        assert!((0.0..=100.0).contains(&p), "progress {p} for offset {offset}");
    }
}

#[test]
fn parallax_is_half_speed_scaled() {
    let r = ScrollReactor::new(ScrollConfig::default(), 0.0);
    assert_eq!(r.parallax_offset(200.0, 0.3), 30.0);
    assert_eq!(r.parallax_offset(200.0, -1.0), -100.0);
    assert_eq!(r.parallax_offset(0.0, 5.0), 0.0);
}
