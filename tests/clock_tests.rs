// Host-side tests for zone-local clock formatting.

use folio_core::Clock;

#[test]
fn formats_kolkata_time_as_24_hour() {
    let clock = Clock::default();
    // 2023-11-14T22:13:20Z
    assert_eq!(clock.format_millis(1_700_000_000_000.0), "03:43");
    assert_eq!(clock.format_millis(0.0), "05:30");
}

#[test]
fn midnight_is_zero_hour() {
    let clock = Clock::default();
    // 2023-12-31T18:30:00Z is midnight in Kolkata
    assert_eq!(clock.format_millis(1_704_047_399_999.0), "23:59");
    assert_eq!(clock.format_millis(1_704_047_400_000.0), "00:00");
}

#[test]
fn other_zones_can_be_selected() {
    let clock = Clock::for_zone("America/New_York").unwrap();
    assert_eq!(clock.zone_name(), "America/New_York");
    assert_eq!(clock.format_millis(1_700_000_000_000.0), "17:13");
}

#[test]
fn unknown_zone_falls_back_to_default() {
    let clock = Clock::for_zone_or_default(Some("Nowhere/Special"));
    assert_eq!(clock.zone_name(), "Asia/Kolkata");
    assert_eq!(Clock::for_zone_or_default(None).zone_name(), "Asia/Kolkata");
}

#[test]
fn non_finite_time_renders_placeholder() {
    assert_eq!(Clock::default().format_millis(f64::NAN), "--:--");
    assert_eq!(Clock::default().format_millis(f64::INFINITY), "--:--");
}
