use super::*;

#[test]
fn utc_wall_clock_formats_midnight() {
    assert_eq!(utc_wall_clock(0.0), "00:00:00");
}

#[test]
fn utc_wall_clock_formats_within_the_day() {
    assert_eq!(utc_wall_clock(1_000.0), "00:00:01");
    assert_eq!(utc_wall_clock(3_661_000.0), "01:01:01");
    assert_eq!(utc_wall_clock(86_399_000.0), "23:59:59");
}

#[test]
fn utc_wall_clock_wraps_across_days() {
    // One full day plus one hour.
    assert_eq!(utc_wall_clock(90_000_000.0), "01:00:00");
}

#[test]
fn utc_wall_clock_clamps_bad_input() {
    assert_eq!(utc_wall_clock(-5.0), "00:00:00");
    assert_eq!(utc_wall_clock(f64::NAN), "00:00:00");
    assert_eq!(utc_wall_clock(f64::INFINITY), "00:00:00");
}

#[cfg(not(feature = "csr"))]
#[test]
fn wall_clock_label_uses_fallback_off_browser() {
    assert_eq!(wall_clock_label(1_000.0), "00:00:01");
}
