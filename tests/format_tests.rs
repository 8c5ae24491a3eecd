use cartesian_rs::core::{
    DatePattern, ValueFormat, format_date_tick, format_grouped_fixed, format_si,
};
use chrono::{TimeZone, Utc};

#[test]
fn si_format_keeps_two_significant_digits() {
    assert_eq!(format_si(0.0, 2), "0.0");
    assert_eq!(format_si(24.0, 2), "24");
    assert_eq!(format_si(96.0, 2), "96");
    assert_eq!(format_si(120.0, 2), "120");
    assert_eq!(format_si(1_500.0, 2), "1.5k");
    assert_eq!(format_si(2_000_000.0, 2), "2.0M");
    assert_eq!(format_si(0.5, 2), "500m");
    assert_eq!(format_si(-1_500.0, 2), "-1.5k");
}

#[test]
fn grouped_fixed_inserts_thousands_separators() {
    assert_eq!(format_grouped_fixed(1_234_567.0, 0), "1,234,567");
    assert_eq!(format_grouped_fixed(-1_234.5, 1), "-1,234.5");
    assert_eq!(format_grouped_fixed(0.25, 2), "0.25");
    assert_eq!(format_grouped_fixed(-0.0001, 1), "0.0");
}

#[test]
fn value_format_variants_dispatch() {
    assert_eq!(ValueFormat::default().format(1_500.0), "1.5k");
    assert_eq!(ValueFormat::SiWithPrecision(3).format(1_234.0), "1.23k");
    assert_eq!(ValueFormat::Fixed(1).format(1_234.0), "1,234.0");
    assert_eq!(
        ValueFormat::custom(|value| format!("{value}%")).format(12.0),
        "12%"
    );
}

#[test]
fn date_ticks_use_coarsest_distinguishing_field() {
    let year = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let month = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
    let weekday = Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap();
    let sunday = Utc.with_ymd_and_hms(2024, 1, 7, 0, 0, 0).unwrap();
    let hour = Utc.with_ymd_and_hms(2024, 1, 2, 15, 0, 0).unwrap();
    let minute = Utc.with_ymd_and_hms(2024, 1, 2, 15, 30, 0).unwrap();
    let second = Utc.with_ymd_and_hms(2024, 1, 2, 15, 30, 5).unwrap();

    assert_eq!(format_date_tick(year), "2024");
    assert_eq!(format_date_tick(month), "March");
    assert_eq!(format_date_tick(weekday), "Tue 02");
    assert_eq!(format_date_tick(sunday), "Jan 07");
    assert_eq!(format_date_tick(hour), "03 PM");
    assert_eq!(format_date_tick(minute), "03:30");
    assert_eq!(format_date_tick(second), ":05");
}

#[test]
fn date_pattern_accepts_millisecond_directive() {
    let pattern = DatePattern::parse("%H:%M:%S.%L").expect("valid pattern");
    let time = Utc.timestamp_millis_opt(1_704_067_200_250).unwrap();
    assert_eq!(pattern.format(time), "00:00:00.250");
}

#[test]
fn invalid_date_pattern_is_rejected() {
    assert!(DatePattern::parse("%Q").is_err());
}

#[test]
fn date_pattern_round_trips_through_json() {
    let pattern = DatePattern::parse("%b %d").expect("valid pattern");
    let json = serde_json::to_string(&pattern).expect("serialize");
    assert_eq!(json, "\"%b %d\"");
    let restored: DatePattern = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(restored, pattern);
    assert!(serde_json::from_str::<DatePattern>("\"%Q\"").is_err());
}
