use once_cell::sync::Lazy;
use std::sync::Mutex;
use tempotext::{
    format_iso8601_duration, format_utc_timestamp, parse_duration, parse_utc_timestamp, Duration,
    ErrorKind, Timestamp,
};

/// Serialises tests that change `TZ`.
static TZ_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

fn with_tz<R>(tz: &str, f: impl FnOnce() -> R) -> R {
    let _guard = TZ_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    let previous = std::env::var("TZ").ok();
    std::env::set_var("TZ", tz);
    let result = f();
    match previous {
        Some(value) => std::env::set_var("TZ", value),
        None => std::env::remove_var("TZ"),
    }
    result
}

#[test]
fn parse_duration_accepts_every_notation() {
    let cases = [
        ("1ns", Duration::NANOSECOND),
        ("1us", Duration::MICROSECOND),
        ("1µs", Duration::MICROSECOND),
        ("1ms", Duration::MILLISECOND),
        ("1s", Duration::SECOND),
        ("1m", Duration::MINUTE),
        ("1h", Duration::HOUR),
        ("1d", Duration::DAY),
        ("1w", Duration::WEEK),
        ("1y", Duration::YEAR),
        ("200s", Duration::SECOND * 200),
        (
            "1h20m1s",
            Duration::HOUR + Duration::MINUTE * 20 + Duration::SECOND,
        ),
        (
            "15h20m20s20ms",
            Duration::HOUR * 15
                + Duration::MINUTE * 20
                + Duration::SECOND * 20
                + Duration::MILLISECOND * 20,
        ),
        (
            "1y1w1d1h1m1s1ms1us",
            Duration::YEAR
                + Duration::WEEK
                + Duration::DAY
                + Duration::HOUR
                + Duration::MINUTE
                + Duration::SECOND
                + Duration::MILLISECOND
                + Duration::MICROSECOND,
        ),
        ("P1Y", Duration::YEAR),
        ("-P1Y", -Duration::YEAR),
        ("P1Y1D", Duration::YEAR + Duration::DAY),
        ("PT1S", Duration::SECOND),
        ("PT1M1S", Duration::MINUTE + Duration::SECOND),
        (
            "PT1H1M1S",
            Duration::HOUR + Duration::MINUTE + Duration::SECOND,
        ),
        (
            "P1Y1M1W1DT1H1M1S",
            Duration::YEAR
                + Duration::MONTH
                + Duration::WEEK
                + Duration::DAY
                + Duration::HOUR
                + Duration::MINUTE
                + Duration::SECOND,
        ),
        ("P", Duration::ZERO),
        ("PT", Duration::ZERO),
        ("10", Duration::SECOND * 10),
        ("10.1", Duration::SECOND * 10),
        ("10.5", Duration::SECOND * 11),
        ("10.9", Duration::SECOND * 11),
    ];

    for (input, expected) in cases {
        let parsed = parse_duration(input).unwrap_or_else(|err| panic!("input={input}, err={err}"));
        assert_eq!(parsed.as_nanos(), expected.as_nanos(), "input={input}");
    }
}

#[test]
fn parse_duration_rejects_malformed_text() {
    for input in ["1#", "1a", "1s1", "sss", "s111", "%12d", "y1y", "/12d"] {
        let err = parse_duration(input).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument, "input={input}");
    }

    assert_eq!(parse_duration("").unwrap_err().kind(), ErrorKind::Failed);
}

#[test]
fn unit_case_does_not_change_the_value() {
    for (lower, upper) in [("1h20m1s", "1H20M1S"), ("20ms", "20MS"), ("3d", "3D"), ("1y", "1Y")] {
        assert_eq!(parse_duration(lower).unwrap(), parse_duration(upper).unwrap());
    }
}

#[test]
fn formatted_durations_parse_back() {
    for duration in [
        Duration::ZERO,
        Duration::SECOND * 45,
        Duration::HOUR * 26 + Duration::SECOND,
        Duration::YEAR + Duration::MONTH,
        -Duration::WEEK,
    ] {
        let text = format_iso8601_duration(duration).unwrap();
        assert_eq!(parse_duration(&text).unwrap(), duration, "text={text}");
        assert_eq!(duration.to_string(), text);
    }
}

// Formatting uses only `chrono::Utc` today; these guard against a future
// dependency on `chrono::Local` or the process `TZ`.
#[test]
fn utc_text_is_independent_of_process_time_zone() {
    let input = "2024-01-01T00:00:00Z";

    let results: Vec<(Timestamp, String)> = ["GMT+1", "GMT-1", "UTC", "Asia/Kolkata"]
        .into_iter()
        .map(|tz| {
            with_tz(tz, || {
                let ts = parse_utc_timestamp(input).unwrap();
                let text = format_utc_timestamp(ts).unwrap();
                assert_eq!(parse_utc_timestamp(&text).unwrap(), ts, "tz={tz}");
                (ts, text)
            })
        })
        .collect();

    for (ts, text) in &results {
        assert_eq!(*ts, results[0].0);
        assert_eq!(text, input);
    }
}

#[test]
fn timestamp_round_trip_under_offsets() {
    for secs in [0_i64, 86_399, 1_704_067_199, 1_704_067_200, 2_147_483_648] {
        let ts = Timestamp::from_unix(secs);
        let east = with_tz("GMT-1", || format_utc_timestamp(ts).unwrap());
        let west = with_tz("GMT+1", || format_utc_timestamp(ts).unwrap());
        assert_eq!(east, west);
        assert_eq!(parse_utc_timestamp(&east).unwrap(), ts);
    }
}

#[cfg(feature = "serde")]
#[test]
fn serde_config_fields_use_text() {
    #[derive(serde::Serialize, serde::Deserialize, Debug, PartialEq)]
    struct Rule {
        #[serde(rename = "minTimeout")]
        min_timeout: Duration,
        since: Timestamp,
    }

    let rule: Rule =
        serde_json::from_str(r#"{"minTimeout":"1m30s","since":"2024-01-01T00:00:00Z"}"#).unwrap();
    assert_eq!(rule.min_timeout, Duration::SECOND * 90);
    assert_eq!(rule.since.unix(), 1_704_067_200);

    let json = serde_json::to_string(&rule).unwrap();
    assert_eq!(json, r#"{"minTimeout":"PT1M30S","since":"2024-01-01T00:00:00Z"}"#);
}
