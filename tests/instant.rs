mod common;

use {
    chrono::{TimeDelta, Timelike, Utc},
    common::{BIRTHDAY_MS, birthday},
    ms_instant::{DecodeError, Instant, UNIX_EPOCH},
};

#[test]
fn millis_of_known_date() {
    let instant = Instant::from(birthday());
    assert_eq!(instant.millis(), BIRTHDAY_MS);
    assert_eq!(instant.millis(), birthday().timestamp_millis());
}

#[test]
fn from_millis_of_known_date() {
    let instant = Instant::from_millis(BIRTHDAY_MS).unwrap();
    assert_eq!(instant.to_binary_timestamp(), birthday());
}

#[test]
fn binary_timestamp_round_trip() {
    let now = Utc::now().with_nanosecond(123_456_789).unwrap();
    let instant = Instant::from_binary_timestamp(now);

    assert_eq!(instant.to_binary_timestamp(), now);
    assert_eq!(
        Instant::from_binary_timestamp(instant.to_binary_timestamp()),
        instant
    );
}

#[test]
fn millis_round_trip_drops_sub_millis() {
    let now = Utc::now().with_nanosecond(123_456_789).unwrap();
    let instant = Instant::from(now);

    let back = Instant::from_millis(instant.millis()).unwrap();
    assert_ne!(back, instant);
    assert_eq!(back.millis(), instant.millis());
    assert_eq!(back.to_binary_timestamp().nanosecond(), 123_000_000);
}

#[test]
fn millis_are_preserved() {
    for ms in [
        0,
        1,
        -1,
        999,
        -999,
        1_000,
        -1_000,
        -1_001,
        BIRTHDAY_MS,
        -BIRTHDAY_MS,
        BIRTHDAY_MS + 7,
        8_000_000_000_000_000,
        -8_000_000_000_000_000,
    ] {
        assert_eq!(Instant::from_millis(ms).unwrap().millis(), ms, "ms = {ms}");
    }
}

#[test]
fn negative_millis() {
    let instant = Instant::from_millis(-500).unwrap();

    assert!(instant < UNIX_EPOCH);
    assert_eq!(instant.millis(), -500);
    assert_eq!(
        instant.to_binary_timestamp(),
        UNIX_EPOCH.to_binary_timestamp() - TimeDelta::milliseconds(500)
    );
}

#[test]
fn out_of_range_millis() {
    assert_eq!(
        Instant::from_millis(i64::MAX),
        Err(DecodeError::OutOfRange(i64::MAX))
    );
}

#[test]
fn text_literal() {
    let instant = Instant::from(birthday());
    assert_eq!(instant.to_string(), "623894400000");
    assert_eq!(Instant::from_millis(-500).unwrap().to_string(), "-500");

    assert_eq!("623894400000".parse::<Instant>(), Ok(instant));
    assert_eq!(
        "1989.1009".parse::<Instant>(),
        Err(DecodeError::NotAnInteger("1989.1009".to_owned()))
    );
    assert_eq!(
        "true".parse::<Instant>(),
        Err(DecodeError::NotANumber("true".to_owned()))
    );
}

#[test]
fn ordering_follows_time() {
    let earlier = Instant::from_millis(BIRTHDAY_MS).unwrap();
    let later = Instant::from_millis(BIRTHDAY_MS + 1).unwrap();

    assert!(earlier < later);
    assert_eq!(Instant::default(), UNIX_EPOCH);
    assert_eq!(UNIX_EPOCH.millis(), 0);
}
