use {
    crate::error::{DecodeError, DecodeResult},
    chrono::{DateTime, Utc},
    std::{fmt, str::FromStr},
};

/// Milliseconds in one second.
const MILLIS_PER_SEC: i64 = 1_000;

/// Nanoseconds in one millisecond.
const NANOS_PER_MILLI: i64 = 1_000_000;

/// Nanoseconds in one second.
const NANOS_PER_SEC: i64 = 1_000_000_000;

/// Point in time, milliseconds in text formats and native datetime in binary
/// ones.
///
/// This is a wrapper around [`DateTime<Utc>`], which keeps nanosecond
/// precision. The value has two encodings:
///
/// - the *binary timestamp*, which is the wrapped [`DateTime<Utc>`] itself,
///   see [`to_binary_timestamp()`](Self::to_binary_timestamp()) and
///   [`from_binary_timestamp()`](Self::from_binary_timestamp()). Conversion is
///   lossless.
/// - the *millisecond count* since the Unix epoch, see
///   [`millis()`](Self::millis()) and [`from_millis()`](Self::from_millis()).
///   Anything below a millisecond is dropped.
///
/// Serde serializes the instant as a bare integer literal of milliseconds
/// (e.g. `623894400000` in JSON). Deserialization accepts integer literals
/// only: booleans, strings and fractional numbers are rejected.
///
/// Time zones are not a concern of this type, every instant is kept in UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Instant(DateTime<Utc>);

/// Instant at the Unix epoch, 1970-01-01 00:00:00 UTC.
pub const UNIX_EPOCH: Instant = Instant(DateTime::<Utc>::UNIX_EPOCH);

impl Default for Instant {
    fn default() -> Self {
        UNIX_EPOCH
    }
}

impl From<DateTime<Utc>> for Instant {
    fn from(dt: DateTime<Utc>) -> Self {
        Self::from_binary_timestamp(dt)
    }
}

impl From<Instant> for DateTime<Utc> {
    fn from(instant: Instant) -> Self {
        instant.to_binary_timestamp()
    }
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.millis())
    }
}

impl FromStr for Instant {
    type Err = DecodeError;

    /// Parses a bare integer literal of milliseconds since the Unix epoch.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_millis(parse_millis(s)?)
    }
}

impl Instant {
    /// Wraps a decoded binary timestamp as is.
    pub fn from_binary_timestamp(raw: DateTime<Utc>) -> Self {
        Self(raw)
    }

    /// Returns the wrapped binary timestamp, with full precision.
    pub fn to_binary_timestamp(&self) -> DateTime<Utc> {
        self.0
    }

    /// Creates an instant from seconds and nanoseconds since the Unix epoch.
    ///
    /// Nanoseconds are not required to be in `[0, 1s)`: an offset outside of
    /// that range is normalized into seconds, so negative nanoseconds borrow
    /// from the seconds field.
    ///
    /// Returns `None` if the instant is out of range of [`DateTime<Utc>`].
    pub fn from_unix(secs: i64, nanos: i64) -> Option<Self> {
        let secs = secs.checked_add(nanos.div_euclid(NANOS_PER_SEC))?;
        let nanos = nanos.rem_euclid(NANOS_PER_SEC) as u32;
        DateTime::from_timestamp(secs, nanos).map(Self)
    }

    /// Creates an instant from milliseconds since the Unix epoch.
    pub fn from_millis(ms: i64) -> DecodeResult<Self> {
        // Truncated division, the sign of remainder follows `ms`.
        let secs = ms / MILLIS_PER_SEC;
        let nanos = (ms - secs * MILLIS_PER_SEC) * NANOS_PER_MILLI;
        Self::from_unix(secs, nanos).ok_or(DecodeError::OutOfRange(ms))
    }

    /// Milliseconds since the Unix epoch.
    ///
    /// Sub-millisecond part is floored, i.e. an instant half a millisecond
    /// before the epoch is `-1`.
    pub fn millis(&self) -> i64 {
        self.0.timestamp_millis()
    }
}

/// Parses a number literal into milliseconds, rejecting anything that is not
/// an exact 64-bit integer.
pub(crate) fn parse_millis(s: &str) -> DecodeResult<i64> {
    let err = if !is_number_literal(s) {
        DecodeError::NotANumber(s.to_owned())
    } else if let Ok(ms) = s.parse::<i64>() {
        return Ok(ms);
    } else {
        DecodeError::NotAnInteger(s.to_owned())
    };

    log::debug!("rejected millisecond literal: {err}");
    Err(err)
}

/// Checks `s` against the JSON number grammar: `-? int frac? exp?`, where
/// `int` has no leading zeros.
fn is_number_literal(s: &str) -> bool {
    fn digits(s: &str) -> (&str, &str) {
        s.split_at(s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len()))
    }

    let (int, rest) = digits(s.strip_prefix('-').unwrap_or(s));
    if int.is_empty() || (int.len() > 1 && int.starts_with('0')) {
        return false;
    }

    let rest = match rest.strip_prefix('.') {
        Some(frac) => match digits(frac) {
            ("", _) => return false,
            (_, rest) => rest,
        },
        None => rest,
    };

    match rest.strip_prefix(|c: char| c == 'e' || c == 'E') {
        Some(exp) => {
            let exp = exp.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(exp);
            !exp.is_empty() && exp.bytes().all(|b| b.is_ascii_digit())
        }
        None => rest.is_empty(),
    }
}
