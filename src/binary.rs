//! Binary codec: an instant is stored as a native BSON UTC datetime.

use {
    crate::instant::Instant,
    bson::{Bson, DateTime},
};

impl From<Instant> for DateTime {
    fn from(instant: Instant) -> Self {
        DateTime::from_chrono(instant.to_binary_timestamp())
    }
}

impl From<DateTime> for Instant {
    fn from(dt: DateTime) -> Self {
        Instant::from_binary_timestamp(dt.to_chrono())
    }
}

impl From<Instant> for Bson {
    fn from(instant: Instant) -> Self {
        Bson::DateTime(instant.into())
    }
}

/// Serde adapter that stores an [`Instant`] field as a BSON datetime, instead
/// of the default integer of milliseconds.
///
/// ```
/// use {ms_instant::Instant, serde::{Deserialize, Serialize}};
///
/// #[derive(Serialize, Deserialize)]
/// struct Event {
///     #[serde(with = "ms_instant::bson_datetime")]
///     created_at: Instant,
/// }
/// ```
pub mod bson_datetime {
    use {
        crate::instant::Instant,
        bson::DateTime,
        serde::{Deserialize, Deserializer, Serialize, Serializer},
    };

    /// Serializes the instant as a BSON datetime.
    pub fn serialize<S>(instant: &Instant, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        DateTime::from(*instant).serialize(serializer)
    }

    /// Deserializes the instant from a BSON datetime.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Instant, D::Error>
    where
        D: Deserializer<'de>,
    {
        DateTime::deserialize(deserializer).map(Instant::from)
    }
}
