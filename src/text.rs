//! Text codec: an instant is a bare integer literal of milliseconds since the
//! Unix epoch.

use {
    crate::{error::DecodeError, instant::Instant},
    serde::{
        Deserialize, Deserializer, Serialize, Serializer,
        de::{self, Visitor},
    },
    std::fmt,
};

impl Serialize for Instant {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i64(self.millis())
    }
}

impl<'de> Deserialize<'de> for Instant {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Self-describing formats hand over whatever token they see, so that
        // non-numbers are reported the same way as fractional numbers.
        let ms = if deserializer.is_human_readable() {
            deserializer.deserialize_any(MillisVisitor)?
        } else {
            deserializer.deserialize_i64(MillisVisitor)?
        };
        Instant::from_millis(ms).map_err(de::Error::custom)
    }
}

/// Accepts exact 64-bit integers only.
struct MillisVisitor;

impl MillisVisitor {
    fn reject<E, T>(err: DecodeError) -> Result<T, E>
    where
        E: de::Error,
    {
        log::debug!("rejected millisecond value: {err}");
        Err(E::custom(err))
    }
}

impl<'de> Visitor<'de> for MillisVisitor {
    type Value = i64;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an integer number of milliseconds since Unix epoch")
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(v)
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        i64::try_from(v).or_else(|_| Self::reject(DecodeError::NotAnInteger(v.to_string())))
    }

    fn visit_i128<E>(self, v: i128) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        i64::try_from(v).or_else(|_| Self::reject(DecodeError::NotAnInteger(v.to_string())))
    }

    fn visit_u128<E>(self, v: u128) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        i64::try_from(v).or_else(|_| Self::reject(DecodeError::NotAnInteger(v.to_string())))
    }

    fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        // serde_json hands the integer literal `-0` over as a float.
        if v == 0.0 && v.is_sign_negative() {
            return Ok(0);
        }
        Self::reject(DecodeError::NotAnInteger(v.to_string()))
    }

    fn visit_bool<E>(self, v: bool) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Self::reject(DecodeError::NotANumber(v.to_string()))
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Self::reject(DecodeError::NotANumber(format!("{v:?}")))
    }

    fn visit_unit<E>(self) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Self::reject(DecodeError::NotANumber("null".to_owned()))
    }
}
