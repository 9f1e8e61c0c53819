//! Point in time that is an integer of milliseconds in JSON and a native
//! datetime in BSON.
//!
//! ```
//! use {chrono::{TimeZone, Utc}, ms_instant::Instant};
//!
//! let instant = Instant::from(Utc.with_ymd_and_hms(1989, 10, 9, 0, 0, 0).unwrap());
//! assert_eq!(instant.millis(), 623894400000);
//! assert_eq!(instant.to_string(), "623894400000");
//! assert_eq!("623894400000".parse::<Instant>(), Ok(instant));
//! ```

pub mod error;
mod instant;
mod text;

#[cfg(feature = "bson")]
mod binary;

pub use instant::{Instant, UNIX_EPOCH};
#[cfg(feature = "bson")]
pub use binary::bson_datetime;
pub use error::{DecodeError, DecodeResult};
