//! `AlphaDec` - exact, reversible hierarchical labels for instants in a year
//!
//! Maps a UTC instant onto a compact label such as `2023_N0A0_000000` and
//! back. The year is divided into 26 lettered periods, each period into 10
//! arcs, each arc into 26 lettered bars and each bar into 10 beats. The label
//! records the position down to the beat plus the whole milliseconds elapsed
//! inside the beat.
//!
//! All arithmetic is done on milliseconds scaled by 1,000,000 and held as
//! arbitrary-precision integers, so no floating-point rounding can creep in.
//!
//! # Example
//! ```
//! use alphadec::{decode, encode};
//! use chrono::{TimeZone, Utc};
//!
//! let t = Utc.with_ymd_and_hms(2024, 7, 2, 12, 0, 0).unwrap();
//! let ad = encode(t).unwrap();
//! assert_eq!(ad.canonical, "2024_N0J2_163597");
//! assert_eq!(ad.period_letter, 'N');
//! assert_eq!(ad.arc, 0);
//!
//! assert_eq!(decode(&ad.canonical).unwrap(), t);
//! ```
//!
//! # Canonical Format
//!
//! `YYYY_PaBt_MMMMMM`, always 16 ASCII characters:
//!
//! | Offset | Size | Field | Description |
//! |--------|------|-------|-------------|
//! | 0 | 4 | year | Zero-padded Gregorian year, 0000-9999 |
//! | 4 | 1 | `_` | Separator |
//! | 5 | 1 | period | `A`-`Z`, 1/26th of the year |
//! | 6 | 1 | arc | `0`-`9`, 1/10th of the period |
//! | 7 | 1 | bar | `A`-`Z`, 1/26th of the arc |
//! | 8 | 1 | beat | `0`-`9`, 1/10th of the bar |
//! | 9 | 1 | `_` | Separator |
//! | 10 | 6 | ms | Zero-padded milliseconds elapsed inside the beat |
//!
//! # Unit Sizes
//!
//! | Unit | 365-day year | 366-day year |
//! |------|--------------|--------------|
//! | period | ~14.04 days | ~14.08 days |
//! | arc | ~33.69 hours | ~33.78 hours |
//! | bar | ~77.75 minutes | ~77.96 minutes |
//! | beat | ~466.5 seconds | ~467.8 seconds |
//!
//! Sizes are recomputed per year from the leap status. Each size is the
//! floor of its parent divided by the subdivision count, so the last unit at
//! every level is marginally longer than the others (sub-microsecond).
//!
//! # Precision
//!
//! Encoding truncates to whole milliseconds. Decoding any string produced by
//! the encoder returns exactly the truncated instant.

#![allow(clippy::cast_possible_truncation)]

pub mod constants;
mod decoder;
mod encoder;
mod error;
mod letter;
mod record;
pub mod scaled;

#[cfg(test)]
mod tests;

// Re-export public API
pub use constants::Unit;
pub use decoder::{decode, decode_millis, parse, CanonicalFields};
pub use encoder::{encode, encode_millis, encode_now};
pub use error::{DecodeError, EncodeError, RangeError};
pub use letter::{index_to_letter, letter_to_index};
pub use record::AlphaDec;
pub use scaled::{Scaled, UnitSizes, SCALE};
