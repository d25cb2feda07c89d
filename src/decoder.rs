//! Decoding of canonical AlphaDec strings back to instants.

use chrono::{DateTime, Duration, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, trace};

use crate::constants::Unit;
use crate::encoder::year_start;
use crate::error::DecodeError;
use crate::letter::letter_to_index;
use crate::scaled::{Scaled, UnitSizes};

// ASCII digits only; `\d` would also accept other Unicode digits
static CANONICAL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{4})_([A-Z])([0-9])([A-Z])([0-9])_([0-9]{6})$")
        .expect("valid canonical regex")
});

/// Fields of a syntactically valid canonical string
///
/// Only the pattern is enforced. A hand-crafted string may name a position
/// past the end of its year; such a string still decodes, into the next
/// year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CanonicalFields {
    pub year: i32,
    pub period: u8,
    pub arc: u8,
    pub bar: u8,
    pub beat: u8,
    pub ms_offset_in_beat: u32,
}

impl CanonicalFields {
    /// Scaled offset from the start of the year
    #[must_use]
    pub fn scaled_offset(&self, sizes: &UnitSizes) -> Scaled {
        let indices = [self.period, self.arc, self.bar, self.beat];
        let tail = Scaled::from_millis(i64::from(self.ms_offset_in_beat));
        Unit::ALL
            .iter()
            .zip(indices)
            .fold(tail, |acc, (&unit, index)| acc + sizes.of(unit).times(u32::from(index)))
    }

    /// Whole milliseconds since the start of the year
    ///
    /// The scaled offset is rounded up. Unit boundaries are generally not on
    /// a whole millisecond, and the encoder floors the leftover inside the
    /// beat, so the first whole millisecond at or after the boundary is the
    /// one the encoder counted from.
    #[must_use]
    pub fn ms_since_year_start(&self) -> Option<i64> {
        self.scaled_offset(&UnitSizes::for_year(self.year)).ceil_millis()
    }
}

/// Validate a canonical string and split it into its fields
///
/// # Errors
/// Returns `DecodeError::MalformedCanonical` if `canonical` does not match
/// `YYYY_PaBt_MMMMMM`.
pub fn parse(canonical: &str) -> Result<CanonicalFields, DecodeError> {
    let malformed = || DecodeError::MalformedCanonical {
        input: canonical.to_owned(),
    };
    let caps = CANONICAL_RE.captures(canonical).ok_or_else(malformed)?;

    let digits = |i: usize| -> Result<u32, DecodeError> {
        caps[i].parse::<u32>().map_err(|_| malformed())
    };
    let letter = |i: usize| -> Result<u8, DecodeError> {
        caps[i]
            .chars()
            .next()
            .and_then(|ch| letter_to_index(ch).ok())
            .ok_or_else(malformed)
    };

    Ok(CanonicalFields {
        year: i32::try_from(digits(1)?).map_err(|_| malformed())?,
        period: letter(2)?,
        arc: u8::try_from(digits(3)?).map_err(|_| malformed())?,
        bar: letter(4)?,
        beat: u8::try_from(digits(5)?).map_err(|_| malformed())?,
        ms_offset_in_beat: digits(6)?,
    })
}

/// Decode a canonical string back to the instant it was encoded from
///
/// Exact inverse of [`encode`](crate::encode) at millisecond resolution.
///
/// # Errors
/// - `DecodeError::MalformedCanonical` if the string does not match
///   `YYYY_PaBt_MMMMMM`
/// - `DecodeError::InvalidInstant` if the decoded offset cannot be
///   represented as a `DateTime<Utc>`
///
/// # Example
/// ```
/// use alphadec::{decode, encode};
/// use chrono::{TimeZone, Utc};
///
/// let t = Utc.with_ymd_and_hms(2025, 3, 14, 15, 9, 26).unwrap();
/// let ad = encode(t).unwrap();
/// assert_eq!(decode(&ad.canonical).unwrap(), t);
/// assert!(decode("2024_A0A0_00000").is_err());
/// ```
pub fn decode(canonical: &str) -> Result<DateTime<Utc>, DecodeError> {
    let fields = parse(canonical)?;
    let year = fields.year;
    let invalid = || DecodeError::InvalidInstant { year };

    let ms = fields.ms_since_year_start().ok_or_else(invalid)?;
    trace!(year, ms, "offset from start of year");

    let instant = year_start(year)
        .and_then(|start| start.checked_add_signed(Duration::try_milliseconds(ms)?))
        .ok_or_else(invalid)?;
    debug!(canonical, %instant, "decoded canonical string");
    Ok(instant)
}

/// Decode a canonical string to a Unix timestamp in milliseconds
///
/// # Errors
/// See [`decode`].
pub fn decode_millis(canonical: &str) -> Result<i64, DecodeError> {
    decode(canonical).map(|instant| instant.timestamp_millis())
}
