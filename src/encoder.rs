//! Encoder from UTC instants to AlphaDec records.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use num_traits::ToPrimitive;
use tracing::{debug, trace};

use crate::constants::{Unit, MAX_YEAR, MIN_YEAR};
use crate::error::{EncodeError, RangeError};
use crate::letter::index_to_letter;
use crate::record::AlphaDec;
use crate::scaled::{Scaled, UnitSizes};

/// Midnight UTC on January 1st of `year`
#[inline]
pub(crate) fn year_start(year: i32) -> Option<DateTime<Utc>> {
    NaiveDate::from_ymd_opt(year, 1, 1)?
        .and_hms_opt(0, 0, 0)
        .map(|naive| naive.and_utc())
}

/// Encode a UTC instant
///
/// Sub-millisecond precision is truncated. The result is a pure function of
/// the instant: encoding the same instant twice yields identical records.
///
/// # Errors
/// - `EncodeError::YearOutOfRange` if the year is outside 0000-9999
/// - `EncodeError::InvalidInstant` if the start of the instant's year cannot
///   be represented
///
/// # Example
/// ```
/// use alphadec::encode;
/// use chrono::{TimeZone, Utc};
///
/// let noon = Utc.with_ymd_and_hms(2023, 7, 2, 12, 0, 0).unwrap();
/// let ad = encode(noon).unwrap();
/// assert_eq!(ad.canonical, "2023_N0A0_000000");
/// assert_eq!(ad.readable(), "N0:A0");
/// ```
pub fn encode(instant: DateTime<Utc>) -> Result<AlphaDec, EncodeError> {
    let year = instant.year();
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(EncodeError::YearOutOfRange { year });
    }

    let invalid = EncodeError::InvalidInstant {
        millis: instant.timestamp_millis(),
    };
    let start = year_start(year).ok_or(invalid)?;
    let ms_since_year_start = (instant - start).num_milliseconds();

    let sizes = UnitSizes::for_year(year);
    trace!(
        year,
        year_total = %sizes.year,
        period = %sizes.period,
        arc = %sizes.arc,
        bar = %sizes.bar,
        beat = %sizes.beat,
        "scaled unit sizes"
    );

    // Peel whole units coarsest first; `remaining` ends as the sub-beat leftover
    let mut remaining = Scaled::from_millis(ms_since_year_start);
    let period = take_index(&mut remaining, &sizes, Unit::Period)?;
    let arc = take_index(&mut remaining, &sizes, Unit::Arc)?;
    let bar = take_index(&mut remaining, &sizes, Unit::Bar)?;
    let beat = take_index(&mut remaining, &sizes, Unit::Beat)?;

    let ms_offset_in_beat = remaining
        .floor_millis()
        .and_then(|ms| u32::try_from(ms).ok())
        .ok_or(invalid)?;

    let period_letter = index_to_letter(i64::from(period))?;
    let bar_letter = index_to_letter(i64::from(bar))?;

    let arc_start = sizes.period.times(u32::from(period)) + sizes.arc.times(u32::from(arc));
    let arc_start_ms_in_year = arc_start.floor_millis().ok_or(invalid)?;
    let arc_end_ms_in_year = sizes
        .arc
        .floor_millis()
        .and_then(|len| arc_start_ms_in_year.checked_add(len))
        .ok_or(invalid)?;

    let canonical =
        format!("{year:04}_{period_letter}{arc}{bar_letter}{beat}_{ms_offset_in_beat:06}");
    debug!(%canonical, ms_since_year_start, "encoded instant");

    Ok(AlphaDec {
        year,
        period,
        arc,
        bar,
        beat,
        ms_offset_in_beat,
        period_letter,
        bar_letter,
        canonical,
        arc_start_ms_in_year,
        arc_end_ms_in_year,
    })
}

/// Encode a Unix timestamp in milliseconds
///
/// # Errors
/// - `EncodeError::InvalidInstant` if `millis` is outside the range of
///   `DateTime<Utc>`
/// - anything [`encode`] returns
pub fn encode_millis(millis: i64) -> Result<AlphaDec, EncodeError> {
    let instant =
        DateTime::from_timestamp_millis(millis).ok_or(EncodeError::InvalidInstant { millis })?;
    encode(instant)
}

/// Encode the current system time
///
/// # Errors
/// See [`encode`].
pub fn encode_now() -> Result<AlphaDec, EncodeError> {
    encode(Utc::now())
}

/// Take whole `unit`s out of `remaining` and check the count fits the level
#[inline]
fn take_index(remaining: &mut Scaled, sizes: &UnitSizes, unit: Unit) -> Result<u8, RangeError> {
    let count = remaining.take_units(sizes.of(unit));
    match u8::try_from(&count) {
        Ok(index) if index <= unit.max_index() => Ok(index),
        _ => Err(RangeError::IndexOutOfRange {
            index: count.to_i64().unwrap_or(i64::MAX),
            max: unit.max_index(),
        }),
    }
}
