//! The structured result of encoding an instant.

use std::fmt;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::encoder::year_start;

/// An encoded instant
///
/// Produced fresh by every call to [`encode`](crate::encode).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlphaDec {
    /// Gregorian year (UTC)
    pub year: i32,
    /// 1/26th of the year, 0-25
    pub period: u8,
    /// 1/10th of the period, 0-9
    pub arc: u8,
    /// 1/26th of the arc, 0-25
    pub bar: u8,
    /// 1/10th of the bar, 0-9
    pub beat: u8,
    /// Whole milliseconds elapsed inside the beat
    pub ms_offset_in_beat: u32,
    pub period_letter: char,
    pub bar_letter: char,
    /// `YYYY_PaBt_MMMMMM`
    pub canonical: String,
    /// Start of the current arc, in milliseconds since the start of the year
    pub arc_start_ms_in_year: i64,
    /// End of the current arc, in milliseconds since the start of the year
    pub arc_end_ms_in_year: i64,
}

impl AlphaDec {
    /// Human-oriented form without year or milliseconds, e.g. `N0:A0`
    #[must_use]
    pub fn readable(&self) -> String {
        format!("{}{}:{}{}", self.period_letter, self.arc, self.bar_letter, self.beat)
    }

    /// Canonical string without the millisecond tail, e.g. `2023_N0A0`
    #[must_use]
    pub fn label(&self) -> String {
        format!(
            "{:04}_{}{}{}{}",
            self.year, self.period_letter, self.arc, self.bar_letter, self.beat
        )
    }

    /// Period letter and arc digit, e.g. `N0`
    #[must_use]
    pub fn arc_label(&self) -> String {
        format!("{}{}", self.period_letter, self.arc)
    }

    /// Start and end of the current arc as instants
    ///
    /// Returns `None` if either bound is outside the range of `DateTime<Utc>`.
    #[must_use]
    pub fn arc_bounds(&self) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        let start = year_start(self.year)?;
        let arc_start =
            start.checked_add_signed(Duration::try_milliseconds(self.arc_start_ms_in_year)?)?;
        let arc_end =
            start.checked_add_signed(Duration::try_milliseconds(self.arc_end_ms_in_year)?)?;
        Some((arc_start, arc_end))
    }
}

impl fmt::Display for AlphaDec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical)
    }
}
