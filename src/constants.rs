//! Hierarchy configuration: subdivision factors and calendar helpers.

/// Periods in a year (lettered `A`-`Z`)
pub const PERIODS_PER_YEAR: u32 = 26;

/// Arcs in a period (digit `0`-`9`)
pub const ARCS_PER_PERIOD: u32 = 10;

/// Bars in an arc (lettered `A`-`Z`)
pub const BARS_PER_ARC: u32 = 26;

/// Beats in a bar (digit `0`-`9`)
pub const BEATS_PER_BAR: u32 = 10;

/// Milliseconds in a UTC day (no leap seconds)
pub const MS_PER_DAY: i64 = 86_400_000;

/// Smallest year the four-digit canonical year field can carry
pub const MIN_YEAR: i32 = 0;

/// Largest year the four-digit canonical year field can carry
pub const MAX_YEAR: i32 = 9999;

/// One level of the year hierarchy, coarsest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    Period,
    Arc,
    Bar,
    Beat,
}

impl Unit {
    /// All levels in descent order
    pub const ALL: [Unit; 4] = [Unit::Period, Unit::Arc, Unit::Bar, Unit::Beat];

    /// How many of this unit fit in its parent
    #[inline]
    #[must_use]
    pub const fn count(self) -> u32 {
        match self {
            Self::Period => PERIODS_PER_YEAR,
            Self::Arc => ARCS_PER_PERIOD,
            Self::Bar => BARS_PER_ARC,
            Self::Beat => BEATS_PER_BAR,
        }
    }

    /// Largest valid index at this level
    #[inline]
    #[must_use]
    pub const fn max_index(self) -> u8 {
        (self.count() - 1) as u8
    }

    /// Periods and bars render as letters, arcs and beats as digits
    #[inline]
    #[must_use]
    pub const fn is_lettered(self) -> bool {
        matches!(self, Self::Period | Self::Bar)
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Period => "period",
            Self::Arc => "arc",
            Self::Bar => "bar",
            Self::Beat => "beat",
        }
    }
}

/// Gregorian leap year rule
#[inline]
#[must_use]
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

#[inline]
#[must_use]
pub const fn days_in_year(year: i32) -> u32 {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}

/// Total milliseconds in the given year
#[inline]
#[must_use]
pub const fn ms_in_year(year: i32) -> i64 {
    days_in_year(year) as i64 * MS_PER_DAY
}
