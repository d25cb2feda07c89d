//! Exact scaled-integer arithmetic for the year hierarchy.
//!
//! Every millisecond quantity is multiplied by [`SCALE`] and held as a
//! [`BigInt`] before any division, so that the floor divisions down the
//! hierarchy never go through floating point.
//!
//! Each unit size is the floor of its parent size divided by the subdivision
//! count, and the truncated remainder is not redistributed. The last unit at
//! every level is therefore a few scaled units longer than its siblings:
//!
//! | Year | period | arc | bar | beat |
//! |------|--------|-----|-----|------|
//! | 365 days | 1_212_923_076_923_076 | 121_292_307_692_307 | 4_665_088_757_396 | 466_508_875_739 |
//! | 366 days | 1_216_246_153_846_153 | 121_624_615_384_615 | 4_677_869_822_485 | 467_786_982_248 |
//!
//! Existing canonical strings depend on these exact sizes.

use std::fmt;
use std::ops::Add;

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{ToPrimitive, Zero};

use crate::constants::{ms_in_year, Unit};

/// Fixed-point factor applied to milliseconds
pub const SCALE: u64 = 1_000_000;

/// A millisecond quantity multiplied by [`SCALE`]
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Scaled(BigInt);

impl Scaled {
    #[must_use]
    pub fn zero() -> Self {
        Self(BigInt::zero())
    }

    /// Scale a whole number of milliseconds
    #[must_use]
    pub fn from_millis(ms: i64) -> Self {
        Self(BigInt::from(ms) * SCALE)
    }

    /// Wrap an already-scaled value
    #[must_use]
    pub fn from_raw(raw: BigInt) -> Self {
        Self(raw)
    }

    #[must_use]
    pub fn as_raw(&self) -> &BigInt {
        &self.0
    }

    /// Floor division by a subdivision count
    #[must_use]
    pub fn div_floor(&self, divisor: u32) -> Self {
        Self(Integer::div_floor(&self.0, &BigInt::from(divisor)))
    }

    /// `self * n`, used to rebuild an offset from a unit index
    #[must_use]
    pub fn times(&self, n: u32) -> Self {
        Self(&self.0 * BigInt::from(n))
    }

    /// Remove as many whole `unit`s as fit, returning how many were taken.
    ///
    /// `self` keeps the remainder, which is always in `[0, unit)` for a
    /// non-negative value and a positive unit.
    pub fn take_units(&mut self, unit: &Scaled) -> BigInt {
        let (count, rest) = self.0.div_mod_floor(&unit.0);
        self.0 = rest;
        count
    }

    /// Whole milliseconds, rounding down
    ///
    /// Returns `None` if the result does not fit in an `i64`.
    #[must_use]
    pub fn floor_millis(&self) -> Option<i64> {
        Integer::div_floor(&self.0, &BigInt::from(SCALE)).to_i64()
    }

    /// Whole milliseconds, rounding up
    ///
    /// Returns `None` if the result does not fit in an `i64`.
    #[must_use]
    pub fn ceil_millis(&self) -> Option<i64> {
        Integer::div_ceil(&self.0, &BigInt::from(SCALE)).to_i64()
    }
}

impl Add for Scaled {
    type Output = Scaled;

    fn add(self, rhs: Scaled) -> Scaled {
        Scaled(self.0 + rhs.0)
    }
}

impl fmt::Display for Scaled {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Scaled sizes of every hierarchy level for one calendar year
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitSizes {
    pub year: Scaled,
    pub period: Scaled,
    pub arc: Scaled,
    pub bar: Scaled,
    pub beat: Scaled,
}

impl UnitSizes {
    /// Compute the division chain for `year`, honouring its leap status
    #[must_use]
    pub fn for_year(year: i32) -> Self {
        let total = Scaled::from_millis(ms_in_year(year));
        let period = total.div_floor(Unit::Period.count());
        let arc = period.div_floor(Unit::Arc.count());
        let bar = arc.div_floor(Unit::Bar.count());
        let beat = bar.div_floor(Unit::Beat.count());
        Self {
            year: total,
            period,
            arc,
            bar,
            beat,
        }
    }

    /// Size of a single level
    #[inline]
    #[must_use]
    pub fn of(&self, unit: Unit) -> &Scaled {
        match unit {
            Unit::Period => &self.period,
            Unit::Arc => &self.arc,
            Unit::Bar => &self.bar,
            Unit::Beat => &self.beat,
        }
    }
}
