//! Error types for alphadec encoding and decoding operations.

use std::fmt;

/// Error returned by the letter codec and by unit index checks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeError {
    /// Index falls outside `[0, max]`
    IndexOutOfRange { index: i64, max: u8 },
    /// Character is not a single ASCII uppercase letter
    InvalidLetter { ch: char },
}

/// Error returned when encoding an instant fails
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodeError {
    /// Instant (as Unix milliseconds) cannot be resolved to a UTC calendar year
    InvalidInstant { millis: i64 },
    /// Year cannot be written as the four-digit canonical year field
    YearOutOfRange { year: i32 },
    /// A hierarchy index came out of range
    Range(RangeError),
}

/// Error returned when decoding a canonical string fails
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Input does not match `YYYY_PaBt_MMMMMM`
    MalformedCanonical { input: String },
    /// Decoded offset cannot be represented as an instant
    InvalidInstant { year: i32 },
}

impl fmt::Display for RangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfRange { index, max } => {
                write!(f, "index {index} is out of range [0, {max}]")
            }
            Self::InvalidLetter { ch } => {
                write!(f, "{ch:?} is not an uppercase letter A-Z")
            }
        }
    }
}

impl std::error::Error for RangeError {}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInstant { millis } => {
                write!(f, "instant {millis}ms cannot be resolved to a UTC year")
            }
            Self::YearOutOfRange { year } => {
                write!(f, "year {year} is outside the canonical range 0000-9999")
            }
            Self::Range(err) => write!(f, "hierarchy index error: {err}"),
        }
    }
}

impl std::error::Error for EncodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Range(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RangeError> for EncodeError {
    fn from(err: RangeError) -> Self {
        Self::Range(err)
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedCanonical { input } => {
                write!(f, "bad AlphaDec canonical string (format YYYY_PaBt_MMMMMM): {input:?}")
            }
            Self::InvalidInstant { year } => {
                write!(f, "decoded offset in year {year} is not a representable instant")
            }
        }
    }
}

impl std::error::Error for DecodeError {}
