//! Quality Type-Safe Wrapper
//!
//! Range-validated HEIF compression quality. Validated at construction,
//! so downstream code never re-checks the range.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Minimum quality (maximum compression)
pub const QUALITY_MIN: u8 = 0;

/// Maximum quality (minimum compression)
pub const QUALITY_MAX: u8 = 100;

/// Default quality when none is given on the command line
pub const QUALITY_DEFAULT: u8 = 50;

/// Quality error type
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QualityError {
    #[error("Quality must be in range {min}-{max}, got {value}")]
    OutOfRange { value: u8, min: u8, max: u8 },
}

/// HEIF compression quality, guaranteed to be in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Quality(u8);

impl Quality {
    /// Create a validated quality value.
    ///
    /// # Examples
    /// ```
    /// use shared_utils::types::Quality;
    ///
    /// assert!(Quality::new(50).is_ok());
    /// assert!(Quality::new(101).is_err());
    /// ```
    pub fn new(value: u8) -> Result<Self, QualityError> {
        if value > QUALITY_MAX {
            return Err(QualityError::OutOfRange {
                value,
                min: QUALITY_MIN,
                max: QUALITY_MAX,
            });
        }
        Ok(Self(value))
    }

    /// The raw quality value.
    pub fn value(self) -> u8 {
        self.0
    }
}

impl Default for Quality {
    fn default() -> Self {
        Self(QUALITY_DEFAULT)
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u8> for Quality {
    type Error = QualityError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Quality> for u8 {
    fn from(quality: Quality) -> Self {
        quality.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_boundary_values_accepted() {
        assert_eq!(Quality::new(0).unwrap().value(), 0);
        assert_eq!(Quality::new(100).unwrap().value(), 100);
    }

    #[test]
    fn test_out_of_range_rejected() {
        assert_eq!(
            Quality::new(101),
            Err(QualityError::OutOfRange {
                value: 101,
                min: 0,
                max: 100
            })
        );
        assert!(Quality::new(255).is_err());
    }

    #[test]
    fn test_default_is_50() {
        assert_eq!(Quality::default().value(), QUALITY_DEFAULT);
        assert_eq!(QUALITY_DEFAULT, 50);
    }

    #[test]
    fn test_display() {
        assert_eq!(Quality::new(85).unwrap().to_string(), "85");
    }

    #[test]
    fn test_try_from_roundtrip() {
        let q = Quality::try_from(42u8).unwrap();
        assert_eq!(u8::from(q), 42);
    }

    proptest! {
        #[test]
        fn prop_in_range_accepted(v in 0u8..=100) {
            prop_assert_eq!(Quality::new(v).unwrap().value(), v);
        }

        #[test]
        fn prop_out_of_range_rejected(v in 101u8..=255) {
            prop_assert!(Quality::new(v).is_err());
        }
    }
}
