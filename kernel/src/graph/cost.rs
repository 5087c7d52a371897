//! Fixed-point, non-negative costs.
//!
//! Edge weights, heuristics and every quantity derived from them (`g`, `f`,
//! path cost) are [`Cost`] values: whole thousandths stored in a `u64`.
//! Fractional input such as `1.5` is accepted and rounded to the nearest
//! thousandth, while arithmetic, ordering and serialization stay exact and
//! integer-only. Canonical JSON carries the raw thousandths.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Rejected cost input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CostError {
    #[error("cost must not be negative")]
    Negative,
    #[error("cost must be a finite number")]
    NotFinite,
    #[error("cost is too large to represent")]
    OutOfRange,
    #[error("cost is not a number")]
    Malformed,
}

/// A non-negative cost in thousandths of a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Cost(u64);

impl Cost {
    /// Thousandths per whole unit.
    pub const SCALE: u64 = 1000;
    pub const ZERO: Self = Self(0);
    pub const ONE: Self = Self(Self::SCALE);
    pub const MAX: Self = Self(u64::MAX);

    /// `units` whole units, saturating at [`Cost::MAX`].
    #[must_use]
    pub const fn from_units(units: u64) -> Self {
        Self(units.saturating_mul(Self::SCALE))
    }

    #[must_use]
    pub const fn from_milli(milli: u64) -> Self {
        Self(milli)
    }

    /// Raw value in thousandths; this is what canonical JSON records.
    #[must_use]
    pub const fn milli(self) -> u64 {
        self.0
    }

    /// Convert a decimal value, rounding to the nearest thousandth.
    ///
    /// # Errors
    ///
    /// Returns [`CostError`] for negative, non-finite or oversized input.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    pub fn try_from_f64(value: f64) -> Result<Self, CostError> {
        if !value.is_finite() {
            return Err(CostError::NotFinite);
        }
        if value < 0.0 {
            return Err(CostError::Negative);
        }
        let scaled = (value * Self::SCALE as f64).round();
        if scaled >= u64::MAX as f64 {
            return Err(CostError::OutOfRange);
        }
        Ok(Self(scaled as u64))
    }

    /// Approximate value in units, for display arithmetic only.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(self) -> f64 {
        self.0 as f64 / Self::SCALE as f64
    }

    #[must_use]
    pub const fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl From<u32> for Cost {
    fn from(units: u32) -> Self {
        Self::from_units(u64::from(units))
    }
}

/// Shortest exact decimal: `7`, `1.5`, `0.125`.
impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / Self::SCALE;
        let frac = self.0 % Self::SCALE;
        if frac == 0 {
            return write!(f, "{whole}");
        }
        let digits = format!("{frac:03}");
        write!(f, "{whole}.{}", digits.trim_end_matches('0'))
    }
}

impl FromStr for Cost {
    type Err = CostError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: f64 = s.trim().parse().map_err(|_| CostError::Malformed)?;
        Self::try_from_f64(value)
    }
}

impl std::iter::Sum for Cost {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Self::saturating_add)
    }
}
