//! Strategy parameters.

use crate::error::{ConfigurationError, DepthParameter};
use crate::strategy::StrategyKind;

/// Default depth limit for depth-limited search.
pub const DEFAULT_DEPTH_LIMIT: i64 = 3;

/// Default maximum depth for iterative deepening.
pub const DEFAULT_MAX_DEPTH: i64 = 10;

/// Numeric parameters for the depth-driven strategies.
///
/// Values are signed because they arrive straight from user input; only the
/// parameter the selected strategy actually reads is validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchParams {
    /// Leaf depth for depth-limited search.
    pub depth_limit: i64,
    /// Largest limit tried by iterative deepening (inclusive).
    pub max_depth: i64,
}

impl SearchParams {
    /// Validate both parameters regardless of strategy.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::NegativeDepth`] for the first negative
    /// parameter, `depth_limit` first.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        self.depth_limit()?;
        self.max_depth()?;
        Ok(())
    }

    /// Validate the parameters `strategy` depends on.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::NegativeDepth`] for a negative
    /// `depth_limit` (depth-limited) or `max_depth` (iterative deepening).
    pub fn validate_for(&self, strategy: StrategyKind) -> Result<(), ConfigurationError> {
        match strategy {
            StrategyKind::DepthLimited => {
                check(DepthParameter::DepthLimit, self.depth_limit).map(|_| ())
            }
            StrategyKind::IterativeDeepening => {
                check(DepthParameter::MaxDepth, self.max_depth).map(|_| ())
            }
            _ => Ok(()),
        }
    }

    /// `depth_limit` as an unsigned depth, saturating at `u32::MAX`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::NegativeDepth`] if negative.
    pub fn depth_limit(&self) -> Result<u32, ConfigurationError> {
        check(DepthParameter::DepthLimit, self.depth_limit)
    }

    /// `max_depth` as an unsigned depth, saturating at `u32::MAX`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::NegativeDepth`] if negative.
    pub fn max_depth(&self) -> Result<u32, ConfigurationError> {
        check(DepthParameter::MaxDepth, self.max_depth)
    }
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            depth_limit: DEFAULT_DEPTH_LIMIT,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

fn check(parameter: DepthParameter, value: i64) -> Result<u32, ConfigurationError> {
    if value < 0 {
        return Err(ConfigurationError::NegativeDepth { parameter, value });
    }
    Ok(u32::try_from(value).unwrap_or(u32::MAX))
}
