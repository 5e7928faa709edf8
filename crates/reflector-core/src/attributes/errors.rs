//! Error type and nesting limits for request flattening.

use thiserror::Error;

// DoS protection limit (public for tests)
pub const MAX_NESTING_DEPTH: usize = 64;

/// Limits applied while flattening a request document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlattenLimits {
    /// Deepest object nesting that is still expanded. The top-level object is depth 1;
    /// a value of 0 is treated as 1.
    pub max_depth: usize,
}

impl FlattenLimits {
    /// Values below 1 are raised to 1: the top-level object is always admitted.
    pub const fn with_max_depth(max_depth: usize) -> Self {
        Self {
            max_depth: if max_depth == 0 { 1 } else { max_depth },
        }
    }
}

impl Default for FlattenLimits {
    fn default() -> Self {
        Self {
            max_depth: MAX_NESTING_DEPTH,
        }
    }
}

/// Error returned when a request document cannot be flattened.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("unable to find request object in input: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("security limit exceeded: nesting depth {depth} exceeds maximum {max}")]
    NestingTooDeep { depth: usize, max: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_max_depth_is_raised_to_one() {
        assert_eq!(FlattenLimits::with_max_depth(0).max_depth, 1);
        assert_eq!(FlattenLimits::with_max_depth(5).max_depth, 5);
        assert_eq!(FlattenLimits::default().max_depth, MAX_NESTING_DEPTH);
    }

    #[test]
    fn test_error_text_is_lower_case() {
        let err = DecodeError::NestingTooDeep { depth: 3, max: 2 };
        assert_eq!(
            err.to_string(),
            "security limit exceeded: nesting depth 3 exceeds maximum 2"
        );
    }
}
