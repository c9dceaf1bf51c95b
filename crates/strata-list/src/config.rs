//! Growth configuration for array lists.

use std::error::Error;
use std::fmt;

use strata_core::{GrowthPolicy, SOFT_MAX_HEADROOM};

/// Configuration for the default growth policy.
///
/// Controls the capacity a default-constructed list inflates to and the
/// largest capacity any list using it may reach. Growth itself is 50% of
/// the current capacity, bounded by a soft maximum
/// [`SOFT_MAX_HEADROOM`] slots below `max_length`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GrowthConfig {
    /// Capacity of the first buffer of a default-constructed list.
    ///
    /// Default: 10.
    pub default_capacity: usize,

    /// Largest capacity that growth will produce, in slots.
    ///
    /// Default: `isize::MAX`, the most any Rust allocation can address.
    /// The allocator is still free to refuse smaller requests, which
    /// surface as capacity errors.
    pub max_length: usize,
}

impl GrowthConfig {
    /// Default first-growth capacity.
    pub const DEFAULT_CAPACITY: usize = 10;

    /// Default hard length limit.
    pub const DEFAULT_MAX_LENGTH: usize = isize::MAX as usize;

    /// Create a config with default values.
    pub fn new() -> Self {
        Self {
            default_capacity: Self::DEFAULT_CAPACITY,
            max_length: Self::DEFAULT_MAX_LENGTH,
        }
    }

    /// Create a config with explicit limits, validating them.
    ///
    /// # Errors
    ///
    /// See [`validate`](Self::validate).
    pub fn with_limits(default_capacity: usize, max_length: usize) -> Result<Self, ConfigError> {
        let config = Self {
            default_capacity,
            max_length,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check the structural invariants of this config.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::MaxLengthTooSmall`] if `max_length` leaves no room
    ///   below the soft maximum headroom.
    /// - [`ConfigError::DefaultCapacityAboveMax`] if the first growth would
    ///   already exceed `max_length`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_length <= SOFT_MAX_HEADROOM {
            return Err(ConfigError::MaxLengthTooSmall {
                max_length: self.max_length,
            });
        }
        if self.default_capacity > self.max_length {
            return Err(ConfigError::DefaultCapacityAboveMax {
                default_capacity: self.default_capacity,
                max_length: self.max_length,
            });
        }
        Ok(())
    }
}

impl Default for GrowthConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GrowthPolicy for GrowthConfig {
    fn default_capacity(&self) -> usize {
        self.default_capacity
    }

    fn max_length(&self) -> usize {
        self.max_length
    }
}

/// Errors detected by [`GrowthConfig::validate()`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// `max_length` does not exceed the soft maximum headroom.
    MaxLengthTooSmall {
        /// The configured limit.
        max_length: usize,
    },
    /// `default_capacity` is larger than `max_length`.
    DefaultCapacityAboveMax {
        /// The configured default capacity.
        default_capacity: usize,
        /// The configured limit.
        max_length: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MaxLengthTooSmall { max_length } => {
                write!(
                    f,
                    "max_length {max_length} must exceed the soft maximum headroom of {SOFT_MAX_HEADROOM}"
                )
            }
            Self::DefaultCapacityAboveMax {
                default_capacity,
                max_length,
            } => {
                write!(
                    f,
                    "default_capacity {default_capacity} exceeds max_length {max_length}"
                )
            }
        }
    }
}

impl Error for ConfigError {}
