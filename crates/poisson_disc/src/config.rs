//! Sampler configuration and the grid layout derived from it.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default number of candidate attempts per active point visit.
pub const DEFAULT_ATTEMPTS: u32 = 30;

/// Default dimensionality used to derive the cell size.
pub const DEFAULT_DIMENSIONS: u32 = 2;

/// Immutable parameters of a [`crate::sampler::Sampler`].
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SamplerConfig {
    /// Domain width; points lie strictly inside `(0, width)`.
    pub width: f32,
    /// Domain height; points lie strictly inside `(0, height)`.
    pub height: f32,
    /// Minimum allowed distance between neighbouring points (`r`).
    pub radius: f32,
    /// Candidate attempts per active point visit (`k`).
    pub attempts: u32,
    /// Dimensionality used to derive the cell size (`n`).
    pub dimensions: u32,
}

impl SamplerConfig {
    /// Creates a configuration for a `width` x `height` domain with minimum distance `radius`.
    pub fn new(width: f32, height: f32, radius: f32) -> Self {
        Self {
            width,
            height,
            radius,
            attempts: DEFAULT_ATTEMPTS,
            dimensions: DEFAULT_DIMENSIONS,
        }
    }

    /// Sets the number of candidate attempts per active point visit.
    pub fn with_attempts(mut self, attempts: u32) -> Self {
        self.attempts = attempts;
        self
    }

    /// Sets the dimensionality used to derive the cell size.
    pub fn with_dimensions(mut self, dimensions: u32) -> Self {
        self.dimensions = dimensions;
        self
    }

    /// Validates the configuration and derives its grid layout.
    pub fn validate(&self) -> Result<GridLayout, ConfigError> {
        positive("width", self.width)?;
        positive("height", self.height)?;
        positive("radius", self.radius)?;
        if self.attempts == 0 {
            return Err(ConfigError::NonPositive {
                field: "attempts",
                value: 0.0,
            });
        }
        if self.dimensions == 0 {
            return Err(ConfigError::NonPositive {
                field: "dimensions",
                value: 0.0,
            });
        }

        GridLayout::derive(self)
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { field, value })
    }
}

/// Background grid dimensions derived from a [`SamplerConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GridLayout {
    /// Side length of one cell, `floor(r / sqrt(n))`.
    pub cell_size: u32,
    /// `floor(width / cell_size)`.
    pub cols: u32,
    /// `floor(height / cell_size)`.
    pub rows: u32,
}

impl GridLayout {
    fn derive(config: &SamplerConfig) -> Result<Self, ConfigError> {
        let cell_size = (f64::from(config.radius) / f64::from(config.dimensions).sqrt()).floor();
        if cell_size < 1.0 {
            return Err(ConfigError::CellSizeTooSmall {
                radius: config.radius,
                dimensions: config.dimensions,
            });
        }

        let cols = (f64::from(config.width) / cell_size).floor();
        let rows = (f64::from(config.height) / cell_size).floor();
        if cols < 1.0 || rows < 1.0 || cols >= f64::from(u32::MAX) || rows >= f64::from(u32::MAX)
        {
            return Err(ConfigError::DegenerateGrid {
                cols: cols as u32,
                rows: rows as u32,
            });
        }

        Ok(Self {
            cell_size: cell_size as u32,
            cols: cols as u32,
            rows: rows as u32,
        })
    }

    /// Cell edge length as a float, for position to cell conversion.
    #[inline]
    pub fn cell_extent(&self) -> f32 {
        self.cell_size as f32
    }
}
