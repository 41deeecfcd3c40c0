//! Error types and result alias for the crate.
//!
//! This module defines [`enum@crate::error::Error`], the crate-wide [Result] alias and
//! [`ConfigError`], the only failure a [`crate::sampler::Sampler`] can report. Candidate
//! rejection and active point retirement are regular algorithm outcomes and never
//! surface here.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

/// Reasons a [`crate::config::SamplerConfig`] cannot produce a usable grid.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{field} must be finite and > 0, got {value}")]
    NonPositive { field: &'static str, value: f32 },

    #[error("cell size floor({radius} / sqrt({dimensions})) rounds to zero")]
    CellSizeTooSmall { radius: f32, dimensions: u32 },

    #[error("grid of {cols}x{rows} cells is degenerate")]
    DegenerateGrid { cols: u32, rows: u32 },
}
