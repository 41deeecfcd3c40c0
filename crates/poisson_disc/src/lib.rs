#![forbid(unsafe_code)]
//! poisson_disc: incremental Bridson Poisson-disc sampling over a bounded 2D domain.
//!
//! Modules:
//! - config: sampler parameters and the derived grid layout
//! - grid: background cell grid holding one point index per cell
//! - sampler: the stepping sampler (seed, candidate loop, active frontier)
//! - random: injectable random source
//! - events: observe accepted, rejected and retired points while stepping
//! - sampling: one-shot strategy returning finished point lists
pub mod config;
pub mod error;
pub mod events;
pub mod grid;
pub mod point;
pub mod random;
pub mod sampler;
pub mod sampling;

/// Convenient re-exports for common types. Import with `use poisson_disc::prelude::*;`.
pub mod prelude {
    pub use crate::config::{GridLayout, SamplerConfig};
    pub use crate::error::{ConfigError, Error, Result};
    pub use crate::events::{EventSink, FnSink, Rejection, SamplerEvent, VecSink};
    pub use crate::grid::CellGrid;
    pub use crate::point::Point;
    pub use crate::random::{RandomSource, RngSource};
    pub use crate::sampler::{Sampler, SamplerStats};
    pub use crate::sampling::{PoissonDiscSampling, PositionSampling};
}
