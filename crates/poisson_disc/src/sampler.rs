//! Incremental Bridson Poisson-disc sampler.
//!
//! [`Sampler`] owns the point store, the active frontier and the background
//! [`CellGrid`]. Each iteration picks a random active point and tries `k` candidates
//! at evenly spaced angles and random distances in `[r, 2r)`. Every valid candidate is
//! accepted; an active point that yields none is retired for good.
//!
//! The loop can be driven to completion with [`Sampler::run`] or advanced in small
//! batches with [`Sampler::step`] so callers can interleave rendering or cancellation.
use std::f64::consts::TAU;

use glam::{UVec2, Vec2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::config::{GridLayout, SamplerConfig};
use crate::error::Result;
use crate::events::{EventSink, Rejection, SamplerEvent};
use crate::grid::CellGrid;
use crate::point::Point;
use crate::random::{RandomSource, RngSource};

/// Counters describing the work done since the last reset.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SamplerStats {
    /// Non-idle loop iterations.
    pub iterations: usize,
    /// Candidate positions generated.
    pub candidates_evaluated: usize,
    /// Candidate positions rejected.
    pub candidates_rejected: usize,
    /// Active points retired after exhausting their attempts.
    pub points_retired: usize,
}

/// Poisson-disc sampler over `(0, width) x (0, height)`.
#[derive(Debug, Clone)]
pub struct Sampler<G = RngSource<StdRng>> {
    config: SamplerConfig,
    radius_squared: f32,
    angle_step: f64,
    grid: CellGrid,
    points: Vec<Point>,
    active: Vec<usize>,
    stats: SamplerStats,
    random: G,
}

impl Sampler<RngSource<StdRng>> {
    /// Creates a sampler driven by a [`StdRng`] seeded with `seed`.
    pub fn seeded(config: SamplerConfig, seed: u64) -> Result<Self> {
        Self::from_rng(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Sampler<RngSource<R>> {
    /// Creates a sampler driven by `rng`.
    pub fn from_rng(config: SamplerConfig, rng: R) -> Result<Self> {
        Self::new(config, RngSource::new(rng))
    }
}

impl<G: RandomSource> Sampler<G> {
    /// Validates `config`, builds an empty grid and inserts the seed point.
    pub fn new(config: SamplerConfig, random: G) -> Result<Self> {
        let layout = config.validate()?;
        let mut sampler = Self {
            config,
            radius_squared: config.radius * config.radius,
            angle_step: TAU / f64::from(config.attempts),
            grid: CellGrid::new(layout),
            points: Vec::new(),
            active: Vec::new(),
            stats: SamplerStats::default(),
            random,
        };
        sampler.reset();
        Ok(sampler)
    }

    /// Clears all state and inserts one random seed point.
    pub fn reset(&mut self) {
        self.points.clear();
        self.active.clear();
        self.grid.clear();
        self.stats = SamplerStats::default();

        let x = self.random.random_range(0.0, self.config.width).floor();
        let y = self.random.random_range(0.0, self.config.height).floor();
        let seed = Vec2::new(x, y);
        // A source returning values outside [0, max) still gets a storable cell.
        let cell = self.grid.cell_of(seed).unwrap_or_else(|| self.clamped_cell(seed));
        self.add_point(seed, cell);

        debug!("Seeded sampler at ({}, {}).", x, y);
    }

    /// Resets, then steps until no active points remain.
    pub fn run(&mut self) {
        self.run_with_events(&mut ());
    }

    /// Like [`Sampler::run`], reporting every decision to `sink`.
    pub fn run_with_events<S: EventSink + ?Sized>(&mut self, sink: &mut S) {
        self.reset();
        while !self.active.is_empty() {
            self.step_with_events(1, sink);
        }

        info!(
            "Poisson-disc sampling finished: {} points after {} iterations ({} candidates rejected).",
            self.points.len(),
            self.stats.iterations,
            self.stats.candidates_rejected
        );
    }

    /// Performs `n` iterations; iterations with no active points are no-ops.
    pub fn step(&mut self, n: usize) {
        self.step_with_events(n, &mut ());
    }

    /// Like [`Sampler::step`], reporting every decision to `sink`.
    pub fn step_with_events<S: EventSink + ?Sized>(&mut self, n: usize, sink: &mut S) {
        for _ in 0..n {
            if self.active.is_empty() {
                return;
            }
            self.iterate(sink);
        }
    }

    fn iterate<S: EventSink + ?Sized>(&mut self, sink: &mut S) {
        let slot = self.random.random_index(self.active.len());
        let parent = self.active[slot];
        let origin = self.points[parent].position;
        let radius = self.config.radius;

        self.stats.iterations += 1;
        let mut found = false;

        for tries in 0..self.config.attempts {
            // Angles are evenly spread; only the distance is random.
            let angle = f64::from(tries) * self.angle_step;
            let distance = f64::from(self.random.random_range(radius, radius * 2.0));
            let candidate = Vec2::new(
                (f64::from(origin.x) + angle.cos() * distance).floor() as f32,
                (f64::from(origin.y) + angle.sin() * distance).floor() as f32,
            );
            self.stats.candidates_evaluated += 1;

            match self.evaluate(candidate) {
                Ok(cell) => {
                    found = true;
                    let index = self.add_point(candidate, cell);
                    sink.send(SamplerEvent::PointAccepted {
                        index,
                        point: self.points[index],
                        parent,
                    });
                }
                Err(reason) => {
                    self.stats.candidates_rejected += 1;
                    sink.send(SamplerEvent::CandidateRejected {
                        position: candidate,
                        reason,
                    });
                }
            }
        }

        if !found {
            self.active.swap_remove(slot);
            self.stats.points_retired += 1;
            sink.send(SamplerEvent::PointRetired { index: parent });
        }
    }

    /// Checks a floored candidate against the bounds, its own cell and the occupants
    /// of the surrounding cells.
    fn evaluate(&self, candidate: Vec2) -> std::result::Result<UVec2, Rejection> {
        let inside = candidate.x > 0.0
            && candidate.x < self.config.width
            && candidate.y > 0.0
            && candidate.y < self.config.height;
        if !inside {
            return Err(Rejection::OutOfBounds);
        }

        let cell = self.grid.cell_of(candidate).ok_or(Rejection::OutOfBounds)?;
        if self.grid.is_occupied(cell) {
            return Err(Rejection::CellOccupied);
        }

        for neighbor in self.grid.neighbors(cell) {
            let other = self.points[neighbor].position;
            if other.distance_squared(candidate) < self.radius_squared {
                return Err(Rejection::TooClose { neighbor });
            }
        }

        Ok(cell)
    }

    fn add_point(&mut self, position: Vec2, cell: UVec2) -> usize {
        let index = self.points.len();
        self.points.push(Point::new(position, cell));
        self.grid.set(cell, index);
        self.active.push(index);
        index
    }

    fn clamped_cell(&self, position: Vec2) -> UVec2 {
        let layout = self.grid.layout();
        let size = layout.cell_extent();
        let gx = (position.x / size).floor().clamp(0.0, layout.cols as f32);
        let gy = (position.y / size).floor().clamp(0.0, layout.rows as f32);
        UVec2::new(gx as u32, gy as u32)
    }

    pub fn config(&self) -> &SamplerConfig {
        &self.config
    }

    pub fn layout(&self) -> GridLayout {
        self.grid.layout()
    }

    pub fn cell_size(&self) -> u32 {
        self.grid.layout().cell_size
    }

    pub fn cols(&self) -> u32 {
        self.grid.layout().cols
    }

    pub fn rows(&self) -> u32 {
        self.grid.layout().rows
    }

    /// Accepted points in generation order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Accepted positions in generation order.
    pub fn positions(&self) -> impl ExactSizeIterator<Item = mint::Vector2<f32>> + '_ {
        self.points.iter().map(|p| p.position.into())
    }

    /// Indices of points still able to spawn candidates, in no particular order.
    pub fn active(&self) -> &[usize] {
        &self.active
    }

    pub fn active_len(&self) -> usize {
        self.active.len()
    }

    /// True once the active set is empty and further steps are no-ops.
    pub fn is_finished(&self) -> bool {
        self.active.is_empty()
    }

    pub fn grid(&self) -> &CellGrid {
        &self.grid
    }

    pub fn stats(&self) -> SamplerStats {
        self.stats
    }

    /// Consumes the sampler, returning the accepted points.
    pub fn into_points(self) -> Vec<Point> {
        self.points
    }
}
