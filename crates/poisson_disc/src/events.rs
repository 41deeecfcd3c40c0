//! Event types and sinks for observing a sampler step by step.
//!
//! [`crate::sampler::Sampler::step_with_events`] reports every accepted point,
//! rejected candidate and retired active point to an [`EventSink`]. Visualizations use
//! this to animate the frontier; tests use it to check the loop's decisions.
use glam::Vec2;

use crate::point::Point;

/// Why a candidate position was not accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Outside the open domain `(0, width) x (0, height)`.
    OutOfBounds,
    /// Its grid cell already holds a point.
    CellOccupied,
    /// Closer than the radius to the point with this index.
    TooClose { neighbor: usize },
}

/// Describes events emitted while stepping a sampler.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub enum SamplerEvent {
    /// A candidate passed every check and was added to the point store.
    PointAccepted {
        /// Index of the new point in the point store.
        index: usize,
        /// The accepted point.
        point: Point,
        /// Index of the active point it was spawned from.
        parent: usize,
    },

    /// A candidate was discarded.
    CandidateRejected {
        /// Candidate position after flooring.
        position: Vec2,
        /// Reason for the rejection.
        reason: Rejection,
    },

    /// An active point produced no valid candidate and left the active set.
    PointRetired {
        /// Index of the retired point in the point store.
        index: usize,
    },
}

/// A generic event sink that accepts [`SamplerEvent`]s.
pub trait EventSink {
    fn send(&mut self, event: SamplerEvent);
}

/// A no-op event sink.
impl EventSink for () {
    #[inline]
    fn send(&mut self, _event: SamplerEvent) {}
}

/// An event sink that forwards to a user-provided closure.
pub struct FnSink<F>
where
    F: FnMut(SamplerEvent),
{
    f: F,
}

impl<F> FnSink<F>
where
    F: FnMut(SamplerEvent),
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> EventSink for FnSink<F>
where
    F: FnMut(SamplerEvent),
{
    #[inline]
    fn send(&mut self, event: SamplerEvent) {
        (self.f)(event);
    }
}

/// An event sink that collects all events in a `Vec`.
#[derive(Debug, Default)]
pub struct VecSink {
    events: Vec<SamplerEvent>,
}

impl VecSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn into_inner(self) -> Vec<SamplerEvent> {
        self.events
    }

    pub fn as_slice(&self) -> &[SamplerEvent] {
        &self.events
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl EventSink for VecSink {
    #[inline]
    fn send(&mut self, event: SamplerEvent) {
        self.events.push(event);
    }
}
