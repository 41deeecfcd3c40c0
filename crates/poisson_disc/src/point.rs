//! Accepted sample points.
use glam::{UVec2, Vec2};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A point accepted into the point store together with its grid cell.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    /// Position in domain coordinates, floored to whole pixels.
    pub position: Vec2,
    /// Grid cell holding this point.
    pub cell: UVec2,
}

impl Point {
    pub(crate) fn new(position: Vec2, cell: UVec2) -> Self {
        Self { position, cell }
    }

    #[inline]
    pub fn px(&self) -> f32 {
        self.position.x
    }

    #[inline]
    pub fn py(&self) -> f32 {
        self.position.y
    }

    #[inline]
    pub fn gx(&self) -> u32 {
        self.cell.x
    }

    #[inline]
    pub fn gy(&self) -> u32 {
        self.cell.y
    }
}

impl From<Point> for mint::Vector2<f32> {
    fn from(point: Point) -> Self {
        point.position.into()
    }
}
