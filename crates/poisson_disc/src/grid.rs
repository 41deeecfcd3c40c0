//! Background acceleration grid.
//!
//! [`CellGrid`] stores at most one point index per cell in a flat row-major array of
//! `(rows + 1) x (cols + 1)` cells. The extra row and column hold points that land in
//! the partial cell at the far domain edges.
use glam::{UVec2, Vec2};

use crate::config::GridLayout;

/// Offsets of the eight cells surrounding a cell.
const NEIGHBOR_OFFSETS: [(i64, i64); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Uniform grid mapping cells to the index of their single occupant.
#[derive(Debug, Clone)]
pub struct CellGrid {
    layout: GridLayout,
    stride: usize,
    cells: Vec<Option<usize>>,
}

impl CellGrid {
    /// Creates an empty grid for `layout`.
    pub fn new(layout: GridLayout) -> Self {
        let stride = layout.cols as usize + 1;
        let len = stride * (layout.rows as usize + 1);
        Self {
            layout,
            stride,
            cells: vec![None; len],
        }
    }

    pub fn layout(&self) -> GridLayout {
        self.layout
    }

    /// Marks every cell empty.
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Cell containing `position`, or `None` when it falls outside the stored cells.
    #[inline]
    pub fn cell_of(&self, position: Vec2) -> Option<UVec2> {
        let size = self.layout.cell_extent();
        let gx = (position.x / size).floor();
        let gy = (position.y / size).floor();
        if gx < 0.0 || gy < 0.0 || gx > self.layout.cols as f32 || gy > self.layout.rows as f32 {
            return None;
        }
        Some(UVec2::new(gx as u32, gy as u32))
    }

    #[inline]
    fn index(&self, cell: UVec2) -> Option<usize> {
        if cell.x > self.layout.cols || cell.y > self.layout.rows {
            return None;
        }
        Some(cell.y as usize * self.stride + cell.x as usize)
    }

    /// Index of the point occupying `cell`, if any.
    #[inline]
    pub fn get(&self, cell: UVec2) -> Option<usize> {
        self.index(cell).and_then(|idx| self.cells[idx])
    }

    /// Stores `point_index` as the occupant of `cell`.
    ///
    /// Panics if `cell` lies outside the grid.
    #[inline]
    pub fn set(&mut self, cell: UVec2, point_index: usize) {
        let idx = self
            .index(cell)
            .unwrap_or_else(|| panic!("cell {cell} outside {}x{} grid", self.stride, self.rows()));
        self.cells[idx] = Some(point_index);
    }

    #[inline]
    pub fn is_occupied(&self, cell: UVec2) -> bool {
        self.get(cell).is_some()
    }

    /// Occupants of the eight cells around `cell`.
    ///
    /// Neighbours are bounds-checked against `[0, cols) x [0, rows)`, so the edge
    /// row and column are never reported as neighbours.
    pub fn neighbors(&self, cell: UVec2) -> impl Iterator<Item = usize> + '_ {
        let cols = i64::from(self.layout.cols);
        let rows = i64::from(self.layout.rows);
        NEIGHBOR_OFFSETS.iter().filter_map(move |&(dx, dy)| {
            let nx = i64::from(cell.x) + dx;
            let ny = i64::from(cell.y) + dy;
            if nx < 0 || ny < 0 || nx >= cols || ny >= rows {
                return None;
            }
            self.get(UVec2::new(nx as u32, ny as u32))
        })
    }

    /// Iterates `(cell, point_index)` for every occupied cell.
    pub fn occupied(&self) -> impl Iterator<Item = (UVec2, usize)> + '_ {
        let stride = self.stride;
        self.cells.iter().enumerate().filter_map(move |(i, cell)| {
            cell.map(|idx| (UVec2::new((i % stride) as u32, (i / stride) as u32), idx))
        })
    }

    fn rows(&self) -> usize {
        self.layout.rows as usize + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> GridLayout {
        GridLayout {
            cell_size: 3,
            cols: 4,
            rows: 3,
        }
    }

    #[test]
    fn new_grid_is_empty_with_edge_cells() {
        let grid = CellGrid::new(layout());
        assert_eq!(grid.cells.len(), 5 * 4);
        assert_eq!(grid.occupied().count(), 0);
        assert!(!grid.is_occupied(UVec2::new(4, 3)));
    }

    #[test]
    fn cell_of_floors_positions() {
        let grid = CellGrid::new(layout());
        assert_eq!(grid.cell_of(Vec2::new(0.0, 0.0)), Some(UVec2::new(0, 0)));
        assert_eq!(grid.cell_of(Vec2::new(5.0, 8.0)), Some(UVec2::new(1, 2)));
        assert_eq!(grid.cell_of(Vec2::new(13.0, 11.0)), Some(UVec2::new(4, 3)));
        assert_eq!(grid.cell_of(Vec2::new(-1.0, 0.0)), None);
        assert_eq!(grid.cell_of(Vec2::new(15.0, 0.0)), None);
    }

    #[test]
    fn set_get_and_clear() {
        let mut grid = CellGrid::new(layout());
        grid.set(UVec2::new(2, 1), 7);
        assert_eq!(grid.get(UVec2::new(2, 1)), Some(7));
        assert_eq!(grid.get(UVec2::new(1, 2)), None);
        assert_eq!(grid.get(UVec2::new(9, 9)), None);
        assert_eq!(grid.occupied().collect::<Vec<_>>(), vec![(UVec2::new(2, 1), 7)]);

        grid.clear();
        assert!(!grid.is_occupied(UVec2::new(2, 1)));
    }

    #[test]
    fn neighbors_exclude_center_and_edge_cells() {
        let mut grid = CellGrid::new(layout());
        grid.set(UVec2::new(1, 1), 0);
        grid.set(UVec2::new(2, 1), 1);
        grid.set(UVec2::new(0, 0), 2);
        grid.set(UVec2::new(3, 2), 3);
        grid.set(UVec2::new(4, 2), 4);

        let mut around = grid.neighbors(UVec2::new(1, 1)).collect::<Vec<_>>();
        around.sort_unstable();
        assert_eq!(around, vec![1, 2]);

        // Column `cols` is outside the neighbourhood bounds.
        let around_edge = grid.neighbors(UVec2::new(3, 2)).collect::<Vec<_>>();
        assert_eq!(around_edge, vec![1]);
    }

    #[test]
    #[should_panic]
    fn set_outside_grid_panics() {
        let mut grid = CellGrid::new(layout());
        grid.set(UVec2::new(5, 0), 0);
    }
}
