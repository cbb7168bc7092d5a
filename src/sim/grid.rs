//! Per-cell polyline storage
//!
//! The grid is a flat row-major `Vec<Polyline>`. Its dimension is fixed at
//! construction; a different circle count gets a brand new grid.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::layout::CircleCount;

/// Ordered vertices of one traced curve
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    pub points: Vec<DVec2>,
}

impl Polyline {
    /// Start a new path at `p`, dropping anything traced so far
    pub fn move_to(&mut self, p: DVec2) {
        self.points.clear();
        self.points.push(p);
    }

    /// Extend the path to `p`
    pub fn line_to(&mut self, p: DVec2) {
        self.points.push(p);
    }

    /// Truncate to empty (keeps the allocation for the next cycle)
    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Consecutive vertex pairs
    pub fn segments(&self) -> impl Iterator<Item = (DVec2, DVec2)> + '_ {
        self.points.windows(2).map(|w| (w[0], w[1]))
    }
}

/// N×N matrix of polylines indexed by (row, column)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolylineGrid {
    size: CircleCount,
    cells: Vec<Polyline>,
}

impl PolylineGrid {
    /// Fresh grid of empty polylines
    pub fn new(size: CircleCount) -> Self {
        let n = size.dim();
        Self {
            size,
            cells: vec![Polyline::default(); n * n],
        }
    }

    #[inline]
    pub fn size(&self) -> CircleCount {
        self.size
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        let n = self.size.dim();
        assert!(row < n && col < n, "cell ({row}, {col}) outside {n}x{n} grid");
        row * n + col
    }

    pub fn get(&self, row: usize, col: usize) -> &Polyline {
        &self.cells[self.index(row, col)]
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> &mut Polyline {
        let idx = self.index(row, col);
        &mut self.cells[idx]
    }

    /// Empty every polyline
    pub fn clear_all(&mut self) {
        for cell in &mut self.cells {
            cell.clear();
        }
    }

    /// All cells in row-major order with their (row, column)
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), &Polyline)> {
        let n = self.size.dim();
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, cell)| ((idx / n, idx % n), cell))
    }

    /// Total number of stored vertices
    pub fn point_count(&self) -> usize {
        self.cells.iter().map(Polyline::len).sum()
    }
}
