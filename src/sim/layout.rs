//! Circle layout for the Lissajous table
//!
//! The viewport is a square. Along the top edge sits one guide circle per
//! column, along the left edge one per row; the remaining area holds the
//! N×N grid of cells. Every circle shares the same radius:
//!
//! ```text
//! radius = ((viewport - n * padding) / (n + 1)) / 2
//! ```
//!
//! i.e. n + 1 circle diameters (guides included) and n paddings span the viewport.

use std::fmt;

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_CIRCLES, MAX_CIRCLES, MIN_CIRCLES};
use crate::orbit_point;

/// Circle radius that fits `circle_count` cells plus one guide row into `viewport_size`.
///
/// Total for any input. Viewports too small for the padding give a zero or
/// negative radius, which is passed through unchanged.
#[inline]
pub fn compute_radius(viewport_size: f64, circle_count: u8, padding: f64) -> f64 {
    let n = circle_count as f64;
    ((viewport_size - n * padding) / (n + 1.0)) / 2.0
}

/// Rejected grid dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidCircleCount(pub i64);

impl fmt::Display for InvalidCircleCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "circle count {} outside {}..={}",
            self.0, MIN_CIRCLES, MAX_CIRCLES
        )
    }
}

impl std::error::Error for InvalidCircleCount {}

/// Number of circles per axis, always within `MIN_CIRCLES..=MAX_CIRCLES`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct CircleCount(u8);

impl CircleCount {
    pub fn new(n: i64) -> Result<Self, InvalidCircleCount> {
        if (MIN_CIRCLES as i64..=MAX_CIRCLES as i64).contains(&n) {
            Ok(Self(n as u8))
        } else {
            Err(InvalidCircleCount(n))
        }
    }

    #[inline]
    pub fn get(self) -> u8 {
        self.0
    }

    /// Count as a collection length
    #[inline]
    pub fn dim(self) -> usize {
        self.0 as usize
    }
}

impl Default for CircleCount {
    fn default() -> Self {
        Self(DEFAULT_CIRCLES)
    }
}

impl TryFrom<i32> for CircleCount {
    type Error = InvalidCircleCount;

    fn try_from(n: i32) -> Result<Self, Self::Error> {
        Self::new(n as i64)
    }
}

impl TryFrom<u8> for CircleCount {
    type Error = InvalidCircleCount;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        Self::new(n as i64)
    }
}

impl From<CircleCount> for u8 {
    fn from(count: CircleCount) -> Self {
        count.0
    }
}

impl fmt::Display for CircleCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Derived geometry for the current viewport and circle count
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    /// Shared circle radius (may be ≤ 0 for undersized viewports)
    pub radius: f64,
    /// Gap between neighbouring circles
    pub padding: f64,
    /// Side length of the square viewport
    pub viewport_size: f64,
    /// Circles per axis
    pub circle_count: CircleCount,
}

impl Layout {
    pub fn new(viewport_size: f64, circle_count: CircleCount, padding: f64) -> Self {
        Self {
            radius: compute_radius(viewport_size, circle_count.get(), padding),
            padding,
            viewport_size,
            circle_count,
        }
    }

    /// Distance between the centers of neighbouring circles
    #[inline]
    pub fn pitch(&self) -> f64 {
        2.0 * self.radius + self.padding
    }

    /// Vertical center of grid row `j`
    #[inline]
    pub fn row_base(&self, j: usize) -> f64 {
        self.radius * 3.0 + self.padding + j as f64 * self.pitch()
    }

    /// Horizontal center of grid column `i`
    #[inline]
    pub fn col_base(&self, i: usize) -> f64 {
        self.radius * 3.0 + self.padding + i as f64 * self.pitch()
    }

    /// Center of cell (row `j`, column `i`)
    #[inline]
    pub fn cell_center(&self, j: usize, i: usize) -> DVec2 {
        DVec2::new(self.col_base(i), self.row_base(j))
    }

    /// Point traced in cell (`j`, `i`) at `phase` degrees.
    ///
    /// x follows column `i` spinning at `i + 1` times the phase, y follows row
    /// `j` spinning at `j + 1` times the phase.
    pub fn intersection(&self, phase: f64, j: usize, i: usize) -> DVec2 {
        let angle_col = (phase * (i + 1) as f64).to_radians();
        let angle_row = (phase * (j + 1) as f64).to_radians();
        DVec2::new(
            self.col_base(i) + self.radius * angle_col.cos(),
            self.row_base(j) + self.radius * angle_row.sin(),
        )
    }

    /// Guide circles, tracer points and guide lines at `phase` degrees
    pub fn guides(&self, phase: f64) -> GuideGeometry {
        let n = self.circle_count.dim();
        let r = self.radius;
        let edge = self.viewport_size;

        let columns = (0..n)
            .map(|i| {
                let center = DVec2::new(self.col_base(i), r);
                let tracer = orbit_point(center, r, phase * (i + 1) as f64);
                GuideCircle {
                    center,
                    radius: r,
                    tracer,
                    line_end: DVec2::new(tracer.x, edge),
                }
            })
            .collect();

        let rows = (0..n)
            .map(|j| {
                let center = DVec2::new(r, self.row_base(j));
                let tracer = orbit_point(center, r, phase * (j + 1) as f64);
                GuideCircle {
                    center,
                    radius: r,
                    tracer,
                    line_end: DVec2::new(edge, tracer.y),
                }
            })
            .collect();

        GuideGeometry { columns, rows }
    }
}

/// One guide circle with its orbiting tracer and the guide line it casts
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GuideCircle {
    pub center: DVec2,
    pub radius: f64,
    /// Current position of the orbiting point
    pub tracer: DVec2,
    /// Far end of the guide line starting at `tracer`
    pub line_end: DVec2,
}

/// Guide geometry for the top edge (columns) and left edge (rows)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GuideGeometry {
    pub columns: Vec<GuideCircle>,
    pub rows: Vec<GuideCircle>,
}
