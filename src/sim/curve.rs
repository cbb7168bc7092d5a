//! Curve accumulation
//!
//! Each clock tick appends one intersection point per cell. The first tick of
//! a cycle starts a fresh path in every cell instead of extending the old one.

use serde::{Deserialize, Serialize};

use super::clock::ClockEvent;
use super::grid::PolylineGrid;
use super::layout::{CircleCount, Layout};

/// How the next tick writes into the polylines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SegmentMode {
    /// Next point becomes the sole starting vertex of each cell
    #[default]
    StartingNewSegment,
    /// Next point is appended to each cell
    ExtendingSegment,
}

/// Owner of the traced curves
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurveField {
    grid: PolylineGrid,
    mode: SegmentMode,
}

impl CurveField {
    pub fn new(size: CircleCount) -> Self {
        Self {
            grid: PolylineGrid::new(size),
            mode: SegmentMode::StartingNewSegment,
        }
    }

    #[inline]
    pub fn grid(&self) -> &PolylineGrid {
        &self.grid
    }

    #[inline]
    pub fn mode(&self) -> SegmentMode {
        self.mode
    }

    /// Replace the grid with an empty one of the given size
    pub fn reset(&mut self, size: CircleCount) {
        self.grid = PolylineGrid::new(size);
        self.mode = SegmentMode::StartingNewSegment;
    }

    /// Empty every curve; the next tick starts new paths
    pub fn on_cycle_start(&mut self) {
        self.grid.clear_all();
        self.mode = SegmentMode::StartingNewSegment;
    }

    /// Trace one point per cell at `phase` degrees
    pub fn on_tick(&mut self, phase: f64, layout: &Layout) {
        debug_assert_eq!(self.grid.size(), layout.circle_count);

        let n = self.grid.size().dim();
        for j in 0..n {
            for i in 0..n {
                let p = layout.intersection(phase, j, i);
                let cell = self.grid.get_mut(j, i);
                match self.mode {
                    SegmentMode::StartingNewSegment => cell.move_to(p),
                    SegmentMode::ExtendingSegment => cell.line_to(p),
                }
            }
        }
        self.mode = SegmentMode::ExtendingSegment;
    }

    /// Route a clock event to its handler
    pub fn handle(&mut self, event: ClockEvent, layout: &Layout) {
        match event {
            ClockEvent::CycleStart => self.on_cycle_start(),
            ClockEvent::Tick(phase) => self.on_tick(phase, layout),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::PADDING;
    use glam::DVec2;
    use proptest::prelude::*;

    fn layout(n: i32) -> Layout {
        Layout::new(1000.0, CircleCount::try_from(n).unwrap(), PADDING)
    }

    fn lengths(field: &CurveField) -> Vec<usize> {
        field.grid().iter().map(|(_, p)| p.len()).collect()
    }

    #[test]
    fn test_first_tick_moves_then_ticks_extend() {
        let layout = layout(4);
        let mut field = CurveField::new(layout.circle_count);
        assert_eq!(field.mode(), SegmentMode::StartingNewSegment);

        field.on_tick(360.0, &layout);
        assert_eq!(field.mode(), SegmentMode::ExtendingSegment);
        assert!(lengths(&field).iter().all(|&len| len == 1));

        field.on_tick(359.0, &layout);
        field.on_tick(358.0, &layout);
        assert!(lengths(&field).iter().all(|&len| len == 3));
    }

    #[test]
    fn test_cycle_start_clears_everything() {
        let layout = layout(5);
        let mut field = CurveField::new(layout.circle_count);
        for k in 0..10 {
            field.on_tick(360.0 - k as f64, &layout);
        }
        field.on_cycle_start();
        assert_eq!(field.grid().point_count(), 0);
        assert_eq!(field.mode(), SegmentMode::StartingNewSegment);

        field.on_tick(360.0, &layout);
        assert!(lengths(&field).iter().all(|&len| len == 1));
    }

    #[test]
    fn test_handle_dispatches_in_order() {
        let layout = layout(4);
        let mut field = CurveField::new(layout.circle_count);
        field.on_tick(10.0, &layout);
        field.on_tick(5.0, &layout);

        for event in [ClockEvent::CycleStart, ClockEvent::Tick(360.0)] {
            field.handle(event, &layout);
        }
        assert!(lengths(&field).iter().all(|&len| len == 1));
    }

    #[test]
    fn test_tick_point_matches_formula() {
        let layout = Layout {
            radius: 50.0,
            padding: 30.0,
            viewport_size: 0.0,
            circle_count: CircleCount::try_from(4).unwrap(),
        };
        let mut field = CurveField::new(layout.circle_count);
        field.on_tick(90.0, &layout);

        let p = field.grid().get(0, 0).points[0];
        let expected = DVec2::new(layout.col_base(0), layout.row_base(0) + 50.0);
        assert!((p - expected).length() < 1e-9);

        // Row 1 spins twice as fast: sin(180°) = 0; column 2 thrice: cos(270°) = 0
        let p = field.grid().get(1, 2).points[0];
        let expected = DVec2::new(layout.col_base(2), layout.row_base(1));
        assert!((p - expected).length() < 1e-9);
    }

    #[test]
    fn test_reset_changes_dimension() {
        let layout5 = layout(5);
        let mut field = CurveField::new(layout5.circle_count);
        field.on_tick(100.0, &layout5);
        field.on_tick(99.0, &layout5);

        let six = CircleCount::try_from(6).unwrap();
        field.reset(six);
        assert_eq!(field.grid().size(), six);
        assert_eq!(field.grid().iter().count(), 36);
        assert_eq!(field.grid().point_count(), 0);
        assert_eq!(field.mode(), SegmentMode::StartingNewSegment);
    }

    proptest! {
        #[test]
        fn prop_points_follow_layout(phases in prop::collection::vec(0.0f64..360.0, 1..20)) {
            let layout = layout(6);
            let mut field = CurveField::new(layout.circle_count);
            for &phase in &phases {
                field.on_tick(phase, &layout);
            }
            for ((j, i), poly) in field.grid().iter() {
                prop_assert_eq!(poly.len(), phases.len());
                for (p, &phase) in poly.points.iter().zip(&phases) {
                    prop_assert!((*p - layout.intersection(phase, j, i)).length() < 1e-9);
                }
            }
        }
    }
}
