//! Lissajous simulation module
//!
//! Everything that moves lives here. This module must stay free of rendering:
//! - Phase advances only through `PhaseClock::advance`
//! - Curves change only inside the clock event handlers
//! - Grid and layout are replaced together on reconfiguration

pub mod clock;
pub mod curve;
pub mod engine;
pub mod grid;
pub mod layout;

pub use clock::{ClockEvent, ClockState, PhaseClock};
pub use curve::{CurveField, SegmentMode};
pub use engine::{Engine, FrameSnapshot};
pub use grid::{Polyline, PolylineGrid};
pub use layout::{CircleCount, GuideCircle, GuideGeometry, InvalidCircleCount, Layout, compute_radius};
