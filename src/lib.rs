//! Lissajous Grid - an animated table of Lissajous figures
//!
//! Core modules:
//! - `sim`: Layout, phase clock, curve accumulation and the engine tying them together
//! - `render`: Flattening of frame snapshots into GPU-ready vertex buffers
//! - `settings`: JSON-backed engine configuration

pub mod render;
pub mod settings;
pub mod sim;

pub use settings::EngineSettings;
pub use sim::{Engine, FrameSnapshot};

use glam::DVec2;

/// Engine configuration constants
pub mod consts {
    /// Smallest supported grid dimension
    pub const MIN_CIRCLES: u8 = 4;
    /// Largest supported grid dimension
    pub const MAX_CIRCLES: u8 = 6;
    /// Grid dimension used until the host asks for another one
    pub const DEFAULT_CIRCLES: u8 = 5;

    /// Gap between neighbouring circles (pixels)
    pub const PADDING: f64 = 30.0;

    /// Length of one phase cycle (milliseconds)
    pub const CYCLE_DURATION_MS: f64 = 15_000.0;
    /// Phase value at the start of every cycle (degrees)
    pub const PHASE_START: f64 = 360.0;
    /// Phase value the ramp approaches at the end of a cycle (degrees)
    pub const PHASE_END: f64 = 0.0;
}

/// Point on a circle of `radius` around `center` at `degrees`.
///
/// Screen space: +y points down, so increasing angles sweep clockwise.
#[inline]
pub fn orbit_point(center: DVec2, radius: f64, degrees: f64) -> DVec2 {
    let theta = degrees.to_radians();
    center + DVec2::new(radius * theta.cos(), radius * theta.sin())
}
