//! Engine: configuration plus the per-frame loop
//!
//! The engine owns circle count, viewport size, layout, clock and curves. A
//! circle count change replaces layout, grid and clock state inside one call,
//! so a reader never sees a grid and layout of different sizes.

use serde::{Deserialize, Serialize};

use super::clock::{ClockState, PhaseClock};
use super::curve::{CurveField, SegmentMode};
use super::grid::PolylineGrid;
use super::layout::{CircleCount, GuideGeometry, Layout};
use crate::settings::EngineSettings;

/// Everything a renderer needs for one paint pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub layout: Layout,
    /// Current clock phase (degrees)
    pub phase: f64,
    pub guides: GuideGeometry,
    pub grid: PolylineGrid,
}

/// Lissajous table engine
#[derive(Debug, Clone)]
pub struct Engine {
    circle_count: CircleCount,
    padding: f64,
    /// Last size reported by the host (0 until the first resize)
    viewport_size: f64,
    layout: Layout,
    clock: PhaseClock,
    field: CurveField,
    needs_redraw: bool,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(&EngineSettings::default())
    }
}

impl Engine {
    /// Build an idle engine; the clock starts on the first viewport resize
    pub fn new(settings: &EngineSettings) -> Self {
        let circle_count = settings.circle_count();
        Self {
            circle_count,
            padding: settings.padding,
            viewport_size: 0.0,
            layout: Layout::new(0.0, circle_count, settings.padding),
            clock: PhaseClock::new(settings.cycle_duration_ms),
            field: CurveField::new(circle_count),
            needs_redraw: false,
        }
    }

    #[inline]
    pub fn circle_count(&self) -> CircleCount {
        self.circle_count
    }

    #[inline]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    #[inline]
    pub fn grid(&self) -> &PolylineGrid {
        self.field.grid()
    }

    #[inline]
    pub fn segment_mode(&self) -> SegmentMode {
        self.field.mode()
    }

    #[inline]
    pub fn phase(&self) -> f64 {
        self.clock.phase()
    }

    #[inline]
    pub fn clock_state(&self) -> ClockState {
        self.clock.state()
    }

    /// Cycle length actually in use (invalid settings fall back to the default)
    #[inline]
    pub fn cycle_duration_ms(&self) -> f64 {
        self.clock.duration_ms()
    }

    /// Switch to `n` circles per axis.
    ///
    /// Values outside 4..=6 are ignored and leave everything untouched.
    /// Returns whether the change was applied.
    pub fn set_circle_count(&mut self, n: i32) -> bool {
        let count = match CircleCount::try_from(n) {
            Ok(count) => count,
            Err(err) => {
                log::debug!("Ignoring circle count request: {err}");
                return false;
            }
        };

        self.circle_count = count;
        self.field.reset(count);
        self.clock.cancel();
        self.layout = Layout::new(self.viewport_size, count, self.padding);
        self.clock.start();
        self.needs_redraw = true;

        log::debug!(
            "Circle count set to {count} (radius {:.2})",
            self.layout.radius
        );
        true
    }

    /// Host viewport changed; the grid is square so only `width` is used.
    ///
    /// An idle clock (first sizing, or after `on_detach`) is started from the
    /// initial phase, but the curves are left as they were: the first tick
    /// extends each cell from its last traced point. Only a cycle boundary or
    /// `set_circle_count` clears them.
    pub fn on_viewport_resize(&mut self, width: f64, height: f64) {
        if (width - height).abs() > f64::EPSILON {
            log::debug!("Non-square viewport {width}x{height}, sizing from width");
        }
        self.viewport_size = width;
        self.layout = Layout::new(width, self.circle_count, self.padding);
        if !self.clock.is_running() {
            self.clock.start();
        }
        self.needs_redraw = true;
        log::debug!("Viewport {width}, radius {:.2}", self.layout.radius);
    }

    /// Host view went away: no more ticks until restarted
    pub fn on_detach(&mut self) {
        self.clock.cancel();
        log::debug!("Detached, clock cancelled");
    }

    /// Advance one frame of `dt_ms` milliseconds
    pub fn advance(&mut self, dt_ms: f64) {
        let events = self.clock.advance(dt_ms);
        if events.is_empty() {
            return;
        }
        for event in events {
            self.field.handle(event, &self.layout);
        }
        self.needs_redraw = true;
    }

    /// Read and clear the redraw request
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    /// Owned copy of the current frame for the renderer
    pub fn snapshot(&self) -> FrameSnapshot {
        let phase = self.phase();
        FrameSnapshot {
            layout: self.layout,
            phase,
            guides: self.layout.guides(phase),
            grid: self.field.grid().clone(),
        }
    }
}
