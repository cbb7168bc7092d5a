//! Render feed
//!
//! Turns a `FrameSnapshot` into flat line-list vertex buffers, one per layer.
//! Styling (colors, widths, dashes) is left to whoever uploads them.

pub mod shapes;
pub mod vertex;

pub use vertex::{LINE_VERTEX_STRIDE, LineVertex};

use crate::sim::FrameSnapshot;

/// Chords per guide circle
pub const CIRCLE_SEGMENTS: u32 = 64;

/// Vertex buffers for one frame
#[derive(Debug, Clone, Default)]
pub struct FrameBuffers {
    /// Guide circle outlines (line list)
    pub guide_circles: Vec<LineVertex>,
    /// Lines cast from each tracer to the far edge (line list)
    pub guide_lines: Vec<LineVertex>,
    /// Tracer positions (point list)
    pub tracers: Vec<LineVertex>,
    /// Traced Lissajous curves (line list)
    pub curves: Vec<LineVertex>,
}

impl FrameBuffers {
    pub fn build(frame: &FrameSnapshot) -> Self {
        let mut buffers = Self::default();

        for guide in frame.guides.columns.iter().chain(&frame.guides.rows) {
            buffers.guide_circles.extend(shapes::circle_outline(
                guide.center,
                guide.radius,
                CIRCLE_SEGMENTS,
            ));
            buffers
                .guide_lines
                .extend(shapes::line(guide.tracer, guide.line_end));
            buffers.tracers.push(guide.tracer.into());
        }

        for (_, poly) in frame.grid.iter() {
            buffers.curves.extend(shapes::polyline(poly));
        }

        buffers
    }

    /// Raw bytes of the curve layer, ready for a vertex buffer upload
    pub fn curve_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.curves)
    }

    pub fn vertex_count(&self) -> usize {
        self.guide_circles.len() + self.guide_lines.len() + self.tracers.len() + self.curves.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Engine;

    #[test]
    fn test_build_from_engine_frame() {
        let mut engine = Engine::default();
        engine.on_viewport_resize(1000.0, 1000.0);
        for _ in 0..3 {
            engine.advance(16.0);
        }

        let buffers = FrameBuffers::build(&engine.snapshot());
        assert_eq!(buffers.tracers.len(), 10);
        assert_eq!(buffers.guide_lines.len(), 20);
        assert_eq!(buffers.guide_circles.len(), 10 * CIRCLE_SEGMENTS as usize * 2);
        // 3 points per cell -> 2 segments -> 4 vertices, 25 cells
        assert_eq!(buffers.curves.len(), 100);
        assert_eq!(buffers.curve_bytes().len(), 100 * LINE_VERTEX_STRIDE);
    }

    #[test]
    fn test_fresh_engine_has_no_curves() {
        let engine = Engine::default();
        let buffers = FrameBuffers::build(&engine.snapshot());
        assert!(buffers.curves.is_empty());
        assert_eq!(buffers.tracers.len(), 10);
    }
}
