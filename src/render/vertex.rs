//! Vertex types for 2D line rendering

use bytemuck::{Pod, Zeroable};
use glam::DVec2;

/// Position-only 2D vertex, downcast from simulation precision
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct LineVertex {
    pub position: [f32; 2],
}

impl LineVertex {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { position: [x, y] }
    }
}

impl From<DVec2> for LineVertex {
    fn from(p: DVec2) -> Self {
        let p = p.as_vec2();
        Self::new(p.x, p.y)
    }
}

/// Size of one vertex in a GPU buffer
pub const LINE_VERTEX_STRIDE: usize = std::mem::size_of::<LineVertex>();
