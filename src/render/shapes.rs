//! Shape generation for line-list primitives
//!
//! Every function returns vertex pairs: vertex 2k and 2k+1 form one segment.

use glam::DVec2;
use std::f64::consts::TAU;

use super::vertex::LineVertex;
use crate::sim::Polyline;

/// Single segment from `a` to `b`
pub fn line(a: DVec2, b: DVec2) -> [LineVertex; 2] {
    [a.into(), b.into()]
}

/// Closed circle outline approximated by `segments` chords
pub fn circle_outline(center: DVec2, radius: f64, segments: u32) -> Vec<LineVertex> {
    let segments = segments.max(3);
    let mut vertices = Vec::with_capacity(segments as usize * 2);

    for i in 0..segments {
        let theta1 = (i as f64 / segments as f64) * TAU;
        let theta2 = ((i + 1) as f64 / segments as f64) * TAU;

        let p1 = center + DVec2::new(theta1.cos(), theta1.sin()) * radius;
        let p2 = center + DVec2::new(theta2.cos(), theta2.sin()) * radius;
        vertices.extend(line(p1, p2));
    }

    vertices
}

/// Traced curve as consecutive segments (empty for fewer than two points)
pub fn polyline(poly: &Polyline) -> Vec<LineVertex> {
    let mut vertices = Vec::with_capacity(poly.len().saturating_sub(1) * 2);
    for (a, b) in poly.segments() {
        vertices.extend(line(a, b));
    }
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_outline_closes() {
        let verts = circle_outline(DVec2::new(10.0, 10.0), 5.0, 16);
        assert_eq!(verts.len(), 32);
        let first = verts[0].position;
        let last = verts[31].position;
        assert!((first[0] - last[0]).abs() < 1e-4);
        assert!((first[1] - last[1]).abs() < 1e-4);
        for v in &verts {
            let d = DVec2::new(v.position[0] as f64 - 10.0, v.position[1] as f64 - 10.0);
            assert!((d.length() - 5.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_circle_outline_minimum_segments() {
        assert_eq!(circle_outline(DVec2::ZERO, 1.0, 0).len(), 6);
    }

    #[test]
    fn test_polyline_segments() {
        let mut poly = Polyline::default();
        assert!(polyline(&poly).is_empty());
        poly.move_to(DVec2::ZERO);
        assert!(polyline(&poly).is_empty());
        poly.line_to(DVec2::X);
        poly.line_to(DVec2::ONE);
        let verts = polyline(&poly);
        assert_eq!(verts.len(), 4);
        assert_eq!(verts[1], verts[2]);
        assert_eq!(verts[3], LineVertex::new(1.0, 1.0));
    }
}
