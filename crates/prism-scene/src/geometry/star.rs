//! 2D star polygons drawn as triangle fans.

use std::f32::consts::PI;

use glam::Vec2;

use crate::color::Color;

/// Vertex of a flat, per-vertex colored 2D triangle list (clip-space positions).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct FlatVertex {
    pub position: [f32; 2],
    pub color: [f32; 3],
}

impl FlatVertex {
    #[inline]
    pub fn new(position: Vec2, color: Color) -> Self {
        Self { position: position.to_array(), color: color.rgb_array() }
    }
}

/// Boundary of a star with `num_points` tips.
///
/// Returns `2 * num_points` vertices. Vertex `i` sits at angle `i * π / num_points`,
/// alternating between the outer `radius` (even `i`) and `inner_radius` (odd `i`),
/// translated by `offset`.
pub fn star_outline(radius: f32, inner_radius: f32, num_points: u32, offset: Vec2) -> Vec<Vec2> {
    let step = PI / num_points as f32;
    (0..num_points * 2)
        .map(|i| {
            let r = if i % 2 == 0 { radius } else { inner_radius };
            let (sin, cos) = (i as f32 * step).sin_cos();
            Vec2::new(r * cos, r * sin) + offset
        })
        .collect()
}

/// Fans `outline` around `center` into a plain triangle list.
///
/// Triangle `i` is `(center, outline[i], outline[(i + 1) % n])`, so an outline of
/// `n` vertices yields `n` triangles that all share the center. Pass the same
/// `offset` the outline was built with. Boundary vertex `i` takes
/// `ring_colors[i % len]`; an empty `ring_colors` falls back to `center_color`.
pub fn star_fan(
    center: Vec2,
    outline: &[Vec2],
    center_color: Color,
    ring_colors: &[Color],
) -> Vec<FlatVertex> {
    let n = outline.len();
    if n == 0 {
        return Vec::new();
    }

    let ring = |i: usize| {
        let color = ring_colors.get(i % ring_colors.len().max(1)).copied().unwrap_or(center_color);
        FlatVertex::new(outline[i], color)
    };

    let mut vertices = Vec::with_capacity(n * 3);
    for i in 0..n {
        let next = (i + 1) % n;
        vertices.push(FlatVertex::new(center, center_color));
        vertices.push(ring(i));
        vertices.push(ring(next));
    }
    vertices
}

/// Two nested five-point stars: a yellow outer star and a white-centered inner
/// star whose tips alternate magenta and blue.
pub fn star_scene() -> Vec<FlatVertex> {
    const POINTS: u32 = 5;
    const OUTER: f32 = 0.5;
    const INNER: f32 = 0.2;

    let yellow = Color::rgb(1.0, 1.0, 0.0);
    let magenta = Color::rgb(1.0, 0.0, 1.0);
    let blue = Color::rgb(0.0, 0.0, 1.0);

    let outer = star_outline(OUTER, INNER, POINTS, Vec2::ZERO);
    let inner = star_outline(OUTER * 0.5, INNER * 0.5, POINTS, Vec2::ZERO);

    let mut vertices = star_fan(Vec2::ZERO, &outer, yellow, &[yellow]);
    vertices.extend(star_fan(Vec2::ZERO, &inner, Color::WHITE, &[magenta, blue]));
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_points_give_ten_boundary_vertices() {
        let outline = star_outline(0.5, 0.2, 5, Vec2::ZERO);
        assert_eq!(outline.len(), 10);
    }

    #[test]
    fn outline_alternates_radii() {
        let outline = star_outline(0.5, 0.2, 5, Vec2::ZERO);
        for (i, v) in outline.iter().enumerate() {
            let expected = if i % 2 == 0 { 0.5 } else { 0.2 };
            assert!((v.length() - expected).abs() < 1e-6, "vertex {i}: {v:?}");
        }
        assert!((outline[0] - Vec2::new(0.5, 0.0)).length() < 1e-6);
    }

    #[test]
    fn offset_translates_every_vertex() {
        let base = star_outline(1.0, 0.4, 6, Vec2::ZERO);
        let moved = star_outline(1.0, 0.4, 6, Vec2::new(2.0, -1.0));
        for (a, b) in base.iter().zip(&moved) {
            assert!((*b - *a - Vec2::new(2.0, -1.0)).length() < 1e-6);
        }
    }

    #[test]
    fn fan_has_one_triangle_per_boundary_vertex_sharing_center() {
        let outline = star_outline(0.5, 0.2, 5, Vec2::ZERO);
        let fan = star_fan(Vec2::ZERO, &outline, Color::WHITE, &[Color::BLACK]);
        assert_eq!(fan.len(), 10 * 3);

        for (i, tri) in fan.chunks_exact(3).enumerate() {
            let [cx, cy] = tri[0].position;
            assert!(cx.abs() < 1e-6 && cy.abs() < 1e-6, "triangle {i} center {:?}", tri[0]);
            assert_eq!(tri[1].position, outline[i].to_array());
            assert_eq!(tri[2].position, outline[(i + 1) % 10].to_array());
        }
    }

    #[test]
    fn fan_colors_cycle_through_ring() {
        let outline = star_outline(0.5, 0.2, 5, Vec2::ZERO);
        let red = Color::rgb(1.0, 0.0, 0.0);
        let fan = star_fan(Vec2::ZERO, &outline, Color::WHITE, &[red, Color::BLACK]);
        assert_eq!(fan[0].color, [1.0, 1.0, 1.0]);
        assert_eq!(fan[1].color, red.rgb_array());
        assert_eq!(fan[2].color, Color::BLACK.rgb_array());
        // Last triangle wraps back to vertex 0.
        assert_eq!(fan[29].color, red.rgb_array());
    }

    #[test]
    fn empty_outline_yields_nothing() {
        assert!(star_fan(Vec2::ZERO, &[], Color::WHITE, &[]).is_empty());
    }

    #[test]
    fn fan_center_is_star_origin_for_single_tip() {
        let offset = Vec2::new(0.3, 0.1);
        let outline = star_outline(0.5, 0.2, 1, offset);
        let fan = star_fan(offset, &outline, Color::WHITE, &[Color::BLACK]);

        assert_eq!(fan.len(), 2 * 3);
        for tri in fan.chunks_exact(3) {
            assert_eq!(tri[0].position, offset.to_array());
        }
    }

    #[test]
    fn scene_holds_two_stars() {
        let vertices = star_scene();
        assert_eq!(vertices.len(), 2 * 10 * 3);
        // Inner star's center is white.
        assert_eq!(vertices[30].color, [1.0, 1.0, 1.0]);
    }
}
