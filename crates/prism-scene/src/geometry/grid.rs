use glam::Vec3;

use super::MeshData;

/// Samples a parametric surface on an `(n + 1) × (m + 1)` grid.
///
/// `surface(s, t)` receives normalized parameters in `[0, 1]` (`s` along `n`,
/// `t` along `m`) and returns `(position, normal)`. Vertex `(i, j)` lands at
/// index `i * (m + 1) + j`.
///
/// Triangles are wound so that `∂P/∂s × ∂P/∂t` is the front face; callers pick
/// their parameterization accordingly. Seam vertices are duplicated, which keeps
/// the index math trivial and the wireframe closed.
pub(super) fn parametric<F>(n: u32, m: u32, mut surface: F) -> MeshData
where
    F: FnMut(f32, f32) -> (Vec3, Vec3),
{
    debug_assert!((n as usize + 1) * (m as usize + 1) <= u16::MAX as usize + 1);

    let mut mesh = MeshData::new();
    let row = (m + 1) as u16;

    for i in 0..=n {
        let s = i as f32 / n as f32;
        for j in 0..=m {
            let t = j as f32 / m as f32;
            let (position, normal) = surface(s, t);
            let index = mesh.add_vertex(position, normal);

            if j > 0 {
                mesh.add_line(index - 1, index);
            }
            if i > 0 {
                mesh.add_line(index - row, index);
            }

            if i > 0 && j > 0 {
                // a = (i-1, j-1), b = (i-1, j), c = (i, j-1), d = (i, j)
                let a = index - row - 1;
                let b = index - row;
                let c = index - 1;
                let d = index;
                mesh.add_triangle(a, c, d);
                mesh.add_triangle(a, d, b);
            }
        }
    }

    mesh
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat(n: u32, m: u32) -> MeshData {
        parametric(n, m, |s, t| (Vec3::new(t, 0.0, s), Vec3::Y))
    }

    #[test]
    fn vertex_and_index_counts() {
        let mesh = flat(3, 4);
        assert_eq!(mesh.vertex_count(), 4 * 5);
        assert_eq!(mesh.triangle_count(), 2 * 3 * 4);
        // Horizontal segments: (n+1)*m, vertical: n*(m+1).
        assert_eq!(mesh.line_count(), 4 * 4 + 3 * 5);
    }

    #[test]
    fn indices_stay_in_range() {
        let mesh = flat(5, 7);
        let max = mesh.vertex_count() as u16;
        assert!(mesh.indices_tris.iter().all(|&i| i < max));
        assert!(mesh.indices_lines.iter().all(|&i| i < max));
    }

    #[test]
    fn winding_follows_parameter_cross_product() {
        // s runs along +Z, t along +X => ∂P/∂s × ∂P/∂t = Z × X = +Y.
        let mesh = flat(1, 1);
        for tri in mesh.indices_tris.chunks_exact(3) {
            let [a, b, c] = [tri[0], tri[1], tri[2]].map(|i| mesh.positions[i as usize]);
            let n = (b - a).cross(c - a);
            assert!(n.y > 0.0, "triangle {tri:?} faces {n:?}");
        }
    }
}
