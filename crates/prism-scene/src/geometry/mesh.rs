use glam::Vec3;

/// Indexed mesh with separate line and triangle index lists.
///
/// Positions and normals are parallel arrays. Line indices describe the
/// wireframe, triangle indices the filled surface; both reference the same
/// vertices. Indices are `u16`, so a mesh holds at most 65 536 vertices.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshData {
    pub positions: Vec<Vec3>,
    pub normals: Vec<Vec3>,
    pub indices_lines: Vec<u16>,
    pub indices_tris: Vec<u16>,
}

impl MeshData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a vertex and returns its index.
    pub fn add_vertex(&mut self, position: Vec3, normal: Vec3) -> u16 {
        let index = self.positions.len() as u16;
        self.positions.push(position);
        self.normals.push(normal);
        index
    }

    pub fn add_line(&mut self, i0: u16, i1: u16) {
        self.indices_lines.extend_from_slice(&[i0, i1]);
    }

    pub fn add_triangle(&mut self, i0: u16, i1: u16, i2: u16) {
        self.indices_tris.extend_from_slice(&[i0, i1, i2]);
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn line_count(&self) -> usize {
        self.indices_lines.len() / 2
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices_tris.len() / 3
    }
}
