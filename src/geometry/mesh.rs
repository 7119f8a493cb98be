use crate::foundation::core::{Vec2, Vec3};

/// Indexed triangle mesh: positions, UVs, and triangle indices.
///
/// Meshes are plain data; orientation and placement come from the scene node
/// that references them. Winding is counter-clockwise seen from outside.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TriMesh {
    /// Vertex positions.
    pub positions: Vec<Vec3>,
    /// Per-vertex texture coordinates.
    pub uvs: Vec<Vec2>,
    /// Triangle index triples into `positions`.
    pub indices: Vec<u32>,
}

impl TriMesh {
    /// Empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Append a vertex and return its index.
    pub fn push_vertex(&mut self, position: Vec3, uv: Vec2) -> u32 {
        let idx = self.positions.len() as u32;
        self.positions.push(position);
        self.uvs.push(uv);
        idx
    }

    /// Append a triangle.
    pub fn push_triangle(&mut self, a: u32, b: u32, c: u32) {
        self.indices.extend_from_slice(&[a, b, c]);
    }

    /// Append a quad as two triangles; corners in counter-clockwise order.
    pub fn push_quad(&mut self, a: u32, b: u32, c: u32, d: u32) {
        self.push_triangle(a, b, c);
        self.push_triangle(a, c, d);
    }

    /// Merge another mesh into this one.
    pub fn append(&mut self, other: &TriMesh) {
        let base = self.positions.len() as u32;
        self.positions.extend_from_slice(&other.positions);
        self.uvs.extend_from_slice(&other.uvs);
        self.indices.extend(other.indices.iter().map(|i| i + base));
    }
}

/// Axis-aligned box centered at the origin.
pub fn box_mesh(width: f32, height: f32, depth: f32) -> TriMesh {
    let (hx, hy, hz) = (width * 0.5, height * 0.5, depth * 0.5);
    let mut mesh = TriMesh::new();

    // Each face gets its own vertices so UVs stay per-face.
    let faces: [[Vec3; 4]; 6] = [
        // +Z
        [
            Vec3::new(-hx, -hy, hz),
            Vec3::new(hx, -hy, hz),
            Vec3::new(hx, hy, hz),
            Vec3::new(-hx, hy, hz),
        ],
        // -Z
        [
            Vec3::new(hx, -hy, -hz),
            Vec3::new(-hx, -hy, -hz),
            Vec3::new(-hx, hy, -hz),
            Vec3::new(hx, hy, -hz),
        ],
        // +X
        [
            Vec3::new(hx, -hy, hz),
            Vec3::new(hx, -hy, -hz),
            Vec3::new(hx, hy, -hz),
            Vec3::new(hx, hy, hz),
        ],
        // -X
        [
            Vec3::new(-hx, -hy, -hz),
            Vec3::new(-hx, -hy, hz),
            Vec3::new(-hx, hy, hz),
            Vec3::new(-hx, hy, -hz),
        ],
        // +Y
        [
            Vec3::new(-hx, hy, hz),
            Vec3::new(hx, hy, hz),
            Vec3::new(hx, hy, -hz),
            Vec3::new(-hx, hy, -hz),
        ],
        // -Y
        [
            Vec3::new(-hx, -hy, -hz),
            Vec3::new(hx, -hy, -hz),
            Vec3::new(hx, -hy, hz),
            Vec3::new(-hx, -hy, hz),
        ],
    ];
    let uv = [
        Vec2::new(0.0, 0.0),
        Vec2::new(1.0, 0.0),
        Vec2::new(1.0, 1.0),
        Vec2::new(0.0, 1.0),
    ];

    for corners in faces {
        let mut idx = [0u32; 4];
        for (k, corner) in corners.into_iter().enumerate() {
            idx[k] = mesh.push_vertex(corner, uv[k]);
        }
        mesh.push_quad(idx[0], idx[1], idx[2], idx[3]);
    }
    mesh
}

/// Horizontal rectangle centered at the origin, facing +Y.
pub fn plane_mesh(width: f32, depth: f32) -> TriMesh {
    let (hx, hz) = (width * 0.5, depth * 0.5);
    let mut mesh = TriMesh::new();
    let a = mesh.push_vertex(Vec3::new(-hx, 0.0, hz), Vec2::new(0.0, 0.0));
    let b = mesh.push_vertex(Vec3::new(hx, 0.0, hz), Vec2::new(1.0, 0.0));
    let c = mesh.push_vertex(Vec3::new(hx, 0.0, -hz), Vec2::new(1.0, 1.0));
    let d = mesh.push_vertex(Vec3::new(-hx, 0.0, -hz), Vec2::new(0.0, 1.0));
    mesh.push_quad(a, b, c, d);
    mesh
}

/// Cylinder with its axis along X, centered at the origin.
///
/// Wheels and lamp heads use this; the lateral axis means a wheel spins by
/// rotating about local X.
pub fn cylinder_mesh(radius: f32, length: f32, segments: u32) -> TriMesh {
    let segments = segments.max(3);
    let hx = length * 0.5;
    let mut mesh = TriMesh::new();

    let mut left_ring = Vec::with_capacity(segments as usize);
    let mut right_ring = Vec::with_capacity(segments as usize);
    for s in 0..segments {
        let a = s as f32 / segments as f32 * std::f32::consts::TAU;
        let (sin, cos) = a.sin_cos();
        let v = s as f32 / segments as f32;
        left_ring.push(mesh.push_vertex(
            Vec3::new(-hx, radius * cos, radius * sin),
            Vec2::new(0.0, v),
        ));
        right_ring.push(mesh.push_vertex(
            Vec3::new(hx, radius * cos, radius * sin),
            Vec2::new(1.0, v),
        ));
    }

    for s in 0..segments as usize {
        let n = (s + 1) % segments as usize;
        mesh.push_quad(left_ring[s], left_ring[n], right_ring[n], right_ring[s]);
    }

    let left_center = mesh.push_vertex(Vec3::new(-hx, 0.0, 0.0), Vec2::new(0.0, 0.5));
    let right_center = mesh.push_vertex(Vec3::new(hx, 0.0, 0.0), Vec2::new(1.0, 0.5));
    for s in 0..segments as usize {
        let n = (s + 1) % segments as usize;
        mesh.push_triangle(left_center, left_ring[n], left_ring[s]);
        mesh.push_triangle(right_center, right_ring[s], right_ring[n]);
    }
    mesh
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/mesh.rs"]
mod tests;
