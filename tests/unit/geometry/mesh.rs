use super::*;

#[test]
fn box_mesh_has_six_quads() {
    let mesh = box_mesh(2.0, 1.0, 3.0);
    assert_eq!(mesh.vertex_count(), 24);
    assert_eq!(mesh.triangle_count(), 12);
    assert_eq!(mesh.uvs.len(), mesh.positions.len());

    // Extents match the requested dimensions.
    let max_x = mesh.positions.iter().map(|p| p.x).fold(f32::MIN, f32::max);
    let max_y = mesh.positions.iter().map(|p| p.y).fold(f32::MIN, f32::max);
    let max_z = mesh.positions.iter().map(|p| p.z).fold(f32::MIN, f32::max);
    assert!((max_x - 1.0).abs() < 1e-6);
    assert!((max_y - 0.5).abs() < 1e-6);
    assert!((max_z - 1.5).abs() < 1e-6);
}

#[test]
fn plane_mesh_is_one_quad() {
    let mesh = plane_mesh(10.0, 4.0);
    assert_eq!(mesh.vertex_count(), 4);
    assert_eq!(mesh.triangle_count(), 2);
    assert!(mesh.positions.iter().all(|p| p.y == 0.0));
}

#[test]
fn cylinder_mesh_counts_follow_segments() {
    let segments = 12;
    let mesh = cylinder_mesh(0.38, 0.25, segments);
    // Side ring pairs plus two cap centers.
    assert_eq!(mesh.vertex_count(), (segments as usize) * 2 + 2);
    // Side quads (2 tris each) plus two cap fans.
    assert_eq!(mesh.triangle_count(), (segments as usize) * 4);

    let max_r = mesh
        .positions
        .iter()
        .map(|p| (p.y * p.y + p.z * p.z).sqrt())
        .fold(f32::MIN, f32::max);
    assert!((max_r - 0.38).abs() < 1e-5);
}

#[test]
fn append_offsets_indices() {
    let mut a = plane_mesh(1.0, 1.0);
    let b = plane_mesh(2.0, 2.0);
    a.append(&b);
    assert_eq!(a.vertex_count(), 8);
    assert_eq!(a.triangle_count(), 4);
    assert!(a.indices.iter().all(|&i| (i as usize) < a.vertex_count()));
    assert!(a.indices[6..].iter().all(|&i| i >= 4));
}

#[test]
fn indices_stay_in_bounds() {
    for mesh in [box_mesh(1.0, 2.0, 3.0), cylinder_mesh(1.0, 1.0, 8)] {
        assert!(
            mesh.indices
                .iter()
                .all(|&i| (i as usize) < mesh.vertex_count())
        );
    }
}
