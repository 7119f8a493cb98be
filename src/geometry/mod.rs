//! Road surface, decal strips, and pillar placement derived from the curve.

mod mesh;
mod road;

pub use mesh::{TriMesh, box_mesh, cylinder_mesh, plane_mesh};
pub use road::{
    GeometryKey, PillarAnchor, RoadCache, RoadGeometry, RoadParams, StripPanel, StripRole,
    build_road_geometry, geometry_key,
};
