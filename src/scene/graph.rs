use crate::foundation::core::{Color, Mat4, Quat, Vec3};
use crate::geometry::TriMesh;

/// Local transform of a scene node.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    /// Translation.
    pub translation: Vec3,
    /// Rotation.
    pub rotation: Quat,
    /// Non-uniform scale.
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    /// Identity transform.
    pub const IDENTITY: Self = Self {
        translation: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        scale: Vec3::ONE,
    };

    /// Pure translation.
    pub fn at(translation: Vec3) -> Self {
        Self {
            translation,
            ..Self::IDENTITY
        }
    }

    /// Translation plus yaw about the Y axis.
    pub fn at_yaw(translation: Vec3, yaw: f32) -> Self {
        Self {
            translation,
            rotation: Quat::from_rotation_y(yaw),
            scale: Vec3::ONE,
        }
    }

    /// Column-major world matrix.
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.translation)
    }
}

/// Emissive quantity a material reads from the time-of-day fan-out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EmissiveRole {
    /// Front lamps; gated on toward night.
    Headlight,
    /// Rear lamps; dim by day, bright at night.
    Taillight,
    /// Street-lamp heads.
    StreetLamp,
    /// Lit building windows.
    Window,
}

/// Flat-shaded material.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    /// Diffuse base color.
    pub base: Color,
    /// Blend factor over what is already drawn; `1` is opaque.
    pub opacity: f32,
    /// Glow color.
    pub emissive: Color,
    /// Glow strength when no role is set.
    pub emissive_intensity: f32,
    /// When set, glow strength comes from the live atmosphere instead.
    pub emissive_role: Option<EmissiveRole>,
}

impl Material {
    /// Opaque diffuse material with no glow.
    pub fn diffuse(base: Color) -> Self {
        Self {
            base,
            opacity: 1.0,
            emissive: Color::BLACK,
            emissive_intensity: 0.0,
            emissive_role: None,
        }
    }

    /// Diffuse material with fixed translucency.
    pub fn translucent(base: Color, opacity: f32) -> Self {
        Self {
            opacity: opacity.clamp(0.0, 1.0),
            ..Self::diffuse(base)
        }
    }

    /// Material whose glow strength follows a time-of-day quantity.
    pub fn glowing(base: Color, emissive: Color, role: EmissiveRole) -> Self {
        Self {
            emissive,
            emissive_role: Some(role),
            ..Self::diffuse(base)
        }
    }
}

/// Handle into [`SceneResources::meshes`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MeshId(pub u32);

/// Handle into [`SceneResources::materials`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MaterialId(pub u32);

/// Shared immutable meshes and materials, owned by the scene.
///
/// Nodes reference resources by id; nothing here changes after the scene is
/// built, so the graph can be traversed freely every frame.
#[derive(Clone, Debug, Default)]
pub struct SceneResources {
    meshes: Vec<TriMesh>,
    materials: Vec<Material>,
}

impl SceneResources {
    /// Empty resource set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a mesh.
    pub fn add_mesh(&mut self, mesh: TriMesh) -> MeshId {
        let id = MeshId(self.meshes.len() as u32);
        self.meshes.push(mesh);
        id
    }

    /// Register a material.
    pub fn add_material(&mut self, material: Material) -> MaterialId {
        let id = MaterialId(self.materials.len() as u32);
        self.materials.push(material);
        id
    }

    /// Look up a mesh.
    pub fn mesh(&self, id: MeshId) -> Option<&TriMesh> {
        self.meshes.get(id.0 as usize)
    }

    /// Look up a material.
    pub fn material(&self, id: MaterialId) -> Option<&Material> {
        self.materials.get(id.0 as usize)
    }

    /// Number of registered meshes.
    pub fn mesh_count(&self) -> usize {
        self.meshes.len()
    }
}

/// One node of the explicit scene graph.
#[derive(Clone, Debug, Default)]
pub struct SceneNode {
    /// Debug label.
    pub name: String,
    /// Transform relative to the parent.
    pub transform: Transform,
    /// Optional drawable: mesh plus material.
    pub drawable: Option<(MeshId, MaterialId)>,
    /// Child nodes.
    pub children: Vec<SceneNode>,
}

impl SceneNode {
    /// Empty group node.
    pub fn group(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Leaf node with a drawable.
    pub fn leaf(
        name: impl Into<String>,
        transform: Transform,
        mesh: MeshId,
        material: MaterialId,
    ) -> Self {
        Self {
            name: name.into(),
            transform,
            drawable: Some((mesh, material)),
            children: Vec::new(),
        }
    }

    /// Attach a child and return self for chaining.
    pub fn with_child(mut self, child: SceneNode) -> Self {
        self.children.push(child);
        self
    }
}

/// A draw request emitted by graph traversal.
#[derive(Clone, Copy, Debug)]
pub struct DrawItem {
    /// Mesh handle.
    pub mesh: MeshId,
    /// Material handle.
    pub material: MaterialId,
    /// Accumulated world matrix.
    pub world: Mat4,
}

/// The assembled static scene.
#[derive(Clone, Debug, Default)]
pub struct SceneGraph {
    /// Root node; its transform is the world origin.
    pub root: SceneNode,
}

impl SceneGraph {
    /// Graph with an empty root.
    pub fn new() -> Self {
        Self {
            root: SceneNode::group("root"),
        }
    }

    /// Flatten the graph into world-space draw items, depth first.
    pub fn collect_draws(&self) -> Vec<DrawItem> {
        let mut out = Vec::new();
        collect(&self.root, Mat4::IDENTITY, &mut out);
        out
    }
}

fn collect(node: &SceneNode, parent: Mat4, out: &mut Vec<DrawItem>) {
    let world = parent * node.transform.matrix();
    if let Some((mesh, material)) = node.drawable {
        out.push(DrawItem {
            mesh,
            material,
            world,
        });
    }
    for child in &node.children {
        collect(child, world, out);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/graph.rs"]
mod tests;
