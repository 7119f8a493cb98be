use std::collections::HashMap;

use tracing::info;

use crate::actors::CarClass;
use crate::assets::{CarModel, PieceSlot, PieceSpec, fallback_pieces, model_pieces};
use crate::curve::Spline;
use crate::foundation::core::{Color, Vec3};
use crate::foundation::error::TailfinResult;
use crate::geometry::{RoadGeometry, StripRole, box_mesh, build_road_geometry, plane_mesh};
use crate::populate::{Prop, PropKind, generate_props};
use crate::scene::config::SceneConfig;
use crate::scene::graph::{
    EmissiveRole, Material, MaterialId, MeshId, SceneGraph, SceneNode, SceneResources, Transform,
};

/// One bound drawable piece of a car rig.
#[derive(Clone, Copy, Debug)]
pub struct CarPiece {
    /// Mesh handle.
    pub mesh: MeshId,
    /// Material handle.
    pub material: MaterialId,
    /// Placement relative to the vehicle origin.
    pub local: Transform,
    /// Spins with the wheels when true.
    pub spins: bool,
}

/// All drawable pieces of one traffic slot's car.
#[derive(Clone, Debug, Default)]
pub struct CarRig {
    /// Pieces in draw order.
    pub pieces: Vec<CarPiece>,
}

/// Everything immutable the session renders each frame.
///
/// Built once at scene construction; per-frame state (vehicle progress,
/// camera, scroll) lives in the session, never here.
#[derive(Debug)]
pub struct StaticScene {
    /// The highway path.
    pub spline: Spline,
    /// Shared meshes and materials.
    pub resources: SceneResources,
    /// Static node graph: terrain, road, decals, pillars, city props.
    pub graph: SceneGraph,
    /// Seeded prop list, kept for inspection and tests.
    pub props: Vec<Prop>,
    /// Car rigs parallel to the configured traffic table.
    pub rigs: Vec<CarRig>,
}

/// Build the static scene from configuration.
///
/// Fails fast on invalid configuration, degenerate curves, and degenerate
/// road parameters. When `car_model` is `None` every rig uses the procedural
/// fallback body; a loaded model swaps in seamlessly through the same piece
/// pipeline.
#[tracing::instrument(skip(config, car_model))]
pub fn build_scene(
    config: &SceneConfig,
    car_model: Option<&CarModel>,
) -> TailfinResult<StaticScene> {
    config.validate()?;

    let spline = Spline::new(config.curve.control_points.clone(), config.curve.tension)?;
    let road = build_road_geometry(&spline, &config.road)?;
    let props = generate_props(&config.population, &spline)?;

    let mut resources = SceneResources::new();
    let mut graph = SceneGraph::new();

    build_terrain(config, &mut resources, &mut graph);
    build_road_nodes(config, &road, &mut resources, &mut graph);
    build_overpasses(config, &mut resources, &mut graph);
    build_props(config, &props, &mut resources, &mut graph);
    let rigs = build_rigs(config, car_model, &mut resources);

    info!(
        props = props.len(),
        rigs = rigs.len(),
        meshes = resources.mesh_count(),
        "scene built"
    );

    Ok(StaticScene {
        spline,
        resources,
        graph,
        props,
        rigs,
    })
}

fn build_terrain(config: &SceneConfig, resources: &mut SceneResources, graph: &mut SceneGraph) {
    let ground = resources.add_material(Material::diffuse(config.palette.ground));
    let mesh = resources.add_mesh(plane_mesh(config.ground_size, config.ground_size));
    graph.root.children.push(SceneNode::leaf(
        "terrain",
        Transform::at(Vec3::new(0.0, -0.05, 0.0)),
        mesh,
        ground,
    ));
}

fn build_road_nodes(
    config: &SceneConfig,
    road: &RoadGeometry,
    resources: &mut SceneResources,
    graph: &mut SceneGraph,
) {
    let palette = &config.palette;
    let surface_mat = resources.add_material(Material::diffuse(palette.road));
    let surface = resources.add_mesh(road.surface.clone());

    let mut road_group = SceneNode::group("road");
    road_group
        .children
        .push(SceneNode::leaf("surface", Transform::IDENTITY, surface, surface_mat));

    // Decal paint fades with distance; the fade is premixed toward the
    // asphalt color so panels stay opaque for the z-buffer.
    let mut decal_materials: HashMap<(u8, u8), MaterialId> = HashMap::new();
    let mut decals = SceneNode::group("decals");
    for panel in road.lane_panels.iter().chain(road.edge_panels.iter()) {
        let line = match panel.role {
            StripRole::CenterLine | StripRole::EdgeLine => palette.road_line,
            StripRole::LaneDash => palette.road_edge,
        };
        let key = (panel.role as u8, (panel.opacity * 100.0).round() as u8);
        let material = *decal_materials.entry(key).or_insert_with(|| {
            resources.add_material(Material::diffuse(palette.road.lerp(line, panel.opacity)))
        });
        let mesh = resources.add_mesh(panel.mesh.clone());
        decals
            .children
            .push(SceneNode::leaf("decal", Transform::IDENTITY, mesh, material));
    }
    road_group.children.push(decals);

    let concrete = resources.add_material(Material::diffuse(palette.concrete.scaled(0.92)));
    let mut pillars = SceneNode::group("pillars");
    for (i, pillar) in road.pillars.iter().enumerate() {
        let mesh = resources.add_mesh(box_mesh(2.5, pillar.height, 2.5));
        pillars.children.push(SceneNode::leaf(
            format!("pillar-{i}"),
            Transform::at(pillar.base + Vec3::new(0.0, pillar.height * 0.5, 0.0)),
            mesh,
            concrete,
        ));
    }
    road_group.children.push(pillars);
    graph.root.children.push(road_group);
}

fn build_overpasses(config: &SceneConfig, resources: &mut SceneResources, graph: &mut SceneGraph) {
    let palette = &config.palette;
    let deck_mat = resources.add_material(Material::diffuse(palette.concrete));
    let pillar_mat = resources.add_material(Material::diffuse(palette.concrete.scaled(0.85)));
    let rail_mat = resources.add_material(Material::diffuse(palette.concrete.scaled(0.7)));

    let mut group = SceneNode::group("overpasses");
    for (i, deck) in config.overpasses.iter().enumerate() {
        let mut node = SceneNode::group(format!("overpass-{i}"));
        node.transform = Transform::at_yaw(deck.position, deck.yaw);

        let deck_mesh = resources.add_mesh(box_mesh(deck.length, deck.thickness, deck.width));
        node.children
            .push(SceneNode::leaf("deck", Transform::IDENTITY, deck_mesh, deck_mat));

        for side in [-1.0f32, 1.0] {
            let rail = resources.add_mesh(box_mesh(deck.length + 2.0, 0.5, 0.25));
            node.children.push(SceneNode::leaf(
                "rail",
                Transform::at(Vec3::new(
                    0.0,
                    deck.thickness * 0.5 + 0.3,
                    side * (deck.width * 0.5 - 0.4),
                )),
                rail,
                rail_mat,
            ));
        }

        let pillar_height = (deck.position.y - deck.thickness * 0.5).max(0.0);
        if pillar_height > 1.0 {
            for &offset in &deck.pillar_offsets {
                let mesh = resources.add_mesh(box_mesh(2.2, pillar_height, 2.2));
                // Pillar bases sit on the ground, so their node-local Y runs
                // back down from the deck center.
                node.children.push(SceneNode::leaf(
                    "pillar",
                    Transform::at(Vec3::new(
                        offset,
                        -deck.position.y + pillar_height * 0.5,
                        0.0,
                    )),
                    mesh,
                    pillar_mat,
                ));
            }
        }
        group.children.push(node);
    }
    graph.root.children.push(group);
}

fn build_props(
    config: &SceneConfig,
    props: &[Prop],
    resources: &mut SceneResources,
    graph: &mut SceneGraph,
) {
    let palette = &config.palette;
    let facade_mats: Vec<MaterialId> = palette
        .facades
        .iter()
        .map(|c| resources.add_material(Material::diffuse(*c)))
        .collect();
    let figure_mats: Vec<MaterialId> = palette
        .figures
        .iter()
        .map(|c| resources.add_material(Material::diffuse(*c)))
        .collect();
    let window_mat = resources.add_material(Material::glowing(
        palette.black.lerp(palette.window_glow, 0.25),
        palette.window_glow,
        EmissiveRole::Window,
    ));
    let lamp_head_mat = resources.add_material(Material::glowing(
        palette.whitewall,
        palette.lamp_glow,
        EmissiveRole::StreetLamp,
    ));
    let signal_lens_mat = resources.add_material(Material::glowing(
        palette.black,
        palette.taillight_glow,
        EmissiveRole::Taillight,
    ));
    let dark_mat = resources.add_material(Material::diffuse(palette.black));

    let mut city = SceneNode::group("city");
    for (i, prop) in props.iter().enumerate() {
        let e = prop.extents;
        let mut node = SceneNode::group(format!("prop-{i}"));
        node.transform = Transform::at(prop.position);

        match prop.kind {
            PropKind::Building => {
                let facade = facade_mats[prop.variant as usize % facade_mats.len()];
                let mesh = resources.add_mesh(box_mesh(e.x, e.y, e.z));
                node.children.push(SceneNode::leaf(
                    "facade",
                    Transform::at(Vec3::new(0.0, e.y * 0.5, 0.0)),
                    mesh,
                    facade,
                ));
                if prop.lit {
                    let windows = resources.add_mesh(box_mesh(e.x * 0.8, e.y * 0.6, 0.12));
                    node.children.push(SceneNode::leaf(
                        "windows",
                        Transform::at(Vec3::new(0.0, e.y * 0.5, e.z * 0.5 + 0.08)),
                        windows,
                        window_mat,
                    ));
                }
            }
            PropKind::StreetLamp => {
                let pole = resources.add_mesh(box_mesh(0.18, e.y, 0.18));
                node.children.push(SceneNode::leaf(
                    "pole",
                    Transform::at(Vec3::new(0.0, e.y * 0.5, 0.0)),
                    pole,
                    dark_mat,
                ));
                let head = resources.add_mesh(box_mesh(0.5, 0.28, 0.5));
                node.children.push(SceneNode::leaf(
                    "head",
                    Transform::at(Vec3::new(0.0, e.y + 0.14, 0.0)),
                    head,
                    lamp_head_mat,
                ));
            }
            PropKind::Pedestrian => {
                let figure = figure_mats[prop.variant as usize % figure_mats.len()];
                let torso = resources.add_mesh(box_mesh(e.x, e.y * 0.72, e.z * 0.7));
                node.children.push(SceneNode::leaf(
                    "torso",
                    Transform::at(Vec3::new(0.0, e.y * 0.36, 0.0)),
                    torso,
                    figure,
                ));
                let head = resources.add_mesh(box_mesh(0.22, 0.22, 0.22));
                node.children.push(SceneNode::leaf(
                    "head",
                    Transform::at(Vec3::new(0.0, e.y * 0.85, 0.0)),
                    head,
                    dark_mat,
                ));
            }
            PropKind::TrafficLight => {
                let pole = resources.add_mesh(box_mesh(0.14, e.y, 0.14));
                node.children.push(SceneNode::leaf(
                    "pole",
                    Transform::at(Vec3::new(0.0, e.y * 0.5, 0.0)),
                    pole,
                    dark_mat,
                ));
                let housing = resources.add_mesh(box_mesh(0.36, 0.9, 0.3));
                node.children.push(SceneNode::leaf(
                    "housing",
                    Transform::at(Vec3::new(0.0, e.y - 0.45, 0.0)),
                    housing,
                    dark_mat,
                ));
                let lens = resources.add_mesh(box_mesh(0.18, 0.18, 0.08));
                node.children.push(SceneNode::leaf(
                    "lens",
                    Transform::at(Vec3::new(0.0, e.y - 0.25, 0.18)),
                    lens,
                    signal_lens_mat,
                ));
            }
        }
        city.children.push(node);
    }
    graph.root.children.push(city);
}

fn build_rigs(
    config: &SceneConfig,
    car_model: Option<&CarModel>,
    resources: &mut SceneResources,
) -> Vec<CarRig> {
    let palette = &config.palette;
    let chrome = resources.add_material(Material::diffuse(palette.chrome));
    let glass = resources.add_material(Material::translucent(palette.glass, 0.7));
    let tire = resources.add_material(Material::diffuse(palette.black));
    let whitewall = resources.add_material(Material::diffuse(palette.whitewall));
    let headlight = resources.add_material(Material::glowing(
        hex_or_white("#ffffee"),
        palette.headlight_glow,
        EmissiveRole::Headlight,
    ));
    let taillight = resources.add_material(Material::glowing(
        palette.taillight_glow.scaled(0.6),
        palette.taillight_glow,
        EmissiveRole::Taillight,
    ));

    // Meshes are shared: one registration per car class (or one for the
    // loaded model), body materials one per distinct paint color.
    let mut class_cache: HashMap<CarClass, Vec<(MeshId, PieceSlot, Transform, bool)>> =
        HashMap::new();
    let mut model_cache: Option<Vec<(MeshId, PieceSlot, Transform, bool)>> = None;
    let mut body_cache: HashMap<[u32; 3], MaterialId> = HashMap::new();

    let mut rigs = Vec::with_capacity(config.traffic.len());
    for entry in &config.traffic {
        let registered: &Vec<(MeshId, PieceSlot, Transform, bool)> = match car_model {
            Some(model) => model_cache
                .get_or_insert_with(|| register_pieces(&model_pieces(model), resources)),
            None => class_cache
                .entry(entry.class)
                .or_insert_with(|| register_pieces(&fallback_pieces(entry.class), resources)),
        };

        let color_key = [
            entry.color.r.to_bits(),
            entry.color.g.to_bits(),
            entry.color.b.to_bits(),
        ];
        let body = *body_cache
            .entry(color_key)
            .or_insert_with(|| resources.add_material(Material::diffuse(entry.color)));

        let pieces = registered
            .iter()
            .map(|&(mesh, slot, local, spins)| CarPiece {
                mesh,
                material: match slot {
                    PieceSlot::Body => body,
                    PieceSlot::Chrome => chrome,
                    PieceSlot::Glass => glass,
                    PieceSlot::Tire => tire,
                    PieceSlot::Whitewall => whitewall,
                    PieceSlot::Headlight => headlight,
                    PieceSlot::Taillight => taillight,
                },
                local,
                spins,
            })
            .collect();
        rigs.push(CarRig { pieces });
    }
    rigs
}

fn register_pieces(
    specs: &[PieceSpec],
    resources: &mut SceneResources,
) -> Vec<(MeshId, PieceSlot, Transform, bool)> {
    specs
        .iter()
        .map(|spec| {
            (
                resources.add_mesh(spec.mesh.clone()),
                spec.slot,
                spec.local,
                spec.spins,
            )
        })
        .collect()
}

fn hex_or_white(s: &str) -> Color {
    Color::from_hex(s).unwrap_or(Color::WHITE)
}

#[cfg(test)]
#[path = "../../tests/unit/scene/build.rs"]
mod tests;
