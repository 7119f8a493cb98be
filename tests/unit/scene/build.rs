use super::*;
use crate::scene::config::CurveConfig;

#[test]
fn builtin_scene_builds() {
    let config = SceneConfig::vintage_1959();
    let scene = build_scene(&config, None).unwrap();

    assert!(!scene.props.is_empty());
    assert_eq!(scene.rigs.len(), config.traffic.len());
    assert!(scene.resources.mesh_count() > 0);
    assert!(!scene.graph.collect_draws().is_empty());
}

#[test]
fn draws_reference_valid_resources() {
    let config = SceneConfig::vintage_1959();
    let scene = build_scene(&config, None).unwrap();

    for draw in scene.graph.collect_draws() {
        assert!(scene.resources.mesh(draw.mesh).is_some());
        assert!(scene.resources.material(draw.material).is_some());
    }
    for rig in &scene.rigs {
        assert!(!rig.pieces.is_empty());
        for piece in &rig.pieces {
            assert!(scene.resources.mesh(piece.mesh).is_some());
            assert!(scene.resources.material(piece.material).is_some());
        }
        assert!(piece_spin_count(rig) >= 12);
    }
}

fn piece_spin_count(rig: &CarRig) -> usize {
    rig.pieces.iter().filter(|p| p.spins).count()
}

#[test]
fn rigs_share_meshes_per_class() {
    let config = SceneConfig::vintage_1959();
    let scene = build_scene(&config, None).unwrap();

    // Two cadillac slots reference the same registered meshes.
    let cadillacs: Vec<usize> = config
        .traffic
        .iter()
        .enumerate()
        .filter(|(_, e)| e.class == crate::actors::CarClass::Cadillac)
        .map(|(i, _)| i)
        .collect();
    assert!(cadillacs.len() >= 2);
    let a = &scene.rigs[cadillacs[0]];
    let b = &scene.rigs[cadillacs[1]];
    assert_eq!(
        a.pieces.iter().map(|p| p.mesh).collect::<Vec<_>>(),
        b.pieces.iter().map(|p| p.mesh).collect::<Vec<_>>()
    );
}

#[test]
fn lit_buildings_gain_window_nodes() {
    let config = SceneConfig::vintage_1959();
    let scene = build_scene(&config, None).unwrap();
    let lit = scene
        .props
        .iter()
        .filter(|p| p.lit && p.kind == crate::populate::PropKind::Building)
        .count();
    assert!(lit > 0);

    let windows = count_named(&scene.graph.root, "windows");
    assert_eq!(windows, lit);
}

fn count_named(node: &SceneNode, name: &str) -> usize {
    let mut n = usize::from(node.name == name);
    for child in &node.children {
        n += count_named(child, name);
    }
    n
}

#[test]
fn degenerate_curves_fail_fast() {
    let mut config = SceneConfig::vintage_1959();
    config.curve = CurveConfig {
        control_points: vec![Vec3::ZERO; 4],
        tension: 0.5,
    };
    assert!(build_scene(&config, None).is_err());
}

#[test]
fn loaded_model_replaces_the_fallback_body() {
    use crate::assets::{CarModel, CarModelPart};
    use crate::geometry::box_mesh;

    let model = CarModel {
        parts: vec![
            CarModelPart {
                name: "shell".into(),
                mesh: box_mesh(2.0, 1.0, 5.0),
                local: Transform::IDENTITY,
            },
            CarModelPart {
                name: "front_chrome_bumper".into(),
                mesh: box_mesh(2.2, 0.3, 0.2),
                local: Transform::IDENTITY,
            },
            CarModelPart {
                name: "license_plate".into(),
                mesh: box_mesh(0.5, 0.25, 0.02),
                local: Transform::IDENTITY,
            },
        ],
    };

    let config = SceneConfig::vintage_1959();
    let scene = build_scene(&config, Some(&model)).unwrap();
    // The plate is removed; shell and bumper stay.
    assert!(scene.rigs.iter().all(|r| r.pieces.len() == 2));
}
