use super::*;
use crate::geometry::box_mesh;
use crate::scene::{DrawItem, SceneResources, Transform};

fn test_atmosphere(tod: f32) -> Atmosphere {
    crate::scene::SceneConfig::vintage_1959().daynight.fan_out(tod)
}

fn camera() -> crate::scene::CameraPose {
    crate::scene::CameraPose {
        eye: Vec3::new(0.0, 0.0, 10.0),
        target: Vec3::ZERO,
        fov_deg: 65.0,
        near: 0.1,
        far: 500.0,
    }
}

fn box_draw(resources: &mut SceneResources, material: Material) -> Vec<DrawItem> {
    let mesh = resources.add_mesh(box_mesh(4.0, 4.0, 4.0));
    let mat = resources.add_material(material);
    vec![DrawItem {
        mesh,
        material: mat,
        world: Transform::IDENTITY.matrix(),
    }]
}

#[test]
fn empty_scene_renders_the_sky_gradient() {
    let viewport = Viewport::new(32, 24).unwrap();
    let mut renderer = CpuRenderer::new(viewport);
    let resources = SceneResources::new();
    let atmos = test_atmosphere(0.0);

    let frame = renderer.render(&resources, &[], &camera(), &atmos, &LightDirs::default());
    assert_eq!(frame.width(), 32);
    assert_eq!(frame.height(), 24);

    let top = frame.pixel(16, 0);
    let bottom = frame.pixel(16, 23);
    assert!((top[0] - atmos.sky_top.r).abs() < 1e-3);
    // The gradient actually moves toward the horizon color.
    assert!((bottom[1] - top[1]).abs() > 1e-4);
}

#[test]
fn a_box_in_front_of_the_camera_covers_the_center() {
    let viewport = Viewport::new(64, 48).unwrap();
    let mut renderer = CpuRenderer::new(viewport);
    let mut resources = SceneResources::new();
    let red = Material::diffuse(Color::new(0.9, 0.1, 0.1));
    let draws = box_draw(&mut resources, red);
    let atmos = test_atmosphere(0.0);

    let frame = renderer.render(&resources, &draws, &camera(), &atmos, &LightDirs::default());
    let center = frame.pixel(32, 24);
    // Strongly red against the teal sky.
    assert!(center[0] > center[2]);
    let corner = frame.pixel(0, 0);
    assert!((corner[0] - atmos.sky_top.r).abs() < 0.1);
}

#[test]
fn nearer_geometry_wins_the_depth_test() {
    let viewport = Viewport::new(64, 48).unwrap();
    let mut renderer = CpuRenderer::new(viewport);
    let mut resources = SceneResources::new();

    let mesh = resources.add_mesh(box_mesh(4.0, 4.0, 0.5));
    let red = resources.add_material(Material::diffuse(Color::new(1.0, 0.0, 0.0)));
    let blue = resources.add_material(Material::diffuse(Color::new(0.0, 0.0, 1.0)));

    // Blue sits behind red but is drawn last.
    let draws = vec![
        DrawItem {
            mesh,
            material: red,
            world: Transform::at(Vec3::new(0.0, 0.0, 2.0)).matrix(),
        },
        DrawItem {
            mesh,
            material: blue,
            world: Transform::at(Vec3::new(0.0, 0.0, -2.0)).matrix(),
        },
    ];

    let atmos = test_atmosphere(0.0);
    let frame = renderer.render(&resources, &draws, &camera(), &atmos, &LightDirs::default());
    let center = frame.pixel(32, 24);
    assert!(center[0] > center[2]);
}

#[test]
fn gated_emissives_only_glow_at_night() {
    let viewport = Viewport::new(48, 48).unwrap();
    let mut renderer = CpuRenderer::new(viewport);
    let mut resources = SceneResources::new();
    let lamp = Material::glowing(
        Color::BLACK,
        Color::new(1.0, 0.9, 0.4),
        crate::scene::EmissiveRole::Headlight,
    );
    let draws = box_draw(&mut resources, lamp);

    let day = renderer.render(
        &resources,
        &draws,
        &camera(),
        &test_atmosphere(0.0),
        &LightDirs::default(),
    );
    let night = renderer.render(
        &resources,
        &draws,
        &camera(),
        &test_atmosphere(1.0),
        &LightDirs::default(),
    );

    let day_center = day.pixel(24, 24);
    let night_center = night.pixel(24, 24);
    // Black box by day; glowing by night.
    assert!(day_center[0] < 0.15);
    assert!(night_center[0] > 0.5);
}

#[test]
fn output_is_always_clamped() {
    let viewport = Viewport::new(16, 16).unwrap();
    let mut renderer = CpuRenderer::new(viewport);
    let mut resources = SceneResources::new();
    let hot = Material {
        base: Color::WHITE,
        opacity: 1.0,
        emissive: Color::WHITE,
        emissive_intensity: 10.0,
        emissive_role: None,
    };
    let draws = box_draw(&mut resources, hot);

    let frame = renderer.render(
        &resources,
        &draws,
        &camera(),
        &test_atmosphere(0.5),
        &LightDirs::default(),
    );
    assert!(frame.data().iter().all(|&v| (0.0..=1.0).contains(&v)));
}

#[test]
fn resize_changes_the_output_dimensions() {
    let mut renderer = CpuRenderer::new(Viewport::new(8, 8).unwrap());
    renderer.resize(Viewport::new(20, 10).unwrap());
    let frame = renderer.render(
        &SceneResources::new(),
        &[],
        &camera(),
        &test_atmosphere(0.0),
        &LightDirs::default(),
    );
    assert_eq!((frame.width(), frame.height()), (20, 10));
}
