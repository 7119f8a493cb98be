use std::f32::consts::FRAC_PI_2;

use crate::actors::CarClass;
use crate::foundation::core::{Quat, Vec3};
use crate::geometry::{TriMesh, box_mesh, cylinder_mesh};
use crate::scene::Transform;

/// Category of a named sub-mesh in an externally supplied car model.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PartCategory {
    /// Bumpers, grilles, trim.
    Chrome,
    /// Windshields and windows.
    Glass,
    /// Tire rubber.
    Tire,
    /// Rims and hubcaps.
    Wheel,
    /// Front lamps.
    Headlight,
    /// Rear lamps.
    Taillight,
    /// Anything unmatched; painted with the body color.
    Body,
    /// Stripped from the model entirely (license plates, display stands).
    Removed,
}

/// Classify a sub-mesh by substring match on its (case-insensitive) name.
///
/// Removal wins over styling so a "plate_chrome" part is still dropped.
/// Unmatched names are never an error; they fall back to [`PartCategory::Body`].
pub fn classify_part(name: &str) -> PartCategory {
    let name = name.to_ascii_lowercase();
    if name.contains("plate") || name.contains("stand") {
        return PartCategory::Removed;
    }
    if name.contains("headlight") {
        return PartCategory::Headlight;
    }
    if name.contains("taillight") || name.contains("tail_light") {
        return PartCategory::Taillight;
    }
    if name.contains("chrome") {
        return PartCategory::Chrome;
    }
    if name.contains("glass") {
        return PartCategory::Glass;
    }
    if name.contains("tire") {
        return PartCategory::Tire;
    }
    if name.contains("wheel") {
        return PartCategory::Wheel;
    }
    PartCategory::Body
}

/// One named sub-mesh of an external car model.
#[derive(Clone, Debug)]
pub struct CarModelPart {
    /// Part name as exported by the modeling tool.
    pub name: String,
    /// Geometry in the model's local space.
    pub mesh: TriMesh,
    /// Placement within the car.
    pub local: Transform,
}

/// An externally supplied car model: a bag of named parts.
#[derive(Clone, Debug, Default)]
pub struct CarModel {
    /// Sub-meshes in draw order.
    pub parts: Vec<CarModelPart>,
}

/// Material slot a car piece binds to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceSlot {
    /// Painted body color.
    Body,
    /// Bright trim.
    Chrome,
    /// Translucent glazing.
    Glass,
    /// Tire rubber.
    Tire,
    /// Whitewall ring and rims.
    Whitewall,
    /// Front lamps; glow follows the time-of-day fan-out.
    Headlight,
    /// Rear lamps; glow follows the time-of-day fan-out.
    Taillight,
}

/// One drawable piece of a car, before materials are bound.
#[derive(Clone, Debug)]
pub struct PieceSpec {
    /// Material slot.
    pub slot: PieceSlot,
    /// Geometry.
    pub mesh: TriMesh,
    /// Placement relative to the car origin (on the deck, forward +Z).
    pub local: Transform,
    /// True for pieces that spin with the wheels.
    pub spins: bool,
}

/// Convert a loaded model into pieces, dropping removed parts.
///
/// Classification failure is non-fatal by design: an unmatched part simply
/// takes the body slot.
pub fn model_pieces(model: &CarModel) -> Vec<PieceSpec> {
    model
        .parts
        .iter()
        .filter_map(|part| {
            let category = classify_part(&part.name);
            let slot = match category {
                PartCategory::Removed => return None,
                PartCategory::Chrome => PieceSlot::Chrome,
                PartCategory::Glass => PieceSlot::Glass,
                PartCategory::Tire => PieceSlot::Tire,
                PartCategory::Wheel => PieceSlot::Whitewall,
                PartCategory::Headlight => PieceSlot::Headlight,
                PartCategory::Taillight => PieceSlot::Taillight,
                PartCategory::Body => PieceSlot::Body,
            };
            Some(PieceSpec {
                slot,
                mesh: part.mesh.clone(),
                local: part.local,
                spins: matches!(category, PartCategory::Tire | PartCategory::Wheel),
            })
        })
        .collect()
}

/// Procedural 1959 sedan built from boxes and cylinders.
///
/// This is the seamless stand-in when no external model is available: long
/// hood, low cabin, tail fins, chrome bumpers, whitewall tires. Proportions
/// come from the [`CarClass`].
pub fn fallback_pieces(class: CarClass) -> Vec<PieceSpec> {
    let p = class.proportions();
    let (l, w) = (p.length, p.width);
    let r = p.wheel_radius;
    let mut pieces = Vec::new();

    let body = |mesh: TriMesh, local: Transform| PieceSpec {
        slot: PieceSlot::Body,
        mesh,
        local,
        spins: false,
    };

    pieces.push(body(
        box_mesh(w, p.height, l),
        Transform::at(Vec3::new(0.0, r + 0.3, 0.0)),
    ));
    pieces.push(body(
        box_mesh(w * 0.9, 0.3, l * 0.4),
        Transform::at(Vec3::new(0.0, r + 0.62, l * 0.3)),
    ));
    pieces.push(body(
        box_mesh(w * 0.9, 0.4, l * 0.27),
        Transform::at(Vec3::new(0.0, r + 0.58, -l * 0.32)),
    ));
    // Cabin and roof.
    pieces.push(body(
        box_mesh(w * 0.86, 0.5, l * 0.4),
        Transform::at(Vec3::new(0.0, r + 0.95, -l * 0.02)),
    ));
    pieces.push(body(
        box_mesh(w * 0.77, 0.2, l * 0.33),
        Transform::at(Vec3::new(0.0, r + 1.28, -l * 0.02)),
    ));

    // Tail fins, the signature of the year.
    for side in [-1.0f32, 1.0] {
        pieces.push(body(
            box_mesh(0.15, p.fin_height, l * 0.16),
            Transform::at(Vec3::new(side * w * 0.39, r + 0.95, -l * 0.42)),
        ));
        pieces.push(PieceSpec {
            slot: PieceSlot::Taillight,
            mesh: box_mesh(0.1, 0.3, 0.15),
            local: Transform::at(Vec3::new(side * w * 0.39, r + 0.85, -l * 0.49)),
            spins: false,
        });
    }

    // Glazing.
    for (z, tilt) in [(l * 0.17, -0.3f32), (-l * 0.21, 0.3)] {
        pieces.push(PieceSpec {
            slot: PieceSlot::Glass,
            mesh: box_mesh(w * 0.8, 0.45, 0.06),
            local: Transform {
                translation: Vec3::new(0.0, r + 1.05, z),
                rotation: Quat::from_rotation_x(tilt),
                scale: Vec3::ONE,
            },
            spins: false,
        });
    }
    for side in [-1.0f32, 1.0] {
        pieces.push(PieceSpec {
            slot: PieceSlot::Glass,
            mesh: box_mesh(0.05, 0.4, l * 0.3),
            local: Transform::at(Vec3::new(side * w * 0.43, r + 1.0, -l * 0.02)),
            spins: false,
        });
    }

    // Chrome work.
    let chrome_specs = [
        (w + 0.1, 0.25, 0.15, Vec3::new(0.0, r + 0.18, l * 0.5)),
        (w * 0.73, 0.35, 0.1, Vec3::new(0.0, r + 0.38, l * 0.49)),
        (w, 0.2, 0.12, Vec3::new(0.0, r + 0.18, -l * 0.49)),
        (0.05, 0.08, l * 0.8, Vec3::new(w * 0.51, r + 0.48, 0.0)),
        (0.05, 0.08, l * 0.8, Vec3::new(-w * 0.51, r + 0.48, 0.0)),
    ];
    for (cw, ch, cd, at) in chrome_specs {
        pieces.push(PieceSpec {
            slot: PieceSlot::Chrome,
            mesh: box_mesh(cw, ch, cd),
            local: Transform::at(at),
            spins: false,
        });
    }

    // Headlights face forward; the cylinder axis turns from X to Z.
    for side in [-1.0f32, 1.0] {
        pieces.push(PieceSpec {
            slot: PieceSlot::Headlight,
            mesh: cylinder_mesh(0.15, 0.1, 12),
            local: Transform {
                translation: Vec3::new(side * w * 0.32, r + 0.45, l * 0.49),
                rotation: Quat::from_rotation_y(FRAC_PI_2),
                scale: Vec3::ONE,
            },
            spins: false,
        });
    }

    // Wheels: tire, whitewall ring, chrome hub.
    for (sx, sz) in [(-1.0f32, 1.0f32), (1.0, 1.0), (-1.0, -1.0), (1.0, -1.0)] {
        let at = Vec3::new(sx * w * 0.45, r, sz * l * 0.28);
        let wheel_parts = [
            (PieceSlot::Tire, r, 0.25),
            (PieceSlot::Whitewall, r * 0.78, 0.26),
            (PieceSlot::Chrome, r * 0.45, 0.27),
        ];
        for (slot, radius, width) in wheel_parts {
            pieces.push(PieceSpec {
                slot,
                mesh: cylinder_mesh(radius, width, 16),
                local: Transform::at(at),
                spins: true,
            });
        }
    }

    pieces
}

#[cfg(test)]
#[path = "../../tests/unit/assets/car.rs"]
mod tests;
