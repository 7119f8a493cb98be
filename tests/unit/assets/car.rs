use super::*;

#[test]
fn classification_matches_substrings() {
    assert_eq!(classify_part("FrontChromeBumper"), PartCategory::Chrome);
    assert_eq!(classify_part("windshield_glass"), PartCategory::Glass);
    assert_eq!(classify_part("tire_fl"), PartCategory::Tire);
    assert_eq!(classify_part("Wheel_Rim_RR"), PartCategory::Wheel);
    assert_eq!(classify_part("headlight_left"), PartCategory::Headlight);
    assert_eq!(classify_part("TAILLIGHT_R"), PartCategory::Taillight);
}

#[test]
fn plates_and_stands_are_removed() {
    assert_eq!(classify_part("license_plate"), PartCategory::Removed);
    assert_eq!(classify_part("display_stand"), PartCategory::Removed);
    // Removal wins even when a styling keyword is also present.
    assert_eq!(classify_part("plate_chrome_frame"), PartCategory::Removed);
}

#[test]
fn unmatched_parts_fall_back_to_the_body() {
    assert_eq!(classify_part("hood"), PartCategory::Body);
    assert_eq!(classify_part("mystery_widget_42"), PartCategory::Body);
    assert_eq!(classify_part(""), PartCategory::Body);
}

#[test]
fn model_pieces_drop_removed_parts_and_mark_spinners() {
    use crate::geometry::box_mesh;

    let model = CarModel {
        parts: vec![
            CarModelPart {
                name: "body_shell".into(),
                mesh: box_mesh(2.0, 1.0, 5.0),
                local: Transform::IDENTITY,
            },
            CarModelPart {
                name: "tire_front_left".into(),
                mesh: box_mesh(0.5, 0.5, 0.2),
                local: Transform::IDENTITY,
            },
            CarModelPart {
                name: "license_plate".into(),
                mesh: box_mesh(0.5, 0.2, 0.02),
                local: Transform::IDENTITY,
            },
        ],
    };

    let pieces = model_pieces(&model);
    assert_eq!(pieces.len(), 2);
    assert_eq!(pieces[0].slot, PieceSlot::Body);
    assert!(!pieces[0].spins);
    assert_eq!(pieces[1].slot, PieceSlot::Tire);
    assert!(pieces[1].spins);
}

#[test]
fn fallback_car_has_the_signature_parts() {
    for class in [
        CarClass::Cadillac,
        CarClass::Impala,
        CarClass::Fury,
        CarClass::Fairlane,
    ] {
        let pieces = fallback_pieces(class);

        let count = |slot: PieceSlot| pieces.iter().filter(|p| p.slot == slot).count();
        assert_eq!(count(PieceSlot::Headlight), 2, "{class:?}");
        assert_eq!(count(PieceSlot::Taillight), 2, "{class:?}");
        assert_eq!(count(PieceSlot::Tire), 4, "{class:?}");
        assert_eq!(count(PieceSlot::Whitewall), 4, "{class:?}");
        assert!(count(PieceSlot::Chrome) >= 5, "{class:?}");
        assert!(count(PieceSlot::Glass) >= 4, "{class:?}");
        assert!(count(PieceSlot::Body) >= 5, "{class:?}");

        // Exactly the twelve wheel pieces spin.
        assert_eq!(pieces.iter().filter(|p| p.spins).count(), 12, "{class:?}");

        // Everything sits above the deck.
        for piece in &pieces {
            assert!(piece.local.translation.y >= 0.0, "{class:?}");
        }
    }
}

#[test]
fn fallback_scales_with_class_proportions() {
    let cadillac = fallback_pieces(CarClass::Cadillac);
    let fairlane = fallback_pieces(CarClass::Fairlane);

    let span = |pieces: &[PieceSpec]| {
        pieces
            .iter()
            .map(|p| p.local.translation.z.abs())
            .fold(0.0f32, f32::max)
    };
    assert!(span(&cadillac) > span(&fairlane));
}
