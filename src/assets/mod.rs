//! External car-model classification and the procedural fallback body.

mod car;

pub use car::{
    CarModel, CarModelPart, PartCategory, PieceSlot, PieceSpec, classify_part, fallback_pieces,
    model_pieces,
};
