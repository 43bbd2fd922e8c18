//! Type-changing ability implementations.
//!
//! Abilities that change the type of moves: Aerilate, Pixilate, Refrigerate,
//! Galvanize, Normalize, and Liquid Voice.

use crate::ids::to_id;
use crate::moves::{Move, MoveFlags};
use crate::types::Type;

/// Moves whose type is computed elsewhere and survive Normalize.
const NORMALIZE_EXCEPTIONS: [&str; 7] = [
    "hiddenpower",
    "weatherball",
    "naturalgift",
    "technoblast",
    "judgment",
    "multiattack",
    "terrainpulse",
];

fn normal_becomes(current_type: Type, new_type: Type) -> Type {
    if current_type == Type::Normal {
        new_type
    } else {
        current_type
    }
}

/// Aerilate: Normal -> Flying
pub fn aerilate(_move_data: &Move, current_type: Type) -> Type {
    normal_becomes(current_type, Type::Flying)
}

/// Galvanize: Normal -> Electric
pub fn galvanize(_move_data: &Move, current_type: Type) -> Type {
    normal_becomes(current_type, Type::Electric)
}

/// Pixilate: Normal -> Fairy
pub fn pixilate(_move_data: &Move, current_type: Type) -> Type {
    normal_becomes(current_type, Type::Fairy)
}

/// Refrigerate: Normal -> Ice
pub fn refrigerate(_move_data: &Move, current_type: Type) -> Type {
    normal_becomes(current_type, Type::Ice)
}

/// Liquid Voice: sound moves become Water
pub fn liquid_voice(move_data: &Move, current_type: Type) -> Type {
    if move_data.flags.contains(MoveFlags::SOUND) {
        Type::Water
    } else {
        current_type
    }
}

/// Normalize: everything becomes Normal, except Z-moves and self-typed moves
pub fn normalize(move_data: &Move, current_type: Type) -> Type {
    if move_data.is_z {
        return current_type;
    }
    let name = to_id(move_data.real_move.as_deref().unwrap_or(&move_data.name));
    if NORMALIZE_EXCEPTIONS.contains(&name.as_str()) {
        current_type
    } else {
        Type::Normal
    }
}
