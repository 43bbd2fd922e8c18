//! Immunity abilities.
//!
//! Called via `OnImmunity` after type effectiveness is known.
//! Returns true if the move is blocked outright.

use crate::damage::context::DamageContext;
use crate::moves::MoveFlags;
use crate::types::{Effectiveness, Type};

fn blocks_type(ctx: &DamageContext<'_>, blocked: Type) -> bool {
    ctx.move_type == blocked
}

fn blocks_flag(ctx: &DamageContext<'_>, flag: MoveFlags) -> bool {
    ctx.move_data.flags.contains(flag)
}

/// Earth Eater / Levitate: Ground
pub fn ground_immunity(ctx: &DamageContext<'_>, _effectiveness: Effectiveness) -> bool {
    blocks_type(ctx, Type::Ground)
}

/// Flash Fire / Well-Baked Body: Fire
pub fn fire_immunity(ctx: &DamageContext<'_>, _effectiveness: Effectiveness) -> bool {
    blocks_type(ctx, Type::Fire)
}

/// Dry Skin / Storm Drain / Water Absorb: Water
pub fn water_immunity(ctx: &DamageContext<'_>, _effectiveness: Effectiveness) -> bool {
    blocks_type(ctx, Type::Water)
}

/// Lightning Rod / Motor Drive / Volt Absorb: Electric
pub fn electric_immunity(ctx: &DamageContext<'_>, _effectiveness: Effectiveness) -> bool {
    blocks_type(ctx, Type::Electric)
}

/// Sap Sipper: Grass
pub fn sap_sipper(ctx: &DamageContext<'_>, _effectiveness: Effectiveness) -> bool {
    blocks_type(ctx, Type::Grass)
}

/// Wind Rider: wind moves
pub fn wind_rider(ctx: &DamageContext<'_>, _effectiveness: Effectiveness) -> bool {
    blocks_flag(ctx, MoveFlags::WIND)
}

/// Bulletproof: ball and bomb moves
pub fn bulletproof(ctx: &DamageContext<'_>, _effectiveness: Effectiveness) -> bool {
    blocks_flag(ctx, MoveFlags::BULLET)
}

/// Soundproof: sound moves
pub fn soundproof(ctx: &DamageContext<'_>, _effectiveness: Effectiveness) -> bool {
    blocks_flag(ctx, MoveFlags::SOUND)
}

/// Wonder Guard: only super-effective moves land
pub fn wonder_guard(_ctx: &DamageContext<'_>, effectiveness: Effectiveness) -> bool {
    !effectiveness.is_super_effective()
}
