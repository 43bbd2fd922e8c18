//! Base power modifying abilities.
//!
//! These are called via `OnChain` while building the base power chain.

use crate::abilities::weather::Weather;
use crate::damage::context::DamageContext;
use crate::damage::modifier::{power, ChainMultiplier};
use crate::moves::{MoveCategory, MoveFlags};
use crate::types::Type;

fn when(active: bool, entry: ChainMultiplier) -> Option<ChainMultiplier> {
    active.then_some(entry)
}

fn flagged(ctx: &DamageContext<'_>, flag: MoveFlags, entry: ChainMultiplier) -> Option<ChainMultiplier> {
    when(ctx.move_data.flags.contains(flag), entry)
}

// ============================================================================
// 1.2x
// ============================================================================

/// Aerilate / Galvanize / Pixilate / Refrigerate: 1.2x when the listed type is Normal
pub fn ate_boost(ctx: &DamageContext<'_>) -> Option<ChainMultiplier> {
    when(ctx.move_data.move_type == Type::Normal, power::ONE_TWO_ABILITY)
}

/// Iron Fist: 1.2x power for punch moves
pub fn iron_fist(ctx: &DamageContext<'_>) -> Option<ChainMultiplier> {
    flagged(ctx, MoveFlags::PUNCH, power::ONE_TWO_ABILITY)
}

/// Normalize: 1.2x on everything
pub fn normalize(_ctx: &DamageContext<'_>) -> Option<ChainMultiplier> {
    Some(power::ONE_TWO_ABILITY)
}

/// Reckless: 1.2x for recoil and crash-damage moves
pub fn reckless(ctx: &DamageContext<'_>) -> Option<ChainMultiplier> {
    when(
        ctx.move_data.recoil.is_some() || ctx.move_data.has_crash_damage,
        power::ONE_TWO_ABILITY,
    )
}

// ============================================================================
// 1.3x
// ============================================================================

/// Punk Rock: 1.3x for sound moves
pub fn punk_rock(ctx: &DamageContext<'_>) -> Option<ChainMultiplier> {
    flagged(ctx, MoveFlags::SOUND, power::ONE_THREE_ABILITY)
}

/// Sand Force: 1.3x Rock/Ground/Steel moves in Sandstorm
pub fn sand_force(ctx: &DamageContext<'_>) -> Option<ChainMultiplier> {
    when(
        ctx.field.weather == Weather::Sand
            && matches!(ctx.move_type, Type::Rock | Type::Ground | Type::Steel),
        power::ONE_THREE_ABILITY,
    )
}

/// Sheer Force: 1.3x for moves with secondary effects
pub fn sheer_force(ctx: &DamageContext<'_>) -> Option<ChainMultiplier> {
    when(ctx.move_data.has_sheer_force, power::ONE_THREE_ABILITY)
}

/// Tough Claws: 1.3x power for contact moves
pub fn tough_claws(ctx: &DamageContext<'_>) -> Option<ChainMultiplier> {
    when(ctx.makes_contact, power::ONE_THREE_ABILITY)
}

// ============================================================================
// 1.5x
// ============================================================================

/// Flare Boost: 1.5x special moves while burned
pub fn flare_boost(ctx: &DamageContext<'_>) -> Option<ChainMultiplier> {
    when(
        ctx.attacker.is_burned() && ctx.category == MoveCategory::Special,
        power::ONE_FIVE_ABILITY,
    )
}

/// Mega Launcher: 1.5x for pulse moves
pub fn mega_launcher(ctx: &DamageContext<'_>) -> Option<ChainMultiplier> {
    flagged(ctx, MoveFlags::PULSE, power::ONE_FIVE_ABILITY)
}

/// Sharpness: 1.5x for slicing moves
pub fn sharpness(ctx: &DamageContext<'_>) -> Option<ChainMultiplier> {
    flagged(ctx, MoveFlags::SLICING, power::ONE_FIVE_ABILITY)
}

/// Steely Spirit: 1.5x Steel moves
pub fn steely_spirit(ctx: &DamageContext<'_>) -> Option<ChainMultiplier> {
    when(ctx.move_type == Type::Steel, power::ONE_FIVE_ABILITY)
}

/// Strong Jaw: 1.5x for bite moves
pub fn strong_jaw(ctx: &DamageContext<'_>) -> Option<ChainMultiplier> {
    flagged(ctx, MoveFlags::BITE, power::ONE_FIVE_ABILITY)
}

/// Toxic Boost: 1.5x physical moves while poisoned
pub fn toxic_boost(ctx: &DamageContext<'_>) -> Option<ChainMultiplier> {
    when(
        ctx.attacker.is_poisoned() && ctx.category == MoveCategory::Physical,
        power::ONE_FIVE_ABILITY,
    )
}

/// Technician: 1.5x when the power so far is at most 60
pub fn technician(_ctx: &DamageContext<'_>, power_so_far: u32) -> Option<ChainMultiplier> {
    when(power_so_far <= 60, power::ONE_FIVE_ABILITY)
}

// ============================================================================
// Defender side
// ============================================================================

/// Heatproof: halves Fire moves
pub fn heatproof(ctx: &DamageContext<'_>) -> Option<ChainMultiplier> {
    when(ctx.move_type == Type::Fire, power::HEATPROOF)
}

/// Dry Skin: 1.25x Fire moves
pub fn dry_skin(ctx: &DamageContext<'_>) -> Option<ChainMultiplier> {
    when(ctx.move_type == Type::Fire, power::DRY_SKIN)
}

// ============================================================================
// Field-wide
// ============================================================================

/// Dark Aura / Fairy Aura from anyone on the field, reversed by Aura Break.
pub fn aura(ctx: &DamageContext<'_>) -> Option<ChainMultiplier> {
    let mut on_field = ctx.field.abilities_on_field(ctx.attacker, ctx.defender);
    let aura_active = on_field
        .clone()
        .filter_map(|hooks| hooks.aura_type)
        .any(|t| t == ctx.move_type);
    if !aura_active {
        return None;
    }
    if on_field.any(|hooks| hooks.breaks_auras) {
        Some(power::AURA_BREAK)
    } else {
        Some(power::AURA)
    }
}
