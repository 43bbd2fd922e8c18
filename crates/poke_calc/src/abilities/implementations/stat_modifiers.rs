//! Attack and defense modifying abilities.

use crate::abilities::weather::Terrain;
use crate::damage::context::DamageContext;
use crate::damage::modifier::{attack, defense, ChainMultiplier};
use crate::damage::Modifier;
use crate::moves::MoveCategory;
use crate::natures::BattleStat;
use crate::types::Type;

fn when(active: bool, entry: ChainMultiplier) -> Option<ChainMultiplier> {
    active.then_some(entry)
}

fn physical(ctx: &DamageContext<'_>) -> bool {
    ctx.category == MoveCategory::Physical
}

// ============================================================================
// Flat multipliers (pokeRounded before the chain)
// ============================================================================

/// Hustle: 1.5x Attack
pub fn hustle(ctx: &DamageContext<'_>) -> Option<Modifier> {
    (ctx.offense_stat == BattleStat::Atk).then_some(Modifier::ONE_POINT_FIVE)
}

/// Hadron Engine: 4/3x Special Attack in Electric Terrain
pub fn hadron_engine(ctx: &DamageContext<'_>) -> Option<Modifier> {
    (ctx.category == MoveCategory::Special && ctx.field.terrain == Terrain::Electric)
        .then_some(Modifier::FOUR_THIRDS)
}

/// Orichalcum Pulse: 4/3x Attack in Sun
pub fn orichalcum_pulse(ctx: &DamageContext<'_>) -> Option<Modifier> {
    (physical(ctx) && ctx.field.weather.is_sun()).then_some(Modifier::FOUR_THIRDS)
}

// ============================================================================
// Pinch abilities
// ============================================================================

fn pinch(ctx: &DamageContext<'_>, boosted: Type) -> Option<ChainMultiplier> {
    let attacker = ctx.attacker;
    when(
        ctx.move_type == boosted && attacker.current_hp <= attacker.max_hp() / 3,
        attack::FIFTY_OFFENCE,
    )
}

/// Blaze: 1.5x Fire at 1/3 HP or less
pub fn blaze(ctx: &DamageContext<'_>) -> Option<ChainMultiplier> {
    pinch(ctx, Type::Fire)
}

/// Overgrow: 1.5x Grass at 1/3 HP or less
pub fn overgrow(ctx: &DamageContext<'_>) -> Option<ChainMultiplier> {
    pinch(ctx, Type::Grass)
}

/// Swarm: 1.5x Bug at 1/3 HP or less
pub fn swarm(ctx: &DamageContext<'_>) -> Option<ChainMultiplier> {
    pinch(ctx, Type::Bug)
}

/// Torrent: 1.5x Water at 1/3 HP or less
pub fn torrent(ctx: &DamageContext<'_>) -> Option<ChainMultiplier> {
    pinch(ctx, Type::Water)
}

/// Defeatist: halves the offensive stat at 1/2 HP or less
pub fn defeatist(ctx: &DamageContext<'_>) -> Option<ChainMultiplier> {
    let attacker = ctx.attacker;
    when(
        attacker.current_hp <= attacker.max_hp() / 2,
        attack::HALF_OFFENCE,
    )
}

// ============================================================================
// Unconditional / category gated
// ============================================================================

/// Gorilla Tactics: 1.5x Attack
pub fn gorilla_tactics(ctx: &DamageContext<'_>) -> Option<ChainMultiplier> {
    when(physical(ctx), attack::FIFTY_OFFENCE)
}

/// Guts: 1.5x while statused
pub fn guts(ctx: &DamageContext<'_>) -> Option<ChainMultiplier> {
    when(ctx.attacker.status.is_some(), attack::FIFTY_OFFENCE)
}

/// Huge Power / Pure Power: 2x Attack
pub fn huge_power(ctx: &DamageContext<'_>) -> Option<ChainMultiplier> {
    when(physical(ctx), attack::DOUBLE_OFFENCE)
}

/// Slow Start: halves Attack
pub fn slow_start(ctx: &DamageContext<'_>) -> Option<ChainMultiplier> {
    when(physical(ctx), attack::HALF_OFFENCE)
}

/// Solar Power: 1.5x Special Attack in Sun
pub fn solar_power(ctx: &DamageContext<'_>) -> Option<ChainMultiplier> {
    when(
        ctx.category == MoveCategory::Special && ctx.field.weather.is_sun(),
        attack::FIFTY_OFFENCE,
    )
}

// ============================================================================
// Type boosters
// ============================================================================

/// Dragon's Maw: 1.5x Dragon
pub fn dragons_maw(ctx: &DamageContext<'_>) -> Option<ChainMultiplier> {
    when(ctx.move_type == Type::Dragon, attack::FIFTY_OFFENCE)
}

/// Rocky Payload: 1.5x Rock
pub fn rocky_payload(ctx: &DamageContext<'_>) -> Option<ChainMultiplier> {
    when(ctx.move_type == Type::Rock, attack::FIFTY_OFFENCE)
}

/// Steelworker: 1.5x Steel
pub fn steelworker(ctx: &DamageContext<'_>) -> Option<ChainMultiplier> {
    when(ctx.move_type == Type::Steel, attack::FIFTY_OFFENCE)
}

/// Transistor: 1.5x Electric
pub fn transistor(ctx: &DamageContext<'_>) -> Option<ChainMultiplier> {
    when(ctx.move_type == Type::Electric, attack::FIFTY_OFFENCE)
}

/// Water Bubble: 2x Water
pub fn water_bubble(ctx: &DamageContext<'_>) -> Option<ChainMultiplier> {
    when(ctx.move_type == Type::Water, attack::DOUBLE_OFFENCE)
}

// ============================================================================
// Defender side
// ============================================================================

/// Purifying Salt: halves the attacker's stat for Ghost, Fire and Ice moves
pub fn purifying_salt(ctx: &DamageContext<'_>) -> Option<ChainMultiplier> {
    when(
        matches!(ctx.move_type, Type::Ghost | Type::Fire | Type::Ice),
        attack::HALF_DEFENCE,
    )
}

/// Fur Coat: 2x Defense
pub fn fur_coat(ctx: &DamageContext<'_>) -> Option<ChainMultiplier> {
    when(ctx.defense_stat == BattleStat::Def, defense::FUR_COAT)
}

/// Grass Pelt: 1.5x Defense in Grassy Terrain
pub fn grass_pelt(ctx: &DamageContext<'_>) -> Option<ChainMultiplier> {
    when(
        ctx.defense_stat == BattleStat::Def && ctx.field.terrain == Terrain::Grassy,
        defense::ONE_FIVE_ABILITIES,
    )
}

/// Marvel Scale: 1.5x against a statused attacker
pub fn marvel_scale(ctx: &DamageContext<'_>) -> Option<ChainMultiplier> {
    when(ctx.attacker.status.is_some(), defense::ONE_FIVE_ABILITIES)
}
