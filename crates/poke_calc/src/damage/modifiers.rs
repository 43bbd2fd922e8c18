//! Stage builders: effective power, effective attack, effective defense.
//!
//! Each stage collects chain entries from the ability registry and the
//! named-move tables, then resolves them with [`Chain`].

use crate::abilities::implementations::damage_modifiers;
use crate::abilities::Weather;
use crate::error::CalcError;
use crate::natures::BattleStat;
use crate::stats::effective_stat;
use crate::types::Type;

use super::chain::Chain;
use super::context::DamageContext;
use super::formula::apply_modifier;
use super::modifier::power;
use super::special_moves::{base_power, move_power_entries, terrain_power_entries};
use super::Modifier;

// ============================================================================
// Effective power
// ============================================================================

/// Base power after the whole power chain.
pub fn compute_base_power(ctx: &DamageContext<'_>) -> Result<u32, CalcError> {
    let base = base_power(ctx)?;
    let attacker_hooks = ctx.attacker_hooks();

    let mut chain = Chain::new();
    chain.extend(damage_modifiers::aura(ctx));
    chain.extend(attacker_hooks.and_then(|h| h.on_base_power).and_then(|hook| hook(ctx)));
    chain.extend(ctx.defender_hooks().and_then(|h| h.on_foe_base_power).and_then(|hook| hook(ctx)));
    chain.extend(move_power_entries(ctx));
    chain.extend(terrain_power_entries(ctx));

    // Technician sees the power after every entry ordered below its own
    if let Some(partial) = attacker_hooks.and_then(|h| h.on_partial_base_power) {
        let so_far = chain.resolve_before(base, power::ONE_FIVE_ABILITY.order);
        chain.extend(partial(ctx, so_far));
    }

    let effective = chain.resolve(base);
    log::debug!(
        "{}: base power {} -> {} ({} entries)",
        ctx.move_data.name,
        base,
        effective,
        chain.len()
    );
    Ok(effective)
}

// ============================================================================
// Effective attack
// ============================================================================

/// Offensive stat after flat multipliers and the attack chain.
pub fn compute_effective_attack(ctx: &DamageContext<'_>) -> u32 {
    let mut attack = effective_stat(ctx.stat_source, ctx.offense_stat, ctx.field);

    let attacker_hooks = ctx.attacker_hooks();
    if let Some(flat) = attacker_hooks.and_then(|h| h.on_flat_attack).and_then(|hook| hook(ctx)) {
        attack = apply_modifier(attack, flat.val());
    }

    let mut chain = Chain::new();
    chain.extend(attacker_hooks.and_then(|h| h.on_attack).and_then(|hook| hook(ctx)));
    chain.extend(ctx.defender_hooks().and_then(|h| h.on_foe_attack).and_then(|hook| hook(ctx)));

    let effective = chain.resolve(attack);
    log::debug!("{:?} {} -> effective attack {}", ctx.offense_stat, attack, effective);
    effective
}

// ============================================================================
// Effective defense
// ============================================================================

/// Defensive stat after the weather boost and the defense chain.
pub fn compute_effective_defense(ctx: &DamageContext<'_>) -> u32 {
    let defender = ctx.defender;
    let mut defense = effective_stat(defender, ctx.defense_stat, ctx.field);

    let weather_boost = match ctx.field.weather {
        Weather::Sand => defender.has_type(Type::Rock) && ctx.defense_stat == BattleStat::SpD,
        Weather::Snow => defender.has_type(Type::Ice) && ctx.defense_stat == BattleStat::Def,
        _ => false,
    };
    if weather_boost {
        defense = apply_modifier(defense, Modifier::ONE_POINT_FIVE.val());
    }

    let mut chain = Chain::new();
    chain.extend(ctx.defender_hooks().and_then(|h| h.on_defense).and_then(|hook| hook(ctx)));

    let effective = chain.resolve(defense);
    log::debug!("{:?} {} -> effective defense {}", ctx.defense_stat, defense, effective);
    effective
}
