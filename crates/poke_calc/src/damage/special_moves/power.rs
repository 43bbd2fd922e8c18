use crate::abilities::{Terrain, Weather};
use crate::damage::context::DamageContext;
use crate::damage::modifier::{power, ChainMultiplier};
use crate::error::CalcError;
use crate::natures::BattleStat;
use crate::stats::effective_stat;
use crate::types::Type;

// ============================================================================
// Power callbacks
// ============================================================================

/// Starting base power: the listed value, or the callback result for moves
/// flagged with a power callback.
pub fn base_power(ctx: &DamageContext<'_>) -> Result<u32, CalcError> {
    let listed = ctx.move_data.base_power as u32;
    if !ctx.move_data.base_power_callback {
        return Ok(listed);
    }

    let power = match ctx.move_id().as_str() {
        "lowkick" | "grassknot" => low_kick(ctx.defender.weight_kg()),
        "heavyslam" | "heatcrash" => heavy_slam(ctx.attacker.weight_kg(), ctx.defender.weight_kg()),
        "electroball" => {
            let attacker_speed = effective_stat(ctx.attacker, BattleStat::Spe, ctx.field);
            let target_speed = effective_stat(ctx.defender, BattleStat::Spe, ctx.field);
            electro_ball(attacker_speed, target_speed)
        }
        _ => return Err(CalcError::UnhandledBasePowerCallback(ctx.move_data.name.clone())),
    };
    log::debug!("{} power callback -> {}", ctx.move_data.name, power);
    Ok(power)
}

/// Low Kick / Grass Knot: power from the target's weight in kg.
pub fn low_kick(target_weight: f64) -> u32 {
    match target_weight {
        w if w >= 200.0 => 120,
        w if w >= 100.0 => 100,
        w if w >= 50.0 => 80,
        w if w >= 25.0 => 60,
        w if w >= 10.0 => 40,
        _ => 20,
    }
}

/// Shared ladder for ratio-based moves: a smaller ratio hits harder.
fn ratio_power(ratio: f64) -> u32 {
    match ratio {
        r if r > 0.5 => 40,
        r if r > 0.3335 => 60,
        r if r > 0.2501 => 80,
        r if r > 0.2001 => 100,
        _ => 120,
    }
}

/// Electro Ball: power from target speed over user speed.
pub fn electro_ball(attacker_speed: u32, target_speed: u32) -> u32 {
    ratio_power(target_speed as f64 / attacker_speed.max(1) as f64)
}

/// Heavy Slam / Heat Crash: power from target weight over user weight.
pub fn heavy_slam(user_weight: f64, target_weight: f64) -> u32 {
    if user_weight <= 0.0 {
        return 40;
    }
    ratio_power(target_weight / user_weight)
}

// ============================================================================
// Named-move chain entries
// ============================================================================

/// Power chain entries keyed on the move's name.
pub fn move_power_entries(ctx: &DamageContext<'_>) -> Option<ChainMultiplier> {
    let defender = ctx.defender;
    match ctx.move_id().as_str() {
        "brine" if defender.current_hp <= defender.max_hp() / 2 => Some(power::DOUBLE_MOVE),
        "facade" if ctx.attacker.status.is_some() => Some(power::DOUBLE_MOVE),
        "venoshock" if defender.is_poisoned() => Some(power::DOUBLE_MOVE),
        "solarbeam" | "solarblade"
            if !matches!(
                ctx.field.weather,
                Weather::None | Weather::Sun | Weather::HarshSun | Weather::StrongWinds
            ) =>
        {
            Some(power::SOLAR_BAD_WEATHER)
        }
        _ => None,
    }
}

/// Terrain entries: defence for a grounded target, offence for a grounded user.
pub fn terrain_power_entries(ctx: &DamageContext<'_>) -> impl Iterator<Item = ChainMultiplier> {
    let terrain = ctx.field.terrain;

    let defence = ctx.defender.is_grounded(ctx.ignores_ability)
        && match terrain {
            Terrain::Grassy => matches!(ctx.move_id().as_str(), "earthquake" | "bulldoze" | "magnitude"),
            Terrain::Misty => ctx.move_type == Type::Dragon,
            _ => false,
        };

    let offence = ctx.attacker.is_grounded(false) && terrain.boosted_type() == Some(ctx.move_type);

    defence
        .then_some(power::TERRAIN_DEFENCE)
        .into_iter()
        .chain(offence.then_some(power::TERRAIN_OFFENCE))
}
