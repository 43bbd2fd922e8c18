//! Move type resolution, type effectiveness and ability immunities.

use crate::abilities::Weather;
use crate::entities::Pokemon;
use crate::moves::Move;
use crate::state::FieldState;
use crate::types::{type_matchup, Effectiveness, Type, TypeEffectiveness};

use super::context::DamageContext;

/// Effective type of `move_data` when used by `attacker`.
pub fn resolve_move_type(attacker: &Pokemon, move_data: &Move) -> Type {
    attacker
        .ability
        .hooks()
        .and_then(|hooks| hooks.on_modify_type)
        .map_or(move_data.move_type, |modify| modify(move_data, move_data.move_type))
}

/// Combined effectiveness of a move of `move_type` against `defender`.
pub fn calculate_effectiveness(
    field: &FieldState,
    move_data: &Move,
    move_type: Type,
    defender: &Pokemon,
) -> Effectiveness {
    let move_id = move_data.id();
    if move_id == "thousandarrows" && defender.has_type(Type::Flying) {
        return Effectiveness::NEUTRAL;
    }

    let mut effectiveness = Effectiveness::NEUTRAL;
    for &defending in defender.types() {
        let single = type_matchup(move_type, defending);
        if defending == Type::Flying
            && field.weather == Weather::StrongWinds
            && single == TypeEffectiveness::SuperEffective
        {
            continue;
        }
        if defending == Type::Ghost && matches!(move_type, Type::Fighting | Type::Normal) {
            continue;
        }
        if defending == Type::Water && move_id == "freezedry" {
            effectiveness = effectiveness.stack(TypeEffectiveness::SuperEffective);
            continue;
        }
        effectiveness = effectiveness.stack(single);
    }

    if move_id == "flyingpress" {
        for &defending in defender.types() {
            effectiveness = effectiveness.stack(type_matchup(Type::Flying, defending));
        }
    }

    effectiveness
}

/// Whether a defender ability blocks the move outright.
pub fn is_immune(ctx: &DamageContext<'_>, effectiveness: Effectiveness) -> bool {
    ctx.defender_hooks()
        .and_then(|hooks| hooks.on_immunity)
        .is_some_and(|blocks| blocks(ctx, effectiveness))
}
