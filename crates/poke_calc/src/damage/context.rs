//! Damage calculation context.
//!
//! The `DamageContext` holds everything one calculation decides up front:
//! who is attacking whom, the resolved move type and category, and the flags
//! (ability suppression, contact, crit) every later stage reads.

use crate::abilities::AbilityHooks;
use crate::entities::Pokemon;
use crate::error::CalcError;
use crate::ids::to_id;
use crate::moves::{Move, MoveCategory, MoveFlags, OffensivePokemon};
use crate::natures::BattleStat;
use crate::state::FieldState;
use crate::types::Type;

use super::effectiveness::resolve_move_type;

/// Moves that always land a critical hit without a provider marker.
const ALWAYS_CRIT: [&str; 2] = ["stormthrow", "frostbreath"];

pub struct DamageContext<'a> {
    pub field: &'a FieldState,
    pub attacker: &'a Pokemon,
    pub defender: &'a Pokemon,
    pub move_data: &'a Move,

    // ========================================================================
    // Move Information
    // ========================================================================
    /// Type after ability type changers
    pub move_type: Type,
    pub category: MoveCategory,
    /// Stat read for the offence (after per-move overrides)
    pub offense_stat: BattleStat,
    /// Stat read for the defence (after per-move overrides)
    pub defense_stat: BattleStat,
    /// Whose offensive stat is read (the target for Foul Play)
    pub stat_source: &'a Pokemon,

    // ========================================================================
    // Calculation Flags
    // ========================================================================
    /// Defender abilities are suppressed (Mold Breaker or the move itself)
    pub ignores_ability: bool,
    pub makes_contact: bool,
    pub is_crit: bool,
}

impl<'a> DamageContext<'a> {
    pub fn new(
        field: &'a FieldState,
        attacker: &'a Pokemon,
        defender: &'a Pokemon,
        move_data: &'a Move,
    ) -> Result<Self, CalcError> {
        let offense_stat = offensive_stat(move_data)?;
        let defense_stat = defensive_stat(move_data)?;

        let attacker_hooks = attacker.ability.hooks();
        let has = |flag: fn(&AbilityHooks) -> bool| attacker_hooks.is_some_and(flag);

        let ignores_ability = move_data.ignore_ability || has(|h| h.ignores_foe_ability);
        let makes_contact = move_data.flags.contains(MoveFlags::CONTACT) && !has(|h| h.prevents_contact);

        let blocks_crits = defender.ability.hooks().is_some_and(|h| h.blocks_crits);
        let is_crit = !blocks_crits
            && (move_data.will_crit
                || ALWAYS_CRIT.contains(&move_data.id().as_str())
                || (has(|h| h.crits_poisoned) && defender.is_poisoned()));

        let stat_source = match move_data.override_offensive_pokemon {
            OffensivePokemon::Source => attacker,
            OffensivePokemon::Target => defender,
        };

        Ok(Self {
            field,
            attacker,
            defender,
            move_data,
            move_type: resolve_move_type(attacker, move_data),
            category: move_data.category,
            offense_stat,
            defense_stat,
            stat_source,
            ignores_ability,
            makes_contact,
            is_crit,
        })
    }

    /// Attacker's registered hooks.
    pub fn attacker_hooks(&self) -> Option<&'static AbilityHooks> {
        self.attacker.ability.hooks()
    }

    /// Defender's hooks, unless the attacker suppresses them.
    pub fn defender_hooks(&self) -> Option<&'static AbilityHooks> {
        if self.ignores_ability {
            None
        } else {
            self.defender.ability.hooks()
        }
    }

    /// Normalized move name, for the handful of moves special-cased by name.
    pub fn move_id(&self) -> String {
        to_id(&self.move_data.name)
    }

    pub fn has_stab(&self) -> bool {
        self.attacker.has_type(self.move_type)
    }
}

/// Offensive stat for a damaging move: Attack for Physical, Special Attack
/// for Special, unless the move overrides it.
pub fn offensive_stat(move_data: &Move) -> Result<BattleStat, CalcError> {
    let natural = match move_data.category {
        MoveCategory::Physical => BattleStat::Atk,
        MoveCategory::Special => BattleStat::SpA,
        MoveCategory::Status => return Err(status_move(move_data)),
    };
    Ok(move_data.override_offensive_stat.unwrap_or(natural))
}

/// Defensive stat for a damaging move: Defense for Physical, Special Defense
/// for Special, unless the move overrides it (Psyshock).
pub fn defensive_stat(move_data: &Move) -> Result<BattleStat, CalcError> {
    let natural = match move_data.category {
        MoveCategory::Physical => BattleStat::Def,
        MoveCategory::Special => BattleStat::SpD,
        MoveCategory::Status => return Err(status_move(move_data)),
    };
    Ok(move_data.override_defensive_stat.unwrap_or(natural))
}

fn status_move(move_data: &Move) -> CalcError {
    CalcError::StatusMoveHasNoStat {
        move_name: move_data.name.clone(),
    }
}
