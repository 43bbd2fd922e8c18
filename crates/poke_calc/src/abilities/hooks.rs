use crate::damage::context::DamageContext;
use crate::damage::{ChainMultiplier, Modifier};
use crate::entities::Pokemon;
use crate::moves::Move;
use crate::natures::BattleStat;
use crate::state::FieldState;
use crate::types::{Effectiveness, Type};

use super::weather::{Terrain, Weather};

/// Effect applied when the holder enters the field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryEffect {
    SetTerrain(Terrain),
    SetWeather(Weather),
    BoostSelf(BattleStat, i8),
}

impl EntryEffect {
    /// Terrain first, then weather, then self-boosts.
    pub const fn priority(self) -> u8 {
        match self {
            EntryEffect::SetTerrain(_) => 0,
            EntryEffect::SetWeather(_) => 1,
            EntryEffect::BoostSelf(..) => 2,
        }
    }
}

/// Called while resolving the move's type
pub type OnModifyType = fn(move_data: &Move, current_type: Type) -> Type;

/// Flat multiplier on an unboosted stat (Speed abilities)
pub type OnModifyStat = fn(pokemon: &Pokemon, stat: BattleStat, field: &FieldState) -> Modifier;

/// Flat pokeRounded multiplier on the offensive stat, ahead of the chain
pub type OnFlatAttack = fn(ctx: &DamageContext<'_>) -> Option<Modifier>;

/// Contributes one entry to a modifier chain
pub type OnChain = fn(ctx: &DamageContext<'_>) -> Option<ChainMultiplier>;

/// Base power entry that looks at the power resolved so far
pub type OnPartialBasePower = fn(ctx: &DamageContext<'_>, power_so_far: u32) -> Option<ChainMultiplier>;

/// Full immunity check, given the type effectiveness already computed
pub type OnImmunity = fn(ctx: &DamageContext<'_>, effectiveness: Effectiveness) -> bool;

#[derive(Clone, Copy)]
pub struct AbilityHooks {
    pub on_switch_in: &'static [EntryEffect],
    pub on_modify_type: Option<OnModifyType>,
    pub on_modify_stat: Option<OnModifyStat>,
    pub on_flat_attack: Option<OnFlatAttack>,
    /// Holder is attacking
    pub on_base_power: Option<OnChain>,
    /// Evaluated against entries ordered below the partial hook's own key
    pub on_partial_base_power: Option<OnPartialBasePower>,
    /// Holder is being attacked
    pub on_foe_base_power: Option<OnChain>,
    pub on_attack: Option<OnChain>,
    pub on_foe_attack: Option<OnChain>,
    pub on_defense: Option<OnChain>,
    pub on_immunity: Option<OnImmunity>,
    /// Mold Breaker and friends
    pub ignores_foe_ability: bool,
    /// Battle Armor / Shell Armor
    pub blocks_crits: bool,
    /// Long Reach
    pub prevents_contact: bool,
    /// Merciless
    pub crits_poisoned: bool,
    /// Adaptability
    pub boosts_stab: bool,
    /// Parental Bond
    pub strikes_twice: bool,
    /// Dark Aura / Fairy Aura
    pub aura_type: Option<Type>,
    /// Aura Break
    pub breaks_auras: bool,
    /// Guts ignores the burn penalty
    pub ignores_burn: bool,
}

impl AbilityHooks {
    /// Empty hooks (default)
    pub const NONE: Self = Self {
        on_switch_in: &[],
        on_modify_type: None,
        on_modify_stat: None,
        on_flat_attack: None,
        on_base_power: None,
        on_partial_base_power: None,
        on_foe_base_power: None,
        on_attack: None,
        on_foe_attack: None,
        on_defense: None,
        on_immunity: None,
        ignores_foe_ability: false,
        blocks_crits: false,
        prevents_contact: false,
        crits_poisoned: false,
        boosts_stab: false,
        strikes_twice: false,
        aura_type: None,
        breaks_auras: false,
        ignores_burn: false,
    };
}

impl Default for AbilityHooks {
    fn default() -> Self {
        Self::NONE
    }
}
