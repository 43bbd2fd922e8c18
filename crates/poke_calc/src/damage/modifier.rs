//! Fixed-point modifiers and the named chain tables.

/// A fixed-point damage modifier (4096 scale).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Modifier(pub u16);

impl Modifier {
    /// 1.0x modifier (4096).
    pub const ONE: Self = Self(4096);

    /// 0.25x modifier (1024). Parental Bond's second hit.
    pub const QUARTER: Self = Self(1024);

    /// 0.5x modifier (2048).
    pub const HALF: Self = Self(2048);

    /// 0.75x modifier (3072). Spread moves in doubles.
    pub const THREE_QUARTERS: Self = Self(3072);

    /// 2.0x modifier (8192).
    pub const DOUBLE: Self = Self(8192);

    /// 1.5x modifier (6144).
    pub const ONE_POINT_FIVE: Self = Self(6144);

    /// 1.2x modifier (4915).
    pub const ONE_POINT_TWO: Self = Self(4915);

    /// 1.3x modifier (5325).
    pub const ONE_POINT_THREE: Self = Self(5325);

    /// 4/3x modifier (5461). Hadron Engine and Orichalcum Pulse.
    pub const FOUR_THIRDS: Self = Self(5461);

    pub const fn new(val: u16) -> Self {
        Self(val)
    }

    pub const fn val(self) -> u16 {
        self.0
    }
}

impl Default for Modifier {
    fn default() -> Self {
        Self::ONE
    }
}

/// Macro to create a Modifier from a float literal at compile time.
///
/// Rounds to the nearest integer: `round(val * 4096)`.
///
/// # Example
/// ```rust
/// use poke_calc::modifier;
/// const MOD: poke_calc::damage::Modifier = modifier!(1.5); // Modifier(6144)
/// ```
#[macro_export]
macro_rules! modifier {
    ($val:expr) => {
        $crate::damage::Modifier::new(($val * 4096.0 + 0.5) as u16)
    };
}

/// One entry of a modifier chain.
///
/// Entries are applied in ascending `order`; equal keys keep insertion order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ChainMultiplier {
    pub modifier: Modifier,
    pub order: u8,
}

impl ChainMultiplier {
    pub const fn new(numerator: u16, order: u8) -> Self {
        Self {
            modifier: Modifier::new(numerator),
            order,
        }
    }

    pub const fn numerator(self) -> u16 {
        self.modifier.0
    }
}

/// Base power chain.
pub mod power {
    use super::ChainMultiplier;

    pub const AURA_BREAK: ChainMultiplier = ChainMultiplier::new(3072, 1);
    pub const RIVALRY: ChainMultiplier = ChainMultiplier::new(3072, 2);
    pub const ONE_TWO_ABILITY: ChainMultiplier = ChainMultiplier::new(4915, 3);
    pub const BATTERY: ChainMultiplier = ChainMultiplier::new(5325, 4);
    pub const ONE_THREE_ABILITY: ChainMultiplier = ChainMultiplier::new(5325, 5);
    pub const AURA: ChainMultiplier = ChainMultiplier::new(5448, 6);
    pub const ONE_FIVE_ABILITY: ChainMultiplier = ChainMultiplier::new(6144, 7);
    pub const HEATPROOF: ChainMultiplier = ChainMultiplier::new(2048, 8);
    pub const DRY_SKIN: ChainMultiplier = ChainMultiplier::new(5120, 9);
    pub const ONE_ONE_ITEM: ChainMultiplier = ChainMultiplier::new(4505, 10);
    pub const ONE_TWO_ITEM: ChainMultiplier = ChainMultiplier::new(4915, 11);
    pub const NORMAL_GEM: ChainMultiplier = ChainMultiplier::new(5325, 12);
    pub const SOLAR_BAD_WEATHER: ChainMultiplier = ChainMultiplier::new(2048, 13);
    pub const ME_FIRST: ChainMultiplier = ChainMultiplier::new(6144, 14);
    pub const KNOCK_OFF: ChainMultiplier = ChainMultiplier::new(6144, 15);
    pub const HELPING_HAND: ChainMultiplier = ChainMultiplier::new(6144, 16);
    pub const CHARGE: ChainMultiplier = ChainMultiplier::new(8192, 17);
    pub const DOUBLE_MOVE: ChainMultiplier = ChainMultiplier::new(8192, 18);
    pub const TERRAIN_DEFENCE: ChainMultiplier = ChainMultiplier::new(2048, 19);
    pub const TERRAIN_OFFENCE: ChainMultiplier = ChainMultiplier::new(6144, 20);
    pub const SPORT: ChainMultiplier = ChainMultiplier::new(1352, 21);
}

/// Offensive stat chain.
pub mod attack {
    use super::ChainMultiplier;

    pub const HALF_OFFENCE: ChainMultiplier = ChainMultiplier::new(2048, 1);
    pub const FLOWER_GIFT: ChainMultiplier = ChainMultiplier::new(6144, 2);
    pub const FIFTY_OFFENCE: ChainMultiplier = ChainMultiplier::new(6144, 3);
    pub const DOUBLE_OFFENCE: ChainMultiplier = ChainMultiplier::new(8192, 4);
    pub const HALF_DEFENCE: ChainMultiplier = ChainMultiplier::new(2048, 5);
    pub const CHOICE_ITEMS: ChainMultiplier = ChainMultiplier::new(6144, 6);
    pub const UNIQUE_ITEM_DOUBLERS: ChainMultiplier = ChainMultiplier::new(8192, 7);
}

/// Defensive stat chain.
pub mod defense {
    use super::ChainMultiplier;

    pub const FLOWER_GIFT: ChainMultiplier = ChainMultiplier::new(6144, 1);
    pub const ONE_FIVE_ABILITIES: ChainMultiplier = ChainMultiplier::new(6144, 2);
    pub const FUR_COAT: ChainMultiplier = ChainMultiplier::new(8192, 3);
    pub const ITEM: ChainMultiplier = ChainMultiplier::new(6144, 4);
    pub const DOUBLE_ITEM: ChainMultiplier = ChainMultiplier::new(8192, 4);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modifier_macro() {
        assert_eq!(modifier!(1.5), Modifier::ONE_POINT_FIVE);
        assert_eq!(modifier!(1.2), Modifier::ONE_POINT_TWO);
        assert_eq!(modifier!(1.3), Modifier::ONE_POINT_THREE);
        assert_eq!(modifier!(0.75), Modifier::THREE_QUARTERS);
    }

    #[test]
    fn test_power_table_is_ordered() {
        let table = [
            power::AURA_BREAK,
            power::RIVALRY,
            power::ONE_TWO_ABILITY,
            power::BATTERY,
            power::ONE_THREE_ABILITY,
            power::AURA,
            power::ONE_FIVE_ABILITY,
            power::HEATPROOF,
            power::DRY_SKIN,
            power::ONE_ONE_ITEM,
            power::ONE_TWO_ITEM,
            power::NORMAL_GEM,
            power::SOLAR_BAD_WEATHER,
            power::ME_FIRST,
            power::KNOCK_OFF,
            power::HELPING_HAND,
            power::CHARGE,
            power::DOUBLE_MOVE,
            power::TERRAIN_DEFENCE,
            power::TERRAIN_OFFENCE,
            power::SPORT,
        ];
        for (i, entry) in table.iter().enumerate() {
            assert_eq!(entry.order as usize, i + 1);
        }
    }
}
