//! Core damage formula and math utilities.
//!
//! This module contains the fundamental damage calculation math,
//! including the game's specific rounding and overflow behaviors.

/// 16-bit overflow wrapping (simulates hardware behavior).
/// Values that exceed 65535 wrap around.
#[inline]
pub const fn of16(value: u32) -> u16 {
    (value & 0xFFFF) as u16
}

/// The game's rounding function ("pokeRound").
///
/// The fractional part > 0.5 rounds up, otherwise rounds down,
/// so an exact .5 goes DOWN.
#[inline]
pub const fn pokeround(value: u64, divisor: u64) -> u64 {
    let quotient = value / divisor;
    let remainder = value % divisor;
    if remainder * 2 > divisor {
        quotient + 1
    } else {
        quotient
    }
}

/// Round-half-to-even division, used when folding chain entries into the accumulator.
#[inline]
pub const fn round_ties_even(value: u64, divisor: u64) -> u64 {
    let quotient = value / divisor;
    let remainder = value % divisor;
    if remainder * 2 > divisor || (remainder * 2 == divisor && quotient % 2 == 1) {
        quotient + 1
    } else {
        quotient
    }
}

/// Apply a 4096-scale modifier with pokeRound.
///
/// This performs: `pokeround(value * modifier / 4096)`
#[inline]
pub fn apply_modifier(value: u32, modifier: u16) -> u32 {
    if modifier == 4096 {
        return value;
    }
    pokeround(value as u64 * modifier as u64, 4096) as u32
}

/// Apply a modifier and floor the result (no rounding).
#[inline]
pub fn apply_modifier_floor(value: u32, modifier_num: u32, modifier_den: u32) -> u32 {
    (value as u64 * modifier_num as u64 / modifier_den as u64) as u32
}

/// Calculate base damage before modifiers.
///
/// Formula: `floor(floor(floor(2 * Level / 5 + 2) * BasePower * Attack / Defense) / 50) + 2`
///
/// Each intermediate step is truncated to match cartridge behavior.
///
/// # Arguments
/// * `level` - Attacker's level (1-100)
/// * `base_power` - Move's base power after BP modifiers
/// * `attack` - Effective attack stat (after boosts)
/// * `defense` - Effective defense stat (after boosts)
pub fn get_base_damage(level: u32, base_power: u32, attack: u32, defense: u32) -> u32 {
    if defense == 0 {
        return 0;
    }

    let level_factor = 2 * level / 5 + 2;
    let numerator = level_factor as u64 * base_power as u64 * attack as u64;
    (numerator / defense as u64 / 50 + 2) as u32
}

/// The sixteen random factors, 85% to 100% inclusive.
pub const ROLL_PERCENTS: [u32; 16] = [85, 86, 87, 88, 89, 90, 91, 92, 93, 94, 95, 96, 97, 98, 99, 100];

/// Apply one random roll: `floor(damage * roll / 100)`.
#[inline]
pub fn apply_random_roll(damage: u32, roll: u32) -> u32 {
    damage * roll / 100
}

/// Boost stage as a (numerator, denominator) fraction.
///
/// `max(2, 2 + stage) / max(2, 2 - stage)`, with the stage clamped to [-6, 6].
#[inline]
pub const fn boost_fraction(stage: i8) -> (u32, u32) {
    let stage = if stage > 6 {
        6
    } else if stage < -6 {
        -6
    } else {
        stage
    };
    if stage >= 0 {
        (2 + stage as u32, 2)
    } else {
        (2, 2 + (-stage) as u32)
    }
}

/// Apply a stat boost stage with floor.
#[inline]
pub fn apply_boost(stat: u32, stage: i8) -> u32 {
    let (num, den) = boost_fraction(stage);
    stat * num / den
}
