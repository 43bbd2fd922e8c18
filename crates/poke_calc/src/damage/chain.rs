//! Modifier chains.
//!
//! A stage collects [`ChainMultiplier`]s, then resolves them against a base
//! value in two roundings: each entry folds into a 4096 accumulator
//! (ties to even), and the base value is scaled once by the accumulator
//! with pokeRound.

use super::formula::{pokeround, round_ties_even};
use super::modifier::ChainMultiplier;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Chain {
    entries: Vec<ChainMultiplier>,
}

impl Chain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: ChainMultiplier) {
        self.entries.push(entry);
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    /// Combined 4096-scale multiplier of every entry.
    pub fn accumulator(&self) -> u32 {
        accumulate(self.entries.iter().copied())
    }

    /// Scale `base` by the whole chain.
    pub fn resolve(&self, base: u32) -> u32 {
        scale(base, self.accumulator())
    }

    /// Scale `base` by the entries ordered strictly before `order`.
    pub fn resolve_before(&self, base: u32, order: u8) -> u32 {
        scale(
            base,
            accumulate(self.entries.iter().copied().filter(|e| e.order < order)),
        )
    }
}

impl Extend<ChainMultiplier> for Chain {
    fn extend<I: IntoIterator<Item = ChainMultiplier>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}

impl FromIterator<ChainMultiplier> for Chain {
    fn from_iter<I: IntoIterator<Item = ChainMultiplier>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

fn accumulate(entries: impl Iterator<Item = ChainMultiplier>) -> u32 {
    let mut sorted: Vec<ChainMultiplier> = entries.collect();
    // stable: equal keys keep declaration order
    sorted.sort_by_key(|e| e.order);

    let mut acc: u64 = 4096;
    for entry in sorted {
        acc = round_ties_even(acc * entry.numerator() as u64, 4096);
        log::trace!(
            "chain entry {}/4096 (order {}) -> accumulator {}",
            entry.numerator(),
            entry.order,
            acc
        );
    }
    acc as u32
}

fn scale(base: u32, accumulator: u32) -> u32 {
    pokeround(base as u64 * accumulator as u64, 4096) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::damage::modifier::{attack, power};

    fn resolve_chain(base: u32, entries: &[ChainMultiplier]) -> u32 {
        entries.iter().copied().collect::<Chain>().resolve(base)
    }

    #[test]
    fn test_empty_chain_is_identity() {
        let chain = Chain::new();
        assert_eq!(chain.accumulator(), 4096);
        assert_eq!(chain.resolve(123), 123);
    }

    #[test]
    fn test_two_entry_accumulator() {
        // 4096 -> 5325 -> round(5325 * 6144 / 4096) = round(7987.5) = 7988
        let chain: Chain = [power::ONE_THREE_ABILITY, power::ONE_FIVE_ABILITY]
            .into_iter()
            .collect();
        assert_eq!(chain.accumulator(), 7988);
        assert_eq!(chain.resolve(80), 156);
    }

    #[test]
    fn test_tie_goes_to_even() {
        // 6144 * 6144 / 4096 = 9216 exactly; 9216 * 5325 / 4096 = 11980.8
        let chain: Chain = [
            attack::FIFTY_OFFENCE,
            attack::FIFTY_OFFENCE,
            ChainMultiplier::new(5325, 9),
        ]
        .into_iter()
        .collect();
        assert_eq!(chain.accumulator(), 11981);

        // 3 * 6144 / 4096 = 4.5 -> 4 (even); 5 * 6144 / 4096 = 7.5 -> 8 (even)
        let mut chain = Chain::new();
        chain.push(ChainMultiplier::new(3, 0));
        chain.push(ChainMultiplier::new(6144, 1));
        assert_eq!(chain.accumulator(), 4);
        assert_eq!(
            accumulate([ChainMultiplier::new(5, 0), ChainMultiplier::new(6144, 1)].into_iter()),
            8
        );
    }

    #[test]
    fn test_order_not_insertion() {
        let forward: Chain = [power::ONE_TWO_ABILITY, power::DRY_SKIN].into_iter().collect();
        let reverse: Chain = [power::DRY_SKIN, power::ONE_TWO_ABILITY].into_iter().collect();
        assert_eq!(forward.accumulator(), reverse.accumulator());
    }

    #[test]
    fn test_intermediate_rounding_differs_from_product() {
        // 4096 -> 5325 -> 2662 (tie, even) -> 3993
        let chain: Chain = [power::TERRAIN_OFFENCE, power::HEATPROOF, power::ONE_THREE_ABILITY]
            .into_iter()
            .collect();
        assert_eq!(chain.accumulator(), 3993);
        assert_eq!(chain.resolve(100), 97);

        // one exact product rounds to 98
        let exact = 100u64 * 5325 * 2048 * 6144;
        assert_eq!(pokeround(exact, 4096 * 4096 * 4096), 98);
    }

    #[test]
    fn test_resolve_before() {
        let chain: Chain = [power::ONE_TWO_ABILITY, power::ONE_FIVE_ABILITY, power::TERRAIN_OFFENCE]
            .into_iter()
            .collect();
        // only the 1.2x entry sits below order 7
        assert_eq!(chain.resolve_before(50, power::ONE_FIVE_ABILITY.order), 60);
        assert_eq!(chain.resolve_before(50, 0), 50);
    }

    #[test]
    fn test_final_rounding_is_half_down() {
        // 2048 * 3 / 4096 = 1.5 -> 1
        assert_eq!(resolve_chain(3, &[ChainMultiplier::new(2048, 1)]), 1);
        // 6144 * 5 / 4096 = 7.5 -> 7
        assert_eq!(resolve_chain(5, &[ChainMultiplier::new(6144, 1)]), 7);
    }
}
