//! Shared test utilities: logging and the fixture dex.
//!
//! The dex in `tests/fixtures/dex.json` uses the data provider's JSON shape
//! and is keyed by normalized id.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use poke_calc::{to_id, Move, Pokemon, PokemonConfig, Species};
use serde::Deserialize;

pub const DEX_JSON: &str = include_str!("../fixtures/dex.json");

/// Install `env_logger` once per test binary. Safe to call from every test.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[derive(Deserialize)]
pub struct Dex {
    species: HashMap<String, Species>,
    moves: HashMap<String, Move>,
}

impl Dex {
    pub fn parse(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn species(&self, name: &str) -> Result<Arc<Species>, String> {
        self.species
            .get(&to_id(name))
            .map(|species| Arc::new(species.clone()))
            .ok_or_else(|| format!("Unknown species: {}", name))
    }

    pub fn move_named(&self, name: &str) -> Result<&Move, String> {
        self.moves
            .get(&to_id(name))
            .ok_or_else(|| format!("Unknown move: {}", name))
    }

    pub fn pokemon(&self, name: &str, config: PokemonConfig) -> Result<Pokemon, String> {
        Ok(Pokemon::new(self.species(name)?, config))
    }
}

/// The fixture dex, parsed once.
pub fn dex() -> &'static Dex {
    static DEX: OnceLock<Dex> = OnceLock::new();
    DEX.get_or_init(|| Dex::parse(DEX_JSON).expect("tests/fixtures/dex.json should parse"))
}

/// Species from the fixture dex with the given build.
pub fn mon(name: &str, config: PokemonConfig) -> Pokemon {
    dex().pokemon(name, config).unwrap()
}

/// Species from the fixture dex with the default build.
pub fn plain(name: &str) -> Pokemon {
    mon(name, PokemonConfig::default())
}

pub fn move_named(name: &str) -> &'static Move {
    dex().move_named(name).unwrap()
}
