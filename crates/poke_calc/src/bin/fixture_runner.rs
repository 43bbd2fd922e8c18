//! Reads one JSON scenario per line on stdin and prints its damage rolls.
//!
//! ```text
//! {"attacker": {"species": {..}, "ability": "Drought"}, "defender": {..},
//!  "move": {..}, "field": {"format": {"doubles": true}, "terrain": "Electric"}}
//! ```
//!
//! Species and move records use the provider's JSON shape. Entry abilities
//! are resolved first; explicit field weather/terrain then override them.

use std::io::{self, BufRead};
use std::process::ExitCode;

use poke_calc::{
    calculate_damage, resolve_field_entry, CalcError, DamageRolls, Format, Move, Pokemon, PokemonConfig, Species,
    Terrain, Weather,
};
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
struct Combatant {
    species: Species,
    #[serde(flatten)]
    config: PokemonConfig,
}

impl Combatant {
    fn into_pokemon(self) -> Pokemon {
        Pokemon::new(self.species, self.config)
    }
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct FieldData {
    format: Format,
    weather: Option<Weather>,
    terrain: Option<Terrain>,
}

#[derive(Deserialize)]
struct Scenario {
    attacker: Combatant,
    defender: Combatant,
    #[serde(rename = "move")]
    move_data: Move,
    #[serde(default)]
    field: FieldData,
}

#[derive(Serialize)]
struct Output<'a> {
    rolls: &'a [u16],
    min: u16,
    max: u16,
}

fn run(scenario: Scenario) -> Result<DamageRolls, CalcError> {
    let attacker = scenario.attacker.into_pokemon();
    let defender = scenario.defender.into_pokemon();

    let mut field = resolve_field_entry(scenario.field.format, vec![attacker, defender]);
    if let Some(weather) = scenario.field.weather {
        field.weather = weather;
    }
    if let Some(terrain) = scenario.field.terrain {
        field.terrain = terrain;
    }

    let (attacker, defender) = (&field.roster[0], &field.roster[1]);
    calculate_damage(&field, attacker, defender, &scenario.move_data)
}

fn main() -> ExitCode {
    let mut failed = false;

    for line in io::stdin().lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                eprintln!("Error reading stdin: {}", e);
                return ExitCode::FAILURE;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        let scenario: Scenario = match serde_json::from_str(&line) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("Error parsing scenario: {}", e);
                failed = true;
                continue;
            }
        };

        let rolls = match run(scenario) {
            Ok(rolls) => rolls,
            Err(e) => {
                eprintln!("Error calculating damage: {}", e);
                failed = true;
                continue;
            }
        };

        let output = Output {
            rolls: rolls.as_slice(),
            min: rolls.min(),
            max: rolls.max(),
        };
        match serde_json::to_string(&output) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error writing output: {}", e);
                failed = true;
            }
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
