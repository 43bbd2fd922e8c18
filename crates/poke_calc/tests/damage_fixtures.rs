//! Data-driven damage calculation tests.
//!
//! Uses `libtest-mimic` to generate one test per case in
//! `tests/fixtures/damage.json`, allowing filtering with
//! `cargo test --test damage_fixtures low-kick` etc.

mod common;

use common::{dex, init_logging};
use libtest_mimic::{Arguments, Failed, Trial};
use poke_calc::{calculate_damage, resolve_field_entry, Format, PokemonConfig, Terrain, Weather};
use serde::Deserialize;

const DAMAGE_JSON: &str = include_str!("fixtures/damage.json");

// ============================================================================
// Fixture Data Structures
// ============================================================================

#[derive(Deserialize)]
struct DamageFixture {
    cases: Vec<DamageTestCase>,
}

#[derive(Deserialize, Debug, Clone)]
struct DamageTestCase {
    id: String,
    attacker: PokemonData,
    defender: PokemonData,
    #[serde(rename = "move")]
    move_name: String,
    #[serde(default)]
    field: FieldData,
    expected: Vec<u16>,
}

#[derive(Deserialize, Debug, Clone)]
struct PokemonData {
    name: String,
    #[serde(flatten)]
    config: PokemonConfig,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default)]
struct FieldData {
    format: Format,
    weather: Option<Weather>,
    terrain: Option<Terrain>,
}

// ============================================================================
// Test Runner
// ============================================================================

fn run_damage_test(case: &DamageTestCase) -> Result<(), String> {
    init_logging();
    let dex = dex();

    let attacker = dex
        .pokemon(&case.attacker.name, case.attacker.config.clone())
        .map_err(|e| format!("Attacker: {}", e))?;
    let defender = dex
        .pokemon(&case.defender.name, case.defender.config.clone())
        .map_err(|e| format!("Defender: {}", e))?;
    let move_data = dex.move_named(&case.move_name)?;

    let mut field = resolve_field_entry(case.field.format, vec![attacker, defender]);
    if let Some(weather) = case.field.weather {
        field.weather = weather;
    }
    if let Some(terrain) = case.field.terrain {
        field.terrain = terrain;
    }

    let rolls = calculate_damage(&field, &field.roster[0], &field.roster[1], move_data)
        .map_err(|e| format!("Calculation failed: {}", e))?;

    let actual = rolls.as_slice();
    if actual.len() != case.expected.len() {
        return Err(format!(
            "Expected {} rolls, got {}\n  Expected: {:?}\n  Actual:   {:?}",
            case.expected.len(),
            actual.len(),
            case.expected,
            actual
        ));
    }
    for (i, (&got, &want)) in actual.iter().zip(&case.expected).enumerate() {
        if got != want {
            return Err(format!(
                "Roll {} mismatch: expected {}, got {}\n  Expected: {:?}\n  Actual:   {:?}",
                i, want, got, case.expected, actual
            ));
        }
    }
    Ok(())
}

fn main() {
    let args = Arguments::from_args();

    let fixture: DamageFixture = match serde_json::from_str(DAMAGE_JSON) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Failed to parse tests/fixtures/damage.json: {}", e);
            std::process::exit(1);
        }
    };

    let tests: Vec<Trial> = fixture
        .cases
        .into_iter()
        .map(|case| {
            let name = case.id.clone();
            Trial::test(name, move || run_damage_test(&case).map_err(Failed::from))
        })
        .collect();

    libtest_mimic::run(&args, tests).exit();
}
