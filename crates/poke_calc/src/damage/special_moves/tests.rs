use super::power::{base_power, electro_ball, heavy_slam, low_kick};
use crate::abilities::AbilityId;
use crate::damage::calculate_damage;
use crate::damage::context::DamageContext;
use crate::entities::{Pokemon, PokemonConfig};
use crate::error::CalcError;
use crate::moves::{Move, MoveCategory, MoveFlags};
use crate::species::Species;
use crate::state::{FieldState, Status};
use crate::stats::StatTable;
use crate::types::Type;

fn swampert() -> Pokemon {
    Pokemon::new(
        Species::new("Swampert", &[Type::Water, Type::Ground], StatTable::new(100, 110, 90, 85, 90, 60), 81.9),
        PokemonConfig::default(),
    )
}

fn cosmoem() -> Pokemon {
    Pokemon::new(
        Species::new("Cosmoem", &[Type::Psychic], StatTable::new(43, 29, 131, 29, 131, 37), 999.9),
        PokemonConfig::default(),
    )
}

fn tyrogue() -> Pokemon {
    Pokemon::new(
        Species::new("Tyrogue", &[Type::Fighting], StatTable::splat(35), 21.0),
        PokemonConfig::default(),
    )
}

fn electrode() -> Pokemon {
    Pokemon::new(
        Species::new("Electrode", &[Type::Electric], StatTable::new(60, 50, 70, 80, 80, 150), 66.6),
        PokemonConfig::default(),
    )
}

fn callback_move(name: &str, move_type: Type, category: MoveCategory, flags: MoveFlags) -> Move {
    Move {
        base_power_callback: true,
        flags,
        ..Move::new(name, move_type, category, 0)
    }
}

fn low_kick_move() -> Move {
    callback_move("Low Kick", Type::Fighting, MoveCategory::Physical, MoveFlags::CONTACT)
}

#[test]
fn test_low_kick_weight_thresholds() {
    assert_eq!(low_kick(0.1), 20);
    assert_eq!(low_kick(9.9), 20);
    assert_eq!(low_kick(10.0), 40);
    assert_eq!(low_kick(24.9), 40);
    assert_eq!(low_kick(25.0), 60);
    assert_eq!(low_kick(50.0), 80);
    assert_eq!(low_kick(99.9), 80);
    assert_eq!(low_kick(100.0), 100);
    assert_eq!(low_kick(200.0), 120);
    assert_eq!(low_kick(999.9), 120);
}

#[test]
fn test_ratio_ladder_boundaries() {
    // target / user
    assert_eq!(heavy_slam(100.0, 60.0), 40);
    assert_eq!(heavy_slam(100.0, 50.0), 60);
    assert_eq!(heavy_slam(100.0, 33.4), 60);
    assert_eq!(heavy_slam(100.0, 33.3), 80);
    assert_eq!(heavy_slam(100.0, 25.1), 80);
    assert_eq!(heavy_slam(100.0, 25.0), 100);
    assert_eq!(heavy_slam(100.0, 20.1), 100);
    assert_eq!(heavy_slam(100.0, 20.0), 120);
    assert_eq!(heavy_slam(100.0, 1.0), 120);
    assert_eq!(heavy_slam(0.0, 10.0), 40);
}

#[test]
fn test_electro_ball_speed_ratio() {
    assert_eq!(electro_ball(100, 100), 40);
    assert_eq!(electro_ball(200, 100), 60);
    assert_eq!(electro_ball(300, 100), 80);
    assert_eq!(electro_ball(400, 100), 100);
    assert_eq!(electro_ball(500, 100), 120);
    // zero speed is treated as one
    assert_eq!(electro_ball(0, 1), 40);
}

#[test]
fn test_low_kick_rolls() {
    let field = FieldState::default();

    let rolls = calculate_damage(&field, &swampert(), &swampert(), &low_kick_move()).unwrap();
    assert_eq!(
        rolls.as_slice(),
        &[36, 36, 37, 37, 38, 38, 39, 39, 39, 40, 40, 41, 41, 42, 42, 43]
    );

    let rolls = calculate_damage(&field, &cosmoem(), &cosmoem(), &low_kick_move()).unwrap();
    assert_eq!(
        rolls.as_slice(),
        &[8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 9, 9, 9, 9, 9, 9]
    );

    let rolls = calculate_damage(&field, &tyrogue(), &tyrogue(), &low_kick_move()).unwrap();
    assert_eq!(
        rolls.as_slice(),
        &[24, 24, 24, 24, 24, 25, 25, 25, 25, 25, 27, 27, 27, 27, 27, 28]
    );
}

#[test]
fn test_electro_ball_rolls() {
    let field = FieldState::default();
    let electro = callback_move("Electro Ball", Type::Electric, MoveCategory::Special, MoveFlags::BULLET);

    let rolls = calculate_damage(&field, &electrode(), &tyrogue(), &electro).unwrap();
    assert_eq!(
        rolls.as_slice(),
        &[84, 84, 85, 87, 87, 88, 90, 90, 91, 93, 93, 94, 96, 96, 97, 99]
    );

    let rolls = calculate_damage(&field, &cosmoem(), &electrode(), &electro).unwrap();
    assert_eq!(
        rolls.as_slice(),
        &[4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 5]
    );
}

#[test]
fn test_weight_ratio_rolls() {
    let field = FieldState::default();
    let heavy = callback_move("Heavy Slam", Type::Steel, MoveCategory::Physical, MoveFlags::CONTACT);
    let heat_crash = callback_move("Heat Crash", Type::Fire, MoveCategory::Physical, MoveFlags::CONTACT);

    let expected = [39, 39, 40, 40, 40, 41, 41, 42, 42, 43, 43, 44, 44, 45, 45, 46];
    let rolls = calculate_damage(&field, &electrode(), &tyrogue(), &heavy).unwrap();
    assert_eq!(rolls.as_slice(), &expected);
    let rolls = calculate_damage(&field, &electrode(), &tyrogue(), &heat_crash).unwrap();
    assert_eq!(rolls.as_slice(), &expected);

    let rolls = calculate_damage(&field, &cosmoem(), &electrode(), &heavy).unwrap();
    assert_eq!(
        rolls.as_slice(),
        &[12, 12, 13, 13, 13, 13, 13, 13, 13, 14, 14, 14, 14, 14, 14, 15]
    );
    let rolls = calculate_damage(&field, &cosmoem(), &electrode(), &heat_crash).unwrap();
    assert_eq!(
        rolls.as_slice(),
        &[25, 25, 26, 26, 26, 27, 27, 27, 27, 28, 28, 28, 29, 29, 29, 30]
    );
}

#[test]
fn test_callback_ignores_listed_power() {
    let field = FieldState::default();
    let listed = Move {
        base_power: 250,
        ..low_kick_move()
    };
    assert_eq!(
        calculate_damage(&field, &swampert(), &swampert(), &listed),
        calculate_damage(&field, &swampert(), &swampert(), &low_kick_move())
    );
}

#[test]
fn test_unknown_callback() {
    let field = FieldState::default();
    let punishment = callback_move("Punishment", Type::Dark, MoveCategory::Physical, MoveFlags::CONTACT);
    let err = calculate_damage(&field, &swampert(), &swampert(), &punishment).unwrap_err();
    assert_eq!(err, CalcError::UnhandledBasePowerCallback("Punishment".to_string()));
}

#[test]
fn test_electro_ball_reads_modified_speed() {
    let field = FieldState::default();
    let electro = callback_move("Electro Ball", Type::Electric, MoveCategory::Special, MoveFlags::BULLET);
    let attacker = electrode();
    let target = tyrogue();
    let ctx = DamageContext::new(&field, &attacker, &target, &electro).unwrap();
    // 55 / 170
    assert_eq!(base_power(&ctx), Ok(80));

    // paralysis halves the user to 85
    let paralyzed = Pokemon::new(
        Species::new("Electrode", &[Type::Electric], StatTable::new(60, 50, 70, 80, 80, 150), 66.6),
        PokemonConfig {
            status: Some(Status::Paralysis),
            ..PokemonConfig::default()
        },
    );
    let ctx = DamageContext::new(&field, &paralyzed, &target, &electro).unwrap();
    assert_eq!(base_power(&ctx), Ok(40));

    let quick_feet = Pokemon::new(
        Species::new("Electrode", &[Type::Electric], StatTable::new(60, 50, 70, 80, 80, 150), 66.6),
        PokemonConfig {
            ability: AbilityId::QuickFeet,
            status: Some(Status::Paralysis),
            ..PokemonConfig::default()
        },
    );
    let ctx = DamageContext::new(&field, &quick_feet, &target, &electro).unwrap();
    // 1.5x and 0.5x combine: 127
    assert_eq!(base_power(&ctx), Ok(60));
}
