use crate::abilities::AbilityId;
use crate::damage::context::DamageContext;
use crate::damage::modifiers::compute_base_power;
use crate::damage::{calculate_damage, DamageRolls};
use crate::entities::{Pokemon, PokemonConfig};
use crate::moves::{Move, MoveCategory, MoveFlags};
use crate::species::Species;
use crate::state::{FieldState, Status};
use crate::stats::StatTable;
use crate::types::Type;

fn normal_mon(ability: AbilityId, status: Option<Status>) -> Pokemon {
    Pokemon::new(
        Species::new("Dummy", &[Type::Normal], StatTable::splat(100), 50.0),
        PokemonConfig {
            ability,
            status,
            ..PokemonConfig::default()
        },
    )
}

fn facade() -> Move {
    Move {
        flags: MoveFlags::CONTACT,
        ..Move::new("Facade", Type::Normal, MoveCategory::Physical, 70)
    }
}

fn rolls(result: DamageRolls) -> [u16; 16] {
    match result {
        DamageRolls::Rolls(r) => r,
        DamageRolls::StatusMove => panic!("expected damage rolls"),
    }
}

#[test]
fn test_facade_power() {
    let field = FieldState::default();
    let target = normal_mon(AbilityId::NoAbility, None);
    let facade = facade();

    for (status, expected) in [
        (None, 70),
        (Some(Status::Burn), 140),
        (Some(Status::Paralysis), 140),
        (Some(Status::Poison), 140),
        (Some(Status::Toxic), 140),
        (Some(Status::Sleep), 140),
    ] {
        let attacker = normal_mon(AbilityId::NoAbility, status);
        let ctx = DamageContext::new(&field, &attacker, &target, &facade).unwrap();
        assert_eq!(compute_base_power(&ctx).unwrap(), expected, "status {:?}", status);
    }
}

#[test]
fn test_facade_ignores_burn_halving() {
    let field = FieldState::default();
    let target = normal_mon(AbilityId::NoAbility, None);

    let healthy = calculate_damage(&field, &normal_mon(AbilityId::NoAbility, None), &target, &facade()).unwrap();
    assert_eq!(
        rolls(healthy),
        [40, 40, 40, 42, 42, 42, 43, 43, 43, 45, 45, 45, 46, 46, 46, 48]
    );

    // doubled and not halved
    let burned = calculate_damage(
        &field,
        &normal_mon(AbilityId::NoAbility, Some(Status::Burn)),
        &target,
        &facade(),
    )
    .unwrap();
    let paralyzed = calculate_damage(
        &field,
        &normal_mon(AbilityId::NoAbility, Some(Status::Paralysis)),
        &target,
        &facade(),
    )
    .unwrap();
    let doubled = [79, 81, 81, 82, 84, 84, 85, 85, 87, 88, 88, 90, 91, 91, 93, 94];
    assert_eq!(rolls(burned), doubled);
    assert_eq!(rolls(paralyzed), doubled);
}

#[test]
fn test_burn_halves_other_physical_moves() {
    let field = FieldState::default();
    let target = normal_mon(AbilityId::NoAbility, None);
    let return_move = Move {
        flags: MoveFlags::CONTACT,
        ..Move::new("Return", Type::Normal, MoveCategory::Physical, 70)
    };

    let burned = calculate_damage(
        &field,
        &normal_mon(AbilityId::NoAbility, Some(Status::Burn)),
        &target,
        &return_move,
    )
    .unwrap();
    assert_eq!(
        rolls(burned),
        [20, 20, 20, 21, 21, 21, 21, 21, 21, 22, 22, 22, 23, 23, 23, 24]
    );

    // Guts takes the 1.5x and skips the halving
    let guts = calculate_damage(
        &field,
        &normal_mon(AbilityId::Guts, Some(Status::Burn)),
        &target,
        &return_move,
    )
    .unwrap();
    assert_eq!(
        rolls(guts),
        [60, 61, 61, 63, 63, 64, 64, 66, 66, 67, 67, 69, 69, 70, 70, 72]
    );
}
