use crate::actions::{ActionName, ActionOptions};
use crate::engine::Engine;
use crate::run::Run;
use crate::tests::common::{create_run, finish_bookkeeping, TestDex};
use pretty_assertions::assert_eq;

const DISJOINT_SIX: [&str; 6] = [
    "Bulbasaur",
    "Charmander",
    "Squirtle",
    "Pidgey",
    "Caterpie",
    "Magnemite",
];

fn full_squad(engine: &Engine, run: &mut Run) -> Vec<String> {
    DISJOINT_SIX
        .iter()
        .map(|name| engine.catch_creature(run, name, None).unwrap())
        .collect()
}

#[test]
fn test_a_colliding_catch_stays_in_the_box() {
    let dex = TestDex::new();
    let engine = Engine::new(&dex);
    let mut run = create_run(&dex, "Uniquelocke", "Red");

    let first = engine.catch_creature(&mut run, "Bulbasaur", None).unwrap();
    assert!(run.squad.is_member(&first));

    // Ivysaur shares both of Bulbasaur's types.
    let second = engine.catch_creature(&mut run, "Ivysaur", None).unwrap();
    assert!(!run.squad.is_member(&second));
    assert!(!engine
        .available_actions(&run, &second)
        .unwrap()
        .contains(&ActionName::AddToSquad));

    let third = engine.catch_creature(&mut run, "Pidgey", None).unwrap();
    assert!(run.squad.is_member(&third));
}

#[test]
fn test_replacement_targets_the_colliding_member() {
    let dex = TestDex::new();
    let engine = Engine::new(&dex);
    let mut run = create_run(&dex, "Uniquelocke", "Red");
    let members = full_squad(&engine, &mut run);
    let pidgey = members[3].clone();

    // Eevee only collides with Pidgey over Normal.
    let eevee = engine.catch_creature(&mut run, "Eevee", None).unwrap();
    assert!(engine
        .available_actions(&run, &eevee)
        .unwrap()
        .contains(&ActionName::ReplaceSquadMember));
    let options = engine
        .action_options(&run, &eevee, ActionName::ReplaceSquadMember)
        .unwrap();
    assert_eq!(options, ActionOptions::OneOf(vec![pidgey.clone()]));

    engine
        .apply(
            &mut run,
            &eevee,
            ActionName::ReplaceSquadMember,
            Some(pidgey.as_str()),
        )
        .unwrap();
    assert!(run.squad.is_member(&eevee));
    assert!(!run.squad.is_member(&pidgey));
}

#[test]
fn test_two_collisions_cannot_be_replaced_away() {
    let dex = TestDex::new();
    let engine = Engine::new(&dex);
    let mut run = create_run(&dex, "Uniquelocke", "Red");
    full_squad(&engine, &mut run);

    // Butterfree collides with Caterpie over Bug and Pidgey over Flying.
    let butterfree = engine.catch_creature(&mut run, "Butterfree", None).unwrap();
    assert!(!engine
        .available_actions(&run, &butterfree)
        .unwrap()
        .contains(&ActionName::ReplaceSquadMember));
}

#[test]
fn test_evolution_cannot_introduce_a_collision() {
    let dex = TestDex::new();
    let engine = Engine::new(&dex);
    let mut run = create_run(&dex, "Uniquelocke", "Red");

    let eevee = engine.catch_creature(&mut run, "Eevee", None).unwrap();
    engine.catch_creature(&mut run, "Squirtle", None).unwrap();
    engine.catch_creature(&mut run, "Charmander", None).unwrap();
    finish_bookkeeping(&engine, &mut run, &eevee, "Vee", "Male");

    // Water and Fire seats are taken; only the Electric evolution is open.
    let options = engine
        .action_options(&run, &eevee, ActionName::Evolve)
        .unwrap();
    assert_eq!(options, ActionOptions::OneOf(vec!["Jolteon".to_string()]));
}
