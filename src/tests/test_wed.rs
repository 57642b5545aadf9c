use crate::actions::{ActionName, ActionOptions};
use crate::engine::Engine;
use crate::errors::EngineError;
use crate::run::Run;
use crate::tests::common::{create_run, finish_bookkeeping, TestDex};
use pretty_assertions::assert_eq;

fn caught(engine: &Engine, run: &mut Run, species: &str, nickname: &str, gender: &str) -> String {
    let id = engine.catch_creature(run, species, None).unwrap();
    finish_bookkeeping(engine, run, &id, nickname, gender);
    id
}

fn field(engine: &Engine, run: &mut Run, id: &str) {
    engine
        .apply(run, id, ActionName::AddToSquad, None)
        .unwrap();
}

fn pair(engine: &Engine, run: &mut Run, a: &str, b: &str) {
    engine
        .apply(run, a, ActionName::PairCreature, Some(b))
        .unwrap();
}

#[test]
fn test_genderless_species_cannot_join() {
    let dex = TestDex::new();
    let engine = Engine::new(&dex);
    let mut run = create_run(&dex, "Wedlocke", "Gold");

    let err = engine
        .catch_creature(&mut run, "Magnemite", None)
        .unwrap_err();
    assert!(matches!(err, EngineError::Precondition(_)));
    assert!(engine.catch_creature(&mut run, "Pidgey", None).is_ok());
}

#[test]
fn test_catches_stay_boxed() {
    let dex = TestDex::new();
    let engine = Engine::new(&dex);
    let mut run = create_run(&dex, "Wedlocke", "Gold");

    let id = caught(&engine, &mut run, "Cyndaquil", "Cinder", "Male");
    assert!(run.squad.is_empty());
    field(&engine, &mut run, &id);
    assert!(run.squad.is_member(&id));
}

#[test]
fn test_pairing_links_both_partners() {
    let dex = TestDex::new();
    let engine = Engine::new(&dex);
    let mut run = create_run(&dex, "Wedlocke", "Gold");

    let groom = caught(&engine, &mut run, "Cyndaquil", "Cinder", "Male");
    let bride = caught(&engine, &mut run, "Chikorita", "Leaf", "Female");

    assert!(engine
        .available_actions(&run, &groom)
        .unwrap()
        .contains(&ActionName::PairCreature));
    pair(&engine, &mut run, &groom, &bride);

    assert_eq!(
        run.creature(&groom).unwrap().partner.as_deref(),
        Some(bride.as_str())
    );
    assert_eq!(
        run.creature(&bride).unwrap().partner.as_deref(),
        Some(groom.as_str())
    );
    // Pairing two boxed creatures touches no squad seats.
    assert!(run.squad.is_empty());

    // Same-gender creatures were never on the menu.
    let another = caught(&engine, &mut run, "Totodile", "Chompy", "Male");
    let err = engine
        .apply(&mut run, &groom, ActionName::PairCreature, Some(another.as_str()))
        .unwrap_err();
    assert!(matches!(err, EngineError::Precondition(_)));
}

#[test]
fn test_pairing_reaches_boxed_creatures() {
    let dex = TestDex::new();
    let engine = Engine::new(&dex);
    let mut run = create_run(&dex, "Wedlocke", "Gold");

    let mut males = Vec::new();
    for species in [
        "Cyndaquil",
        "Totodile",
        "Pidgey",
        "Caterpie",
        "Bulbasaur",
        "Charmander",
    ] {
        let id = caught(&engine, &mut run, species, species, "Male");
        field(&engine, &mut run, &id);
        males.push(id);
    }
    assert!(run.squad.is_full());

    let bride = caught(&engine, &mut run, "Chikorita", "Leaf", "Female");
    assert!(!run.squad.is_member(&bride));

    // The boxed female is on every fielded male's menu.
    let options = engine
        .action_options(&run, &males[0], ActionName::PairCreature)
        .unwrap();
    assert_eq!(options, ActionOptions::OneOf(vec![bride.clone()]));

    pair(&engine, &mut run, &males[0], &bride);
    assert_eq!(
        run.creature(&bride).unwrap().partner.as_deref(),
        Some(males[0].as_str())
    );
    // No seat opened up, so the bride stays boxed.
    assert!(!run.squad.is_member(&bride));
    assert!(run.squad.is_full());
}

#[test]
fn test_pairing_fields_the_partner_of_a_member() {
    let dex = TestDex::new();
    let engine = Engine::new(&dex);
    let mut run = create_run(&dex, "Wedlocke", "Gold");

    let groom = caught(&engine, &mut run, "Cyndaquil", "Cinder", "Male");
    field(&engine, &mut run, &groom);
    let bride = caught(&engine, &mut run, "Chikorita", "Leaf", "Female");
    assert!(!run.squad.is_member(&bride));

    pair(&engine, &mut run, &groom, &bride);
    // The lone fielded half pulls its new partner out of the box.
    assert!(run.squad.is_member(&groom));
    assert!(run.squad.is_member(&bride));
}

#[test]
fn test_pairing_without_candidates_is_a_no_op() {
    let dex = TestDex::new();
    let engine = Engine::new(&dex);
    let mut run = create_run(&dex, "Wedlocke", "Gold");

    let lonely = caught(&engine, &mut run, "Cyndaquil", "Cinder", "Male");
    let outcome = engine
        .apply(&mut run, &lonely, ActionName::PairCreature, None)
        .unwrap();
    assert!(outcome.updated.is_empty());
    assert!(run.creature(&lonely).unwrap().partner.is_none());
}

#[test]
fn test_death_widows_the_partner() {
    let dex = TestDex::new();
    let engine = Engine::new(&dex);
    let mut run = create_run(&dex, "Wedlocke", "Gold");

    let groom = caught(&engine, &mut run, "Cyndaquil", "Cinder", "Male");
    let bride = caught(&engine, &mut run, "Chikorita", "Leaf", "Female");
    pair(&engine, &mut run, &groom, &bride);

    engine
        .apply(&mut run, &bride, ActionName::Kill, None)
        .unwrap();
    assert!(!run.creature(&bride).unwrap().is_alive());
    // The survivor is free to pair again.
    assert!(run.creature(&groom).unwrap().partner.is_none());
}

#[test]
fn test_removal_needs_another_intact_pair() {
    let dex = TestDex::new();
    let engine = Engine::new(&dex);
    let mut run = create_run(&dex, "Wedlocke", "Gold");

    let a = caught(&engine, &mut run, "Cyndaquil", "Cinder", "Male");
    let b = caught(&engine, &mut run, "Chikorita", "Leaf", "Female");
    pair(&engine, &mut run, &a, &b);
    // Fielding one partner brings the other along.
    field(&engine, &mut run, &a);
    assert!(run.squad.is_member(&b));

    // The only pair in the squad is untouchable.
    assert!(!engine
        .available_actions(&run, &a)
        .unwrap()
        .contains(&ActionName::RemoveFromSquad));

    let c = caught(&engine, &mut run, "Totodile", "Chompy", "Male");
    let d = caught(&engine, &mut run, "Pidgey", "Wings", "Female");
    pair(&engine, &mut run, &c, &d);
    field(&engine, &mut run, &c);

    assert!(engine
        .available_actions(&run, &a)
        .unwrap()
        .contains(&ActionName::RemoveFromSquad));
    engine
        .apply(&mut run, &a, ActionName::RemoveFromSquad, None)
        .unwrap();
    // Partners leave together.
    assert!(!run.squad.is_member(&a));
    assert!(!run.squad.is_member(&b));
    assert!(run.squad.is_member(&c));
}
