use crate::actions::ActionName;
use crate::dex::Pokedex;
use crate::engine::Engine;
use crate::errors::{EngineResult, NotFoundError};
use crate::init::{finalize, RunCreation};
use crate::run::Run;
use schema::{Category, Color, Gender, PokemonType, SpeciesData};

/// A small fixed dex covering the first three generations well enough for
/// every ruleset to be exercised.
pub struct TestDex {
    species: Vec<SpeciesData>,
}

struct Entry {
    number: u16,
    name: &'static str,
    generation: u8,
    types: &'static [PokemonType],
    genders: &'static [Gender],
    abilities: &'static [&'static str],
    colors: &'static [Color],
    categories: &'static [Category],
    num_legs: u8,
    evolves_to: &'static [&'static str],
}

const BINARY: &[Gender] = &[Gender::Male, Gender::Female];
const NONE: &[Gender] = &[Gender::Genderless];

const ROSTER: &[Entry] = &[
    Entry { number: 1, name: "Bulbasaur", generation: 1, types: &[PokemonType::Grass, PokemonType::Poison], genders: BINARY, abilities: &["Overgrow"], colors: &[Color::Green], categories: &[Category::Plant], num_legs: 4, evolves_to: &["Ivysaur"] },
    Entry { number: 2, name: "Ivysaur", generation: 1, types: &[PokemonType::Grass, PokemonType::Poison], genders: BINARY, abilities: &["Overgrow"], colors: &[Color::Green], categories: &[Category::Plant], num_legs: 4, evolves_to: &["Venusaur"] },
    Entry { number: 3, name: "Venusaur", generation: 1, types: &[PokemonType::Grass, PokemonType::Poison], genders: BINARY, abilities: &["Overgrow"], colors: &[Color::Green], categories: &[Category::Plant], num_legs: 4, evolves_to: &[] },
    Entry { number: 4, name: "Charmander", generation: 1, types: &[PokemonType::Fire], genders: BINARY, abilities: &["Blaze"], colors: &[Color::Red], categories: &[Category::Reptile], num_legs: 2, evolves_to: &["Charmeleon"] },
    Entry { number: 5, name: "Charmeleon", generation: 1, types: &[PokemonType::Fire], genders: BINARY, abilities: &["Blaze"], colors: &[Color::Red], categories: &[Category::Reptile], num_legs: 2, evolves_to: &["Charizard"] },
    Entry { number: 6, name: "Charizard", generation: 1, types: &[PokemonType::Fire, PokemonType::Flying], genders: BINARY, abilities: &["Blaze"], colors: &[Color::Red], categories: &[Category::Reptile], num_legs: 2, evolves_to: &[] },
    Entry { number: 7, name: "Squirtle", generation: 1, types: &[PokemonType::Water], genders: BINARY, abilities: &["Torrent"], colors: &[Color::Blue], categories: &[Category::Turtle], num_legs: 2, evolves_to: &["Wartortle"] },
    Entry { number: 8, name: "Wartortle", generation: 1, types: &[PokemonType::Water], genders: BINARY, abilities: &["Torrent"], colors: &[Color::Blue], categories: &[Category::Turtle], num_legs: 2, evolves_to: &["Blastoise"] },
    Entry { number: 9, name: "Blastoise", generation: 1, types: &[PokemonType::Water], genders: BINARY, abilities: &["Torrent"], colors: &[Color::Blue], categories: &[Category::Turtle], num_legs: 2, evolves_to: &[] },
    Entry { number: 10, name: "Caterpie", generation: 1, types: &[PokemonType::Bug], genders: BINARY, abilities: &["Shield Dust"], colors: &[Color::Green], categories: &[Category::Bug], num_legs: 0, evolves_to: &["Metapod"] },
    Entry { number: 11, name: "Metapod", generation: 1, types: &[PokemonType::Bug], genders: BINARY, abilities: &["Shed Skin"], colors: &[Color::Green], categories: &[Category::Bug], num_legs: 0, evolves_to: &["Butterfree"] },
    Entry { number: 12, name: "Butterfree", generation: 1, types: &[PokemonType::Bug, PokemonType::Flying], genders: BINARY, abilities: &["Compound Eyes"], colors: &[Color::White], categories: &[Category::Bug], num_legs: 2, evolves_to: &[] },
    Entry { number: 16, name: "Pidgey", generation: 1, types: &[PokemonType::Normal, PokemonType::Flying], genders: BINARY, abilities: &["Keen Eye"], colors: &[Color::Brown], categories: &[Category::Bird], num_legs: 2, evolves_to: &["Pidgeotto"] },
    Entry { number: 17, name: "Pidgeotto", generation: 1, types: &[PokemonType::Normal, PokemonType::Flying], genders: BINARY, abilities: &["Keen Eye"], colors: &[Color::Brown], categories: &[Category::Bird], num_legs: 2, evolves_to: &["Pidgeot"] },
    Entry { number: 18, name: "Pidgeot", generation: 1, types: &[PokemonType::Normal, PokemonType::Flying], genders: BINARY, abilities: &["Keen Eye"], colors: &[Color::Brown], categories: &[Category::Bird], num_legs: 2, evolves_to: &[] },
    Entry { number: 81, name: "Magnemite", generation: 1, types: &[PokemonType::Electric, PokemonType::Steel], genders: NONE, abilities: &["Magnet Pull"], colors: &[Color::Gray], categories: &[Category::Item], num_legs: 0, evolves_to: &["Magneton"] },
    Entry { number: 82, name: "Magneton", generation: 1, types: &[PokemonType::Electric, PokemonType::Steel], genders: NONE, abilities: &["Magnet Pull"], colors: &[Color::Gray], categories: &[Category::Item], num_legs: 0, evolves_to: &[] },
    Entry { number: 133, name: "Eevee", generation: 1, types: &[PokemonType::Normal], genders: BINARY, abilities: &["Run Away"], colors: &[Color::Brown], categories: &[Category::Mammal], num_legs: 4, evolves_to: &["Vaporeon", "Jolteon", "Flareon", "Espeon", "Umbreon"] },
    Entry { number: 134, name: "Vaporeon", generation: 1, types: &[PokemonType::Water], genders: BINARY, abilities: &["Water Absorb"], colors: &[Color::Blue], categories: &[Category::Mammal], num_legs: 4, evolves_to: &[] },
    Entry { number: 135, name: "Jolteon", generation: 1, types: &[PokemonType::Electric], genders: BINARY, abilities: &["Volt Absorb"], colors: &[Color::Yellow], categories: &[Category::Mammal], num_legs: 4, evolves_to: &[] },
    Entry { number: 136, name: "Flareon", generation: 1, types: &[PokemonType::Fire], genders: BINARY, abilities: &["Flash Fire"], colors: &[Color::Red], categories: &[Category::Mammal], num_legs: 4, evolves_to: &[] },
    Entry { number: 196, name: "Espeon", generation: 2, types: &[PokemonType::Psychic], genders: BINARY, abilities: &["Synchronize"], colors: &[Color::Purple], categories: &[Category::Mammal], num_legs: 4, evolves_to: &[] },
    Entry { number: 197, name: "Umbreon", generation: 2, types: &[PokemonType::Dark], genders: BINARY, abilities: &["Synchronize"], colors: &[Color::Black], categories: &[Category::Mammal], num_legs: 4, evolves_to: &[] },
    Entry { number: 152, name: "Chikorita", generation: 2, types: &[PokemonType::Grass], genders: BINARY, abilities: &["Overgrow"], colors: &[Color::Green], categories: &[Category::Plant], num_legs: 4, evolves_to: &[] },
    Entry { number: 155, name: "Cyndaquil", generation: 2, types: &[PokemonType::Fire], genders: BINARY, abilities: &["Blaze"], colors: &[Color::Yellow], categories: &[Category::Rodent], num_legs: 4, evolves_to: &[] },
    Entry { number: 158, name: "Totodile", generation: 2, types: &[PokemonType::Water], genders: BINARY, abilities: &["Torrent"], colors: &[Color::Blue], categories: &[Category::Reptile], num_legs: 2, evolves_to: &[] },
    Entry { number: 252, name: "Treecko", generation: 3, types: &[PokemonType::Grass], genders: BINARY, abilities: &["Overgrow"], colors: &[Color::Green], categories: &[Category::Reptile], num_legs: 2, evolves_to: &[] },
    Entry { number: 255, name: "Torchic", generation: 3, types: &[PokemonType::Fire], genders: BINARY, abilities: &["Blaze", "Speed Boost"], colors: &[Color::Orange], categories: &[Category::Bird], num_legs: 2, evolves_to: &[] },
    Entry { number: 258, name: "Mudkip", generation: 3, types: &[PokemonType::Water], genders: BINARY, abilities: &["Torrent"], colors: &[Color::Blue], categories: &[Category::Fish], num_legs: 4, evolves_to: &[] },
    Entry { number: 351, name: "Castform", generation: 3, types: &[PokemonType::Normal], genders: BINARY, abilities: &["Forecast"], colors: &[Color::Gray], categories: &[Category::Fantasy], num_legs: 0, evolves_to: &[] },
    Entry { number: 351, name: "Castform Sunny", generation: 3, types: &[PokemonType::Fire], genders: BINARY, abilities: &["Forecast"], colors: &[Color::Orange], categories: &[Category::Fantasy], num_legs: 0, evolves_to: &[] },
    Entry { number: 351, name: "Castform Rainy", generation: 3, types: &[PokemonType::Water], genders: BINARY, abilities: &["Forecast"], colors: &[Color::Blue], categories: &[Category::Fantasy], num_legs: 0, evolves_to: &[] },
    Entry { number: 351, name: "Castform Snowy", generation: 3, types: &[PokemonType::Ice], genders: BINARY, abilities: &["Forecast"], colors: &[Color::White], categories: &[Category::Fantasy], num_legs: 0, evolves_to: &[] },
    Entry { number: 386, name: "Deoxys", generation: 3, types: &[PokemonType::Psychic], genders: NONE, abilities: &["Pressure"], colors: &[Color::Orange], categories: &[Category::Fantasy], num_legs: 2, evolves_to: &[] },
    Entry { number: 386, name: "Deoxys Attack", generation: 3, types: &[PokemonType::Psychic], genders: NONE, abilities: &["Pressure"], colors: &[Color::Orange], categories: &[Category::Fantasy], num_legs: 2, evolves_to: &[] },
    Entry { number: 386, name: "Deoxys Defense", generation: 3, types: &[PokemonType::Psychic], genders: NONE, abilities: &["Pressure"], colors: &[Color::Orange], categories: &[Category::Fantasy], num_legs: 2, evolves_to: &[] },
    Entry { number: 386, name: "Deoxys Speed", generation: 3, types: &[PokemonType::Psychic], genders: NONE, abilities: &["Pressure"], colors: &[Color::Orange], categories: &[Category::Fantasy], num_legs: 2, evolves_to: &[] },
];

impl TestDex {
    pub fn new() -> TestDex {
        let species = ROSTER
            .iter()
            .map(|e| SpeciesData {
                pokedex_number: e.number,
                name: e.name.to_string(),
                generation: e.generation,
                types: e.types.to_vec(),
                supported_genders: e.genders.to_vec(),
                abilities: e.abilities.iter().map(|a| a.to_string()).collect(),
                colors: e.colors.to_vec(),
                categories: e.categories.to_vec(),
                num_legs: e.num_legs,
                evolves_to: e.evolves_to.iter().map(|n| n.to_string()).collect(),
            })
            .collect();
        TestDex { species }
    }

    fn introduced(&self, name: &str) -> Option<u8> {
        self.species
            .iter()
            .find(|s| s.name == name)
            .map(|s| s.generation)
    }

    /// Clip a record to what exists in the given generation: later types
    /// and evolution targets disappear, and abilities predate generation 3.
    fn adjust(&self, species: &SpeciesData, gen: u8) -> SpeciesData {
        let mut species = species.clone();
        species.types.retain(|t| t.introduced_in() <= gen);
        species
            .evolves_to
            .retain(|name| self.introduced(name).is_some_and(|g| g <= gen));
        if gen < 3 {
            species.abilities.clear();
        }
        species
    }
}

impl Pokedex for TestDex {
    fn species(&self, name: &str, gen: u8) -> EngineResult<SpeciesData> {
        self.species
            .iter()
            .find(|s| s.name == name && s.generation <= gen)
            .map(|s| self.adjust(s, gen))
            .ok_or_else(|| NotFoundError::Species(name.to_string()).into())
    }

    fn species_in_generation(&self, gen: u8) -> Vec<SpeciesData> {
        self.species
            .iter()
            .filter(|s| s.generation <= gen)
            .map(|s| self.adjust(s, gen))
            .collect()
    }
}

/// Create a run through the real wizard with the given variant and game.
pub fn create_run(dex: &TestDex, variant: &str, game: &str) -> Run {
    create_run_with(dex, variant, game, &[])
}

pub fn create_run_with(dex: &TestDex, variant: &str, game: &str, extra: &[(&str, &str)]) -> Run {
    let mut creation = RunCreation::new("TestRun");
    creation.variant = Some(variant.to_string());
    creation.game = Some(game.to_string());
    creation.randomized = Some(false);
    creation.duplicate_clause = Some(false);
    for (key, value) in extra {
        creation
            .extra_info
            .insert(key.to_string(), value.to_string());
    }
    finalize(dex, &creation).unwrap()
}

/// Run the mandatory bookkeeping for a creature: nickname, gender, and
/// in generation 3 the first nature and ability on offer.
pub fn finish_bookkeeping(engine: &Engine, run: &mut Run, id: &str, nickname: &str, gender: &str) {
    engine
        .apply(run, id, ActionName::Nickname, Some(nickname))
        .unwrap();
    engine
        .apply(run, id, ActionName::ChooseGender, Some(gender))
        .unwrap();
    for name in [ActionName::ChooseNature, ActionName::ChooseAbility] {
        if engine.available_actions(run, id).unwrap().contains(&name) {
            let options = engine.action_options(run, id, name).unwrap();
            if let crate::actions::ActionOptions::OneOf(choices) = options {
                engine.apply(run, id, name, choices.first().map(String::as_str)).unwrap();
            }
        }
    }
}
