use serde::{Deserialize, Serialize};
use std::fmt;
use strum::{EnumIter, IntoEnumIterator};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash, EnumIter)]
pub enum PokemonType {
    Normal,
    Fighting,
    Flying,
    Poison,
    Ground,
    Rock,
    Bug,
    Ghost,
    Fire,
    Water,
    Grass,
    Electric,
    Psychic,
    Ice,
    Dragon,
    Dark,
    Steel,
}

impl fmt::Display for PokemonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl PokemonType {
    /// Generation in which this type first exists. Dark and Steel were
    /// introduced alongside the Johto games.
    pub fn introduced_in(self) -> u8 {
        match self {
            PokemonType::Dark | PokemonType::Steel => 2,
            _ => 1,
        }
    }

    /// All types that exist in the given generation, in declaration order.
    pub fn types_for_generation(generation: u8) -> Vec<PokemonType> {
        PokemonType::iter()
            .filter(|t| t.introduced_in() <= generation)
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash, EnumIter)]
pub enum Gender {
    Male,
    Female,
    Genderless,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl Gender {
    /// The pairing-opposite of a binary gender. Genderless has no opposite.
    pub fn opposite(self) -> Option<Gender> {
        match self {
            Gender::Male => Some(Gender::Female),
            Gender::Female => Some(Gender::Male),
            Gender::Genderless => None,
        }
    }
}

/// All 25 natures. Natures only exist from generation 3 onwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash, EnumIter)]
pub enum Nature {
    Hardy,
    Docile,
    Serious,
    Bashful,
    Quirky,
    Lonely,
    Brave,
    Adamant,
    Naughty,
    Bold,
    Relaxed,
    Impish,
    Lax,
    Timid,
    Hasty,
    Jolly,
    Naive,
    Modest,
    Mild,
    Quiet,
    Rash,
    Calm,
    Gentle,
    Sassy,
    Careful,
}

impl fmt::Display for Nature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl Nature {
    pub fn all() -> Vec<Nature> {
        Nature::iter().collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash, EnumIter)]
pub enum Color {
    Red,
    Blue,
    Green,
    Yellow,
    Purple,
    Brown,
    Black,
    White,
    Gray,
    Orange,
    Pink,
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl Color {
    pub fn all() -> Vec<Color> {
        Color::iter().collect()
    }
}

/// Thematic species groupings used by the category challenge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash, EnumIter)]
pub enum Category {
    Prehistoric,
    Plant,
    Bird,
    Bug,
    Mammal,
    Rodent,
    Reptile,
    Fantasy,
    Food,
    Dog,
    Cat,
    Fish,
    Human,
    Snake,
    Bear,
    Turtle,
    Item,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl Category {
    pub fn all() -> Vec<Category> {
        Category::iter().collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub enum Region {
    Kanto,
    Johto,
    Hoenn,
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}
