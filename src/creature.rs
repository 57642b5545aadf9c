use crate::errors::{EngineError, EngineResult};
use rand::distr::Alphanumeric;
use rand::Rng;
use schema::{Gender, Nature, SpeciesData};
use serde::{Deserialize, Serialize};

/// Life status of a captured creature. Creatures are never deleted from a
/// run; a faint flips them to Dead instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CreatureStatus {
    Alive,
    Dead,
}

/// Chess roles for the chess challenge. Assigned once per creature; the
/// original assignment is remembered separately so promoted pawns keep
/// counting against the pawn quota.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChessRole {
    King,
    Queen,
    Bishop,
    Knight,
    Rook,
    Pawn,
}

impl std::fmt::Display for ChessRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl ChessRole {
    pub fn parse(value: &str) -> Option<ChessRole> {
        match value {
            "King" => Some(ChessRole::King),
            "Queen" => Some(ChessRole::Queen),
            "Bishop" => Some(ChessRole::Bishop),
            "Knight" => Some(ChessRole::Knight),
            "Rook" => Some(ChessRole::Rook),
            "Pawn" => Some(ChessRole::Pawn),
            _ => None,
        }
    }
}

/// A per-run instance of a species: the unit every action operates on.
///
/// The species record is denormalized onto the creature so that evolution
/// can swap it wholesale and so the engine never needs a dex lookup for
/// relevance checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Creature {
    /// Opaque id, unique within a run. Never empty.
    pub id: String,
    pub species: SpeciesData,
    pub nickname: Option<String>,
    pub status: CreatureStatus,
    pub gender: Option<Gender>,
    pub nature: Option<Nature>,
    pub ability: Option<String>,
    /// Position in the run's capture order, starting at 0.
    pub caught_index: Option<u32>,
    /// Id of the partnered creature (wedlocke), if any.
    pub partner: Option<String>,
    pub role: Option<ChessRole>,
    /// The first role this creature was ever assigned.
    pub original_role: Option<ChessRole>,
    /// Type slot the creature fills in a star run.
    pub type_tag: Option<schema::PokemonType>,
}

impl Creature {
    pub fn new(id: impl Into<String>, species: SpeciesData) -> EngineResult<Creature> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(EngineError::Validation(
                "creature id cannot be empty".to_string(),
            ));
        }
        Ok(Creature {
            id,
            species,
            nickname: None,
            status: CreatureStatus::Alive,
            gender: None,
            nature: None,
            ability: None,
            caught_index: None,
            partner: None,
            role: None,
            original_role: None,
            type_tag: None,
        })
    }

    pub fn is_alive(&self) -> bool {
        self.status == CreatureStatus::Alive
    }

    /// Nickname when set, species name otherwise.
    pub fn display_name(&self) -> &str {
        self.nickname.as_deref().unwrap_or(&self.species.name)
    }

    /// Replace the species record with the evolution target. Gender support
    /// carries over when the target does not declare its own (form changes
    /// within a line keep the line's gender table).
    pub fn evolve_into(&mut self, target: SpeciesData) {
        let mut target = target;
        if target.supported_genders.is_empty() {
            target.supported_genders = self.species.supported_genders.clone();
        }
        self.species = target;
    }
}

/// Generate an opaque creature/run id. Uniqueness within a run is all the
/// engine needs; collisions across 12 alphanumeric characters are not a
/// practical concern at run scale.
pub fn generate_id() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(12)
        .map(char::from)
        .collect()
}
