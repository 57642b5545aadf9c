use crate::containers::{Squad, Storage};
use crate::creature::Creature;
use crate::errors::{EngineError, EngineResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Free-form variant parameter bag, keyed by wizard info keys.
pub type ExtraInfo = HashMap<String, String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EncounterStatus {
    Unmet,
    Met,
    Killed,
    Ran,
    Caught,
}

/// One route's encounter outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Encounter {
    pub route: String,
    pub status: EncounterStatus,
    /// Id of the creature met or caught on the route, if any.
    pub creature: Option<String>,
}

impl Encounter {
    pub fn is_caught(&self) -> bool {
        self.creature.is_some() && self.status == EncounterStatus::Caught
    }
}

/// A recorded mandatory battle (gym or elite trainer).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Battle {
    pub opponent: String,
    pub won: bool,
}

/// One entry in the run's catch menu: a species that could (or did) join
/// the run. Indices are assigned once at run creation and stay stable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub species: String,
    /// First form of the species' evolution line.
    pub base_form: String,
    pub index: u32,
    pub caught: bool,
}

/// A complete challenge run. The engine receives a full value, mutates it
/// in memory and hands it back; persistence between requests belongs to the
/// store collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Run {
    pub id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub restarts: u32,
    pub finished: bool,
    pub game: String,
    pub generation: u8,
    /// Registry name of the governing variant.
    pub variant: String,
    pub extra_info: ExtraInfo,
    pub randomized: bool,
    pub duplicate_clause: bool,
    pub storage: Storage,
    pub squad: Squad,
    pub battles: Vec<Battle>,
    pub encounters: Vec<Encounter>,
    pub catalog: Vec<CatalogEntry>,
    /// Id of the starter creature, once chosen.
    pub starter: Option<String>,
}

impl Run {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        game: impl Into<String>,
        generation: u8,
        variant: impl Into<String>,
    ) -> EngineResult<Run> {
        let id = id.into();
        let name = name.into();
        if id.trim().is_empty() {
            return Err(EngineError::Validation("run id cannot be empty".to_string()));
        }
        if name.trim().is_empty() {
            return Err(EngineError::Validation(
                "run name cannot be empty".to_string(),
            ));
        }
        Ok(Run {
            id,
            name,
            created_at: Utc::now(),
            restarts: 0,
            finished: false,
            game: game.into(),
            generation,
            variant: variant.into(),
            extra_info: ExtraInfo::new(),
            randomized: false,
            duplicate_clause: false,
            storage: Storage::new(),
            squad: Squad::new(),
            battles: Vec::new(),
            encounters: Vec::new(),
            catalog: Vec::new(),
            starter: None,
        })
    }

    pub fn creature(&self, id: &str) -> EngineResult<&Creature> {
        self.storage.get(id)
    }

    pub fn creature_mut(&mut self, id: &str) -> EngineResult<&mut Creature> {
        self.storage.get_mut(id)
    }

    /// Whether the given creature is the run's starter.
    pub fn is_starter(&self, id: &str) -> bool {
        self.starter.as_deref() == Some(id)
    }

    pub fn add_battle(&mut self, battle: Battle) {
        self.battles.push(battle);
    }

    pub fn add_encounter(&mut self, encounter: Encounter) {
        self.encounters.push(encounter);
    }

    pub fn encounter_mut(&mut self, route: &str) -> Option<&mut Encounter> {
        self.encounters.iter_mut().find(|e| e.route == route)
    }

    /// Highest caught-order index handed out so far, or None before the
    /// first capture.
    pub fn max_caught_index(&self) -> Option<u32> {
        self.storage.iter().filter_map(|c| c.caught_index).max()
    }

    pub fn catalog_entry(&self, species: &str) -> Option<&CatalogEntry> {
        self.catalog.iter().find(|entry| entry.species == species)
    }

    pub fn catalog_entry_mut(&mut self, species: &str) -> Option<&mut CatalogEntry> {
        self.catalog.iter_mut().find(|entry| entry.species == species)
    }

    /// Append a catalog entry with the next free display index.
    pub fn push_catalog_entry(&mut self, species: &str, base_form: &str, caught: bool) {
        let index = self.catalog.len() as u32;
        self.catalog.push(CatalogEntry {
            species: species.to_string(),
            base_form: base_form.to_string(),
            index,
            caught,
        });
    }

    pub fn is_active(&self) -> bool {
        !self.finished
    }

    pub fn finish(&mut self) {
        self.finished = true;
    }

    pub fn restart(&mut self) {
        self.restarts += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_run_validation() {
        assert!(Run::new("", "MyRun", "Red", 1, "BaseLocke").is_err());
        assert!(Run::new("r1", " ", "Red", 1, "BaseLocke").is_err());
        assert!(Run::new("r1", "MyRun", "Red", 1, "BaseLocke").is_ok());
    }

    #[test]
    fn test_catalog_indices_are_stable_and_unique() {
        let mut run = Run::new("r1", "MyRun", "Red", 1, "BaseLocke").unwrap();
        run.push_catalog_entry("Bulbasaur", "Bulbasaur", false);
        run.push_catalog_entry("Ivysaur", "Bulbasaur", false);
        run.push_catalog_entry("Pidgey", "Pidgey", false);

        let indices: Vec<u32> = run.catalog.iter().map(|e| e.index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
        assert_eq!(run.catalog_entry("Ivysaur").unwrap().base_form, "Bulbasaur");
    }

    #[test]
    fn test_restart_and_finish() {
        let mut run = Run::new("r1", "MyRun", "Red", 1, "BaseLocke").unwrap();
        assert!(run.is_active());
        run.restart();
        run.finish();
        assert_eq!(run.restarts, 1);
        assert!(!run.is_active());
    }
}
