use crate::creature::{Creature, CreatureStatus};
use crate::errors::{precondition, EngineResult, NotFoundError};
use serde::{Deserialize, Serialize};

/// Everything ever owned in a run. Insertion-ordered, unbounded, and
/// append-only: creatures die, they are never removed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Storage {
    creatures: Vec<Creature>,
}

impl Storage {
    pub fn new() -> Storage {
        Storage::default()
    }

    pub fn add(&mut self, creature: Creature) -> EngineResult<()> {
        if self.contains(&creature.id) {
            return Err(precondition(format!(
                "creature {} already in storage",
                creature.id
            )));
        }
        self.creatures.push(creature);
        Ok(())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.creatures.iter().any(|c| c.id == id)
    }

    pub fn get(&self, id: &str) -> EngineResult<&Creature> {
        self.creatures
            .iter()
            .find(|c| c.id == id)
            .ok_or_else(|| NotFoundError::Creature(id.to_string()).into())
    }

    pub fn get_mut(&mut self, id: &str) -> EngineResult<&mut Creature> {
        self.creatures
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| NotFoundError::Creature(id.to_string()).into())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Creature> {
        self.creatures.iter()
    }

    pub fn alive(&self) -> impl Iterator<Item = &Creature> {
        self.creatures
            .iter()
            .filter(|c| c.status == CreatureStatus::Alive)
    }

    pub fn dead(&self) -> impl Iterator<Item = &Creature> {
        self.creatures
            .iter()
            .filter(|c| c.status == CreatureStatus::Dead)
    }

    pub fn len(&self) -> usize {
        self.creatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.creatures.is_empty()
    }
}

/// The active team: a view onto storage by creature id. Holds at most six
/// members and, once populated, may never be emptied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Squad {
    member_ids: Vec<String>,
}

pub const MAX_SQUAD_SIZE: usize = 6;

impl Squad {
    pub fn new() -> Squad {
        Squad::default()
    }

    /// Add a member. Fails when the creature is already a member or the
    /// squad is full.
    pub fn add(&mut self, id: &str) -> EngineResult<()> {
        if self.is_member(id) {
            return Err(precondition(format!("creature {} already in squad", id)));
        }
        if self.is_full() {
            return Err(precondition("can't add creature to a full squad"));
        }
        self.member_ids.push(id.to_string());
        Ok(())
    }

    /// Remove a member. Fails when the creature is not a member or removal
    /// would leave the squad empty.
    pub fn remove(&mut self, id: &str) -> EngineResult<()> {
        if !self.is_member(id) {
            return Err(precondition(format!("creature {} is not in squad", id)));
        }
        if self.is_last_member(id) {
            return Err(precondition("can't leave the squad empty"));
        }
        self.member_ids.retain(|member| member != id);
        Ok(())
    }

    pub fn is_member(&self, id: &str) -> bool {
        self.member_ids.iter().any(|member| member == id)
    }

    pub fn is_full(&self) -> bool {
        self.member_ids.len() >= MAX_SQUAD_SIZE
    }

    /// True when the creature is the only member left.
    pub fn is_last_member(&self, id: &str) -> bool {
        self.member_ids.len() == 1 && self.member_ids[0] == id
    }

    pub fn members(&self) -> &[String] {
        &self.member_ids
    }

    pub fn len(&self) -> usize {
        self.member_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.member_ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::EngineError;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_squad_capacity() {
        let mut squad = Squad::new();
        for i in 0..MAX_SQUAD_SIZE {
            squad.add(&format!("c{}", i)).unwrap();
        }
        assert!(squad.is_full());

        let err = squad.add("c6").unwrap_err();
        assert!(matches!(err, EngineError::Precondition(_)));
        assert_eq!(squad.len(), MAX_SQUAD_SIZE);
    }

    #[test]
    fn test_squad_rejects_duplicates() {
        let mut squad = Squad::new();
        squad.add("c0").unwrap();
        assert!(squad.add("c0").is_err());
        assert_eq!(squad.len(), 1);
    }

    #[test]
    fn test_squad_never_empties() {
        let mut squad = Squad::new();
        squad.add("c0").unwrap();
        squad.add("c1").unwrap();
        squad.remove("c1").unwrap();

        let err = squad.remove("c0").unwrap_err();
        assert!(matches!(err, EngineError::Precondition(_)));
        assert_eq!(squad.members(), &["c0".to_string()]);
    }

    #[test]
    fn test_squad_remove_non_member() {
        let mut squad = Squad::new();
        squad.add("c0").unwrap();
        assert!(squad.remove("missing").is_err());
    }

    #[test]
    fn test_squad_size_stays_in_bounds_under_churn() {
        let mut squad = Squad::new();
        squad.add("seed").unwrap();
        for i in 0..20 {
            let id = format!("c{}", i);
            let _ = squad.add(&id);
            if i % 3 == 0 {
                let _ = squad.remove(&id);
            }
            assert!(!squad.is_empty());
            assert!(squad.len() <= MAX_SQUAD_SIZE);
        }
    }
}
