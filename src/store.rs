use crate::errors::{precondition, EngineResult, NotFoundError};
use crate::games::get_game;
use crate::run::Run;
use std::collections::HashMap;

/// Which copy of a run a store operation targets. `Live` is the working
/// copy; `Checkpoint` is the last deliberately saved state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RunSlot {
    Live,
    Checkpoint,
}

/// Persistence seam for runs. The engine never touches storage directly;
/// an implementation can keep runs in memory, on disk or behind a wire.
pub trait RunStore {
    fn put(&mut self, slot: RunSlot, run: &Run) -> EngineResult<()>;
    fn get(&self, slot: RunSlot, run_id: &str) -> EngineResult<Run>;
    fn list_ids(&self) -> Vec<String>;
}

/// Copy the live run into its checkpoint slot.
pub fn save_run(store: &mut dyn RunStore, run_id: &str) -> EngineResult<()> {
    let run = store.get(RunSlot::Live, run_id)?;
    store.put(RunSlot::Checkpoint, &run)?;
    log::info!("run {}: checkpoint saved", run_id);
    Ok(())
}

/// Restore the checkpoint over the live run. Counts as a restart.
pub fn load_run(store: &mut dyn RunStore, run_id: &str) -> EngineResult<Run> {
    let mut run = store.get(RunSlot::Checkpoint, run_id)?;
    run.restart();
    store.put(RunSlot::Live, &run)?;
    log::info!("run {}: checkpoint restored (restart {})", run_id, run.restarts);
    Ok(run)
}

/// Close out a victorious run. Every mandatory battle of the game must be
/// recorded as won first.
pub fn finish_run(store: &mut dyn RunStore, run_id: &str) -> EngineResult<Run> {
    let mut run = store.get(RunSlot::Live, run_id)?;
    if run.finished {
        return Err(precondition("the run is already over"));
    }
    let game = get_game(&run.game)?;
    let won = run.battles.iter().filter(|b| b.won).count();
    if won < game.required_battles() {
        return Err(precondition(format!(
            "{} of {} mandatory battles won",
            won,
            game.required_battles()
        )));
    }
    run.finish();
    store.put(RunSlot::Live, &run)?;
    log::info!("run {}: finished as a victory", run_id);
    Ok(run)
}

/// In-memory store, the default for tests and single-process use.
#[derive(Default)]
pub struct MemoryStore {
    slots: HashMap<(RunSlot, String), Run>,
}

impl MemoryStore {
    pub fn new() -> MemoryStore {
        MemoryStore::default()
    }
}

impl RunStore for MemoryStore {
    fn put(&mut self, slot: RunSlot, run: &Run) -> EngineResult<()> {
        self.slots.insert((slot, run.id.clone()), run.clone());
        Ok(())
    }

    fn get(&self, slot: RunSlot, run_id: &str) -> EngineResult<Run> {
        self.slots
            .get(&(slot, run_id.to_string()))
            .cloned()
            .ok_or_else(|| NotFoundError::Run(run_id.to_string()).into())
    }

    fn list_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self
            .slots
            .keys()
            .filter(|(slot, _)| *slot == RunSlot::Live)
            .map(|(_, id)| id.clone())
            .collect();
        ids.sort();
        ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::run::Battle;
    use pretty_assertions::assert_eq;

    fn live_run(store: &mut MemoryStore) -> Run {
        let run = Run::new("r1", "MyRun", "Red", 1, "Nuzlocke").unwrap();
        store.put(RunSlot::Live, &run).unwrap();
        run
    }

    #[test]
    fn test_load_counts_a_restart() {
        let mut store = MemoryStore::new();
        live_run(&mut store);
        save_run(&mut store, "r1").unwrap();

        let restored = load_run(&mut store, "r1").unwrap();
        assert_eq!(restored.restarts, 1);
        let live = store.get(RunSlot::Live, "r1").unwrap();
        assert_eq!(live.restarts, 1);
    }

    #[test]
    fn test_load_without_checkpoint_fails() {
        let mut store = MemoryStore::new();
        live_run(&mut store);
        assert!(load_run(&mut store, "r1").is_err());
    }

    #[test]
    fn test_finish_requires_every_mandatory_battle() {
        let mut store = MemoryStore::new();
        let mut run = live_run(&mut store);
        assert!(finish_run(&mut store, "r1").is_err());

        let game = get_game("Red").unwrap();
        for opponent in game.gyms.iter().chain(game.elite_four.iter()) {
            run.add_battle(Battle {
                opponent: opponent.clone(),
                won: true,
            });
        }
        store.put(RunSlot::Live, &run).unwrap();

        let finished = finish_run(&mut store, "r1").unwrap();
        assert!(finished.finished);
        assert!(finish_run(&mut store, "r1").is_err());
    }
}
