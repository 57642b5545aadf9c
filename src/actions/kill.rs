use crate::actions::{Action, ActionCtx, ActionName, ActionOptions, ExecutionOutcome};
use crate::creature::Creature;
use crate::errors::EngineResult;
use crate::run::Run;

/// Mark a fainted creature as dead. Dead creatures stay in storage forever
/// but leave the squad; losing the last squad member loses the run.
pub struct Kill;

/// Flip the creature to dead and pull it from the squad. Returns true when
/// the death emptied the squad, which ends the run.
pub fn kill_creature(run: &mut Run, creature_id: &str) -> EngineResult<bool> {
    run.creature_mut(creature_id)?.status = crate::creature::CreatureStatus::Dead;
    if run.squad.is_member(creature_id) {
        if run.squad.is_last_member(creature_id) {
            // The dead creature stays listed; the run is over, so the
            // never-empty rule has nothing left to protect.
            run.finish();
            return Ok(true);
        }
        run.squad.remove(creature_id)?;
    }
    Ok(false)
}

impl Action for Kill {
    fn name(&self) -> ActionName {
        ActionName::Kill
    }

    fn is_relevant(&self, _ctx: &ActionCtx, _run: &Run, creature: &Creature) -> bool {
        creature.is_alive()
    }

    fn options(
        &self,
        _ctx: &ActionCtx,
        _run: &Run,
        _creature: &Creature,
    ) -> EngineResult<ActionOptions> {
        Ok(ActionOptions::None)
    }

    fn execute(
        &self,
        _ctx: &ActionCtx,
        run: &mut Run,
        creature_id: &str,
        _value: Option<&str>,
    ) -> EngineResult<ExecutionOutcome> {
        let blackout = kill_creature(run, creature_id)?;
        let outcome = if blackout {
            ExecutionOutcome::blackout(vec![creature_id.to_string()])
        } else {
            ExecutionOutcome::updated(vec![creature_id.to_string()])
        };
        Ok(outcome)
    }
}
