use crate::actions::{Action, ActionCtx, ActionName, ActionOptions, ExecutionOutcome};
use crate::creature::Creature;
use crate::errors::EngineResult;
use crate::run::Run;

/// Send a squad member back to storage. Never offered to the last member,
/// since an active run must keep at least one creature fielded.
pub struct RemoveFromSquad;

impl Action for RemoveFromSquad {
    fn name(&self) -> ActionName {
        ActionName::RemoveFromSquad
    }

    fn is_relevant(&self, _ctx: &ActionCtx, run: &Run, creature: &Creature) -> bool {
        run.squad.is_member(&creature.id) && !run.squad.is_last_member(&creature.id)
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
        run.creature(creature_id)?;
        run.squad.remove(creature_id)?;
        Ok(ExecutionOutcome::updated(vec![creature_id.to_string()]))
    }
}
