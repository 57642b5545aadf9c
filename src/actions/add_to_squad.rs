use crate::actions::{Action, ActionCtx, ActionName, ActionOptions, ExecutionOutcome};
use crate::creature::Creature;
use crate::errors::{precondition, EngineResult};
use crate::run::Run;

/// Move a boxed creature into the squad. Only offered while the squad has
/// room; a full squad routes the caller to `ReplaceSquadMember` instead.
pub struct AddToSquad;

impl Action for AddToSquad {
    fn name(&self) -> ActionName {
        ActionName::AddToSquad
    }

    fn is_relevant(&self, _ctx: &ActionCtx, run: &Run, creature: &Creature) -> bool {
        creature.is_alive() && !run.squad.is_member(&creature.id) && !run.squad.is_full()
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
        let creature = run.creature(creature_id)?;
        if !creature.is_alive() {
            return Err(precondition(format!(
                "{} is dead and can't join the squad",
                creature.display_name()
            )));
        }
        run.squad.add(creature_id)?;
        Ok(ExecutionOutcome::updated(vec![creature_id.to_string()]))
    }
}
