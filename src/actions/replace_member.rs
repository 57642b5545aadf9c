use crate::actions::{require_choice, Action, ActionCtx, ActionName, ActionOptions, ExecutionOutcome};
use crate::creature::Creature;
use crate::errors::{precondition, EngineResult};
use crate::run::Run;

/// Swap a boxed creature in for a current squad member in one step. Offered
/// only while the squad is full; with room available, `AddToSquad` and
/// `RemoveFromSquad` cover the same ground as two separate moves.
pub struct ReplaceSquadMember;

impl Action for ReplaceSquadMember {
    fn name(&self) -> ActionName {
        ActionName::ReplaceSquadMember
    }

    fn is_relevant(&self, _ctx: &ActionCtx, run: &Run, creature: &Creature) -> bool {
        creature.is_alive() && !run.squad.is_member(&creature.id) && run.squad.is_full()
    }

    fn options(
        &self,
        _ctx: &ActionCtx,
        run: &Run,
        _creature: &Creature,
    ) -> EngineResult<ActionOptions> {
        Ok(ActionOptions::OneOf(run.squad.members().to_vec()))
    }

    fn execute(
        &self,
        _ctx: &ActionCtx,
        run: &mut Run,
        creature_id: &str,
        value: Option<&str>,
    ) -> EngineResult<ExecutionOutcome> {
        let incoming = run.creature(creature_id)?;
        if !incoming.is_alive() {
            return Err(precondition(format!(
                "{} is dead and can't join the squad",
                incoming.display_name()
            )));
        }
        if run.squad.is_member(creature_id) {
            return Err(precondition("creature is already a squad member"));
        }
        let choices = run.squad.members().to_vec();
        let outgoing = require_choice(value, &choices)?.to_string();

        // With a full squad the member must leave first to make room; with
        // room to spare, adding first keeps the squad non-empty throughout.
        if run.squad.is_full() {
            run.squad.remove(&outgoing)?;
            run.squad.add(creature_id)?;
        } else {
            run.squad.add(creature_id)?;
            run.squad.remove(&outgoing)?;
        }
        Ok(ExecutionOutcome::updated(vec![
            creature_id.to_string(),
            outgoing,
        ]))
    }
}
