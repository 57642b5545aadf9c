use crate::actions::{require_text, Action, ActionCtx, ActionName, ActionOptions, ExecutionOutcome};
use crate::creature::Creature;
use crate::errors::EngineResult;
use crate::run::Run;

/// Give a creature its one and only nickname.
pub struct Nickname;

impl Action for Nickname {
    fn name(&self) -> ActionName {
        ActionName::Nickname
    }

    fn is_relevant(&self, _ctx: &ActionCtx, _run: &Run, creature: &Creature) -> bool {
        creature.is_alive() && creature.nickname.is_none()
    }

    fn options(
        &self,
        _ctx: &ActionCtx,
        _run: &Run,
        _creature: &Creature,
    ) -> EngineResult<ActionOptions> {
        Ok(ActionOptions::FreeText)
    }

    fn execute(
        &self,
        _ctx: &ActionCtx,
        run: &mut Run,
        creature_id: &str,
        value: Option<&str>,
    ) -> EngineResult<ExecutionOutcome> {
        let name = require_text(value)?.to_string();
        let creature = run.creature_mut(creature_id)?;
        creature.nickname = Some(name);
        Ok(ExecutionOutcome::updated(vec![creature_id.to_string()]))
    }
}
