use crate::actions::{require_choice, Action, ActionCtx, ActionName, ActionOptions, ExecutionOutcome};
use crate::creature::Creature;
use crate::errors::{EngineError, EngineResult};
use crate::run::Run;
use schema::Nature;

/// Record a creature's nature. Natures only exist from generation 3 on, so
/// earlier runs never see this action.
pub struct ChooseNature;

impl Action for ChooseNature {
    fn name(&self) -> ActionName {
        ActionName::ChooseNature
    }

    fn is_relevant(&self, _ctx: &ActionCtx, run: &Run, creature: &Creature) -> bool {
        run.generation >= 3 && creature.is_alive() && creature.nature.is_none()
    }

    fn options(
        &self,
        _ctx: &ActionCtx,
        _run: &Run,
        _creature: &Creature,
    ) -> EngineResult<ActionOptions> {
        let choices = Nature::all().iter().map(|n| n.to_string()).collect();
        Ok(ActionOptions::OneOf(choices))
    }

    fn execute(
        &self,
        _ctx: &ActionCtx,
        run: &mut Run,
        creature_id: &str,
        value: Option<&str>,
    ) -> EngineResult<ExecutionOutcome> {
        run.creature(creature_id)?;
        let choices: Vec<String> = Nature::all().iter().map(|n| n.to_string()).collect();
        let value = require_choice(value, &choices)?;
        let nature = Nature::all()
            .into_iter()
            .find(|n| n.to_string() == value)
            .ok_or_else(|| EngineError::Validation(format!("{} is not a nature", value)))?;
        run.creature_mut(creature_id)?.nature = Some(nature);
        Ok(ExecutionOutcome::updated(vec![creature_id.to_string()]))
    }
}
