use crate::actions::{require_choice, Action, ActionCtx, ActionName, ActionOptions, ExecutionOutcome};
use crate::creature::Creature;
use crate::errors::{EngineError, EngineResult};
use crate::run::Run;
use schema::Gender;

/// Record the gender the game rolled for a creature. The choice set comes
/// from the species record, so genderless lines present exactly one option.
pub struct ChooseGender;

impl Action for ChooseGender {
    fn name(&self) -> ActionName {
        ActionName::ChooseGender
    }

    fn is_relevant(&self, _ctx: &ActionCtx, _run: &Run, creature: &Creature) -> bool {
        creature.is_alive() && creature.gender.is_none()
    }

    fn options(
        &self,
        _ctx: &ActionCtx,
        _run: &Run,
        creature: &Creature,
    ) -> EngineResult<ActionOptions> {
        let choices = creature
            .species
            .supported_genders
            .iter()
            .map(|g| g.to_string())
            .collect();
        Ok(ActionOptions::OneOf(choices))
    }

    fn execute(
        &self,
        _ctx: &ActionCtx,
        run: &mut Run,
        creature_id: &str,
        value: Option<&str>,
    ) -> EngineResult<ExecutionOutcome> {
        let creature = run.creature(creature_id)?;
        let choices: Vec<String> = creature
            .species
            .supported_genders
            .iter()
            .map(|g| g.to_string())
            .collect();
        let value = require_choice(value, &choices)?;
        let gender = match value {
            "Male" => Gender::Male,
            "Female" => Gender::Female,
            "Genderless" => Gender::Genderless,
            other => {
                return Err(EngineError::Validation(format!(
                    "{} is not a gender",
                    other
                )))
            }
        };
        run.creature_mut(creature_id)?.gender = Some(gender);
        Ok(ExecutionOutcome::updated(vec![creature_id.to_string()]))
    }
}
