use crate::actions::{require_choice, Action, ActionCtx, ActionName, ActionOptions, ExecutionOutcome};
use crate::creature::Creature;
use crate::errors::EngineResult;
use crate::run::Run;

/// Advance a creature to the next stage of its evolution line. Targets are
/// limited to species that exist in the run's generation.
pub struct Evolve;

/// Evolution targets reachable within the run's generation.
pub fn available_targets(ctx: &ActionCtx, run: &Run, creature: &Creature) -> Vec<String> {
    creature
        .species
        .evolves_to
        .iter()
        .filter(|name| ctx.dex.species(name, run.generation).is_ok())
        .cloned()
        .collect()
}

impl Action for Evolve {
    fn name(&self) -> ActionName {
        ActionName::Evolve
    }

    fn is_relevant(&self, ctx: &ActionCtx, run: &Run, creature: &Creature) -> bool {
        creature.is_alive() && !available_targets(ctx, run, creature).is_empty()
    }

    fn options(
        &self,
        ctx: &ActionCtx,
        run: &Run,
        creature: &Creature,
    ) -> EngineResult<ActionOptions> {
        Ok(ActionOptions::OneOf(available_targets(ctx, run, creature)))
    }

    fn execute(
        &self,
        ctx: &ActionCtx,
        run: &mut Run,
        creature_id: &str,
        value: Option<&str>,
    ) -> EngineResult<ExecutionOutcome> {
        let creature = run.creature(creature_id)?;
        let choices = available_targets(ctx, run, creature);
        let target_name = require_choice(value, &choices)?;
        let target = ctx.dex.species(target_name, run.generation)?;
        run.creature_mut(creature_id)?.evolve_into(target);
        Ok(ExecutionOutcome::updated(vec![creature_id.to_string()]))
    }
}
