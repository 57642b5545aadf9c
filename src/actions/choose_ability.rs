use crate::actions::{require_choice, Action, ActionCtx, ActionName, ActionOptions, ExecutionOutcome};
use crate::creature::Creature;
use crate::errors::EngineResult;
use crate::run::Run;

/// Record which ability a creature carries. Abilities arrived with
/// generation 3; species records from earlier generations have empty
/// ability tables and never offer this action.
pub struct ChooseAbility;

/// The abilities a creature may pick from. A randomizer can hand any
/// species any ability, so randomized runs open the choice to every
/// ability known to the generation; otherwise the species list rules.
fn ability_choices(ctx: &ActionCtx, run: &Run, creature: &Creature) -> Vec<String> {
    if run.randomized {
        let mut abilities: Vec<String> = ctx
            .dex
            .species_in_generation(run.generation)
            .into_iter()
            .flat_map(|species| species.abilities)
            .collect();
        abilities.sort_unstable();
        abilities.dedup();
        abilities
    } else {
        creature.species.abilities.clone()
    }
}

impl Action for ChooseAbility {
    fn name(&self) -> ActionName {
        ActionName::ChooseAbility
    }

    fn is_relevant(&self, _ctx: &ActionCtx, run: &Run, creature: &Creature) -> bool {
        run.generation >= 3
            && creature.is_alive()
            && creature.ability.is_none()
            && !creature.species.abilities.is_empty()
    }

    fn options(
        &self,
        ctx: &ActionCtx,
        run: &Run,
        creature: &Creature,
    ) -> EngineResult<ActionOptions> {
        Ok(ActionOptions::OneOf(ability_choices(ctx, run, creature)))
    }

    fn execute(
        &self,
        ctx: &ActionCtx,
        run: &mut Run,
        creature_id: &str,
        value: Option<&str>,
    ) -> EngineResult<ExecutionOutcome> {
        let choices = ability_choices(ctx, run, run.creature(creature_id)?);
        let value = require_choice(value, &choices)?.to_string();
        run.creature_mut(creature_id)?.ability = Some(value);
        Ok(ExecutionOutcome::updated(vec![creature_id.to_string()]))
    }
}
