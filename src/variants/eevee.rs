use crate::actions::{builtin, Action, ActionCtx, ActionName, ActionOptions, ExecutionOutcome};
use crate::creature::Creature;
use crate::errors::{precondition, EngineResult};
use crate::run::{ExtraInfo, Run};
use crate::variants::{base, Variant};
use schema::SpeciesData;

/// Eevee and its evolutions are the only usable species. Each form joins
/// as its own catch, so in-run evolution is switched off entirely.
pub struct EeveeVariant;

pub const EEVEE_NAME: &str = "Eeveelocke";

/// The whole family across generations 1 to 3.
pub const EEVEE_FAMILY: &[&str] = &[
    "Eevee", "Vaporeon", "Jolteon", "Flareon", "Espeon", "Umbreon",
];

struct DisabledEvolve;

impl Action for DisabledEvolve {
    fn name(&self) -> ActionName {
        ActionName::Evolve
    }

    fn is_relevant(&self, _ctx: &ActionCtx, _run: &Run, _creature: &Creature) -> bool {
        false
    }

    fn options(
        &self,
        _ctx: &ActionCtx,
        _run: &Run,
        _creature: &Creature,
    ) -> EngineResult<ActionOptions> {
        Ok(ActionOptions::OneOf(Vec::new()))
    }

    fn execute(
        &self,
        _ctx: &ActionCtx,
        _run: &mut Run,
        _creature_id: &str,
        _value: Option<&str>,
    ) -> EngineResult<ExecutionOutcome> {
        Err(precondition("evolution is disabled in this challenge"))
    }
}

impl Variant for EeveeVariant {
    fn name(&self) -> &'static str {
        EEVEE_NAME
    }

    fn rules(&self, _extra: &ExtraInfo) -> Vec<String> {
        let mut rules = base::base_rules();
        rules.push("Only Eevee and its evolutions can be used".to_string());
        rules.push("Each evolution joins as its own pokemon; evolving is forbidden".to_string());
        rules
    }

    fn action(&self, name: ActionName, _extra: &ExtraInfo) -> EngineResult<&'static dyn Action> {
        match name {
            ActionName::Evolve => Ok(&DisabledEvolve),
            other => builtin(other),
        }
    }

    fn is_eligible(&self, species: &SpeciesData, _extra: &ExtraInfo) -> bool {
        EEVEE_FAMILY.contains(&species.name.as_str())
    }
}
