use crate::actions::{Action, ActionCtx, ActionName};
use crate::errors::EngineResult;
use crate::run::{ExtraInfo, Run};
use crate::variants::base::BaseVariant;
use crate::variants::registry::get_variant;
use crate::variants::{StepInfo, Variant};
use schema::SpeciesData;

/// A multi-game campaign: one inner ruleset, chosen per run, is applied
/// across each game generation in sequence. Everything but the rule text
/// is delegated to the chosen ruleset.
pub struct GenVariant;

pub const GEN_NAME: &str = "Genlocke";
/// Wizard key naming the inner ruleset this campaign applies.
pub const SELECTED_KEY: &str = "_selected_locke";

static FALLBACK: BaseVariant = BaseVariant;

fn inner(extra: &ExtraInfo) -> &'static dyn Variant {
    extra
        .get(SELECTED_KEY)
        .filter(|name| name.as_str() != GEN_NAME)
        .and_then(|name| get_variant(name).ok())
        .unwrap_or(&FALLBACK)
}

impl Variant for GenVariant {
    fn name(&self) -> &'static str {
        GEN_NAME
    }

    fn rules(&self, extra: &ExtraInfo) -> Vec<String> {
        let mut rules = vec!["For each game generation, apply the next rules:".to_string()];
        rules.extend(inner(extra).rules(extra));
        rules
    }

    fn pipeline(&self, generation: u8, extra: &ExtraInfo) -> Vec<StepInfo> {
        inner(extra).pipeline(generation, extra)
    }

    fn action(&self, name: ActionName, extra: &ExtraInfo) -> EngineResult<&'static dyn Action> {
        inner(extra).action(name, extra)
    }

    fn is_eligible(&self, species: &SpeciesData, extra: &ExtraInfo) -> bool {
        inner(extra).is_eligible(species, extra)
    }

    fn on_capture(
        &self,
        ctx: &ActionCtx,
        run: &mut Run,
        creature_id: &str,
    ) -> EngineResult<Vec<String>> {
        let extra = run.extra_info.clone();
        inner(&extra).on_capture(ctx, run, creature_id)
    }
}
