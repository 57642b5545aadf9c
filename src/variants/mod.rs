use crate::actions::{builtin, Action, ActionCtx, ActionName};
use crate::errors::EngineResult;
use crate::run::{ExtraInfo, Run};
use schema::{PokemonType, SpeciesData};

pub mod base;
pub mod castform;
pub mod category;
pub mod chess;
pub mod color;
pub mod deoxys;
pub mod eevee;
pub mod genlocke;
pub mod leg;
pub mod mono;
pub mod registry;
pub mod star;
pub mod starter;
pub mod unique;
pub mod wed;
pub mod wrap;

pub use registry::{get_variant, variant_names};

/// One slot in a variant's action pipeline. An action becomes available
/// only once every prerequisite action has stopped being relevant for the
/// creature, which lets a variant stage mandatory bookkeeping ahead of
/// free-form moves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepInfo {
    pub action: ActionName,
    pub prerequisites: Vec<ActionName>,
}

impl StepInfo {
    pub fn new(action: ActionName) -> StepInfo {
        StepInfo {
            action,
            prerequisites: Vec::new(),
        }
    }

    pub fn gated(action: ActionName, prerequisites: Vec<ActionName>) -> StepInfo {
        StepInfo {
            action,
            prerequisites,
        }
    }
}

/// A ruleset governing a run: which rules the player follows, which
/// actions exist and in what order they unlock, which species may join,
/// and what happens on capture.
///
/// Implementations are stateless statics; anything run-specific comes in
/// through the `ExtraInfo` collected by the creation wizard.
pub trait Variant: Sync {
    /// Registry name, also stored on every run this variant governs.
    fn name(&self) -> &'static str;

    /// Earliest game generation the variant makes sense in.
    fn min_generation(&self) -> u8 {
        1
    }

    /// Human-readable rules, worth re-reading mid-run.
    fn rules(&self, _extra: &ExtraInfo) -> Vec<String> {
        base::base_rules()
    }

    /// The action pipeline for this variant in the given generation.
    fn pipeline(&self, generation: u8, _extra: &ExtraInfo) -> Vec<StepInfo> {
        base::base_pipeline(generation)
    }

    /// Resolve an action name to this variant's implementation of it.
    fn action(&self, name: ActionName, _extra: &ExtraInfo) -> EngineResult<&'static dyn Action> {
        builtin(name)
    }

    /// Whether a wild encounter of this species may be caught.
    fn is_eligible(&self, _species: &SpeciesData, _extra: &ExtraInfo) -> bool {
        true
    }

    /// Post-capture hook, run after the creature lands in storage. The base
    /// behavior fields the newcomer whenever the squad has room. Returns the
    /// ids of every creature the hook touched.
    fn on_capture(
        &self,
        _ctx: &ActionCtx,
        run: &mut Run,
        creature_id: &str,
    ) -> EngineResult<Vec<String>> {
        if !run.squad.is_full() {
            run.squad.add(creature_id)?;
            return Ok(vec![creature_id.to_string()]);
        }
        Ok(Vec::new())
    }
}

/// Parse a type by its display name.
pub(crate) fn parse_type(value: &str) -> Option<PokemonType> {
    PokemonType::types_for_generation(u8::MAX)
        .into_iter()
        .find(|t| t.to_string() == value)
}
