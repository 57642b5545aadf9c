use crate::actions::ActionName;
use crate::run::ExtraInfo;
use crate::variants::{base, StepInfo, Variant};
use schema::SpeciesData;

/// One creature per type, all seeded at creation. The roster is the run:
/// nothing is caught and nobody leaves the squad rotation by choice.
pub struct StarVariant;

pub const STAR_NAME: &str = "Starlocke";
/// Wizard key holding the type whose creature leads the run.
pub const STARTER_TYPE_KEY: &str = "starter";

impl Variant for StarVariant {
    fn name(&self) -> &'static str {
        STAR_NAME
    }

    fn rules(&self, _extra: &ExtraInfo) -> Vec<String> {
        let mut rules = base::base_rules();
        rules.push("The roster holds exactly one pokemon per type".to_string());
        rules.push("No pokemon is caught after the run starts".to_string());
        rules
    }

    fn pipeline(&self, generation: u8, _extra: &ExtraInfo) -> Vec<StepInfo> {
        base::base_pipeline(generation)
            .into_iter()
            .filter(|step| {
                step.action != ActionName::RemoveFromSquad
                    && step.action != ActionName::ReplaceSquadMember
            })
            .collect()
    }

    fn is_eligible(&self, _species: &SpeciesData, _extra: &ExtraInfo) -> bool {
        false
    }
}
