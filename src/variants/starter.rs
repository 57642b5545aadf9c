use crate::run::ExtraInfo;
use crate::variants::{base, Variant};
use schema::SpeciesData;

/// The run is fought with starter pokemon only: every starter from the
/// game's generation back to the first is seeded at creation.
pub struct StarterVariant;

pub const STARTER_NAME: &str = "Starterlocke";

impl Variant for StarterVariant {
    fn name(&self) -> &'static str {
        STARTER_NAME
    }

    fn rules(&self, _extra: &ExtraInfo) -> Vec<String> {
        let mut rules = base::base_rules();
        rules.push("Only starter pokemon can be used".to_string());
        rules
    }

    fn is_eligible(&self, _species: &SpeciesData, _extra: &ExtraInfo) -> bool {
        false
    }
}
