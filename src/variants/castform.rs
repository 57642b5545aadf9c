use crate::run::ExtraInfo;
use crate::variants::{base, Variant};
use schema::SpeciesData;

/// The whole run is fought with Castform's weather forms, seeded at
/// creation. Wild encounters stay off-limits.
pub struct CastformVariant;

pub const CASTFORM_NAME: &str = "Castformlocke";

/// The four forms, seeded as separate creatures at run creation.
pub const CASTFORM_FORMS: &[&str] = &[
    "Castform",
    "Castform Sunny",
    "Castform Rainy",
    "Castform Snowy",
];

impl Variant for CastformVariant {
    fn name(&self) -> &'static str {
        CASTFORM_NAME
    }

    fn min_generation(&self) -> u8 {
        3
    }

    fn rules(&self, _extra: &ExtraInfo) -> Vec<String> {
        let mut rules = base::base_rules();
        rules.push("Only Castform and its weather forms can be used".to_string());
        rules
    }

    fn is_eligible(&self, species: &SpeciesData, _extra: &ExtraInfo) -> bool {
        CASTFORM_FORMS.contains(&species.name.as_str())
    }
}
