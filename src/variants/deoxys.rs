use crate::run::ExtraInfo;
use crate::variants::{base, Variant};
use schema::SpeciesData;

/// The run is fought with Deoxys' forms, seeded at creation with the base
/// form as the starter.
pub struct DeoxysVariant;

pub const DEOXYS_NAME: &str = "Deoxyslocke";

/// The four forms, seeded as separate creatures at run creation. The base
/// form always leads.
pub const DEOXYS_FORMS: &[&str] = &[
    "Deoxys",
    "Deoxys Attack",
    "Deoxys Defense",
    "Deoxys Speed",
];

impl Variant for DeoxysVariant {
    fn name(&self) -> &'static str {
        DEOXYS_NAME
    }

    fn min_generation(&self) -> u8 {
        3
    }

    fn rules(&self, _extra: &ExtraInfo) -> Vec<String> {
        let mut rules = base::base_rules();
        rules.push("Only Deoxys and its forms can be used".to_string());
        rules
    }

    fn is_eligible(&self, species: &SpeciesData, _extra: &ExtraInfo) -> bool {
        DEOXYS_FORMS.contains(&species.name.as_str())
    }
}
