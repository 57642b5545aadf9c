use crate::run::ExtraInfo;
use crate::variants::{base, parse_type, Variant};
use schema::SpeciesData;

/// Only species carrying one chosen type may be caught.
pub struct MonoVariant;

pub const MONO_NAME: &str = "Monolocke";
/// Wizard key holding the chosen type's display name.
pub const TYPE_KEY: &str = "type";

impl Variant for MonoVariant {
    fn name(&self) -> &'static str {
        MONO_NAME
    }

    fn rules(&self, extra: &ExtraInfo) -> Vec<String> {
        let chosen = extra.get(TYPE_KEY).cloned().unwrap_or_default();
        let mut rules = base::base_rules();
        rules.push(format!("Only pokemon of type {} can be caught", chosen));
        rules
    }

    fn is_eligible(&self, species: &SpeciesData, extra: &ExtraInfo) -> bool {
        extra
            .get(TYPE_KEY)
            .and_then(|value| parse_type(value))
            .map(|t| species.has_type(t))
            .unwrap_or(false)
    }
}
