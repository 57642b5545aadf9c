use crate::run::ExtraInfo;
use crate::variants::{base, Variant};
use schema::SpeciesData;

/// Only species with one chosen leg count may be caught.
pub struct LegVariant;

pub const LEG_NAME: &str = "Leglocke";
/// Wizard key holding the chosen leg count as decimal text.
pub const LEGS_KEY: &str = "legs";

impl Variant for LegVariant {
    fn name(&self) -> &'static str {
        LEG_NAME
    }

    fn rules(&self, extra: &ExtraInfo) -> Vec<String> {
        let chosen = extra.get(LEGS_KEY).cloned().unwrap_or_default();
        let mut rules = base::base_rules();
        rules.push(format!("Only pokemon with {} legs can be caught", chosen));
        rules
    }

    fn is_eligible(&self, species: &SpeciesData, extra: &ExtraInfo) -> bool {
        extra
            .get(LEGS_KEY)
            .and_then(|value| value.parse::<u8>().ok())
            .map(|legs| species.num_legs == legs)
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use schema::Gender;

    #[test]
    fn test_leg_count_must_match_exactly() {
        let species = SpeciesData {
            pokedex_number: 16,
            name: "Pidgey".to_string(),
            generation: 1,
            types: vec![],
            supported_genders: vec![Gender::Male, Gender::Female],
            abilities: vec![],
            colors: vec![],
            categories: vec![],
            num_legs: 2,
            evolves_to: vec![],
        };
        let mut extra = ExtraInfo::new();
        extra.insert(LEGS_KEY.to_string(), "2".to_string());
        assert!(LegVariant.is_eligible(&species, &extra));

        extra.insert(LEGS_KEY.to_string(), "4".to_string());
        assert!(!LegVariant.is_eligible(&species, &extra));

        extra.insert(LEGS_KEY.to_string(), "two".to_string());
        assert!(!LegVariant.is_eligible(&species, &extra));
    }
}
