use crate::run::ExtraInfo;
use crate::variants::{base, Variant};
use schema::{Category, SpeciesData};

/// Only species from one chosen thematic category may be caught.
pub struct CategoryVariant;

pub const CATEGORY_NAME: &str = "Categorylocke";
/// Wizard key holding the chosen category's display name.
pub const CATEGORY_KEY: &str = "category";

fn parse_category(value: &str) -> Option<Category> {
    Category::all().into_iter().find(|c| c.to_string() == value)
}

impl Variant for CategoryVariant {
    fn name(&self) -> &'static str {
        CATEGORY_NAME
    }

    fn rules(&self, extra: &ExtraInfo) -> Vec<String> {
        let chosen = extra.get(CATEGORY_KEY).cloned().unwrap_or_default();
        let mut rules = base::base_rules();
        rules.push(format!(
            "Only pokemon of category {} can be caught",
            chosen
        ));
        rules
    }

    fn is_eligible(&self, species: &SpeciesData, extra: &ExtraInfo) -> bool {
        extra
            .get(CATEGORY_KEY)
            .and_then(|value| parse_category(value))
            .map(|c| species.categories.contains(&c))
            .unwrap_or(false)
    }
}
