use crate::run::ExtraInfo;
use crate::variants::{base, Variant};
use schema::{Color, SpeciesData};

/// Only species of one chosen body color may be caught.
pub struct ColorVariant;

pub const COLOR_NAME: &str = "Colorlocke";
/// Wizard key holding the chosen color's display name.
pub const COLOR_KEY: &str = "color";

fn parse_color(value: &str) -> Option<Color> {
    Color::all().into_iter().find(|c| c.to_string() == value)
}

impl Variant for ColorVariant {
    fn name(&self) -> &'static str {
        COLOR_NAME
    }

    fn rules(&self, extra: &ExtraInfo) -> Vec<String> {
        let chosen = extra.get(COLOR_KEY).cloned().unwrap_or_default();
        let mut rules = base::base_rules();
        rules.push(format!("Only pokemon of color {} can be caught", chosen));
        rules
    }

    fn is_eligible(&self, species: &SpeciesData, extra: &ExtraInfo) -> bool {
        extra
            .get(COLOR_KEY)
            .and_then(|value| parse_color(value))
            .map(|c| species.colors.contains(&c))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color() {
        assert_eq!(parse_color("Pink"), Some(Color::Pink));
        assert_eq!(parse_color("Magenta"), None);
    }
}
