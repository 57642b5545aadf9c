use crate::actions::ActionName;
use crate::variants::{StepInfo, Variant};

/// The plain challenge ruleset every other variant builds on.
pub struct BaseVariant;

pub const BASE_NAME: &str = "Nuzlocke";

/// The three ground rules shared by every variant.
pub fn base_rules() -> Vec<String> {
    vec![
        "Name each pokemon".to_string(),
        "Catch 1st encounter".to_string(),
        "Fainted pokemon considered dead".to_string(),
    ]
}

/// Actions every creature must complete before the free-form ones unlock.
pub fn mandatory_actions(generation: u8) -> Vec<ActionName> {
    let mut actions = vec![ActionName::Nickname, ActionName::ChooseGender];
    if generation >= 3 {
        actions.push(ActionName::ChooseNature);
        actions.push(ActionName::ChooseAbility);
    }
    actions
}

/// The default pipeline: bookkeeping first, then squad moves, then the
/// consequential actions gated behind the bookkeeping.
pub fn base_pipeline(generation: u8) -> Vec<StepInfo> {
    let mandatory = mandatory_actions(generation);
    let mut pipeline = vec![
        StepInfo::new(ActionName::Nickname),
        StepInfo::new(ActionName::ChooseGender),
    ];
    if generation >= 3 {
        pipeline.push(StepInfo::gated(
            ActionName::ChooseNature,
            vec![ActionName::ChooseGender],
        ));
        pipeline.push(StepInfo::gated(
            ActionName::ChooseAbility,
            vec![ActionName::ChooseNature],
        ));
    }
    pipeline.push(StepInfo::new(ActionName::AddToSquad));
    pipeline.push(StepInfo::new(ActionName::RemoveFromSquad));
    pipeline.push(StepInfo::new(ActionName::ReplaceSquadMember));
    pipeline.push(StepInfo::gated(ActionName::Evolve, mandatory.clone()));
    pipeline.push(StepInfo::gated(ActionName::Kill, mandatory));
    pipeline
}

impl Variant for BaseVariant {
    fn name(&self) -> &'static str {
        BASE_NAME
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_early_generations_skip_nature_and_ability() {
        let pipeline = base_pipeline(1);
        let actions: Vec<ActionName> = pipeline.iter().map(|s| s.action).collect();
        assert!(!actions.contains(&ActionName::ChooseNature));
        assert!(!actions.contains(&ActionName::ChooseAbility));
        assert_eq!(mandatory_actions(2).len(), 2);
    }

    #[test]
    fn test_generation_three_gates_ability_behind_nature() {
        let pipeline = base_pipeline(3);
        let ability = pipeline
            .iter()
            .find(|s| s.action == ActionName::ChooseAbility)
            .unwrap();
        assert_eq!(ability.prerequisites, vec![ActionName::ChooseNature]);
        assert_eq!(mandatory_actions(3).len(), 4);
    }

    #[test]
    fn test_kill_waits_for_bookkeeping() {
        let pipeline = base_pipeline(1);
        let kill = pipeline
            .iter()
            .find(|s| s.action == ActionName::Kill)
            .unwrap();
        assert_eq!(
            kill.prerequisites,
            vec![ActionName::Nickname, ActionName::ChooseGender]
        );
    }
}
