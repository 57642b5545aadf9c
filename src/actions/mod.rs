use crate::creature::Creature;
use crate::dex::Pokedex;
use crate::errors::{EngineError, EngineResult, NotFoundError};
use crate::run::Run;
use serde::{Deserialize, Serialize};
use std::fmt;

pub mod add_to_squad;
pub mod choose_ability;
pub mod choose_gender;
pub mod choose_nature;
pub mod evolve;
pub mod kill;
pub mod nickname;
pub mod remove_from_squad;
pub mod replace_member;

/// Stable identifiers for every action the engine knows about. Variants
/// reuse these names when swapping in their own implementations, so the
/// name always identifies the user-facing operation, not the code behind
/// it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionName {
    AddToSquad,
    RemoveFromSquad,
    ReplaceSquadMember,
    Nickname,
    ChooseGender,
    ChooseNature,
    ChooseAbility,
    Evolve,
    Kill,
    PairCreature,
    AssignRole,
}

impl fmt::Display for ActionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ActionName::AddToSquad => "Add to squad",
            ActionName::RemoveFromSquad => "Remove from squad",
            ActionName::ReplaceSquadMember => "Replace squad member",
            ActionName::Nickname => "Nickname",
            ActionName::ChooseGender => "Choose gender",
            ActionName::ChooseNature => "Choose nature",
            ActionName::ChooseAbility => "Choose ability",
            ActionName::Evolve => "Evolve",
            ActionName::Kill => "Kill",
            ActionName::PairCreature => "Pair",
            ActionName::AssignRole => "Assign role",
        };
        write!(f, "{}", label)
    }
}

/// Input contract an action presents to the caller before execution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ActionOptions {
    /// No input: the action either applies or it doesn't.
    None,
    /// The caller must pick exactly one of the listed values.
    OneOf(Vec<String>),
    /// The caller supplies arbitrary non-empty text.
    FreeText,
}

impl ActionOptions {
    /// An empty choice list means there is nothing to pick; the engine
    /// treats executing such an action as a no-op rather than an error.
    pub fn is_skippable(&self) -> bool {
        matches!(self, ActionOptions::OneOf(choices) if choices.is_empty())
    }
}

/// What an execution did: which creatures changed, and whether the run was
/// lost as a consequence.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExecutionOutcome {
    /// Ids of every creature whose state changed.
    pub updated: Vec<String>,
    /// Set when the execution ended the run (the challenge is lost, not
    /// failed: no error is raised and all mutations stand).
    pub blackout: bool,
}

impl ExecutionOutcome {
    pub fn updated(ids: Vec<String>) -> ExecutionOutcome {
        ExecutionOutcome {
            updated: ids,
            blackout: false,
        }
    }

    pub fn blackout(ids: Vec<String>) -> ExecutionOutcome {
        ExecutionOutcome {
            updated: ids,
            blackout: true,
        }
    }
}

/// Read-only collaborators an action may consult.
pub struct ActionCtx<'a> {
    pub dex: &'a dyn Pokedex,
}

/// One operation on one creature within a run.
///
/// The three methods form a protocol: `is_relevant` gates visibility,
/// `options` describes the required input, `execute` performs the change.
/// `execute` must leave the run untouched when it returns an error.
pub trait Action: Sync {
    fn name(&self) -> ActionName;

    /// Whether this action currently applies to the creature at all.
    fn is_relevant(&self, ctx: &ActionCtx, run: &Run, creature: &Creature) -> bool;

    /// The input contract for executing this action on the creature.
    fn options(&self, ctx: &ActionCtx, run: &Run, creature: &Creature)
        -> EngineResult<ActionOptions>;

    /// Apply the action. `value` carries the caller's input and must agree
    /// with the contract `options` returned.
    fn execute(
        &self,
        ctx: &ActionCtx,
        run: &mut Run,
        creature_id: &str,
        value: Option<&str>,
    ) -> EngineResult<ExecutionOutcome>;
}

/// Resolve a name to the built-in implementation. `PairCreature` and
/// `AssignRole` exist only inside the variants that define them, so the
/// built-in table does not carry them.
pub fn builtin(name: ActionName) -> EngineResult<&'static dyn Action> {
    match name {
        ActionName::AddToSquad => Ok(&add_to_squad::AddToSquad),
        ActionName::RemoveFromSquad => Ok(&remove_from_squad::RemoveFromSquad),
        ActionName::ReplaceSquadMember => Ok(&replace_member::ReplaceSquadMember),
        ActionName::Nickname => Ok(&nickname::Nickname),
        ActionName::ChooseGender => Ok(&choose_gender::ChooseGender),
        ActionName::ChooseNature => Ok(&choose_nature::ChooseNature),
        ActionName::ChooseAbility => Ok(&choose_ability::ChooseAbility),
        ActionName::Evolve => Ok(&evolve::Evolve),
        ActionName::Kill => Ok(&kill::Kill),
        ActionName::PairCreature | ActionName::AssignRole => {
            Err(NotFoundError::Action(name.to_string()).into())
        }
    }
}

/// Validate a submitted value against a one-of contract and return it.
pub(crate) fn require_choice<'v>(
    value: Option<&'v str>,
    choices: &[String],
) -> EngineResult<&'v str> {
    let value = value.ok_or_else(|| {
        EngineError::Precondition("this action requires a chosen value".to_string())
    })?;
    if !choices.iter().any(|choice| choice == value) {
        return Err(EngineError::Precondition(format!(
            "{} is not one of the allowed choices",
            value
        )));
    }
    Ok(value)
}

/// Validate a submitted value against a free-text contract.
pub(crate) fn require_text(value: Option<&str>) -> EngineResult<&str> {
    match value {
        Some(text) if !text.trim().is_empty() => Ok(text),
        _ => Err(EngineError::Validation(
            "this action requires non-empty text".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_table_covers_builtin_names() {
        for name in [
            ActionName::AddToSquad,
            ActionName::RemoveFromSquad,
            ActionName::ReplaceSquadMember,
            ActionName::Nickname,
            ActionName::ChooseGender,
            ActionName::ChooseNature,
            ActionName::ChooseAbility,
            ActionName::Evolve,
            ActionName::Kill,
        ] {
            assert_eq!(builtin(name).unwrap().name(), name);
        }
        assert!(builtin(ActionName::PairCreature).is_err());
        assert!(builtin(ActionName::AssignRole).is_err());
    }

    #[test]
    fn test_require_choice_rejects_outsiders() {
        let choices = vec!["Male".to_string(), "Female".to_string()];
        assert_eq!(require_choice(Some("Male"), &choices).unwrap(), "Male");
        assert!(require_choice(Some("Mystery"), &choices).is_err());
        assert!(require_choice(None, &choices).is_err());
    }

    #[test]
    fn test_empty_one_of_is_skippable() {
        assert!(ActionOptions::OneOf(vec![]).is_skippable());
        assert!(!ActionOptions::OneOf(vec!["x".to_string()]).is_skippable());
        assert!(!ActionOptions::FreeText.is_skippable());
        assert!(!ActionOptions::None.is_skippable());
    }
}
