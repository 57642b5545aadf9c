use crate::actions::{
    builtin, require_choice, Action, ActionCtx, ActionName, ActionOptions, ExecutionOutcome,
};
use crate::creature::Creature;
use crate::errors::{precondition, EngineResult};
use crate::run::{ExtraInfo, Run};
use crate::variants::{base, Variant};
use std::collections::HashSet;

/// The squad wraps around the capture order: the two oldest and two newest
/// living catches are locked in, and only the middle seats are free.
pub struct WrapVariant;

pub const WRAP_NAME: &str = "Wraplocke";

/// Living creatures ordered by capture, oldest first.
fn alive_by_caught_order(run: &Run) -> Vec<&Creature> {
    let mut alive: Vec<&Creature> = run
        .storage
        .alive()
        .filter(|c| c.caught_index.is_some())
        .collect();
    alive.sort_by_key(|c| c.caught_index);
    alive
}

/// Ids pinned to the squad: the two oldest and two newest living catches.
fn protected_ids(run: &Run) -> HashSet<String> {
    let alive = alive_by_caught_order(run);
    let mut protected = HashSet::new();
    for creature in alive.iter().take(2) {
        protected.insert(creature.id.clone());
    }
    for creature in alive.iter().rev().take(2) {
        protected.insert(creature.id.clone());
    }
    protected
}

/// The squad member holding the second-newest catch, the seat a fresh
/// capture pushes out of the newest-two window.
fn second_newest_member(run: &Run) -> Option<String> {
    let mut members: Vec<&Creature> = run
        .squad
        .members()
        .iter()
        .filter_map(|id| run.creature(id).ok())
        .filter(|c| c.caught_index.is_some())
        .collect();
    members.sort_by_key(|c| c.caught_index);
    members.iter().rev().nth(1).map(|c| c.id.clone())
}

struct WrapRemove;

impl Action for WrapRemove {
    fn name(&self) -> ActionName {
        ActionName::RemoveFromSquad
    }

    fn is_relevant(&self, ctx: &ActionCtx, run: &Run, creature: &Creature) -> bool {
        let base_relevant = builtin(ActionName::RemoveFromSquad)
            .map(|a| a.is_relevant(ctx, run, creature))
            .unwrap_or(false);
        base_relevant && !protected_ids(run).contains(&creature.id)
    }

    fn options(
        &self,
        _ctx: &ActionCtx,
        _run: &Run,
        _creature: &Creature,
    ) -> EngineResult<ActionOptions> {
        Ok(ActionOptions::None)
    }

    fn execute(
        &self,
        _ctx: &ActionCtx,
        run: &mut Run,
        creature_id: &str,
        _value: Option<&str>,
    ) -> EngineResult<ExecutionOutcome> {
        if protected_ids(run).contains(creature_id) {
            return Err(precondition(
                "the oldest and newest catches are pinned to the squad",
            ));
        }
        run.squad.remove(creature_id)?;
        Ok(ExecutionOutcome::updated(vec![creature_id.to_string()]))
    }
}

struct WrapReplace;

impl WrapReplace {
    fn replace_targets(run: &Run) -> Vec<String> {
        let protected = protected_ids(run);
        run.squad
            .members()
            .iter()
            .filter(|id| !protected.contains(*id))
            .cloned()
            .collect()
    }
}

impl Action for WrapReplace {
    fn name(&self) -> ActionName {
        ActionName::ReplaceSquadMember
    }

    fn is_relevant(&self, ctx: &ActionCtx, run: &Run, creature: &Creature) -> bool {
        let base_relevant = builtin(ActionName::ReplaceSquadMember)
            .map(|a| a.is_relevant(ctx, run, creature))
            .unwrap_or(false);
        base_relevant
            && !protected_ids(run).contains(&creature.id)
            && !Self::replace_targets(run).is_empty()
    }

    fn options(
        &self,
        _ctx: &ActionCtx,
        run: &Run,
        _creature: &Creature,
    ) -> EngineResult<ActionOptions> {
        Ok(ActionOptions::OneOf(Self::replace_targets(run)))
    }

    fn execute(
        &self,
        _ctx: &ActionCtx,
        run: &mut Run,
        creature_id: &str,
        value: Option<&str>,
    ) -> EngineResult<ExecutionOutcome> {
        let incoming = run.creature(creature_id)?;
        if !incoming.is_alive() {
            return Err(precondition("a dead creature can't join the squad"));
        }
        let choices = Self::replace_targets(run);
        let outgoing = require_choice(value, &choices)?.to_string();
        if run.squad.is_full() {
            run.squad.remove(&outgoing)?;
            run.squad.add(creature_id)?;
        } else {
            run.squad.add(creature_id)?;
            run.squad.remove(&outgoing)?;
        }
        Ok(ExecutionOutcome::updated(vec![
            creature_id.to_string(),
            outgoing,
        ]))
    }
}

impl Variant for WrapVariant {
    fn name(&self) -> &'static str {
        WRAP_NAME
    }

    fn rules(&self, _extra: &ExtraInfo) -> Vec<String> {
        let mut rules = base::base_rules();
        rules.push("The first 2 and last 2 caught pokemon must stay in the squad".to_string());
        rules
    }

    fn action(&self, name: ActionName, _extra: &ExtraInfo) -> EngineResult<&'static dyn Action> {
        match name {
            ActionName::RemoveFromSquad => Ok(&WrapRemove),
            ActionName::ReplaceSquadMember => Ok(&WrapReplace),
            other => builtin(other),
        }
    }

    /// A fresh catch always takes a newest-two seat. With a full squad the
    /// previous second-newest member drops out to make room.
    fn on_capture(
        &self,
        _ctx: &ActionCtx,
        run: &mut Run,
        creature_id: &str,
    ) -> EngineResult<Vec<String>> {
        let mut updated = Vec::new();
        if run.squad.is_full() {
            if let Some(bumped) = second_newest_member(run) {
                run.squad.remove(&bumped)?;
                updated.push(bumped);
            }
        }
        if !run.squad.is_full() {
            run.squad.add(creature_id)?;
            updated.push(creature_id.to_string());
        }
        Ok(updated)
    }
}
