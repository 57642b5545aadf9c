use crate::actions::evolve::available_targets;
use crate::actions::{
    builtin, require_choice, Action, ActionCtx, ActionName, ActionOptions, ExecutionOutcome,
};
use crate::creature::Creature;
use crate::errors::{precondition, EngineResult};
use crate::run::{ExtraInfo, Run};
use crate::variants::{base, Variant};

/// No two squad members may share a type. Squad moves and evolutions are
/// filtered so a collision can never be introduced.
pub struct UniqueVariant;

pub const UNIQUE_NAME: &str = "Uniquelocke";

/// Squad members (other than the creature itself) sharing a type with it.
fn overlapping_members(run: &Run, creature: &Creature) -> Vec<String> {
    run.squad
        .members()
        .iter()
        .filter(|id| *id != &creature.id)
        .filter(|id| {
            run.creature(id)
                .map(|member| member.species.shares_type_with(&creature.species))
                .unwrap_or(false)
        })
        .cloned()
        .collect()
}

struct UniqueAdd;

impl Action for UniqueAdd {
    fn name(&self) -> ActionName {
        ActionName::AddToSquad
    }

    fn is_relevant(&self, ctx: &ActionCtx, run: &Run, creature: &Creature) -> bool {
        let base_relevant = builtin(ActionName::AddToSquad)
            .map(|a| a.is_relevant(ctx, run, creature))
            .unwrap_or(false);
        base_relevant && overlapping_members(run, creature).is_empty()
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
        ctx: &ActionCtx,
        run: &mut Run,
        creature_id: &str,
        value: Option<&str>,
    ) -> EngineResult<ExecutionOutcome> {
        let creature = run.creature(creature_id)?;
        if !overlapping_members(run, creature).is_empty() {
            return Err(precondition(format!(
                "{} shares a type with a squad member",
                creature.display_name()
            )));
        }
        builtin(ActionName::AddToSquad)?.execute(ctx, run, creature_id, value)
    }
}

struct UniqueReplace;

impl UniqueReplace {
    /// Members the incoming creature may take the place of. A collision
    /// with exactly one member can only be resolved by replacing that
    /// member; with no collision, anyone may go.
    fn replace_targets(run: &Run, creature: &Creature) -> Vec<String> {
        let overlapping = overlapping_members(run, creature);
        if overlapping.is_empty() {
            run.squad.members().to_vec()
        } else {
            overlapping
        }
    }
}

impl Action for UniqueReplace {
    fn name(&self) -> ActionName {
        ActionName::ReplaceSquadMember
    }

    fn is_relevant(&self, ctx: &ActionCtx, run: &Run, creature: &Creature) -> bool {
        let base_relevant = builtin(ActionName::ReplaceSquadMember)
            .map(|a| a.is_relevant(ctx, run, creature))
            .unwrap_or(false);
        base_relevant && overlapping_members(run, creature).len() < 2
    }

    fn options(
        &self,
        _ctx: &ActionCtx,
        run: &Run,
        creature: &Creature,
    ) -> EngineResult<ActionOptions> {
        Ok(ActionOptions::OneOf(Self::replace_targets(run, creature)))
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
        if overlapping_members(run, incoming).len() >= 2 {
            return Err(precondition(
                "no single replacement can resolve the type collisions",
            ));
        }
        let choices = Self::replace_targets(run, incoming);
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

struct UniqueEvolve;

impl UniqueEvolve {
    /// Evolution targets that keep the squad collision-free. Boxed
    /// creatures evolve without constraint.
    fn safe_targets(ctx: &ActionCtx, run: &Run, creature: &Creature) -> Vec<String> {
        let targets = available_targets(ctx, run, creature);
        if !run.squad.is_member(&creature.id) {
            return targets;
        }
        targets
            .into_iter()
            .filter(|name| {
                let Ok(target) = ctx.dex.species(name, run.generation) else {
                    return false;
                };
                run.squad
                    .members()
                    .iter()
                    .filter(|id| *id != &creature.id)
                    .all(|id| {
                        run.creature(id)
                            .map(|member| !member.species.shares_type_with(&target))
                            .unwrap_or(true)
                    })
            })
            .collect()
    }
}

impl Action for UniqueEvolve {
    fn name(&self) -> ActionName {
        ActionName::Evolve
    }

    fn is_relevant(&self, ctx: &ActionCtx, run: &Run, creature: &Creature) -> bool {
        creature.is_alive() && !Self::safe_targets(ctx, run, creature).is_empty()
    }

    fn options(
        &self,
        ctx: &ActionCtx,
        run: &Run,
        creature: &Creature,
    ) -> EngineResult<ActionOptions> {
        Ok(ActionOptions::OneOf(Self::safe_targets(ctx, run, creature)))
    }

    fn execute(
        &self,
        ctx: &ActionCtx,
        run: &mut Run,
        creature_id: &str,
        value: Option<&str>,
    ) -> EngineResult<ExecutionOutcome> {
        let creature = run.creature(creature_id)?;
        let choices = Self::safe_targets(ctx, run, creature);
        let target_name = require_choice(value, &choices)?;
        let target = ctx.dex.species(target_name, run.generation)?;
        run.creature_mut(creature_id)?.evolve_into(target);
        Ok(ExecutionOutcome::updated(vec![creature_id.to_string()]))
    }
}

impl Variant for UniqueVariant {
    fn name(&self) -> &'static str {
        UNIQUE_NAME
    }

    fn rules(&self, _extra: &ExtraInfo) -> Vec<String> {
        let mut rules = base::base_rules();
        rules.push("No two squad members may share a type".to_string());
        rules
    }

    fn action(&self, name: ActionName, _extra: &ExtraInfo) -> EngineResult<&'static dyn Action> {
        match name {
            ActionName::AddToSquad => Ok(&UniqueAdd),
            ActionName::ReplaceSquadMember => Ok(&UniqueReplace),
            ActionName::Evolve => Ok(&UniqueEvolve),
            other => builtin(other),
        }
    }

    /// A catch that would collide with a member stays in the box.
    fn on_capture(
        &self,
        _ctx: &ActionCtx,
        run: &mut Run,
        creature_id: &str,
    ) -> EngineResult<Vec<String>> {
        let creature = run.creature(creature_id)?;
        if !run.squad.is_full() && overlapping_members(run, creature).is_empty() {
            run.squad.add(creature_id)?;
            return Ok(vec![creature_id.to_string()]);
        }
        Ok(Vec::new())
    }
}
