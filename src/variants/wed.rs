use crate::actions::kill::kill_creature;
use crate::actions::{
    builtin, require_choice, Action, ActionCtx, ActionName, ActionOptions, ExecutionOutcome,
};
use crate::creature::Creature;
use crate::errors::{precondition, EngineResult};
use crate::run::{ExtraInfo, Run};
use crate::variants::{base, StepInfo, Variant};
use schema::Gender;

/// Squad members fight as opposite-gender pairs. Partners move in and out
/// of the squad together; a death leaves the survivor widowed.
pub struct WedVariant;

pub const WED_NAME: &str = "Wedlocke";

/// Pairs with both partners currently in the squad.
fn intact_squad_pairs(run: &Run) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    for id in run.squad.members() {
        let Ok(creature) = run.creature(id) else {
            continue;
        };
        if let Some(partner_id) = &creature.partner {
            // Each pair surfaces once, from its lexically-smaller side.
            if creature.id < *partner_id && run.squad.is_member(partner_id) {
                pairs.push((creature.id.clone(), partner_id.clone()));
            }
        }
    }
    pairs
}

/// Whether the squad keeps at least one intact pair not involving `id`.
fn has_other_intact_pair(run: &Run, id: &str) -> bool {
    intact_squad_pairs(run)
        .iter()
        .any(|(a, b)| a != id && b != id)
}

struct PairCreature;

impl PairCreature {
    /// Every living, unpaired creature of the opposite gender, boxed or
    /// fielded.
    fn candidates(run: &Run, creature: &Creature) -> Vec<String> {
        let Some(opposite) = creature.gender.and_then(Gender::opposite) else {
            return Vec::new();
        };
        run.storage
            .alive()
            .filter(|other| other.id != creature.id)
            .filter(|other| other.partner.is_none() && other.gender == Some(opposite))
            .map(|other| other.id.clone())
            .collect()
    }
}

/// When exactly one of a fresh pair holds a squad seat, the other joins
/// it, room permitting. Returns the id of the joiner, if any.
fn field_partner_if_lone(run: &mut Run, a: &str, b: &str) -> EngineResult<Option<String>> {
    let a_fielded = run.squad.is_member(a);
    let b_fielded = run.squad.is_member(b);
    if a_fielded == b_fielded || run.squad.is_full() {
        return Ok(None);
    }
    let joiner = if a_fielded { b } else { a };
    run.squad.add(joiner)?;
    Ok(Some(joiner.to_string()))
}

impl Action for PairCreature {
    fn name(&self) -> ActionName {
        ActionName::PairCreature
    }

    fn is_relevant(&self, _ctx: &ActionCtx, _run: &Run, creature: &Creature) -> bool {
        creature.is_alive()
            && creature.partner.is_none()
            && creature.gender.and_then(Gender::opposite).is_some()
    }

    fn options(
        &self,
        _ctx: &ActionCtx,
        run: &Run,
        creature: &Creature,
    ) -> EngineResult<ActionOptions> {
        Ok(ActionOptions::OneOf(Self::candidates(run, creature)))
    }

    fn execute(
        &self,
        _ctx: &ActionCtx,
        run: &mut Run,
        creature_id: &str,
        value: Option<&str>,
    ) -> EngineResult<ExecutionOutcome> {
        let creature = run.creature(creature_id)?;
        if creature.partner.is_some() {
            return Err(precondition("creature is already paired"));
        }
        let candidates = Self::candidates(run, creature);
        let partner_id = require_choice(value, &candidates)?.to_string();

        run.creature_mut(creature_id)?.partner = Some(partner_id.clone());
        run.creature_mut(&partner_id)?.partner = Some(creature_id.to_string());
        let mut updated = vec![creature_id.to_string(), partner_id.clone()];
        if let Some(joiner) = field_partner_if_lone(run, creature_id, &partner_id)? {
            if !updated.contains(&joiner) {
                updated.push(joiner);
            }
        }
        Ok(ExecutionOutcome::updated(updated))
    }
}

struct WedAdd;

impl Action for WedAdd {
    fn name(&self) -> ActionName {
        ActionName::AddToSquad
    }

    fn is_relevant(&self, ctx: &ActionCtx, run: &Run, creature: &Creature) -> bool {
        builtin(ActionName::AddToSquad)
            .map(|a| a.is_relevant(ctx, run, creature))
            .unwrap_or(false)
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
        let mut outcome = builtin(ActionName::AddToSquad)?.execute(ctx, run, creature_id, value)?;
        // Partners enter together whenever there is room.
        let partner_id = run.creature(creature_id)?.partner.clone();
        if let Some(partner_id) = partner_id {
            let partner_alive = run.creature(&partner_id)?.is_alive();
            if partner_alive && !run.squad.is_member(&partner_id) && !run.squad.is_full() {
                run.squad.add(&partner_id)?;
                outcome.updated.push(partner_id);
            }
        }
        Ok(outcome)
    }
}

struct WedRemove;

impl Action for WedRemove {
    fn name(&self) -> ActionName {
        ActionName::RemoveFromSquad
    }

    fn is_relevant(&self, ctx: &ActionCtx, run: &Run, creature: &Creature) -> bool {
        let base_relevant = builtin(ActionName::RemoveFromSquad)
            .map(|a| a.is_relevant(ctx, run, creature))
            .unwrap_or(false);
        base_relevant && has_other_intact_pair(run, &creature.id)
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
        if !has_other_intact_pair(run, creature_id) {
            return Err(precondition(
                "removing this creature would leave the squad without an intact pair",
            ));
        }
        run.squad.remove(creature_id)?;
        let mut updated = vec![creature_id.to_string()];
        // A paired creature never stays behind alone.
        let partner_id = run.creature(creature_id)?.partner.clone();
        if let Some(partner_id) = partner_id {
            if run.squad.is_member(&partner_id) && !run.squad.is_last_member(&partner_id) {
                run.squad.remove(&partner_id)?;
                updated.push(partner_id);
            }
        }
        Ok(ExecutionOutcome::updated(updated))
    }
}

struct WedReplace;

impl Action for WedReplace {
    fn name(&self) -> ActionName {
        ActionName::ReplaceSquadMember
    }

    fn is_relevant(&self, ctx: &ActionCtx, run: &Run, creature: &Creature) -> bool {
        builtin(ActionName::ReplaceSquadMember)
            .map(|a| a.is_relevant(ctx, run, creature))
            .unwrap_or(false)
    }

    fn options(
        &self,
        ctx: &ActionCtx,
        run: &Run,
        creature: &Creature,
    ) -> EngineResult<ActionOptions> {
        builtin(ActionName::ReplaceSquadMember)?.options(ctx, run, creature)
    }

    fn execute(
        &self,
        ctx: &ActionCtx,
        run: &mut Run,
        creature_id: &str,
        value: Option<&str>,
    ) -> EngineResult<ExecutionOutcome> {
        let choices = run.squad.members().to_vec();
        let outgoing = require_choice(value, &choices)?.to_string();
        let mut outcome =
            builtin(ActionName::ReplaceSquadMember)?.execute(ctx, run, creature_id, value)?;

        // The displaced member's partner follows it out.
        let outgoing_partner = run.creature(&outgoing)?.partner.clone();
        if let Some(partner_id) = outgoing_partner {
            if run.squad.is_member(&partner_id) && !run.squad.is_last_member(&partner_id) {
                run.squad.remove(&partner_id)?;
                outcome.updated.push(partner_id);
            }
        }
        // And the newcomer's partner follows it in.
        let incoming_partner = run.creature(creature_id)?.partner.clone();
        if let Some(partner_id) = incoming_partner {
            let partner_alive = run.creature(&partner_id)?.is_alive();
            if partner_alive && !run.squad.is_member(&partner_id) && !run.squad.is_full() {
                run.squad.add(&partner_id)?;
                outcome.updated.push(partner_id);
            }
        }
        Ok(outcome)
    }
}

struct WedKill;

impl Action for WedKill {
    fn name(&self) -> ActionName {
        ActionName::Kill
    }

    fn is_relevant(&self, ctx: &ActionCtx, run: &Run, creature: &Creature) -> bool {
        builtin(ActionName::Kill)
            .map(|a| a.is_relevant(ctx, run, creature))
            .unwrap_or(false)
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
        let partner_id = run.creature(creature_id)?.partner.clone();
        let blackout = kill_creature(run, creature_id)?;
        let mut updated = vec![creature_id.to_string()];
        // The survivor is widowed and free to pair again.
        if let Some(partner_id) = partner_id {
            run.creature_mut(&partner_id)?.partner = None;
            updated.push(partner_id);
        }
        let outcome = if blackout {
            ExecutionOutcome::blackout(updated)
        } else {
            ExecutionOutcome::updated(updated)
        };
        Ok(outcome)
    }
}

impl Variant for WedVariant {
    fn name(&self) -> &'static str {
        WED_NAME
    }

    fn min_generation(&self) -> u8 {
        2
    }

    fn rules(&self, _extra: &ExtraInfo) -> Vec<String> {
        let mut rules = base::base_rules();
        rules.push("Squad pokemon fight in male and female pairs".to_string());
        rules.push("Partners join and leave the squad together".to_string());
        rules
    }

    fn pipeline(&self, generation: u8, _extra: &ExtraInfo) -> Vec<StepInfo> {
        let mut pipeline = base::base_pipeline(generation);
        pipeline.push(StepInfo::gated(
            ActionName::PairCreature,
            vec![ActionName::ChooseGender],
        ));
        pipeline
    }

    fn action(&self, name: ActionName, _extra: &ExtraInfo) -> EngineResult<&'static dyn Action> {
        match name {
            ActionName::AddToSquad => Ok(&WedAdd),
            ActionName::RemoveFromSquad => Ok(&WedRemove),
            ActionName::ReplaceSquadMember => Ok(&WedReplace),
            ActionName::Kill => Ok(&WedKill),
            ActionName::PairCreature => Ok(&PairCreature),
            other => builtin(other),
        }
    }

    fn is_eligible(&self, species: &schema::SpeciesData, _extra: &ExtraInfo) -> bool {
        !species.is_genderless()
    }

    // Catches stay boxed until they are paired and fielded deliberately.
    fn on_capture(
        &self,
        _ctx: &ActionCtx,
        _run: &mut Run,
        _creature_id: &str,
    ) -> EngineResult<Vec<String>> {
        Ok(Vec::new())
    }
}
