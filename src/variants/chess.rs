use crate::actions::{
    builtin, require_choice, Action, ActionCtx, ActionName, ActionOptions, ExecutionOutcome,
};
use crate::creature::{ChessRole, Creature};
use crate::errors::{precondition, EngineResult};
use crate::run::{ExtraInfo, Run};
use crate::variants::{base, StepInfo, Variant};
use schema::Gender;

/// Every creature is a chess piece. The starter is the king; quotas bound
/// the rest of the set, and losing the king loses the run.
pub struct ChessVariant;

pub const CHESS_NAME: &str = "Chesslocke";

/// Pieces available per set, king excluded (there is exactly one and it is
/// always the starter).
fn quota(role: ChessRole) -> usize {
    match role {
        ChessRole::King => 0,
        ChessRole::Queen => 1,
        ChessRole::Bishop => 2,
        ChessRole::Knight => 2,
        ChessRole::Rook => 2,
        ChessRole::Pawn => 8,
    }
}

/// How many pieces of a role the run has ever fielded. Dead creatures still
/// count: a captured piece is gone, not refunded. Promoted pawns count
/// against their original role.
fn assigned_count(run: &Run, role: ChessRole) -> usize {
    run.storage
        .iter()
        .filter(|c| c.original_role == Some(role))
        .count()
}

/// Whether the species is the first form of its line, judged against the
/// run's catalog.
fn is_base_form(run: &Run, creature: &Creature) -> bool {
    run.catalog_entry(&creature.species.name)
        .map(|entry| entry.base_form == creature.species.name)
        .unwrap_or(true)
}

struct AssignRole;

impl AssignRole {
    fn role_choices(run: &Run, creature: &Creature) -> Vec<String> {
        let promoted = creature.original_role == Some(ChessRole::Pawn);
        [
            ChessRole::Queen,
            ChessRole::Bishop,
            ChessRole::Knight,
            ChessRole::Rook,
            ChessRole::Pawn,
        ]
        .into_iter()
        .filter(|role| {
            if *role == ChessRole::Queen && creature.gender != Some(Gender::Female) {
                return false;
            }
            if promoted {
                // A promotion picks any piece but another pawn, without
                // consuming the set's quotas.
                return *role != ChessRole::Pawn;
            }
            if *role == ChessRole::Pawn && !is_base_form(run, creature) {
                return false;
            }
            assigned_count(run, *role) < quota(*role)
        })
        .map(|role| role.to_string())
        .collect()
    }
}

impl Action for AssignRole {
    fn name(&self) -> ActionName {
        ActionName::AssignRole
    }

    fn is_relevant(&self, _ctx: &ActionCtx, run: &Run, creature: &Creature) -> bool {
        if !creature.is_alive() || run.is_starter(&creature.id) {
            return false;
        }
        // A pawn that has not evolved may still trade up to another piece.
        creature.role.is_none()
            || (creature.role == Some(ChessRole::Pawn)
                && creature.original_role == Some(ChessRole::Pawn))
    }

    fn options(
        &self,
        _ctx: &ActionCtx,
        run: &Run,
        creature: &Creature,
    ) -> EngineResult<ActionOptions> {
        Ok(ActionOptions::OneOf(Self::role_choices(run, creature)))
    }

    fn execute(
        &self,
        _ctx: &ActionCtx,
        run: &mut Run,
        creature_id: &str,
        value: Option<&str>,
    ) -> EngineResult<ExecutionOutcome> {
        let creature = run.creature(creature_id)?;
        let choices = Self::role_choices(run, creature);
        let value = require_choice(value, &choices)?;
        let role = ChessRole::parse(value)
            .ok_or_else(|| precondition(format!("{} is not a chess role", value)))?;

        let creature = run.creature_mut(creature_id)?;
        creature.role = Some(role);
        if creature.original_role.is_none() {
            creature.original_role = Some(role);
        }
        Ok(ExecutionOutcome::updated(vec![creature_id.to_string()]))
    }
}

struct ChessEvolve;

impl Action for ChessEvolve {
    fn name(&self) -> ActionName {
        ActionName::Evolve
    }

    fn is_relevant(&self, ctx: &ActionCtx, run: &Run, creature: &Creature) -> bool {
        // Pawns hold their form; a pawn must be promoted before it may evolve.
        creature.role != Some(ChessRole::Pawn)
            && builtin(ActionName::Evolve)
                .map(|a| a.is_relevant(ctx, run, creature))
                .unwrap_or(false)
    }

    fn options(
        &self,
        ctx: &ActionCtx,
        run: &Run,
        creature: &Creature,
    ) -> EngineResult<ActionOptions> {
        builtin(ActionName::Evolve)?.options(ctx, run, creature)
    }

    fn execute(
        &self,
        ctx: &ActionCtx,
        run: &mut Run,
        creature_id: &str,
        value: Option<&str>,
    ) -> EngineResult<ExecutionOutcome> {
        if run.creature(creature_id)?.role == Some(ChessRole::Pawn) {
            return Err(precondition("a pawn may never evolve"));
        }
        builtin(ActionName::Evolve)?.execute(ctx, run, creature_id, value)
    }
}

struct ChessKill;

impl Action for ChessKill {
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
        let is_king =
            run.is_starter(creature_id) || run.creature(creature_id)?.role == Some(ChessRole::King);
        let mut blackout = crate::actions::kill::kill_creature(run, creature_id)?;
        if is_king {
            // Checkmate. The run ends no matter who else still stands.
            run.finish();
            blackout = true;
        }
        let outcome = if blackout {
            ExecutionOutcome::blackout(vec![creature_id.to_string()])
        } else {
            ExecutionOutcome::updated(vec![creature_id.to_string()])
        };
        Ok(outcome)
    }
}

impl Variant for ChessVariant {
    fn name(&self) -> &'static str {
        CHESS_NAME
    }

    fn min_generation(&self) -> u8 {
        2
    }

    fn rules(&self, _extra: &ExtraInfo) -> Vec<String> {
        let mut rules = base::base_rules();
        rules.push("The starter is the king; if it dies the run is over".to_string());
        rules.push(
            "Each caught pokemon takes a piece: 1 queen, 2 bishops, 2 knights, 2 rooks, 8 pawns"
                .to_string(),
        );
        rules.push("Only a female pokemon can be the queen".to_string());
        rules.push("Pawns must be caught in their first form".to_string());
        rules.push("A pawn may never evolve; promote it to another piece first".to_string());
        rules
    }

    fn pipeline(&self, generation: u8, _extra: &ExtraInfo) -> Vec<StepInfo> {
        let mut pipeline = base::base_pipeline(generation);
        // AssignRole stays relevant for un-promoted pawns, so it only gates
        // Evolve; gating Kill on it would make pawns unkillable.
        for step in pipeline.iter_mut() {
            if step.action == ActionName::Evolve {
                step.prerequisites.push(ActionName::AssignRole);
            }
        }
        pipeline.push(StepInfo::gated(
            ActionName::AssignRole,
            vec![ActionName::ChooseGender],
        ));
        pipeline
    }

    fn action(&self, name: ActionName, _extra: &ExtraInfo) -> EngineResult<&'static dyn Action> {
        match name {
            ActionName::AssignRole => Ok(&AssignRole),
            ActionName::Evolve => Ok(&ChessEvolve),
            ActionName::Kill => Ok(&ChessKill),
            other => builtin(other),
        }
    }

    // Catches stay boxed until they are given a piece and fielded.
    fn on_capture(
        &self,
        _ctx: &ActionCtx,
        _run: &mut Run,
        _creature_id: &str,
    ) -> EngineResult<Vec<String>> {
        Ok(Vec::new())
    }
}

/// Mark the run's starter as the king. Called once by the creation flow.
pub fn crown_starter(run: &mut Run) -> EngineResult<()> {
    let Some(starter_id) = run.starter.clone() else {
        return Ok(());
    };
    let starter = run.creature_mut(&starter_id)?;
    starter.role = Some(ChessRole::King);
    starter.original_role = Some(ChessRole::King);
    Ok(())
}
