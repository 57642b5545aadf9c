use crate::actions::{ActionCtx, ActionName, ActionOptions, ExecutionOutcome};
use crate::creature::{generate_id, Creature};
use crate::dex::Pokedex;
use crate::errors::{precondition, EngineResult};
use crate::run::{Encounter, EncounterStatus, Run};
use crate::variants::{get_variant, Variant};
use schema::SpeciesData;

/// The front door: everything a caller does to a run goes through here.
///
/// The engine owns no state of its own. It borrows a dex, receives runs by
/// reference and leaves persistence to the caller.
pub struct Engine<'a> {
    dex: &'a dyn Pokedex,
}

impl<'a> Engine<'a> {
    pub fn new(dex: &'a dyn Pokedex) -> Engine<'a> {
        Engine { dex }
    }

    fn ctx(&self) -> ActionCtx<'_> {
        ActionCtx { dex: self.dex }
    }

    fn variant(&self, run: &Run) -> EngineResult<&'static dyn Variant> {
        get_variant(&run.variant)
    }

    /// The actions currently executable on a creature, in pipeline order.
    ///
    /// An action shows up once it is relevant and every prerequisite in
    /// its pipeline slot has stopped being relevant, so mandatory
    /// bookkeeping hides the consequential actions until it is done.
    pub fn available_actions(
        &self,
        run: &Run,
        creature_id: &str,
    ) -> EngineResult<Vec<ActionName>> {
        let creature = run.creature(creature_id)?;
        if run.finished {
            return Ok(Vec::new());
        }
        let variant = self.variant(run)?;
        let ctx = self.ctx();
        let mut available = Vec::new();
        for step in variant.pipeline(run.generation, &run.extra_info) {
            let action = variant.action(step.action, &run.extra_info)?;
            if !action.is_relevant(&ctx, run, creature) {
                continue;
            }
            let mut gated = false;
            for prereq in &step.prerequisites {
                let prereq_action = variant.action(*prereq, &run.extra_info)?;
                if prereq_action.is_relevant(&ctx, run, creature) {
                    gated = true;
                    break;
                }
            }
            if !gated {
                available.push(step.action);
            }
        }
        Ok(available)
    }

    /// The input contract for one available action.
    pub fn action_options(
        &self,
        run: &Run,
        creature_id: &str,
        name: ActionName,
    ) -> EngineResult<ActionOptions> {
        let creature = run.creature(creature_id)?;
        let variant = self.variant(run)?;
        let action = variant.action(name, &run.extra_info)?;
        action.options(&self.ctx(), run, creature)
    }

    /// Execute an available action. A choice list that came up empty makes
    /// the call a no-op instead of an error, so callers can drive the
    /// pipeline without special-casing dead ends.
    pub fn apply(
        &self,
        run: &mut Run,
        creature_id: &str,
        name: ActionName,
        value: Option<&str>,
    ) -> EngineResult<ExecutionOutcome> {
        if run.finished {
            return Err(precondition("the run is already over"));
        }
        let available = self.available_actions(run, creature_id)?;
        if !available.contains(&name) {
            return Err(precondition(format!(
                "{} is not available for this creature right now",
                name
            )));
        }
        let variant = self.variant(run)?;
        let action = variant.action(name, &run.extra_info)?;
        let options = action.options(&self.ctx(), run, run.creature(creature_id)?)?;
        if options.is_skippable() {
            log::debug!(
                "run {}: skipping {} for {}, nothing to choose",
                run.id,
                name,
                creature_id
            );
            return Ok(ExecutionOutcome::default());
        }
        let outcome = action.execute(&self.ctx(), run, creature_id, value)?;
        log::info!(
            "run {}: executed {} on {} (updated {:?})",
            run.id,
            name,
            creature_id,
            outcome.updated
        );
        if outcome.blackout {
            log::warn!("run {}: blacked out, the challenge is lost", run.id);
        }
        Ok(outcome)
    }

    /// Record a successful catch: the creature enters storage with the next
    /// capture index, the catalog and route log are updated and the
    /// variant's capture hook runs.
    pub fn catch_creature(
        &self,
        run: &mut Run,
        species_name: &str,
        route: Option<&str>,
    ) -> EngineResult<String> {
        if run.finished {
            return Err(precondition("the run is already over"));
        }
        let species = self.dex.species(species_name, run.generation)?;
        let variant = self.variant(run)?;
        if !variant.is_eligible(&species, &run.extra_info) {
            return Err(precondition(format!(
                "{} can't be caught under these rules",
                species_name
            )));
        }
        if run.duplicate_clause {
            let already_caught = run
                .catalog_entry(species_name)
                .map(|entry| entry.caught)
                .unwrap_or(false);
            if already_caught {
                return Err(precondition(format!(
                    "{} was already caught and the duplicate clause is on",
                    species_name
                )));
            }
        }

        let creature_id = generate_id();
        let mut creature = Creature::new(creature_id.clone(), species)?;
        creature.caught_index = Some(run.max_caught_index().map_or(0, |i| i + 1));
        run.storage.add(creature)?;
        if let Some(entry) = run.catalog_entry_mut(species_name) {
            entry.caught = true;
        }
        variant.on_capture(&self.ctx(), run, &creature_id)?;

        if let Some(route) = route {
            match run.encounter_mut(route) {
                Some(encounter) => {
                    encounter.status = EncounterStatus::Caught;
                    encounter.creature = Some(creature_id.clone());
                }
                None => run.add_encounter(Encounter {
                    route: route.to_string(),
                    status: EncounterStatus::Caught,
                    creature: Some(creature_id.clone()),
                }),
            }
        }
        log::info!(
            "run {}: caught {} as {} (index {:?})",
            run.id,
            species_name,
            creature_id,
            run.creature(&creature_id)?.caught_index
        );
        Ok(creature_id)
    }

    /// Log the outcome of a route encounter that did not end in a catch.
    pub fn record_encounter(
        &self,
        run: &mut Run,
        route: &str,
        status: EncounterStatus,
    ) -> EngineResult<()> {
        if status == EncounterStatus::Caught {
            return Err(precondition("catches are recorded through catch_creature"));
        }
        match run.encounter_mut(route) {
            Some(encounter) => encounter.status = status,
            None => run.add_encounter(Encounter {
                route: route.to_string(),
                status,
                creature: None,
            }),
        }
        Ok(())
    }

    /// The full rule text for a run, variant additions included.
    pub fn rules_text(&self, run: &Run) -> EngineResult<Vec<String>> {
        Ok(self.variant(run)?.rules(&run.extra_info))
    }

    /// Every species the run is currently allowed to catch.
    pub fn eligible_species(&self, run: &Run) -> EngineResult<Vec<SpeciesData>> {
        let variant = self.variant(run)?;
        Ok(self
            .dex
            .species_in_generation(run.generation)
            .into_iter()
            .filter(|species| variant.is_eligible(species, &run.extra_info))
            .collect())
    }
}
