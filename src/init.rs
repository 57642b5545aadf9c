use crate::creature::{generate_id, Creature};
use crate::dex::Pokedex;
use crate::errors::{precondition, EngineError, EngineResult};
use crate::games::{games_from_generation, generation_for_region, get_game};
use crate::run::{ExtraInfo, Run};
use crate::variants::castform::{CASTFORM_FORMS, CASTFORM_NAME};
use crate::variants::category::{CATEGORY_KEY, CATEGORY_NAME};
use crate::variants::chess::{crown_starter, CHESS_NAME};
use crate::variants::color::{COLOR_KEY, COLOR_NAME};
use crate::variants::deoxys::{DEOXYS_FORMS, DEOXYS_NAME};
use crate::variants::eevee::{EEVEE_FAMILY, EEVEE_NAME};
use crate::variants::genlocke::{GEN_NAME, SELECTED_KEY};
use crate::variants::leg::{LEGS_KEY, LEG_NAME};
use crate::variants::mono::{MONO_NAME, TYPE_KEY};
use crate::variants::registry::{delegable_names, get_variant, variant_names};
use crate::variants::star::{STARTER_TYPE_KEY, STAR_NAME};
use crate::variants::starter::STARTER_NAME;
use schema::{Category, Color, PokemonType, SpeciesData};
use std::collections::HashMap;

/// Everything the wizard has collected so far towards a new run. Filled in
/// one answer at a time; `progress` says what is still missing.
#[derive(Debug, Clone, Default)]
pub struct RunCreation {
    pub name: String,
    pub variant: Option<String>,
    pub game: Option<String>,
    pub randomized: Option<bool>,
    pub duplicate_clause: Option<bool>,
    pub extra_info: ExtraInfo,
}

impl RunCreation {
    pub fn new(name: impl Into<String>) -> RunCreation {
        RunCreation {
            name: name.into(),
            ..RunCreation::default()
        }
    }
}

/// Where the wizard stands: either one more question to answer, or ready
/// to finalize.
#[derive(Debug, Clone, PartialEq)]
pub struct CreationProgress {
    pub ready: bool,
    /// The next key to fill, when not ready.
    pub missing_key: Option<String>,
    /// Menu for the missing key. Empty means free choice.
    pub options: Vec<String>,
}

impl CreationProgress {
    fn ready() -> CreationProgress {
        CreationProgress {
            ready: true,
            missing_key: None,
            options: Vec::new(),
        }
    }

    fn needs(key: &str, options: Vec<String>) -> CreationProgress {
        CreationProgress {
            ready: false,
            missing_key: Some(key.to_string()),
            options,
        }
    }
}

/// Per-variant hooks into the wizard: the extra questions a variant asks
/// and the creatures it seeds into a fresh run.
trait RunCreator: Sync {
    fn missing_key(
        &self,
        _dex: &dyn Pokedex,
        _creation: &RunCreation,
        _generation: u8,
    ) -> Option<CreationProgress> {
        None
    }

    fn seed(&self, _dex: &dyn Pokedex, _run: &mut Run) -> EngineResult<()> {
        Ok(())
    }

    /// Whether the catalog is built from variant eligibility over the full
    /// dex. Seeded variants keep their catalog to what `seed` adds.
    fn catalog_from_dex(&self, _extra: &ExtraInfo) -> bool {
        true
    }
}

struct DefaultCreator;
impl RunCreator for DefaultCreator {}

struct MonoCreator;

impl RunCreator for MonoCreator {
    fn missing_key(
        &self,
        _dex: &dyn Pokedex,
        creation: &RunCreation,
        generation: u8,
    ) -> Option<CreationProgress> {
        if creation.extra_info.contains_key(TYPE_KEY) {
            return None;
        }
        let options = PokemonType::types_for_generation(generation)
            .iter()
            .map(|t| t.to_string())
            .collect();
        Some(CreationProgress::needs(TYPE_KEY, options))
    }
}

struct ColorCreator;

impl RunCreator for ColorCreator {
    fn missing_key(
        &self,
        _dex: &dyn Pokedex,
        creation: &RunCreation,
        _generation: u8,
    ) -> Option<CreationProgress> {
        if creation.extra_info.contains_key(COLOR_KEY) {
            return None;
        }
        let options = Color::all().iter().map(|c| c.to_string()).collect();
        Some(CreationProgress::needs(COLOR_KEY, options))
    }
}

struct CategoryCreator;

impl RunCreator for CategoryCreator {
    fn missing_key(
        &self,
        _dex: &dyn Pokedex,
        creation: &RunCreation,
        _generation: u8,
    ) -> Option<CreationProgress> {
        if creation.extra_info.contains_key(CATEGORY_KEY) {
            return None;
        }
        let options = Category::all().iter().map(|c| c.to_string()).collect();
        Some(CreationProgress::needs(CATEGORY_KEY, options))
    }
}

struct LegCreator;

impl RunCreator for LegCreator {
    fn missing_key(
        &self,
        dex: &dyn Pokedex,
        creation: &RunCreation,
        generation: u8,
    ) -> Option<CreationProgress> {
        if creation.extra_info.contains_key(LEGS_KEY) {
            return None;
        }
        let mut counts: Vec<u8> = dex
            .species_in_generation(generation)
            .iter()
            .map(|s| s.num_legs)
            .collect();
        counts.sort_unstable();
        counts.dedup();
        let options = counts.iter().map(|n| n.to_string()).collect();
        Some(CreationProgress::needs(LEGS_KEY, options))
    }
}

struct StarCreator;

impl RunCreator for StarCreator {
    fn missing_key(
        &self,
        _dex: &dyn Pokedex,
        creation: &RunCreation,
        generation: u8,
    ) -> Option<CreationProgress> {
        if creation.extra_info.contains_key(STARTER_TYPE_KEY) {
            return None;
        }
        let options = PokemonType::types_for_generation(generation)
            .iter()
            .map(|t| t.to_string())
            .collect();
        Some(CreationProgress::needs(STARTER_TYPE_KEY, options))
    }

    fn seed(&self, dex: &dyn Pokedex, run: &mut Run) -> EngineResult<()> {
        let starter_type = run.extra_info.get(STARTER_TYPE_KEY).cloned();
        let all = dex.species_in_generation(run.generation);
        let mut used: Vec<String> = Vec::new();
        for pokemon_type in PokemonType::types_for_generation(run.generation) {
            // One creature per type, each a distinct species where the dex
            // allows it.
            let Some(species) = all
                .iter()
                .find(|s| s.has_type(pokemon_type) && !used.contains(&s.name))
            else {
                continue;
            };
            used.push(species.name.clone());
            let id = seed_creature(run, species.clone())?;
            run.creature_mut(&id)?.type_tag = Some(pokemon_type);
            if starter_type.as_deref() == Some(pokemon_type.to_string().as_str()) {
                run.starter = Some(id);
            }
        }
        fill_squad_with_starter_first(run)
    }

    fn catalog_from_dex(&self, _extra: &ExtraInfo) -> bool {
        false
    }
}

struct StarterCreator;

impl RunCreator for StarterCreator {
    fn seed(&self, dex: &dyn Pokedex, run: &mut Run) -> EngineResult<()> {
        let mut seen = Vec::new();
        for game in games_from_generation(1) {
            if game.generation > run.generation {
                continue;
            }
            for starter in &game.starters {
                if seen.contains(starter) {
                    continue;
                }
                seen.push(starter.clone());
                let species = dex.species(starter, run.generation)?;
                seed_creature(run, species)?;
            }
        }
        fill_squad_with_starter_first(run)
    }

    fn catalog_from_dex(&self, _extra: &ExtraInfo) -> bool {
        false
    }
}

struct EeveeCreator;

impl RunCreator for EeveeCreator {
    fn seed(&self, dex: &dyn Pokedex, run: &mut Run) -> EngineResult<()> {
        for name in EEVEE_FAMILY {
            // Forms beyond the run's generation simply don't exist yet.
            if let Ok(species) = dex.species(name, run.generation) {
                let id = seed_creature(run, species)?;
                if *name == "Eevee" {
                    run.starter = Some(id);
                }
            }
        }
        fill_squad_with_starter_first(run)
    }

    fn catalog_from_dex(&self, _extra: &ExtraInfo) -> bool {
        false
    }
}

struct FormsCreator {
    forms: &'static [&'static str],
    base: &'static str,
}

impl RunCreator for FormsCreator {
    fn seed(&self, dex: &dyn Pokedex, run: &mut Run) -> EngineResult<()> {
        for name in self.forms {
            let species = dex.species(name, run.generation)?;
            let id = seed_creature(run, species)?;
            if *name == self.base {
                run.starter = Some(id);
            }
        }
        fill_squad_with_starter_first(run)
    }

    fn catalog_from_dex(&self, _extra: &ExtraInfo) -> bool {
        false
    }
}

static CASTFORM_CREATOR: FormsCreator = FormsCreator {
    forms: CASTFORM_FORMS,
    base: "Castform",
};

static DEOXYS_CREATOR: FormsCreator = FormsCreator {
    forms: DEOXYS_FORMS,
    base: "Deoxys",
};

struct GenCreator;

impl RunCreator for GenCreator {
    fn missing_key(
        &self,
        dex: &dyn Pokedex,
        creation: &RunCreation,
        generation: u8,
    ) -> Option<CreationProgress> {
        let Some(inner) = creation.extra_info.get(SELECTED_KEY) else {
            // Only rulesets the chosen game's generation can host.
            let options = delegable_names()
                .into_iter()
                .filter(|name| {
                    get_variant(name)
                        .map(|v| v.min_generation() <= generation)
                        .unwrap_or(false)
                })
                .map(|n| n.to_string())
                .collect();
            return Some(CreationProgress::needs(SELECTED_KEY, options));
        };
        inner_creator(inner).missing_key(dex, creation, generation)
    }

    fn seed(&self, dex: &dyn Pokedex, run: &mut Run) -> EngineResult<()> {
        let inner = run.extra_info.get(SELECTED_KEY).cloned().unwrap_or_default();
        inner_creator(&inner).seed(dex, run)
    }

    fn catalog_from_dex(&self, extra: &ExtraInfo) -> bool {
        let inner = extra.get(SELECTED_KEY).map(String::as_str).unwrap_or_default();
        inner_creator(inner).catalog_from_dex(extra)
    }
}

/// A campaign never wraps another campaign.
fn inner_creator(variant: &str) -> &'static dyn RunCreator {
    if variant == GEN_NAME {
        &DefaultCreator
    } else {
        creator_for(variant)
    }
}

fn creator_for(variant: &str) -> &'static dyn RunCreator {
    match variant {
        MONO_NAME => &MonoCreator,
        COLOR_NAME => &ColorCreator,
        CATEGORY_NAME => &CategoryCreator,
        LEG_NAME => &LegCreator,
        STAR_NAME => &StarCreator,
        STARTER_NAME => &StarterCreator,
        EEVEE_NAME => &EeveeCreator,
        CASTFORM_NAME => &CASTFORM_CREATOR,
        DEOXYS_NAME => &DEOXYS_CREATOR,
        GEN_NAME => &GenCreator,
        _ => &DefaultCreator,
    }
}

/// Put a pre-made creature into a fresh run: storage, catalog entry and
/// capture index in one go.
fn seed_creature(run: &mut Run, species: SpeciesData) -> EngineResult<String> {
    let id = generate_id();
    let name = species.name.clone();
    let mut creature = Creature::new(id.clone(), species)?;
    creature.caught_index = Some(run.max_caught_index().map_or(0, |i| i + 1));
    run.storage.add(creature)?;
    run.push_catalog_entry(&name, &name, true);
    Ok(id)
}

/// Field up to six seeded creatures, the designated starter ahead of the
/// rest.
fn fill_squad_with_starter_first(run: &mut Run) -> EngineResult<()> {
    if let Some(starter_id) = run.starter.clone() {
        run.squad.add(&starter_id)?;
    }
    let ids: Vec<String> = run.storage.iter().map(|c| c.id.clone()).collect();
    for id in ids {
        if run.squad.is_full() {
            break;
        }
        if !run.squad.is_member(&id) {
            run.squad.add(&id)?;
        }
    }
    Ok(())
}

/// What the wizard still needs, asked in a fixed order so a half-filled
/// creation can resume exactly where it stopped.
pub fn progress(dex: &dyn Pokedex, creation: &RunCreation) -> EngineResult<CreationProgress> {
    if creation.name.trim().is_empty() {
        return Err(EngineError::Validation(
            "a run needs a non-empty name".to_string(),
        ));
    }
    let Some(variant_name) = &creation.variant else {
        let options = variant_names().into_iter().map(|n| n.to_string()).collect();
        return Ok(CreationProgress::needs("variant", options));
    };
    let variant = get_variant(variant_name)?;

    let Some(game_name) = &creation.game else {
        let options = games_from_generation(variant.min_generation())
            .iter()
            .map(|g| g.name.clone())
            .collect();
        return Ok(CreationProgress::needs("game", options));
    };
    let game = get_game(game_name)?;
    if game.generation < variant.min_generation() {
        return Err(precondition(format!(
            "{} needs a generation {} game or later",
            variant_name,
            variant.min_generation()
        )));
    }
    // A campaign's inner ruleset carries its own generation floor, judged
    // by the region the chosen game plays in.
    if variant_name == GEN_NAME {
        if let Some(inner) = creation.extra_info.get(SELECTED_KEY) {
            let inner_variant = get_variant(inner)?;
            if generation_for_region(game.region) < inner_variant.min_generation() {
                return Err(precondition(format!(
                    "{} needs a generation {} game or later",
                    inner,
                    inner_variant.min_generation()
                )));
            }
        }
    }

    if creation.randomized.is_none() {
        return Ok(CreationProgress::needs(
            "randomized",
            vec!["true".to_string(), "false".to_string()],
        ));
    }
    if creation.duplicate_clause.is_none() {
        return Ok(CreationProgress::needs(
            "duplicate_clause",
            vec!["true".to_string(), "false".to_string()],
        ));
    }

    if let Some(needed) = creator_for(variant_name).missing_key(dex, creation, game.generation) {
        return Ok(needed);
    }
    Ok(CreationProgress::ready())
}

/// Answer the wizard's current question.
pub fn set_value(creation: &mut RunCreation, key: &str, value: &str) -> EngineResult<()> {
    match key {
        "variant" => {
            get_variant(value)?;
            creation.variant = Some(value.to_string());
        }
        "game" => {
            get_game(value)?;
            creation.game = Some(value.to_string());
        }
        "randomized" => creation.randomized = Some(parse_bool(value)?),
        "duplicate_clause" => creation.duplicate_clause = Some(parse_bool(value)?),
        other => {
            creation.extra_info.insert(other.to_string(), value.to_string());
        }
    }
    Ok(())
}

fn parse_bool(value: &str) -> EngineResult<bool> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(EngineError::Validation(format!(
            "{} is not a boolean",
            other
        ))),
    }
}

/// Map every species in a generation to the first form of its line.
fn base_form_map(dex: &dyn Pokedex, generation: u8) -> HashMap<String, String> {
    let all = dex.species_in_generation(generation);
    let mut parent: HashMap<&str, &str> = HashMap::new();
    for species in &all {
        for child in &species.evolves_to {
            parent.insert(child.as_str(), species.name.as_str());
        }
    }
    let mut map = HashMap::new();
    for species in &all {
        let mut root = species.name.as_str();
        while let Some(p) = parent.get(root) {
            root = p;
        }
        map.insert(species.name.clone(), root.to_string());
    }
    map
}

/// Turn a completed wizard into a live run: identity, catalog and seeded
/// creatures all in place.
pub fn finalize(dex: &dyn Pokedex, creation: &RunCreation) -> EngineResult<Run> {
    let status = progress(dex, creation)?;
    if !status.ready {
        return Err(precondition(format!(
            "run creation is still missing {}",
            status.missing_key.as_deref().unwrap_or("answers")
        )));
    }
    // progress() returning ready guarantees these are set.
    let variant_name = creation.variant.as_deref().unwrap_or_default();
    let game = get_game(creation.game.as_deref().unwrap_or_default())?;
    let variant = get_variant(variant_name)?;

    let mut run = Run::new(
        generate_id(),
        creation.name.clone(),
        game.name.clone(),
        game.generation,
        variant_name,
    )?;
    run.randomized = creation.randomized.unwrap_or(false);
    run.duplicate_clause = creation.duplicate_clause.unwrap_or(false);
    run.extra_info = creation.extra_info.clone();

    let creator = creator_for(variant_name);
    if creator.catalog_from_dex(&run.extra_info) {
        let base_forms = base_form_map(dex, run.generation);
        let mut all = dex.species_in_generation(run.generation);
        all.sort_by_key(|s| s.pokedex_number);
        for species in &all {
            if !variant.is_eligible(species, &run.extra_info) {
                continue;
            }
            let base = base_forms
                .get(&species.name)
                .cloned()
                .unwrap_or_else(|| species.name.clone());
            run.push_catalog_entry(&species.name, &base, false);
        }
    }
    creator.seed(dex, &mut run)?;

    if run.variant == CHESS_NAME {
        crown_starter(&mut run)?;
    }
    log::info!(
        "created run {} ({}, {}, {} potential pokemon)",
        run.id,
        run.variant,
        run.game,
        run.catalog.len()
    );
    Ok(run)
}

/// Record which creature leads the run. For a chess run this also crowns
/// the king.
pub fn set_starter(run: &mut Run, creature_id: &str) -> EngineResult<()> {
    run.creature(creature_id)?;
    if run.starter.is_some() {
        return Err(precondition("the starter is already chosen"));
    }
    run.starter = Some(creature_id.to_string());
    if run.variant == CHESS_NAME {
        crown_starter(run)?;
    }
    if !run.squad.is_member(creature_id) && !run.squad.is_full() {
        run.squad.add(creature_id)?;
    }
    Ok(())
}
