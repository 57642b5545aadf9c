use crate::errors::{EngineResult, NotFoundError};
use crate::variants::base::{BaseVariant, BASE_NAME};
use crate::variants::castform::{CastformVariant, CASTFORM_NAME};
use crate::variants::category::{CategoryVariant, CATEGORY_NAME};
use crate::variants::chess::{ChessVariant, CHESS_NAME};
use crate::variants::color::{ColorVariant, COLOR_NAME};
use crate::variants::deoxys::{DeoxysVariant, DEOXYS_NAME};
use crate::variants::eevee::{EeveeVariant, EEVEE_NAME};
use crate::variants::genlocke::{GenVariant, GEN_NAME};
use crate::variants::leg::{LegVariant, LEG_NAME};
use crate::variants::mono::{MonoVariant, MONO_NAME};
use crate::variants::star::{StarVariant, STAR_NAME};
use crate::variants::starter::{StarterVariant, STARTER_NAME};
use crate::variants::unique::{UniqueVariant, UNIQUE_NAME};
use crate::variants::wed::{WedVariant, WED_NAME};
use crate::variants::wrap::{WrapVariant, WRAP_NAME};
use crate::variants::Variant;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Every known ruleset, keyed by registry name. Read-only after startup.
static REGISTRY: LazyLock<HashMap<&'static str, &'static dyn Variant>> = LazyLock::new(|| {
    let variants: Vec<&'static dyn Variant> = vec![
        &BaseVariant,
        &MonoVariant,
        &ColorVariant,
        &CategoryVariant,
        &LegVariant,
        &UniqueVariant,
        &WedVariant,
        &ChessVariant,
        &StarVariant,
        &StarterVariant,
        &WrapVariant,
        &EeveeVariant,
        &CastformVariant,
        &DeoxysVariant,
        &GenVariant,
    ];
    variants.into_iter().map(|v| (v.name(), v)).collect()
});

pub fn get_variant(name: &str) -> EngineResult<&'static dyn Variant> {
    REGISTRY
        .get(name)
        .copied()
        .ok_or_else(|| NotFoundError::Variant(name.to_string()).into())
}

/// All registry names, sorted for stable presentation.
pub fn variant_names() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = REGISTRY.keys().copied().collect();
    names.sort_unstable();
    names
}

/// Inner rulesets a campaign may wrap. The campaign itself is excluded.
pub fn delegable_names() -> Vec<&'static str> {
    variant_names()
        .into_iter()
        .filter(|name| *name != GEN_NAME)
        .collect()
}
