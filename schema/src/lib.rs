// Locke Manager Schema - Shared type definitions
// This crate contains the static reference vocabulary shared between the
// locke-manager engine and any data tooling: type/gender/nature enums,
// species records and game records.

// Re-export the main types
pub use game_data::*;
pub use pokemon_types::*;
pub use species_data::*;

pub mod game_data;
pub mod pokemon_types;
pub mod species_data;
