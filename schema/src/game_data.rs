use crate::Region;
use serde::{Deserialize, Serialize};

/// Static description of one game cartridge: which generation and region it
/// belongs to and the fixed rosters a run is measured against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameData {
    pub name: String,
    pub generation: u8,
    pub region: Region,
    /// The three starter species offered at the beginning of the game.
    pub starters: Vec<String>,
    /// Gym leaders, in badge order.
    pub gyms: Vec<String>,
    /// The elite trainers fought at the end of the game.
    pub elite_four: Vec<String>,
    pub routes: Vec<String>,
}

impl GameData {
    /// Number of mandatory battles a finished run must have recorded.
    pub fn required_battles(&self) -> usize {
        self.gyms.len() + self.elite_four.len()
    }
}
