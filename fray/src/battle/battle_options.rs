use anyhow::Result;
use fray_data::StatTable;
use serde::{
    Deserialize,
    Serialize,
};

use crate::error::general_error;

/// Data for a single Mon entering a battle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonData {
    /// Display name.
    pub name: String,
    /// Species name.
    pub species: String,
    /// Level.
    pub level: u8,
    /// Flat stat values.
    ///
    /// `hp` doubles as the Mon's maximum HP.
    pub stats: StatTable,
    /// Ability name.
    pub ability: String,
    /// Held item name.
    #[serde(default)]
    pub item: Option<String>,
}

/// Data for one side of a battle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SideData {
    /// Side name.
    pub name: String,
    /// Members of the side.
    pub mons: Vec<MonData>,
}

/// Options for a new battle.
///
/// The random number generator and the damage engine are injected separately, since the battle
/// never owns generation or damage policy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BattleOptions {
    /// One side of the battle.
    pub side_1: SideData,
    /// The other side of the battle.
    pub side_2: SideData,
}

impl BattleOptions {
    /// Validates the battle options.
    pub fn validate(&self) -> Result<()> {
        for side in [&self.side_1, &self.side_2] {
            if side.mons.is_empty() {
                return Err(general_error(format!("{} has no mons", side.name)));
            }
        }
        Ok(())
    }
}
