use hashbrown::HashSet;
use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    Accuracy,
    BoostTable,
    Fraction,
    Id,
    MoveCategory,
    MoveFlag,
    MoveTarget,
    MultihitType,
    Type,
};

/// The effect of being hit by a move.
///
/// Every referenced condition is a name resolved against the condition registry.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HitEffect {
    /// Stat boosts.
    pub boosts: Option<BoostTable>,
    /// Status applied.
    pub status: Option<String>,
    /// Volatile status applied.
    pub volatile_status: Option<String>,
    /// Side condition applied.
    pub side_condition: Option<String>,
    /// Weather applied.
    pub weather: Option<String>,
    /// Pseudo-weather applied.
    pub pseudo_weather: Option<String>,
    /// Terrain applied.
    pub terrain: Option<String>,
}

/// Data about a secondary effect that occurs after a move hits.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct SecondaryEffectData {
    /// Chance of the effect occurring.
    pub chance: Option<Fraction>,
    /// Secondary hit effect on the target.
    pub target: Option<HitEffect>,
    /// Secondary hit effect on the user of the move.
    pub user: Option<HitEffect>,
}

/// Data about a particular move.
///
/// Moves are the primary effect that drive battle forward. Moves can damage opposing Mons, affect
/// ally Mons or the user itself, boost or drop stats, apply conditions to Mons or the battlefield
/// itself, and more.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct MoveData {
    /// Name of the move.
    pub name: String,
    /// Move category.
    pub category: MoveCategory,
    /// Move type.
    pub primary_type: Type,
    /// Base power.
    #[serde(default)]
    pub base_power: u32,
    /// Base accuracy.
    #[serde(default)]
    pub accuracy: Accuracy,
    /// Total power points, which is the number of times this move can be used.
    #[serde(default)]
    pub pp: u8,
    /// Move priority.
    #[serde(default)]
    pub priority: i8,
    /// Move target(s).
    pub target: MoveTarget,
    /// Move flags.
    #[serde(default)]
    pub flags: HashSet<MoveFlag>,

    /// Static damage dealt.
    pub damage: Option<u16>,
    /// The move hits multiple times.
    pub multihit: Option<MultihitType>,
    /// The percentage of damage dealt to drain from the target.
    pub drain_percent: Option<Fraction>,
    /// The percentage of damage dealt for recoil.
    pub recoil_percent: Option<Fraction>,
    /// The percentage of the user's maximum HP to heal.
    pub heal_percent: Option<Fraction>,

    /// Primary effect applied to the target.
    ///
    /// Applied when the move hits.
    pub hit_effect: Option<HitEffect>,
    /// Primary effect on the user.
    ///
    /// Applied at most once per use, after the first successful hit.
    pub user_effect: Option<HitEffect>,
    /// Secondary effects applied after a hit.
    #[serde(default)]
    pub secondary_effects: Vec<SecondaryEffectData>,

    /// The user switches out after using the move successfully.
    #[serde(default)]
    pub self_switch: bool,

    /// The Z-Crystal that unlocks this move, marking it as a Z-Move.
    pub is_z: Option<Id>,
    /// Power of the Z-Move upgraded from this move.
    pub z_move_power: Option<u32>,
    /// Boosts applied by the Z-Move upgraded from this move.
    pub z_move_boost: Option<BoostTable>,
}
