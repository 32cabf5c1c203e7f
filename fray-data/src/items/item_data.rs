use serde::{
    Deserialize,
    Serialize,
};

/// Data for what happens when Fling is used with this item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlingItemData {
    /// Base power of the fling.
    pub power: u32,
    /// Status applied to the target.
    pub status: Option<String>,
    /// Volatile status applied to the target.
    pub volatile_status: Option<String>,
}

fn default_takeable() -> bool {
    true
}

/// Data about a particular item.
///
/// Items can be held by a Mon in battle to produce various side effects. Items can affect move
/// calculations, weight calculations, Mega Evolution, Z-Moves, and more.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemData {
    /// Name of the item.
    pub name: String,
    /// Can the item be taken from its holder?
    ///
    /// Hooks can make this decision dynamically; this flag is the static default.
    #[serde(default = "default_takeable")]
    pub takeable: bool,
    /// Data for what happens when Fling is used with this item.
    pub fling: Option<FlingItemData>,
    /// The species that this item allows Mega Evolution from.
    pub mega_evolves_from: Option<String>,
    /// The species that this item allows Mega Evolution into.
    pub mega_evolves_into: Option<String>,
    /// The Z-Move this item unlocks.
    pub z_move: Option<String>,
    /// The move the Z-Move is upgraded from.
    pub z_move_from: Option<String>,
    /// The species that can use the Z-Move this item unlocks.
    #[serde(default)]
    pub z_move_user: Vec<String>,
}
