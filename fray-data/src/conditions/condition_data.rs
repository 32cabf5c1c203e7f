use serde::{
    Deserialize,
    Serialize,
};
use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// The type of a condition, which determines where it attaches in a battle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, SerializeLabeledStringEnum, DeserializeLabeledStringEnum)]
pub enum ConditionType {
    /// Status, which is applied to a single Mon.
    ///
    /// A Mon has at most one status at a time.
    #[string = "Status"]
    Status,
    /// Volatile, which is applied to a single Mon alongside any number of other volatiles.
    #[string = "Volatile"]
    Volatile,
    /// Side condition, which is applied to one side of the battlefield.
    #[string = "Side Condition"]
    #[alias = "SideCondition"]
    SideCondition,
    /// Weather, which is applied to the entire battlefield.
    ///
    /// The battlefield has at most one weather at a time.
    #[string = "Weather"]
    Weather,
    /// Terrain, which is applied to the entire battlefield.
    ///
    /// The battlefield has at most one terrain at a time.
    #[string = "Terrain"]
    Terrain,
    /// Pseudo-weather, which is applied to the entire battlefield alongside any number of other
    /// pseudo-weathers.
    #[string = "Pseudo-Weather"]
    #[alias = "PseudoWeather"]
    PseudoWeather,
}

/// Data about a particular condition.
///
/// Conditions are applied to Mons, sides, or the battlefield as the result of moves, items, or
/// abilities.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConditionData {
    /// Condition name.
    pub name: String,
    /// Condition type.
    pub condition_type: ConditionType,
    /// Default duration, in turns.
    ///
    /// Conditions with no duration last until removed.
    pub duration: Option<u8>,
    /// Maximum number of stackable layers, for side conditions.
    pub max_layers: Option<u8>,
    /// Can this condition be copied from one Mon to another?
    #[serde(default)]
    pub no_copy: bool,
}
