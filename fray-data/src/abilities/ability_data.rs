use serde::{
    Deserialize,
    Serialize,
};

/// Data about a particular ability.
///
/// Every Mon has one ability, which affects the battle in a wide variety of ways.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AbilityData {
    /// Name of the ability.
    pub name: String,
}
