use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// The category of a move, which determines the stats used in the damage calculation.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum MoveCategory {
    /// Deals damage with Atk and Def.
    #[string = "Physical"]
    Physical,
    /// Deals damage with SpA and SpD.
    #[string = "Special"]
    Special,
    /// Deals no direct damage.
    #[string = "Status"]
    #[default]
    Status,
}
