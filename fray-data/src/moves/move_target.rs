use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// The acceptable target(s) of a move.
///
/// In this enum, the following terms are used:
/// - "Ally" - A Mon on the same side.
/// - "Foe" - A Mon on the opposite side.
/// - "Side" - The side of a battle, not any particular Mon on that side.
/// - "Team" - All Mons on a team, including inactive ones.
/// - "User" - The user of a move.
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
pub enum MoveTarget {
    /// The user's side.
    #[string = "AllySide"]
    AllySide,
    /// All Mons on the user's team.
    #[string = "AllyTeam"]
    AllyTeam,
    /// The field.
    #[string = "Field"]
    Field,
    /// The foe's side.
    #[string = "FoeSide"]
    FoeSide,
    /// One foe Mon of the user's choice.
    #[string = "Normal"]
    #[default]
    Normal,
    /// The user of the move.
    #[string = "User"]
    #[alias = "Self"]
    User,
}

impl MoveTarget {
    /// Does the move require a single Mon target?
    pub fn requires_target(&self) -> bool {
        match self {
            Self::Normal => true,
            _ => false,
        }
    }

    /// Does the move affect Mons directly?
    pub fn affects_mons_directly(&self) -> bool {
        match self {
            Self::AllySide | Self::AllyTeam | Self::Field | Self::FoeSide => false,
            _ => true,
        }
    }
}
