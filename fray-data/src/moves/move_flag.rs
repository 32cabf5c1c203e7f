use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// Move flags, which categorize moves for miscellaneous behavior (such as bans or side effects).
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, SerializeLabeledStringEnum, DeserializeLabeledStringEnum,
)]
pub enum MoveFlag {
    /// A bite move.
    #[string = "Bite"]
    Bite,
    /// Bypasses a target's substitute.
    #[string = "BypassSubstitute"]
    #[alias = "Authentic"]
    BypassSubstitute,
    /// Makes contact.
    #[string = "Contact"]
    Contact,
    /// Cannot be used during Gravity's effect.
    #[string = "Gravity"]
    Gravity,
    /// Cannot be used during Heal Block's effect.
    #[string = "Heal"]
    Heal,
    /// Can be copied by Mirror Move.
    #[string = "Mirror"]
    Mirror,
    /// Blocked by protection moves.
    #[string = "Protect"]
    Protect,
    /// A reflectable move.
    #[string = "Reflectable"]
    Reflectable,
    /// Can be stolen by Snatch.
    #[string = "Snatch"]
    Snatch,
    /// A sound move.
    #[string = "Sound"]
    Sound,
}
