mod accuracy;
mod boost;
mod move_category;
mod move_data;
mod move_flag;
mod move_target;
mod multihit_type;

pub use accuracy::Accuracy;
pub use boost::{
    Boost,
    BoostTable,
    BoostTableEntries,
};
pub use move_category::MoveCategory;
pub use move_data::{
    HitEffect,
    MoveData,
    SecondaryEffectData,
};
pub use move_flag::MoveFlag;
pub use move_target::MoveTarget;
pub use multihit_type::MultihitType;
