mod data;
mod dex;
mod registry;

pub use data::{
    Ability,
    Condition,
    DexData,
    Item,
    Move,
    Species,
};
pub use dex::Dex;
pub use registry::ResourceMap;
