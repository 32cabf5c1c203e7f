//! The built-in "seasonal" definition catalog.
//!
//! Every extension point of the battle engine is exercised by at least one definition here, so
//! the catalog doubles as a reference for how moves, conditions, items, abilities, and species
//! are written against the engine's public interface.

mod abilities;
mod conditions;
mod items;
mod moves;
mod species;

use crate::{
    dex::{
        Dex,
        DexData,
    },
    error::ValidationError,
};

/// Constructs the raw catalog data, ready for registration.
pub fn dex_data() -> DexData {
    let mut data = DexData::default();
    moves::add_moves(&mut data);
    conditions::add_conditions(&mut data);
    items::add_items(&mut data);
    abilities::add_abilities(&mut data);
    species::add_species(&mut data);
    data
}

/// Constructs a validated dex holding the full catalog.
pub fn dex() -> Result<Dex, ValidationError> {
    Dex::new(dex_data())
}
