use fray_data::Id;
use indexmap::IndexMap;

use crate::{
    battle::MonHandle,
    effect::EffectInstance,
};

/// One side of a battle.
///
/// Side conditions keep their registration order, so that hooks collected from them run
/// deterministically.
pub struct Side {
    /// Display name.
    pub name: String,
    /// Index of the side in the battle.
    pub index: usize,
    /// Mons on this side.
    pub mons: Vec<MonHandle>,
    /// Active side conditions.
    pub conditions: IndexMap<Id, EffectInstance>,
    /// Did a Mon on this side faint on the previous turn?
    pub fainted_last_turn: bool,
    /// Did a Mon on this side faint this turn?
    pub fainted_this_turn: bool,
}

impl Side {
    /// Creates a new, empty side.
    pub fn new(name: String, index: usize) -> Self {
        Self {
            name,
            index,
            mons: Vec::new(),
            conditions: IndexMap::new(),
            fainted_last_turn: false,
            fainted_this_turn: false,
        }
    }

    /// Checks if the side has the given condition.
    pub fn has_condition(&self, id: &Id) -> bool {
        self.conditions.contains_key(id)
    }
}
