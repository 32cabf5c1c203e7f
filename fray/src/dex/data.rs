use fray_data::{
    AbilityData,
    ConditionData,
    Id,
    Identifiable,
    ItemData,
    MoveData,
    SpeciesData,
};

use crate::effect::{
    AbilityHooks,
    ConditionHooks,
    ItemHooks,
    MoveHooks,
};

/// A move, which a Mon uses to affect its battle.
#[derive(Debug)]
pub struct Move {
    id: Id,
    /// Static data for the move.
    pub data: MoveData,
    /// Hooks extending the move's behavior.
    pub hooks: MoveHooks,
}

impl Move {
    /// Constructs a new move, deriving its id from its name.
    pub fn new(data: MoveData, hooks: MoveHooks) -> Self {
        let id = Id::from(data.name.as_ref());
        Self { id, data, hooks }
    }
}

impl Identifiable for Move {
    fn id(&self) -> &Id {
        &self.id
    }
}

/// A condition, which attaches to a Mon, side, or the field for some duration.
#[derive(Debug)]
pub struct Condition {
    id: Id,
    /// Static data for the condition.
    pub data: ConditionData,
    /// Hooks extending the condition's behavior.
    pub hooks: ConditionHooks,
}

impl Condition {
    /// Constructs a new condition, deriving its id from its name.
    pub fn new(data: ConditionData, hooks: ConditionHooks) -> Self {
        let id = Id::from(data.name.as_ref());
        Self { id, data, hooks }
    }
}

impl Identifiable for Condition {
    fn id(&self) -> &Id {
        &self.id
    }
}

/// An item, which a Mon can hold in battle.
#[derive(Debug)]
pub struct Item {
    id: Id,
    /// Static data for the item.
    pub data: ItemData,
    /// Hooks extending the item's behavior.
    pub hooks: ItemHooks,
}

impl Item {
    /// Constructs a new item, deriving its id from its name.
    pub fn new(data: ItemData, hooks: ItemHooks) -> Self {
        let id = Id::from(data.name.as_ref());
        Self { id, data, hooks }
    }
}

impl Identifiable for Item {
    fn id(&self) -> &Id {
        &self.id
    }
}

/// An ability, which passively extends a Mon's behavior.
#[derive(Debug)]
pub struct Ability {
    id: Id,
    /// Static data for the ability.
    pub data: AbilityData,
    /// Hooks extending the ability's behavior.
    pub hooks: AbilityHooks,
}

impl Ability {
    /// Constructs a new ability, deriving its id from its name.
    pub fn new(data: AbilityData, hooks: AbilityHooks) -> Self {
        let id = Id::from(data.name.as_ref());
        Self { id, data, hooks }
    }
}

impl Identifiable for Ability {
    fn id(&self) -> &Id {
        &self.id
    }
}

/// A species of Mon.
#[derive(Debug)]
pub struct Species {
    id: Id,
    /// Static data for the species.
    pub data: SpeciesData,
}

impl Species {
    /// Constructs a new species, deriving its id from its name.
    pub fn new(data: SpeciesData) -> Self {
        let id = Id::from(data.name.as_ref());
        Self { id, data }
    }
}

impl Identifiable for Species {
    fn id(&self) -> &Id {
        &self.id
    }
}

/// All resources to register on a [`Dex`][`crate::dex::Dex`].
///
/// Resources are validated together when the dex is constructed, so cross-references (such as a
/// move's status payload) may be registered in any order.
#[derive(Default)]
pub struct DexData {
    /// Moves to register.
    pub moves: Vec<Move>,
    /// Conditions to register.
    pub conditions: Vec<Condition>,
    /// Items to register.
    pub items: Vec<Item>,
    /// Abilities to register.
    pub abilities: Vec<Ability>,
    /// Species to register.
    pub species: Vec<Species>,
}

impl DexData {
    /// Registers a move.
    pub fn add_move(&mut self, data: MoveData, hooks: MoveHooks) {
        self.moves.push(Move::new(data, hooks));
    }

    /// Registers a condition.
    pub fn add_condition(&mut self, data: ConditionData, hooks: ConditionHooks) {
        self.conditions.push(Condition::new(data, hooks));
    }

    /// Registers an item.
    pub fn add_item(&mut self, data: ItemData, hooks: ItemHooks) {
        self.items.push(Item::new(data, hooks));
    }

    /// Registers an ability.
    pub fn add_ability(&mut self, data: AbilityData, hooks: AbilityHooks) {
        self.abilities.push(Ability::new(data, hooks));
    }

    /// Registers a species.
    pub fn add_species(&mut self, data: SpeciesData) {
        self.species.push(Species::new(data));
    }
}
