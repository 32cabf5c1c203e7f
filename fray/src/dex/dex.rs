use fray_data::{
    ConditionType,
    Fraction,
    HitEffect,
    Id,
    Identifiable,
    MoveCategory,
};

use crate::{
    dex::{
        Ability,
        Condition,
        DexData,
        Item,
        Move,
        ResourceMap,
        Species,
    },
    error::ValidationError,
};

/// The immutable effect registry for a battle.
///
/// A dex pairs every definition with its hook table and guarantees, at construction time, that
/// the whole catalog is internally consistent. Battle code can therefore resolve any reference a
/// validated definition makes without worrying about dangling names.
#[derive(Debug)]
pub struct Dex {
    /// All moves.
    pub moves: ResourceMap<Move>,
    /// All conditions.
    pub conditions: ResourceMap<Condition>,
    /// All items.
    pub items: ResourceMap<Item>,
    /// All abilities.
    pub abilities: ResourceMap<Ability>,
    /// All species.
    pub species: ResourceMap<Species>,
}

impl Dex {
    /// Constructs a new dex from the given resources.
    ///
    /// Validation checks the entire catalog and fails with every problem found:
    ///
    /// - a move must have PP, unless it is a Z-Move;
    /// - a damaging move declares exactly one damage model (base power, computed base power, or
    ///   static damage), and a status move declares none;
    /// - Z-Move linkage resolves in both directions between moves and Z-Crystals;
    /// - Mega Evolution linkage names registered species;
    /// - every condition named by a move's effects is registered, with the matching condition
    ///   type;
    /// - secondary effect chances do not exceed 100%;
    /// - declared side condition layer caps are positive;
    /// - weight modification hooks declare which pass they run in;
    /// - species weights are positive.
    pub fn new(data: DexData) -> Result<Self, ValidationError> {
        let mut dex = Self {
            moves: ResourceMap::new("move"),
            conditions: ResourceMap::new("condition"),
            items: ResourceMap::new("item"),
            abilities: ResourceMap::new("ability"),
            species: ResourceMap::new("species"),
        };
        for mov in data.moves {
            dex.moves.register(mov.id().clone(), mov);
        }
        for condition in data.conditions {
            dex.conditions.register(condition.id().clone(), condition);
        }
        for item in data.items {
            dex.items.register(item.id().clone(), item);
        }
        for ability in data.abilities {
            dex.abilities.register(ability.id().clone(), ability);
        }
        for species in data.species {
            dex.species.register(species.id().clone(), species);
        }
        dex.validate()?;
        Ok(dex)
    }

    fn validate(&self) -> Result<(), ValidationError> {
        let mut problems = ValidationError::default();
        for (id, mov) in self.moves.iter() {
            self.validate_move(id, mov, &mut problems);
        }
        for (id, condition) in self.conditions.iter() {
            self.validate_condition(id, condition, &mut problems);
        }
        for (id, item) in self.items.iter() {
            self.validate_item(id, item, &mut problems);
        }
        for (id, species) in self.species.iter() {
            self.validate_species(id, species, &mut problems);
        }
        problems.into_result()
    }

    fn validate_move(&self, id: &Id, mov: &Move, problems: &mut ValidationError) {
        if mov.data.pp == 0 && mov.data.is_z.is_none() {
            problems.add(format!("move {id} must have pp"));
        }

        let base_power = mov.data.base_power > 0 || mov.hooks.base_power_callback.is_some();
        let static_damage = mov.data.damage.is_some();
        if mov.data.category == MoveCategory::Status {
            if base_power || static_damage {
                problems.add(format!("status move {id} cannot declare a damage model"));
            }
        } else if base_power && static_damage {
            problems.add(format!("move {id} declares multiple damage models"));
        } else if !base_power && !static_damage {
            problems.add(format!("move {id} declares no damage model"));
        }

        if let Some(crystal) = &mov.data.is_z {
            match self.items.get(crystal) {
                Err(_) => problems.add(format!("move {id} is unlocked by unknown item {crystal}")),
                Ok(item) => {
                    let unlocks = item
                        .data
                        .z_move
                        .as_deref()
                        .is_some_and(|z_move| &Id::from(z_move) == id);
                    if !unlocks {
                        problems.add(format!("item {crystal} does not unlock move {id}"));
                    }
                }
            }
        }

        if let Some(effect) = &mov.data.hit_effect {
            self.validate_hit_effect(id, effect, problems);
        }
        if let Some(effect) = &mov.data.user_effect {
            self.validate_hit_effect(id, effect, problems);
        }
        for secondary in &mov.data.secondary_effects {
            if let Some(chance) = &secondary.chance
                && chance > &Fraction::from(1)
            {
                problems.add(format!("move {id} declares a secondary chance above 100%"));
            }
            if let Some(effect) = &secondary.target {
                self.validate_hit_effect(id, effect, problems);
            }
            if let Some(effect) = &secondary.user {
                self.validate_hit_effect(id, effect, problems);
            }
        }
    }

    fn validate_hit_effect(&self, id: &Id, effect: &HitEffect, problems: &mut ValidationError) {
        let references = [
            (effect.status.as_deref(), ConditionType::Status),
            (effect.volatile_status.as_deref(), ConditionType::Volatile),
            (effect.side_condition.as_deref(), ConditionType::SideCondition),
            (effect.weather.as_deref(), ConditionType::Weather),
            (effect.terrain.as_deref(), ConditionType::Terrain),
            (effect.pseudo_weather.as_deref(), ConditionType::PseudoWeather),
        ];
        for (name, condition_type) in references {
            let Some(name) = name else {
                continue;
            };
            match self.conditions.get(&Id::from(name)) {
                Err(_) => problems.add(format!("move {id} applies unknown condition {name}")),
                Ok(condition) => {
                    if condition.data.condition_type != condition_type {
                        problems.add(format!(
                            "move {id} applies {name} as a {condition_type}, but it is a {}",
                            condition.data.condition_type,
                        ));
                    }
                }
            }
        }
    }

    fn validate_condition(&self, id: &Id, condition: &Condition, problems: &mut ValidationError) {
        if condition.data.max_layers == Some(0) {
            problems.add(format!("condition {id} must allow at least one layer"));
        }
        if condition.hooks.on_modify_weight.is_some() && condition.hooks.weight_mod.is_none() {
            problems.add(format!("condition {id} modifies weight without declaring a pass"));
        }
    }

    fn validate_item(&self, id: &Id, item: &Item, problems: &mut ValidationError) {
        for species in [&item.data.mega_evolves_from, &item.data.mega_evolves_into] {
            if let Some(species) = species
                && !self.species.contains(&Id::from(species.as_ref()))
            {
                problems.add(format!("item {id} references unknown species {species}"));
            }
        }
        for mov in [&item.data.z_move, &item.data.z_move_from] {
            if let Some(mov) = mov
                && !self.moves.contains(&Id::from(mov.as_ref()))
            {
                problems.add(format!("item {id} references unknown move {mov}"));
            }
        }
        for species in &item.data.z_move_user {
            if !self.species.contains(&Id::from(species.as_ref())) {
                problems.add(format!("item {id} references unknown species {species}"));
            }
        }
        if item.hooks.on_modify_weight.is_some() && item.hooks.weight_mod.is_none() {
            problems.add(format!("item {id} modifies weight without declaring a pass"));
        }
    }

    fn validate_species(&self, id: &Id, species: &Species, problems: &mut ValidationError) {
        if species.data.weight == 0 {
            problems.add(format!("species {id} must have positive weight"));
        }
    }
}
