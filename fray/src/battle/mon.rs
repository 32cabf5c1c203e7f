use std::{
    fmt,
    fmt::Display,
};

use anyhow::Result;
use fray_data::{
    BoostTable,
    Id,
    Stat,
    StatTable,
    Type,
};
use indexmap::IndexMap;

use crate::{
    battle::MonData,
    dex::Dex,
    effect::{
        EffectInstance,
        EffectState,
    },
};

/// A [`Mon`] handle, which refers to a single Mon across the battle's modules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonHandle(usize);

impl MonHandle {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    pub(crate) fn index(&self) -> usize {
        self.0
    }
}

impl Display for MonHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A Mon in a battle, which battles against other Mons.
///
/// Volatile conditions keep their registration order, so that hooks collected from them run
/// deterministically.
pub struct Mon {
    /// Display name.
    pub name: String,
    /// Species.
    pub species: Id,
    /// Level.
    pub level: u8,
    /// Current HP.
    pub hp: u16,
    /// Maximum HP.
    pub max_hp: u16,
    /// Flat stat values.
    pub stats: StatTable,
    /// Boost stages, each clamped to `[-6, 6]`.
    pub boosts: BoostTable,
    /// Current types.
    ///
    /// Starts as the species types, but may be rewritten by effects.
    pub types: Vec<Type>,
    /// Current ability.
    pub ability: Id,
    /// State owned by the ability.
    pub ability_state: EffectState,
    /// Held item.
    pub item: Option<Id>,
    /// Major status.
    ///
    /// At most one status occupies this slot at a time.
    pub status: Option<EffectInstance>,
    /// Active volatile conditions.
    pub volatiles: IndexMap<Id, EffectInstance>,
    /// The side the Mon belongs to.
    pub side: usize,
    /// The Mon's position on its side.
    pub position: usize,
    /// Has the Mon fainted?
    pub fainted: bool,
}

impl Mon {
    /// Creates a new Mon from its member data.
    ///
    /// Fails if the species, ability, or item is not registered.
    pub fn new(data: MonData, dex: &Dex) -> Result<Self> {
        let species_id = Id::from(data.species.as_ref());
        let species = dex.species.get(&species_id)?;
        let types = species.data.types();

        let ability = Id::from(data.ability.as_ref());
        dex.abilities.get(&ability)?;

        let item = match &data.item {
            Some(item) => {
                let item = Id::from(item.as_ref());
                dex.items.get(&item)?;
                Some(item)
            }
            None => None,
        };

        Ok(Self {
            name: data.name,
            species: species_id,
            level: data.level,
            hp: data.stats.hp,
            max_hp: data.stats.hp,
            stats: data.stats,
            boosts: BoostTable::default(),
            types,
            ability,
            ability_state: EffectState::new(),
            item,
            status: None,
            volatiles: IndexMap::new(),
            side: usize::MAX,
            position: usize::MAX,
            fainted: false,
        })
    }

    /// Position details for battle log entries, in `name,side,position` form.
    pub fn position_details(&self) -> String {
        format!("{},{},{}", self.name, self.side, self.position)
    }

    /// The Mon's current major status, if any.
    pub fn status_id(&self) -> Option<&Id> {
        self.status.as_ref().map(|instance| &instance.id)
    }

    /// Checks if the Mon has the given major status.
    pub fn has_status(&self, id: &Id) -> bool {
        self.status_id().is_some_and(|status| status == id)
    }

    /// The value of a stat after applying the Mon's boost stages.
    ///
    /// HP is never boosted.
    pub fn boosted_stat(&self, stat: Stat) -> u32 {
        let value = self.stats.get(stat) as u32;
        let stage = match stat {
            Stat::HP => return value,
            Stat::Atk => self.boosts.atk,
            Stat::Def => self.boosts.def,
            Stat::SpAtk => self.boosts.spa,
            Stat::SpDef => self.boosts.spd,
            Stat::Spe => self.boosts.spe,
        };
        if stage >= 0 {
            value * (2 + stage as u32) / 2
        } else {
            value * 2 / (2 + (-stage) as u32)
        }
    }

    /// Checks if the Mon has the given volatile condition.
    pub fn has_volatile(&self, id: &Id) -> bool {
        self.volatiles.contains_key(id)
    }

    /// Checks if the Mon is grounded.
    ///
    /// Airborne Mons (Flying types and Levitate holders) avoid hazards and ground-aimed moves,
    /// unless an effect forces them down.
    pub fn is_grounded(&self) -> bool {
        if self.volatiles.contains_key(&Id::from("smackdown"))
            || self.item.as_ref().is_some_and(|item| item.as_str() == "ironball")
        {
            return true;
        }
        !(self.types.contains(&Type::Flying) || self.ability.as_str() == "levitate")
    }

    /// Removes all volatile conditions without firing their end hooks.
    ///
    /// Exposed for the host engine's switch-out handling.
    pub fn clear_volatiles(&mut self) {
        self.volatiles.clear();
    }
}
