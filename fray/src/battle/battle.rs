use anyhow::Result;
use fray_data::{
    BoostTable,
    Id,
    Type,
};
use fray_prng::PseudoRandomNumberGenerator;

use crate::{
    battle::{
        ActiveMove,
        BattleOptions,
        DamageEngine,
        Field,
        Mon,
        MonHandle,
        MoveOutcome,
        Side,
        actions,
        effects,
    },
    dex::Dex,
    error::WrapOptionError,
    log::EventLog,
    log_event,
};

/// A battle between two sides.
///
/// The battle owns all runtime state: Mons, sides, the field, the event log, and the stack of
/// in-flight moves. Move and condition definitions live in the [`Dex`] and are looked up by id.
///
/// The battle is intentionally not a full turn engine. The host decides who moves and when; the
/// battle resolves each move use, tracks conditions, and reports everything that happened through
/// its log.
pub struct Battle {
    /// Registered definitions.
    pub dex: Dex,
    /// Source of all randomness in the battle.
    pub prng: Box<dyn PseudoRandomNumberGenerator>,
    /// Log of everything that has happened in the battle.
    pub log: EventLog,
    /// The current turn number.
    pub turn: u64,

    pub(crate) damage_engine: Box<dyn DamageEngine>,
    pub(crate) mons: Vec<Mon>,
    pub(crate) sides: Vec<Side>,
    pub(crate) field: Field,
    pub(crate) active_moves: Vec<ActiveMove>,
}

impl Battle {
    /// Creates a new battle.
    ///
    /// The random number generator and damage engine are injected: the battle consumes
    /// randomness and damage numbers but owns neither policy.
    pub fn new(
        options: BattleOptions,
        dex: Dex,
        prng: Box<dyn PseudoRandomNumberGenerator>,
        damage_engine: Box<dyn DamageEngine>,
    ) -> Result<Self> {
        options.validate()?;
        let mut battle = Self {
            dex,
            prng,
            log: EventLog::new(),
            turn: 1,
            damage_engine,
            mons: Vec::new(),
            sides: Vec::new(),
            field: Field::default(),
            active_moves: Vec::new(),
        };
        for (index, side_data) in [options.side_1, options.side_2].into_iter().enumerate() {
            let mut side = Side::new(side_data.name, index);
            for (position, mon_data) in side_data.mons.into_iter().enumerate() {
                let mut mon = Mon::new(mon_data, &battle.dex)?;
                mon.side = index;
                mon.position = position;
                let handle = MonHandle::new(battle.mons.len());
                battle.mons.push(mon);
                side.mons.push(handle);
            }
            battle.sides.push(side);
        }
        battle.log.push(log_event!("turn", ("turn", battle.turn)));
        Ok(battle)
    }

    /// The Mon behind the given handle.
    pub fn mon(&self, mon: MonHandle) -> Result<&Mon> {
        self.mons
            .get(mon.index())
            .wrap_not_found_error_with_format(format_args!("mon {mon}"))
    }

    /// The Mon behind the given handle, mutably.
    pub fn mon_mut(&mut self, mon: MonHandle) -> Result<&mut Mon> {
        self.mons
            .get_mut(mon.index())
            .wrap_not_found_error_with_format(format_args!("mon {mon}"))
    }

    /// Handles for every Mon in the battle, in side order.
    pub fn all_mon_handles(&self) -> Vec<MonHandle> {
        (0..self.mons.len()).map(MonHandle::new).collect()
    }

    /// The side at the given index.
    pub fn side(&self, side: usize) -> Result<&Side> {
        self.sides
            .get(side)
            .wrap_not_found_error_with_format(format_args!("side {side}"))
    }

    /// The side at the given index, mutably.
    pub fn side_mut(&mut self, side: usize) -> Result<&mut Side> {
        self.sides
            .get_mut(side)
            .wrap_not_found_error_with_format(format_args!("side {side}"))
    }

    /// All sides of the battle.
    pub fn sides(&self) -> &[Side] {
        &self.sides
    }

    /// The index of the side opposing the given side.
    pub fn foe_side(&self, side: usize) -> usize {
        1 - side
    }

    /// The battlefield.
    pub fn field(&self) -> &Field {
        &self.field
    }

    /// The battlefield, mutably.
    pub fn field_mut(&mut self) -> &mut Field {
        &mut self.field
    }

    /// The move currently being used.
    ///
    /// When a move triggers another move, the inner use is on top of the stack until it
    /// finishes.
    pub fn active_move(&self) -> Result<&ActiveMove> {
        self.active_moves.last().wrap_expectation("no active move")
    }

    /// The move currently being used, mutably.
    pub fn active_move_mut(&mut self) -> Result<&mut ActiveMove> {
        self.active_moves
            .last_mut()
            .wrap_expectation("no active move")
    }

    pub(crate) fn push_active_move(&mut self, active_move: ActiveMove) {
        self.active_moves.push(active_move);
    }

    pub(crate) fn pop_active_move(&mut self) {
        self.active_moves.pop();
    }

    /// Uses a move.
    ///
    /// The target is required for moves that target a single foe and ignored for moves that
    /// target the user, a side, or the field.
    pub fn do_move(
        &mut self,
        user: MonHandle,
        move_id: &Id,
        target: Option<MonHandle>,
    ) -> Result<MoveOutcome> {
        actions::do_move(self, user, move_id, target)
    }

    /// Applies a volatile condition to a Mon.
    pub fn add_volatile(
        &mut self,
        mon: MonHandle,
        id: &Id,
        source: Option<MonHandle>,
    ) -> Result<bool> {
        actions::add_volatile(self, mon, id, source)
    }

    /// Removes a volatile condition from a Mon.
    pub fn remove_volatile(&mut self, mon: MonHandle, id: &Id) -> Result<bool> {
        actions::remove_volatile(self, mon, id)
    }

    /// Applies a side condition, or another layer of it, to a side.
    pub fn add_side_condition(
        &mut self,
        side: usize,
        id: &Id,
        source: Option<MonHandle>,
    ) -> Result<bool> {
        actions::add_side_condition(self, side, id, source)
    }

    /// Removes a side condition, including all of its layers.
    pub fn remove_side_condition(&mut self, side: usize, id: &Id) -> Result<bool> {
        actions::remove_side_condition(self, side, id)
    }

    /// Sets the weather, ending any previous weather.
    pub fn set_weather(&mut self, id: &Id, source: Option<MonHandle>) -> Result<bool> {
        actions::set_weather(self, id, source)
    }

    /// Clears the weather.
    pub fn clear_weather(&mut self) -> Result<bool> {
        actions::clear_weather(self)
    }

    /// Sets the terrain, ending any previous terrain.
    pub fn set_terrain(&mut self, id: &Id, source: Option<MonHandle>) -> Result<bool> {
        actions::set_terrain(self, id, source)
    }

    /// Clears the terrain.
    pub fn clear_terrain(&mut self) -> Result<bool> {
        actions::clear_terrain(self)
    }

    /// Adds a pseudo-weather to the field.
    pub fn add_pseudo_weather(&mut self, id: &Id, source: Option<MonHandle>) -> Result<bool> {
        actions::add_pseudo_weather(self, id, source)
    }

    /// Removes a pseudo-weather from the field.
    pub fn remove_pseudo_weather(&mut self, id: &Id) -> Result<bool> {
        actions::remove_pseudo_weather(self, id)
    }

    /// Tries to apply a major status to a Mon.
    ///
    /// Fails if the Mon already has a status or has fainted.
    pub fn try_set_status(
        &mut self,
        mon: MonHandle,
        id: &Id,
        source: Option<MonHandle>,
    ) -> Result<bool> {
        actions::try_set_status(self, mon, id, source)
    }

    /// Applies a major status to a Mon, replacing any current status.
    ///
    /// Fails only if the Mon already has this exact status or has fainted.
    pub fn set_status(
        &mut self,
        mon: MonHandle,
        id: &Id,
        source: Option<MonHandle>,
    ) -> Result<bool> {
        actions::set_status(self, mon, id, source)
    }

    /// Cures a Mon's major status.
    pub fn cure_status(&mut self, mon: MonHandle) -> Result<bool> {
        actions::cure_status(self, mon)
    }

    /// Changes a Mon's ability.
    ///
    /// The outgoing ability's end hook fires before the change and the incoming ability's start
    /// hook fires after it.
    pub fn set_ability(&mut self, mon: MonHandle, id: &Id) -> Result<bool> {
        actions::set_ability(self, mon, id)
    }

    /// Swaps the abilities of two Mons.
    ///
    /// The swap is atomic: if either Mon's current ability cannot be swapped, neither Mon
    /// changes.
    pub fn swap_abilities(&mut self, mon: MonHandle, other: MonHandle) -> Result<bool> {
        actions::swap_abilities(self, mon, other)
    }

    /// Replaces a Mon's type list.
    pub fn set_types(&mut self, mon: MonHandle, types: Vec<Type>) -> Result<bool> {
        actions::set_types(self, mon, types)
    }

    /// Takes a Mon's held item, if it can be taken.
    pub fn take_item(&mut self, mon: MonHandle, taker: Option<MonHandle>) -> Result<Option<Id>> {
        actions::take_item(self, mon, taker)
    }

    /// Gives a Mon an item, replacing any held item.
    pub fn set_item(&mut self, mon: MonHandle, id: &Id) -> Result<bool> {
        actions::set_item(self, mon, id)
    }

    /// Applies stat boosts to a Mon, clamping each stage to `[-6, 6]`.
    pub fn boost(&mut self, mon: MonHandle, boosts: &BoostTable) -> Result<bool> {
        actions::boost(self, mon, boosts)
    }

    /// Damages a Mon directly, outside of a move's damage calculation.
    ///
    /// Returns the amount of HP actually lost.
    pub fn damage(&mut self, mon: MonHandle, amount: u16) -> Result<u16> {
        actions::damage_mon(self, mon, amount)
    }

    /// Heals a Mon.
    ///
    /// Returns the amount of HP actually restored.
    pub fn heal(&mut self, mon: MonHandle, amount: u16) -> Result<u16> {
        actions::heal_mon(self, mon, amount)
    }

    /// Faints a Mon.
    pub fn faint(&mut self, mon: MonHandle) -> Result<()> {
        actions::faint(self, mon)
    }

    /// A Mon's effective weight, in hectograms.
    ///
    /// Recomputed on every call by running the weight modification pipeline over the Mon's
    /// active effects.
    pub fn effective_weight(&mut self, mon: MonHandle) -> Result<u32> {
        effects::effective_weight(self, mon)
    }

    /// Advances the battle to the next turn.
    ///
    /// Runs the residual pass: expired conditions end, and each side's faint tracking rolls
    /// over.
    pub fn advance_turn(&mut self) -> Result<()> {
        actions::advance_turn(self)
    }
}
