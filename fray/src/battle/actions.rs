//! Battle actions: the move-use pipeline and every state mutation it is built from.
//!
//! All mutations flow through the functions in this module, so that lifecycle hooks and log
//! events fire in one place. [`Battle`] exposes thin wrappers around them.

use anyhow::Result;
use fray_data::{
    Accuracy,
    BoostTable,
    ConditionData,
    ConditionType,
    Fraction,
    HitEffect,
    Id,
    MoveCategory,
    MoveTarget,
    MultihitType,
    Stat,
    Type,
};
use fray_prng::rand_util;

use crate::{
    battle::{
        ActiveMove,
        Battle,
        DamageContext,
        MonHandle,
        MoveEventResult,
        MoveOutcome,
        MoveOutcomeOnTarget,
        effects,
        logs,
    },
    effect::{
        ConditionHooks,
        EffectInstance,
        EffectState,
    },
    error::WrapOptionError,
};

/// Abilities that can neither be overwritten nor moved to another Mon.
///
/// These abilities are tied to the identity of their species, so ability mutation treats them
/// as immovable on both ends of the operation.
pub const ABILITY_SWAP_DENYLIST: [&str; 11] = [
    "battlebond",
    "comatose",
    "disguise",
    "illusion",
    "multitype",
    "powerconstruct",
    "rkssystem",
    "schooling",
    "shieldsdown",
    "stancechange",
    "wonderguard",
];

fn ability_locked(id: &Id) -> bool {
    ABILITY_SWAP_DENYLIST.contains(&id.as_str())
}

/// What a single hit of the active move lands on.
#[derive(Debug, Clone, Copy)]
enum HitTarget {
    Mon(MonHandle),
    Side(usize),
    Field,
}

struct HitRecord {
    outcome: MoveOutcomeOnTarget,
    result: MoveEventResult,
}

/// Uses a move.
///
/// Unknown move ids fail here, before any state changes. The active move lives on the battle's
/// stack for the duration of the use, so hooks that trigger another move nest correctly.
pub fn do_move(
    battle: &mut Battle,
    user: MonHandle,
    move_id: &Id,
    target: Option<MonHandle>,
) -> Result<MoveOutcome> {
    let active_move = {
        let mov = battle.dex.moves.get(move_id)?;
        ActiveMove::new(mov, user, target)
    };
    if battle.mon(user)?.fainted {
        return Ok(MoveOutcome::Failed);
    }
    battle.push_active_move(active_move);
    let outcome = use_active_move(battle, user);
    battle.pop_active_move();
    outcome
}

fn use_active_move(battle: &mut Battle, user: MonHandle) -> Result<MoveOutcome> {
    let move_name = battle.active_move()?.data.name.clone();
    let declared_target = battle.active_move()?.target;
    let hit_target = resolve_hit_target(battle, user, declared_target)?;
    let mon_target = match hit_target {
        HitTarget::Mon(target) => Some(target),
        _ => None,
    };

    logs::use_move(battle, user, &move_name, mon_target)?;

    if let Some(target) = mon_target {
        if battle.mon(target)?.fainted {
            logs::fail(battle, user)?;
            return Ok(MoveOutcome::Failed);
        }
        // Accuracy applies to moves aimed at a foe.
        if battle.active_move()?.data.target == MoveTarget::Normal {
            let accuracy = effects::run_modify_accuracy(battle, user, target)?;
            if let Accuracy::Chance(percent) = accuracy {
                if !rand_util::chance(battle.prng.as_mut(), percent as u64, 100) {
                    logs::miss(battle, user, target)?;
                    return Ok(MoveOutcome::Failed);
                }
            }
        }
    }

    // The move may rewrite its own data before damage numbers resolve.
    if let Some(hook) = battle.active_move()?.hooks.on_modify_move {
        hook(battle, user, mon_target)?;
    }

    // Computed base power replaces the static value for the whole use.
    if let Some(hook) = battle.active_move()?.hooks.base_power_callback {
        let measured = mon_target.unwrap_or(user);
        let base_power = hook(battle, user, measured)?;
        battle.active_move_mut()?.data.base_power = base_power;
    }

    // Presentation only.
    if let Some(hook) = battle.active_move()?.hooks.on_prepare_hit {
        hook(battle, user, mon_target)?;
    }

    // Final veto based on combatant state.
    if let Some(hook) = battle.active_move()?.hooks.on_try {
        let result = hook(battle, user, mon_target)?;
        if !result.advance() {
            if result.failed() {
                logs::fail(battle, user)?;
            }
            return Ok(MoveOutcome::Failed);
        }
    }

    let multihit = battle.active_move()?.data.multihit;
    let hits = match multihit {
        None => 1,
        Some(MultihitType::Static(n)) => n,
        Some(MultihitType::Range(min, max)) => {
            rand_util::range(battle.prng.as_mut(), min as u64, max as u64 + 1) as u8
        }
    };

    let mut hits_succeeded = 0;
    for hit in 1..=hits {
        battle.active_move_mut()?.hit = hit;
        let record = run_hit(battle, user, hit_target)?;
        if record.result.failed() {
            // The hit had no effect, but damage already dealt still costs recoil.
            logs::fail(battle, user)?;
            settle_recoil(battle, user, record.outcome.damage())?;
            break;
        }
        hits_succeeded += 1;

        // Declared self-effects apply once per use, after the first successful hit.
        apply_user_effect(battle, user)?;

        run_secondary_effects(battle, user, mon_target)?;

        if let Some(hook) = battle.active_move()?.hooks.on_after_hit {
            hook(battle, user, mon_target)?;
        }

        settle_recoil(battle, user, record.outcome.damage())?;
        settle_drain(battle, user, record.outcome.damage())?;

        if let Some(target) = mon_target {
            if battle.mon(target)?.fainted {
                break;
            }
        }
        if battle.mon(user)?.fainted {
            break;
        }
    }

    if multihit.is_some() && hits_succeeded > 0 {
        logs::hit_count(battle, hits_succeeded);
    }

    if hits_succeeded == 0 {
        return Ok(MoveOutcome::Failed);
    }

    // Declared healing settles once per use.
    if let Some(heal) = battle.active_move()?.data.heal_percent.clone() {
        let max_hp = battle.mon(user)?.max_hp;
        heal_mon(battle, user, fraction_of(&heal, max_hp))?;
    }

    if let Some(hook) = battle.active_move()?.hooks.on_after_move {
        hook(battle, user, mon_target)?;
    }
    if battle.active_move()?.data.self_switch && !battle.mon(user)?.fainted {
        logs::switch_request(battle, user)?;
    }

    Ok(MoveOutcome::Success)
}

fn resolve_hit_target(
    battle: &Battle,
    user: MonHandle,
    target: Option<MonHandle>,
) -> Result<HitTarget> {
    let move_target = battle.active_move()?.data.target;
    let user_side = battle.mon(user)?.side;
    match move_target {
        MoveTarget::Normal => {
            let target = target.wrap_expectation_with_format(format_args!(
                "move {} requires a target",
                battle.active_move()?.data.name,
            ))?;
            Ok(HitTarget::Mon(target))
        }
        MoveTarget::User => Ok(HitTarget::Mon(user)),
        MoveTarget::AllySide | MoveTarget::AllyTeam => Ok(HitTarget::Side(user_side)),
        MoveTarget::FoeSide => Ok(HitTarget::Side(battle.foe_side(user_side))),
        MoveTarget::Field => Ok(HitTarget::Field),
    }
}

/// Runs one hit: direct damage, then the move's declared payloads, then the hit hook for the
/// target kind.
///
/// Payloads that amount to nothing do not fail the hit. Only an explicit fail from the hit hook
/// does.
fn run_hit(battle: &mut Battle, user: MonHandle, hit_target: HitTarget) -> Result<HitRecord> {
    let mut outcome = MoveOutcomeOnTarget::Success;
    if let HitTarget::Mon(target) = hit_target {
        if battle.active_move()?.data.category != MoveCategory::Status {
            let computed = compute_damage(battle, user, target)?;
            let dealt = damage_mon(battle, target, computed)?;
            battle.active_move_mut()?.total_damage += dealt as u64;
            outcome = MoveOutcomeOnTarget::Damage(dealt);
        }
    }

    if let Some(effect) = battle.active_move()?.data.hit_effect.clone() {
        match hit_target {
            HitTarget::Mon(target) => apply_mon_hit_effect(battle, user, target, &effect)?,
            HitTarget::Side(side) => apply_side_hit_effect(battle, user, side, &effect)?,
            HitTarget::Field => apply_field_hit_effect(battle, user, &effect)?,
        }
    }

    let result = match hit_target {
        HitTarget::Mon(target) => match battle.active_move()?.hooks.on_hit {
            Some(hook) => hook(battle, user, Some(target))?,
            None => MoveEventResult::Advance,
        },
        HitTarget::Side(side) => match battle.active_move()?.hooks.on_hit_side {
            Some(hook) => hook(battle, user, side)?,
            None => MoveEventResult::Advance,
        },
        HitTarget::Field => match battle.active_move()?.hooks.on_hit_field {
            Some(hook) => hook(battle, user)?,
            None => MoveEventResult::Advance,
        },
    };
    Ok(HitRecord { outcome, result })
}

fn compute_damage(battle: &mut Battle, user: MonHandle, target: MonHandle) -> Result<u16> {
    let (static_damage, category, base_power) = {
        let data = &battle.active_move()?.data;
        (data.damage, data.category, data.base_power)
    };
    if let Some(damage) = static_damage {
        return Ok(damage);
    }
    let (attack_stat, defense_stat) = match category {
        MoveCategory::Physical => (Stat::Atk, Stat::Def),
        _ => (Stat::SpAtk, Stat::SpDef),
    };
    let context = DamageContext {
        level: battle.mon(user)?.level,
        base_power,
        category,
        attack: battle.mon(user)?.boosted_stat(attack_stat),
        defense: battle.mon(target)?.boosted_stat(defense_stat),
    };
    Ok(battle.damage_engine.damage(&context))
}

fn apply_user_effect(battle: &mut Battle, user: MonHandle) -> Result<()> {
    if battle.active_move()?.applied_user_effect {
        return Ok(());
    }
    let Some(effect) = battle.active_move()?.data.user_effect.clone() else {
        return Ok(());
    };
    battle.active_move_mut()?.applied_user_effect = true;
    apply_mon_hit_effect(battle, user, user, &effect)
}

/// Samples and applies the active move's secondary effects.
///
/// A secondary with no chance is unconditional. The roll is uniform over `[1, 100]`, and the
/// payload applies iff `roll <= chance * 100`.
fn run_secondary_effects(
    battle: &mut Battle,
    user: MonHandle,
    target: Option<MonHandle>,
) -> Result<()> {
    let secondary_effects = battle.active_move()?.data.secondary_effects.clone();
    for secondary in secondary_effects {
        if let Some(chance) = &secondary.chance {
            let roll = rand_util::range(battle.prng.as_mut(), 1, 101) as u32;
            if Fraction::from(roll) > chance * 100 {
                continue;
            }
        }
        if let Some(effect) = &secondary.target {
            if let Some(target) = target {
                if !battle.mon(target)?.fainted {
                    apply_mon_hit_effect(battle, user, target, effect)?;
                }
            }
        }
        if let Some(effect) = &secondary.user {
            if !battle.mon(user)?.fainted {
                apply_mon_hit_effect(battle, user, user, effect)?;
            }
        }
    }
    Ok(())
}

fn settle_recoil(battle: &mut Battle, user: MonHandle, hit_damage: u16) -> Result<()> {
    if hit_damage == 0 {
        return Ok(());
    }
    let Some(recoil) = battle.active_move()?.data.recoil_percent.clone() else {
        return Ok(());
    };
    damage_mon(battle, user, fraction_of(&recoil, hit_damage))?;
    Ok(())
}

fn settle_drain(battle: &mut Battle, user: MonHandle, hit_damage: u16) -> Result<()> {
    if hit_damage == 0 {
        return Ok(());
    }
    let Some(drain) = battle.active_move()?.data.drain_percent.clone() else {
        return Ok(());
    };
    heal_mon(battle, user, fraction_of(&drain, hit_damage))?;
    Ok(())
}

/// A fraction of an HP amount, rounded down but never to zero.
fn fraction_of(fraction: &Fraction, amount: u16) -> u16 {
    if amount == 0 {
        return 0;
    }
    (fraction * amount as u32).integer().max(1).min(u16::MAX as u32) as u16
}

fn apply_mon_hit_effect(
    battle: &mut Battle,
    user: MonHandle,
    target: MonHandle,
    effect: &HitEffect,
) -> Result<()> {
    if let Some(boosts) = &effect.boosts {
        boost(battle, target, boosts)?;
    }
    if let Some(status) = &effect.status {
        try_set_status(battle, target, &Id::from(status.as_ref()), Some(user))?;
    }
    if let Some(volatile) = &effect.volatile_status {
        add_volatile(battle, target, &Id::from(volatile.as_ref()), Some(user))?;
    }
    if let Some(side_condition) = &effect.side_condition {
        let side = battle.mon(target)?.side;
        add_side_condition(battle, side, &Id::from(side_condition.as_ref()), Some(user))?;
    }
    apply_field_hit_effect(battle, user, effect)
}

fn apply_side_hit_effect(
    battle: &mut Battle,
    user: MonHandle,
    side: usize,
    effect: &HitEffect,
) -> Result<()> {
    if let Some(side_condition) = &effect.side_condition {
        add_side_condition(battle, side, &Id::from(side_condition.as_ref()), Some(user))?;
    }
    apply_field_hit_effect(battle, user, effect)
}

fn apply_field_hit_effect(battle: &mut Battle, user: MonHandle, effect: &HitEffect) -> Result<()> {
    if let Some(weather) = &effect.weather {
        set_weather(battle, &Id::from(weather.as_ref()), Some(user))?;
    }
    if let Some(terrain) = &effect.terrain {
        set_terrain(battle, &Id::from(terrain.as_ref()), Some(user))?;
    }
    if let Some(pseudo_weather) = &effect.pseudo_weather {
        add_pseudo_weather(battle, &Id::from(pseudo_weather.as_ref()), Some(user))?;
    }
    Ok(())
}

/// Looks up a condition of the expected type, degrading to a logged no-op on a bad reference.
///
/// Move payloads are validated against the registry up front, but hooks can name any id at
/// runtime. A bad reference must not poison the battle.
fn condition_entry(
    battle: &mut Battle,
    id: &Id,
    condition_type: ConditionType,
) -> Option<(ConditionData, ConditionHooks)> {
    let found = match battle.dex.conditions.get(id) {
        Ok(condition) => Some((condition.data.clone(), condition.hooks)),
        Err(_) => None,
    };
    match found {
        None => {
            logs::debug_unknown(battle, "condition", id);
            None
        }
        Some((data, _)) if data.condition_type != condition_type => {
            logs::debug(battle, format!("{id} is not a {condition_type}"));
            None
        }
        entry => entry,
    }
}

fn condition_name(battle: &Battle, id: &Id) -> String {
    match battle.dex.conditions.get(id) {
        Ok(condition) => condition.data.name.clone(),
        Err(_) => id.to_string(),
    }
}

fn ability_name(battle: &Battle, id: &Id) -> String {
    match battle.dex.abilities.get(id) {
        Ok(ability) => ability.data.name.clone(),
        Err(_) => id.to_string(),
    }
}

pub fn add_volatile(
    battle: &mut Battle,
    mon: MonHandle,
    id: &Id,
    source: Option<MonHandle>,
) -> Result<bool> {
    let Some((data, hooks)) = condition_entry(battle, id, ConditionType::Volatile) else {
        return Ok(false);
    };
    if battle.mon(mon)?.fainted {
        return Ok(false);
    }
    if battle.mon(mon)?.has_volatile(id) {
        let Some(hook) = hooks.on_restart else {
            return Ok(false);
        };
        return Ok(hook(battle, mon, source)?.advance());
    }
    // The instance exists before the start hook runs, so the hook can adjust it.
    let instance = EffectInstance::new(id.clone(), source, battle.turn, data.duration);
    battle.mon_mut(mon)?.volatiles.insert(id.clone(), instance);
    if let Some(hook) = hooks.on_start {
        if hook(battle, mon, source)?.failed() {
            battle.mon_mut(mon)?.volatiles.shift_remove(id);
            return Ok(false);
        }
    }
    logs::add_volatile(battle, mon, &data.name)?;
    Ok(true)
}

pub fn remove_volatile(battle: &mut Battle, mon: MonHandle, id: &Id) -> Result<bool> {
    let Some((data, hooks)) = condition_entry(battle, id, ConditionType::Volatile) else {
        return Ok(false);
    };
    if !battle.mon(mon)?.has_volatile(id) {
        return Ok(false);
    }
    if let Some(hook) = hooks.on_end {
        hook(battle, mon)?;
    }
    battle.mon_mut(mon)?.volatiles.shift_remove(id);
    logs::remove_volatile(battle, mon, &data.name)?;
    Ok(true)
}

pub fn add_side_condition(
    battle: &mut Battle,
    side: usize,
    id: &Id,
    source: Option<MonHandle>,
) -> Result<bool> {
    let Some((data, hooks)) = condition_entry(battle, id, ConditionType::SideCondition) else {
        return Ok(false);
    };
    let existing_layers = battle
        .side(side)?
        .conditions
        .get(id)
        .map(|instance| instance.layers);
    match existing_layers {
        Some(layers) => {
            let cap = data.max_layers.unwrap_or(1);
            if layers >= cap {
                return Ok(false);
            }
            if let Some(instance) = battle.side_mut(side)?.conditions.get_mut(id) {
                instance.layers += 1;
            }
            if let Some(hook) = hooks.on_side_restart {
                if hook(battle, side, source)?.failed() {
                    if let Some(instance) = battle.side_mut(side)?.conditions.get_mut(id) {
                        instance.layers -= 1;
                    }
                    return Ok(false);
                }
            }
            logs::side_condition(battle, side, &data.name, layers + 1)?;
            Ok(true)
        }
        None => {
            let instance = EffectInstance::new(id.clone(), source, battle.turn, data.duration);
            battle.side_mut(side)?.conditions.insert(id.clone(), instance);
            if let Some(hook) = hooks.on_side_start {
                if hook(battle, side, source)?.failed() {
                    battle.side_mut(side)?.conditions.shift_remove(id);
                    return Ok(false);
                }
            }
            logs::side_condition(battle, side, &data.name, 1)?;
            Ok(true)
        }
    }
}

pub fn remove_side_condition(battle: &mut Battle, side: usize, id: &Id) -> Result<bool> {
    let Some((data, hooks)) = condition_entry(battle, id, ConditionType::SideCondition) else {
        return Ok(false);
    };
    if !battle.side(side)?.has_condition(id) {
        return Ok(false);
    }
    if let Some(hook) = hooks.on_side_end {
        hook(battle, side)?;
    }
    battle.side_mut(side)?.conditions.shift_remove(id);
    logs::side_end(battle, side, &data.name)?;
    Ok(true)
}

pub fn set_weather(battle: &mut Battle, id: &Id, source: Option<MonHandle>) -> Result<bool> {
    let Some((data, hooks)) = condition_entry(battle, id, ConditionType::Weather) else {
        return Ok(false);
    };
    if battle.field().weather_id() == Some(id) {
        return Ok(false);
    }
    clear_weather(battle)?;
    let instance = EffectInstance::new(id.clone(), source, battle.turn, data.duration);
    battle.field_mut().weather = Some(instance);
    if let Some(hook) = hooks.on_field_start {
        if hook(battle, source)?.failed() {
            battle.field_mut().weather = None;
            return Ok(false);
        }
    }
    logs::weather(battle, &data.name)?;
    Ok(true)
}

pub fn clear_weather(battle: &mut Battle) -> Result<bool> {
    let Some(id) = battle.field().weather_id().cloned() else {
        return Ok(false);
    };
    if let Some(hooks) = effects::condition_hooks(battle, &id) {
        if let Some(hook) = hooks.on_field_end {
            hook(battle)?;
        }
    }
    battle.field_mut().weather = None;
    let name = condition_name(battle, &id);
    logs::weather_end(battle, &name)?;
    Ok(true)
}

pub fn set_terrain(battle: &mut Battle, id: &Id, source: Option<MonHandle>) -> Result<bool> {
    let Some((data, hooks)) = condition_entry(battle, id, ConditionType::Terrain) else {
        return Ok(false);
    };
    if battle.field().terrain_id() == Some(id) {
        return Ok(false);
    }
    clear_terrain(battle)?;
    let instance = EffectInstance::new(id.clone(), source, battle.turn, data.duration);
    battle.field_mut().terrain = Some(instance);
    if let Some(hook) = hooks.on_field_start {
        if hook(battle, source)?.failed() {
            battle.field_mut().terrain = None;
            return Ok(false);
        }
    }
    logs::field_start(battle, &data.name)?;
    Ok(true)
}

pub fn clear_terrain(battle: &mut Battle) -> Result<bool> {
    let Some(id) = battle.field().terrain_id().cloned() else {
        return Ok(false);
    };
    if let Some(hooks) = effects::condition_hooks(battle, &id) {
        if let Some(hook) = hooks.on_field_end {
            hook(battle)?;
        }
    }
    battle.field_mut().terrain = None;
    let name = condition_name(battle, &id);
    logs::field_end(battle, &name)?;
    Ok(true)
}

pub fn add_pseudo_weather(
    battle: &mut Battle,
    id: &Id,
    source: Option<MonHandle>,
) -> Result<bool> {
    let Some((data, hooks)) = condition_entry(battle, id, ConditionType::PseudoWeather) else {
        return Ok(false);
    };
    if battle.field().has_pseudo_weather(id) {
        return Ok(false);
    }
    let instance = EffectInstance::new(id.clone(), source, battle.turn, data.duration);
    battle.field_mut().pseudo_weathers.insert(id.clone(), instance);
    if let Some(hook) = hooks.on_field_start {
        if hook(battle, source)?.failed() {
            battle.field_mut().pseudo_weathers.shift_remove(id);
            return Ok(false);
        }
    }
    logs::field_start(battle, &data.name)?;
    Ok(true)
}

pub fn remove_pseudo_weather(battle: &mut Battle, id: &Id) -> Result<bool> {
    let Some((data, hooks)) = condition_entry(battle, id, ConditionType::PseudoWeather) else {
        return Ok(false);
    };
    if !battle.field().has_pseudo_weather(id) {
        return Ok(false);
    }
    if let Some(hook) = hooks.on_field_end {
        hook(battle)?;
    }
    battle.field_mut().pseudo_weathers.shift_remove(id);
    logs::field_end(battle, &data.name)?;
    Ok(true)
}

pub fn try_set_status(
    battle: &mut Battle,
    mon: MonHandle,
    id: &Id,
    source: Option<MonHandle>,
) -> Result<bool> {
    let Some((data, hooks)) = condition_entry(battle, id, ConditionType::Status) else {
        return Ok(false);
    };
    if battle.mon(mon)?.fainted || battle.mon(mon)?.status.is_some() {
        return Ok(false);
    }
    apply_status(battle, mon, id, source, data, hooks)
}

pub fn set_status(
    battle: &mut Battle,
    mon: MonHandle,
    id: &Id,
    source: Option<MonHandle>,
) -> Result<bool> {
    let Some((data, hooks)) = condition_entry(battle, id, ConditionType::Status) else {
        return Ok(false);
    };
    if battle.mon(mon)?.fainted || battle.mon(mon)?.has_status(id) {
        return Ok(false);
    }
    // The displaced status ends without a cure log; the new status log supersedes it.
    if let Some(old) = battle.mon(mon)?.status_id().cloned() {
        if let Some(old_hooks) = effects::condition_hooks(battle, &old) {
            if let Some(hook) = old_hooks.on_end {
                hook(battle, mon)?;
            }
        }
        battle.mon_mut(mon)?.status = None;
    }
    apply_status(battle, mon, id, source, data, hooks)
}

fn apply_status(
    battle: &mut Battle,
    mon: MonHandle,
    id: &Id,
    source: Option<MonHandle>,
    data: ConditionData,
    hooks: ConditionHooks,
) -> Result<bool> {
    let instance = EffectInstance::new(id.clone(), source, battle.turn, data.duration);
    battle.mon_mut(mon)?.status = Some(instance);
    if let Some(hook) = hooks.on_start {
        if hook(battle, mon, source)?.failed() {
            battle.mon_mut(mon)?.status = None;
            return Ok(false);
        }
    }
    logs::status(battle, mon, &data.name)?;
    Ok(true)
}

pub fn cure_status(battle: &mut Battle, mon: MonHandle) -> Result<bool> {
    if battle.mon(mon)?.fainted {
        return Ok(false);
    }
    let Some(id) = battle.mon(mon)?.status_id().cloned() else {
        return Ok(false);
    };
    if let Some(hooks) = effects::condition_hooks(battle, &id) {
        if let Some(hook) = hooks.on_end {
            hook(battle, mon)?;
        }
    }
    battle.mon_mut(mon)?.status = None;
    let name = condition_name(battle, &id);
    logs::cure_status(battle, mon, &name)?;
    Ok(true)
}

pub fn set_ability(battle: &mut Battle, mon: MonHandle, id: &Id) -> Result<bool> {
    let name = match battle.dex.abilities.get(id) {
        Ok(ability) => ability.data.name.clone(),
        Err(_) => {
            logs::debug_unknown(battle, "ability", id);
            return Ok(false);
        }
    };
    if battle.mon(mon)?.fainted {
        return Ok(false);
    }
    let current = battle.mon(mon)?.ability.clone();
    if &current == id || ability_locked(&current) || ability_locked(id) {
        return Ok(false);
    }
    end_ability(battle, mon)?;
    {
        let mon = battle.mon_mut(mon)?;
        mon.ability = id.clone();
        mon.ability_state = EffectState::new();
    }
    logs::ability(battle, mon, &name)?;
    start_ability(battle, mon)?;
    Ok(true)
}

pub fn swap_abilities(battle: &mut Battle, mon: MonHandle, other: MonHandle) -> Result<bool> {
    if mon == other {
        return Ok(false);
    }
    if battle.mon(mon)?.fainted || battle.mon(other)?.fainted {
        return Ok(false);
    }
    let mon_ability = battle.mon(mon)?.ability.clone();
    let other_ability = battle.mon(other)?.ability.clone();
    // Either participant holding an immovable ability vetoes the whole swap.
    if ability_locked(&mon_ability) || ability_locked(&other_ability) {
        return Ok(false);
    }
    end_ability(battle, mon)?;
    end_ability(battle, other)?;
    {
        let mon = battle.mon_mut(mon)?;
        mon.ability = other_ability.clone();
        mon.ability_state = EffectState::new();
    }
    {
        let other = battle.mon_mut(other)?;
        other.ability = mon_ability.clone();
        other.ability_state = EffectState::new();
    }
    let name = ability_name(battle, &other_ability);
    logs::ability(battle, mon, &name)?;
    let name = ability_name(battle, &mon_ability);
    logs::ability(battle, other, &name)?;
    start_ability(battle, mon)?;
    start_ability(battle, other)?;
    Ok(true)
}

fn end_ability(battle: &mut Battle, mon: MonHandle) -> Result<()> {
    let ability = battle.mon(mon)?.ability.clone();
    let hook = match battle.dex.abilities.get(&ability) {
        Ok(ability) => ability.hooks.on_end,
        Err(_) => None,
    };
    if let Some(hook) = hook {
        hook(battle, mon)?;
    }
    Ok(())
}

fn start_ability(battle: &mut Battle, mon: MonHandle) -> Result<()> {
    let ability = battle.mon(mon)?.ability.clone();
    let hook = match battle.dex.abilities.get(&ability) {
        Ok(ability) => ability.hooks.on_start,
        Err(_) => None,
    };
    if let Some(hook) = hook {
        hook(battle, mon)?;
    }
    Ok(())
}

pub fn set_types(battle: &mut Battle, mon: MonHandle, types: Vec<Type>) -> Result<bool> {
    if types.is_empty() || battle.mon(mon)?.fainted {
        return Ok(false);
    }
    if battle.mon(mon)?.types == types {
        return Ok(false);
    }
    battle.mon_mut(mon)?.types = types.clone();
    logs::type_change(battle, mon, &types)?;
    Ok(true)
}

pub fn take_item(
    battle: &mut Battle,
    mon: MonHandle,
    taker: Option<MonHandle>,
) -> Result<Option<Id>> {
    let Some(item_id) = battle.mon(mon)?.item.clone() else {
        return Ok(None);
    };
    let (takeable, name, hook) = match battle.dex.items.get(&item_id) {
        Ok(item) => (
            item.data.takeable,
            item.data.name.clone(),
            item.hooks.on_take_item,
        ),
        Err(_) => {
            logs::debug_unknown(battle, "item", &item_id);
            return Ok(None);
        }
    };
    let allowed = match hook {
        Some(hook) => hook(battle, mon, taker)?,
        None => takeable,
    };
    if !allowed {
        return Ok(None);
    }
    battle.mon_mut(mon)?.item = None;
    logs::item_end(battle, mon, &name)?;
    Ok(Some(item_id))
}

pub fn set_item(battle: &mut Battle, mon: MonHandle, id: &Id) -> Result<bool> {
    let name = match battle.dex.items.get(id) {
        Ok(item) => item.data.name.clone(),
        Err(_) => {
            logs::debug_unknown(battle, "item", id);
            return Ok(false);
        }
    };
    if battle.mon(mon)?.fainted {
        return Ok(false);
    }
    battle.mon_mut(mon)?.item = Some(id.clone());
    logs::item(battle, mon, &name)?;
    Ok(true)
}

pub fn boost(battle: &mut Battle, mon: MonHandle, boosts: &BoostTable) -> Result<bool> {
    if battle.mon(mon)?.fainted {
        return Ok(false);
    }
    let mut changed = false;
    for (stat, delta) in boosts.non_zero_entries() {
        let applied = {
            let mon = battle.mon_mut(mon)?;
            let current = mon.boosts.get(stat);
            let next = current.saturating_add(delta).clamp(-6, 6);
            mon.boosts.set(stat, next);
            next - current
        };
        if applied != 0 {
            logs::boost(battle, mon, stat, applied)?;
            changed = true;
        }
    }
    Ok(changed)
}

pub fn damage_mon(battle: &mut Battle, mon: MonHandle, amount: u16) -> Result<u16> {
    if amount == 0 || battle.mon(mon)?.fainted {
        return Ok(0);
    }
    let dealt = {
        let mon = battle.mon_mut(mon)?;
        let dealt = mon.hp.min(amount);
        mon.hp -= dealt;
        dealt
    };
    logs::damage(battle, mon)?;
    if battle.mon(mon)?.hp == 0 {
        faint(battle, mon)?;
    }
    Ok(dealt)
}

pub fn heal_mon(battle: &mut Battle, mon: MonHandle, amount: u16) -> Result<u16> {
    if amount == 0 || battle.mon(mon)?.fainted {
        return Ok(0);
    }
    let healed = {
        let mon = battle.mon_mut(mon)?;
        let healed = (mon.max_hp - mon.hp).min(amount);
        mon.hp += healed;
        healed
    };
    if healed > 0 {
        logs::heal(battle, mon)?;
    }
    Ok(healed)
}

pub fn faint(battle: &mut Battle, mon: MonHandle) -> Result<()> {
    if battle.mon(mon)?.fainted {
        return Ok(());
    }
    {
        let mon = battle.mon_mut(mon)?;
        mon.hp = 0;
        mon.fainted = true;
        // Everything attached to the Mon ends with it, without end hooks.
        mon.clear_volatiles();
        mon.status = None;
    }
    logs::faint(battle, mon)?;
    let side = battle.mon(mon)?.side;
    battle.side_mut(side)?.fainted_this_turn = true;
    Ok(())
}

/// The end-of-turn residual pass.
///
/// Expired instances end through the same removal paths as explicit removals, so their end
/// hooks and log events fire normally. Side faint tracking rolls over last.
pub fn advance_turn(battle: &mut Battle) -> Result<()> {
    logs::residual(battle);

    for mon in battle.all_mon_handles() {
        if battle.mon(mon)?.fainted {
            continue;
        }
        let status_expired = match &mut battle.mon_mut(mon)?.status {
            Some(instance) => tick(instance),
            None => false,
        };
        if status_expired {
            cure_status(battle, mon)?;
        }
        for id in expired_ids(battle.mon_mut(mon)?.volatiles.values_mut()) {
            remove_volatile(battle, mon, &id)?;
        }
    }

    for side in 0..battle.sides.len() {
        for id in expired_ids(battle.side_mut(side)?.conditions.values_mut()) {
            remove_side_condition(battle, side, &id)?;
        }
    }

    let weather_expired = match &mut battle.field_mut().weather {
        Some(instance) => tick(instance),
        None => false,
    };
    if weather_expired {
        clear_weather(battle)?;
    }
    let terrain_expired = match &mut battle.field_mut().terrain {
        Some(instance) => tick(instance),
        None => false,
    };
    if terrain_expired {
        clear_terrain(battle)?;
    }
    for id in expired_ids(battle.field_mut().pseudo_weathers.values_mut()) {
        remove_pseudo_weather(battle, &id)?;
    }

    for side in battle.sides.iter_mut() {
        side.fainted_last_turn = side.fainted_this_turn;
        side.fainted_this_turn = false;
    }

    battle.turn += 1;
    logs::turn(battle);
    Ok(())
}

fn tick(instance: &mut EffectInstance) -> bool {
    match instance.duration.as_mut() {
        Some(duration) => {
            *duration = duration.saturating_sub(1);
            *duration == 0
        }
        None => false,
    }
}

fn expired_ids<'a>(instances: impl Iterator<Item = &'a mut EffectInstance>) -> Vec<Id> {
    instances
        .filter_map(|instance| tick(instance).then(|| instance.id.clone()))
        .collect()
}
