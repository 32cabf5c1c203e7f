//! Hook collection across active effects.
//!
//! Collection-based extension points gather hooks from every effect active in the battle, order
//! them, and run them over an accumulated value. The precedence of the sources is fixed: field
//! conditions, then side conditions, then each Mon's volatiles followed by its held item, with
//! the move's own hook last. Declared priorities sort above this precedence; ties keep
//! collection order.

use std::cmp::Reverse;

use anyhow::Result;
use fray_data::{
    Accuracy,
    Id,
};

use crate::{
    battle::{
        Battle,
        MonHandle,
        logs,
    },
    effect::{
        AccuracyHook,
        ConditionHooks,
        ItemHooks,
        WeightHook,
        WeightModKind,
    },
};

/// An active effect whose hooks can be collected.
#[derive(Debug, Clone)]
enum ActiveEffectHandle {
    Condition(Id),
    Item(Id),
}

/// Resolves a condition's hook table, degrading to a no-op if the condition is not registered.
pub(crate) fn condition_hooks(battle: &mut Battle, id: &Id) -> Option<ConditionHooks> {
    match battle.dex.conditions.get(id) {
        Ok(condition) => Some(condition.hooks),
        Err(_) => {
            logs::debug_unknown(battle, "condition", id);
            None
        }
    }
}

/// Resolves an item's hook table, degrading to a no-op if the item is not registered.
pub(crate) fn item_hooks(battle: &mut Battle, id: &Id) -> Option<ItemHooks> {
    match battle.dex.items.get(id) {
        Ok(item) => Some(item.hooks),
        Err(_) => {
            logs::debug_unknown(battle, "item", id);
            None
        }
    }
}

fn field_effects(battle: &Battle) -> Vec<ActiveEffectHandle> {
    let field = battle.field();
    field
        .weather_id()
        .into_iter()
        .chain(field.terrain_id())
        .chain(field.pseudo_weathers.keys())
        .cloned()
        .map(ActiveEffectHandle::Condition)
        .collect()
}

fn side_effects(battle: &Battle, side: usize) -> Result<Vec<ActiveEffectHandle>> {
    Ok(battle
        .side(side)?
        .conditions
        .keys()
        .cloned()
        .map(ActiveEffectHandle::Condition)
        .collect())
}

fn mon_effects(battle: &Battle, mon: MonHandle) -> Result<Vec<ActiveEffectHandle>> {
    let mon = battle.mon(mon)?;
    let mut handles = mon
        .volatiles
        .keys()
        .cloned()
        .map(ActiveEffectHandle::Condition)
        .collect::<Vec<_>>();
    if let Some(item) = &mon.item {
        handles.push(ActiveEffectHandle::Item(item.clone()));
    }
    Ok(handles)
}

/// Every active effect that can extend a move used against a single target, in precedence
/// order.
fn active_effects_for_move(
    battle: &Battle,
    user: MonHandle,
    target: MonHandle,
) -> Result<Vec<ActiveEffectHandle>> {
    let mut handles = field_effects(battle);
    let target_side = battle.mon(target)?.side;
    let user_side = battle.mon(user)?.side;
    handles.extend(side_effects(battle, target_side)?);
    if user_side != target_side {
        handles.extend(side_effects(battle, user_side)?);
    }
    handles.extend(mon_effects(battle, target)?);
    if user != target {
        handles.extend(mon_effects(battle, user)?);
    }
    Ok(handles)
}

/// Runs the accuracy modification pipeline for the active move against a target.
///
/// Starts from the move's base accuracy. An accuracy-exempt move stays exempt unless a hook
/// forces a numeric chance.
pub(crate) fn run_modify_accuracy(
    battle: &mut Battle,
    user: MonHandle,
    target: MonHandle,
) -> Result<Accuracy> {
    let mut accuracy = battle.active_move()?.data.accuracy;
    let handles = active_effects_for_move(battle, user, target)?;

    let mut collected: Vec<(i32, AccuracyHook)> = Vec::new();
    for handle in &handles {
        match handle {
            ActiveEffectHandle::Condition(id) => {
                if let Some(hooks) = condition_hooks(battle, id) {
                    if let Some(hook) = hooks.on_modify_accuracy {
                        collected.push((hooks.priority, hook));
                    }
                }
            }
            ActiveEffectHandle::Item(id) => {
                if let Some(hooks) = item_hooks(battle, id) {
                    if let Some(hook) = hooks.on_modify_accuracy {
                        collected.push((hooks.priority, hook));
                    }
                }
            }
        }
    }
    if let Some(hook) = battle.active_move()?.hooks.on_modify_accuracy {
        collected.push((0, hook));
    }

    collected.sort_by_key(|(priority, _)| Reverse(*priority));
    for (_, hook) in collected {
        accuracy = hook(battle, user, target, accuracy)?;
    }
    Ok(accuracy)
}

/// Computes a Mon's effective weight, in hectograms.
///
/// The pipeline starts from the species base weight, runs every additive weight hook, then
/// every multiplicative weight hook, and floors the result at 1. Nothing is cached; a query
/// always reflects the effects active right now.
pub(crate) fn effective_weight(battle: &mut Battle, mon: MonHandle) -> Result<u32> {
    let species = battle.mon(mon)?.species.clone();
    let base = battle.dex.species.get(&species)?.data.weight;

    let mut handles = field_effects(battle);
    let side = battle.mon(mon)?.side;
    handles.extend(side_effects(battle, side)?);
    handles.extend(mon_effects(battle, mon)?);

    let mut additive: Vec<(i32, WeightHook)> = Vec::new();
    let mut multiplicative: Vec<(i32, WeightHook)> = Vec::new();
    for handle in &handles {
        let (priority, hook, kind) = match handle {
            ActiveEffectHandle::Condition(id) => match condition_hooks(battle, id) {
                Some(hooks) => (hooks.priority, hooks.on_modify_weight, hooks.weight_mod),
                None => continue,
            },
            ActiveEffectHandle::Item(id) => match item_hooks(battle, id) {
                Some(hooks) => (hooks.priority, hooks.on_modify_weight, hooks.weight_mod),
                None => continue,
            },
        };
        let Some(hook) = hook else {
            continue;
        };
        match kind {
            Some(WeightModKind::Additive) => additive.push((priority, hook)),
            Some(WeightModKind::Multiplicative) => multiplicative.push((priority, hook)),
            // Hooks without a declared pass are rejected at registration.
            None => continue,
        }
    }
    additive.sort_by_key(|(priority, _)| Reverse(*priority));
    multiplicative.sort_by_key(|(priority, _)| Reverse(*priority));

    let mut weight = base;
    for (_, hook) in additive.into_iter().chain(multiplicative) {
        weight = hook(battle, mon, weight)?;
    }
    Ok(weight.max(1))
}
