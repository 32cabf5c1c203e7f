//! Condition definitions: major statuses, volatiles, entry hazards, weather, terrain, and
//! pseudo-weather.

use anyhow::Result;
use fray_data::{
    ConditionData,
    ConditionType,
    Id,
};
use fray_prng::rand_util;

use crate::{
    battle::{
        Battle,
        MonHandle,
        MoveEventResult,
    },
    dex::DexData,
    effect::{
        ConditionHooks,
        WeightModKind,
    },
};

pub(super) fn add_conditions(data: &mut DexData) {
    statuses(data);
    volatiles(data);
    side_conditions(data);
    field_conditions(data);
}

fn condition(name: &str, condition_type: ConditionType, duration: Option<u8>) -> ConditionData {
    ConditionData {
        name: name.to_owned(),
        condition_type,
        duration,
        max_layers: None,
        no_copy: false,
    }
}

fn statuses(data: &mut DexData) {
    data.add_condition(
        condition("slp", ConditionType::Status, None),
        ConditionHooks {
            on_start: Some(slp_start),
            ..Default::default()
        },
    );
    for name in ["par", "psn", "tox", "brn", "frz"] {
        data.add_condition(
            condition(name, ConditionType::Status, None),
            ConditionHooks::default(),
        );
    }
}

// Sleep lasts two to four turns, sampled when the status lands.
fn slp_start(
    battle: &mut Battle,
    mon: MonHandle,
    _source: Option<MonHandle>,
) -> Result<MoveEventResult> {
    let duration = rand_util::range(battle.prng.as_mut(), 2, 5) as u8;
    if let Some(status) = battle.mon_mut(mon)?.status.as_mut() {
        status.duration = Some(duration);
    }
    Ok(MoveEventResult::Advance)
}

fn volatiles(data: &mut DexData) {
    data.add_condition(
        condition("flinch", ConditionType::Volatile, Some(1)),
        ConditionHooks::default(),
    );
    data.add_condition(
        condition("confusion", ConditionType::Volatile, None),
        ConditionHooks {
            on_start: Some(confusion_start),
            ..Default::default()
        },
    );
    data.add_condition(
        condition("partiallytrapped", ConditionType::Volatile, None),
        ConditionHooks {
            on_start: Some(partially_trapped_start),
            ..Default::default()
        },
    );
    for name in ["smackdown", "nightmare", "leechseed", "trapped", "stockpile"] {
        data.add_condition(
            condition(name, ConditionType::Volatile, None),
            ConditionHooks::default(),
        );
    }
    data.add_condition(
        condition("Protein Shake", ConditionType::Volatile, None),
        ConditionHooks {
            priority: 1,
            on_start: Some(protein_shake_start),
            on_restart: Some(protein_shake_restart),
            on_modify_weight: Some(protein_shake_weight),
            weight_mod: Some(WeightModKind::Additive),
            ..Default::default()
        },
    );
    data.add_condition(
        ConditionData {
            name: "Mini Singularity".to_owned(),
            condition_type: ConditionType::Volatile,
            duration: None,
            max_layers: None,
            no_copy: true,
        },
        ConditionHooks {
            on_modify_weight: Some(mini_singularity_weight),
            weight_mod: Some(WeightModKind::Multiplicative),
            ..Default::default()
        },
    );
}

fn confusion_start(
    battle: &mut Battle,
    mon: MonHandle,
    _source: Option<MonHandle>,
) -> Result<MoveEventResult> {
    let duration = rand_util::range(battle.prng.as_mut(), 2, 6) as u8;
    if let Some(instance) = battle.mon_mut(mon)?.volatiles.get_mut(&Id::from("confusion")) {
        instance.duration = Some(duration);
    }
    Ok(MoveEventResult::Advance)
}

fn partially_trapped_start(
    battle: &mut Battle,
    mon: MonHandle,
    _source: Option<MonHandle>,
) -> Result<MoveEventResult> {
    let duration = rand_util::range(battle.prng.as_mut(), 4, 6) as u8;
    if let Some(instance) = battle
        .mon_mut(mon)?
        .volatiles
        .get_mut(&Id::from("partiallytrapped"))
    {
        instance.duration = Some(duration);
    }
    Ok(MoveEventResult::Advance)
}

fn protein_shake_start(
    battle: &mut Battle,
    mon: MonHandle,
    _source: Option<MonHandle>,
) -> Result<MoveEventResult> {
    if let Some(instance) = battle
        .mon_mut(mon)?
        .volatiles
        .get_mut(&Id::from("proteinshake"))
    {
        instance.state.insert("multiplier", 1u64);
    }
    Ok(MoveEventResult::Advance)
}

// Drinking another shake thickens the mixture instead of stacking the volatile.
fn protein_shake_restart(
    battle: &mut Battle,
    mon: MonHandle,
    _source: Option<MonHandle>,
) -> Result<MoveEventResult> {
    if let Some(instance) = battle
        .mon_mut(mon)?
        .volatiles
        .get_mut(&Id::from("proteinshake"))
    {
        let multiplier = instance.state.get_u64("multiplier").unwrap_or(1);
        instance.state.insert("multiplier", multiplier + 1);
    }
    Ok(MoveEventResult::Advance)
}

// 100 kg per shake.
fn protein_shake_weight(battle: &mut Battle, mon: MonHandle, weight: u32) -> Result<u32> {
    let multiplier = battle
        .mon(mon)?
        .volatiles
        .get(&Id::from("proteinshake"))
        .and_then(|instance| instance.state.get_u64("multiplier"))
        .unwrap_or(0);
    Ok(weight + multiplier as u32 * 1000)
}

fn mini_singularity_weight(_battle: &mut Battle, _mon: MonHandle, weight: u32) -> Result<u32> {
    Ok(weight * 2)
}

fn side_conditions(data: &mut DexData) {
    for (name, max_layers) in [
        ("Spikes", 3),
        ("Toxic Spikes", 2),
        ("Stealth Rock", 1),
        ("Sticky Web", 1),
    ] {
        data.add_condition(
            ConditionData {
                name: name.to_owned(),
                condition_type: ConditionType::SideCondition,
                duration: None,
                max_layers: Some(max_layers),
                no_copy: false,
            },
            ConditionHooks::default(),
        );
    }
}

fn field_conditions(data: &mut DexData) {
    data.add_condition(
        condition("Rain Dance", ConditionType::Weather, Some(5)),
        ConditionHooks::default(),
    );
    for name in ["Grassy Terrain", "Misty Terrain"] {
        data.add_condition(
            condition(name, ConditionType::Terrain, Some(5)),
            ConditionHooks::default(),
        );
    }
    data.add_condition(
        condition("Nap Time", ConditionType::PseudoWeather, Some(1)),
        ConditionHooks::default(),
    );
}
