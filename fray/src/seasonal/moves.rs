//! Move definitions.
//!
//! Definitions are declarative where the engine's data model suffices and drop into hooks only
//! where a move's behavior cannot be expressed as data. Hooks run against the engine's public
//! interface, same as any external catalog would.

use anyhow::Result;
use fray_data::{
    Accuracy,
    Boost,
    BoostTable,
    Fraction,
    HitEffect,
    Id,
    MoveCategory,
    MoveData,
    MoveFlag,
    MoveTarget,
    MultihitType,
    SecondaryEffectData,
    Stat,
    Type,
};
use fray_prng::rand_util;
use hashbrown::HashSet;

use crate::{
    battle::{
        Battle,
        MonHandle,
        MoveEventResult,
    },
    dex::DexData,
    effect::MoveHooks,
    error::WrapOptionError,
};

pub(super) fn add_moves(data: &mut DexData) {
    bar_fight(data);
    blimp_crash(data);
    buzzing_of_the_swarm(data);
    compost(data);
    crystal_boost(data);
    devolution_wave(data);
    energy_field(data);
    evoblast(data);
    fang_of_the_fire_king(data);
    hazard_pass(data);
    lucid_dreams(data);
    maelstrom(data);
    mini_singularity(data);
    nap_time(data);
    protein_shake(data);
    quack(data);
    restarting_router(data);
    rock_slide(data);
    scripting(data);
    smoke_bomb(data);
    tipping_over(data);
    truant(data);
    ultra_succ(data);
    vibora(data);
}

fn bar_fight(data: &mut DexData) {
    data.add_move(
        MoveData {
            name: "Bar Fight".to_owned(),
            category: MoveCategory::Physical,
            primary_type: Type::Fighting,
            base_power: 10,
            pp: 10,
            priority: 3,
            target: MoveTarget::Normal,
            flags: HashSet::from_iter([MoveFlag::Protect, MoveFlag::Mirror]),
            ..Default::default()
        },
        MoveHooks {
            on_hit: Some(bar_fight_hit),
            ..Default::default()
        },
    );
}

// Both brawlers come out of it swinging harder and seeing double.
fn bar_fight_hit(
    battle: &mut Battle,
    user: MonHandle,
    target: Option<MonHandle>,
) -> Result<MoveEventResult> {
    let target = target.wrap_expectation("expected a target")?;
    let boosts = BoostTable::from_iter([(Boost::Atk, 3), (Boost::Def, -3)]);
    battle.boost(target, &boosts)?;
    battle.boost(user, &boosts)?;
    battle.add_volatile(target, &Id::from("confusion"), Some(user))?;
    battle.add_volatile(user, &Id::from("confusion"), Some(user))?;
    Ok(MoveEventResult::Advance)
}

fn blimp_crash(data: &mut DexData) {
    data.add_move(
        MoveData {
            name: "Blimp Crash".to_owned(),
            category: MoveCategory::Physical,
            primary_type: Type::Flying,
            base_power: 165,
            accuracy: Accuracy::Exempt,
            pp: 5,
            target: MoveTarget::Normal,
            flags: HashSet::from_iter([MoveFlag::Protect, MoveFlag::Mirror]),
            recoil_percent: Some(Fraction::new(1, 2)),
            ..Default::default()
        },
        MoveHooks {
            on_modify_accuracy: Some(blimp_crash_accuracy),
            on_hit: Some(blimp_crash_hit),
            ..Default::default()
        },
    );
}

// Always hits airborne targets; grounded targets get a normal accuracy check.
fn blimp_crash_accuracy(
    battle: &mut Battle,
    _user: MonHandle,
    target: MonHandle,
    accuracy: Accuracy,
) -> Result<Accuracy> {
    if battle.mon(target)?.is_grounded() {
        return Ok(Accuracy::Chance(80));
    }
    Ok(accuracy)
}

// The crash knocks both Mons out of the air.
fn blimp_crash_hit(
    battle: &mut Battle,
    user: MonHandle,
    target: Option<MonHandle>,
) -> Result<MoveEventResult> {
    let target = target.wrap_expectation("expected a target")?;
    battle.add_volatile(target, &Id::from("smackdown"), Some(user))?;
    battle.add_volatile(user, &Id::from("smackdown"), Some(user))?;
    Ok(MoveEventResult::Advance)
}

fn buzzing_of_the_swarm(data: &mut DexData) {
    data.add_move(
        MoveData {
            name: "Buzzing of the Swarm".to_owned(),
            category: MoveCategory::Physical,
            primary_type: Type::Bug,
            base_power: 95,
            pp: 10,
            target: MoveTarget::Normal,
            flags: HashSet::from_iter([MoveFlag::Protect, MoveFlag::Mirror]),
            secondary_effects: vec![SecondaryEffectData {
                chance: Some(Fraction::percentage(20)),
                target: Some(HitEffect {
                    volatile_status: Some("flinch".to_owned()),
                    ..Default::default()
                }),
                user: None,
            }],
            ..Default::default()
        },
        MoveHooks::default(),
    );
}

fn compost(data: &mut DexData) {
    data.add_move(
        MoveData {
            name: "Compost".to_owned(),
            category: MoveCategory::Status,
            primary_type: Type::Ghost,
            accuracy: Accuracy::Exempt,
            pp: 5,
            target: MoveTarget::User,
            flags: HashSet::from_iter([MoveFlag::Snatch, MoveFlag::Heal]),
            heal_percent: Some(Fraction::new(1, 2)),
            ..Default::default()
        },
        MoveHooks {
            on_hit: Some(compost_hit),
            ..Default::default()
        },
    );
}

// The boost and cure only trigger off a loss the side suffered last turn.
fn compost_hit(
    battle: &mut Battle,
    user: MonHandle,
    _target: Option<MonHandle>,
) -> Result<MoveEventResult> {
    let side = battle.mon(user)?.side;
    if battle.side(side)?.fainted_last_turn {
        let boosts = BoostTable::from_iter([(Boost::Atk, 1), (Boost::Def, 1), (Boost::SpDef, 1)]);
        battle.boost(user, &boosts)?;
        battle.cure_status(user)?;
    }
    Ok(MoveEventResult::Advance)
}

fn crystal_boost(data: &mut DexData) {
    data.add_move(
        MoveData {
            name: "Crystal Boost".to_owned(),
            category: MoveCategory::Special,
            primary_type: Type::Rock,
            base_power: 75,
            accuracy: Accuracy::Chance(90),
            pp: 10,
            target: MoveTarget::Normal,
            flags: HashSet::from_iter([MoveFlag::Protect, MoveFlag::Mirror]),
            secondary_effects: vec![SecondaryEffectData {
                chance: Some(Fraction::percentage(50)),
                target: Some(HitEffect {
                    boosts: Some(BoostTable::from_iter([(Boost::SpAtk, 1)])),
                    ..Default::default()
                }),
                user: None,
            }],
            ..Default::default()
        },
        MoveHooks::default(),
    );
}

fn devolution_wave(data: &mut DexData) {
    data.add_move(
        MoveData {
            name: "Devolution Wave".to_owned(),
            category: MoveCategory::Physical,
            primary_type: Type::Rock,
            base_power: 25,
            accuracy: Accuracy::Exempt,
            pp: 1,
            target: MoveTarget::Normal,
            multihit: Some(MultihitType::Static(5)),
            is_z: Some(Id::from("tiksiumz")),
            ..Default::default()
        },
        MoveHooks {
            on_after_hit: Some(devolution_wave_after_hit),
            ..Default::default()
        },
    );
}

// Each of the five hits rolls one of two follow-up effects.
fn devolution_wave_after_hit(
    battle: &mut Battle,
    user: MonHandle,
    target: Option<MonHandle>,
) -> Result<()> {
    let target = target.wrap_expectation("expected a target")?;
    let hit = battle.active_move()?.hit;
    let option = rand_util::range(battle.prng.as_mut(), 0, 2) == 1;
    match hit {
        1 => {
            let status = if option { "tox" } else { "par" };
            battle.try_set_status(target, &Id::from(status), Some(user))?;
        }
        2 => {
            if option {
                battle.swap_abilities(user, target)?;
            } else {
                battle.set_types(target, vec![Type::Water])?;
            }
        }
        3 => {
            let hazard = if option { "stealthrock" } else { "spikes" };
            let side = battle.mon(target)?.side;
            battle.add_side_condition(side, &Id::from(hazard), Some(user))?;
        }
        4 => {
            let terrain = if option { "grassyterrain" } else { "mistyterrain" };
            battle.set_terrain(&Id::from(terrain), Some(user))?;
        }
        5 => {
            let boost = if option { Boost::Atk } else { Boost::Def };
            battle.boost(user, &BoostTable::from_iter([(boost, 1)]))?;
        }
        _ => (),
    }
    Ok(())
}

fn energy_field(data: &mut DexData) {
    data.add_move(
        MoveData {
            name: "Energy Field".to_owned(),
            category: MoveCategory::Special,
            primary_type: Type::Electric,
            base_power: 140,
            pp: 10,
            target: MoveTarget::Normal,
            flags: HashSet::from_iter([MoveFlag::Protect, MoveFlag::Mirror]),
            user_effect: Some(HitEffect {
                boosts: Some(BoostTable::from_iter([
                    (Boost::SpAtk, -1),
                    (Boost::SpDef, -1),
                    (Boost::Spe, -1),
                ])),
                ..Default::default()
            }),
            secondary_effects: vec![SecondaryEffectData {
                chance: Some(Fraction::percentage(40)),
                target: Some(HitEffect {
                    status: Some("par".to_owned()),
                    ..Default::default()
                }),
                user: None,
            }],
            z_move_power: Some(200),
            ..Default::default()
        },
        MoveHooks::default(),
    );
}

fn evoblast(data: &mut DexData) {
    data.add_move(
        MoveData {
            name: "Evoblast".to_owned(),
            category: MoveCategory::Special,
            primary_type: Type::Normal,
            base_power: 80,
            pp: 10,
            target: MoveTarget::Normal,
            flags: HashSet::from_iter([MoveFlag::Protect, MoveFlag::Mirror]),
            ..Default::default()
        },
        MoveHooks {
            on_modify_move: Some(evoblast_modify_move),
            ..Default::default()
        },
    );
}

// Takes on the user's primary type, and the stronger attacking stat picks the category.
fn evoblast_modify_move(
    battle: &mut Battle,
    user: MonHandle,
    _target: Option<MonHandle>,
) -> Result<()> {
    let (primary_type, physical) = {
        let mon = battle.mon(user)?;
        (
            mon.types.first().copied(),
            mon.boosted_stat(Stat::Atk) > mon.boosted_stat(Stat::SpAtk),
        )
    };
    if let Some(primary_type) = primary_type {
        battle.active_move_mut()?.data.primary_type = primary_type;
    }
    if physical {
        battle.active_move_mut()?.data.category = MoveCategory::Physical;
    }
    Ok(())
}

fn fang_of_the_fire_king(data: &mut DexData) {
    data.add_move(
        MoveData {
            name: "Fang of the Fire King".to_owned(),
            category: MoveCategory::Physical,
            primary_type: Type::Fire,
            pp: 10,
            target: MoveTarget::Normal,
            flags: HashSet::from_iter([MoveFlag::Protect, MoveFlag::Mirror, MoveFlag::Bite]),
            damage: Some(150),
            ..Default::default()
        },
        MoveHooks {
            on_hit: Some(fang_of_the_fire_king_hit),
            ..Default::default()
        },
    );
}

// The burn replaces whatever status the target already had.
fn fang_of_the_fire_king_hit(
    battle: &mut Battle,
    user: MonHandle,
    target: Option<MonHandle>,
) -> Result<MoveEventResult> {
    let target = target.wrap_expectation("expected a target")?;
    battle.set_status(target, &Id::from("brn"), Some(user))?;
    Ok(MoveEventResult::Advance)
}

fn hazard_pass(data: &mut DexData) {
    data.add_move(
        MoveData {
            name: "Hazard Pass".to_owned(),
            category: MoveCategory::Status,
            primary_type: Type::Normal,
            pp: 20,
            target: MoveTarget::FoeSide,
            flags: HashSet::from_iter([
                MoveFlag::Reflectable,
                MoveFlag::Mirror,
                MoveFlag::BypassSubstitute,
            ]),
            self_switch: true,
            z_move_boost: Some(BoostTable::from_iter([(Boost::Def, 1)])),
            ..Default::default()
        },
        MoveHooks {
            on_hit_side: Some(hazard_pass_hit_side),
            ..Default::default()
        },
    );
}

// Lays up to two distinct hazards that still have room on the target side.
fn hazard_pass_hit_side(
    battle: &mut Battle,
    user: MonHandle,
    side: usize,
) -> Result<MoveEventResult> {
    let mut available = Vec::new();
    for (hazard, cap) in [
        ("stealthrock", 1),
        ("spikes", 3),
        ("toxicspikes", 2),
        ("stickyweb", 1),
    ] {
        let id = Id::from(hazard);
        let layers = battle
            .side(side)?
            .conditions
            .get(&id)
            .map(|instance| instance.layers)
            .unwrap_or(0);
        if layers < cap {
            available.push(id);
        }
    }
    if available.is_empty() {
        return Ok(MoveEventResult::Fail);
    }
    for _ in 0..2 {
        if available.is_empty() {
            break;
        }
        let index = rand_util::range(battle.prng.as_mut(), 0, available.len() as u64) as usize;
        let hazard = available.remove(index);
        battle.add_side_condition(side, &hazard, Some(user))?;
    }
    Ok(MoveEventResult::Advance)
}

fn lucid_dreams(data: &mut DexData) {
    data.add_move(
        MoveData {
            name: "Lucid Dreams".to_owned(),
            category: MoveCategory::Status,
            primary_type: Type::Ghost,
            pp: 5,
            target: MoveTarget::Normal,
            flags: HashSet::from_iter([MoveFlag::Mirror, MoveFlag::Snatch]),
            ..Default::default()
        },
        MoveHooks {
            on_hit: Some(lucid_dreams_hit),
            ..Default::default()
        },
    );
}

// The user pays half of its maximum HP, but only if something landed.
fn lucid_dreams_hit(
    battle: &mut Battle,
    user: MonHandle,
    target: Option<MonHandle>,
) -> Result<MoveEventResult> {
    let target = target.wrap_expectation("expected a target")?;
    let mut landed = battle.try_set_status(target, &Id::from("slp"), Some(user))?;
    landed |= battle.add_volatile(target, &Id::from("nightmare"), Some(user))?;
    landed |= battle.add_volatile(target, &Id::from("leechseed"), Some(user))?;
    if !landed {
        return Ok(MoveEventResult::Fail);
    }
    let cost = battle.mon(user)?.max_hp / 2;
    battle.damage(user, cost)?;
    Ok(MoveEventResult::Advance)
}

fn maelstrom(data: &mut DexData) {
    data.add_move(
        MoveData {
            name: "Maelström".to_owned(),
            category: MoveCategory::Special,
            primary_type: Type::Water,
            base_power: 100,
            accuracy: Accuracy::Chance(85),
            pp: 5,
            target: MoveTarget::Normal,
            flags: HashSet::from_iter([MoveFlag::Protect, MoveFlag::Mirror]),
            hit_effect: Some(HitEffect {
                volatile_status: Some("partiallytrapped".to_owned()),
                ..Default::default()
            }),
            ..Default::default()
        },
        MoveHooks {
            on_hit: Some(maelstrom_hit),
            ..Default::default()
        },
    );
}

// The whirlpool also holds the target in place.
fn maelstrom_hit(
    battle: &mut Battle,
    user: MonHandle,
    target: Option<MonHandle>,
) -> Result<MoveEventResult> {
    let target = target.wrap_expectation("expected a target")?;
    battle.add_volatile(target, &Id::from("trapped"), Some(user))?;
    Ok(MoveEventResult::Advance)
}

fn mini_singularity(data: &mut DexData) {
    data.add_move(
        MoveData {
            name: "Mini Singularity".to_owned(),
            category: MoveCategory::Special,
            primary_type: Type::Psychic,
            accuracy: Accuracy::Chance(55),
            pp: 5,
            target: MoveTarget::Normal,
            flags: HashSet::from_iter([MoveFlag::Protect, MoveFlag::Mirror]),
            hit_effect: Some(HitEffect {
                volatile_status: Some("minisingularity".to_owned()),
                ..Default::default()
            }),
            ..Default::default()
        },
        MoveHooks {
            base_power_callback: Some(mini_singularity_base_power),
            on_after_hit: Some(mini_singularity_after_hit),
            ..Default::default()
        },
    );
}

// Heavier targets fall harder. Brackets use effective weight, in hectograms.
fn mini_singularity_base_power(
    battle: &mut Battle,
    _user: MonHandle,
    target: MonHandle,
) -> Result<u32> {
    let weight = battle.effective_weight(target)?;
    let base_power = match weight {
        2000.. => 120,
        1000.. => 100,
        500.. => 80,
        250.. => 60,
        100.. => 40,
        _ => 20,
    };
    Ok(base_power)
}

// The singularity swallows the target's item and leaves an Iron Ball in its place.
fn mini_singularity_after_hit(
    battle: &mut Battle,
    user: MonHandle,
    target: Option<MonHandle>,
) -> Result<()> {
    let target = target.wrap_expectation("expected a target")?;
    if battle.mon(user)?.fainted {
        return Ok(());
    }
    if battle.take_item(target, Some(user))?.is_some() {
        battle.set_item(target, &Id::from("ironball"))?;
    }
    Ok(())
}

fn nap_time(data: &mut DexData) {
    data.add_move(
        MoveData {
            name: "Nap Time".to_owned(),
            category: MoveCategory::Status,
            primary_type: Type::Fairy,
            pp: 5,
            target: MoveTarget::User,
            flags: HashSet::from_iter([MoveFlag::Snatch, MoveFlag::Heal]),
            hit_effect: Some(HitEffect {
                pseudo_weather: Some("naptime".to_owned()),
                ..Default::default()
            }),
            ..Default::default()
        },
        MoveHooks {
            on_try: Some(nap_time_try),
            on_hit: Some(nap_time_hit),
            ..Default::default()
        },
    );
}

// Refuses at full health, already asleep, or under an ability that fakes sleep.
fn nap_time_try(
    battle: &mut Battle,
    user: MonHandle,
    _target: Option<MonHandle>,
) -> Result<MoveEventResult> {
    let mon = battle.mon(user)?;
    let can_nap = mon.hp < mon.max_hp
        && !mon.has_status(&Id::from("slp"))
        && mon.ability != Id::from("comatose");
    Ok(MoveEventResult::from(can_nap))
}

// The first napper's pseudo-weather pulls every other Mon into its own nap. Copies see a
// pseudo-weather they did not start, so they sleep without broadcasting further.
fn nap_time_hit(
    battle: &mut Battle,
    user: MonHandle,
    target: Option<MonHandle>,
) -> Result<MoveEventResult> {
    let target = target.unwrap_or(user);
    let nap_source = battle
        .field()
        .pseudo_weathers
        .get(&Id::from("naptime"))
        .and_then(|instance| instance.source);
    if !battle.set_status(target, &Id::from("slp"), nap_source)? {
        return Ok(MoveEventResult::Fail);
    }
    // The nap lasts exactly one turn, regardless of what sleep sampled.
    if let Some(status) = battle.mon_mut(target)?.status.as_mut() {
        status.duration = Some(2);
    }
    let heal = battle.mon(target)?.max_hp / 2;
    battle.heal(target, heal)?;
    if nap_source == Some(target) {
        for other in battle.all_mon_handles() {
            if other == target {
                continue;
            }
            let skip = {
                let mon = battle.mon(other)?;
                mon.fainted
                    || mon.has_status(&Id::from("slp"))
                    || mon.has_status(&Id::from("frz"))
                    || mon.ability == Id::from("comatose")
            };
            if skip {
                continue;
            }
            battle.do_move(other, &Id::from("naptime"), None)?;
        }
    }
    battle.remove_pseudo_weather(&Id::from("naptime"))?;
    Ok(MoveEventResult::Advance)
}

fn protein_shake(data: &mut DexData) {
    data.add_move(
        MoveData {
            name: "Protein Shake".to_owned(),
            category: MoveCategory::Status,
            primary_type: Type::Normal,
            pp: 10,
            target: MoveTarget::User,
            flags: HashSet::from_iter([MoveFlag::Snatch, MoveFlag::Mirror]),
            hit_effect: Some(HitEffect {
                boosts: Some(BoostTable::from_iter([
                    (Boost::Atk, 1),
                    (Boost::Def, 1),
                    (Boost::Spe, 1),
                ])),
                volatile_status: Some("proteinshake".to_owned()),
                ..Default::default()
            }),
            ..Default::default()
        },
        MoveHooks::default(),
    );
}

fn quack(data: &mut DexData) {
    data.add_move(
        MoveData {
            name: "Quack".to_owned(),
            category: MoveCategory::Status,
            primary_type: Type::Flying,
            pp: 5,
            target: MoveTarget::User,
            flags: HashSet::from_iter([MoveFlag::Mirror, MoveFlag::Snatch]),
            hit_effect: Some(HitEffect {
                boosts: Some(BoostTable::from_iter([(Boost::Def, 1), (Boost::SpAtk, 1)])),
                ..Default::default()
            }),
            ..Default::default()
        },
        MoveHooks::default(),
    );
}

fn restarting_router(data: &mut DexData) {
    data.add_move(
        MoveData {
            name: "Restarting Router".to_owned(),
            category: MoveCategory::Status,
            primary_type: Type::Electric,
            pp: 10,
            target: MoveTarget::User,
            flags: HashSet::from_iter([MoveFlag::Mirror, MoveFlag::Snatch]),
            hit_effect: Some(HitEffect {
                boosts: Some(BoostTable::from_iter([(Boost::SpAtk, 1), (Boost::Spe, 1)])),
                ..Default::default()
            }),
            ..Default::default()
        },
        MoveHooks::default(),
    );
}

fn rock_slide(data: &mut DexData) {
    data.add_move(
        MoveData {
            name: "Rock Slide".to_owned(),
            category: MoveCategory::Physical,
            primary_type: Type::Rock,
            base_power: 75,
            accuracy: Accuracy::Chance(90),
            pp: 10,
            target: MoveTarget::Normal,
            flags: HashSet::from_iter([MoveFlag::Protect, MoveFlag::Mirror]),
            secondary_effects: vec![SecondaryEffectData {
                chance: Some(Fraction::percentage(30)),
                target: Some(HitEffect {
                    volatile_status: Some("flinch".to_owned()),
                    ..Default::default()
                }),
                user: None,
            }],
            ..Default::default()
        },
        MoveHooks::default(),
    );
}

fn scripting(data: &mut DexData) {
    data.add_move(
        MoveData {
            name: "Scripting".to_owned(),
            category: MoveCategory::Status,
            primary_type: Type::Psychic,
            pp: 5,
            target: MoveTarget::User,
            flags: HashSet::from_iter([MoveFlag::Mirror, MoveFlag::Snatch]),
            hit_effect: Some(HitEffect {
                boosts: Some(BoostTable::from_iter([(Boost::SpAtk, 1)])),
                weather: Some("raindance".to_owned()),
                ..Default::default()
            }),
            ..Default::default()
        },
        MoveHooks::default(),
    );
}

fn smoke_bomb(data: &mut DexData) {
    data.add_move(
        MoveData {
            name: "Smoke Bomb".to_owned(),
            category: MoveCategory::Status,
            primary_type: Type::Fire,
            pp: 10,
            target: MoveTarget::Normal,
            flags: HashSet::from_iter([MoveFlag::Snatch, MoveFlag::Mirror]),
            self_switch: true,
            ..Default::default()
        },
        MoveHooks {
            on_hit: Some(smoke_bomb_hit),
            ..Default::default()
        },
    );
}

// Hazards move over to the target's side with their layer counts intact.
fn smoke_bomb_hit(
    battle: &mut Battle,
    user: MonHandle,
    target: Option<MonHandle>,
) -> Result<MoveEventResult> {
    let target = target.wrap_expectation("expected a target")?;
    let user_side = battle.mon(user)?.side;
    let target_side = battle.mon(target)?.side;
    for hazard in ["spikes", "toxicspikes", "stealthrock", "stickyweb"] {
        let id = Id::from(hazard);
        let layers = battle
            .side(user_side)?
            .conditions
            .get(&id)
            .map(|instance| instance.layers)
            .unwrap_or(0);
        if layers == 0 {
            continue;
        }
        battle.remove_side_condition(user_side, &id)?;
        for _ in 0..layers {
            battle.add_side_condition(target_side, &id, Some(user))?;
        }
    }
    Ok(MoveEventResult::Advance)
}

fn tipping_over(data: &mut DexData) {
    data.add_move(
        MoveData {
            name: "Tipping Over".to_owned(),
            category: MoveCategory::Physical,
            primary_type: Type::None,
            base_power: 20,
            pp: 10,
            target: MoveTarget::Normal,
            flags: HashSet::from_iter([MoveFlag::Protect, MoveFlag::Mirror]),
            ..Default::default()
        },
        MoveHooks {
            base_power_callback: Some(tipping_over_base_power),
            on_try: Some(tipping_over_try),
            on_after_move: Some(tipping_over_after_move),
            ..Default::default()
        },
    );
}

// 20 more power per positive boost stage on the user.
fn tipping_over_base_power(
    battle: &mut Battle,
    user: MonHandle,
    _target: MonHandle,
) -> Result<u32> {
    let base_power = battle.active_move()?.data.base_power;
    let stages = battle.mon(user)?.boosts.positive_stages();
    Ok(base_power + 20 * stages)
}

// Nothing to tip over without a stockpile.
fn tipping_over_try(
    battle: &mut Battle,
    user: MonHandle,
    _target: Option<MonHandle>,
) -> Result<MoveEventResult> {
    Ok(MoveEventResult::from(
        battle.mon(user)?.has_volatile(&Id::from("stockpile")),
    ))
}

fn tipping_over_after_move(
    battle: &mut Battle,
    user: MonHandle,
    _target: Option<MonHandle>,
) -> Result<()> {
    battle.remove_volatile(user, &Id::from("stockpile"))?;
    Ok(())
}

fn truant(data: &mut DexData) {
    data.add_move(
        MoveData {
            name: "TRU ANT".to_owned(),
            category: MoveCategory::Physical,
            primary_type: Type::Steel,
            base_power: 100,
            pp: 5,
            target: MoveTarget::Normal,
            flags: HashSet::from_iter([MoveFlag::Protect, MoveFlag::Mirror]),
            ..Default::default()
        },
        MoveHooks {
            on_hit: Some(truant_hit),
            ..Default::default()
        },
    );
}

// Fails outright if the target's ability cannot be replaced.
fn truant_hit(
    battle: &mut Battle,
    _user: MonHandle,
    target: Option<MonHandle>,
) -> Result<MoveEventResult> {
    let target = target.wrap_expectation("expected a target")?;
    Ok(MoveEventResult::from(
        battle.set_ability(target, &Id::from("truant"))?,
    ))
}

fn ultra_succ(data: &mut DexData) {
    data.add_move(
        MoveData {
            name: "Ultra Succ".to_owned(),
            category: MoveCategory::Physical,
            primary_type: Type::Fighting,
            base_power: 90,
            accuracy: Accuracy::Chance(95),
            pp: 10,
            target: MoveTarget::Normal,
            flags: HashSet::from_iter([MoveFlag::Protect, MoveFlag::Mirror, MoveFlag::Heal]),
            drain_percent: Some(Fraction::new(1, 2)),
            user_effect: Some(HitEffect {
                boosts: Some(BoostTable::from_iter([(Boost::Spe, 1)])),
                ..Default::default()
            }),
            ..Default::default()
        },
        MoveHooks::default(),
    );
}

fn vibora(data: &mut DexData) {
    data.add_move(
        MoveData {
            name: "Víbora".to_owned(),
            category: MoveCategory::Status,
            primary_type: Type::Poison,
            pp: 5,
            target: MoveTarget::AllyTeam,
            flags: HashSet::from_iter([MoveFlag::Mirror, MoveFlag::Snatch]),
            ..Default::default()
        },
        MoveHooks {
            on_hit_side: Some(vibora_hit_side),
            ..Default::default()
        },
    );
}

// Curing nothing fails the move; the self-poison sticks either way.
fn vibora_hit_side(battle: &mut Battle, user: MonHandle, side: usize) -> Result<MoveEventResult> {
    let mut cured = false;
    for mon in battle.side(side)?.mons.clone() {
        cured |= battle.cure_status(mon)?;
    }
    battle.set_status(user, &Id::from("psn"), Some(user))?;
    Ok(MoveEventResult::from(cured))
}
