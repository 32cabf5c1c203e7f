//! Log events for user-visible battle state changes.
//!
//! Every mutation that a battle viewer should see goes through one of these functions, so that
//! the event vocabulary stays in one place.

use anyhow::Result;
use fray_data::{
    Boost,
    Id,
    Type,
};
use itertools::Itertools;

use crate::{
    battle::{
        Battle,
        MonHandle,
    },
    log_event,
};

pub fn use_move(
    battle: &mut Battle,
    user: MonHandle,
    name: &str,
    target: Option<MonHandle>,
) -> Result<()> {
    let user_details = battle.mon(user)?.position_details();
    let mut event = log_event!("move", ("mon", user_details), ("name", name));
    if let Some(target) = target {
        if target != user {
            event.extend(&("target", battle.mon(target)?.position_details()));
        }
    }
    battle.log.push(event);
    Ok(())
}

pub fn fail(battle: &mut Battle, mon: MonHandle) -> Result<()> {
    let details = battle.mon(mon)?.position_details();
    battle.log.push(log_event!("fail", ("mon", details)));
    Ok(())
}

pub fn miss(battle: &mut Battle, user: MonHandle, target: MonHandle) -> Result<()> {
    let user_details = battle.mon(user)?.position_details();
    let target_details = battle.mon(target)?.position_details();
    battle.log.push(log_event!(
        "miss",
        ("mon", user_details),
        ("target", target_details),
    ));
    Ok(())
}

pub fn damage(battle: &mut Battle, mon: MonHandle) -> Result<()> {
    let mon = battle.mon(mon)?;
    let health = format!("{}/{}", mon.hp, mon.max_hp);
    let details = mon.position_details();
    battle
        .log
        .push(log_event!("damage", ("mon", details), ("health", health)));
    Ok(())
}

pub fn heal(battle: &mut Battle, mon: MonHandle) -> Result<()> {
    let mon = battle.mon(mon)?;
    let health = format!("{}/{}", mon.hp, mon.max_hp);
    let details = mon.position_details();
    battle
        .log
        .push(log_event!("heal", ("mon", details), ("health", health)));
    Ok(())
}

pub fn faint(battle: &mut Battle, mon: MonHandle) -> Result<()> {
    let details = battle.mon(mon)?.position_details();
    battle.log.push(log_event!("faint", ("mon", details)));
    Ok(())
}

pub fn boost(battle: &mut Battle, mon: MonHandle, boost: Boost, delta: i8) -> Result<()> {
    let details = battle.mon(mon)?.position_details();
    let title = if delta > 0 { "boost" } else { "unboost" };
    battle.log.push(log_event!(
        title,
        ("mon", details),
        ("stat", boost),
        ("by", delta.unsigned_abs()),
    ));
    Ok(())
}

pub fn status(battle: &mut Battle, mon: MonHandle, name: &str) -> Result<()> {
    let details = battle.mon(mon)?.position_details();
    battle
        .log
        .push(log_event!("status", ("mon", details), ("status", name)));
    Ok(())
}

pub fn cure_status(battle: &mut Battle, mon: MonHandle, name: &str) -> Result<()> {
    let details = battle.mon(mon)?.position_details();
    battle
        .log
        .push(log_event!("curestatus", ("mon", details), ("status", name)));
    Ok(())
}

pub fn add_volatile(battle: &mut Battle, mon: MonHandle, name: &str) -> Result<()> {
    let details = battle.mon(mon)?.position_details();
    battle.log.push(log_event!(
        "addvolatile",
        ("mon", details),
        ("condition", name),
    ));
    Ok(())
}

pub fn remove_volatile(battle: &mut Battle, mon: MonHandle, name: &str) -> Result<()> {
    let details = battle.mon(mon)?.position_details();
    battle.log.push(log_event!(
        "removevolatile",
        ("mon", details),
        ("condition", name),
    ));
    Ok(())
}

pub fn side_condition(battle: &mut Battle, side: usize, name: &str, layers: u8) -> Result<()> {
    battle.log.push(log_event!(
        "sidecondition",
        ("side", side),
        ("condition", name),
        ("layers", layers),
    ));
    Ok(())
}

pub fn side_end(battle: &mut Battle, side: usize, name: &str) -> Result<()> {
    battle
        .log
        .push(log_event!("sideend", ("side", side), ("condition", name)));
    Ok(())
}

pub fn weather(battle: &mut Battle, name: &str) -> Result<()> {
    battle.log.push(log_event!("weather", ("weather", name)));
    Ok(())
}

pub fn weather_end(battle: &mut Battle, name: &str) -> Result<()> {
    battle.log.push(log_event!("weatherend", ("weather", name)));
    Ok(())
}

pub fn field_start(battle: &mut Battle, name: &str) -> Result<()> {
    battle.log.push(log_event!("fieldstart", ("condition", name)));
    Ok(())
}

pub fn field_end(battle: &mut Battle, name: &str) -> Result<()> {
    battle.log.push(log_event!("fieldend", ("condition", name)));
    Ok(())
}

pub fn ability(battle: &mut Battle, mon: MonHandle, name: &str) -> Result<()> {
    let details = battle.mon(mon)?.position_details();
    battle
        .log
        .push(log_event!("ability", ("mon", details), ("ability", name)));
    Ok(())
}

pub fn type_change(battle: &mut Battle, mon: MonHandle, types: &[Type]) -> Result<()> {
    let details = battle.mon(mon)?.position_details();
    let types = types.iter().join("/");
    battle
        .log
        .push(log_event!("typechange", ("mon", details), ("types", types)));
    Ok(())
}

pub fn item(battle: &mut Battle, mon: MonHandle, name: &str) -> Result<()> {
    let details = battle.mon(mon)?.position_details();
    battle
        .log
        .push(log_event!("item", ("mon", details), ("item", name)));
    Ok(())
}

pub fn item_end(battle: &mut Battle, mon: MonHandle, name: &str) -> Result<()> {
    let details = battle.mon(mon)?.position_details();
    battle
        .log
        .push(log_event!("itemend", ("mon", details), ("item", name)));
    Ok(())
}

pub fn switch_request(battle: &mut Battle, mon: MonHandle) -> Result<()> {
    let details = battle.mon(mon)?.position_details();
    battle.log.push(log_event!("switchrequest", ("mon", details)));
    Ok(())
}

pub fn hit_count(battle: &mut Battle, hits: u8) {
    battle.log.push(log_event!("hitcount", ("hits", hits)));
}

pub fn residual(battle: &mut Battle) {
    battle.log.push(log_event!("residual"));
}

pub fn turn(battle: &mut Battle) {
    battle.log.push(log_event!("turn", ("turn", battle.turn)));
}

/// Records a diagnostic for an operation that degraded to a no-op.
pub fn debug(battle: &mut Battle, message: String) {
    battle.log.push(log_event!("debug", message));
}

/// Records a diagnostic for a reference to an unregistered definition.
pub fn debug_unknown(battle: &mut Battle, kind: &str, id: &Id) {
    debug(battle, format!("unknown {kind} {id}"));
}
