//! Item definitions.

use anyhow::Result;
use fray_data::{
    FlingItemData,
    Id,
    ItemData,
};

use crate::{
    battle::{
        Battle,
        MonHandle,
    },
    dex::DexData,
    effect::ItemHooks,
};

pub(super) fn add_items(data: &mut DexData) {
    magmarizer(data);
    tiksium_z(data);
    iron_ball(data);
}

fn magmarizer(data: &mut DexData) {
    data.add_item(
        ItemData {
            name: "Magmarizer".to_owned(),
            takeable: true,
            fling: None,
            mega_evolves_from: Some("Steelix".to_owned()),
            mega_evolves_into: Some("Steelix-Mega".to_owned()),
            z_move: None,
            z_move_from: None,
            z_move_user: Vec::new(),
        },
        ItemHooks {
            on_take_item: Some(magmarizer_take_item),
            ..Default::default()
        },
    );
}

// A Mega Stone cannot be taken from the species it evolves.
fn magmarizer_take_item(
    battle: &mut Battle,
    holder: MonHandle,
    _taker: Option<MonHandle>,
) -> Result<bool> {
    let mega_evolves_from = battle
        .dex
        .items
        .get(&Id::from("magmarizer"))?
        .data
        .mega_evolves_from
        .clone();
    let species = battle.mon(holder)?.species.clone();
    let base_species = Id::from(battle.dex.species.get(&species)?.data.base_species());
    match mega_evolves_from {
        Some(species) => Ok(Id::from(species) != base_species),
        None => Ok(true),
    }
}

fn tiksium_z(data: &mut DexData) {
    data.add_item(
        ItemData {
            name: "Tiksium Z".to_owned(),
            takeable: false,
            fling: None,
            mega_evolves_from: None,
            mega_evolves_into: None,
            z_move: Some("Devolution Wave".to_owned()),
            z_move_from: Some("Rock Slide".to_owned()),
            z_move_user: vec!["Cradily".to_owned()],
        },
        ItemHooks::default(),
    );
}

fn iron_ball(data: &mut DexData) {
    data.add_item(
        ItemData {
            name: "Iron Ball".to_owned(),
            takeable: true,
            fling: Some(FlingItemData {
                power: 130,
                status: None,
                volatile_status: None,
            }),
            mega_evolves_from: None,
            mega_evolves_into: None,
            z_move: None,
            z_move_from: None,
            z_move_user: Vec::new(),
        },
        ItemHooks::default(),
    );
}
