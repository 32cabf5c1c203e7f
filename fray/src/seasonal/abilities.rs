//! Ability definitions.
//!
//! Most abilities in the catalog carry no hooks; the engine only needs their records to exist
//! so that ability assignment, swapping, and the swap denylist can resolve them.

use fray_data::AbilityData;

use crate::{
    dex::DexData,
    effect::AbilityHooks,
};

pub(super) fn add_abilities(data: &mut DexData) {
    for name in [
        "No Ability",
        "Truant",
        "Comatose",
        "Levitate",
        "Battle Bond",
        "Disguise",
        "Illusion",
        "Multitype",
        "Power Construct",
        "RKS System",
        "Schooling",
        "Shields Down",
        "Stance Change",
        "Wonder Guard",
    ] {
        data.add_ability(
            AbilityData {
                name: name.to_owned(),
            },
            AbilityHooks::default(),
        );
    }
}
