//! Species definitions: the minimal set that the catalog's moves and items interact with.

use fray_data::{
    SpeciesData,
    Type,
};

use crate::dex::DexData;

pub(super) fn add_species(data: &mut DexData) {
    data.add_species(SpeciesData {
        name: "Steelix".to_owned(),
        primary_type: Type::Steel,
        secondary_type: Some(Type::Ground),
        base_species: None,
        weight: 4000,
    });
    data.add_species(SpeciesData {
        name: "Steelix-Mega".to_owned(),
        primary_type: Type::Steel,
        secondary_type: Some(Type::Ground),
        base_species: Some("Steelix".to_owned()),
        weight: 7400,
    });
    data.add_species(SpeciesData {
        name: "Cradily".to_owned(),
        primary_type: Type::Rock,
        secondary_type: Some(Type::Grass),
        base_species: None,
        weight: 604,
    });
    data.add_species(SpeciesData {
        name: "Pikachu".to_owned(),
        primary_type: Type::Electric,
        secondary_type: None,
        base_species: None,
        weight: 60,
    });
    data.add_species(SpeciesData {
        name: "Snorlax".to_owned(),
        primary_type: Type::Normal,
        secondary_type: None,
        base_species: None,
        weight: 4600,
    });
    data.add_species(SpeciesData {
        name: "Gyarados".to_owned(),
        primary_type: Type::Water,
        secondary_type: Some(Type::Flying),
        base_species: None,
        weight: 2350,
    });
    data.add_species(SpeciesData {
        name: "Gengar".to_owned(),
        primary_type: Type::Ghost,
        secondary_type: Some(Type::Poison),
        base_species: None,
        weight: 405,
    });
}
