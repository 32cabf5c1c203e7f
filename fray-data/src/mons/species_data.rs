use serde::{
    Deserialize,
    Serialize,
};

use crate::Type;

/// Data about a particular species.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeciesData {
    /// Name of the species.
    pub name: String,
    /// Primary type.
    pub primary_type: Type,
    /// Secondary type.
    #[serde(default)]
    pub secondary_type: Option<Type>,
    /// Name of the base species, for alternative formes.
    #[serde(default)]
    pub base_species: Option<String>,
    /// Weight, in hectograms.
    pub weight: u32,
}

impl SpeciesData {
    /// All types of the species, in order.
    pub fn types(&self) -> Vec<Type> {
        match self.secondary_type {
            Some(secondary) => vec![self.primary_type, secondary],
            None => vec![self.primary_type],
        }
    }

    /// The base species name, which is the species name itself unless overridden.
    pub fn base_species(&self) -> &str {
        self.base_species.as_deref().unwrap_or(&self.name)
    }
}
