use fray_data::Id;
use indexmap::IndexMap;

use crate::effect::EffectInstance;

/// The battlefield shared by both sides.
///
/// Weather and terrain are single slots. Pseudo-weathers stack in a keyed map, in registration
/// order.
#[derive(Default)]
pub struct Field {
    /// Active weather.
    pub weather: Option<EffectInstance>,
    /// Active terrain.
    pub terrain: Option<EffectInstance>,
    /// Active pseudo-weathers.
    pub pseudo_weathers: IndexMap<Id, EffectInstance>,
}

impl Field {
    /// The id of the active weather.
    pub fn weather_id(&self) -> Option<&Id> {
        self.weather.as_ref().map(|instance| &instance.id)
    }

    /// The id of the active terrain.
    pub fn terrain_id(&self) -> Option<&Id> {
        self.terrain.as_ref().map(|instance| &instance.id)
    }

    /// Checks if the field has the given pseudo-weather.
    pub fn has_pseudo_weather(&self, id: &Id) -> bool {
        self.pseudo_weathers.contains_key(id)
    }
}
