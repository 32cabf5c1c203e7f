use fray_data::Id;
use hashbrown::HashMap;
use serde_json::Value;

use crate::battle::MonHandle;

/// The persisted state of an individual applied effect.
///
/// Allows hook callbacks to persist values across multiple invocations, such as a stack counter
/// or a remaining-turn count managed by the effect itself.
#[derive(Debug, Default, Clone)]
pub struct EffectState {
    values: HashMap<String, Value>,
}

impl EffectState {
    /// Creates a new, empty instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the value associated with the given key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Sets the value associated with the given key.
    pub fn insert<V>(&mut self, key: &str, value: V)
    where
        V: Into<Value>,
    {
        self.values.insert(key.to_owned(), value.into());
    }

    /// Gets the value associated with the given key, as an unsigned integer.
    pub fn get_u64(&self, key: &str) -> Option<u64> {
        self.get(key).and_then(|value| value.as_u64())
    }

    /// Gets the value associated with the given key, as a boolean.
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(|value| value.as_bool())
    }
}

/// A single applied effect: a condition attached to a Mon, a side, or the field.
#[derive(Debug, Clone)]
pub struct EffectInstance {
    /// The condition this instance was created from.
    pub id: Id,
    /// The Mon that caused the effect, if any.
    pub source: Option<MonHandle>,
    /// The turn the effect was applied on.
    pub started_turn: u64,
    /// Remaining duration, in turns.
    ///
    /// Instances with no duration last until removed.
    pub duration: Option<u8>,
    /// Stacked layers, for side conditions.
    pub layers: u8,
    /// Hook scratch state.
    pub state: EffectState,
}

impl EffectInstance {
    /// Creates a new instance of the given condition.
    pub fn new(
        id: Id,
        source: Option<MonHandle>,
        started_turn: u64,
        duration: Option<u8>,
    ) -> Self {
        Self {
            id,
            source,
            started_turn,
            duration,
            layers: 1,
            state: EffectState::new(),
        }
    }
}
