use fray_data::MoveCategory;

/// Resolved inputs for one hit's damage calculation.
///
/// Produced by the move-use pipeline after all modifier hooks have run.
pub struct DamageContext {
    /// The user's level.
    pub level: u8,
    /// Base power, after any base power callback.
    pub base_power: u32,
    /// Move category.
    pub category: MoveCategory,
    /// The user's attacking stat, after boosts.
    pub attack: u32,
    /// The target's defending stat, after boosts.
    pub defense: u32,
}

/// Translates resolved hit inputs into an HP change.
///
/// The battle owns target selection, hit resolution, and applying the result. Implementations
/// only turn the resolved numbers into damage.
pub trait DamageEngine {
    /// The damage dealt by a single hit.
    fn damage(&self, context: &DamageContext) -> u16;
}

/// The textbook damage formula, with no type chart and no random spread.
///
/// `floor(floor(floor(2 * level / 5 + 2) * power * attack / defense) / 50) + 2`
#[derive(Debug, Default, Clone)]
pub struct StandardDamageEngine;

impl DamageEngine for StandardDamageEngine {
    fn damage(&self, context: &DamageContext) -> u16 {
        let level = 2 * context.level as u64 / 5 + 2;
        let base = level * context.base_power as u64 * context.attack as u64
            / context.defense.max(1) as u64;
        let damage = base / 50 + 2;
        damage.min(u16::MAX as u64) as u16
    }
}
