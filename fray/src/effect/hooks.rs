use anyhow::Result;
use fray_data::Accuracy;

use crate::battle::{
    Battle,
    MonHandle,
    MoveEventResult,
};

/// Hook invoked with the move user and optional single target.
pub type MonResultHook = fn(&mut Battle, MonHandle, Option<MonHandle>) -> Result<MoveEventResult>;

/// Hook invoked with the move user and optional single target, with no result.
pub type MonVoidHook = fn(&mut Battle, MonHandle, Option<MonHandle>) -> Result<()>;

/// Hook invoked when a condition ends on a Mon.
pub type MonEndHook = fn(&mut Battle, MonHandle) -> Result<()>;

/// Hook that computes the base power of a move against a target.
pub type BasePowerHook = fn(&mut Battle, MonHandle, MonHandle) -> Result<u32>;

/// Hook that adjusts the effective accuracy of a move against a target.
///
/// Receives the accuracy produced so far and returns the adjusted accuracy.
pub type AccuracyHook = fn(&mut Battle, MonHandle, MonHandle, Accuracy) -> Result<Accuracy>;

/// Hook invoked when a move hits a side.
pub type SideResultHook = fn(&mut Battle, MonHandle, usize) -> Result<MoveEventResult>;

/// Hook invoked when a move hits the field.
pub type FieldResultHook = fn(&mut Battle, MonHandle) -> Result<MoveEventResult>;

/// Hook invoked when a condition starts or restarts on a side.
pub type SideStartHook = fn(&mut Battle, usize, Option<MonHandle>) -> Result<MoveEventResult>;

/// Hook invoked when a condition ends on a side.
pub type SideEndHook = fn(&mut Battle, usize) -> Result<()>;

/// Hook invoked when a condition starts on the field.
pub type FieldStartHook = fn(&mut Battle, Option<MonHandle>) -> Result<MoveEventResult>;

/// Hook invoked when a condition ends on the field.
pub type FieldEndHook = fn(&mut Battle) -> Result<()>;

/// Hook that adjusts a Mon's effective weight, in hectograms.
pub type WeightHook = fn(&mut Battle, MonHandle, u32) -> Result<u32>;

/// Hook that decides whether an item can be taken from its holder.
pub type TakeItemHook = fn(&mut Battle, MonHandle, Option<MonHandle>) -> Result<bool>;

/// Hook invoked when an ability starts or ends on a Mon.
pub type AbilityHook = fn(&mut Battle, MonHandle) -> Result<()>;

/// Which pass of the weight pipeline a weight hook runs in.
///
/// All additive adjustments apply before all multiplicative ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeightModKind {
    Additive,
    Multiplicative,
}

/// Hooks that extend the behavior of a move at fixed points of the move-use pipeline.
///
/// Every hook is optional. A move with no hooks is driven entirely by its data.
#[derive(Debug, Default, Clone, Copy)]
pub struct MoveHooks {
    /// Adjusts the effective accuracy of this move against the target.
    pub on_modify_accuracy: Option<AccuracyHook>,
    /// Rewrites properties of the active move before base power is resolved.
    pub on_modify_move: Option<MonVoidHook>,
    /// Computes base power from battle state, replacing the static value.
    pub base_power_callback: Option<BasePowerHook>,
    /// Presentation hook that runs once per use, before the try gate.
    ///
    /// Must not alter battle state.
    pub on_prepare_hit: Option<MonVoidHook>,
    /// Final veto based on combatant state, before any hit is attempted.
    pub on_try: Option<MonResultHook>,
    /// Runs during each hit against a Mon target, after damage and declared payloads.
    pub on_hit: Option<MonResultHook>,
    /// Runs during each hit against a side.
    pub on_hit_side: Option<SideResultHook>,
    /// Runs during each hit against the field.
    pub on_hit_field: Option<FieldResultHook>,
    /// Runs after each completed hit.
    pub on_after_hit: Option<MonVoidHook>,
    /// Runs once after the move use completes successfully.
    pub on_after_move: Option<MonVoidHook>,
}

/// Hooks that extend the behavior of a condition.
///
/// Start, restart, and end hooks fire at lifecycle boundaries for the location the condition
/// attaches to. Modify hooks participate in collection-based extension points while the condition
/// is active.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConditionHooks {
    /// Ordering priority when hooks from multiple active effects are collected.
    ///
    /// Higher priorities run first. Ties break by collection order.
    pub priority: i32,
    /// Runs when the condition is applied to a Mon, with the holder and source.
    pub on_start: Option<MonResultHook>,
    /// Runs when the condition is applied to a Mon that already has it.
    pub on_restart: Option<MonResultHook>,
    /// Runs when the condition is removed from a Mon.
    pub on_end: Option<MonEndHook>,
    /// Runs when the condition is applied to a side.
    pub on_side_start: Option<SideStartHook>,
    /// Runs when another layer of the condition is applied to a side.
    pub on_side_restart: Option<SideStartHook>,
    /// Runs when the condition is removed from a side.
    pub on_side_end: Option<SideEndHook>,
    /// Runs when the condition is applied to the field.
    pub on_field_start: Option<FieldStartHook>,
    /// Runs when the condition is removed from the field.
    pub on_field_end: Option<FieldEndHook>,
    /// Adjusts the accuracy of moves while the condition is active.
    pub on_modify_accuracy: Option<AccuracyHook>,
    /// Adjusts the holder's weight while the condition is active.
    pub on_modify_weight: Option<WeightHook>,
    /// Which weight pass [`Self::on_modify_weight`] runs in.
    pub weight_mod: Option<WeightModKind>,
}

/// Hooks that extend the behavior of a held item.
#[derive(Debug, Default, Clone, Copy)]
pub struct ItemHooks {
    /// Ordering priority when hooks from multiple active effects are collected.
    pub priority: i32,
    /// Decides whether the item can be taken from its holder.
    ///
    /// Overrides the static `takeable` flag.
    pub on_take_item: Option<TakeItemHook>,
    /// Adjusts the accuracy of moves while the holder is involved.
    pub on_modify_accuracy: Option<AccuracyHook>,
    /// Adjusts the holder's weight.
    pub on_modify_weight: Option<WeightHook>,
    /// Which weight pass [`Self::on_modify_weight`] runs in.
    pub weight_mod: Option<WeightModKind>,
}

/// Hooks that extend the behavior of an ability.
#[derive(Debug, Default, Clone, Copy)]
pub struct AbilityHooks {
    /// Runs when the ability becomes active on a Mon.
    pub on_start: Option<AbilityHook>,
    /// Runs when the ability is deactivated on a Mon.
    pub on_end: Option<AbilityHook>,
}
