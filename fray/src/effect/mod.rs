mod effect_state;
mod hooks;

pub use effect_state::{
    EffectInstance,
    EffectState,
};
pub use hooks::{
    AbilityHook,
    AbilityHooks,
    AccuracyHook,
    BasePowerHook,
    ConditionHooks,
    FieldEndHook,
    FieldResultHook,
    FieldStartHook,
    ItemHooks,
    MonEndHook,
    MonResultHook,
    MonVoidHook,
    MoveHooks,
    SideEndHook,
    SideResultHook,
    SideStartHook,
    TakeItemHook,
    WeightHook,
    WeightModKind,
};
