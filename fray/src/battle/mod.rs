mod actions;
mod active_move;
mod battle;
mod battle_options;
mod damage;
mod effects;
mod field;
mod logs;
mod mon;
mod move_outcome;
mod side;

pub use actions::ABILITY_SWAP_DENYLIST;
pub use active_move::ActiveMove;
pub use battle::Battle;
pub use battle_options::{
    BattleOptions,
    MonData,
    SideData,
};
pub use damage::{
    DamageContext,
    DamageEngine,
    StandardDamageEngine,
};
pub use field::Field;
pub use mon::{
    Mon,
    MonHandle,
};
pub use move_outcome::{
    MoveEventResult,
    MoveOutcome,
    MoveOutcomeOnTarget,
};
pub use side::Side;
