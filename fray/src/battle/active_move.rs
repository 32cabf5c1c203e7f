use fray_data::{
    Id,
    Identifiable,
    MoveData,
};

use crate::{
    battle::MonHandle,
    dex::Move,
    effect::{
        EffectState,
        MoveHooks,
    },
};

/// One use of a move by one Mon.
///
/// The move data is cloned out of the registry, so modifier hooks may rewrite it for this use
/// without touching the immutable definition. The instance lives on the battle's active-move
/// stack for the duration of the use and is dropped afterwards.
pub struct ActiveMove {
    /// The move being used.
    pub id: Id,
    /// Move data for this use.
    pub data: MoveData,
    /// Hook table.
    pub hooks: MoveHooks,
    /// The user.
    pub user: MonHandle,
    /// The chosen target.
    pub target: Option<MonHandle>,
    /// The current hit number.
    ///
    /// Starts at 1 on the first hit. Observable to after-hit hooks during the hit they just
    /// completed.
    pub hit: u8,
    /// Total damage dealt across all hits, for drain and recoil settlement.
    pub total_damage: u64,
    /// Has the user effect been applied during this use?
    pub applied_user_effect: bool,
    /// Per-use scratch state.
    pub state: EffectState,
}

impl ActiveMove {
    /// Creates a new active move from a registered move.
    pub fn new(mov: &Move, user: MonHandle, target: Option<MonHandle>) -> Self {
        Self {
            id: mov.id().clone(),
            data: mov.data.clone(),
            hooks: mov.hooks,
            user,
            target,
            hit: 1,
            total_damage: 0,
            applied_user_effect: false,
            state: EffectState::new(),
        }
    }
}
