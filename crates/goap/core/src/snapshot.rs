//! Read-only view of the agent's state for reporting.

use crate::state::WorldState;

/// Every [`WorldState`] field plus the derived "fled successfully" flag.
///
/// Formatting is left to whoever consumes the snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StateSnapshot {
    pub hunger: i32,
    pub thirst: i32,
    pub has_food: bool,
    pub has_water: bool,
    pub under_attack: bool,
    /// `true` iff the agent is not under attack.
    pub fled_successfully: bool,
}

impl From<&WorldState> for StateSnapshot {
    fn from(state: &WorldState) -> Self {
        Self {
            hunger: state.hunger(),
            thirst: state.thirst(),
            has_food: state.has_food(),
            has_water: state.has_water(),
            under_attack: state.is_under_attack(),
            fled_successfully: !state.is_under_attack(),
        }
    }
}
