//! Primitive agent actions.
//!
//! Every action is a stateless rule: a precondition over [`WorldState`] and
//! an effect that mutates it. The five rules live in [`kinds`] as zero-sized
//! types implementing [`ActionRule`]; [`ActionKind`] is the closed value type
//! the planner emits and the agent consumes.
//!
//! `execute` does not re-check `can_execute`. Callers decide whether to run
//! an action; the [`Agent`](crate::Agent) skips any whose precondition fails.

mod kinds;

pub use kinds::{DrinkWater, Eat, Flee, SearchFood, SearchWater};

use crate::state::WorldState;

/// Precondition and effect of a single primitive action.
pub trait ActionRule {
    /// Pure precondition check. Repeated calls on an unchanged state agree.
    fn can_execute(&self, state: &WorldState) -> bool;

    /// Applies the effect. Never fails.
    fn execute(&self, state: &mut WorldState);
}

/// Tag identifying one of the primitive actions.
///
/// This is also the identity reported when an action is skipped.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ActionKind {
    SearchFood,
    Eat,
    SearchWater,
    DrinkWater,
    Flee,
}

impl ActionKind {
    /// Returns the rule backing this tag.
    pub fn rule(self) -> &'static dyn ActionRule {
        match self {
            ActionKind::SearchFood => &SearchFood,
            ActionKind::Eat => &Eat,
            ActionKind::SearchWater => &SearchWater,
            ActionKind::DrinkWater => &DrinkWater,
            ActionKind::Flee => &Flee,
        }
    }
}

impl ActionRule for ActionKind {
    #[inline]
    fn can_execute(&self, state: &WorldState) -> bool {
        self.rule().can_execute(state)
    }

    #[inline]
    fn execute(&self, state: &mut WorldState) {
        tracing::debug!(action = %self, "executing action");
        self.rule().execute(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    fn hungry_with_food() -> WorldState {
        let mut state = WorldState::new();
        state.set_food(true);
        state
    }

    #[test]
    fn can_execute_is_stable_without_execute() {
        let states = [
            WorldState::new(),
            hungry_with_food(),
            WorldState::new().with_under_attack(true),
        ];

        for state in states {
            for kind in ActionKind::iter() {
                let first = kind.can_execute(&state);
                let second = kind.can_execute(&state);
                assert_eq!(first, second, "{kind} changed its answer");
            }
        }
    }

    #[test]
    fn can_execute_does_not_mutate() {
        let state = hungry_with_food();
        let before = state;
        for kind in ActionKind::iter() {
            kind.can_execute(&state);
        }
        assert_eq!(state, before);
    }

    #[test]
    fn search_food_then_eat() {
        let mut state = WorldState::new();

        assert!(ActionKind::SearchFood.can_execute(&state));
        ActionKind::SearchFood.execute(&mut state);
        assert!(state.has_food());
        assert!(!ActionKind::SearchFood.can_execute(&state));

        assert!(ActionKind::Eat.can_execute(&state));
        ActionKind::Eat.execute(&mut state);
        assert!(!state.has_food());
        assert_eq!(state.hunger(), 50);
    }

    #[test]
    fn eat_requires_hunger() {
        let mut state = hungry_with_food();
        state.set_hunger(0);
        assert!(!ActionKind::Eat.can_execute(&state));
    }

    #[test]
    fn search_water_then_drink() {
        let mut state = WorldState::new();

        ActionKind::SearchWater.execute(&mut state);
        assert!(state.has_water());
        assert!(ActionKind::DrinkWater.can_execute(&state));

        ActionKind::DrinkWater.execute(&mut state);
        assert!(!state.has_water());
        assert_eq!(state.thirst(), 50);
        assert_eq!(state.hunger(), 100);
    }

    #[test]
    fn drink_requires_water_and_thirst() {
        let mut state = WorldState::new();
        assert!(!ActionKind::DrinkWater.can_execute(&state));

        state.set_water(true);
        state.set_thirst(0);
        assert!(!ActionKind::DrinkWater.can_execute(&state));
    }

    #[test]
    fn flee_clears_attack() {
        let mut state = WorldState::new();
        assert!(!ActionKind::Flee.can_execute(&state));

        state.set_under_attack(true);
        assert!(ActionKind::Flee.can_execute(&state));
        ActionKind::Flee.execute(&mut state);
        assert!(!state.is_under_attack());
    }

    #[test]
    fn kind_identifiers_are_snake_case() {
        assert_eq!(ActionKind::DrinkWater.to_string(), "drink_water");
        assert_eq!(ActionKind::Flee.as_ref(), "flee");
    }
}
