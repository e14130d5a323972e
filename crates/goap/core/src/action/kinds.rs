//! The five primitive action rules.

use super::ActionRule;
use crate::state::WorldState;

/// Finds food when none is at hand.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchFood;

impl ActionRule for SearchFood {
    fn can_execute(&self, state: &WorldState) -> bool {
        !state.has_food()
    }

    fn execute(&self, state: &mut WorldState) {
        state.set_food(true);
    }
}

/// Consumes the food at hand to lower hunger.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Eat;

impl ActionRule for Eat {
    fn can_execute(&self, state: &WorldState) -> bool {
        state.has_food() && state.is_hungry()
    }

    fn execute(&self, state: &mut WorldState) {
        state.reduce_hunger();
        state.set_food(false);
    }
}

/// Finds water when none is at hand.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchWater;

impl ActionRule for SearchWater {
    fn can_execute(&self, state: &WorldState) -> bool {
        !state.has_water()
    }

    fn execute(&self, state: &mut WorldState) {
        state.set_water(true);
    }
}

/// Consumes the water at hand to lower thirst.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DrinkWater;

impl ActionRule for DrinkWater {
    fn can_execute(&self, state: &WorldState) -> bool {
        state.has_water() && state.is_thirsty()
    }

    fn execute(&self, state: &mut WorldState) {
        state.reduce_thirst();
        state.set_water(false);
    }
}

/// Escapes an attack.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Flee;

impl ActionRule for Flee {
    fn can_execute(&self, state: &WorldState) -> bool {
        state.is_under_attack()
    }

    fn execute(&self, state: &mut WorldState) {
        state.set_under_attack(false);
    }
}
