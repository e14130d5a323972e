//! Goal-to-plan decision logic.
//!
//! [`TablePlanner`] is a two-level lookahead: for each goal the action space
//! is exactly "find the resource, then consume it", so a fixed table covers
//! it. The [`Planner`] trait is the seam where a search-based planner can be
//! dropped in without touching the [`Agent`](crate::Agent).

use arrayvec::ArrayVec;

use crate::action::ActionKind;
use crate::config::AgentConfig;
use crate::goal::Goal;
use crate::state::WorldState;

/// Ordered actions to attempt in one cycle.
pub type Plan = ArrayVec<ActionKind, { AgentConfig::MAX_PLAN_LEN }>;

/// Produces a plan for a goal from a given state.
pub trait Planner {
    /// Must be deterministic and must not depend on anything but its inputs.
    fn plan(&self, state: &WorldState, goal: Goal) -> Plan;
}

/// Fixed decision table, evaluated in priority order:
///
/// 1. Under attack: `[Flee]`, whatever the goal.
/// 2. `SatisfyHunger`: `[SearchFood, Eat]` if hungry without food, `[Eat]`
///    if holding food, otherwise nothing.
/// 3. `SatisfyThirst`: the same shape with water.
/// 4. Anything else: nothing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TablePlanner;

impl Planner for TablePlanner {
    fn plan(&self, state: &WorldState, goal: Goal) -> Plan {
        let mut plan = Plan::new();

        if state.is_under_attack() {
            plan.push(ActionKind::Flee);
            return plan;
        }

        match goal {
            Goal::SatisfyHunger => {
                if state.is_hungry() && !state.has_food() {
                    plan.push(ActionKind::SearchFood);
                    plan.push(ActionKind::Eat);
                } else if state.has_food() {
                    plan.push(ActionKind::Eat);
                }
            }
            Goal::SatisfyThirst => {
                if state.is_thirsty() && !state.has_water() {
                    plan.push(ActionKind::SearchWater);
                    plan.push(ActionKind::DrinkWater);
                } else if state.has_water() {
                    plan.push(ActionKind::DrinkWater);
                }
            }
            Goal::SeekFood => {}
        }

        plan
    }
}
