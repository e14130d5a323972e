//! The agent loop: pick a goal, plan, execute.
//!
//! One call to [`Agent::perform_actions`] is one tick. No plan survives past
//! the call that produced it.

use arrayvec::ArrayVec;

use crate::action::{ActionKind, ActionRule};
use crate::config::AgentConfig;
use crate::goal::Goal;
use crate::planner::{Plan, Planner, TablePlanner};
use crate::rng::{RngOracle, roll_under_attack};
use crate::snapshot::StateSnapshot;
use crate::state::WorldState;

/// Result of attempting one planned action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionOutcome {
    pub action: ActionKind,
    /// `false` when the precondition failed and the action was skipped.
    pub executed: bool,
}

/// What happened during one plan-and-execute cycle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CycleReport {
    /// Goal chosen at the start of the cycle (even when the plan ignored it).
    pub goal: Goal,
    /// Plan as produced by the planner.
    pub plan: Plan,
    /// One outcome per planned action, in plan order.
    pub steps: ArrayVec<ActionOutcome, { AgentConfig::MAX_PLAN_LEN }>,
}

impl CycleReport {
    fn new(goal: Goal, plan: Plan) -> Self {
        Self {
            goal,
            plan,
            steps: ArrayVec::new(),
        }
    }

    /// Actions whose precondition held and which were applied, in order.
    pub fn executed(&self) -> impl Iterator<Item = ActionKind> + '_ {
        self.steps
            .iter()
            .filter(|step| step.executed)
            .map(|step| step.action)
    }

    /// Actions whose precondition failed at execution time, in order.
    pub fn skipped(&self) -> impl Iterator<Item = ActionKind> + '_ {
        self.steps
            .iter()
            .filter(|step| !step.executed)
            .map(|step| step.action)
    }

    /// Returns `true` if every planned action ran.
    pub fn is_complete(&self) -> bool {
        self.steps.iter().all(|step| step.executed)
    }
}

/// A single agent owning its world state and planner.
#[derive(Clone, Debug)]
pub struct Agent<P = TablePlanner> {
    state: WorldState,
    planner: P,
}

impl Agent<TablePlanner> {
    /// Creates an agent with maximal needs and the table planner.
    pub fn new(under_attack: bool) -> Self {
        Self::with_planner(TablePlanner, under_attack)
    }

    /// Creates an agent whose initial attack flag is rolled from `rng`.
    pub fn spawn<R: RngOracle + ?Sized>(config: &AgentConfig, rng: &R) -> Self {
        let under_attack = roll_under_attack(rng, config.seed, config.attack_one_in);
        Self::new(under_attack)
    }
}

impl<P: Planner> Agent<P> {
    pub fn with_planner(planner: P, under_attack: bool) -> Self {
        Self::from_state(WorldState::new().with_under_attack(under_attack), planner)
    }

    /// Wraps an existing state, e.g. one restored or built by a test.
    pub fn from_state(state: WorldState, planner: P) -> Self {
        Self { state, planner }
    }

    pub fn state(&self) -> &WorldState {
        &self.state
    }

    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot::from(&self.state)
    }

    /// Forces the emergency condition on or off.
    pub fn set_under_attack(&mut self, under_attack: bool) {
        self.state.set_under_attack(under_attack);
    }

    /// Chooses this cycle's goal.
    ///
    /// Under attack the goal is `SatisfyHunger`; the planner overrides it
    /// with `Flee` anyway. Otherwise the larger need wins, hunger on ties.
    pub fn select_goal(&self) -> Goal {
        if self.state.is_under_attack() {
            Goal::SatisfyHunger
        } else if self.state.thirst() > self.state.hunger() {
            Goal::SatisfyThirst
        } else {
            Goal::SatisfyHunger
        }
    }

    /// Runs exactly one plan-and-execute cycle.
    ///
    /// Actions whose precondition fails are skipped, not retried, and the
    /// rest of the plan still runs.
    pub fn perform_actions(&mut self) -> CycleReport {
        let goal = self.select_goal();
        let plan = self.planner.plan(&self.state, goal);
        tracing::debug!(%goal, plan = ?plan.as_slice(), "planned cycle");

        let mut report = CycleReport::new(goal, plan.clone());
        for action in plan {
            let executed = action.can_execute(&self.state);
            if executed {
                action.execute(&mut self.state);
            } else {
                tracing::warn!(%action, "action impossible, skipping");
            }
            report.steps.push(ActionOutcome { action, executed });
        }

        report
    }
}
