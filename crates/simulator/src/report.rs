//! Rendering of agent state dumps and cycle outcomes.
//!
//! The core only exposes snapshots and cycle reports; everything a human or
//! a tool reads is produced here.
use std::fmt::Write;

use goap_core::{ActionKind, ActionOutcome, CycleReport, Goal, StateSnapshot};
use serde::Serialize;

/// One cycle, flattened for output.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CycleSummary {
    pub goal: Goal,
    pub plan: Vec<ActionKind>,
    /// Per-action outcomes in plan order.
    pub steps: Vec<ActionOutcome>,
    pub executed: Vec<ActionKind>,
    pub skipped: Vec<ActionKind>,
}

impl From<&CycleReport> for CycleSummary {
    fn from(report: &CycleReport) -> Self {
        Self {
            goal: report.goal,
            plan: report.plan.to_vec(),
            steps: report.steps.to_vec(),
            executed: report.executed().collect(),
            skipped: report.skipped().collect(),
        }
    }
}

/// Full record of one simulator run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ScenarioReport {
    pub seed: u64,
    pub started_under_attack: bool,
    pub initial: StateSnapshot,
    pub forced_attack: bool,
    pub cycles: Vec<CycleSummary>,
    #[serde(rename = "final")]
    pub final_state: StateSnapshot,
}

impl ScenarioReport {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn to_text(&self) -> String {
        let mut out = String::new();

        if self.started_under_attack {
            out.push_str("Alert: the agent is under attack!\n");
        }
        out.push_str("Initial agent state:\n");
        out.push_str(&render_snapshot(&self.initial));

        if self.forced_attack {
            out.push_str("\nThe agent is now under attack!\n");
        }
        out.push_str("\nThe agent starts acting...\n");
        for cycle in &self.cycles {
            out.push_str(&render_cycle(cycle));
        }

        out.push_str("\nAgent state after acting:\n");
        out.push_str(&render_snapshot(&self.final_state));
        out
    }
}

/// Renders all five state fields, plus a line when the agent is safe.
pub fn render_snapshot(snapshot: &StateSnapshot) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Hunger: {}", snapshot.hunger);
    let _ = writeln!(out, "Thirst: {}", snapshot.thirst);
    let _ = writeln!(out, "Food available: {}", yes_no(snapshot.has_food));
    let _ = writeln!(out, "Water available: {}", yes_no(snapshot.has_water));
    let _ = writeln!(out, "Under attack: {}", yes_no(snapshot.under_attack));
    if snapshot.fled_successfully {
        out.push_str("The agent fled successfully.\n");
    }
    out
}

/// Renders the actions of one cycle in plan order.
pub fn render_cycle(cycle: &CycleSummary) -> String {
    let mut out = String::new();
    for step in &cycle.steps {
        if step.executed {
            let _ = writeln!(out, "{}", describe(step.action));
        } else {
            let _ = writeln!(out, "Action impossible: {}", step.action);
        }
    }
    out
}

/// Human-readable line for an executed action.
pub fn describe(action: ActionKind) -> &'static str {
    match action {
        ActionKind::SearchFood => "The agent searches for food.",
        ActionKind::Eat => "The agent eats.",
        ActionKind::SearchWater => "The agent searches for water.",
        ActionKind::DrinkWater => "The agent drinks water.",
        ActionKind::Flee => "The agent flees to survive!",
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "Yes" } else { "No" }
}
