//! The demo run: spawn, dump, optionally force an attack, act, dump.
use goap_core::{Agent, ConfigError, RngOracle};

use crate::config::SimConfig;
use crate::report::{CycleSummary, ScenarioReport};

/// Runs the configured scenario against a fresh agent.
///
/// The agent's initial attack flag comes from `rng`, seeded with
/// `config.agent.seed`, so a fixed seed replays the same run.
pub fn run_scenario<R: RngOracle + ?Sized>(
    config: &SimConfig,
    rng: &R,
) -> Result<ScenarioReport, ConfigError> {
    config.agent.validate()?;

    let mut agent = Agent::spawn(&config.agent, rng);
    let initial = agent.snapshot();
    if initial.under_attack {
        tracing::warn!("agent spawned under attack");
    }

    if config.force_attack {
        tracing::info!("forcing attack before acting");
        agent.set_under_attack(true);
    }

    let cycles = (0..config.cycles)
        .map(|tick| {
            let report = agent.perform_actions();
            tracing::info!(
                tick,
                goal = %report.goal,
                executed = report.executed().count(),
                skipped = report.skipped().count(),
                "cycle complete"
            );
            CycleSummary::from(&report)
        })
        .collect();

    Ok(ScenarioReport {
        seed: config.agent.seed,
        started_under_attack: initial.under_attack,
        initial,
        forced_attack: config.force_attack,
        cycles,
        final_state: agent.snapshot(),
    })
}
