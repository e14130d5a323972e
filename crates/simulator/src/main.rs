//! `goap-sim` binary.
//!
//! Spawns one agent, dumps its state, forces an attack (unless disabled),
//! runs the configured number of cycles and dumps the final state.
//!
//! # Examples
//!
//! ```bash
//! # Default demo: one cycle, forced attack, text output
//! cargo run -p goap-simulator
//!
//! # Reproducible multi-cycle run as JSON
//! GOAP_SEED=7 GOAP_FORCE_ATTACK=false GOAP_CYCLES=4 GOAP_OUTPUT=json cargo run -p goap-simulator
//! ```

use anyhow::{Context, Result};
use goap_core::PcgRng;
use goap_simulator::{OutputFormat, SimConfig, logging, run_scenario};

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = SimConfig::from_env();
    let _guard = logging::setup_logging(config.log_dir.as_deref())?;

    tracing::info!(
        seed = config.agent.seed,
        attack_one_in = config.agent.attack_one_in,
        cycles = config.cycles,
        output = %config.output,
        "Starting GOAP simulator"
    );

    let report = run_scenario(&config, &PcgRng).context("invalid agent configuration")?;

    match config.output {
        OutputFormat::Text => print!("{}", report.to_text()),
        OutputFormat::Json => println!(
            "{}",
            report.to_json().context("failed to serialize report")?
        ),
    }

    tracing::info!(
        fled = report.final_state.fled_successfully,
        "Simulation complete"
    );
    Ok(())
}
