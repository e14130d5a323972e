//! Simulator configuration loaded from environment variables.
use std::env;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use goap_core::AgentConfig;

/// How the final report is written to stdout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, strum::Display, strum::EnumString)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Top-level simulator configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimConfig {
    pub agent: AgentConfig,
    /// Force the attack flag on after the initial dump, before acting.
    pub force_attack: bool,
    /// Number of plan-and-execute cycles to run.
    pub cycles: usize,
    pub output: OutputFormat,
    /// Directory for an additional file log. Stderr logging is always on.
    pub log_dir: Option<PathBuf>,
}

impl SimConfig {
    pub fn new(seed: u64) -> Self {
        Self {
            agent: AgentConfig::new(seed),
            force_attack: true,
            cycles: 1,
            output: OutputFormat::Text,
            log_dir: None,
        }
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `GOAP_SEED` - Seed for the initial attack roll (default: UNIX time)
    /// - `GOAP_ATTACK_ONE_IN` - Attack odds as "one in N" (default: 5)
    /// - `GOAP_FORCE_ATTACK` - Force an attack before acting (default: true)
    /// - `GOAP_CYCLES` - Number of cycles to run (default: 1)
    /// - `GOAP_OUTPUT` - `text` or `json` (default: text)
    /// - `GOAP_LOG_DIR` - Directory for a file log (default: none)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok(), clock_seed())
    }

    /// Same as [`from_env`](Self::from_env) with an explicit variable source.
    pub fn from_lookup<F>(lookup: F, default_seed: u64) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let seed = parse::<u64>(&lookup, "GOAP_SEED").unwrap_or(default_seed);
        let mut config = Self::new(seed);

        if let Some(one_in) = parse::<u32>(&lookup, "GOAP_ATTACK_ONE_IN") {
            config.agent.attack_one_in = one_in.max(1);
        }
        if let Some(force) = parse_bool(&lookup, "GOAP_FORCE_ATTACK") {
            config.force_attack = force;
        }
        if let Some(cycles) = parse::<usize>(&lookup, "GOAP_CYCLES") {
            config.cycles = cycles.max(1);
        }
        if let Some(output) = parse::<OutputFormat>(&lookup, "GOAP_OUTPUT") {
            config.output = output;
        }
        if let Some(dir) = lookup("GOAP_LOG_DIR").filter(|dir| !dir.trim().is_empty()) {
            config.log_dir = Some(PathBuf::from(dir));
        }

        config
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default()
}

fn parse<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    lookup(key)?.trim().parse().ok()
}

fn parse_bool(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<bool> {
    match lookup(key)?.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
