//! Deterministic goal-oriented action planning for a single agent.
//!
//! `goap-core` defines the planning rules (world state, actions, goals,
//! planner) and the agent loop that drives one plan-and-execute cycle per
//! tick. Everything here is pure and I/O-free; rendering of state dumps and
//! the choice of random source belong to the caller.
//!
//! # Architecture
//!
//! - [`WorldState`]: the agent's needs and resource flags
//! - [`ActionKind`]: closed set of primitive actions (precondition + effect)
//! - [`Planner`]: maps `(WorldState, Goal)` to a bounded [`Plan`]
//! - [`Agent`]: owns one state and one planner, runs [`Agent::perform_actions`]
pub mod action;
pub mod agent;
pub mod config;
pub mod error;
pub mod goal;
pub mod planner;
pub mod rng;
pub mod snapshot;
pub mod state;

pub use action::{ActionKind, ActionRule, DrinkWater, Eat, Flee, SearchFood, SearchWater};
pub use agent::{ActionOutcome, Agent, CycleReport};
pub use config::AgentConfig;
pub use error::ConfigError;
pub use goal::Goal;
pub use planner::{Plan, Planner, TablePlanner};
pub use rng::{PcgRng, RngOracle, roll_under_attack};
pub use snapshot::StateSnapshot;
pub use state::WorldState;
