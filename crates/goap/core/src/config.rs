use crate::error::ConfigError;

/// Planning constants and tunable parameters for agent construction.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentConfig {
    /// Odds of starting under attack, expressed as "one in N".
    pub attack_one_in: u32,
    /// Seed fed to the [`RngOracle`](crate::RngOracle) for the initial roll.
    pub seed: u64,
}

impl AgentConfig {
    // ===== compile-time constants =====
    /// Maximal need level; a fresh agent starts fully hungry and thirsty.
    pub const NEED_MAX: i32 = 100;
    /// Amount removed from a need by eating or drinking.
    pub const NEED_DECREMENT: i32 = 50;
    /// Longest plan the decision table can produce (find, then consume).
    pub const MAX_PLAN_LEN: usize = 2;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_ATTACK_ONE_IN: u32 = 5;

    pub fn new(seed: u64) -> Self {
        Self {
            attack_one_in: Self::DEFAULT_ATTACK_ONE_IN,
            seed,
        }
    }

    pub fn with_attack_one_in(mut self, attack_one_in: u32) -> Self {
        self.attack_one_in = attack_one_in;
        self
    }

    /// Rejects configurations the attack roll cannot honor.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.attack_one_in == 0 {
            return Err(ConfigError::ZeroAttackOdds);
        }
        Ok(())
    }
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self::new(0)
    }
}
