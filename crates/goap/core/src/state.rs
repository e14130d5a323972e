//! Agent world state.
//!
//! A [`WorldState`] is the single mutable record the agent plans against.
//! Need levels run from 0 (satisfied) to [`AgentConfig::NEED_MAX`] (maximal
//! need). The derived reducers clamp at 0; direct setters store whatever the
//! caller passes.

use crate::config::AgentConfig;

/// The agent's needs and resource availability.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldState {
    has_food: bool,
    has_water: bool,
    under_attack: bool,
    hunger: i32,
    thirst: i32,
}

impl WorldState {
    /// Fresh state: maximal hunger and thirst, no resources, not attacked.
    pub const fn new() -> Self {
        Self {
            has_food: false,
            has_water: false,
            under_attack: false,
            hunger: AgentConfig::NEED_MAX,
            thirst: AgentConfig::NEED_MAX,
        }
    }

    /// Builder-style variant of [`set_under_attack`](Self::set_under_attack).
    #[must_use]
    pub const fn with_under_attack(mut self, under_attack: bool) -> Self {
        self.under_attack = under_attack;
        self
    }

    #[inline]
    pub const fn has_food(&self) -> bool {
        self.has_food
    }

    #[inline]
    pub const fn has_water(&self) -> bool {
        self.has_water
    }

    #[inline]
    pub const fn is_under_attack(&self) -> bool {
        self.under_attack
    }

    #[inline]
    pub const fn hunger(&self) -> i32 {
        self.hunger
    }

    #[inline]
    pub const fn thirst(&self) -> i32 {
        self.thirst
    }

    /// Returns `true` while there is any hunger left to satisfy.
    #[inline]
    pub const fn is_hungry(&self) -> bool {
        self.hunger > 0
    }

    /// Returns `true` while there is any thirst left to satisfy.
    #[inline]
    pub const fn is_thirsty(&self) -> bool {
        self.thirst > 0
    }

    pub fn set_food(&mut self, has_food: bool) {
        self.has_food = has_food;
    }

    pub fn set_water(&mut self, has_water: bool) {
        self.has_water = has_water;
    }

    pub fn set_under_attack(&mut self, under_attack: bool) {
        self.under_attack = under_attack;
    }

    /// Stores `level` as-is. Keeping it within `0..=NEED_MAX` is on the caller.
    pub fn set_hunger(&mut self, level: i32) {
        self.hunger = level;
    }

    /// Stores `level` as-is. Keeping it within `0..=NEED_MAX` is on the caller.
    pub fn set_thirst(&mut self, level: i32) {
        self.thirst = level;
    }

    /// Lowers hunger by [`AgentConfig::NEED_DECREMENT`], never below 0.
    pub fn reduce_hunger(&mut self) {
        self.hunger = Self::reduce(self.hunger);
    }

    /// Lowers thirst by [`AgentConfig::NEED_DECREMENT`], never below 0.
    pub fn reduce_thirst(&mut self) {
        self.thirst = Self::reduce(self.thirst);
    }

    #[inline]
    fn reduce(level: i32) -> i32 {
        level.saturating_sub(AgentConfig::NEED_DECREMENT).max(0)
    }
}

impl Default for WorldState {
    fn default() -> Self {
        Self::new()
    }
}
