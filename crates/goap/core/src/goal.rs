//! Agent goals.

/// The intent the planner is asked to satisfy for one cycle.
///
/// Chosen fresh by the [`Agent`](crate::Agent) each cycle, never persisted.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Goal {
    /// Bring hunger down, finding food first if needed.
    SatisfyHunger,
    /// Reserved; folded into `SatisfyHunger` and planned as a no-op.
    SeekFood,
    /// Bring thirst down, finding water first if needed.
    SatisfyThirst,
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::str::FromStr;

    #[test]
    fn identifiers_are_snake_case() {
        assert_eq!(Goal::SatisfyHunger.to_string(), "satisfy_hunger");
        assert_eq!(Goal::SeekFood.as_ref(), "seek_food");
        assert_eq!(Goal::from_str("Satisfy_Thirst"), Ok(Goal::SatisfyThirst));
    }
}
