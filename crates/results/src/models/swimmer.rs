use super::Gender;

/// Everything known about a swimmer, keyed by name in the store.
///
/// Age, team and gender come from the swimmer's first reported result and
/// never change afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Swimmer {
    pub age: u32,
    pub team: String,
    pub gender: Gender,
    /// Events with a recorded result, in the order they were reported
    pub events: Vec<String>,
}
