use super::SwimTime;

/// A single swimmer's time in a single event, as handed to
/// [`MeetResults::report_result`](crate::MeetResults::report_result).
///
/// The gender travels alongside the record rather than inside it, since it
/// decides which event table the record lands in.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SwimResult {
    /// Swimmer's name (also the lookup key)
    pub swimmer: String,
    pub age: u32,
    pub team: String,
    /// Event name, e.g. `50 Free`
    pub event: String,
    pub time: SwimTime,
}
impl SwimResult {
    pub fn new(
        swimmer: impl Into<String>,
        age: u32,
        team: impl Into<String>,
        event: impl Into<String>,
        time: SwimTime,
    ) -> Self {
        Self {
            swimmer: swimmer.into(),
            age,
            team: team.into(),
            event: event.into(),
            time,
        }
    }
}
