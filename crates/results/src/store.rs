//! The result store.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use exn::OptionExt;
use tracing::instrument;

use crate::error::{ErrorKind, Result};
use crate::models::{Gender, SwimResult, SwimTime, Swimmer};

/// Event name -> swimmer name -> recorded time.
type EventTable = HashMap<String, HashMap<String, SwimTime>>;

/// Stores and retrieves the results of one meet.
///
/// Swimmers are identified by name alone: two swimmers sharing a name are
/// indistinguishable, and the second one to be reported is treated as the
/// first (and rejected if reported under the other gender).
///
/// The store only ever grows. A (swimmer, event) pair can be reported once;
/// reporting it again is an error and leaves the original time in place.
///
/// # Examples
///
/// ```rust
/// use swimr_results::{Gender, MeetResults, SwimResult};
/// let mut meet = MeetResults::new();
/// let time = "30.2".parse().unwrap();
/// meet.report_result(Gender::Women, SwimResult::new("Alice", 14, "Sharks", "50 Free", time)).unwrap();
/// assert_eq!(meet.get_events("Alice").unwrap(), ["50 Free"]);
/// assert_eq!(meet.get_result("Alice", "50 Free").unwrap(), time);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MeetResults {
    men: EventTable,
    women: EventTable,
    swimmers: HashMap<String, Swimmer>,
}
impl MeetResults {
    pub fn new() -> Self {
        Self::default()
    }

    fn table(&self, gender: Gender) -> &EventTable {
        match gender {
            Gender::Men => &self.men,
            Gender::Women => &self.women,
        }
    }

    fn table_mut(&mut self, gender: Gender) -> &mut EventTable {
        match gender {
            Gender::Men => &mut self.men,
            Gender::Women => &mut self.women,
        }
    }

    /// Records a swimmer's time in an event.
    ///
    /// The first result reported for a swimmer creates their profile (age,
    /// team and gender are taken from it); later results only add the event
    /// to the profile.
    ///
    /// # Errors
    ///
    /// - [`DuplicateResult`](ErrorKind::DuplicateResult) if the swimmer
    ///   already has a time in the event.
    /// - [`GenderMismatch`](ErrorKind::GenderMismatch) if the swimmer was
    ///   first reported under the other gender.
    ///
    /// In both cases the store is left untouched.
    #[instrument(level = "debug", skip(self, result), fields(swimmer = %result.swimmer, event = %result.event))]
    pub fn report_result(&mut self, gender: Gender, result: SwimResult) -> Result<()> {
        let SwimResult {
            swimmer,
            age,
            team,
            event,
            time,
        } = result;
        if let Some(profile) = self.swimmers.get(&swimmer)
            && profile.gender != gender
        {
            exn::bail!(ErrorKind::GenderMismatch {
                swimmer,
                recorded: profile.gender.to_string(),
                reported: gender.to_string(),
            });
        }
        // The event table is authoritative for duplicates, and is written
        // before the swimmer table so a rejected result changes nothing.
        match self.table_mut(gender).entry(event.clone()).or_default().entry(swimmer.clone()) {
            Entry::Occupied(_) => exn::bail!(ErrorKind::DuplicateResult { swimmer, event }),
            Entry::Vacant(entry) => {
                entry.insert(time);
            },
        }
        match self.swimmers.entry(swimmer) {
            Entry::Occupied(mut entry) => entry.get_mut().events.push(event),
            Entry::Vacant(entry) => {
                tracing::debug!(%gender, age, team = %team, "new swimmer");
                entry.insert(Swimmer {
                    age,
                    team,
                    gender,
                    events: vec![event],
                });
            },
        }
        Ok(())
    }

    /// Returns the events a swimmer has results for, in the order they were reported.
    #[instrument(level = "trace", skip(self))]
    pub fn get_events(&self, swimmer: &str) -> Result<&[String]> {
        Ok(self.swimmer(swimmer)?.events.as_slice())
    }

    /// Returns a swimmer's recorded time in an event.
    ///
    /// # Errors
    ///
    /// Checked in order:
    /// - [`UnknownSwimmer`](ErrorKind::UnknownSwimmer)
    /// - [`UnknownEvent`](ErrorKind::UnknownEvent), looked up in the
    ///   swimmer's own gender table
    /// - [`SwimmerNotInEvent`](ErrorKind::SwimmerNotInEvent)
    #[instrument(level = "trace", skip(self))]
    pub fn get_result(&self, swimmer: &str, event: &str) -> Result<SwimTime> {
        let profile = self.swimmer(swimmer)?;
        let times = self
            .table(profile.gender)
            .get(event)
            .ok_or_raise(|| ErrorKind::UnknownEvent(event.to_string()))?;
        times.get(swimmer).copied().ok_or_raise(|| ErrorKind::SwimmerNotInEvent {
            swimmer: swimmer.to_string(),
            event: event.to_string(),
        })
    }

    /// Returns a swimmer's profile.
    pub fn swimmer(&self, name: &str) -> Result<&Swimmer> {
        self.swimmers.get(name).ok_or_raise(|| ErrorKind::UnknownSwimmer(name.to_string()))
    }

    /// Names of the events with at least one result for `gender`, in no particular order.
    pub fn events(&self, gender: Gender) -> impl Iterator<Item = &str> {
        self.table(gender).keys().map(String::as_str)
    }

    /// Number of distinct swimmers.
    pub fn len(&self) -> usize {
        self.swimmers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.swimmers.is_empty()
    }
}
