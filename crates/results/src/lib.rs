//! In-memory bookkeeping for the results of a single swim meet.
//!
//! [`MeetResults`] ingests one [`SwimResult`] at a time and answers lookups
//! by swimmer and by event. Results are partitioned by [`Gender`] into two
//! independent event tables.

mod consts;
pub mod error;
mod models;
mod store;

pub use crate::models::{Gender, SwimResult, SwimTime, Swimmer};
pub use crate::store::MeetResults;
