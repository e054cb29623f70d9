//! Shindig events directory - event date resolution engine.
//!
//! Pure, synchronous date logic for a directory of recurring dance events:
//! calendar-date utilities, ordered date sets, recurrence rules (weekly and
//! occasional), per-event schedules with cancellations and active-window
//! bounds, cross-event occurrence queries, and the archival policy.
//!
//! Nothing in this crate performs I/O. Persistence and free-text date
//! parsing are collaborators behind the `shindig-store` boundary.

pub mod dates;
pub mod error;
pub mod index;
pub mod schedule;

pub use dates::date_set::DateSet;
pub use error::{EngineError, EngineResult};
pub use index::Occurrence;
pub use schedule::EventSchedule;
pub use schedule::recurrence::RecurrenceRule;
