//! Shindig events directory - persistence boundary.
//!
//! The directory's record storage lives outside this workspace; this crate
//! carries the boundary only: the raw event row contract, the mapping from
//! rows into engine schedules, and the store port the service layer talks
//! through. `MemoryEventStore` backs tests and demos.

pub mod error;
pub mod map;
pub mod memory;
pub mod repository;
pub mod row;

pub use error::{StoreError, StoreResult};
pub use memory::MemoryEventStore;
pub use repository::EventStore;
pub use row::EventRow;
