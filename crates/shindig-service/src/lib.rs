//! Shindig events directory - listing and archival services.
//!
//! Thin orchestration over the store port: loads rows, maps them into
//! engine schedules, answers "what's on" queries under the configured
//! window policy, and drives the archival action's write-back.

pub mod archive;
pub mod error;
pub mod listing;

pub use archive::ArchiveService;
pub use error::{ServiceError, ServiceResult};
pub use listing::{Listing, ListingService};
