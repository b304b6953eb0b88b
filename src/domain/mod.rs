//! Domain models for project-kit
//!
//! Layout constants, snapshots, manifests and package naming. Nothing in
//! here touches the filesystem.

mod clock;
pub mod layout;
mod manifest;
pub mod package;
mod snapshot;

pub use clock::{Clock, FixedClock, SystemClock};
pub use layout::CanonicalDir;
pub use manifest::BuildInfo;
pub use snapshot::{DirListing, Snapshot};
