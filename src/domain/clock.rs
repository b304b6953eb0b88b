//! Clock abstraction
//!
//! Build manifests and package names are stamped with the current local
//! time. Tests substitute a fixed clock to get deterministic names.

use chrono::{DateTime, Local};

/// Provides the current local time
pub trait Clock {
    fn now(&self) -> DateTime<Local>;
}

/// Wall-clock time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Always returns the same instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Local>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}
