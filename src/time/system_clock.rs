use chrono::{DateTime, Utc};

use crate::time::clock::Clock;

/// A [`Clock`] implementation backed by the system clock.
///
/// # Overview
/// `SystemClock` provides the current UTC instant based on the operating
/// system's time source.
///
/// # Responsibility
/// - Selecting the clock implementation is the responsibility of the
///   **composition root** (e.g. `main.rs`).
/// - Application and domain logic should treat `Clock` as a trusted source.
#[derive(Default)]
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
