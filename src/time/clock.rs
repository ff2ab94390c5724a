use chrono::{DateTime, Utc};

/// A port that provides the **current instant** for the application.
///
/// # Purpose
/// This trait abstracts access to "now" so that:
///
/// - Application and domain logic do **not** depend on system time
/// - Implementations can be swapped (system clock, fixed clock, mock, etc.)
/// - Tests can be deterministic and time-independent
///
/// # Design Notes
/// - Token issuance and validation take their reference instant from this
///   port, never from `Utc::now()` directly.
/// - This trait represents an **external capability**, similar to a
///   Repository or Mailer.
///
/// # Typical Implementations
/// - `SystemClock`: Uses the OS / runtime clock
/// - `FixedClock`: Returns a constant instant (for testing)
pub trait Clock: Send + Sync {
    /// Returns the current instant as a [`DateTime<Utc>`].
    fn now(&self) -> DateTime<Utc>;
}

/// A [`Clock`] that always returns a fixed instant.
///
/// Intended for tests and for replaying validation decisions at a known
/// point in time.
///
/// # Example
/// ```
/// use chrono::{TimeZone, Utc};
/// use ludoteca::time::clock::{Clock, FixedClock};
///
/// let instant = Utc.with_ymd_and_hms(2024, 7, 9, 12, 0, 0).unwrap();
/// let clock = FixedClock::new(instant);
/// assert_eq!(clock.now(), instant);
/// ```
pub struct FixedClock {
    instant: DateTime<Utc>,
}

impl FixedClock {
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self { instant }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.instant
    }
}
