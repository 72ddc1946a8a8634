//! Time abstraction traits for platform-agnostic timing.

/// Trait for abstracting time sources.
pub trait TimeSource<I: TimeInstant> {
    /// Returns the current time instant.
    fn now(&self) -> I;
}

/// Trait abstraction for duration types.
pub trait TimeDuration: Copy + PartialEq {
    /// Zero duration constant.
    const ZERO: Self;

    /// Converts duration to milliseconds.
    fn as_millis(&self) -> u64;

    /// Creates duration from milliseconds.
    fn from_millis(millis: u64) -> Self;
}

/// Trait abstraction for instant types.
pub trait TimeInstant: Copy {
    /// Duration type for this instant.
    type Duration: TimeDuration;

    /// Calculates duration since an earlier instant.
    ///
    /// Implementations backed by wrapping hardware counters should use
    /// wrapping subtraction so a stage spanning the wrap point still sees a
    /// small elapsed time.
    fn duration_since(&self, earlier: Self) -> Self::Duration;
}

#[cfg(feature = "std")]
mod std_impls {
    use super::{TimeDuration, TimeInstant, TimeSource};
    use std::time::{Duration, Instant};

    impl TimeDuration for Duration {
        const ZERO: Self = Duration::ZERO;

        fn as_millis(&self) -> u64 {
            Duration::as_millis(self) as u64
        }

        fn from_millis(millis: u64) -> Self {
            Duration::from_millis(millis)
        }
    }

    impl TimeInstant for Instant {
        type Duration = Duration;

        fn duration_since(&self, earlier: Self) -> Self::Duration {
            self.saturating_duration_since(earlier)
        }
    }

    /// Host time source backed by [`std::time::Instant`].
    ///
    /// Useful for running the engine in a desktop simulator.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct StdTimeSource;

    impl StdTimeSource {
        pub fn new() -> Self {
            Self
        }
    }

    impl TimeSource<Instant> for StdTimeSource {
        fn now(&self) -> Instant {
            Instant::now()
        }
    }
}

#[cfg(feature = "std")]
pub use std_impls::StdTimeSource;
