//! Triangular intensity envelopes driven by elapsed wall-clock time.
//!
//! A [`Ramp`] rises from 0 to 255 over its up duration, then optionally falls
//! back to 0 over its down duration. Sampling it past the end yields
//! [`PhaseSample::Ended`], which is what terminates every timed stage.
//!
//! The envelope is a pure function of elapsed milliseconds, so animations stay
//! proportional to wall-clock time regardless of how long each tick takes.

use crate::types::RampError;

/// Result of sampling a ramp at some elapsed time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PhaseSample {
    /// Current intensity, 0-255.
    Level(u8),

    /// The ramp has run its course; the owning stage must stop.
    Ended,
}

impl PhaseSample {
    /// Returns the intensity, or `None` once the ramp has ended.
    #[inline]
    pub fn level(self) -> Option<u8> {
        match self {
            PhaseSample::Level(level) => Some(level),
            PhaseSample::Ended => None,
        }
    }

    /// Returns true if this is the end-of-phase sentinel.
    #[inline]
    pub fn is_ended(self) -> bool {
        self == PhaseSample::Ended
    }
}

/// Ramp-up / ramp-down durations in milliseconds.
///
/// A zero `down_ms` describes a ramp-up only envelope that ends as soon as the
/// up duration has elapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Ramp {
    up_ms: u32,
    down_ms: u32,
}

impl Ramp {
    /// Creates a ramp.
    ///
    /// # Panics
    /// Panics if `up_ms` is zero. In a `const` context this is a compile error.
    pub const fn new(up_ms: u32, down_ms: u32) -> Self {
        assert!(up_ms > 0, "ramp-up duration must be non-zero");
        Self { up_ms, down_ms }
    }

    /// Creates a ramp, rejecting a zero ramp-up duration.
    pub fn try_new(up_ms: u32, down_ms: u32) -> Result<Self, RampError> {
        if up_ms == 0 {
            return Err(RampError::ZeroRampUp);
        }
        Ok(Self { up_ms, down_ms })
    }

    /// Ramp-up duration in milliseconds.
    pub fn up_ms(&self) -> u32 {
        self.up_ms
    }

    /// Ramp-down duration in milliseconds.
    pub fn down_ms(&self) -> u32 {
        self.down_ms
    }

    /// Total envelope length in milliseconds.
    pub fn total_ms(&self) -> u64 {
        self.up_ms as u64 + self.down_ms as u64
    }

    /// Returns true if the ramp only rises.
    pub fn is_ramp_only(&self) -> bool {
        self.down_ms == 0
    }

    /// Samples the envelope `elapsed_ms` after the ramp started.
    ///
    /// Checked in order: rising edge, falling edge, end of phase.
    pub fn sample(&self, elapsed_ms: u64) -> PhaseSample {
        let up = self.up_ms as u64;
        let down = self.down_ms as u64;

        if elapsed_ms <= up {
            // up > 0 is a construction invariant
            return PhaseSample::Level((255 * elapsed_ms / up) as u8);
        }

        if down == 0 {
            return PhaseSample::Ended;
        }

        let into_down = elapsed_ms - up;
        if into_down <= down {
            return PhaseSample::Level((255 * (down - into_down) / down) as u8);
        }

        PhaseSample::Ended
    }
}
