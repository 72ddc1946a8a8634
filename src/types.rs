//! Core outcome and error types.

/// Result of running a timed step or mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StepOutcome {
    /// The ramp reached its end-of-phase sentinel.
    Completed,

    /// Fewer than the break threshold of buttons were held on some tick.
    Aborted,
}

impl StepOutcome {
    /// Returns true if the step ran to completion.
    #[inline]
    pub fn is_completed(self) -> bool {
        self == StepOutcome::Completed
    }
}

/// Ramp validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RampError {
    /// The ramp-up duration is zero, which would divide by zero.
    ZeroRampUp,
}

impl core::fmt::Display for RampError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            RampError::ZeroRampUp => {
                write!(f, "ramp-up duration must be non-zero")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for RampError {}
