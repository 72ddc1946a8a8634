//! Top-level loop of the installation.
//!
//! ```text
//! IDLE ──(≥3 buttons)──> CHALLENGE ──completed──> AMBIENT ──released──┐
//!   ^                        │                                        │
//!   │                        └──aborted──> ALARM (300 flashes) ───────┤
//!   └──────────────────────────── blank ──────────────────────────────┘
//! ```

use crate::alarm;
use crate::ambient::{self, AmbientExit};
use crate::animator::Animator;
use crate::challenge::{self, ChallengeOutcome, Stage};
use crate::config::IDLE_POLL_MS;
use crate::frame::LedStrip;
use crate::input::ButtonBank;
use crate::time::{TimeInstant, TimeSource};
use embedded_hal::delay::DelayNs;

/// How one pass through the loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Verdict {
    /// The challenge was completed and the ambient display ran until released.
    Ambient(AmbientExit),

    /// The challenge was aborted during the given stage and the alarm ran.
    Alarm(Stage),
}

/// The whole installation: strip, buttons, delay and clock wired together.
pub struct Installation<'t, I, T, S, B, D>
where
    I: TimeInstant,
    T: TimeSource<I>,
    S: LedStrip,
    B: ButtonBank,
    D: DelayNs,
{
    animator: Animator<'t, I, T, S, B, D>,
}

impl<'t, I, T, S, B, D> Installation<'t, I, T, S, B, D>
where
    I: TimeInstant,
    T: TimeSource<I>,
    S: LedStrip,
    B: ButtonBank,
    D: DelayNs,
{
    pub fn new(strip: S, buttons: B, delay: D, time_source: &'t T) -> Self {
        Self {
            animator: Animator::new(strip, buttons, delay, time_source),
        }
    }

    /// Runs the installation forever.
    pub fn run(&mut self) -> ! {
        loop {
            self.cycle();
        }
    }

    /// Runs one pass: idle wait, challenge, then ambient or alarm.
    ///
    /// Returns with every LED off.
    pub fn cycle(&mut self) -> Verdict {
        self.animator.blank();
        self.wait_for_start();

        let verdict = match challenge::run(&mut self.animator) {
            ChallengeOutcome::Completed => Verdict::Ambient(ambient::run(&mut self.animator)),
            ChallengeOutcome::Aborted(stage) => {
                alarm::run(&mut self.animator);
                Verdict::Alarm(stage)
            }
        };

        self.animator.blank();
        info!("back to idle after {}", verdict);
        verdict
    }

    /// Blocks until enough buttons are pressed to start the challenge.
    pub fn wait_for_start(&mut self) {
        while !self.poll_start() {}
        info!("idle: armed");
    }

    /// One idle poll. Sleeps for the idle poll period unless armed.
    pub fn poll_start(&mut self) -> bool {
        if self.animator.gate_mut().should_start() {
            return true;
        }
        self.animator.hold(IDLE_POLL_MS);
        false
    }

    pub fn animator(&self) -> &Animator<'t, I, T, S, B, D> {
        &self.animator
    }

    pub fn animator_mut(&mut self) -> &mut Animator<'t, I, T, S, B, D> {
        &mut self.animator
    }

    /// Tears the installation down, returning the strip, the buttons and the delay.
    pub fn into_parts(self) -> (S, B, D) {
        self.animator.into_parts()
    }
}
