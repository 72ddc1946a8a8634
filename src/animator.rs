//! Timed-step runner shared by every animation.
//!
//! Provides [`Animator`], which owns the frame buffer, the LED strip, the input
//! gate and the delay provider, and borrows the time source. Every animated
//! stage is expressed as one or more calls to [`Animator::run_ramp`] with a
//! per-tick render closure; the runner handles timing, abort polling and
//! flushing the frame at a single point per tick.

use crate::config::TICK_MS;
use crate::frame::{LedFrame, LedStrip};
use crate::input::{ButtonBank, InputGate};
use crate::phase::{PhaseSample, Ramp};
use crate::time::{TimeDuration, TimeInstant, TimeSource};
use crate::types::StepOutcome;
use embedded_hal::delay::DelayNs;

/// Drives ramps against a clock, renders into an owned frame and polls the
/// input gate on every tick.
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `I` - Time instant type
/// * `T` - Time source implementation type
/// * `S` - LED strip implementation type
/// * `B` - Button bank implementation type
/// * `D` - Delay provider
pub struct Animator<'t, I, T, S, B, D>
where
    I: TimeInstant,
    T: TimeSource<I>,
    S: LedStrip,
    B: ButtonBank,
    D: DelayNs,
{
    time_source: &'t T,
    strip: S,
    gate: InputGate<B>,
    delay: D,
    frame: LedFrame,
    _instant: core::marker::PhantomData<I>,
}

impl<'t, I, T, S, B, D> Animator<'t, I, T, S, B, D>
where
    I: TimeInstant,
    T: TimeSource<I>,
    S: LedStrip,
    B: ButtonBank,
    D: DelayNs,
{
    /// Creates an animator with a dark frame. Nothing is shown yet.
    pub fn new(strip: S, buttons: B, delay: D, time_source: &'t T) -> Self {
        Self {
            time_source,
            strip,
            gate: InputGate::new(buttons),
            delay,
            frame: LedFrame::new(),
            _instant: core::marker::PhantomData,
        }
    }

    /// Runs `ramp` from now until its end-of-phase sentinel.
    ///
    /// Each tick samples the ramp, stops on the sentinel, polls the gate, calls
    /// `render` with the frame and the current intensity, shows the frame and
    /// sleeps for one tick. Returns [`StepOutcome::Aborted`] as soon as a poll
    /// finds fewer buttons than the break threshold; the frame is left as it
    /// was on the last rendered tick.
    pub fn run_ramp<F>(&mut self, ramp: Ramp, mut render: F) -> StepOutcome
    where
        F: FnMut(&mut LedFrame, u8),
    {
        let start = self.time_source.now();

        loop {
            let elapsed = self.time_source.now().duration_since(start);
            let p = match ramp.sample(elapsed.as_millis()) {
                PhaseSample::Level(p) => p,
                PhaseSample::Ended => return StepOutcome::Completed,
            };

            if self.gate.should_break() {
                return StepOutcome::Aborted;
            }

            render(&mut self.frame, p);
            self.strip.show(&self.frame);
            self.delay.delay_ms(TICK_MS);
        }
    }

    /// Shows the current frame without touching the clock or the inputs.
    pub fn show(&mut self) {
        self.strip.show(&self.frame);
    }

    /// Turns every LED off and shows the result.
    pub fn blank(&mut self) {
        self.frame.clear();
        self.show();
    }

    /// Blocks for `ms` milliseconds.
    pub fn hold(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }

    pub fn frame(&self) -> &LedFrame {
        &self.frame
    }

    pub fn frame_mut(&mut self) -> &mut LedFrame {
        &mut self.frame
    }

    pub fn gate_mut(&mut self) -> &mut InputGate<B> {
        &mut self.gate
    }

    pub fn strip(&self) -> &S {
        &self.strip
    }

    pub fn strip_mut(&mut self) -> &mut S {
        &mut self.strip
    }

    /// Tears the animator down, returning the strip, the buttons and the delay.
    pub fn into_parts(self) -> (S, B, D) {
        let Self {
            strip, gate, delay, ..
        } = self;
        (strip, gate.into_buttons(), delay)
    }
}
