//! The four-stage echo challenge.
//!
//! Each [`Stage`] is an ordered list of steps. A step lights a pattern with the
//! stage's [`Ramp`] until the ramp ends, then the next step starts with a fresh
//! ramp. Releasing every button on any tick aborts the whole challenge and
//! skips the remaining stages.

use crate::BLACK;
use crate::animator::Animator;
use crate::colors::{CHALLENGE_PALETTE, ColorMask};
use crate::config::{
    COLOR_CYCLE_RAMP, ECHO_QUADS_RAMP, ECHO_SINGLES_RAMP, ECHO_TRIPLETS_RAMP, LED_COUNT,
};
use crate::frame::LedStrip;
use crate::input::ButtonBank;
use crate::phase::Ramp;
use crate::time::{TimeInstant, TimeSource};
use crate::types::StepOutcome;
use embedded_hal::delay::DelayNs;
use heapless::Vec;

/// Most steps any stage has (the color cycle).
pub const MAX_STEPS: usize = 8;

/// LED indexes lit together during one step.
pub type LedGroup = Vec<usize, LED_COUNT>;

/// One stage of the challenge, in running order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Stage {
    /// Every LED on its own, one after the other.
    EchoSingles,

    /// LED 0 with LEDs `i+1` and `i+4`, for `i` in 0..3.
    EchoTriplets,

    /// LED 0 with LEDs `i+1`, `i+3` and `i+5`, for `i` in 0..2.
    EchoQuads,

    /// The whole strip through the challenge palette.
    ColorCycle,
}

/// What a single step lights.
#[derive(Debug, Clone, PartialEq)]
pub enum StepPattern {
    /// A group of LEDs in greyscale. The group goes dark after the step.
    Group(LedGroup),

    /// Every LED in one masked color.
    Fill(ColorMask),
}

impl Stage {
    pub const ALL: [Stage; 4] = [
        Stage::EchoSingles,
        Stage::EchoTriplets,
        Stage::EchoQuads,
        Stage::ColorCycle,
    ];

    /// Envelope used for every step of this stage.
    pub fn ramp(self) -> Ramp {
        match self {
            Stage::EchoSingles => ECHO_SINGLES_RAMP,
            Stage::EchoTriplets => ECHO_TRIPLETS_RAMP,
            Stage::EchoQuads => ECHO_QUADS_RAMP,
            Stage::ColorCycle => COLOR_CYCLE_RAMP,
        }
    }

    /// Steps of this stage, in order.
    pub fn steps(self) -> Vec<StepPattern, MAX_STEPS> {
        match self {
            Stage::EchoSingles => (0..LED_COUNT)
                .map(|i| StepPattern::Group(group(&[i])))
                .collect(),
            Stage::EchoTriplets => (0..3)
                .map(|i| StepPattern::Group(group(&[0, i + 1, i + 4])))
                .collect(),
            Stage::EchoQuads => (0..2)
                .map(|i| StepPattern::Group(group(&[0, i + 1, i + 3, i + 5])))
                .collect(),
            Stage::ColorCycle => CHALLENGE_PALETTE
                .iter()
                .map(|&mask| StepPattern::Fill(mask))
                .collect(),
        }
    }
}

fn group(leds: &[usize]) -> LedGroup {
    leds.iter().copied().collect()
}

/// Result of running the whole challenge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ChallengeOutcome {
    /// All four stages ran to completion.
    Completed,

    /// The named stage was aborted; the stages after it never ran.
    Aborted(Stage),
}

impl ChallengeOutcome {
    pub fn is_completed(self) -> bool {
        self == ChallengeOutcome::Completed
    }
}

/// Runs every stage in order, stopping at the first abort.
pub fn run<I, T, S, B, D>(animator: &mut Animator<'_, I, T, S, B, D>) -> ChallengeOutcome
where
    I: TimeInstant,
    T: TimeSource<I>,
    S: LedStrip,
    B: ButtonBank,
    D: DelayNs,
{
    for stage in Stage::ALL {
        debug!("challenge: entering {}", stage);
        if run_stage(animator, stage) == StepOutcome::Aborted {
            warn!("challenge: aborted during {}", stage);
            return ChallengeOutcome::Aborted(stage);
        }
    }

    info!("challenge: completed");
    ChallengeOutcome::Completed
}

/// Runs the steps of a single stage.
///
/// Ends with the frame flushed; after the color cycle every LED is off.
pub fn run_stage<I, T, S, B, D>(
    animator: &mut Animator<'_, I, T, S, B, D>,
    stage: Stage,
) -> StepOutcome
where
    I: TimeInstant,
    T: TimeSource<I>,
    S: LedStrip,
    B: ButtonBank,
    D: DelayNs,
{
    let ramp = stage.ramp();

    for pattern in stage.steps() {
        let outcome = match &pattern {
            StepPattern::Group(leds) => animator.run_ramp(ramp, |frame, p| {
                frame.set_group(leds, ColorMask::WHITE.scale(p))
            }),
            StepPattern::Fill(mask) => {
                animator.run_ramp(ramp, |frame, p| frame.fill(mask.scale(p)))
            }
        };

        if outcome == StepOutcome::Aborted {
            return StepOutcome::Aborted;
        }

        if let StepPattern::Group(leds) = &pattern {
            animator.frame_mut().set_group(leds, BLACK);
        }
    }

    if stage == Stage::ColorCycle {
        animator.frame_mut().clear();
    }
    animator.show();

    StepOutcome::Completed
}
