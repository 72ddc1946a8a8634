//! The failure flash shown after an aborted challenge.
//!
//! Once started the alarm always runs to the end. Buttons are not polled.

use crate::animator::Animator;
use crate::config::{ALARM_FLASHES, ALARM_HOLD_MS};
use crate::frame::LedStrip;
use crate::input::ButtonBank;
use crate::time::{TimeInstant, TimeSource};
use crate::{BLACK, RED};
use embedded_hal::delay::DelayNs;

/// Flashes the whole strip red and off [`ALARM_FLASHES`] times.
pub fn run<I, T, S, B, D>(animator: &mut Animator<'_, I, T, S, B, D>)
where
    I: TimeInstant,
    T: TimeSource<I>,
    S: LedStrip,
    B: ButtonBank,
    D: DelayNs,
{
    warn!("alarm: flashing {} times", ALARM_FLASHES);

    for _ in 0..ALARM_FLASHES {
        animator.frame_mut().fill(RED);
        animator.show();
        animator.hold(ALARM_HOLD_MS);

        animator.frame_mut().fill(BLACK);
        animator.show();
        animator.hold(ALARM_HOLD_MS);
    }

    debug!("alarm: done");
}
