//! The ambient display shown after a completed challenge.
//!
//! First every LED fades in to its own palette color. Then the strip rotates
//! forever: LED 0 pulses one hue against white while LEDs 1-6 crossfade to
//! their neighbour's color, shifting the rainbow one position per cycle. The
//! only way out is releasing every button.

use crate::animator::Animator;
use crate::colors::{ambient_color, blend};
use crate::config::{AMBIENT_RAMP, LED_COUNT};
use crate::frame::{LedFrame, LedStrip};
use crate::input::ButtonBank;
use crate::time::{TimeInstant, TimeSource};
use crate::types::StepOutcome;
use embedded_hal::delay::DelayNs;

/// How the ambient display ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AmbientExit {
    /// Buttons were released during the fade-in.
    EntryAborted,

    /// Buttons were released during the rotation after `cycles` full cycles.
    RotationAborted { cycles: u32 },
}

/// Runs the fade-in and then the endless rotation.
pub fn run<I, T, S, B, D>(animator: &mut Animator<'_, I, T, S, B, D>) -> AmbientExit
where
    I: TimeInstant,
    T: TimeSource<I>,
    S: LedStrip,
    B: ButtonBank,
    D: DelayNs,
{
    info!("ambient: fading in");
    if animator.run_ramp(AMBIENT_RAMP, render_entry) == StepOutcome::Aborted {
        info!("ambient: released during fade-in");
        return AmbientExit::EntryAborted;
    }

    let mut offset: u32 = 0;
    loop {
        if animator.run_ramp(AMBIENT_RAMP, |frame, p| render_rotation(frame, offset, p))
            == StepOutcome::Aborted
        {
            info!("ambient: released after {} cycles", offset);
            return AmbientExit::RotationAborted { cycles: offset };
        }
        offset = offset.wrapping_add(1);
    }
}

/// Fade-in frame: LED `i` at palette color `i`, scaled by `p`.
pub fn render_entry(frame: &mut LedFrame, p: u8) {
    for i in 0..LED_COUNT {
        frame.set(i, ambient_color(i).scale(p));
    }
}

/// Rotation frame for cycle `offset` at intensity `p`.
pub fn render_rotation(frame: &mut LedFrame, offset: u32, p: u8) {
    for i in 0..LED_COUNT {
        let (from, to) = rotation_endpoints(i, offset);
        frame.set(i, blend(ambient_color(from), ambient_color(to), p));
    }
}

/// Palette indexes LED `led` crossfades between during cycle `offset`.
///
/// Indexes are unwrapped; [`ambient_color`] folds them into the palette.
pub fn rotation_endpoints(led: usize, offset: u32) -> (usize, usize) {
    let len = LED_COUNT as u32;

    if led == 0 {
        let hue = ((len - (offset / 2) % len) + 1) as usize;
        if offset % 2 == 0 { (0, hue) } else { (hue, 0) }
    } else {
        let shift = (offset % len) as usize;
        let from = (led - 1 + shift) % LED_COUNT + 1;
        let to = (led + shift) % LED_COUNT + 1;
        (from, to)
    }
}
