//! Button sampling and the thresholds that gate every animation.
//!
//! The engine only ever needs to know how many buttons are held right now.
//! [`ButtonBank`] is that capability; [`PinBank`] provides it on top of
//! `embedded-hal` input pins, and [`InputGate`] classifies the count against
//! the start and break thresholds.

use crate::config::{BREAK_THRESHOLD, START_THRESHOLD};
use embedded_hal::digital::InputPin;

/// Trait for abstracting the button inputs.
pub trait ButtonBank {
    /// Returns how many buttons are pressed at this instant.
    ///
    /// Called on every animation tick, so it should be cheap. No debouncing is
    /// expected from the engine side.
    fn pressed_count(&mut self) -> u8;
}

/// A fixed bank of active-high input pins.
///
/// A pin that fails to read counts as released.
pub struct PinBank<P: InputPin, const N: usize> {
    pins: [P; N],
}

impl<P: InputPin, const N: usize> PinBank<P, N> {
    pub fn new(pins: [P; N]) -> Self {
        Self { pins }
    }

    /// Gives the pins back.
    pub fn release(self) -> [P; N] {
        self.pins
    }
}

impl<P: InputPin, const N: usize> ButtonBank for PinBank<P, N> {
    fn pressed_count(&mut self) -> u8 {
        self.pins
            .iter_mut()
            .map(|pin| matches!(pin.is_high(), Ok(true)))
            .filter(|&high| high)
            .count() as u8
    }
}

/// How a sampled button count relates to the thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GateLevel {
    /// Below the break threshold. Any running animation must stop.
    Released,

    /// Enough to keep an animation alive, not enough to start one.
    Held,

    /// Enough to leave the idle wait.
    Armed,
}

/// Classifies a button count against the start and break thresholds.
pub fn classify(count: u8) -> GateLevel {
    if count < BREAK_THRESHOLD {
        GateLevel::Released
    } else if count < START_THRESHOLD {
        GateLevel::Held
    } else {
        GateLevel::Armed
    }
}

/// Samples a [`ButtonBank`] fresh on every query.
///
/// Counts are never cached: each call reads the bank again.
pub struct InputGate<B: ButtonBank> {
    buttons: B,
}

impl<B: ButtonBank> InputGate<B> {
    pub fn new(buttons: B) -> Self {
        Self { buttons }
    }

    /// Reads the current pressed count.
    #[inline]
    pub fn sample(&mut self) -> u8 {
        self.buttons.pressed_count()
    }

    /// Reads the bank and classifies the count.
    pub fn level(&mut self) -> GateLevel {
        classify(self.sample())
    }

    /// True if enough buttons are held to start the challenge.
    pub fn should_start(&mut self) -> bool {
        self.level() == GateLevel::Armed
    }

    /// True if too few buttons are held to keep an animation alive.
    pub fn should_break(&mut self) -> bool {
        self.level() == GateLevel::Released
    }

    pub fn buttons(&self) -> &B {
        &self.buttons
    }

    pub fn buttons_mut(&mut self) -> &mut B {
        &mut self.buttons
    }

    pub fn into_buttons(self) -> B {
        self.buttons
    }
}
