//! The LED frame buffer and the output trait it is flushed through.

use crate::BLACK;
use crate::config::LED_COUNT;
use palette::Srgb;

/// Trait for abstracting the LED strip hardware.
///
/// Implement this for your strip driver (WS2812 over RMT/SPI/PIO, a simulator
/// window, ...). The engine calls [`show`](LedStrip::show) exactly once per
/// tick with the complete frame. Handle any hardware errors internally - this
/// method cannot fail.
pub trait LedStrip {
    /// Pushes all LEDs of `frame` to the strip, in order.
    fn show(&mut self, frame: &LedFrame);
}

/// One color per LED on the strip.
#[derive(Debug, Clone, PartialEq)]
pub struct LedFrame {
    leds: [Srgb<u8>; LED_COUNT],
}

impl LedFrame {
    /// Creates a frame with every LED off.
    pub const fn new() -> Self {
        Self {
            leds: [BLACK; LED_COUNT],
        }
    }

    /// Sets a single LED. Out-of-range indexes are ignored.
    #[inline]
    pub fn set(&mut self, index: usize, color: Srgb<u8>) {
        if let Some(led) = self.leds.get_mut(index) {
            *led = color;
        }
    }

    /// Sets every LED listed in `group`.
    pub fn set_group(&mut self, group: &[usize], color: Srgb<u8>) {
        for &index in group {
            self.set(index, color);
        }
    }

    /// Sets every LED to `color`.
    pub fn fill(&mut self, color: Srgb<u8>) {
        self.leds = [color; LED_COUNT];
    }

    /// Turns every LED off.
    pub fn clear(&mut self) {
        self.fill(BLACK);
    }

    /// Returns the color of one LED.
    pub fn get(&self, index: usize) -> Option<Srgb<u8>> {
        self.leds.get(index).copied()
    }

    /// Returns true if every LED is off.
    pub fn is_dark(&self) -> bool {
        self.leds.iter().all(|&led| led == BLACK)
    }

    pub fn as_slice(&self) -> &[Srgb<u8>] {
        &self.leds
    }

    pub fn iter(&self) -> impl Iterator<Item = &Srgb<u8>> {
        self.leds.iter()
    }
}

impl Default for LedFrame {
    fn default() -> Self {
        Self::new()
    }
}
