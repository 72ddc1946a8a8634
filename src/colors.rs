//! Color masks and directional crossfades.
//!
//! The installation never mixes arbitrary colors. Every color is a mask with
//! each channel either fully on (1) or off (0), scaled by a ramp intensity or
//! crossfaded against another mask.
//!
//! All functions return `palette::Srgb<u8>` for direct use in an [`LedFrame`](crate::LedFrame).

use palette::Srgb;

/// Per-channel on/off color mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ColorMask {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl ColorMask {
    pub const WHITE: Self = Self::new(1, 1, 1);
    pub const BLUE: Self = Self::new(0, 0, 1);
    pub const CYAN: Self = Self::new(0, 1, 1);
    pub const GREEN: Self = Self::new(0, 1, 0);
    pub const YELLOW: Self = Self::new(1, 1, 0);
    pub const RED: Self = Self::new(1, 0, 0);
    pub const MAGENTA: Self = Self::new(1, 0, 1);

    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Scales every enabled channel to `intensity`.
    #[inline]
    pub fn scale(self, intensity: u8) -> Srgb<u8> {
        Srgb::new(
            self.red.saturating_mul(intensity),
            self.green.saturating_mul(intensity),
            self.blue.saturating_mul(intensity),
        )
    }
}

/// Masks shown by the whole-strip color cycle, in order.
pub const CHALLENGE_PALETTE: [ColorMask; 8] = [
    ColorMask::WHITE,
    ColorMask::BLUE,
    ColorMask::CYAN,
    ColorMask::GREEN,
    ColorMask::YELLOW,
    ColorMask::RED,
    ColorMask::MAGENTA,
    ColorMask::WHITE,
];

/// Ambient palette. LED `i` fades in to entry `i`; rotation indexes wrap.
pub const AMBIENT_PALETTE: [ColorMask; 7] = [
    ColorMask::WHITE,
    ColorMask::BLUE,
    ColorMask::CYAN,
    ColorMask::GREEN,
    ColorMask::YELLOW,
    ColorMask::RED,
    ColorMask::MAGENTA,
];

/// Looks up an ambient palette entry, wrapping out-of-range indexes.
#[inline]
pub fn ambient_color(index: usize) -> ColorMask {
    AMBIENT_PALETTE[index % AMBIENT_PALETTE.len()]
}

/// Crossfades one channel from `from` to `to` at intensity `p`.
///
/// Equal endpoints hold the channel fully on or off regardless of `p`.
#[inline]
pub fn blend_channel(from: u8, to: u8, p: u8) -> u8 {
    if from == to {
        to.saturating_mul(255)
    } else if to > from {
        p
    } else {
        255 - p
    }
}

/// Crossfades a whole mask, channel by channel.
#[inline]
pub fn blend(from: ColorMask, to: ColorMask, p: u8) -> Srgb<u8> {
    Srgb::new(
        blend_channel(from.red, to.red, p),
        blend_channel(from.green, to.green, p),
        blend_channel(from.blue, to.blue, p),
    )
}
