#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`Ramp`**: Triangular intensity envelope sampled from elapsed milliseconds
//! - **`ColorMask`**: On/off color mask, scaled by intensity or crossfaded with `blend`
//! - **`LedFrame`**: The 7 LED colors written every tick
//! - **`LedStrip`**: Trait to implement for your LED strip driver
//! - **`ButtonBank`**: Trait to implement for your button inputs (or use `PinBank`)
//! - **`TimeSource`**: Trait to implement for your timing system
//! - **`Animator`**: Runs ramps tick by tick, polling the buttons before every frame
//! - **`Installation`**: The top-level idle / challenge / ambient / alarm loop
//!
//! Colors are `Srgb<u8>`. Sleeps go through `embedded_hal::delay::DelayNs`.

#[macro_use]
mod fmt;

pub mod time;
pub mod config;
pub mod types;
pub mod phase;
pub mod colors;
pub mod frame;
pub mod input;
pub mod animator;
pub mod challenge;
pub mod ambient;
pub mod alarm;
pub mod installation;

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

pub use ambient::AmbientExit;
pub use animator::Animator;
pub use challenge::{ChallengeOutcome, Stage};
pub use colors::{ColorMask, blend, blend_channel};
pub use frame::{LedFrame, LedStrip};
pub use input::{ButtonBank, GateLevel, InputGate, PinBank};
pub use installation::{Installation, Verdict};
pub use phase::{PhaseSample, Ramp};
pub use time::{TimeDuration, TimeInstant, TimeSource};
pub use types::{RampError, StepOutcome};

#[cfg(feature = "std")]
pub use time::StdTimeSource;

pub const BLACK: Srgb<u8> = Srgb::new(0, 0, 0);
pub const RED: Srgb<u8> = Srgb::new(255, 0, 0);
