//! Compile-time configuration of the installation.
//!
//! Every timing constant, threshold and size the engine uses lives here.
//! There is no runtime configuration: re-flash to change any of these.

use crate::phase::Ramp;

// ── Hardware layout ─────────────────────────────────────────────────

/// Number of LEDs on the strip.
pub const LED_COUNT: usize = 7;

/// Number of push buttons wired to the input bank.
pub const BUTTON_COUNT: usize = 6;

// ── Input thresholds ────────────────────────────────────────────────

/// Minimum simultaneous presses needed to leave the idle wait.
pub const START_THRESHOLD: u8 = 3;

/// Minimum presses needed to keep a running animation alive.
pub const BREAK_THRESHOLD: u8 = 1;

// ── Cadence ─────────────────────────────────────────────────────────

/// Sleep between two animation ticks.
pub const TICK_MS: u32 = 5;

/// Sleep between two polls of the idle wait.
pub const IDLE_POLL_MS: u32 = 100;

// ── Challenge ramps ─────────────────────────────────────────────────

/// Single LED echo: 3 s per LED.
pub const ECHO_SINGLES_RAMP: Ramp = Ramp::new(1500, 1500);

/// Triplet echo: 2 s per triplet.
pub const ECHO_TRIPLETS_RAMP: Ramp = Ramp::new(1000, 1000);

/// Quadruplet echo: 1 s per quadruplet.
pub const ECHO_QUADS_RAMP: Ramp = Ramp::new(500, 500);

/// Whole-strip color cycle: 1.5 s per color.
pub const COLOR_CYCLE_RAMP: Ramp = Ramp::new(750, 750);

// ── Ambient ─────────────────────────────────────────────────────────

/// Ramp-only fade used by the ambient entry and every rotation cycle.
pub const AMBIENT_RAMP: Ramp = Ramp::new(2000, 0);

// ── Alarm ───────────────────────────────────────────────────────────

/// Number of red on/off flashes.
pub const ALARM_FLASHES: u32 = 300;

/// Hold time of each half of a flash.
pub const ALARM_HOLD_MS: u32 = 100;
