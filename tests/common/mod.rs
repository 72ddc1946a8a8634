//! Shared test infrastructure for echo-lights integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use echo_lights::{
    Animator, ButtonBank, Installation, LedFrame, LedStrip, TimeDuration, TimeInstant,
    TimeSource,
};
use embedded_hal::delay::DelayNs;
use palette::Srgb;

// ============================================================================
// Mock Time Types
// ============================================================================

/// Mock duration type for testing (wraps milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestDuration(pub u64);

impl TimeDuration for TestDuration {
    const ZERO: Self = TestDuration(0);

    fn as_millis(&self) -> u64 {
        self.0
    }

    fn from_millis(millis: u64) -> Self {
        TestDuration(millis)
    }
}

/// Mock instant type for testing
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestInstant(pub u64);

impl TimeInstant for TestInstant {
    type Duration = TestDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        TestDuration(self.0 - earlier.0)
    }
}

// ============================================================================
// Mock Time Source
// ============================================================================

/// Mock time source with controllable time advancement
pub struct MockTimeSource {
    current_time: core::cell::Cell<TestInstant>,
}

impl MockTimeSource {
    pub fn new() -> Self {
        Self {
            current_time: core::cell::Cell::new(TestInstant(0)),
        }
    }

    /// Advance time by the given duration
    pub fn advance(&self, duration: TestDuration) {
        let current = self.current_time.get();
        self.current_time.set(TestInstant(current.0 + duration.0));
    }

    pub fn set_time(&self, time: TestInstant) {
        self.current_time.set(time);
    }

    pub fn now_ms(&self) -> u64 {
        self.current_time.get().0
    }
}

impl TimeSource<TestInstant> for MockTimeSource {
    fn now(&self) -> TestInstant {
        self.current_time.get()
    }
}

// ============================================================================
// Mock Delay
// ============================================================================

/// Delay that moves the mock clock forward instead of sleeping
pub struct MockDelay<'a> {
    clock: &'a MockTimeSource,
}

impl<'a> MockDelay<'a> {
    pub fn new(clock: &'a MockTimeSource) -> Self {
        Self { clock }
    }
}

impl DelayNs for MockDelay<'_> {
    fn delay_ns(&mut self, ns: u32) {
        self.clock.advance(TestDuration(ns as u64 / 1_000_000));
    }

    fn delay_us(&mut self, us: u32) {
        self.clock.advance(TestDuration(us as u64 / 1_000));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.clock.advance(TestDuration(ms as u64));
    }
}

// ============================================================================
// Mock LED Strip
// ============================================================================

/// Strip that records every shown frame with the time it was shown
pub struct RecordingStrip<'a> {
    clock: &'a MockTimeSource,
    frames: Vec<(u64, LedFrame)>,
}

impl<'a> RecordingStrip<'a> {
    pub fn new(clock: &'a MockTimeSource) -> Self {
        Self {
            clock,
            frames: Vec::new(),
        }
    }

    pub fn frames(&self) -> &[(u64, LedFrame)] {
        &self.frames
    }

    pub fn last_frame(&self) -> Option<&LedFrame> {
        self.frames.last().map(|(_, frame)| frame)
    }

    /// First frame shown at exactly `time` ms
    pub fn frame_at(&self, time: u64) -> Option<&LedFrame> {
        self.frames
            .iter()
            .find(|(shown_at, _)| *shown_at == time)
            .map(|(_, frame)| frame)
    }
}

impl LedStrip for RecordingStrip<'_> {
    fn show(&mut self, frame: &LedFrame) {
        self.frames.push((self.clock.now_ms(), frame.clone()));
    }
}

// ============================================================================
// Scripted Buttons
// ============================================================================

/// Button bank whose pressed count follows a time script.
///
/// Each entry is `(from_ms, count)`; the last entry whose `from_ms` is not in
/// the future applies. Before the first entry no button is pressed.
pub struct ScriptedButtons<'a> {
    clock: &'a MockTimeSource,
    script: Vec<(u64, u8)>,
    polls: usize,
}

impl<'a> ScriptedButtons<'a> {
    pub fn new(clock: &'a MockTimeSource, script: &[(u64, u8)]) -> Self {
        Self {
            clock,
            script: script.to_vec(),
            polls: 0,
        }
    }

    /// Buttons held from time 0 until `release_at`
    pub fn held_until(clock: &'a MockTimeSource, count: u8, release_at: u64) -> Self {
        Self::new(clock, &[(0, count), (release_at, 0)])
    }

    pub fn polls(&self) -> usize {
        self.polls
    }
}

impl ButtonBank for ScriptedButtons<'_> {
    fn pressed_count(&mut self) -> u8 {
        self.polls += 1;
        let now = self.clock.now_ms();
        self.script
            .iter()
            .rev()
            .find(|(from, _)| *from <= now)
            .map(|(_, count)| *count)
            .unwrap_or(0)
    }
}

// ============================================================================
// Assembly helpers
// ============================================================================

pub type TestAnimator<'a> =
    Animator<'a, TestInstant, MockTimeSource, RecordingStrip<'a>, ScriptedButtons<'a>, MockDelay<'a>>;

pub type TestInstallation<'a> = Installation<
    'a,
    TestInstant,
    MockTimeSource,
    RecordingStrip<'a>,
    ScriptedButtons<'a>,
    MockDelay<'a>,
>;

pub fn animator<'a>(clock: &'a MockTimeSource, buttons: ScriptedButtons<'a>) -> TestAnimator<'a> {
    Animator::new(RecordingStrip::new(clock), buttons, MockDelay::new(clock), clock)
}

pub fn installation<'a>(
    clock: &'a MockTimeSource,
    buttons: ScriptedButtons<'a>,
) -> TestInstallation<'a> {
    Installation::new(RecordingStrip::new(clock), buttons, MockDelay::new(clock), clock)
}

// ============================================================================
// Frame helpers
// ============================================================================

pub const OFF: Srgb<u8> = Srgb::new(0, 0, 0);

pub fn grey(p: u8) -> Srgb<u8> {
    Srgb::new(p, p, p)
}

/// Indexes of LEDs that are not off
pub fn lit(frame: &LedFrame) -> Vec<usize> {
    frame
        .iter()
        .enumerate()
        .filter(|(_, color)| **color != OFF)
        .map(|(i, _)| i)
        .collect()
}

/// Time a full ramp step takes under the mock delay: ticks every 5 ms through
/// `total_ms`, then one more sample to see the end of the phase
pub fn step_ms(total_ms: u64) -> u64 {
    total_ms + 5
}

/// Time the full challenge takes with buttons held throughout
pub fn challenge_ms() -> u64 {
    7 * step_ms(3000) + 3 * step_ms(2000) + 2 * step_ms(1000) + 8 * step_ms(1500)
}
