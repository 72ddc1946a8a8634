//! Integration tests for the phase clock

use echo_lights::{PhaseSample, Ramp, RampError};

#[test]
fn ramp_hits_zero_peak_zero_then_ends() {
    for (up, down) in [(1, 1), (500, 500), (750, 750), (1500, 1500), (100, 900), (900, 100)] {
        let ramp = Ramp::new(up, down);
        let (up, down) = (up as u64, down as u64);

        assert_eq!(ramp.sample(0), PhaseSample::Level(0));
        assert_eq!(ramp.sample(up), PhaseSample::Level(255));
        assert_eq!(ramp.sample(up + down), PhaseSample::Level(0));
        assert_eq!(ramp.sample(up + down + 1), PhaseSample::Ended);
        assert_eq!(ramp.sample(u64::MAX / 1024), PhaseSample::Ended);
    }
}

#[test]
fn ramp_only_ends_right_after_the_peak() {
    let ramp = Ramp::new(2000, 0);

    assert_eq!(ramp.sample(0), PhaseSample::Level(0));
    assert_eq!(ramp.sample(2000), PhaseSample::Level(255));
    assert_eq!(ramp.sample(2001), PhaseSample::Ended);
    assert_eq!(ramp.sample(4000), PhaseSample::Ended);
}

#[test]
fn ambient_ramp_midpoint_is_half_intensity() {
    let ramp = Ramp::new(2000, 0);
    // 255 * 1000 / 2000, floored
    assert_eq!(ramp.sample(1000), PhaseSample::Level(127));
}

#[test]
fn ramp_is_monotonic_on_each_edge() {
    let ramp = Ramp::new(1500, 1500);

    let rising: Vec<u8> = (0..=1500).step_by(5).filter_map(|t| ramp.sample(t).level()).collect();
    assert!(rising.windows(2).all(|w| w[0] <= w[1]));

    let falling: Vec<u8> = (1500..=3000).step_by(5).filter_map(|t| ramp.sample(t).level()).collect();
    assert!(falling.windows(2).all(|w| w[0] >= w[1]));
}

#[test]
fn zero_ramp_up_is_rejected() {
    assert_eq!(Ramp::try_new(0, 100), Err(RampError::ZeroRampUp));
    assert_eq!(Ramp::try_new(0, 0), Err(RampError::ZeroRampUp));
    assert_eq!(Ramp::try_new(10, 0), Ok(Ramp::new(10, 0)));
}

#[test]
#[should_panic(expected = "ramp-up duration must be non-zero")]
fn zero_ramp_up_panics_at_runtime_construction() {
    let up = std::hint::black_box(0);
    let _ = Ramp::new(up, 10);
}

#[test]
fn ramp_error_display() {
    assert_eq!(RampError::ZeroRampUp.to_string(), "ramp-up duration must be non-zero");
}
