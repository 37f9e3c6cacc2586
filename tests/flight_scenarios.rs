//=========================================================================
// Flight & Walking Scenarios
//=========================================================================
//
// End-to-end properties of the motion updater, driven through the public
// API only. Randomized sweeps use a seeded `SmallRng` so failures replay.
//
//=========================================================================

use glam::Vec3;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use void_runner::core::sim::ViewOrientation;
use void_runner::prelude::*;

//=== Helpers =============================================================

const EPS: f32 = 1e-3;

fn held(controls: &[Control]) -> ControlState {
    let mut state = ControlState::new();
    for control in controls {
        state.press(*control);
    }
    state
}

fn random_controls(rng: &mut SmallRng) -> ControlState {
    let mut state = ControlState::new();
    for control in Control::ALL.iter().filter(|c| c.is_held()) {
        if rng.gen_bool(0.5) {
            state.press(*control);
        }
    }
    state
}

fn random_view(rng: &mut SmallRng) -> ViewOrientation {
    ViewOrientation::new(
        rng.gen_range(-std::f32::consts::PI..std::f32::consts::PI),
        rng.gen_range(-1.5..1.5),
    )
}

//=========================================================================
// Fixed Scenarios
//=========================================================================

#[test]
fn five_seconds_of_forward_thrust() {
    let mut updater = MotionUpdater::default();
    let forward = held(&[Control::Forward]);

    for _ in 0..5 {
        updater.update(&forward, 1.0, &ViewOrientation::default());
    }

    let mut expected = 0.0_f32;
    for _ in 0..5 {
        expected = (expected - 20.0).max(-100.0) * 0.995;
    }

    let z = updater.flight_velocity().z;
    assert!((z - expected).abs() < EPS, "z = {}", z);
    assert!((z + 98.51).abs() < 0.01, "z = {}", z);
}

#[test]
fn walking_decays_with_zero_delta() {
    let mut updater = MotionUpdater::default()
        .with_mode(Mode::Walking)
        .with_walking_velocity(Vec3::new(3.0, 0.0, 2.0));

    updater.update(&ControlState::new(), 0.0, &ViewOrientation::default());

    let v = updater.walking_velocity();
    assert!((v - Vec3::new(2.7, 0.0, 1.8)).length() < 1e-5, "v = {:?}", v);
}

#[test]
fn full_reverse_settles_below_limit() {
    let mut updater = MotionUpdater::default();
    let back = held(&[Control::Back]);

    for _ in 0..200 {
        updater.update(&back, 1.0, &ViewOrientation::default());
    }

    let z = updater.flight_velocity().z;
    assert!((z - 49.75).abs() < EPS, "z = {}", z);
    assert_eq!(updater.telemetry().throttle, 0.0);
}

#[test]
fn double_toggle_is_identity() {
    let mut rng = SmallRng::seed_from_u64(7);
    let mut updater = MotionUpdater::default();

    for _ in 0..20 {
        let controls = random_controls(&mut rng);
        updater.update(&controls, 0.05, &ViewOrientation::default());
    }

    let mode = updater.mode();
    let walking = updater.walking_velocity();
    let flight = updater.flight_velocity();

    updater.toggle_mode();
    updater.toggle_mode();

    assert_eq!(updater.mode(), mode);
    assert_eq!(updater.walking_velocity(), walking);
    assert_eq!(updater.flight_velocity(), flight);
}

//=========================================================================
// Randomized Sweeps
//=========================================================================

#[test]
fn flight_velocity_stays_in_bounds() {
    let mut rng = SmallRng::seed_from_u64(0x5EED);
    let mut updater = MotionUpdater::default();

    for _ in 0..5_000 {
        let controls = random_controls(&mut rng);
        let dt = rng.gen_range(0.0..3.0);
        updater.update(&controls, dt, &random_view(&mut rng));

        let v = updater.flight_velocity();
        assert!((-100.0..=50.0).contains(&v.z), "z = {}", v.z);
        assert!((-30.0..=30.0).contains(&v.x), "x = {}", v.x);
        assert!((-30.0..=30.0).contains(&v.y), "y = {}", v.y);
    }
}

#[test]
fn walking_stays_inside_the_deck() {
    let mut rng = SmallRng::seed_from_u64(42);
    let mut updater = MotionUpdater::default().with_mode(Mode::Walking);

    for _ in 0..5_000 {
        let controls = random_controls(&mut rng);
        let dt = rng.gen_range(0.0..1.0);
        updater.update(&controls, dt, &random_view(&mut rng));

        let p = updater.camera_position();
        assert!((-5.0..=5.0).contains(&p.x), "x = {}", p.x);
        assert!((-8.0..=8.0).contains(&p.z), "z = {}", p.z);
        assert_eq!(p.y, 0.0);
    }
}

#[test]
fn fuel_only_goes_down() {
    let mut rng = SmallRng::seed_from_u64(1234);
    let mut updater = MotionUpdater::default();
    let mut fuel = updater.telemetry().fuel;

    for _ in 0..5_000 {
        let controls = random_controls(&mut rng);
        updater.update(&controls, rng.gen_range(0.0..2.0), &ViewOrientation::default());

        let now = updater.telemetry().fuel;
        assert!(now <= fuel, "fuel rose from {} to {}", fuel, now);
        assert!(now >= 0.0);
        fuel = now;
    }
}

#[test]
fn throttle_tracks_forward_velocity_only() {
    let mut rng = SmallRng::seed_from_u64(99);
    let mut updater = MotionUpdater::default();

    for _ in 0..2_000 {
        let controls = random_controls(&mut rng);
        updater.update(&controls, rng.gen_range(0.0..1.0), &ViewOrientation::default());

        let z = updater.flight_velocity().z;
        let throttle = updater.telemetry().throttle;
        if z >= 0.0 {
            assert_eq!(throttle, 0.0, "z = {}", z);
        } else {
            assert!((throttle - (-z).min(100.0)).abs() < EPS);
        }
    }
}

#[test]
fn degenerate_deltas_keep_state_finite() {
    let mut updater = MotionUpdater::default();
    let controls = held(&[Control::Forward, Control::StrafeRight, Control::Ascend]);

    for dt in [f32::NAN, f32::INFINITY, f32::NEG_INFINITY, -1.0, 0.0] {
        updater.update(&controls, dt, &ViewOrientation::default());
    }

    assert_eq!(updater.flight_velocity(), Vec3::ZERO);
    assert!(updater.ship_position().is_finite());
    assert!(updater.telemetry().fuel.is_finite());
}

#[test]
fn extreme_deltas_stay_finite_and_bounded() {
    let both = held(&[Control::Forward, Control::Back]);
    let forward = held(&[Control::Forward]);

    let mut walking = MotionUpdater::default().with_mode(Mode::Walking);
    walking.update(&both, f32::MAX, &ViewOrientation::default());
    walking.update(&forward, 1e38, &ViewOrientation::default());

    assert!(walking.walking_velocity().is_finite());
    let p = walking.camera_position();
    assert!(p.is_finite());
    assert_eq!(p.x, 0.0);
    assert!((-8.0..=8.0).contains(&p.z));

    let mut flight = MotionUpdater::default();
    for _ in 0..100 {
        flight.update(&forward, 1e38, &ViewOrientation::default());
    }
    assert!(flight.ship_position().is_finite());
    assert!(flight.starfield_offset().is_finite());
    assert!(flight.flight_velocity().z >= -100.0);
}
