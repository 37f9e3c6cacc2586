//=========================================================================
// Ship Telemetry
//=========================================================================

use glam::Vec3;

use super::{config::TelemetryConfig, view::Attitude};

/// Derived readouts for the HUD.
///
/// `shields` and `hull` are fixed at their configured values. `fuel` only
/// ever goes down, and never below zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShipTelemetry {
    /// Display speed, |z-velocity| scaled.
    pub speed: f32,

    /// Forward throttle, 0–100. Reverse, strafe and vertical motion
    /// read as zero.
    pub throttle: f32,

    pub shields: f32,
    pub hull: f32,
    pub fuel: f32,

    /// Degrees.
    pub pitch: f32,
    /// Degrees.
    pub yaw: f32,
    /// Degrees.
    pub roll: f32,
}

impl ShipTelemetry {
    /// Launch readings: at rest, level, full shields and hull.
    pub fn new(config: &TelemetryConfig) -> Self {
        Self {
            speed: 0.0,
            throttle: 0.0,
            shields: config.shields,
            hull: config.hull,
            fuel: config.initial_fuel,
            pitch: 0.0,
            yaw: 0.0,
            roll: 0.0,
        }
    }

    /// Recomputes the readouts from the ship velocity and camera attitude,
    /// burning fuel for one frame.
    pub fn refresh(&mut self, velocity: Vec3, attitude: Attitude, config: &TelemetryConfig) {
        let forward_speed = velocity.z.abs();

        self.speed = forward_speed * config.speed_scale;
        self.throttle = (-velocity.z / config.full_throttle_speed).clamp(0.0, 1.0) * 100.0;

        self.pitch = attitude.pitch * config.degrees_per_radian;
        self.yaw = attitude.yaw * config.degrees_per_radian;
        self.roll = attitude.roll * config.degrees_per_radian;

        self.fuel = (self.fuel - forward_speed * config.fuel_burn_rate).max(0.0);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    fn refreshed(velocity: Vec3) -> ShipTelemetry {
        let config = TelemetryConfig::default();
        let mut telemetry = ShipTelemetry::new(&config);
        telemetry.refresh(velocity, Attitude::default(), &config);
        telemetry
    }

    #[test]
    fn launch_readings() {
        let telemetry = ShipTelemetry::new(&TelemetryConfig::default());
        assert_eq!(telemetry.fuel, 87.3);
        assert_eq!(telemetry.shields, 100.0);
        assert_eq!(telemetry.hull, 100.0);
        assert_eq!(telemetry.throttle, 0.0);
    }

    #[test]
    fn speed_is_scaled_forward_axis_only() {
        let telemetry = refreshed(Vec3::new(25.0, -25.0, -4.0));
        assert!((telemetry.speed - 40.0).abs() < EPS);

        let reversing = refreshed(Vec3::new(0.0, 0.0, 3.0));
        assert!((reversing.speed - 30.0).abs() < EPS);
    }

    #[test]
    fn throttle_reads_forward_thrust_only() {
        assert_eq!(refreshed(Vec3::new(0.0, 0.0, 20.0)).throttle, 0.0);
        assert_eq!(refreshed(Vec3::new(30.0, 30.0, 0.0)).throttle, 0.0);
        assert!((refreshed(Vec3::new(0.0, 0.0, -50.0)).throttle - 50.0).abs() < EPS);
        assert!((refreshed(Vec3::new(0.0, 0.0, -100.0)).throttle - 100.0).abs() < EPS);
    }

    #[test]
    fn fuel_burns_with_forward_speed() {
        let telemetry = refreshed(Vec3::new(0.0, 0.0, -100.0));
        assert!((telemetry.fuel - (87.3 - 0.01)).abs() < EPS);

        let drifting = refreshed(Vec3::new(30.0, 0.0, 0.0));
        assert_eq!(drifting.fuel, 87.3);
    }

    #[test]
    fn fuel_never_goes_negative() {
        let config = TelemetryConfig {
            initial_fuel: 0.005,
            ..TelemetryConfig::default()
        };
        let mut telemetry = ShipTelemetry::new(&config);
        telemetry.refresh(Vec3::new(0.0, 0.0, -100.0), Attitude::default(), &config);
        assert_eq!(telemetry.fuel, 0.0);

        telemetry.refresh(Vec3::new(0.0, 0.0, -100.0), Attitude::default(), &config);
        assert_eq!(telemetry.fuel, 0.0);
    }

    #[test]
    fn attitude_converted_to_degrees() {
        let config = TelemetryConfig::default();
        let mut telemetry = ShipTelemetry::new(&config);
        telemetry.refresh(
            Vec3::ZERO,
            Attitude { pitch: 0.1, yaw: -1.0, roll: 0.5 },
            &config,
        );

        assert!((telemetry.pitch - 5.73).abs() < EPS);
        assert!((telemetry.yaw + 57.3).abs() < EPS);
        assert!((telemetry.roll - 28.65).abs() < EPS);
    }
}
