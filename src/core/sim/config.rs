//=========================================================================
// Simulation Configuration
//=========================================================================
//
// Tuning constants for both movement models, telemetry and the view.
//
// Defaults reproduce the Sidewinder cockpit. Every section is a plain
// `Copy` struct with public fields; `SimConfig` adds fluent setters in the
// style of `EngineBuilder`.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::{Vec2, Vec3};

//=== WalkingConfig =======================================================

/// Walking model tuning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WalkingConfig {
    /// Velocity gained per second of held input (units/s).
    pub move_speed: f32,

    /// Per-frame multiplier on horizontal velocity, applied before input.
    /// Frame-count based: it does not scale with Δt.
    pub damping: f32,

    /// Lower corner of the walkable floor, `(x, z)`.
    pub bounds_min: Vec2,

    /// Upper corner of the walkable floor, `(x, z)`.
    pub bounds_max: Vec2,

    /// Camera height while walking.
    pub eye_height: f32,
}

impl Default for WalkingConfig {
    fn default() -> Self {
        Self {
            move_speed: 5.0,
            damping: 0.9,
            bounds_min: Vec2::new(-5.0, -8.0),
            bounds_max: Vec2::new(5.0, 8.0),
            eye_height: 0.0,
        }
    }
}

//=== FlightConfig ========================================================

/// Flight model tuning.
///
/// Forward thrust and reverse thrusters are deliberately asymmetric:
/// forward accelerates harder and reaches a higher speed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlightConfig {
    /// Forward thrust acceleration (units/s²), along -z.
    pub thrust_accel: f32,

    /// Reverse thruster acceleration (units/s²), along +z.
    pub reverse_accel: f32,

    /// Forward speed limit; z-velocity never drops below `-max_forward`.
    pub max_forward: f32,

    /// Reverse speed limit; z-velocity never exceeds `max_reverse`.
    pub max_reverse: f32,

    /// Strafe acceleration (units/s²).
    pub strafe_accel: f32,

    /// Symmetric x-velocity limit.
    pub max_strafe: f32,

    /// Vertical acceleration (units/s²).
    pub vertical_accel: f32,

    /// Symmetric y-velocity limit.
    pub max_vertical: f32,

    /// Per-frame velocity multiplier applied after input.
    pub drag: f32,

    /// Fraction of ship displacement applied to the starfield backdrop.
    pub starfield_parallax: f32,
}

impl Default for FlightConfig {
    fn default() -> Self {
        Self {
            thrust_accel: 20.0,
            reverse_accel: 15.0,
            max_forward: 100.0,
            max_reverse: 50.0,
            strafe_accel: 10.0,
            max_strafe: 30.0,
            vertical_accel: 10.0,
            max_vertical: 30.0,
            drag: 0.995,
            starfield_parallax: 0.1,
        }
    }
}

//=== TelemetryConfig =====================================================

/// Telemetry derivation constants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TelemetryConfig {
    /// Display multiplier from |z-velocity| to the speed readout.
    pub speed_scale: f32,

    /// Forward z-speed that reads as 100% throttle.
    pub full_throttle_speed: f32,

    /// Fuel (percent) burned per frame per unit of |z-velocity|.
    pub fuel_burn_rate: f32,

    /// Fuel level at launch, percent.
    pub initial_fuel: f32,

    /// Shield level, percent. Never changes.
    pub shields: f32,

    /// Hull integrity, percent. Never changes.
    pub hull: f32,

    /// Radian → degree factor used by the attitude readouts.
    pub degrees_per_radian: f32,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            speed_scale: 10.0,
            full_throttle_speed: 100.0,
            fuel_burn_rate: 0.0001,
            initial_fuel: 87.3,
            shields: 100.0,
            hull: 100.0,
            degrees_per_radian: 57.3,
        }
    }
}

//=== ViewConfig ==========================================================

/// Camera and backdrop settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewConfig {
    /// Camera position at launch.
    pub start_position: Vec3,

    /// Radians of yaw/pitch per mouse count.
    pub look_sensitivity: f32,

    /// Starfield rotation about +y per frame, radians.
    pub starfield_spin: f32,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            start_position: Vec3::new(0.0, 0.0, -4.0),
            look_sensitivity: 0.002,
            starfield_spin: 0.00005,
        }
    }
}

//=== SimConfig ===========================================================

/// Full simulator configuration.
///
/// ```
/// use void_runner::prelude::*;
///
/// let config = SimConfig::default().with_initial_fuel(100.0);
/// assert_eq!(config.telemetry.initial_fuel, 100.0);
/// assert_eq!(config.flight.drag, 0.995);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SimConfig {
    pub walking: WalkingConfig,
    pub flight: FlightConfig,
    pub telemetry: TelemetryConfig,
    pub view: ViewConfig,
}

impl SimConfig {
    /// Replaces the walking section.
    ///
    /// # Panics
    ///
    /// Panics if `bounds_min` exceeds `bounds_max` on either axis, or if
    /// either corner is not finite.
    pub fn with_walking(mut self, walking: WalkingConfig) -> Self {
        assert!(
            walking.bounds_min.is_finite()
                && walking.bounds_max.is_finite()
                && walking.bounds_min.cmple(walking.bounds_max).all(),
            "Walking bounds must satisfy min <= max, got {} .. {}",
            walking.bounds_min,
            walking.bounds_max
        );
        self.walking = walking;
        self
    }

    /// Replaces the flight section.
    pub fn with_flight(mut self, flight: FlightConfig) -> Self {
        self.flight = flight;
        self
    }

    /// Replaces the telemetry section.
    pub fn with_telemetry(mut self, telemetry: TelemetryConfig) -> Self {
        self.telemetry = telemetry;
        self
    }

    /// Replaces the view section.
    pub fn with_view(mut self, view: ViewConfig) -> Self {
        self.view = view;
        self
    }

    /// Sets the launch fuel level.
    ///
    /// # Panics
    ///
    /// Panics if `fuel` is outside `0.0..=100.0`.
    pub fn with_initial_fuel(mut self, fuel: f32) -> Self {
        assert!(
            (0.0..=100.0).contains(&fuel),
            "Initial fuel must be within 0..=100, got {}",
            fuel
        );
        self.telemetry.initial_fuel = fuel;
        self
    }

    /// Sets the mouse-look sensitivity (radians per count).
    ///
    /// # Panics
    ///
    /// Panics if `sensitivity` is not a positive finite number.
    pub fn with_look_sensitivity(mut self, sensitivity: f32) -> Self {
        assert!(
            sensitivity.is_finite() && sensitivity > 0.0,
            "Look sensitivity must be positive, got {}",
            sensitivity
        );
        self.view.look_sensitivity = sensitivity;
        self
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
