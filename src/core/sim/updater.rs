//=========================================================================
// Motion & Telemetry Updater
//=========================================================================
//
// The per-frame core: one update call, two incompatible velocity models.
//
// Architecture:
// ```text
//   update(controls, Δt, view)
//        │
//        ├─ Mode::Walking ──► WalkingModel::step ──► camera moves, confined
//        │
//        └─ Mode::Flight  ──► FlightModel::step  ──► ship + starfield move
//                                                   telemetry refreshed
// ```
//
// Exactly one model steps per frame. The other keeps its velocity untouched
// until the mode comes back to it.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec3;
use log::{debug, trace};

//=== Internal Dependencies ===============================================

use super::{
    config::SimConfig,
    flight::FlightModel,
    mode::Mode,
    telemetry::ShipTelemetry,
    view::ViewOrientation,
    walking::{self, WalkingModel},
};
use crate::core::input::ControlState;

//=== Frame Time ==========================================================

/// Longest frame the models integrate in one step, seconds.
pub const MAX_DELTA: f32 = 10.0;

/// Normalizes a frame delta: NaN, infinite and negative values become 0,
/// anything longer than [`MAX_DELTA`] is cut down to it.
///
/// A zero delta adds no input but still runs the per-frame decay.
#[inline]
pub fn sanitize_delta(dt: f32) -> f32 {
    if dt.is_finite() && dt > 0.0 {
        dt.min(MAX_DELTA)
    } else {
        0.0
    }
}

//=== MotionOutcome =======================================================

/// What one update did, tagged by the model that ran.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MotionOutcome {
    /// The walking model moved the camera.
    Walked {
        /// Displacement before confinement.
        displacement: Vec3,
    },

    /// The flight model moved the ship.
    Flew {
        ship_delta: Vec3,
        starfield_delta: Vec3,
    },
}

//=== MotionUpdater =======================================================

/// Owns both velocity models, the poses they drive, and the telemetry.
#[derive(Debug, Clone)]
pub struct MotionUpdater {
    config: SimConfig,
    mode: Mode,
    walking: WalkingModel,
    flight: FlightModel,
    camera_position: Vec3,
    ship_position: Vec3,
    starfield_offset: Vec3,
    telemetry: ShipTelemetry,
}

impl MotionUpdater {
    //--- Construction -----------------------------------------------------

    /// Creates an updater at rest, in flight mode, at the launch pose.
    pub fn new(config: SimConfig) -> Self {
        Self {
            mode: Mode::default(),
            walking: WalkingModel::new(),
            flight: FlightModel::new(),
            camera_position: config.view.start_position,
            ship_position: Vec3::ZERO,
            starfield_offset: Vec3::ZERO,
            telemetry: ShipTelemetry::new(&config.telemetry),
            config,
        }
    }

    /// Replaces the walking velocity.
    pub fn with_walking_velocity(mut self, velocity: Vec3) -> Self {
        self.walking = WalkingModel::with_velocity(velocity);
        self
    }

    /// Replaces the flight velocity (clamped into the flight limits).
    pub fn with_flight_velocity(mut self, velocity: Vec3) -> Self {
        self.flight = FlightModel::with_velocity(velocity, &self.config.flight);
        self
    }

    /// Starts in the given mode.
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    //--- Mode -------------------------------------------------------------

    /// Flips the mode. Neither velocity is touched.
    pub fn toggle_mode(&mut self) -> Mode {
        self.mode = self.mode.toggled();
        debug!(target: "sim", "Mode switched to {:?}", self.mode);
        self.mode
    }

    //--- Update -----------------------------------------------------------

    /// Runs one frame of the active model.
    pub fn update(
        &mut self,
        controls: &ControlState,
        dt: f32,
        view: &ViewOrientation,
    ) -> MotionOutcome {
        let dt = sanitize_delta(dt);

        let outcome = match self.mode {
            Mode::Walking => self.walk(controls, dt, view),
            Mode::Flight => self.fly(controls, dt, view),
        };

        trace!(target: "sim", "{:?} dt={:.4} -> {:?}", self.mode, dt, outcome);
        outcome
    }

    fn walk(&mut self, controls: &ControlState, dt: f32, view: &ViewOrientation) -> MotionOutcome {
        let config = &self.config.walking;

        self.walking.step(controls, dt, config);
        let displacement = self.walking.displacement(view);
        self.camera_position = walking::confine(self.camera_position + displacement, config);

        MotionOutcome::Walked { displacement }
    }

    fn fly(&mut self, controls: &ControlState, dt: f32, view: &ViewOrientation) -> MotionOutcome {
        let config = &self.config.flight;

        self.flight.step(controls, dt, config);
        let velocity = self.flight.velocity();

        let ship_delta = velocity * dt;
        let starfield_delta = ship_delta * config.starfield_parallax;
        self.ship_position += ship_delta;
        self.starfield_offset += starfield_delta;

        self.telemetry
            .refresh(velocity, view.attitude(), &self.config.telemetry);

        MotionOutcome::Flew {
            ship_delta,
            starfield_delta,
        }
    }

    //--- Queries ----------------------------------------------------------

    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn walking_velocity(&self) -> Vec3 {
        self.walking.velocity()
    }

    pub fn flight_velocity(&self) -> Vec3 {
        self.flight.velocity()
    }

    pub fn camera_position(&self) -> Vec3 {
        self.camera_position
    }

    pub fn ship_position(&self) -> Vec3 {
        self.ship_position
    }

    pub fn starfield_offset(&self) -> Vec3 {
        self.starfield_offset
    }

    pub fn telemetry(&self) -> &ShipTelemetry {
        &self.telemetry
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }
}

impl Default for MotionUpdater {
    fn default() -> Self {
        Self::new(SimConfig::default())
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
