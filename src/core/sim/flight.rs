//=========================================================================
// Flight Model
//=========================================================================
//
// Per-axis thrust with hard limits and multiplicative drag.
//
// Per frame:
//   z: forward  → max(z - thrust  * Δt, -max_forward)
//      back     → min(z + reverse * Δt,  max_reverse)
//   x: strafe   → ±strafe_accel   * Δt within ±max_strafe
//   y: vertical → ±vertical_accel * Δt within ±max_vertical
//   then velocity *= drag            (frame-count based)
//
// Limits are applied as each input is, before drag, so every component
// stays inside its range whatever Δt is.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec3;

//=== Internal Dependencies ===============================================

use super::config::FlightConfig;
use crate::core::input::{Control, ControlState};

//=== FlightModel =========================================================

/// Ship velocity state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FlightModel {
    velocity: Vec3,
}

impl FlightModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from a given velocity. Components are clamped into the
    /// configured limits.
    pub fn with_velocity(velocity: Vec3, config: &FlightConfig) -> Self {
        let min = Vec3::new(-config.max_strafe, -config.max_vertical, -config.max_forward);
        let max = Vec3::new(config.max_strafe, config.max_vertical, config.max_reverse);
        Self {
            velocity: velocity.clamp(min, max),
        }
    }

    #[inline]
    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    /// Advances velocity by one frame. `dt` must already be sanitized.
    pub fn step(&mut self, controls: &ControlState, dt: f32, config: &FlightConfig) {
        let v = &mut self.velocity;

        //--- Main thrust ---------------------------------------------------
        if controls.is_active(Control::Forward) {
            v.z = (v.z - config.thrust_accel * dt).max(-config.max_forward);
        }
        if controls.is_active(Control::Back) {
            v.z = (v.z + config.reverse_accel * dt).min(config.max_reverse);
        }

        //--- Strafe --------------------------------------------------------
        if controls.is_active(Control::StrafeLeft) {
            v.x = (v.x - config.strafe_accel * dt).max(-config.max_strafe);
        }
        if controls.is_active(Control::StrafeRight) {
            v.x = (v.x + config.strafe_accel * dt).min(config.max_strafe);
        }

        //--- Vertical ------------------------------------------------------
        if controls.is_active(Control::Ascend) {
            v.y = (v.y + config.vertical_accel * dt).min(config.max_vertical);
        }
        if controls.is_active(Control::Descend) {
            v.y = (v.y - config.vertical_accel * dt).max(-config.max_vertical);
        }

        *v *= config.drag;
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
