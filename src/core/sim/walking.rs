//=========================================================================
// Walking Model
//=========================================================================
//
// Damped first-person movement inside the cockpit.
//
// Per frame:
//   1. horizontal velocity *= damping        (frame-count based)
//   2. velocity += input * move_speed * Δt
//   3. displacement = right * v.x + forward * -v.z   (view relative)
//   4. position clamped to the floor, height pinned to eye level
//
// The stored velocity is the displacement applied this frame, not a rate.
// The vertical component is never written.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::{Vec2, Vec3};

//=== Internal Dependencies ===============================================

use super::{config::WalkingConfig, view::ViewOrientation};
use crate::core::input::{Control, ControlState};

//=== WalkingModel ========================================================

/// Walking velocity state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WalkingModel {
    velocity: Vec3,
}

impl WalkingModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from a given velocity.
    pub fn with_velocity(velocity: Vec3) -> Self {
        Self { velocity }
    }

    #[inline]
    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    /// Advances velocity by one frame. `dt` must already be sanitized.
    pub fn step(&mut self, controls: &ControlState, dt: f32, config: &WalkingConfig) {
        self.velocity.x *= config.damping;
        self.velocity.z *= config.damping;

        let step = config.move_speed * dt;
        self.velocity.z += controls.axis(Control::Forward, Control::Back) * step;
        self.velocity.x += controls.axis(Control::StrafeLeft, Control::StrafeRight) * step;
    }

    /// World-space displacement for the current velocity, relative to
    /// where the camera faces.
    pub fn displacement(&self, view: &ViewOrientation) -> Vec3 {
        view.right() * self.velocity.x + view.horizontal_forward() * -self.velocity.z
    }
}

//=== Confinement =========================================================

/// Clamps a camera position into the walkable box at eye height.
pub fn confine(position: Vec3, config: &WalkingConfig) -> Vec3 {
    let floor = Vec2::new(position.x, position.z).clamp(config.bounds_min, config.bounds_max);
    Vec3::new(floor.x, config.eye_height, floor.y)
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn held(controls: &[Control]) -> ControlState {
        let mut state = ControlState::new();
        for control in controls {
            state.press(*control);
        }
        state
    }

    #[test]
    fn decay_ignores_frame_time() {
        let mut model = WalkingModel::with_velocity(Vec3::new(3.0, 0.0, 2.0));
        model.step(&ControlState::new(), 0.0, &WalkingConfig::default());

        let v = model.velocity();
        assert!((v.x - 2.7).abs() < EPS);
        assert_eq!(v.y, 0.0);
        assert!((v.z - 1.8).abs() < EPS);
    }

    #[test]
    fn forward_pushes_negative_z() {
        let mut model = WalkingModel::new();
        model.step(&held(&[Control::Forward]), 0.1, &WalkingConfig::default());
        assert!((model.velocity().z + 0.5).abs() < EPS);
    }

    #[test]
    fn strafe_right_pushes_positive_x() {
        let mut model = WalkingModel::new();
        model.step(&held(&[Control::StrafeRight]), 0.2, &WalkingConfig::default());
        assert!((model.velocity().x - 1.0).abs() < EPS);
    }

    #[test]
    fn opposing_inputs_cancel() {
        let mut model = WalkingModel::new();
        model.step(
            &held(&[Control::Forward, Control::Back, Control::StrafeLeft, Control::StrafeRight]),
            0.5,
            &WalkingConfig::default(),
        );
        assert_eq!(model.velocity(), Vec3::ZERO);
    }

    #[test]
    fn vertical_controls_do_nothing() {
        let mut model = WalkingModel::new();
        model.step(&held(&[Control::Ascend, Control::Descend]), 1.0, &WalkingConfig::default());
        assert_eq!(model.velocity(), Vec3::ZERO);
    }

    #[test]
    fn velocity_settles_under_constant_input() {
        // Fixed point of v = 0.9 v + 5 dt is 50 dt
        let mut model = WalkingModel::new();
        let controls = held(&[Control::Back]);
        for _ in 0..500 {
            model.step(&controls, 0.016, &WalkingConfig::default());
        }
        assert!((model.velocity().z - 0.8).abs() < 1e-3);
    }

    #[test]
    fn displacement_follows_view() {
        let model = WalkingModel::with_velocity(Vec3::new(0.0, 0.0, -1.0));

        let ahead = model.displacement(&ViewOrientation::default());
        assert!((ahead - Vec3::new(0.0, 0.0, -1.0)).length() < EPS);

        // Quarter turn to the left faces -x
        let turned = model.displacement(&ViewOrientation::new(std::f32::consts::FRAC_PI_2, 0.0));
        assert!((turned - Vec3::new(-1.0, 0.0, 0.0)).length() < EPS);
    }

    #[test]
    fn displacement_stays_on_floor_when_looking_up() {
        let model = WalkingModel::with_velocity(Vec3::new(0.3, 0.0, -0.4));
        let d = model.displacement(&ViewOrientation::new(0.2, 1.3));
        assert!(d.y.abs() < EPS);
        assert!((d.length() - 0.5).abs() < EPS);
    }

    #[test]
    fn confine_clamps_and_pins_height() {
        let config = WalkingConfig::default();

        assert_eq!(
            confine(Vec3::new(9.0, 3.0, -20.0), &config),
            Vec3::new(5.0, 0.0, -8.0)
        );
        assert_eq!(
            confine(Vec3::new(-1.0, -2.0, 4.0), &config),
            Vec3::new(-1.0, 0.0, 4.0)
        );
    }
}
