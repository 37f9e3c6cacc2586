//=========================================================================
// View Orientation
//=========================================================================
//
// First-person mouse look.
//
// Yaw and pitch are applied in YXZ order (yaw about world up, then pitch
// about the camera's right axis); roll is never driven directly. Pitch is
// held within ±90° so the view cannot flip over.
//
// The attitude readouts report the same rotation decomposed in XYZ order,
// which is what a scene graph exposes as the camera's Euler rotation.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::f32::consts::FRAC_PI_2;

use glam::{EulerRot, Quat, Vec3};

//=== Attitude ============================================================

/// Camera rotation as XYZ Euler components, radians.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Attitude {
    pub pitch: f32,
    pub yaw: f32,
    pub roll: f32,
}

//=== ViewOrientation =====================================================

/// Where the pilot is looking.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewOrientation {
    yaw: f32,
    pitch: f32,
}

impl ViewOrientation {
    /// Creates an orientation from yaw and pitch (radians). Pitch is
    /// clamped to ±π/2.
    pub fn new(yaw: f32, pitch: f32) -> Self {
        Self {
            yaw,
            pitch: pitch.clamp(-FRAC_PI_2, FRAC_PI_2),
        }
    }

    /// Applies a relative mouse motion.
    ///
    /// Moving right turns left-handed about +y (negative yaw), moving
    /// down pitches the nose down. Non-finite motion is ignored.
    pub fn look(&mut self, dx: f32, dy: f32, sensitivity: f32) {
        if !(dx.is_finite() && dy.is_finite()) {
            return;
        }
        self.yaw -= dx * sensitivity;
        self.pitch = (self.pitch - dy * sensitivity).clamp(-FRAC_PI_2, FRAC_PI_2);
    }

    #[inline]
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    #[inline]
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Camera rotation.
    pub fn rotation(&self) -> Quat {
        Quat::from_euler(EulerRot::YXZ, self.yaw, self.pitch, 0.0)
    }

    /// Camera rotation decomposed in XYZ order.
    pub fn attitude(&self) -> Attitude {
        let (pitch, yaw, roll) = self.rotation().to_euler(EulerRot::XYZ);
        Attitude { pitch, yaw, roll }
    }

    /// Camera right vector. Always horizontal, since roll is never applied.
    pub fn right(&self) -> Vec3 {
        self.rotation() * Vec3::X
    }

    /// Facing direction projected onto the floor plane.
    pub fn horizontal_forward(&self) -> Vec3 {
        Vec3::Y.cross(self.right())
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
