//=========================================================================
// Viewport & Projection
//=========================================================================

/// Drawable surface size in physical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width over height, or `None` for a collapsed (minimized) surface.
    pub fn aspect(&self) -> Option<f32> {
        if self.width == 0 || self.height == 0 {
            None
        } else {
            Some(self.width as f32 / self.height as f32)
        }
    }
}

/// Perspective camera parameters.
///
/// Recomputed on every resize. A collapsed viewport keeps the last valid
/// aspect ratio rather than dividing by zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Vertical field of view, degrees.
    pub fov_y_deg: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Projection {
    /// Cockpit camera for a given viewport: 75° FOV, near 0.1, far 5000.
    pub fn for_viewport(viewport: Viewport) -> Self {
        Self {
            fov_y_deg: 75.0,
            aspect: viewport.aspect().unwrap_or(1.0),
            near: 0.1,
            far: 5000.0,
        }
    }

    /// Updates the aspect ratio. Returns `true` if it changed.
    pub fn resize(&mut self, viewport: Viewport) -> bool {
        match viewport.aspect() {
            Some(aspect) if aspect != self.aspect => {
                self.aspect = aspect;
                true
            }
            _ => false,
        }
    }
}

impl Default for Projection {
    fn default() -> Self {
        Self::for_viewport(Viewport::new(800, 600))
    }
}
