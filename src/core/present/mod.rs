//=========================================================================
// Presentation
//=========================================================================
//
// The read-only side of a frame: what a renderer or HUD needs to draw it.
//
// Architecture:
// ```text
//   FrameLoop::tick ──► FrameView ──► Presenter::present
//                                     Presenter::show_instructions
//   window resize   ──► Viewport  ──► Presenter::resize
// ```
//
// Nothing a presenter does feeds back into the simulation.
//
//=========================================================================

//=== Module Declarations =================================================

mod hud;
mod projection;

//=== Public API ==========================================================

pub use hud::{FlightReadout, HudReadout, INSTRUCTIONS};
pub use projection::{Projection, Viewport};

//=== Internal Dependencies ===============================================

use glam::{Quat, Vec3};

use crate::core::sim::{Mode, ShipTelemetry, Simulator};

//=== FrameView ===========================================================

/// Snapshot of everything visible after one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameView {
    pub frame: u64,
    pub mode: Mode,
    pub engaged: bool,
    pub instructions_visible: bool,
    pub camera_position: Vec3,
    pub camera_rotation: Quat,
    pub ship_position: Vec3,
    pub starfield_offset: Vec3,
    /// Starfield rotation about +y, radians.
    pub starfield_spin: f32,
    pub telemetry: ShipTelemetry,
}

impl FrameView {
    /// Captures the simulator's current state.
    pub fn capture(sim: &Simulator) -> Self {
        let updater = sim.updater();
        Self {
            frame: sim.frame(),
            mode: sim.mode(),
            engaged: sim.is_engaged(),
            instructions_visible: sim.instructions_visible(),
            camera_position: updater.camera_position(),
            camera_rotation: sim.view().rotation(),
            ship_position: updater.ship_position(),
            starfield_offset: updater.starfield_offset(),
            starfield_spin: sim.starfield_spin(),
            telemetry: *updater.telemetry(),
        }
    }

    /// HUD for this frame. `None` while the pilot is not engaged: the HUD
    /// is only drawn with the cursor locked.
    pub fn hud(&self) -> Option<HudReadout> {
        self.engaged.then(|| HudReadout::new(self.mode, &self.telemetry))
    }
}

//=== Presenter ===========================================================

/// Render surface and HUD sink.
pub trait Presenter {
    /// Draws one frame.
    fn present(&mut self, view: &FrameView);

    /// Shows or hides the instructions overlay. Called on change only.
    fn show_instructions(&mut self, visible: bool);

    /// The drawable surface changed size.
    fn resize(&mut self, viewport: Viewport);
}
