//=========================================================================
// Title Presenter
//=========================================================================
//
// Minimal `Presenter` for the winit build: the HUD readout goes to the
// window title, the instructions overlay goes to the log.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, info};
use winit::window::{CursorGrabMode, Window};

//=== Internal Dependencies ===============================================

use crate::core::present::{FrameView, Presenter, Projection, Viewport, INSTRUCTIONS};

//=== TitlePresenter ======================================================

pub(crate) struct TitlePresenter {
    window: Window,
    projection: Projection,
    title: String,
    cursor_grabbed: bool,
}

impl TitlePresenter {
    pub(crate) fn new(window: Window) -> Self {
        let size = window.inner_size();
        Self {
            window,
            projection: Projection::for_viewport(Viewport::new(size.width, size.height)),
            title: String::new(),
            cursor_grabbed: false,
        }
    }

    pub(crate) fn window(&self) -> &Window {
        &self.window
    }

    /// Locks the cursor while the pilot is engaged and frees it otherwise.
    pub(crate) fn sync_cursor(&mut self, engaged: bool) {
        if engaged == self.cursor_grabbed {
            return;
        }

        if engaged {
            let grabbed = self
                .window
                .set_cursor_grab(CursorGrabMode::Locked)
                .or_else(|_| self.window.set_cursor_grab(CursorGrabMode::Confined));
            if let Err(e) = grabbed {
                debug!(target: "platform", "Cursor grab unavailable: {}", e);
            }
        } else if let Err(e) = self.window.set_cursor_grab(CursorGrabMode::None) {
            debug!(target: "platform", "Cursor release failed: {}", e);
        }

        self.window.set_cursor_visible(!engaged);
        self.cursor_grabbed = engaged;
    }
}

impl Presenter for TitlePresenter {
    fn present(&mut self, view: &FrameView) {
        let title = compose_title(view);
        if title != self.title {
            self.window.set_title(&title);
            self.title = title;
        }
    }

    fn show_instructions(&mut self, visible: bool) {
        if visible {
            for line in INSTRUCTIONS.lines() {
                info!(target: "platform", "{}", line);
            }
        } else {
            debug!(target: "platform", "Instructions hidden");
        }
    }

    fn resize(&mut self, viewport: Viewport) {
        if self.projection.resize(viewport) {
            debug!(
                target: "platform",
                "Viewport {}x{}, aspect {:.3}",
                viewport.width,
                viewport.height,
                self.projection.aspect
            );
        }
    }
}

//=== Title ===============================================================

/// Window title for a frame.
pub(crate) fn compose_title(view: &FrameView) -> String {
    if view.instructions_visible {
        return "VOID RUNNER | Click to launch".to_string();
    }
    match view.hud() {
        Some(hud) => format!("VOID RUNNER | {}", hud),
        None => "VOID RUNNER | Paused, click to resume".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::{ControlSignal, ControlState, FrameInput};
    use crate::core::sim::Simulator;

    #[test]
    fn title_while_paused() {
        let view = FrameView::capture(&Simulator::default());
        assert_eq!(compose_title(&view), "VOID RUNNER | Click to launch");
    }

    #[test]
    fn title_carries_hud_when_flying() {
        let mut sim = Simulator::default();
        sim.engage();

        let title = compose_title(&FrameView::capture(&sim));
        assert!(title.starts_with("VOID RUNNER | FLIGHT CONTROL"));
        assert!(title.contains("FUEL 87.3%"));
    }

    #[test]
    fn title_drops_cockpit_panels_when_walking() {
        let mut sim = Simulator::default();
        sim.engage();
        sim.tick(
            &ControlState::new(),
            &FrameInput {
                signals: vec![ControlSignal::ToggleMode],
                ..FrameInput::default()
            },
            0.016,
        );

        let title = compose_title(&FrameView::capture(&sim));
        assert!(title.starts_with("VOID RUNNER | EVA WALKING | EXPLORING SHIP INTERIOR"));
        assert!(!title.contains("FUEL"));
    }

    #[test]
    fn title_hides_hud_after_focus_loss() {
        let mut sim = Simulator::default();
        sim.engage();
        sim.disengage();

        let view = FrameView::capture(&sim);
        assert!(!view.instructions_visible);
        assert_eq!(compose_title(&view), "VOID RUNNER | Paused, click to resume");
    }
}
