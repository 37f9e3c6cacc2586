//=========================================================================
// Simulator
//=========================================================================
//
// One frame of the cockpit: signals, pointer engagement, mouse look, the
// motion update, and backdrop animation.
//
// Frame order:
//   1. capture / release requests        (engagement)
//   2. edge signals, in press order      (mode toggle, instructions)
//   3. mouse look                        (engaged only)
//   4. motion & telemetry update         (engaged only)
//   5. starfield spin                    (always)
//
// Motion is paused while the pilot is not engaged, i.e. while the
// instructions are up or the pointer has been released.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, info};

//=== Internal Dependencies ===============================================

use super::{
    config::SimConfig,
    mode::Mode,
    updater::{MotionOutcome, MotionUpdater},
    view::ViewOrientation,
};
use crate::core::input::{ControlSignal, ControlState, FrameInput};

//=== Simulator ===========================================================

/// Frame-level simulator state.
#[derive(Debug, Clone)]
pub struct Simulator {
    updater: MotionUpdater,
    view: ViewOrientation,
    engaged: bool,
    instructions_visible: bool,
    starfield_spin: f32,
    frame: u64,
}

impl Simulator {
    //--- Construction -----------------------------------------------------

    /// Creates a simulator showing the instructions, not yet engaged.
    pub fn new(config: SimConfig) -> Self {
        Self {
            updater: MotionUpdater::new(config),
            view: ViewOrientation::default(),
            engaged: false,
            instructions_visible: true,
            starfield_spin: 0.0,
            frame: 0,
        }
    }

    //--- Frame ------------------------------------------------------------

    /// Runs one frame.
    ///
    /// Returns the motion outcome when the motion update ran.
    pub fn tick(
        &mut self,
        controls: &ControlState,
        input: &FrameInput,
        dt: f32,
    ) -> Option<MotionOutcome> {
        self.frame += 1;

        if input.capture_requested {
            self.engage();
        }
        if input.release_requested {
            self.disengage();
        }

        for signal in &input.signals {
            self.apply_signal(*signal);
        }

        let outcome = if self.engaged {
            let (dx, dy) = input.mouse_delta;
            let sensitivity = self.updater.config().view.look_sensitivity;
            self.view.look(dx, dy, sensitivity);

            Some(self.updater.update(controls, dt, &self.view))
        } else {
            None
        };

        self.starfield_spin += self.updater.config().view.starfield_spin;

        outcome
    }

    fn apply_signal(&mut self, signal: ControlSignal) {
        match signal {
            ControlSignal::ToggleMode => {
                let mode = self.updater.toggle_mode();
                info!(target: "sim", "Mode: {}", mode);
            }
            ControlSignal::ShowInstructions => {
                self.instructions_visible = true;
                self.disengage();
            }
        }
    }

    //--- Engagement -------------------------------------------------------

    /// Hands control to the pilot and hides the instructions.
    pub fn engage(&mut self) {
        if !self.engaged {
            debug!(target: "sim", "Pilot engaged");
        }
        self.engaged = true;
        self.instructions_visible = false;
    }

    /// Takes control away from the pilot. Motion pauses.
    pub fn disengage(&mut self) {
        if self.engaged {
            debug!(target: "sim", "Pilot disengaged");
        }
        self.engaged = false;
    }

    //--- Queries ----------------------------------------------------------

    #[inline]
    pub fn is_engaged(&self) -> bool {
        self.engaged
    }

    #[inline]
    pub fn instructions_visible(&self) -> bool {
        self.instructions_visible
    }

    #[inline]
    pub fn mode(&self) -> Mode {
        self.updater.mode()
    }

    pub fn updater(&self) -> &MotionUpdater {
        &self.updater
    }

    pub fn view(&self) -> &ViewOrientation {
        &self.view
    }

    /// Starfield rotation about +y, radians.
    pub fn starfield_spin(&self) -> f32 {
        self.starfield_spin
    }

    /// Frames ticked so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }
}

impl Default for Simulator {
    fn default() -> Self {
        Self::new(SimConfig::default())
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::Control;

    const EPS: f32 = 1e-6;

    fn held(controls: &[Control]) -> ControlState {
        let mut state = ControlState::new();
        for control in controls {
            state.press(*control);
        }
        state
    }

    fn click() -> FrameInput {
        FrameInput {
            capture_requested: true,
            ..FrameInput::default()
        }
    }

    fn signal(signal: ControlSignal) -> FrameInput {
        FrameInput {
            signals: vec![signal],
            ..FrameInput::default()
        }
    }

    #[test]
    fn starts_with_instructions_and_paused() {
        let mut sim = Simulator::default();
        assert!(sim.instructions_visible());
        assert!(!sim.is_engaged());

        let outcome = sim.tick(&held(&[Control::Forward]), &FrameInput::default(), 0.1);
        assert!(outcome.is_none());
        assert_eq!(sim.updater().flight_velocity(), glam::Vec3::ZERO);
    }

    #[test]
    fn click_engages_and_hides_instructions() {
        let mut sim = Simulator::default();
        let outcome = sim.tick(&held(&[Control::Forward]), &click(), 0.1);

        assert!(sim.is_engaged());
        assert!(!sim.instructions_visible());
        assert!(matches!(outcome, Some(MotionOutcome::Flew { .. })));
        assert!(sim.updater().flight_velocity().z < 0.0);
    }

    #[test]
    fn escape_shows_instructions_and_pauses() {
        let mut sim = Simulator::default();
        sim.tick(&ControlState::new(), &click(), 0.016);

        let outcome = sim.tick(
            &held(&[Control::Forward]),
            &signal(ControlSignal::ShowInstructions),
            0.016,
        );

        assert!(outcome.is_none());
        assert!(sim.instructions_visible());
        assert!(!sim.is_engaged());
    }

    #[test]
    fn focus_loss_pauses_without_instructions() {
        let mut sim = Simulator::default();
        sim.tick(&ControlState::new(), &click(), 0.016);

        let lost = FrameInput {
            release_requested: true,
            ..FrameInput::default()
        };
        assert!(sim.tick(&ControlState::new(), &lost, 0.016).is_none());
        assert!(!sim.instructions_visible());
    }

    #[test]
    fn toggle_works_while_paused() {
        let mut sim = Simulator::default();
        sim.tick(&ControlState::new(), &signal(ControlSignal::ToggleMode), 0.016);
        assert_eq!(sim.mode(), Mode::Walking);
    }

    #[test]
    fn mouse_look_only_when_engaged() {
        let mut sim = Simulator::default();
        let look = FrameInput {
            mouse_delta: (100.0, 0.0),
            ..FrameInput::default()
        };

        sim.tick(&ControlState::new(), &look, 0.016);
        assert_eq!(sim.view().yaw(), 0.0);

        sim.engage();
        sim.tick(&ControlState::new(), &look, 0.016);
        assert!((sim.view().yaw() + 0.2).abs() < EPS);
    }

    #[test]
    fn starfield_spins_every_frame() {
        let mut sim = Simulator::default();
        for _ in 0..10 {
            sim.tick(&ControlState::new(), &FrameInput::default(), 0.016);
        }
        assert!((sim.starfield_spin() - 0.0005).abs() < EPS);
        assert_eq!(sim.frame(), 10);
    }
}
