//=========================================================================
// Frame Loop
//=========================================================================
//
// Runs exactly one simulation tick per rendered frame.
//
// Tick order:
// ```text
//   EventCollector::collect_frame   (drain the platform channel)
//     ↓
//   InputSystem::process_frame      (held controls, signals, mouse delta)
//     ↓
//   Simulator::tick                 (engagement, look, motion, telemetry)
//     ↓
//   Presenter                       (overlay change, frame view)
// ```
//
// Once shut down (window closed, channel gone, or `shutdown()`), further
// ticks are no-ops.
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::Receiver;
use log::{debug, info, trace};

//=== Internal Dependencies ===============================================

use super::{
    clock::FrameClock,
    event_collector::{EventCollector, TickControl},
    PlatformEvent,
};
use crate::core::input::InputSystem;
use crate::core::present::{FrameView, Presenter};
use crate::core::sim::Simulator;

//=== FrameLoop ===========================================================

/// Owns the per-frame systems and drives them in order.
#[derive(Debug)]
pub struct FrameLoop {
    collector: EventCollector,
    input: InputSystem,
    sim: Simulator,
    clock: FrameClock,
    running: bool,
    overlay_shown: Option<bool>,
}

impl FrameLoop {
    //--- Construction -----------------------------------------------------

    pub fn new(
        receiver: Receiver<PlatformEvent>,
        input: InputSystem,
        sim: Simulator,
        clock: FrameClock,
    ) -> Self {
        Self {
            collector: EventCollector::new(receiver),
            input,
            sim,
            clock,
            running: true,
            overlay_shown: None,
        }
    }

    //--- Frame ------------------------------------------------------------

    /// Runs one frame, measuring Δt from the wall clock.
    pub fn tick<P: Presenter + ?Sized>(&mut self, presenter: &mut P) -> TickControl {
        if !self.running {
            return TickControl::Exit;
        }
        let dt = self.clock.tick();
        self.step(presenter, dt)
    }

    /// Runs one frame with an explicit Δt in seconds.
    pub fn step<P: Presenter + ?Sized>(&mut self, presenter: &mut P, dt: f32) -> TickControl {
        if !self.running {
            return TickControl::Exit;
        }

        if self.collector.collect_frame() == TickControl::Exit {
            self.shutdown();
            return TickControl::Exit;
        }

        self.input.process_frame(self.collector.batches());
        let outcome = self.sim.tick(self.input.controls(), self.input.frame(), dt);
        trace!(target: "frame", "Frame {} dt={:.4} {:?}", self.sim.frame(), dt, outcome);

        let view = FrameView::capture(&self.sim);
        if self.overlay_shown != Some(view.instructions_visible) {
            debug!(target: "frame", "Instructions overlay visible: {}", view.instructions_visible);
            presenter.show_instructions(view.instructions_visible);
            self.overlay_shown = Some(view.instructions_visible);
        }
        presenter.present(&view);

        TickControl::Continue
    }

    /// Stops ticking. Idempotent.
    pub fn shutdown(&mut self) {
        if self.running {
            info!(target: "frame", "Frame loop stopped after {} frames", self.sim.frame());
            self.running = false;
        }
    }

    //--- Queries ----------------------------------------------------------

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn simulator(&self) -> &Simulator {
        &self.sim
    }

    pub fn input(&self) -> &InputSystem {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut InputSystem {
        &mut self.input
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::{InputEvent, KeyCode, MouseButton};
    use crate::core::present::Viewport;
    use crate::core::sim::Mode;
    use crossbeam_channel::{unbounded, Sender};

    //--- Test Helpers -----------------------------------------------------

    #[derive(Default)]
    struct Recorder {
        frames: Vec<FrameView>,
        overlay: Vec<bool>,
    }

    impl Presenter for Recorder {
        fn present(&mut self, view: &FrameView) {
            self.frames.push(*view);
        }

        fn show_instructions(&mut self, visible: bool) {
            self.overlay.push(visible);
        }

        fn resize(&mut self, _viewport: Viewport) {}
    }

    fn frame_loop() -> (Sender<PlatformEvent>, FrameLoop) {
        let (tx, rx) = unbounded();
        let frame_loop = FrameLoop::new(
            rx,
            InputSystem::default(),
            Simulator::default(),
            FrameClock::default(),
        );
        (tx, frame_loop)
    }

    fn send(tx: &Sender<PlatformEvent>, discrete: Vec<InputEvent>) {
        tx.send(PlatformEvent::Inputs {
            discrete,
            continuous: vec![],
        })
        .unwrap();
    }

    //--- Tests ------------------------------------------------------------

    #[test]
    fn one_present_per_tick() {
        let (_tx, mut frame_loop) = frame_loop();
        let mut recorder = Recorder::default();

        for _ in 0..3 {
            assert_eq!(frame_loop.step(&mut recorder, 0.016), TickControl::Continue);
        }

        assert_eq!(recorder.frames.len(), 3);
        assert_eq!(recorder.frames[2].frame, 3);
    }

    #[test]
    fn overlay_reported_on_change_only() {
        let (tx, mut frame_loop) = frame_loop();
        let mut recorder = Recorder::default();

        frame_loop.step(&mut recorder, 0.016);
        frame_loop.step(&mut recorder, 0.016);
        send(&tx, vec![InputEvent::MouseButtonDown { button: MouseButton::Left }]);
        frame_loop.step(&mut recorder, 0.016);
        send(&tx, vec![InputEvent::KeyDown { key: KeyCode::Escape }]);
        frame_loop.step(&mut recorder, 0.016);

        assert_eq!(recorder.overlay, vec![true, false, true]);
    }

    #[test]
    fn held_key_flies_the_ship() {
        let (tx, mut frame_loop) = frame_loop();
        let mut recorder = Recorder::default();

        send(
            &tx,
            vec![
                InputEvent::MouseButtonDown { button: MouseButton::Left },
                InputEvent::KeyDown { key: KeyCode::KeyW },
            ],
        );
        frame_loop.step(&mut recorder, 1.0);
        frame_loop.step(&mut recorder, 1.0);

        let view = recorder.frames.last().unwrap();
        assert_eq!(view.mode, Mode::Flight);
        assert!(view.ship_position.z < 0.0);
        assert!(view.telemetry.throttle > 0.0);
    }

    #[test]
    fn window_closed_stops_the_loop() {
        let (tx, mut frame_loop) = frame_loop();
        let mut recorder = Recorder::default();

        tx.send(PlatformEvent::WindowClosed).unwrap();
        assert_eq!(frame_loop.step(&mut recorder, 0.016), TickControl::Exit);
        assert!(!frame_loop.is_running());

        assert_eq!(frame_loop.tick(&mut recorder), TickControl::Exit);
        assert!(recorder.frames.is_empty());
    }

    #[test]
    fn shutdown_cancels_further_ticks() {
        let (_tx, mut frame_loop) = frame_loop();
        let mut recorder = Recorder::default();

        frame_loop.shutdown();
        frame_loop.shutdown();

        assert_eq!(frame_loop.tick(&mut recorder), TickControl::Exit);
        assert_eq!(frame_loop.simulator().frame(), 0);
    }
}
