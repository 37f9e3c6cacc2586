//=========================================================================
// Input System
//
// Turns a frame's worth of platform `InputEvent`s into simulator input.
//
// Responsibilities:
// - Resolve keys to controls through `ControlBindings`
// - Keep the held-control set (`ControlState`) current
// - Collect edge-triggered `ControlSignal`s fired this frame
// - Accumulate raw mouse motion for mouse look
// - Note pointer capture requests (primary click) and focus loss
//
// Notes:
// Several keys may drive one control. A control is released only once
// the last key driving it goes up, so letting go of one Shift while the
// other is still down keeps descending.
//
// Each held key remembers the control it pressed. Rebinding a key while
// it is down does not strand that control: the key-up releases what the
// key-down pressed.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;

use log::{debug, trace};

//=== Internal Dependencies ===============================================

use super::{
    bindings::ControlBindings,
    control::{Control, ControlSignal},
    control_state::ControlState,
    event::{InputEvent, KeyCode, MouseButton},
};

//=== FrameInput ==========================================================

/// Per-frame input deltas, reset at the start of every frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameInput {
    /// Edge signals in the order their keys went down.
    pub signals: Vec<ControlSignal>,

    /// Summed relative mouse motion `(dx, dy)` in device counts.
    pub mouse_delta: (f32, f32),

    /// The primary button went down this frame.
    pub capture_requested: bool,

    /// Focus was lost this frame.
    pub release_requested: bool,
}

impl FrameInput {
    fn clear(&mut self) {
        self.signals.clear();
        self.mouse_delta = (0.0, 0.0);
        self.capture_requested = false;
        self.release_requested = false;
    }
}

//=== InputSystem =========================================================

/// Owns bindings, physical key state and the held-control set.
#[derive(Debug)]
pub struct InputSystem {
    bindings: ControlBindings,
    /// Physical keys currently down, with the control each one pressed.
    keys_down: HashMap<KeyCode, Option<Control>>,
    controls: ControlState,
    frame: FrameInput,
}

impl InputSystem {
    //--- Construction -----------------------------------------------------

    /// Creates an input system with the given bindings.
    pub fn new(bindings: ControlBindings) -> Self {
        Self {
            bindings,
            keys_down: HashMap::new(),
            controls: ControlState::new(),
            frame: FrameInput::default(),
        }
    }

    //--- Frame Processing -------------------------------------------------

    /// Processes every batch collected for the current frame.
    ///
    /// Frame lifecycle: previous deltas are cleared, then events are
    /// applied in arrival order.
    pub fn process_frame(&mut self, batches: &[Vec<InputEvent>]) {
        self.frame.clear();

        for event in batches.iter().flatten() {
            self.process_event(event);
        }

        if !self.frame.signals.is_empty() {
            debug!("Signals this frame: {:?}", self.frame.signals);
        }
    }

    fn process_event(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::KeyDown { key } => {
                let bindings = &self.bindings;
                let pressed = *self
                    .keys_down
                    .entry(key)
                    .or_insert_with(|| bindings.control_for(key));

                if let Some(control) = pressed {
                    if let Some(signal) = self.controls.press(control) {
                        self.frame.signals.push(signal);
                    }
                }
            }

            InputEvent::KeyUp { key } => {
                let Some(pressed) = self.keys_down.remove(&key) else {
                    return;
                };
                if let Some(control) = pressed {
                    if !self.is_driven_by_held_key(control) {
                        self.controls.release(control);
                    }
                }
            }

            InputEvent::MouseButtonDown { button: MouseButton::Left } => {
                self.frame.capture_requested = true;
            }

            InputEvent::FocusLost => {
                // Key-up events never arrive for keys held while unfocused
                self.keys_down.clear();
                self.controls.clear();
                self.frame.release_requested = true;
            }

            InputEvent::MouseMotion { dx, dy } => {
                self.frame.mouse_delta.0 += dx;
                self.frame.mouse_delta.1 += dy;
            }

            InputEvent::MouseButtonDown { .. }
            | InputEvent::MouseButtonUp { .. }
            | InputEvent::Unidentified => {
                trace!("Ignored input event: {:?}", event);
            }
        }
    }

    fn is_driven_by_held_key(&self, control: Control) -> bool {
        self.keys_down.values().any(|held| *held == Some(control))
    }

    //--- Bindings ---------------------------------------------------------

    /// Mutable access to the binding table.
    ///
    /// Changing bindings does not touch controls that are already held;
    /// keys already down keep driving the control they pressed until
    /// released.
    pub fn bindings_mut(&mut self) -> &mut ControlBindings {
        &mut self.bindings
    }

    pub fn bindings(&self) -> &ControlBindings {
        &self.bindings
    }

    //--- Queries ----------------------------------------------------------

    /// The held-control set, for the simulator.
    pub fn controls(&self) -> &ControlState {
        &self.controls
    }

    /// This frame's deltas.
    pub fn frame(&self) -> &FrameInput {
        &self.frame
    }

    /// Returns `true` while the physical key is down, bound or not.
    pub fn is_key_down(&self, key: KeyCode) -> bool {
        self.keys_down.contains_key(&key)
    }
}

impl Default for InputSystem {
    fn default() -> Self {
        Self::new(ControlBindings::default())
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
