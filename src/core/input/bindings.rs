//=========================================================================
// Control Bindings
//=========================================================================
//
// Maps physical keys to controls.
//
// Architecture:
//   KeyCode → HashMap → Control
//
// Several keys may drive one control (both Shift keys descend); a key
// drives at most one control.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;

use log::debug;

//=== Internal Dependencies ===============================================

use super::{control::Control, event::KeyCode};

//=== ControlBindings =====================================================

/// Key → control lookup table.
#[derive(Debug, Clone)]
pub struct ControlBindings {
    keys: HashMap<KeyCode, Control>,
}

impl ControlBindings {
    /// Creates an empty table. Nothing is bound.
    pub fn empty() -> Self {
        Self {
            keys: HashMap::new(),
        }
    }

    //--- Binding API ------------------------------------------------------

    /// Binds a key to a control, replacing any previous binding of that key.
    pub fn bind_key(&mut self, key: KeyCode, control: Control) {
        if key == KeyCode::Unidentified {
            return;
        }
        if let Some(previous) = self.keys.insert(key, control) {
            if previous != control {
                debug!("Rebound {:?}: {:?} -> {:?}", key, previous, control);
            }
        }
    }

    /// Removes the binding for a key, returning the control it drove.
    pub fn unbind_key(&mut self, key: KeyCode) -> Option<Control> {
        self.keys.remove(&key)
    }

    /// Removes every key bound to a control.
    pub fn clear_control(&mut self, control: Control) {
        self.keys.retain(|_, bound| *bound != control);
    }

    //--- Lookup -----------------------------------------------------------

    /// Returns the control a key drives, if any.
    pub fn control_for(&self, key: KeyCode) -> Option<Control> {
        self.keys.get(&key).copied()
    }

    /// Iterates over every key bound to `control`.
    pub fn keys_for(&self, control: Control) -> impl Iterator<Item = KeyCode> + '_ {
        self.keys
            .iter()
            .filter(move |(_, bound)| **bound == control)
            .map(|(key, _)| *key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl Default for ControlBindings {
    /// The cockpit layout: WASD to move, Space/Shift for vertical thrust,
    /// Tab toggles mode, Escape shows the instructions.
    fn default() -> Self {
        let mut bindings = Self::empty();
        bindings.bind_key(KeyCode::KeyW, Control::Forward);
        bindings.bind_key(KeyCode::KeyS, Control::Back);
        bindings.bind_key(KeyCode::KeyA, Control::StrafeLeft);
        bindings.bind_key(KeyCode::KeyD, Control::StrafeRight);
        bindings.bind_key(KeyCode::Space, Control::Ascend);
        bindings.bind_key(KeyCode::ShiftLeft, Control::Descend);
        bindings.bind_key(KeyCode::ShiftRight, Control::Descend);
        bindings.bind_key(KeyCode::Tab, Control::ToggleMode);
        bindings.bind_key(KeyCode::Escape, Control::ShowInstructions);
        bindings
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
