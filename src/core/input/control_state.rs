//=========================================================================
// Control State
//=========================================================================
//
// The set of currently-held controls.
//
// Architecture:
//   press()/release() → HashSet<Control> → is_active()
//
// Owned by the frame loop and lent to the simulator by shared reference
// once per tick. Edge controls report their signal only on the UP → DOWN
// transition, so key auto-repeat never re-fires a toggle.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashSet;
use std::fmt;

//=== Internal Dependencies ===============================================

use super::control::{Control, ControlSignal};

//=== ControlState ========================================================

/// Held-control set (the input aggregator).
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ControlState {
    active: HashSet<Control>,
}

impl ControlState {
    /// Creates an empty state (nothing held).
    pub fn new() -> Self {
        Self {
            active: HashSet::with_capacity(Control::ALL.len()),
        }
    }

    //--- Mutation ---------------------------------------------------------

    /// Marks a control as held.
    ///
    /// Returns the control's one-shot signal if this press is a new
    /// transition and the control is edge-triggered; `None` otherwise.
    pub fn press(&mut self, control: Control) -> Option<ControlSignal> {
        if self.active.insert(control) {
            control.signal()
        } else {
            None
        }
    }

    /// Marks a control as released. Returns `true` if it was held.
    pub fn release(&mut self, control: Control) -> bool {
        self.active.remove(&control)
    }

    /// Releases everything.
    pub fn clear(&mut self) {
        self.active.clear();
    }

    //--- Queries ----------------------------------------------------------

    /// Returns `true` while the control is held.
    #[inline]
    pub fn is_active(&self, control: Control) -> bool {
        self.active.contains(&control)
    }

    /// Signed axis from a pair of opposing controls: `+1` if only
    /// `positive` is held, `-1` if only `negative` is, `0` otherwise.
    pub fn axis(&self, negative: Control, positive: Control) -> f32 {
        let mut value = 0.0;
        if self.is_active(positive) {
            value += 1.0;
        }
        if self.is_active(negative) {
            value -= 1.0;
        }
        value
    }

    /// Iterates over held controls in no particular order.
    pub fn active(&self) -> impl Iterator<Item = Control> + '_ {
        self.active.iter().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}

impl fmt::Debug for ControlState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut held: Vec<_> = self.active.iter().map(|c| format!("{:?}", c)).collect();
        held.sort();
        f.debug_struct("ControlState").field("held", &held).finish()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
