//=========================================================================
// Input Buffer
//
// Collects converted input between two redraws, split into discrete and
// continuous categories.
//
// Responsibilities:
// - Keep discrete inputs (keys, buttons, focus) in arrival order
// - Coalesce relative mouse motion into one summed event
// - Hand both over as one batch via `drain()`
//
// Notes:
// Motion is summed rather than replaced: mouse look is relative, so
// dropping intermediate deltas would lose rotation.
//=========================================================================

//=== Internal Modules ====================================================

use crate::core::input::event::InputEvent;

//=== InputBuffer =========================================================

/// Transient event store for one frame of input.
#[derive(Debug)]
pub(crate) struct InputBuffer {
    discrete: Vec<InputEvent>,
    motion: Option<(f32, f32)>,
}

impl InputBuffer {
    //--- Construction -----------------------------------------------------

    pub(crate) fn new() -> Self {
        const DISCRETE_BASE: usize = 32;

        Self {
            discrete: Vec::with_capacity(DISCRETE_BASE),
            motion: None,
        }
    }

    //--- Event Handling ---------------------------------------------------

    /// Appends a discrete input. Continuous events are routed to motion.
    pub(crate) fn push(&mut self, event: InputEvent) {
        match event {
            InputEvent::MouseMotion { dx, dy } => self.push_motion(dx, dy),
            InputEvent::Unidentified => {}
            _ => self.discrete.push(event),
        }
    }

    /// Adds relative motion to this frame's total.
    pub(crate) fn push_motion(&mut self, dx: f32, dy: f32) {
        let (x, y) = self.motion.get_or_insert((0.0, 0.0));
        *x += dx;
        *y += dy;
    }

    //--- Drain ------------------------------------------------------------

    /// Returns `(discrete, continuous)` and empties the buffer, or `None`
    /// when nothing arrived this frame.
    pub(crate) fn drain(&mut self) -> Option<(Vec<InputEvent>, Vec<InputEvent>)> {
        if self.is_empty() {
            return None;
        }

        let discrete = std::mem::take(&mut self.discrete);
        let continuous = self
            .motion
            .take()
            .map(|(dx, dy)| vec![InputEvent::MouseMotion { dx, dy }])
            .unwrap_or_default();

        Some((discrete, continuous))
    }

    //--- Utilities --------------------------------------------------------

    pub(crate) fn len(&self) -> usize {
        self.discrete.len() + usize::from(self.motion.is_some())
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.discrete.is_empty() && self.motion.is_none()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
