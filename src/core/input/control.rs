//=========================================================================
// Controls
//=========================================================================
//
// The simulator's control vocabulary.
//
// Controls are the only thing gameplay code reasons about. Physical keys
// reach them through `ControlBindings`; the aggregator never sees a
// `KeyCode`.
//
// Two kinds exist:
// - Held controls are polled every frame while active (thrust, strafe).
// - Edge controls fire a one-shot `ControlSignal` on press (mode toggle,
//   instructions). They are still tracked as held so that auto-repeat
//   does not re-fire them.
//
//=========================================================================

//=== Control =============================================================

/// A discrete control identifier.
///
/// ```
/// use void_runner::prelude::*;
///
/// assert!(Control::Forward.is_held());
/// assert_eq!(Control::ToggleMode.signal(), Some(ControlSignal::ToggleMode));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    /// Walk forward / thrust forward.
    Forward,

    /// Walk backward / reverse thrusters.
    Back,

    StrafeLeft,
    StrafeRight,

    /// Flight only.
    Ascend,

    /// Flight only.
    Descend,

    /// Flip between flight and walking.
    ToggleMode,

    /// Bring up the instructions overlay and release the pointer.
    ShowInstructions,
}

impl Control {
    /// Every control, in declaration order.
    pub const ALL: [Control; 8] = [
        Control::Forward,
        Control::Back,
        Control::StrafeLeft,
        Control::StrafeRight,
        Control::Ascend,
        Control::Descend,
        Control::ToggleMode,
        Control::ShowInstructions,
    ];

    /// Returns `true` for controls polled every frame while active.
    #[inline]
    pub const fn is_held(self) -> bool {
        self.signal().is_none()
    }

    /// Returns the one-shot signal an edge control fires on press.
    #[inline]
    pub const fn signal(self) -> Option<ControlSignal> {
        match self {
            Control::ToggleMode => Some(ControlSignal::ToggleMode),
            Control::ShowInstructions => Some(ControlSignal::ShowInstructions),
            _ => None,
        }
    }
}

//=== ControlSignal =======================================================

/// One-shot action produced by the press edge of an edge control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlSignal {
    ToggleMode,
    ShowInstructions,
}

//=========================================================================
// Unit Tests
//=========================================================================
