//=========================================================================
// Input Event Types
//
// Defines the internal representation of low-level input events.
//
// This module abstracts away platform-specific input (e.g. Winit) into a
// unified, simulator-friendly format used by the input subsystem.
//
// Responsibilities:
// - Represent keyboard and mouse inputs in a stable, portable way
// - Keep mouse look as raw relative motion (not cursor position)
//
// Event Flow:
// ```text
// Platform Layer (Winit)
//         ↓
//    InputEvent (this module)
//         ↓
//    InputSystem (bindings → ControlState)
//         ↓
//    Simulator (motion & telemetry)
// ```
//
//=========================================================================

//=== MouseButton =========================================================

/// Physical mouse button identifier.
///
/// Only the primary button carries meaning (it captures the pointer and
/// hands control to the pilot); the rest are kept so the platform layer
/// never has to drop information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary button (typically left).
    Left,

    /// Secondary button (typically right).
    Right,

    /// Middle button (wheel click).
    Middle,

    /// Any other button (side buttons, thumb buttons, macro keys).
    Other,
}

//=== KeyCode =============================================================

/// Physical keyboard key identifier.
///
/// Represents the physical key location, not the character produced, so
/// WASD stays under the same fingers on AZERTY layouts.
///
/// Left and right Shift are distinct keys here: both descend in flight,
/// and releasing one while the other is still held must not stop the
/// descent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    //--- Numeric Keys -----------------------------------------------------

    /// Number row: 0-9
    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,

    //--- Alphabetic Keys --------------------------------------------------

    /// Letter keys: A-Z (physical location, not character)
    KeyA, KeyB, KeyC, KeyD, KeyE, KeyF, KeyG, KeyH, KeyI,
    KeyJ, KeyK, KeyL, KeyM, KeyN, KeyO, KeyP, KeyQ, KeyR,
    KeyS, KeyT, KeyU, KeyV, KeyW, KeyX, KeyY, KeyZ,

    //--- Arrow Keys -------------------------------------------------------

    ArrowDown,
    ArrowLeft,
    ArrowRight,
    ArrowUp,

    //--- Special Keys -----------------------------------------------------

    Space,
    Enter,
    Escape,
    Tab,
    Backspace,
    Delete,
    ShiftLeft,
    ShiftRight,

    /// Fallback for keys the platform reports but the simulator does not
    /// name. Never bound.
    Unidentified,
}

//=== InputEvent ==========================================================

/// Low-level input event from the platform layer.
///
/// - **KeyDown/KeyUp**: Discrete keyboard events. Auto-repeat arrives as
///   repeated `KeyDown` and is harmless, since held controls form a set.
/// - **MouseButtonDown/MouseButtonUp**: Discrete mouse button events.
/// - **MouseMotion**: Raw relative motion in device counts, used for
///   mouse look. Several motions within a frame are summed by the
///   platform buffer.
/// - **FocusLost**: The pointer is no longer captured.
/// - **Unidentified**: Unknown/unsupported events (ignored).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Key pressed down (or auto-repeated).
    KeyDown { key: KeyCode },

    /// Key released.
    KeyUp { key: KeyCode },

    /// Mouse button pressed.
    MouseButtonDown { button: MouseButton },

    /// Mouse button released.
    MouseButtonUp { button: MouseButton },

    /// Relative pointer motion since the previous report.
    MouseMotion { dx: f32, dy: f32 },

    /// The window lost keyboard focus; any pointer capture is gone.
    FocusLost,

    /// Unrecognized or unsupported event.
    Unidentified,
}

impl InputEvent {
    /// Returns `true` for events whose order matters within a frame
    /// (keys, buttons, focus), as opposed to accumulated motion.
    pub fn is_discrete(&self) -> bool {
        matches!(
            self,
            Self::KeyDown { .. }
                | Self::KeyUp { .. }
                | Self::MouseButtonDown { .. }
                | Self::MouseButtonUp { .. }
                | Self::FocusLost
        )
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
