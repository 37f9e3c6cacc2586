//=========================================================================
// Input
//=========================================================================
//
// Keyboard and mouse handling for the simulator.
//
// Architecture:
// ```text
//   InputEvent ──► InputSystem ──► ControlBindings (KeyCode → Control)
//                      │
//                      ├──► ControlState   (held controls, polled per tick)
//                      └──► FrameInput     (edge signals, mouse delta)
// ```
//
//=========================================================================

//=== Module Declarations =================================================

mod bindings;
mod control;
mod control_state;
pub mod event;
mod input_system;

//=== Public API ==========================================================

pub use bindings::ControlBindings;
pub use control::{Control, ControlSignal};
pub use control_state::ControlState;
pub use event::{InputEvent, KeyCode, MouseButton};
pub use input_system::{FrameInput, InputSystem};
