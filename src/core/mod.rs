//=========================================================================
// Core
//=========================================================================
//
// Platform-independent systems.
//
// Architecture:
// ```text
//   frame::FrameLoop
//     ├─► input::InputSystem     (keys → controls, signals, mouse delta)
//     ├─► sim::Simulator         (motion, telemetry, engagement)
//     └─► present::Presenter     (frame view, overlay, viewport)
// ```
//
//=========================================================================

//=== Module Declarations =================================================

pub mod frame;
pub mod input;
pub mod present;
pub mod sim;
