//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use void_runner::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Engine
pub use crate::engine::{Engine, EngineBuilder};

// Frame plumbing
pub use crate::core::frame::{FrameLoop, PlatformError, PlatformEvent, TickControl};

// Input
pub use crate::core::input::{
    Control, ControlBindings, ControlSignal, ControlState, InputEvent, KeyCode, MouseButton,
};

// Simulation
pub use crate::core::sim::{Mode, MotionOutcome, MotionUpdater, ShipTelemetry, SimConfig, Simulator};

// Presentation
pub use crate::core::present::{FrameView, HudReadout, Presenter, Viewport};
