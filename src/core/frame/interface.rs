//=========================================================================
// Frame Interface
//=========================================================================
//
// Platform-to-frame-loop interface types (events and errors).
//
// Defines the contract between the windowing layer and the frame loop.
//
//=========================================================================

//=== External Dependencies ===============================================

use thiserror::Error;

//=== Internal Dependencies ===============================================

use crate::core::input::event::InputEvent;

//=== PlatformEvent =======================================================

/// Events sent from the platform to the frame loop over the channel.
#[derive(Debug, Clone, PartialEq)]
pub enum PlatformEvent {
    /// Batched input events for a frame.
    Inputs {
        discrete: Vec<InputEvent>,
        continuous: Vec<InputEvent>,
    },

    /// Window close requested.
    WindowClosed,
}

//=== PlatformError =======================================================

/// Platform initialization and runtime errors.
///
/// All of these are fatal: without an event loop and a window there is
/// nothing to fly.
#[derive(Debug, Error)]
pub enum PlatformError {
    /// Event loop creation failed (OS-level issue).
    #[error("Event loop creation failed: {0}")]
    EventLoopCreation(#[source] winit::error::EventLoopError),

    /// Event loop execution error.
    #[error("Event loop error: {0}")]
    EventLoopExecution(#[source] winit::error::EventLoopError),

    /// The window could not be opened.
    #[error("Window creation failed: {0}")]
    WindowCreation(#[source] winit::error::OsError),
}
