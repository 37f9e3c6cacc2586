//=========================================================================
// Void Runner Engine
//
// Main entry point and coordinator.
//
// Architecture:
// ```text
//     EngineBuilder  ──build()──>  Engine  ──run()──>  [Runtime]
//         │                          │
//         ├─ with_channel_capacity() └─ opens channel
//         ├─ with_max_frame_delta()     builds frame loop
//         ├─ with_config()              runs platform
//         └─ with_bindings()            blocks until exit
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

use crossbeam_channel::{bounded, Receiver, Sender};
use log::info;

//=== Internal Dependencies ===============================================

use crate::core::frame::{FrameClock, FrameLoop, PlatformError, PlatformEvent};
use crate::core::input::{ControlBindings, InputSystem};
use crate::core::sim::{SimConfig, Simulator};
use crate::platform::Platform;

//=== EngineBuilder =======================================================

/// Builder for configuring and constructing an [`Engine`].
///
/// # Default Values
///
/// - **Channel capacity**: 16 batches
/// - **Max frame delta**: 100 ms
/// - **Simulation**: [`SimConfig::default`]
/// - **Bindings**: [`ControlBindings::default`] (WASD, Space, Shift, Tab, Esc)
///
/// # Examples
///
/// ```no_run
/// use std::time::Duration;
/// use void_runner::prelude::*;
///
/// let config = SimConfig::default().with_initial_fuel(100.0);
///
/// EngineBuilder::new()
///     .with_config(config)
///     .with_max_frame_delta(Duration::from_millis(50))
///     .build()
///     .run()
///     .expect("simulator failed");
/// ```
#[derive(Debug, Clone)]
pub struct EngineBuilder {
    channel_capacity: usize,
    max_frame_delta: Duration,
    config: SimConfig,
    bindings: ControlBindings,
}

impl EngineBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            channel_capacity: 16,
            max_frame_delta: Duration::from_millis(100),
            config: SimConfig::default(),
            bindings: ControlBindings::default(),
        }
    }

    /// Sets the channel capacity for platform → frame loop batches.
    ///
    /// One batch is sent per redraw and drained in the same redraw, so a
    /// small capacity is enough.
    ///
    /// Default: 16
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Channel capacity must be positive");
        self.channel_capacity = capacity;
        self
    }

    /// Caps the measured frame delta.
    ///
    /// Default: 100 ms
    ///
    /// # Panics
    ///
    /// Panics if `max_delta` is zero.
    pub fn with_max_frame_delta(mut self, max_delta: Duration) -> Self {
        assert!(!max_delta.is_zero(), "Max frame delta must be positive");
        self.max_frame_delta = max_delta;
        self
    }

    /// Replaces the simulation constants.
    pub fn with_config(mut self, config: SimConfig) -> Self {
        self.config = config;
        self
    }

    /// Replaces the key bindings.
    pub fn with_bindings(mut self, bindings: ControlBindings) -> Self {
        self.bindings = bindings;
        self
    }

    /// Builds the engine instance.
    pub fn build(self) -> Engine {
        info!(
            "Building engine (channel: {}, max frame delta: {:?})",
            self.channel_capacity, self.max_frame_delta
        );

        Engine {
            channel_capacity: self.channel_capacity,
            max_frame_delta: self.max_frame_delta,
            config: self.config,
            bindings: self.bindings,
        }
    }
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== Engine ==============================================================

/// Void Runner runtime.
///
/// # Architecture
///
/// ```text
/// Engine (Main Thread)
///   └─► Platform (Event Loop, window, input)
///         └─► FrameLoop (one tick per redraw)
///               ├─► InputSystem
///               └─► Simulator
///
/// Platform → FrameLoop: bounded channel (PlatformEvent)
/// ```
#[derive(Debug)]
pub struct Engine {
    channel_capacity: usize,
    max_frame_delta: Duration,
    config: SimConfig,
    bindings: ControlBindings,
}

impl Engine {
    /// Opens the window and runs until it closes.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError`] if the event loop or the window cannot be
    /// created, or if the event loop fails.
    pub fn run(self) -> Result<(), PlatformError> {
        info!("Starting engine runtime");

        //--- 1. Create communication channel -----------------------------
        let (tx, rx): (Sender<PlatformEvent>, Receiver<PlatformEvent>) =
            bounded(self.channel_capacity);

        //--- 2. Assemble the frame loop -----------------------------------
        let frame_loop = FrameLoop::new(
            rx,
            InputSystem::new(self.bindings),
            Simulator::new(self.config),
            FrameClock::new(self.max_frame_delta),
        );

        //--- 3. Launch the platform subsystem -----------------------------
        let result = Platform::new(tx, frame_loop).run();

        info!("Engine shutdown complete");
        result
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::{Control, KeyCode};

    #[test]
    fn builder_defaults() {
        let builder = EngineBuilder::new();
        assert_eq!(builder.channel_capacity, 16);
        assert_eq!(builder.max_frame_delta, Duration::from_millis(100));
        assert_eq!(builder.config, SimConfig::default());
    }

    #[test]
    fn builder_with_channel_capacity() {
        let builder = EngineBuilder::new().with_channel_capacity(64);
        assert_eq!(builder.channel_capacity, 64);
    }

    #[test]
    #[should_panic(expected = "Channel capacity must be positive")]
    fn builder_with_channel_capacity_panics_on_zero() {
        EngineBuilder::new().with_channel_capacity(0);
    }

    #[test]
    #[should_panic(expected = "Max frame delta must be positive")]
    fn builder_with_max_frame_delta_panics_on_zero() {
        EngineBuilder::new().with_max_frame_delta(Duration::ZERO);
    }

    #[test]
    fn builder_fluent_api_chaining() {
        let mut bindings = ControlBindings::default();
        bindings.bind_key(KeyCode::ArrowUp, Control::Forward);

        let engine = EngineBuilder::new()
            .with_channel_capacity(8)
            .with_max_frame_delta(Duration::from_millis(33))
            .with_config(SimConfig::default().with_initial_fuel(50.0))
            .with_bindings(bindings)
            .build();

        assert_eq!(engine.channel_capacity, 8);
        assert_eq!(engine.max_frame_delta, Duration::from_millis(33));
        assert_eq!(engine.config.telemetry.initial_fuel, 50.0);
        assert_eq!(engine.bindings.control_for(KeyCode::ArrowUp), Some(Control::Forward));
    }
}
