//=========================================================================
// Platform Subsystem
//
// Bridges Winit (OS-level events) with the frame loop via a bounded
// crossbeam channel.
//
// Architecture:
// ```text
//  Main Thread
//  ┌──────────────────────────────────────────────────────────┐
//  │  Winit Event Loop                                        │
//  │   ↓                                                      │
//  │  InputProcessor  (Winit → InputEvent)                    │
//  │   ↓                                                      │
//  │  InputBuffer     (discrete in order, motion summed)      │
//  │   ↓                                                      │
//  │  RedrawRequested ──flush──► channel ──► FrameLoop::tick  │
//  │                                            ↓             │
//  │                                  TitlePresenter (HUD)    │
//  └──────────────────────────────────────────────────────────┘
// ```
//
// Frame Boundary: RedrawRequested
//   → All buffered input sent as one batch
//   → The frame loop ticks exactly once and presents
//   → Empty buffers are not sent
//
// Responsibilities:
// - Create and manage the OS window
// - Convert Winit types → engine InputEvents
// - Buffer input until the frame boundary
// - Drive the frame loop and keep the cursor grab in sync with it
//
//=========================================================================

//=== Submodules ==========================================================

mod input_buffer;
mod input_processor;
mod presenter;

//=== External Crates =====================================================

use crossbeam_channel::{Sender, TrySendError};
use log::*;
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::{DeviceEvent, DeviceId, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    window::{WindowAttributes, WindowId},
};

//=== Internal Imports ====================================================

use crate::core::frame::{FrameLoop, PlatformError, PlatformEvent, TickControl};
use crate::core::input::InputEvent;
use crate::core::present::{Presenter, Viewport};
use input_buffer::InputBuffer;
use input_processor::InputProcessor;
use presenter::TitlePresenter;

//=== Platform ============================================================

/// Window manager, input aggregator and frame driver.
///
/// Runs on the main thread (Winit requirement on macOS/iOS).
///
/// # Lifecycle
///
/// 1. **Construction**: `Platform::new(sender, frame_loop)`
/// 2. **Execution**: `platform.run()` blocks in the event loop
/// 3. **Frames**: every `RedrawRequested` flushes input and ticks once
/// 4. **Shutdown**: close requested → `WindowClosed` → loop stops → exit
pub(crate) struct Platform {
    /// Created lazily in `resumed()`.
    presenter: Option<TitlePresenter>,

    /// Buffers input until `RedrawRequested`.
    buffer: InputBuffer,

    /// Channel to the frame loop.
    event_sender: Sender<PlatformEvent>,

    input_processor: InputProcessor,

    frame_loop: FrameLoop,

    /// Fatal error raised inside a callback, returned from `run()`.
    error: Option<PlatformError>,
}

impl Platform {
    //--- Construction -----------------------------------------------------

    pub(crate) fn new(event_sender: Sender<PlatformEvent>, frame_loop: FrameLoop) -> Self {
        info!(target: "platform", "Platform subsystem initialized");
        Self {
            presenter: None,
            buffer: InputBuffer::new(),
            event_sender,
            input_processor: InputProcessor::new(),
            frame_loop,
            error: None,
        }
    }

    //--- Execution --------------------------------------------------------

    /// Runs the event loop until the window closes.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError`] if the event loop cannot be created or
    /// fails, or if the window cannot be opened.
    pub(crate) fn run(mut self) -> Result<(), PlatformError> {
        debug!(target: "platform", "Starting Winit event loop");

        let event_loop = EventLoop::new().map_err(PlatformError::EventLoopCreation)?;
        event_loop
            .run_app(&mut self)
            .map_err(PlatformError::EventLoopExecution)?;

        match self.error.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    //--- Internal Helpers -------------------------------------------------

    /// Sends buffered input to the frame loop as one batch.
    ///
    /// A full or disconnected channel drops the batch with a warning; the
    /// window stays responsive so it can still be closed.
    fn flush_input_buffer(&mut self) {
        let buffered = self.buffer.len();
        let Some((discrete, continuous)) = self.buffer.drain() else {
            return;
        };

        trace!(target: "platform::input", "Flushing {} buffered events", buffered);

        match self.event_sender.try_send(PlatformEvent::Inputs { discrete, continuous }) {
            Ok(()) => {}
            Err(TrySendError::Full(_)) => {
                warn!(target: "platform::input", "Channel full, dropping {} events", buffered);
            }
            Err(TrySendError::Disconnected(_)) => {
                warn!(target: "platform::input", "Channel disconnected, dropping {} events", buffered);
            }
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        self.flush_input_buffer();

        let Some(presenter) = self.presenter.as_mut() else {
            return;
        };

        if self.frame_loop.tick(presenter) == TickControl::Exit {
            event_loop.exit();
            return;
        }

        presenter.sync_cursor(self.frame_loop.simulator().is_engaged());
        presenter.window().request_redraw();
    }

    fn close(&mut self, event_loop: &ActiveEventLoop) {
        info!(target: "platform", "Window close requested");

        if self.event_sender.try_send(PlatformEvent::WindowClosed).is_ok() {
            if let Some(presenter) = self.presenter.as_mut() {
                self.frame_loop.tick(presenter);
            }
        }
        self.frame_loop.shutdown();
        event_loop.exit();
    }
}

//=== Winit Integration ===================================================

impl ApplicationHandler for Platform {
    /// Creates the window on first activation.
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.presenter.is_some() {
            debug!(target: "platform", "Window already exists (resume)");
            return;
        }

        let attrs = WindowAttributes::default()
            .with_title("Void Runner")
            .with_inner_size(LogicalSize::new(1280, 720));

        match event_loop.create_window(attrs) {
            Ok(window) => {
                info!(
                    target: "platform",
                    "Window created: {}x{} @ {}x DPI",
                    window.inner_size().width,
                    window.inner_size().height,
                    window.scale_factor()
                );
                window.request_redraw();
                self.presenter = Some(TitlePresenter::new(window));
            }
            Err(e) => {
                error!(target: "platform", "Window creation failed: {}", e);
                let _ = self.event_sender.try_send(PlatformEvent::WindowClosed);
                self.frame_loop.shutdown();
                self.error = Some(PlatformError::WindowCreation(e));
                event_loop.exit();
            }
        }
    }

    /// Handles per-window events.
    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => self.close(event_loop),

            WindowEvent::KeyboardInput { event: key_event, .. } => {
                if let Some(event) = self.input_processor.process_key_event(&key_event) {
                    self.buffer.push(event);
                } else {
                    trace!(target: "platform::input", "Unmapped key ignored");
                }
            }

            WindowEvent::MouseInput { state, button, .. } => {
                let event = self.input_processor.process_mouse_button(button, state);
                self.buffer.push(event);
            }

            WindowEvent::Focused(false) => {
                debug!(target: "platform::input", "Focus lost");
                self.buffer.push(InputEvent::FocusLost);
            }

            WindowEvent::Resized(size) => {
                if let Some(presenter) = self.presenter.as_mut() {
                    presenter.resize(Viewport::new(size.width, size.height));
                }
            }

            WindowEvent::RedrawRequested => self.redraw(event_loop),

            _ => {}
        }
    }

    /// Raw mouse motion drives the look even while the cursor is locked.
    fn device_event(&mut self, _event_loop: &ActiveEventLoop, _device_id: DeviceId, event: DeviceEvent) {
        if let DeviceEvent::MouseMotion { delta } = event {
            self.buffer.push(self.input_processor.process_mouse_motion(delta));
        }
    }
}
