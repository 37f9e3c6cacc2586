//=========================================================================
// Frame Plumbing
//=========================================================================
//
// Bridges the windowing layer with the simulation, one frame at a time.
//
// The platform batches input per redraw and sends it over a bounded
// channel; the frame loop drains it at the start of the next tick on the
// same thread. The windowing backend can be swapped without touching the
// simulation.
//
// Components:
// - `interface`: Event types and error definitions (the contract)
// - `event_collector`: Channel draining and shutdown detection
// - `clock`: Frame delta measurement
// - `frame_loop`: Tick orchestration
//
//=========================================================================

//=== Module Declarations =================================================

mod clock;
mod event_collector;
mod frame_loop;
mod interface;

//=== Public API ==========================================================

pub use clock::FrameClock;
pub use event_collector::{EventCollector, TickControl};
pub use frame_loop::FrameLoop;
pub use interface::{PlatformError, PlatformEvent};
