//=========================================================================
// Void Runner: Library Root
//
// A frame-driven cockpit simulator: fly the ship or walk around it, with
// live speed, throttle, fuel and attitude readouts.
//
// Responsibilities:
// - Expose the engine facade (`EngineBuilder`, `Engine`)
// - Expose the platform-independent core (input, simulation, frame
//   plumbing, presentation) for embedding and testing
// - Keep the Winit integration private
//
// Typical usage:
// ```no_run
// use void_runner::EngineBuilder;
//
// fn main() {
//     EngineBuilder::new().build().run().expect("simulator failed");
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` holds every system that does not touch the OS: input mapping,
// motion and telemetry, the frame loop and the presenter contract.
//
pub mod core;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------
//
// `platform` owns the window and the Winit event loop.
// `engine` wires the platform to the frame loop.
//
mod engine;
mod platform;

//--- Public Exports ------------------------------------------------------

pub use engine::{Engine, EngineBuilder};
