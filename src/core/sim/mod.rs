//=========================================================================
// Simulation
//=========================================================================
//
// Motion and telemetry for the cockpit.
//
// Architecture:
// ```text
//   Simulator (per frame: engagement, signals, mouse look)
//     └─► MotionUpdater (mode dispatch)
//           ├─► WalkingModel  (damped, view relative, confined)
//           ├─► FlightModel   (clamped thrust, drag)
//           └─► ShipTelemetry (speed, throttle, fuel, attitude)
// ```
//
//=========================================================================

//=== Module Declarations =================================================

mod config;
mod flight;
mod mode;
mod simulator;
mod telemetry;
mod updater;
mod view;
mod walking;

//=== Public API ==========================================================

pub use config::{FlightConfig, SimConfig, TelemetryConfig, ViewConfig, WalkingConfig};
pub use flight::FlightModel;
pub use mode::Mode;
pub use simulator::Simulator;
pub use telemetry::ShipTelemetry;
pub use updater::{sanitize_delta, MotionOutcome, MotionUpdater, MAX_DELTA};
pub use view::{Attitude, ViewOrientation};
pub use walking::{confine, WalkingModel};
