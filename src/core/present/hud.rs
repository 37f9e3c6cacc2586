//=========================================================================
// HUD Readout
//=========================================================================
//
// Display strings for the cockpit HUD. Presentation only: nothing here
// feeds back into the simulation.
//
//=========================================================================

use std::fmt;

use crate::core::sim::{Mode, ShipTelemetry};

/// What the HUD shows for one frame. The cockpit panels only make sense
/// at the helm; on foot the HUD switches to the walking banner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HudReadout {
    Flight(FlightReadout),
    Walking,
}

impl HudReadout {
    pub fn new(mode: Mode, telemetry: &ShipTelemetry) -> Self {
        match mode {
            Mode::Flight => Self::Flight(FlightReadout::new(telemetry)),
            Mode::Walking => Self::Walking,
        }
    }

    #[inline]
    pub fn mode(&self) -> Mode {
        match self {
            Self::Flight(_) => Mode::Flight,
            Self::Walking => Mode::Walking,
        }
    }
}

impl fmt::Display for HudReadout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flight(panels) => write!(f, "{} | {}", Mode::Flight.label(), panels),
            Self::Walking => write!(
                f,
                "{} | EXPLORING SHIP INTERIOR | WASD to move \u{2022} Mouse to look",
                Mode::Walking.label()
            ),
        }
    }
}

//--- Flight panels -------------------------------------------------------

/// Formatted cockpit gauges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlightReadout {
    pub speed: String,
    pub throttle: String,
    pub shields: String,
    pub hull: String,
    pub fuel: String,
    pub pitch: String,
    pub yaw: String,
    pub roll: String,
}

impl FlightReadout {
    pub fn new(telemetry: &ShipTelemetry) -> Self {
        Self {
            speed: format!("{:.0} m/s", telemetry.speed),
            throttle: format!("{:.0}%", telemetry.throttle),
            shields: format!("{:.0}%", telemetry.shields),
            hull: format!("{:.0}%", telemetry.hull),
            fuel: format!("{:.1}%", telemetry.fuel),
            pitch: format!("{:.1}°", telemetry.pitch),
            yaw: format!("{:.1}°", telemetry.yaw),
            roll: format!("{:.1}°", telemetry.roll),
        }
    }
}

impl fmt::Display for FlightReadout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "VEL {} | THR {} | SHD {} | HUL {} | FUEL {} | P {} Y {} R {}",
            self.speed,
            self.throttle,
            self.shields,
            self.hull,
            self.fuel,
            self.pitch,
            self.yaw,
            self.roll
        )
    }
}

/// Instructions panel text.
pub const INSTRUCTIONS: &str = "\
VOID RUNNER - SPACE EXPLORATION SIMULATOR
FLIGHT: W/S throttle forward/reverse, A/D strafe, SPACE/SHIFT ascend/descend, MOUSE look
WALKING: WASD walk around ship, MOUSE look
GENERAL: TAB toggle flight/walking mode, ESC show this menu
Click to launch the simulation";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::sim::TelemetryConfig;

    #[test]
    fn launch_readout() {
        let telemetry = ShipTelemetry::new(&TelemetryConfig::default());
        let hud = HudReadout::new(Mode::Flight, &telemetry);

        assert_eq!(hud.mode(), Mode::Flight);
        let HudReadout::Flight(panels) = hud else {
            panic!("flight mode must show the cockpit panels");
        };
        assert_eq!(panels.throttle, "0%");
        assert_eq!(panels.fuel, "87.3%");
        assert_eq!(panels.shields, "100%");
        assert_eq!(panels.pitch, "0.0°");
    }

    #[test]
    fn flight_line_contains_every_field() {
        let mut telemetry = ShipTelemetry::new(&TelemetryConfig::default());
        telemetry.speed = 995.0;
        telemetry.throttle = 99.5;
        telemetry.yaw = -12.34;

        let line = HudReadout::new(Mode::Flight, &telemetry).to_string();
        assert!(line.starts_with("FLIGHT CONTROL | VEL 995 m/s"));
        assert!(line.contains("THR 100%"));
        assert!(line.contains("Y -12.3°"));
    }

    #[test]
    fn walking_hides_the_cockpit_panels() {
        let mut telemetry = ShipTelemetry::new(&TelemetryConfig::default());
        telemetry.speed = 995.0;

        let hud = HudReadout::new(Mode::Walking, &telemetry);
        assert_eq!(hud, HudReadout::Walking);

        let line = hud.to_string();
        assert_eq!(
            line,
            "EVA WALKING | EXPLORING SHIP INTERIOR | WASD to move \u{2022} Mouse to look"
        );
        assert!(!line.contains("VEL"));
        assert!(!line.contains("FUEL"));
    }
}
