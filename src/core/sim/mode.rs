//=========================================================================
// Mode
//=========================================================================

use std::fmt;

/// Which control scheme is live.
///
/// Flipped only by the edge-triggered toggle; both directions are always
/// legal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// Piloting the ship.
    #[default]
    Flight,

    /// Walking around the cockpit.
    Walking,
}

impl Mode {
    /// Returns the other mode.
    #[inline]
    pub const fn toggled(self) -> Self {
        match self {
            Mode::Flight => Mode::Walking,
            Mode::Walking => Mode::Flight,
        }
    }

    /// HUD label.
    pub const fn label(self) -> &'static str {
        match self {
            Mode::Flight => "FLIGHT CONTROL",
            Mode::Walking => "EVA WALKING",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
