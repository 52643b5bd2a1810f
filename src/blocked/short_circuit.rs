/// Number of tiles a short-circuiting probe lets through before it fires.
pub const MAX_SHORTCIRCUIT: u32 = 2;

/// Probe that lets a blocked routine stop after a fixed number of tiles.
///
/// Blocked routines call [`ShortCircuit::check`] once on entry to every
/// tile and return straight away when it says stop, leaving the remaining
/// tiles untouched. That makes partial results deterministic, which is
/// handy when checking that tiles land where they should.
///
/// An enabled probe answers continue [`MAX_SHORTCIRCUIT`] times, then stop
/// once, and then starts over. A disabled probe always continues and never
/// changes state. The probe is owned by the caller, so separate runs never
/// share a count unless the caller hands them the same probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortCircuit {
    enabled: bool,
    remaining: u32,
}

impl ShortCircuit {
    /// Probe that stops every `MAX_SHORTCIRCUIT + 1`-th tile entry.
    pub fn enabled() -> Self {
        Self {
            enabled: true,
            remaining: MAX_SHORTCIRCUIT,
        }
    }

    /// Probe that never stops.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            remaining: MAX_SHORTCIRCUIT,
        }
    }

    /// Returns `true` when the caller should stop.
    #[inline]
    pub fn check(&mut self) -> bool {
        if !self.enabled {
            return false;
        }
        if self.remaining == 0 {
            self.remaining = MAX_SHORTCIRCUIT;
            return true;
        }
        self.remaining -= 1;
        false
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Tile entries left before the next stop.
    pub fn remaining(&self) -> u32 {
        self.remaining
    }
}

/// Follows the `short-circuit` cargo feature.
impl Default for ShortCircuit {
    fn default() -> Self {
        if cfg!(feature = "short-circuit") {
            Self::enabled()
        } else {
            Self::disabled()
        }
    }
}
