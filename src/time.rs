use serde::Serialize;
use std::ops::AddAssign;

/// Simulation clock, counted in executed ticks.
#[derive(Debug, Clone, Copy, Default, Ord, Eq, PartialEq, Serialize, PartialOrd)]
pub struct Tick(pub u64);

impl std::fmt::Display for Tick {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "T+{:04}", self.0)
    }
}

impl AddAssign<u64> for Tick {
    fn add_assign(&mut self, rhs: u64) {
        self.0 += rhs;
    }
}
