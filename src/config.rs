use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("simulation ticks must not be negative (got {0})")]
    NegativeTicks(i64),
    #[error("fuel required for departure must be positive (got {0})")]
    NonPositiveFuelRequirement(i64),
    #[error("departure threshold must be a positive tick count (got {0})")]
    NonPositiveDepartureThreshold(i64),
}

/// Constants driving a single simulation run.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    /// Number of planes injected, one per tick, before the driver only drains.
    pub simulation_ticks: u64,
    /// Fuel handed to every new plane.
    pub fuel_level: i64,
    pub fuel_required_for_departure: i64,
    /// Ticks a plane must hold the runway before it departs.
    pub departure_threshold: u32,
}

impl SimulationConfig {
    pub const SIMULATION_TICKS: u64 = 50;
    pub const FUEL_LEVEL: i64 = 150;
    pub const FUEL_REQUIRED_FOR_DEPARTURE: i64 = 100;
    pub const DEPARTURE_THRESHOLD: u32 = 3;

    pub fn from_raw(
        simulation_ticks: i64,
        fuel_level: i64,
        fuel_required_for_departure: i64,
        departure_threshold: i64,
    ) -> Result<Self, ConfigError> {
        let simulation_ticks = u64::try_from(simulation_ticks)
            .map_err(|_| ConfigError::NegativeTicks(simulation_ticks))?;
        if fuel_required_for_departure <= 0 {
            return Err(ConfigError::NonPositiveFuelRequirement(
                fuel_required_for_departure,
            ));
        }
        let departure_threshold = u32::try_from(departure_threshold)
            .ok()
            .filter(|t| *t > 0)
            .ok_or(ConfigError::NonPositiveDepartureThreshold(departure_threshold))?;

        Ok(SimulationConfig {
            simulation_ticks,
            fuel_level,
            fuel_required_for_departure,
            departure_threshold,
        })
    }

    /// No plane can ever meet the fuel requirement, so every plane diverts.
    pub fn is_degenerate(&self) -> bool {
        self.fuel_level < self.fuel_required_for_departure
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            simulation_ticks: Self::SIMULATION_TICKS,
            fuel_level: Self::FUEL_LEVEL,
            fuel_required_for_departure: Self::FUEL_REQUIRED_FOR_DEPARTURE,
            departure_threshold: Self::DEPARTURE_THRESHOLD,
        }
    }
}
