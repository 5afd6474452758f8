use crate::airport::{Airport, Event};
use crate::config::SimulationConfig;
use crate::plane::PlaneId;
use crate::time::Tick;
use tracing::{debug, info, trace, warn};

/// Injects one plane per tick until the budget is spent, then keeps ticking
/// until the waiting queue drains.
pub struct Simulation {
    airport: Airport,
    config: SimulationConfig,
    next_id: PlaneId,
    clock: Tick,
}

impl Simulation {
    pub fn new(config: SimulationConfig) -> Simulation {
        if config.is_degenerate() {
            warn!(
                "Fuel level {} is below the {} required for departure, every plane will divert",
                config.fuel_level, config.fuel_required_for_departure
            );
        }
        Simulation {
            airport: Airport::new(&config),
            config,
            next_id: 0,
            clock: Tick::default(),
        }
    }

    pub fn airport(&self) -> &Airport {
        &self.airport
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn clock(&self) -> Tick {
        self.clock
    }

    /// One pass of the driver loop: inject while budget remains, then tick.
    pub fn step(&mut self) -> Vec<Event> {
        if self.next_id < self.config.simulation_ticks {
            self.airport.start_new_plane(self.next_id);
        }
        let events = self.airport.tick();
        self.next_id += 1;
        self.clock += 1;
        debug_assert_eq!(
            self.airport.total_planes_created(),
            self.airport.planes_accounted(),
            "Plane conservation violated"
        );

        for event in &events {
            debug!("{} {}", self.clock, event);
        }
        trace!(
            "{} waiting={} runway={:?} departed={} diverted={}",
            self.clock,
            self.airport.waiting().len(),
            self.airport.runway().map(|p| p.id()),
            self.airport.departed().len(),
            self.airport.diverted().len()
        );
        events
    }

    /// The loop runs at least once, even with an empty injection budget.
    pub fn is_finished(&self) -> bool {
        self.clock > Tick(0)
            && self.next_id >= self.config.simulation_ticks
            && self.airport.waiting().is_empty()
    }

    /// Steps until finished. Calling it again on a finished run is a no-op.
    pub fn run(&mut self) -> u64 {
        while !self.is_finished() {
            self.step();
        }
        info!(
            "Simulation finished after {} ticks: {} created, {} departed, {} diverted",
            self.clock.0,
            self.airport.total_planes_created(),
            self.airport.departed().len(),
            self.airport.diverted().len()
        );
        self.clock.0
    }
}
