use crate::airport::Airport;
use crate::config::SimulationConfig;
use crate::plane::{Plane, PlaneId};

pub fn airport(fuel_level: i64, fuel_required_for_departure: i64, departure_threshold: u32) -> Airport {
    Airport::new(&SimulationConfig {
        simulation_ticks: SimulationConfig::SIMULATION_TICKS,
        fuel_level,
        fuel_required_for_departure,
        departure_threshold,
    })
}

/// Queues a plane with an arbitrary fuel reading, bypassing the airport's fuel level.
pub fn enqueue(airport: &mut Airport, id: PlaneId, fuel: i64) {
    airport.waiting.push_back(Plane::new(id, fuel));
    airport.total_planes_created += 1;
}

pub fn occupy_runway(airport: &mut Airport, id: PlaneId, fuel: i64) {
    airport.runway = Some(Plane::new(id, fuel));
    airport.total_planes_created += 1;
}

pub fn ids<'a>(planes: impl IntoIterator<Item = &'a Plane>) -> Vec<PlaneId> {
    planes.into_iter().map(Plane::id).collect()
}

pub fn fuels<'a>(planes: impl IntoIterator<Item = &'a Plane>) -> Vec<i64> {
    planes.into_iter().map(Plane::fuel).collect()
}
