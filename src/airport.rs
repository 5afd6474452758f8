use crate::config::SimulationConfig;
use crate::plane::{Plane, PlaneId};
use std::collections::VecDeque;
use std::fmt;
use std::fmt::Formatter;

#[cfg(test)]
mod tests;

/// A plane leaving one container for another.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    Admitted { id: PlaneId, fuel: i64 },
    Diverted { id: PlaneId, fuel: i64 },
    Departed { id: PlaneId, fuel: i64 },
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Event::Admitted { id, fuel } => write!(f, "plane {} lined up on the runway with fuel {}", id, fuel),
            Event::Diverted { id, fuel } => write!(f, "plane {} diverted, fuel {} is not enough", id, fuel),
            Event::Departed { id, fuel } => write!(f, "plane {} departed with fuel {}", id, fuel),
        }
    }
}

pub struct Airport {
    waiting: VecDeque<Plane>,
    runway: Option<Plane>,
    departed: Vec<Plane>,
    diverted: Vec<Plane>,
    fuel_level: i64,
    departure_threshold: u32,
    fuel_required_for_departure: i64,
    total_planes_created: u64,
}

impl Airport {
    pub fn new(config: &SimulationConfig) -> Airport {
        Airport {
            waiting: VecDeque::new(),
            runway: None,
            departed: vec![],
            diverted: vec![],
            fuel_level: config.fuel_level,
            departure_threshold: config.departure_threshold,
            fuel_required_for_departure: config.fuel_required_for_departure,
            total_planes_created: 0,
        }
    }

    pub fn start_new_plane(&mut self, id: PlaneId) {
        self.waiting.push_back(Plane::new(id, self.fuel_level));
        self.total_planes_created += 1;
    }

    pub fn is_runway_empty(&self) -> bool {
        self.runway.is_none()
    }

    pub fn release_runway(&mut self) -> Option<Plane> {
        self.runway.take()
    }

    pub fn decrement_fuel_of_waiting_planes(&mut self) {
        self.waiting.iter_mut().for_each(Plane::decrement_fuel);
    }

    /// Pops planes off the head of the queue until one has enough fuel to take
    /// the runway. Every plane popped before it is diverted for good.
    pub fn admit_from_queue(&mut self) -> Vec<Event> {
        let mut events = vec![];
        if !self.is_runway_empty() {
            return events;
        }
        while let Some(plane) = self.waiting.pop_front() {
            if plane.fuel() >= self.fuel_required_for_departure {
                events.push(Event::Admitted { id: plane.id(), fuel: plane.fuel() });
                self.runway = Some(plane);
                break;
            }
            events.push(Event::Diverted { id: plane.id(), fuel: plane.fuel() });
            self.diverted.push(plane);
        }
        events
    }

    pub fn advance_runway_occupant(&mut self) -> Option<Event> {
        let plane = self.runway.as_mut()?;
        if plane.queue_wait_ticks() < self.departure_threshold {
            plane.increment_queue_wait_ticks();
            return None;
        }
        let plane = self.release_runway()?;
        let event = Event::Departed { id: plane.id(), fuel: plane.fuel() };
        self.departed.push(plane);
        Some(event)
    }

    /// Advances the airport by one tick. Fuel burns first, so a plane
    /// admitted this tick has already lost its fuel for the tick. Admission
    /// runs before the runway step, so the new occupant's wait counter goes
    /// from 1 to 2 within the same tick.
    pub fn tick(&mut self) -> Vec<Event> {
        self.decrement_fuel_of_waiting_planes();
        let mut events = self.admit_from_queue();
        events.extend(self.advance_runway_occupant());
        events
    }

    pub fn waiting(&self) -> &VecDeque<Plane> {
        &self.waiting
    }

    pub fn runway(&self) -> Option<&Plane> {
        self.runway.as_ref()
    }

    pub fn departed(&self) -> &[Plane] {
        &self.departed
    }

    /// Planes diverted for insufficient fuel, in diversion order.
    pub fn diverted(&self) -> &[Plane] {
        &self.diverted
    }

    pub fn total_planes_created(&self) -> u64 {
        self.total_planes_created
    }

    pub fn planes_accounted(&self) -> u64 {
        (self.waiting.len() + self.departed.len() + self.diverted.len()) as u64
            + self.runway.is_some() as u64
    }
}
