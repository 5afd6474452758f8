use std::fmt;
use std::fmt::Formatter;
use tabled::Tabled;

pub type PlaneId = u64;

#[derive(Clone, Debug, PartialEq, Tabled)]
pub struct Plane {
    #[tabled(rename = "plane")]
    id: PlaneId,
    fuel: i64,
    #[tabled(rename = "wait")]
    queue_wait_ticks: u32,
}

impl Plane {
    pub fn new(id: PlaneId, fuel: i64) -> Plane {
        Plane {
            id,
            fuel,
            queue_wait_ticks: 1,
        }
    }

    pub fn id(&self) -> PlaneId {
        self.id
    }

    pub fn fuel(&self) -> i64 {
        self.fuel
    }

    /// Ticks spent on the runway, starting at 1 on admission.
    pub fn queue_wait_ticks(&self) -> u32 {
        self.queue_wait_ticks
    }

    pub fn decrement_fuel(&mut self) {
        self.fuel = self.fuel.saturating_sub(1);
    }

    pub fn increment_queue_wait_ticks(&mut self) {
        self.queue_wait_ticks += 1;
    }
}

impl fmt::Display for Plane {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.id, self.fuel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_plane_starts_with_one_wait_tick() {
        let plane = Plane::new(7, 150);

        assert_eq!(7, plane.id());
        assert_eq!(150, plane.fuel());
        assert_eq!(1, plane.queue_wait_ticks());
    }

    #[test]
    fn test_fuel_can_go_negative() {
        let mut plane = Plane::new(0, 1);
        plane.decrement_fuel();
        plane.decrement_fuel();
        plane.decrement_fuel();

        assert_eq!(-2, plane.fuel());
        assert_eq!(1, plane.queue_wait_ticks());
    }

    #[test]
    fn test_fuel_bottoms_out_at_minimum() {
        let mut plane = Plane::new(1, i64::MIN + 1);
        plane.decrement_fuel();
        plane.decrement_fuel();

        assert_eq!(i64::MIN, plane.fuel());
    }

    #[test]
    fn test_wait_counter_is_independent_of_fuel() {
        let mut plane = Plane::new(3, 100);
        plane.increment_queue_wait_ticks();
        plane.increment_queue_wait_ticks();

        assert_eq!(3, plane.queue_wait_ticks());
        assert_eq!(100, plane.fuel());
        assert_eq!("[3, 100]", plane.to_string());
    }
}
