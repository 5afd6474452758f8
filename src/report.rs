use crate::plane::{Plane, PlaneId};
use crate::simulation::Simulation;
use crate::time::Tick;
use clap::ValueEnum;
use colored::Colorize;
use serde::Serialize;
use std::fmt;
use std::fmt::{Formatter, Write};
use tabled::Tabled;
use tabled::settings::Style;

#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Table,
    Json,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Tabled)]
pub struct PlaneRecord {
    #[tabled(rename = "plane")]
    pub id: PlaneId,
    pub fuel: i64,
}

impl From<&Plane> for PlaneRecord {
    fn from(plane: &Plane) -> Self {
        PlaneRecord {
            id: plane.id(),
            fuel: plane.fuel(),
        }
    }
}

/// Final state of a run, captured once the driver has stopped.
#[derive(Debug, Serialize)]
pub struct Report {
    pub simulation_ticks: u64,
    pub ticks_executed: Tick,
    pub total_planes_created: u64,
    pub departed_count: usize,
    pub insufficient_fuel_count: usize,
    pub waiting_count: usize,
    pub runway: Option<PlaneId>,
    pub departed: Vec<PlaneRecord>,
    pub insufficient_fuel: Vec<PlaneRecord>,
}

impl Report {
    pub fn from_simulation(simulation: &Simulation) -> Report {
        let airport = simulation.airport();
        Report {
            simulation_ticks: simulation.config().simulation_ticks,
            ticks_executed: simulation.clock(),
            total_planes_created: airport.total_planes_created(),
            departed_count: airport.departed().len(),
            insufficient_fuel_count: airport.diverted().len(),
            waiting_count: airport.waiting().len(),
            runway: airport.runway().map(Plane::id),
            departed: airport.departed().iter().map(PlaneRecord::from).collect(),
            insufficient_fuel: airport.diverted().iter().map(PlaneRecord::from).collect(),
        }
    }

    pub fn render(&self, format: OutputFormat) -> Result<String, serde_json::Error> {
        match format {
            OutputFormat::Text => Ok(self.to_string()),
            OutputFormat::Table => Ok(self.to_table()),
            OutputFormat::Json => serde_json::to_string_pretty(self),
        }
    }

    fn runway_label(&self) -> String {
        self.runway.map(|id| id.to_string()).unwrap_or_else(|| "none".to_string())
    }

    pub fn summary_lines(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Simulation time", self.simulation_ticks.to_string()),
            ("Total Planes", self.total_planes_created.to_string()),
            ("Planes that departed", self.departed_count.to_string()),
            ("Planes that don't have enough fuel", self.insufficient_fuel_count.to_string()),
            ("Planes still waiting", self.waiting_count.to_string()),
            ("Plane on the runway", self.runway_label()),
            ("Ticks executed", self.ticks_executed.0.to_string()),
        ]
    }

    fn to_table(&self) -> String {
        let mut out = String::new();
        for (label, value) in self.summary_lines() {
            let value = match label {
                "Planes that departed" => value.green(),
                "Planes that don't have enough fuel" => value.red(),
                _ => value.bold(),
            };
            let _ = writeln!(out, "{}: {}", label, value);
        }
        for (title, records) in [
            ("Planes departed queue", &self.departed),
            ("Planes not enough fuel queue", &self.insufficient_fuel),
        ] {
            let _ = writeln!(out, "\n{}:", title.bold());
            if records.is_empty() {
                let _ = writeln!(out, "(none)");
            } else {
                let mut table = tabled::Table::new(records);
                table.with(Style::rounded());
                let _ = writeln!(out, "{}", table);
            }
        }
        out
    }
}

fn write_queue(f: &mut Formatter<'_>, title: &str, records: &[PlaneRecord]) -> fmt::Result {
    writeln!(f, "{}:", title)?;
    for record in records {
        write!(f, "[{}, {}]->", record.id, record.fuel)?;
    }
    writeln!(f)
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (label, value) in self.summary_lines() {
            writeln!(f, "{}: {}", label, value)?;
        }
        write_queue(f, "Planes departed queue", &self.departed)?;
        write_queue(f, "Planes not enough fuel queue", &self.insufficient_fuel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimulationConfig;

    fn report(simulation_ticks: u64, fuel_level: i64) -> Report {
        let mut simulation = Simulation::new(SimulationConfig {
            simulation_ticks,
            fuel_level,
            ..SimulationConfig::default()
        });
        simulation.run();
        Report::from_simulation(&simulation)
    }

    #[test]
    fn test_text_layout() {
        let report = report(2, 150);

        let expected = "Simulation time: 2\n\
            Total Planes: 2\n\
            Planes that departed: 1\n\
            Planes that don't have enough fuel: 0\n\
            Planes still waiting: 0\n\
            Plane on the runway: 1\n\
            Ticks executed: 4\n\
            Planes departed queue:\n\
            [0, 149]->\n\
            Planes not enough fuel queue:\n\
            \n";
        assert_eq!(expected, report.render(OutputFormat::Text).unwrap());
    }

    #[test]
    fn test_listings_keep_fifo_order() {
        let report = report(4, 0);

        assert!(report.departed.is_empty());
        assert_eq!(
            vec![
                PlaneRecord { id: 0, fuel: -1 },
                PlaneRecord { id: 1, fuel: -1 },
                PlaneRecord { id: 2, fuel: -1 },
                PlaneRecord { id: 3, fuel: -1 },
            ],
            report.insufficient_fuel
        );
        assert!(report.to_string().contains("[0, -1]->[1, -1]->[2, -1]->[3, -1]->\n"));
    }

    #[test]
    fn test_json_carries_summary_and_listings() {
        let report = report(2, 150);
        let json: serde_json::Value =
            serde_json::from_str(&report.render(OutputFormat::Json).unwrap()).unwrap();

        assert_eq!(2, json["simulation_ticks"]);
        assert_eq!(2, json["total_planes_created"]);
        assert_eq!(1, json["departed_count"]);
        assert_eq!(0, json["waiting_count"]);
        assert_eq!(1, json["runway"]);
        assert_eq!(4, json["ticks_executed"]);
        assert_eq!(0, json["departed"][0]["id"]);
        assert_eq!(149, json["departed"][0]["fuel"]);
        assert!(json["insufficient_fuel"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_table_lists_both_queues() {
        colored::control::set_override(false);
        let table = report(4, 0).render(OutputFormat::Table).unwrap();

        assert!(table.contains("Planes that don't have enough fuel: 4"));
        assert!(table.contains("Planes departed queue:\n(none)"));
        assert!(table.contains("plane"));
        assert!(table.contains("-1"));
    }
}
