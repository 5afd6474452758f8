use crate::plane::Plane;
use crate::report::Report;
use crate::simulation::Simulation;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::{Context, Editor, Helper, Highlighter, Hinter, Validator};
use tabled::settings::Style;

#[derive(Helper, Hinter, Highlighter, Validator)]
pub struct CompleteHelper {
    pub commands: Vec<String>,
}

impl Completer for CompleteHelper {
    type Candidate = Pair;

    fn complete(&self, line: &str, _pos: usize, _ctx: &Context<'_>) -> rustyline::Result<(usize, Vec<Pair>)> {
        let candidates = self
            .commands
            .iter()
            .filter(|cmd| cmd.starts_with(line))
            .map(|cmd| Pair {
                display: cmd.clone(),
                replacement: format!("{} ", cmd),
            })
            .collect();

        Ok((0, candidates))
    }
}

fn print_planes<'a>(planes: impl IntoIterator<Item = &'a Plane>) {
    let planes: Vec<&Plane> = planes.into_iter().collect();
    if planes.is_empty() {
        println!("No planes here.");
    } else {
        let mut table = tabled::Table::new(&planes);
        table.with(Style::rounded());
        table.with(tabled::settings::Alignment::left());
        println!("{}", table);
    }
}

fn step(simulation: &mut Simulation, ticks: u64) {
    for _ in 0..ticks {
        if simulation.is_finished() {
            println!("Simulation finished at {}.", simulation.clock());
            return;
        }
        let events = simulation.step();
        for event in events {
            println!("{} {}", simulation.clock(), event);
        }
    }
}

/// Interactive tower console. State is only read between ticks.
pub fn run(simulation: &mut Simulation) -> rustyline::Result<()> {
    let config = rustyline::Config::builder()
        .history_ignore_space(true)
        .completion_type(rustyline::CompletionType::List)
        .build();

    let helper = CompleteHelper {
        commands: ["step", "run", "ls", "stats", "help", "exit"]
            .iter()
            .map(|c| c.to_string())
            .collect(),
    };

    let mut rl = Editor::with_config(config)?;
    rl.set_helper(Some(helper));

    loop {
        let readline = rl.readline(">> ");
        match readline {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() { continue; }

                rl.add_history_entry(trimmed)?;

                let parts: Vec<&str> = trimmed.split_whitespace().collect();
                match parts[0] {
                    "step" => {
                        let ticks = parts.get(1).and_then(|n| n.parse::<u64>().ok()).unwrap_or(1);
                        step(simulation, ticks);
                    },
                    "run" => {
                        if !simulation.is_finished() {
                            simulation.run();
                        }
                        println!("Simulation finished at {}.", simulation.clock());
                    },
                    "ls" => {
                        let airport = simulation.airport();
                        match parts.get(1).copied().unwrap_or("w") {
                            "r" | "runway" => print_planes(airport.runway()),
                            "d" | "departed" => print_planes(airport.departed()),
                            "f" | "fuel" => print_planes(airport.diverted()),
                            _ => print_planes(airport.waiting()),
                        }
                    },
                    "stats" => {
                        let report = Report::from_simulation(simulation);
                        for (label, value) in report.summary_lines() {
                            println!("{}: {}", label, value);
                        }
                    },
                    "help" | "?" => {
                        println!("\nAvailable Commands:");
                        println!("  step [n]    - Advance the simulation by n ticks (default 1)");
                        println!("  run         - Run until the waiting queue drains");
                        println!("  ls [queue]  - List planes: w - waiting, r - runway, d - departed, f - not enough fuel");
                        println!("  stats       - Show the summary counts");
                        println!("  help / ?    - Show this help menu");
                        println!("  exit / quit - Leave the console and print the report\n");
                    },
                    "exit" | "quit" => break,
                    _ => println!("Unknown command: {}", parts[0]),
                }
            },
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            },
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                break;
            },
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustyline::history::DefaultHistory;

    #[test]
    fn test_completion_matches_prefix() {
        let helper = CompleteHelper {
            commands: vec!["step".to_string(), "stats".to_string(), "run".to_string()],
        };
        let history = DefaultHistory::new();
        let ctx = Context::new(&history);

        let (start, candidates) = helper.complete("st", 2, &ctx).unwrap();

        assert_eq!(0, start);
        assert_eq!(
            vec!["step ", "stats "],
            candidates.iter().map(|c| c.replacement.as_str()).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_step_stops_at_termination() {
        let mut simulation = Simulation::new(crate::config::SimulationConfig {
            simulation_ticks: 1,
            ..Default::default()
        });

        step(&mut simulation, 10);

        assert!(simulation.is_finished());
        assert_eq!(1, simulation.clock().0);
    }
}
