//! # ballistic
//!
//! Runs a fixed-step RK4 simulation and prints the final state of every axis.
//!
//! ```sh
//! ballistic
//! ballistic --preset 1d
//! ballistic --config crates/cli/configs/projectile.toml --stop-at-ground 1
//! RUST_LOG=debug ballistic --log-every 50
//! ```

mod args;
mod error;

use std::process::ExitCode;

use ballistic_core::Observer;
use ballistic_observers::{GroundContact, LogProgress};
use ballistic_solvers::simulation::{Action, Event, Simulation, Status};
use clap::Parser;
use log::{debug, warn};

use args::Args;
use error::CliError;

/// Combines the observers requested on the command line.
#[derive(Debug)]
struct RunObserver {
    ground: Option<GroundContact>,
    progress: Option<LogProgress>,
}

impl<'a> Observer<Event<'a>, Action> for RunObserver {
    fn observe(&mut self, event: &Event<'a>) -> Option<Action> {
        if let Some(progress) = &mut self.progress {
            Observer::<_, Action>::observe(progress, event);
        }
        self.ground.as_mut().and_then(|ground| ground.observe(event))
    }
}

fn run(args: &Args) -> Result<String, CliError> {
    let config = args.resolve_config()?;
    debug!("resolved config: {config:?}");

    let simulation = Simulation::new(config)?;

    let dimensions = simulation.config().dimensions();
    let ground = match args.stop_at_ground {
        Some(axis) if axis >= dimensions => {
            return Err(CliError::GroundAxis { axis, dimensions });
        }
        Some(axis) => Some(GroundContact::new(axis, args.ground_level)),
        None => None,
    };

    let observer = RunObserver {
        ground,
        progress: args.log_every.map(LogProgress::new),
    };

    let solution = simulation.run(observer)?;
    if solution.status == Status::StoppedByObserver {
        warn!("stopped at ground contact after {} ticks", solution.ticks);
    }

    Ok(format!("{:.*}", args.precision, solution.report()))
}

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();
    match run(&args) {
        Ok(report) => {
            println!("{report}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(extra: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("ballistic").chain(extra.iter().copied()))
            .expect("args should parse")
    }

    #[test]
    fn default_run_reports_every_axis() {
        let report = run(&args(&[])).expect("should run");
        let lines: Vec<_> = report.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[1],
            "Axis 1 Position: -9.800000 m, Velocity: -19.600000 m/s after 2 second(s)"
        );
    }

    #[test]
    fn one_dimensional_preset_with_precision() {
        let report = run(&args(&["--preset", "1d", "--precision", "3"])).expect("should run");

        assert_eq!(
            report,
            "Axis 0 Position: 4.905 m, Velocity: -9.810 m/s after 1 second(s)"
        );
    }

    #[test]
    fn ground_contact_stops_early() {
        let report =
            run(&args(&["--stop-at-ground", "1", "--log-every", "10"])).expect("should run");

        // Impact just after sqrt(2) s; the report shows the elapsed time.
        assert!(report.contains("after 1.42"), "{report}");
    }

    #[test]
    fn progress_logging_runs_to_completion() {
        let with_progress =
            run(&args(&["--preset", "1d", "--log-every", "1"])).expect("should run");
        let without = run(&args(&["--preset", "1d"])).expect("should run");

        assert_eq!(with_progress, without);
        assert!(with_progress.ends_with("after 1 second(s)"), "{with_progress}");
    }

    #[test]
    fn ground_axis_out_of_range() {
        let err = run(&args(&["--preset", "1d", "--stop-at-ground", "1"])).unwrap_err();

        assert!(matches!(
            err,
            CliError::GroundAxis {
                axis: 1,
                dimensions: 1
            }
        ));
    }

    #[test]
    fn invalid_override_is_rejected() {
        let err = run(&args(&["--timestep", "0"])).unwrap_err();

        assert!(matches!(err, CliError::Simulation(_)));
        assert!(err.to_string().contains("timestep"));
    }
}
