//! Simulate command handler

use anyhow::{Context, Result};

use seekctl::simulate::{parse_script, Simulation};
use seekctl::{Config, SimulatedSurface};

/// Run a gesture script and print one report per step.
pub fn handle(
    config: &Config,
    duration: f64,
    start: f64,
    json: bool,
    script: &[String],
) -> Result<()> {
    let steps = parse_script(script).context("Invalid script")?;
    let surface = SimulatedSurface::new(duration).with_position(start);
    let mut simulation = Simulation::new(&config.seek, surface);
    let reports = simulation.run(&steps);

    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for report in &reports {
            println!("{}", report);
        }
    }
    Ok(())
}
