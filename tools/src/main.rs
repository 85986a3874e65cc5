//! sim-runner: headless driver for the discrete-event kernel.
//!
//! Usage:
//!   sim-runner                                  (built-in demo scenario)
//!   sim-runner --scenario scenario.json
//!   sim-runner --seed 12345 --actors 8 [--json]

use anyhow::Result;
use desim_core::{
    config::ScenarioConfig,
    scenario::{RunSummary, Scenario},
};
use std::env;

#[derive(serde::Serialize)]
struct RunReport<'a> {
    run_id:  &'a str,
    summary: &'a RunSummary,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let json = args.iter().any(|a| a == "--json");
    let scenario_path = args
        .windows(2)
        .find(|w| w[0] == "--scenario")
        .map(|w| w[1].as_str());
    let seed = parse_arg(&args, "--seed", 42u64);
    let actors = parse_arg(&args, "--actors", 0u32);

    let (label, config) = match scenario_path {
        Some(path) => (path.to_string(), ScenarioConfig::load(path)?),
        None if actors > 0 => (
            format!("random(seed={seed}, actors={actors})"),
            ScenarioConfig::random(seed, actors),
        ),
        None => ("default".to_string(), ScenarioConfig::default_test()),
    };

    let run_id = format!("run-{seed}-{}", chrono::Utc::now().timestamp());
    log::info!("{run_id}: scenario {label}");

    let scenario = Scenario::build(config)?;
    let summary = scenario.run()?;

    if json {
        let report = RunReport { run_id: &run_id, summary: &summary };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_summary(&run_id, &label, &summary);
    }
    Ok(())
}

fn print_summary(run_id: &str, label: &str, summary: &RunSummary) {
    for entry in &summary.journal {
        println!("{entry}");
    }

    println!();
    println!("=== RUN SUMMARY ===");
    println!("  run_id:      {run_id}");
    println!("  scenario:    {label}");
    println!("  dispatches:  {}", summary.dispatches);
    println!("  final time:  {}", summary.final_time);
    println!("  actors:      {}", summary.actors.len());
    for actor in &summary.actors {
        println!("    #{:<4} at {}", actor.id, actor.position);
    }
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}
