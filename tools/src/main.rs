//! cx-synth: writes the synthetic CX complaint dataset.
//!
//! Usage:
//!   cx-synth
//!   cx-synth --seed 7 --rows 12000 --out complaints.csv
//!   cx-synth --config cx.json --with-metrics --json

use anyhow::Result;
use cx_synth_core::{
    config::GeneratorConfig,
    engine::{RunOutcome, SynthEngine},
};
use std::env;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let config = build_config(&args)?;
    let json = args.iter().any(|a| a == "--json");

    let engine = SynthEngine::build(config)?;
    let outcome = engine.run()?;

    println!("Saved: {} Rows: {}", outcome.output_path, outcome.rows_written);
    if json {
        println!("{}", serde_json::to_string_pretty(&outcome.summary)?);
    } else {
        print_summary(engine.config(), &outcome);
    }
    Ok(())
}

/// Defaults, then the JSON file named by `--config`, then individual flags.
fn build_config(args: &[String]) -> Result<GeneratorConfig> {
    let mut config = match flag_value(args, "--config") {
        Some(path) => GeneratorConfig::load(path)?,
        None => GeneratorConfig::default(),
    };
    config.seed = parse_arg(args, "--seed", config.seed);
    config.rows = parse_arg(args, "--rows", config.rows);
    if let Some(out) = flag_value(args, "--out") {
        config.output_path = out.to_string();
    }
    if args.iter().any(|a| a == "--with-metrics") {
        config.include_metrics = true;
    }
    config.validate()?;
    log::debug!("resolved config: {config:?}");
    Ok(config)
}

fn print_summary(config: &GeneratorConfig, outcome: &RunOutcome) {
    let s = &outcome.summary;
    println!();
    println!("=== RUN SUMMARY ===");
    println!("  seed:           {}", config.seed);
    println!("  rows:           {}", s.rows);
    println!("  window:         {} .. {}", config.start_date, config.end_date);
    if let (Some(first), Some(last)) = (s.first_opened, s.last_opened) {
        println!("  opened range:   {first} .. {last}");
    }
    println!("  closed:         {}", s.closed);
    println!("  open:           {}", s.open);
    println!("  escalated:      {}", s.escalated);
    println!("  awaiting close: {}", s.awaiting_close);
    println!("  severity L/M/H: {}/{}/{}", s.low, s.medium, s.high);
    println!("  sla breaches:   {} ({:.1}%)", s.sla_breaches, s.sla_breach_rate() * 100.0);
    println!("  mean csat:      {:.2}", s.mean_csat);

    if !outcome.spikes.is_empty() {
        println!();
        println!("=== SPIKE DAYS ===");
        for spike in &outcome.spikes {
            println!(
                "  {} | relocated: {} | close shifted: {}",
                spike.date, spike.relocated, spike.closed_shifted
            );
        }
    }
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2).find(|w| w[0] == flag).map(|w| w[1].as_str())
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}
