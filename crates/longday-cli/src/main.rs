//! longday — simulate a non-24-hour sleep schedule against real calendar days.
//!
//! Generates the alternating sleep/awake periods of a person living on a
//! configurable day length (e.g. 25 h), prints each boundary as it happens,
//! and writes the selected periods to an iCalendar file (and optionally a
//! CSV copy).

mod config_file;


use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDateTime};
use clap::Parser;

use longday_core::{PeriodKind, SimConfig};
use longday_output::{CsvWriter, IcsWriter, write_schedule};
use longday_sim::{Cycle, NoopObserver, SimObserver, run};

use config_file::load_config;

// ── CLI arguments ─────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "longday")]
#[command(about = "Simulate living on a non-24-hour day and export the schedule")]
struct Args {
    /// JSON config file; omitted fields use the built-in defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output iCalendar file.
    #[arg(long, default_value = "longday_schedule.ics")]
    out: PathBuf,

    /// Period kinds to export, comma-separated (`sleep`, `awake`).
    #[arg(long, value_delimiter = ',', default_value = "sleep")]
    include: Vec<PeriodKind>,

    /// Also write the selected periods to this CSV file.
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Suppress the per-boundary console report.
    #[arg(long)]
    quiet: bool,
}

// ── Console reporting ─────────────────────────────────────────────────────────

/// Prints every schedule boundary as it is generated.
struct ConsoleReporter;

impl SimObserver for ConsoleReporter {
    fn on_sim_start(&mut self, first_sleep_start: NaiveDateTime) {
        println!("Go to sleep at {first_sleep_start}");
    }

    fn on_cycle(&mut self, _index: usize, cycle: &Cycle) {
        println!("Wake up at {}", cycle.sleep.end);
        println!("Go to sleep at {}", cycle.awake.end);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args = Args::parse();

    // 1. The single ambient clock read; everything downstream takes it as a
    //    parameter.
    let now = Local::now().naive_local();

    // 2. Build the configuration.
    let config = match &args.config {
        Some(path) => load_config(path, now)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => SimConfig::default_for(now),
    };
    config.validate().context("invalid configuration")?;

    // 3. Generate the schedule.
    let timeline = if args.quiet {
        run(&config, &mut NoopObserver)
    } else {
        run(&config, &mut ConsoleReporter)
    };
    if timeline.is_empty() {
        eprintln!(
            "warning: stop {} precedes the first bedtime {}; writing an empty schedule",
            config.stop_date_time,
            config.first_sleep_start()
        );
    }

    // 4. Write outputs.
    let mut ics = IcsWriter::new(&args.out)
        .with_context(|| format!("creating {}", args.out.display()))?;
    write_schedule(&mut ics, &timeline, &args.include)
        .with_context(|| format!("writing {}", args.out.display()))?;

    if let Some(csv_path) = &args.csv {
        let mut csv = CsvWriter::new(csv_path)
            .with_context(|| format!("creating {}", csv_path.display()))?;
        write_schedule(&mut csv, &timeline, &args.include)
            .with_context(|| format!("writing {}", csv_path.display()))?;
    }

    // 5. Summary.
    println!("Simulation complete: {} cycles", timeline.cycle_count());
    let written = |kind: PeriodKind| -> usize {
        if args.include.contains(&kind) {
            timeline.periods(kind).len()
        } else {
            0
        }
    };
    println!(
        "Wrote {} sleep periods and {} awake periods to {}.",
        written(PeriodKind::Sleep),
        written(PeriodKind::Awake),
        args.out.display()
    );
    if let Some(csv_path) = &args.csv {
        println!("Wrote CSV copy to {}.", csv_path.display());
    }

    Ok(())
}
