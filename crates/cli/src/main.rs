//! FCFS / demand-paging simulator CLI.
//!
//! This binary provides a single entry point for running workloads. It performs:
//! 1. **Load:** Parse a workload file and an optional JSON configuration.
//! 2. **Run:** Simulate the workload under FCFS with FIFO demand paging.
//! 3. **Report:** Write the rendered event log to stdout or a file, and optionally print statistics.

use clap::builder::PossibleValuesParser;
use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use tracing_subscriber::EnvFilter;

use pagesched_core::config::{Config, WritebackPolicy};
use pagesched_core::stats::STATS_SECTIONS;
use pagesched_core::{MemoryManager, Result, Simulator, Workload};

#[derive(Parser, Debug)]
#[command(
    name = "pagesched",
    author,
    version,
    about = "FCFS scheduling and demand-paging simulator",
    long_about = "Simulate processes on a single CPU under non-preemptive FCFS with a FIFO demand-paged memory.\n\nExamples:\n  pagesched run workload.txt\n  pagesched run workload.txt --config timing.json --stats\n  pagesched check workload.txt"
)]
struct Cli {
    /// Log scheduling and paging decisions to stderr (overrides `RUST_LOG`).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a workload and print the event log.
    Run {
        /// Workload file.
        workload: PathBuf,

        /// JSON configuration (timing, address limit, tracing).
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Write the event log here instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print run statistics after the log.
        #[arg(long)]
        stats: bool,

        /// Print only these statistics sections (implies --stats).
        #[arg(
            long,
            value_delimiter = ',',
            value_parser = PossibleValuesParser::new(STATS_SECTIONS.iter().copied())
        )]
        stats_sections: Vec<String>,

        /// Print the final frame table (frame, page, dirty) after the log.
        #[arg(long)]
        frames: bool,

        /// Overlap dirty writeback with the page load instead of serializing them.
        #[arg(long)]
        overlap_writeback: bool,
    },

    /// Parse and validate a workload without running it.
    Check {
        /// Workload file.
        workload: PathBuf,

        /// JSON configuration (used for the address limit).
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Run {
            workload,
            config,
            output,
            stats,
            stats_sections,
            frames,
            overlap_writeback,
        } => {
            let report = Report {
                stats: stats || !stats_sections.is_empty(),
                stats_sections,
                frames,
            };
            cmd_run(&workload, config, output, &report, overlap_writeback)
        }
        Commands::Check { workload, config } => cmd_check(&workload, config),
    };

    if let Err(e) = result {
        eprintln!("[!] FATAL: {e}");
        process::exit(1);
    }
}

/// Installs a stderr subscriber; stdout carries only the event log.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// What to print after the event log.
#[derive(Debug)]
struct Report {
    stats: bool,
    stats_sections: Vec<String>,
    frames: bool,
}

fn load_config(path: Option<PathBuf>) -> Result<Config> {
    path.map_or_else(|| Ok(Config::default()), Config::from_json_file)
}

fn print_frames(memory: &MemoryManager) {
    println!("FRAMES ({} of {} in use)", memory.resident_count(), memory.frame_count());
    for resident in memory.resident_pages() {
        println!(
            "  frame {:<6} page {:<8} {}",
            resident.frame,
            resident.page.number,
            if resident.page.dirty { "dirty" } else { "clean" }
        );
    }
}

/// Loads, runs, and reports a workload.
fn cmd_run(
    workload_path: &Path,
    config_path: Option<PathBuf>,
    output: Option<PathBuf>,
    report: &Report,
    overlap_writeback: bool,
) -> Result<()> {
    let mut config = load_config(config_path)?;
    if overlap_writeback {
        config.timing.writeback = WritebackPolicy::Overlapped;
    }

    let workload = Workload::from_file(workload_path, config.memory.address_limit)?;
    let sim = Simulator::for_workload(config, &workload)?;
    let outcome = sim.run_workload(workload)?;

    let rendered = outcome.log.render();
    match output {
        Some(path) => fs::write(path, rendered)?,
        None => print!("{rendered}"),
    }

    if report.frames {
        print_frames(&outcome.memory);
    }
    if report.stats {
        outcome.stats.print_sections(&report.stats_sections);
    }
    Ok(())
}

/// Validates a workload and prints a one-line summary.
fn cmd_check(workload_path: &Path, config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config(config_path)?;
    let workload = Workload::from_file(workload_path, config.memory.address_limit)?;
    let _ = Simulator::for_workload(config, &workload)?;
    println!(
        "{}: {} processes, {} instructions, page size {}, {} frames",
        workload_path.display(),
        workload.processes.len(),
        workload.instruction_count(),
        workload.page_size,
        workload.frame_count
    );
    Ok(())
}
