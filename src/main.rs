// Copyright (C) 2022 Yehowshua Immanuel
// This program is distributed under both the GPLV3 license
// and the YEHOWSHUA license, both of which can be found at
// the root of the folder containing the sources for this program.
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use log::info;

use vcd_analyzer::analysis::analyze_counter;
use vcd_analyzer::{parse_vcd_file, Signal};

/// Summarise the signals of a vcd trace and check the blinking counter.
#[derive(Parser)]
#[command(version)]
struct Cli {
    /// The path to the file to read
    path: PathBuf,

    /// Summarise every signal, not just clk/reset/counter/blink
    #[arg(long)]
    all: bool,
}

fn is_testbench_signal(signal: &Signal) -> bool {
    let name = signal.name().to_lowercase();
    ["clk", "reset", "counter", "blink"]
        .iter()
        .any(|pattern| name.contains(pattern))
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Cli::parse();

    if !args.path.exists() {
        eprintln!("Error: VCD file not found: {}", args.path.display());
        return ExitCode::FAILURE;
    }

    println!("Analyzing VCD file: {}", args.path.display());

    let now = Instant::now();
    let vcd = match parse_vcd_file(&args.path) {
        Ok(vcd) => vcd,
        Err(e) => {
            eprintln!("Error reading VCD file: {e}");
            return ExitCode::FAILURE;
        }
    };
    info!("parsed {} in {:.2?}", args.path.display(), now.elapsed());

    if vcd.is_empty() {
        eprintln!("No signals declared in {}", args.path.display());
        return ExitCode::FAILURE;
    }

    println!("Found {} signals", vcd.len());
    if let (Some(scalar), unit) = vcd.metadata().timescale {
        println!("Timescale: {scalar} {}", unit.unit());
    }

    println!();
    println!("{:<24} {:>6} {:>8}", "signal", "bits", "changes");
    for signal in vcd.signals().filter(|s| args.all || is_testbench_signal(s)) {
        println!(
            "{:<24} {:>6} {:>8}",
            signal.name(),
            signal.num_bits(),
            signal.times().len()
        );
    }

    println!();
    println!("=== Blinking Counter Analysis ===");
    match analyze_counter(&vcd) {
        Some(report) => print!("{report}"),
        None => println!("Counter signal not found"),
    }

    ExitCode::SUCCESS
}
