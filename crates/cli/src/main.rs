//! RV32 pipelined simulator CLI.
//!
//! Single entry point for running machine-code images. It performs:
//! 1. **Configuration:** built-in defaults, an optional JSON config file,
//!    and CLI flag overrides, in that order.
//! 2. **Run:** loads the image, ticks the engine to completion, and prints
//!    the final register file, data memory, predictor tables, and stats.

use clap::{Parser, Subcommand};
use std::process;

use rv32sim_core::Config;
use rv32sim_core::Simulator;
use rv32sim_core::sim::loader;

#[derive(Parser, Debug)]
#[command(
    name = "rv32sim",
    author,
    version,
    about = "Cycle-accurate RV32 5-stage pipeline simulator",
    long_about = "Run a machine-code image through a cycle-accurate model of a 5-stage \
in-order pipeline with forwarding and 1-bit branch prediction.\n\nExamples:\n  \
rv32sim run program.mc\n  rv32sim run program.mc --no-forwarding --trace\n  \
rv32sim run program.mc --config sim.json"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a machine-code image to completion.
    Run {
        /// Program image (one `0xADDR 0xVALUE[, asm]` entry per line).
        file: String,

        /// JSON configuration file; flags below override it.
        #[arg(long)]
        config: Option<String>,

        /// Execute strictly sequentially instead of pipelined.
        #[arg(long)]
        no_pipeline: bool,

        /// Disable operand forwarding (stalls on every RAW dependency).
        #[arg(long)]
        no_forwarding: bool,

        /// Print per-cycle stage activity on stderr.
        #[arg(long)]
        trace: bool,

        /// Cycle safety limit for non-terminating images.
        #[arg(long)]
        max_cycles: Option<u64>,

        /// Print the final data memory contents.
        #[arg(long)]
        dump_memory: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    match cli.command {
        Commands::Run {
            file,
            config,
            no_pipeline,
            no_forwarding,
            trace,
            max_cycles,
            dump_memory,
        } => cmd_run(
            &file,
            config.as_deref(),
            no_pipeline,
            no_forwarding,
            trace,
            max_cycles,
            dump_memory,
        ),
    }
}

/// Builds the effective configuration, loads the image, and runs to
/// completion. Exits nonzero on loader errors or the cycle limit.
fn cmd_run(
    file: &str,
    config_path: Option<&str>,
    no_pipeline: bool,
    no_forwarding: bool,
    trace: bool,
    max_cycles: Option<u64>,
    dump_memory: bool,
) {
    let mut config = config_path.map_or_else(Config::default, |path| {
        let text = std::fs::read_to_string(path).unwrap_or_else(|e| {
            eprintln!("Error reading config {path}: {e}");
            process::exit(1);
        });
        serde_json::from_str(&text).unwrap_or_else(|e| {
            eprintln!("Error parsing config {path}: {e}");
            process::exit(1);
        })
    });
    if no_pipeline {
        config.pipeline.pipelining = false;
    }
    if no_forwarding {
        config.pipeline.forwarding = false;
    }
    if trace {
        config.general.trace = true;
    }
    if let Some(limit) = max_cycles {
        config.general.max_cycles = limit;
    }

    let program = loader::load_file(file).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        process::exit(1);
    });

    println!(
        "[*] Running {file}  (pipelining: {}, forwarding: {})",
        config.pipeline.pipelining, config.pipeline.forwarding
    );

    let mut sim = Simulator::new(&config);
    sim.load(&program);

    if let Err(e) = sim.run() {
        eprintln!("\n[!] {e}");
        sim.cpu.dump_state();
        sim.cpu.stats.print();
        process::exit(1);
    }

    println!("\n[Registers]");
    sim.cpu.regs.dump();

    if dump_memory {
        println!("\n[Memory]");
        for (addr, byte) in sim.cpu.mem.iter() {
            println!("  {addr:#010x}: {byte:#04x}");
        }
    }

    println!();
    sim.cpu.bpu.dump();
    println!();
    sim.cpu.stats.print();
}
