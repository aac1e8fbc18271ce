//! RV32 functional simulator CLI.
//!
//! This binary provides the entry point for both simulator modes. It performs:
//! 1. **Disassembly:** Print the textual listing of a hex program file.
//! 2. **Execution:** Load a hex program at address 0 and run it until the
//!    `exit` environment call or the first fatal error.
//!
//! Any fatal error (invalid opcode or funct combination, illegal ecall,
//! out-of-bounds access) prints its diagnostic and terminates with a
//! non-zero status; the `exit` ecall is the only success path.

use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use riscv32_core::Config;
use riscv32_core::sim::loader;
use riscv32_core::sim::simulator::{Simulator, disassemble_program};

#[derive(Parser, Debug)]
#[command(
    name = "rv32sim",
    version,
    about = "RV32 functional simulator",
    long_about = "Disassemble or execute a program of 8-hex-digit instruction words, one per line.\n\nExamples:\n  rv32sim disasm code/input/R/R.input\n  rv32sim run code/input/simple.input\n  rv32sim run --dump-registers code/input/simple.input"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the disassembly listing of a program.
    Disasm {
        /// Program file (one 8-hex-digit word per line).
        program: PathBuf,
    },

    /// Execute a program until it exits or faults.
    Run {
        /// Program file (one 8-hex-digit word per line).
        program: PathBuf,

        /// Dump the register file to stdout when the program exits.
        #[arg(long)]
        dump_registers: bool,

        /// JSON configuration file (memory size, start PC).
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let status = match cli.command {
        Commands::Disasm { program } => cmd_disasm(&program),
        Commands::Run {
            program,
            dump_registers,
            config,
        } => cmd_run(&program, dump_registers, config.as_deref()),
    };
    process::exit(status);
}

/// Disassembles a program file and prints the listing to stdout.
fn cmd_disasm(program: &Path) -> i32 {
    let words = match loader::parse_hex_program(program) {
        Ok(words) => words,
        Err(e) => {
            eprintln!("{e}");
            return 1;
        }
    };

    match disassemble_program(&words) {
        Ok(listing) => {
            print!("{listing}");
            0
        }
        Err(e) => {
            eprintln!("{e}");
            1
        }
    }
}

/// Loads and runs a program file; returns the process exit status.
fn cmd_run(program: &Path, dump_registers: bool, config_path: Option<&Path>) -> i32 {
    let mut config = match load_config(config_path) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("{message}");
            return 1;
        }
    };
    config.general.dump_registers |= dump_registers;

    let mut sim = Simulator::new(&config);

    let outcome = loader::parse_hex_program(program)
        .and_then(|words| loader::load_program(&words, &mut sim.memory))
        .and_then(|()| sim.run());

    match outcome {
        Ok(code) => {
            if config.general.dump_registers {
                sim.cpu.regs.dump();
            }
            code
        }
        Err(e) => {
            eprintln!("{e}");
            1
        }
    }
}

/// Builds the run configuration, from a JSON file when one is given.
fn load_config(path: Option<&Path>) -> Result<Config, String> {
    let Some(path) = path else {
        return Ok(Config::default());
    };

    let text = fs::read_to_string(path)
        .map_err(|e| format!("could not read config '{}': {e}", path.display()))?;
    serde_json::from_str(&text).map_err(|e| format!("invalid config '{}': {e}", path.display()))
}
