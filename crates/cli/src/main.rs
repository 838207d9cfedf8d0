//! MIPS32 subset simulator CLI.
//!
//! This binary provides the interactive front end for the simulator. It
//! performs:
//! 1. **Loading:** Reads a flat big-endian word image into the machine.
//! 2. **Stepping:** Runs one instruction per iteration, optionally gated on
//!    console input (`q` or EOF quits).
//! 3. **Reporting:** Renders each cycle from the driver's report alone: the
//!    fetched word, the disassembly, the new pc, and the changed
//!    register/memory location.

use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process;

use mipsim_core::isa::disasm::disassemble;
use mipsim_core::sim::loader;
use mipsim_core::{Config, CycleReport, Machine, Simulator};

#[derive(Parser, Debug)]
#[command(
    name = "msim",
    author,
    version,
    about = "MIPS32 subset instruction simulator",
    long_about = "Step a flat MIPS32 binary one instruction at a time.\n\nThe image is raw big-endian 32-bit words, loaded at the text base.\n\nExamples:\n  msim program.dump\n  msim -i -r program.dump\n  msim --config layout.json -s program.dump"
)]
struct Cli {
    /// Program image: flat big-endian 32-bit words.
    file: PathBuf,

    /// Print the full register file after every cycle.
    #[arg(short, long)]
    registers: bool,

    /// Print all nonzero data memory after every cycle.
    #[arg(short, long)]
    memory: bool,

    /// Wait for a line of input before each cycle; 'q' quits.
    #[arg(short, long)]
    interactive: bool,

    /// Print execution statistics when the run ends.
    #[arg(short, long)]
    stats: bool,

    /// JSON file overriding the default memory geometry.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref());

    let program = loader::load_image(&cli.file).unwrap_or_else(|e| {
        eprintln!(
            "[!] FATAL: could not read file '{}': {}",
            cli.file.display(),
            e
        );
        process::exit(1);
    });

    let machine = Machine::with_program(&config, &program).unwrap_or_else(|fault| {
        eprintln!("[!] FATAL: {fault}");
        process::exit(1);
    });
    let mut sim = Simulator::new(machine);

    let stdin = io::stdin();
    loop {
        if cli.interactive && !prompt(&stdin) {
            break;
        }

        match sim.step() {
            Ok(report) => print_cycle(&sim, &config, &report, cli.registers, cli.memory),
            Err(fault) => {
                println!("{fault}");
                if cli.stats {
                    sim.stats.print();
                }
                process::exit(1);
            }
        }
    }

    if cli.stats {
        sim.stats.print();
    }
}

/// Loads the memory geometry from a JSON file, or the defaults.
fn load_config(path: Option<&Path>) -> Config {
    let Some(path) = path else {
        return Config::default();
    };
    let text = std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!(
            "[!] FATAL: could not read config '{}': {}",
            path.display(),
            e
        );
        process::exit(1);
    });
    serde_json::from_str(&text).unwrap_or_else(|e| {
        eprintln!("[!] FATAL: invalid config '{}': {}", path.display(), e);
        process::exit(1);
    })
}

/// Prompts for one line of input. Returns false when the run should end
/// ('q', EOF, or a read error).
fn prompt(stdin: &io::Stdin) -> bool {
    print!("> ");
    let _ = io::stdout().flush();
    let mut line = String::new();
    match stdin.lock().read_line(&mut line) {
        Ok(0) | Err(_) => false,
        Ok(_) => !line.trim_start().starts_with('q'),
    }
}

/// Renders one executed cycle from the driver's report.
fn print_cycle(sim: &Simulator, config: &Config, report: &CycleReport, all_regs: bool, all_mem: bool) {
    println!(
        "Executing instruction at {:08x}: {:08x}",
        report.pc, report.word
    );
    println!("{}", disassemble(&report.instr));
    println!("New pc = {:08x}", report.next_pc);

    if all_regs {
        for (idx, val) in sim.machine.regs.dump().iter().enumerate() {
            print!("r{idx:02}: {:08x}  ", *val as u32);
            if (idx + 1) % 4 == 0 {
                println!();
            }
        }
    } else if let Some(idx) = report.changed_reg {
        println!(
            "Updated r{idx:02} to {:08x}",
            sim.machine.regs.read(idx) as u32
        );
    } else {
        println!("No register was updated.");
    }

    if all_mem {
        println!("Nonzero memory");
        println!("ADDR      CONTENTS");
        for addr in (config.data_base()..config.image_end()).step_by(4) {
            let word = sim.machine.mem.read(addr).unwrap_or(0);
            if word != 0 {
                println!("{addr:08x}  {word:08x}");
            }
        }
    } else if let Some(addr) = report.changed_mem {
        let word = sim.machine.mem.read(addr).unwrap_or(0);
        println!("Updated memory at address {addr:08x} to {word:08x}");
    } else {
        println!("No memory location was updated.");
    }
}
