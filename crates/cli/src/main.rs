//! PowerPC MMU probe CLI.
//!
//! This binary drives one core's memory path against a configured machine. It performs:
//! 1. **Translate:** Runs effective addresses through the MMU and reports the physical address or fault.
//! 2. **Read:** Performs translated word loads (or fetches) and dumps the values.
//!
//! The machine (RAM layout and initial MMU registers) comes from a JSON config; a raw
//! image can be loaded into physical memory first, e.g. one holding a hashed page table.

use std::path::PathBuf;
use std::{fs, process};

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use ppcmmu_core::common::{AccessType, EffectiveAddr, MmuError, TranslationRequest};
use ppcmmu_core::core::cpu::trap::ExceptionUnit;
use ppcmmu_core::{Config, Cpu, System};

#[derive(Parser, Debug)]
#[command(
    name = "mmu-probe",
    author,
    version,
    about = "PowerPC 60x MMU probe",
    long_about = "Translate addresses or read memory through a configured PowerPC MMU.\n\nExamples:\n  mmu-probe --config machine.json translate 0x10001234\n  mmu-probe --config machine.json --image htab.bin --image-base 0x00100000 translate --write 0xC0000000\n  mmu-probe --config machine.json read 0x10000000 --count 4"
)]
struct Cli {
    /// Machine description (JSON). Built-in defaults are used when omitted.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Raw image copied into physical memory before probing.
    #[arg(long, global = true)]
    image: Option<PathBuf>,

    /// Physical load address of the image.
    #[arg(long, global = true, value_parser = parse_addr, default_value = "0")]
    image_base: u32,

    /// Emit results as JSON lines.
    #[arg(long, global = true)]
    json: bool,

    /// Log every translation step.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Translate effective addresses to physical addresses.
    Translate {
        /// Effective addresses (hex with 0x prefix, or decimal).
        #[arg(required = true, value_parser = parse_addr)]
        addresses: Vec<u32>,

        /// Translate in code space (fetches, or code stores with `--write`).
        #[arg(long)]
        code: bool,

        /// Translate as stores.
        #[arg(long)]
        write: bool,

        /// Classify faults without signalling them.
        #[arg(long)]
        probe: bool,
    },

    /// Read consecutive words through the MMU.
    Read {
        /// First effective address.
        #[arg(value_parser = parse_addr)]
        address: u32,

        /// Number of words to read.
        #[arg(short = 'n', long, default_value_t = 1)]
        count: u32,

        /// Read as instruction fetches.
        #[arg(long)]
        code: bool,
    },
}

/// One line of probe output.
#[derive(Debug, Serialize)]
struct Report {
    address: String,
    access: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    physical: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    fault: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    exception: Option<String>,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match &cli.config {
        Some(path) => Config::from_file(path).unwrap_or_else(|e| {
            eprintln!("Error loading {}: {e}", path.display());
            process::exit(1);
        }),
        None => Config::default(),
    };

    let mut system = System::new(&config).unwrap_or_else(|e| {
        eprintln!("Error building system: {e}");
        process::exit(1);
    });

    if let Some(path) = &cli.image {
        let data = fs::read(path).unwrap_or_else(|e| {
            eprintln!("Error reading image {}: {e}", path.display());
            process::exit(1);
        });
        info!(
            "loaded {} bytes from {} at {:#010x}",
            data.len(),
            path.display(),
            cli.image_base
        );
        system.load_image(&data, cli.image_base);
    }

    let mut cpu = Cpu::new(&config);
    let mut failed = false;

    match cli.command {
        Commands::Translate {
            addresses,
            code,
            write,
            probe,
        } => {
            let access = AccessType::from_flags(code, write);
            for addr in addresses {
                let req = TranslationRequest::new(EffectiveAddr::new(addr), code, write, probe);
                let report = match cpu.translate(&mut system.bus, req) {
                    Ok(paddr) => Report::new(addr, access).physical(paddr.val()),
                    Err(e) => {
                        failed = true;
                        Report::new(addr, access).fault(&e, &mut cpu.exceptions)
                    }
                };
                emit(&report, cli.json);
            }
        }
        Commands::Read {
            address,
            count,
            code,
        } => {
            let access = AccessType::from_flags(code, false);
            for i in 0..count {
                let addr = address.wrapping_add(i.wrapping_mul(4));
                let ea = EffectiveAddr::new(addr);
                let result = if code {
                    cpu.fetch_u32(&mut system.bus, ea)
                } else {
                    cpu.read_u32(&mut system.bus, ea)
                };
                let report = match result {
                    Ok(val) => Report::new(addr, access).value(val),
                    Err(e) => {
                        failed = true;
                        Report::new(addr, access).fault(&e, &mut cpu.exceptions)
                    }
                };
                emit(&report, cli.json);
                if failed {
                    break;
                }
            }
        }
    }

    if config.general.trace || cli.verbose {
        cpu.mmu.stats.print();
    }
    if failed {
        process::exit(1);
    }
}

impl Report {
    fn new(addr: u32, access: AccessType) -> Self {
        Self {
            address: format!("{addr:#010x}"),
            access: match access {
                AccessType::Fetch => "fetch",
                AccessType::Read => "read",
                AccessType::Write => "write",
                AccessType::CodeWrite => "cwrite",
            },
            physical: None,
            value: None,
            fault: None,
            exception: None,
        }
    }

    fn physical(mut self, paddr: u32) -> Self {
        self.physical = Some(format!("{paddr:#010x}"));
        self
    }

    fn value(mut self, val: u32) -> Self {
        self.value = Some(format!("{val:#010x}"));
        self
    }

    fn fault(mut self, err: &MmuError, unit: &mut ExceptionUnit) -> Self {
        self.fault = Some(err.to_string());
        if let Some(exception) = unit.take_pending() {
            let regs = unit.regs;
            self.exception = Some(format!(
                "{exception:?} vector={:#x} dar={:#010x} dsisr={:#010x} srr1={:#010x}",
                exception.vector(),
                regs.dar,
                regs.dsisr,
                regs.srr1
            ));
        }
        self
    }
}

/// Prints a report as text or as one JSON object per line.
fn emit(report: &Report, json: bool) {
    if json {
        match serde_json::to_string(report) {
            Ok(line) => println!("{line}"),
            Err(e) => eprintln!("Error encoding report: {e}"),
        }
        return;
    }

    let outcome = match (&report.physical, &report.value, &report.fault) {
        (Some(pa), _, _) => format!("-> {pa}"),
        (_, Some(val), _) => format!("= {val}"),
        (_, _, Some(fault)) => format!("!! {fault}"),
        _ => String::new(),
    };
    println!("{:<6} {} {outcome}", report.access, report.address);
    if let Some(exception) = &report.exception {
        println!("       {exception}");
    }
}

/// Installs the global subscriber; `RUST_LOG` overrides the default level.
fn init_tracing(verbose: bool) {
    let default = if verbose { "trace" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Parses an address given in hex (`0x` prefix) or decimal.
fn parse_addr(s: &str) -> Result<u32, String> {
    let s = s.replace('_', "");
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => s.parse(),
    };
    parsed.map_err(|e| format!("invalid address '{s}': {e}"))
}
