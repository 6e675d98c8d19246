//! Chef Assembly command-line front end.
//!
//! This binary exposes the instruction set without a host simulator. It provides:
//! 1. **List:** Print every registered instruction (text table or JSON).
//! 2. **Decode:** Disassemble raw words and show their MIPS field breakdown.
//! 3. **Encode:** Assemble one instruction from a mnemonic and operands.
//! 4. **Exec:** Execute a sequence of words once each against the reference host
//!    (flat memory, stdio console) and dump the resulting registers.
//!
//! Diagnostics go through `tracing`; set `RUST_LOG=chef_isa=debug` for per-step events.

use std::process;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use chef_isa::common::NUM_REGS;
use chef_isa::host::{
    BranchLog, FaultLog, FlatMemory, Host, RegisterFile, Registers, StdConsole,
};
use chef_isa::isa::instruction::InstructionBits;
use chef_isa::isa::{abi, chef};
use chef_isa::{Config, Control, Core};

#[derive(Parser, Debug)]
#[command(
    name = "chefsim",
    author,
    version,
    about = "Chef Assembly instruction set tool",
    long_about = "List, decode, encode and execute Chef Assembly words.\n\nExamples:\n  chefsim list\n  chefsim decode 0x012a4020\n  chefsim encode mix t0 t1 t2\n  chefsim exec --set t1=5 --set t2=7 0x012a4020"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the registered instructions.
    List {
        /// Emit the registry as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Disassemble instruction words (hex with 0x prefix, or decimal).
    Decode {
        /// Words to decode.
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// Assemble one instruction.
    Encode {
        /// Mnemonic name, e.g. `mix`.
        mnemonic: String,

        /// Operands in syntax order: register names or numbers, and immediates.
        #[arg(allow_hyphen_values = true)]
        operands: Vec<String>,
    },

    /// Execute words once each against the reference host.
    Exec {
        /// JSON configuration file.
        #[arg(short, long)]
        config: Option<String>,

        /// Initial register value, e.g. `t0=5` or `$8=-1`. Repeatable.
        #[arg(long = "set", value_name = "REG=VAL")]
        set: Vec<String>,

        /// Emit the final state as JSON instead of a register dump.
        #[arg(long)]
        json: bool,

        /// Words to execute, in order.
        #[arg(required = true)]
        words: Vec<String>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::List { json } => cmd_list(json),
        Commands::Decode { words } => cmd_decode(&words),
        Commands::Encode { mnemonic, operands } => cmd_encode(&mnemonic, &operands),
        Commands::Exec {
            config,
            set,
            json,
            words,
        } => cmd_exec(config.as_deref(), &set, json, &words),
    }
}

/// Prints `message` to stderr and exits with status 1.
fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("Error: {message}");
    process::exit(1);
}

/// Parses a word given as `0x`-prefixed hex or decimal.
fn parse_word(text: &str) -> Result<u32, String> {
    let parsed = match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(&hex.replace('_', ""), 16),
        None => text.parse(),
    };
    parsed.map_err(|e| format!("invalid word `{text}`: {e}"))
}

/// Parses a signed integer given as `0x`-prefixed hex or decimal.
fn parse_int(text: &str) -> Option<i32> {
    let (negative, digits) = text
        .strip_prefix('-')
        .map_or((false, text), |rest| (true, rest));
    let magnitude = match digits.strip_prefix("0x") {
        Some(hex) => i64::from_str_radix(hex, 16).ok()?,
        None => digits.parse::<i64>().ok()?,
    };
    let value = if negative { -magnitude } else { magnitude };
    i32::try_from(value)
        .ok()
        .or_else(|| u32::try_from(value).ok().map(|v| v as i32))
}

fn parse_words(words: &[String]) -> Vec<u32> {
    words
        .iter()
        .map(|w| parse_word(w).unwrap_or_else(|e| fail(e)))
        .collect()
}

fn build_core(config: &Config) -> Core {
    Core::new(config).unwrap_or_else(|e| fail(format!("instruction table rejected: {e}")))
}

/// Prints the registry, in registration order.
fn cmd_list(json: bool) {
    let registry = chef::registry().unwrap_or_else(|e| fail(e));

    if json {
        match serde_json::to_string_pretty(registry.all()) {
            Ok(text) => println!("{text}"),
            Err(e) => fail(e),
        }
        return;
    }

    println!("{} ({} instructions)", chef::NAME, registry.len());
    println!();
    for spec in registry.all() {
        println!(
            "{:<12} {:<8} {}  {}",
            spec.name(),
            spec.format(),
            spec.template(),
            spec.syntax()
        );
    }
}

/// Disassembles each word and shows its fixed MIPS fields.
fn cmd_decode(words: &[String]) {
    let core = build_core(&Config::default());
    let mut failed = false;

    for word in parse_words(words) {
        match core.decode(word) {
            Ok(decoded) => println!("{word:#010x}  {decoded}"),
            Err(e) => {
                failed = true;
                println!("{word:#010x}  <{e}>");
            }
        }
        println!(
            "            op={:#04x} rs={} rt={} rd={} shamt={} funct={:#04x} imm={:#06x}",
            word.opcode(),
            word.rs(),
            word.rt(),
            word.rd(),
            word.shamt(),
            word.funct(),
            word.imm16()
        );
    }

    if failed {
        process::exit(1);
    }
}

/// Assembles one instruction and prints its word.
fn cmd_encode(mnemonic: &str, operands: &[String]) {
    let registry = chef::registry().unwrap_or_else(|e| fail(e));
    let Some(spec) = registry.find(mnemonic) else {
        fail(format!("unknown mnemonic `{mnemonic}`"));
    };

    let values: Vec<i32> = operands
        .iter()
        .map(|op| {
            abi::parse(op)
                .map(|r| r as i32)
                .or_else(|| parse_int(op))
                .unwrap_or_else(|| fail(format!("invalid operand `{op}`")))
        })
        .collect();

    match spec.encode(&values) {
        Ok(word) => println!("{word:#010x}"),
        Err(e) => fail(format!(
            "cannot encode `{}`: {e} (syntax: {})",
            spec.name(),
            spec.syntax()
        )),
    }
}

/// Final machine state of an `exec` run.
#[derive(Serialize)]
struct ExecReport {
    registers: Vec<RegisterValue>,
    branches: Vec<i32>,
    faults: Vec<FaultReport>,
}

#[derive(Serialize)]
struct RegisterValue {
    name: &'static str,
    value: i32,
}

#[derive(Serialize)]
struct FaultReport {
    mnemonic: String,
    word: u32,
    cause: Option<u32>,
    message: String,
}

/// Executes each word once, in order, against the reference host.
///
/// Branch requests are recorded but do not redirect execution. Execution stops at the
/// first decode failure or fault; the register state at that point is still reported.
fn cmd_exec(config_path: Option<&str>, set: &[String], json: bool, words: &[String]) {
    let config = config_path.map_or_else(Config::default, |path| {
        Config::from_file(path).unwrap_or_else(|e| fail(e))
    });
    let mut core = build_core(&config);

    let mut regs = Registers::new();
    for assignment in set {
        let (reg, value) = assignment
            .split_once('=')
            .and_then(|(r, v)| Some((abi::parse(r)?, parse_int(v)?)))
            .unwrap_or_else(|| fail(format!("invalid register assignment `{assignment}`")));
        regs.set(reg, value);
    }

    let mut mem = FlatMemory::from_config(&config.memory);
    let mut branch = BranchLog::new();
    let mut console = StdConsole::new();
    let mut reporter = FaultLog::new();
    let mut status = 0;

    {
        let mut host = Host {
            regs: &mut regs,
            mem: &mut mem,
            branch: &mut branch,
            console: &mut console,
            reporter: &mut reporter,
        };
        for word in parse_words(words) {
            match core.step(word, &mut host) {
                Ok(Control::Next) => {}
                Ok(Control::Branch(target)) => {
                    tracing::info!(
                        word = format_args!("{word:#010x}"),
                        branch_target = target,
                        "branch taken"
                    );
                }
                Err(e) => {
                    eprintln!("[!] {word:#010x}: {e}");
                    status = 1;
                    break;
                }
            }
        }
    }

    if json {
        let report = ExecReport {
            registers: (0..NUM_REGS)
                .map(|i| RegisterValue {
                    name: abi::name(i),
                    value: regs.get(i),
                })
                .collect(),
            branches: branch.targets().to_vec(),
            faults: reporter
                .faults()
                .iter()
                .map(|f| FaultReport {
                    mnemonic: f.mnemonic.clone(),
                    word: f.word,
                    cause: f.kind.cause_code(),
                    message: f.message.clone(),
                })
                .collect(),
        };
        match serde_json::to_string_pretty(&report) {
            Ok(text) => println!("{text}"),
            Err(e) => fail(e),
        }
    } else {
        regs.dump();
        if !branch.targets().is_empty() {
            println!("branches: {:?}", branch.targets());
        }
    }

    process::exit(status);
}
