//! Entrypoint for CLI
use std::{env, error::Error, fs, time::Instant};

use chip8::{prelude::*, IMPL_VERSION};
use log::{info, warn};

static USAGE: &str = r#"
usage: chip8 CMD FILE [CYCLES]

commands:
    run     Run the target ROM file for CYCLES cycles (default 1000)
            and print the display
    dis     Disassemble the target ROM into readable assembly

environment:
    CHIP8_SEED  Seed for the random number instruction
    CHIP8_WRAP  Set to 1 to wrap sprites around the display edges
    RUST_LOG    Log level, trace prints every executed instruction

examples:
    chip8 run maze.ch8
    chip8 run breakout.ch8 5000
    chip8 dis breakout.ch8
"#;

const DEFAULT_CYCLES: usize = 1000;

fn run_bytecode(filepath: &str, cycles: usize) -> Chip8Result<()> {
    let conf = load_conf();
    info!("running {filepath} for {cycles} cycles with {conf:?}");

    let mut vm = Chip8Vm::new(conf);

    // An unreadable ROM leaves the machine with empty program memory.
    if let Err(err) = vm.load_rom(filepath) {
        warn!("skipping ROM {filepath}: {err}");
    }

    let start = Instant::now();
    vm.run_steps(cycles);
    let end = Instant::now();

    info!(
        "time taken: {}ms",
        end.duration_since(start).as_nanos() as f64 / 1000000.0
    ); // to millis
    if vm.is_waiting_for_key() {
        info!("machine is waiting for a key press");
    }
    println!("{}", vm.dump_display()?);

    Ok(())
}

fn run_disassembler(filepath: &str) -> Chip8Result<()> {
    info!("disassembling {filepath}");

    let bytecode = fs::read(filepath)?;
    let listing = Disassembler::new(bytecode.as_slice()).to_listing()?;
    print!("{listing}");

    Ok(())
}

/// Build the VM configuration from the environment.
fn load_conf() -> Chip8Conf {
    let seed = match env::var("CHIP8_SEED") {
        Ok(value) => match value.parse::<u64>() {
            Ok(seed) => Some(seed),
            Err(err) => {
                warn!("ignoring CHIP8_SEED={value}: {err}");
                None
            }
        },
        Err(_) => None,
    };

    let sprite_edge = match env::var("CHIP8_WRAP").as_deref() {
        Ok("1") | Ok("true") => SpriteEdge::Wrap,
        _ => SpriteEdge::Clip,
    };

    Chip8Conf { seed, sprite_edge }
}

fn main() -> Result<(), Box<dyn Error>> {
    simple_logger::SimpleLogger::new().env().init()?;

    match parse_args() {
        Some(Cmd::Run { filepath, cycles }) => run_bytecode(&filepath, cycles)?,
        Some(Cmd::Dis { filepath }) => run_disassembler(&filepath)?,
        None => {
            print_usage();
            // FreeBSD EX_USAGE (64)
            std::process::exit(64)
        }
    }

    Ok(())
}

fn parse_args() -> Option<Cmd> {
    let mut args = env::args().skip(1);
    match args.next() {
        Some(cmd) => {
            // don't format me T.T
            match cmd.as_str() {
                "run" => {
                    let filepath = args.next()?;
                    let cycles = match args.next() {
                        Some(arg) => arg.parse().ok()?,
                        None => DEFAULT_CYCLES,
                    };
                    Some(Cmd::Run { filepath, cycles })
                }
                "dis" => Some(Cmd::Dis {
                    filepath: args.next()?,
                }),
                _ => None,
            }
        }
        None => None,
    }
}

fn print_usage() {
    println!("Chip8 v{IMPL_VERSION}");
    println!("{USAGE}");
}

enum Cmd {
    /// Run file
    Run { filepath: String, cycles: usize },
    /// Disassemble
    Dis { filepath: String },
}
