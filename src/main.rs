use clap::{Parser, ValueEnum};
use log::{LevelFilter, Metadata, Record, debug};
use std::fs::File;
use std::io::{self, Read};

use ccittcrc::{ByteOrder, Crc16, CrcError, SEED, compute_crc, verify_trailer};

#[derive(Parser, Debug)]
#[command(name = "ccittcrc", about = "CRC-16 (0x1021, seed 0xFFFF) checksum tool")]
struct Args {
    /// Input file path, or "-" for stdin
    #[arg(value_name = "INPUT", default_value = "-", env = "CCITTCRC_INPUT")]
    input: String,

    /// Take the message from a hex string instead of INPUT
    #[arg(long, value_name = "HEX", env = "CCITTCRC_HEX", conflicts_with = "input")]
    hex: Option<String>,

    /// Only checksum the first N bytes (0..=255)
    #[arg(long, value_name = "N", env = "CCITTCRC_LENGTH", conflicts_with = "seed")]
    length: Option<usize>,

    /// Resume from an earlier checksum instead of 0xFFFF
    #[arg(long, value_name = "HEX", env = "CCITTCRC_SEED", value_parser = parse_seed)]
    seed: Option<u16>,

    /// Treat the last two bytes as a checksum trailer and check them
    #[arg(long, env = "CCITTCRC_VERIFY", conflicts_with_all = ["length", "seed"])]
    verify: bool,

    /// Byte order of the trailer for --verify
    #[arg(long, value_enum, env = "CCITTCRC_ORDER", default_value_t = Order::Big)]
    order: Order,

    /// Log progress to stderr
    #[arg(short, long, env = "CCITTCRC_VERBOSE")]
    verbose: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Order {
    Big,
    Little,
}

impl From<Order> for ByteOrder {
    fn from(order: Order) -> Self {
        match order {
            Order::Big => ByteOrder::Big,
            Order::Little => ByteOrder::Little,
        }
    }
}

struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn main() {
    let args = Args::parse();

    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(if args.verbose {
            LevelFilter::Trace
        } else {
            LevelFilter::Warn
        });
    }

    if let Err(e) = run(&args) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), CrcError> {
    if args.verify {
        let data = read_message(args)?;
        verify_trailer(&data, args.order.into())?;
        println!("OK");
        return Ok(());
    }

    let crc = checksum(args)?;
    println!("0x{crc:04X}");
    Ok(())
}

fn checksum(args: &Args) -> Result<u16, CrcError> {
    let crc = match args.length {
        Some(length) => {
            let length =
                u8::try_from(length).map_err(|_| CrcError::LengthTooLarge { length })?;
            compute_crc(&read_message(args)?, length)?
        }
        None if args.hex.is_some() => {
            let mut hasher = Crc16::with_seed(args.seed.unwrap_or(SEED));
            hasher.update(&read_message(args)?);
            hasher.finalize()
        }
        None => {
            // Stream so large files don't have to fit in memory.
            let mut hasher = Crc16::with_seed(args.seed.unwrap_or(SEED));
            let copied = io::copy(&mut open_input(&args.input)?, &mut hasher)?;
            debug!("read {} bytes from {}", copied, args.input);
            hasher.finalize()
        }
    };

    Ok(crc)
}

fn open_input(input: &str) -> io::Result<Box<dyn Read>> {
    if input == "-" {
        Ok(Box::new(io::stdin().lock()))
    } else {
        Ok(Box::new(File::open(input)?))
    }
}

fn read_message(args: &Args) -> Result<Vec<u8>, CrcError> {
    if let Some(hex) = &args.hex {
        return parse_hex(hex);
    }

    let mut data = Vec::new();
    open_input(&args.input)?.read_to_end(&mut data)?;
    debug!("read {} bytes from {}", data.len(), args.input);
    Ok(data)
}

/// Parse a hex string such as "0x01 02 ff" into bytes.
fn parse_hex(text: &str) -> Result<Vec<u8>, CrcError> {
    let trimmed = text.trim();
    let body = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    let digits: Vec<u8> = body.bytes().filter(|b| !b.is_ascii_whitespace()).collect();

    Ok(hex::decode(&digits)?)
}

fn parse_seed(text: &str) -> Result<u16, String> {
    let digits = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text);
    u16::from_str_radix(digits, 16).map_err(|e| format!("invalid seed {text:?}: {e}"))
}
