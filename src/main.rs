// This is the entry point for my chain-bytes command-line tool
// Everything here is a thin wrapper: the real work lives in the library
use chain_bytes::cli::parse_input;
use chain_bytes::{
    add_end, encode_base58, encode_base58_with_checksum, is_base58, reverse, sub_buf, to_hex,
    trim_buf, Command, InputFormat, Opt, GLOBAL_CONFIG,
};
use clap::Parser;
use log::{error, info, warn, LevelFilter};
use std::process;

fn main() {
    // I parse the command line arguments using clap
    let opt = Opt::parse();

    // The --text flag wins over whatever CHAIN_BYTES_INPUT says
    if opt.text {
        GLOBAL_CONFIG.set_input_format(InputFormat::Text);
    }

    // I take the log level from the config, but it never drops below Error
    // so a failing command can't exit silently. A bad CHAIN_BYTES_LOG value
    // falls back to Warn and gets reported once the logger is up.
    let (level, level_error) = match GLOBAL_CONFIG.get_logger_level() {
        Ok(level) => (level, None),
        Err(e) => (LevelFilter::Warn, Some(e)),
    };
    env_logger::builder().filter_level(level).init();
    if let Some(e) = level_error {
        warn!("{e}; using warn");
    }

    // I run the command and, if it fails, log the error and exit with code 1
    if let Err(e) = run_command(opt.command) {
        error!("Error: {e}");
        process::exit(1);
    }
}

// Each subcommand maps onto one library function
fn run_command(command: Command) -> Result<(), Box<dyn std::error::Error>> {
    // I work out how byte arguments should be read (hex unless told otherwise)
    let format = GLOBAL_CONFIG.get_input_format()?;
    info!("Reading byte input as {format}");

    match command {
        // Plain Base58, the way addresses look without a checksum
        Command::Base58 { input } => {
            let bytes = parse_input(&input, format)?;
            println!("{}", encode_base58(&bytes));
        }
        // Base58 with the 4-byte double SHA-256 checksum appended first
        Command::Base58Check { input } => {
            let bytes = parse_input(&input, format)?;
            println!("{}", encode_base58_with_checksum(&bytes));
        }
        // Useful with --text to see the raw bytes of a string
        Command::Hex { input } => {
            let bytes = parse_input(&input, format)?;
            println!("{}", to_hex(&bytes));
        }
        // I print a reversed copy, e.g. to flip a hash between byte orders
        Command::Reverse { input } => {
            let bytes = parse_input(&input, format)?;
            println!("{}", to_hex(&reverse(&bytes)));
        }
        // Out-of-range requests come back as an error instead of a panic
        Command::Sub { input, start, size } => {
            let bytes = parse_input(&input, format)?;
            let sub = sub_buf(&bytes, start, size)?;
            println!("{}", to_hex(&sub));
        }
        // Appending the marker twice is a no-op
        Command::AddEnd { input } => {
            let bytes = parse_input(&input, format)?;
            println!("{}", to_hex(&add_end(&bytes)));
        }
        // I keep everything before the first #END
        Command::Trim { input } => {
            let bytes = parse_input(&input, format)?;
            println!("{}", to_hex(&trim_buf(&bytes)));
        }
        // This only checks the alphabet, there is no decoder
        Command::Validate { encoded } => {
            if !is_base58(&encoded) {
                return Err(format!("Not a Base58 string: {encoded}").into());
            }
            println!("Valid Base58");
        }
    }
    Ok(())
}
