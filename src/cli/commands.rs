use crate::codec::from_hex;
use crate::config::InputFormat;
use crate::error::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "chain-bytes", about = "Byte array encoding helpers")]
pub struct Opt {
    #[arg(
        long = "text",
        global = true,
        help = "Read INPUT as raw UTF-8 text instead of hex"
    )]
    pub text: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    #[command(name = "base58", about = "Encode bytes as Base58")]
    Base58 {
        #[arg(help = "Bytes to encode")]
        input: String,
    },
    #[command(
        name = "base58check",
        about = "Encode bytes as Base58 with a 4-byte checksum"
    )]
    Base58Check {
        #[arg(help = "Bytes to encode")]
        input: String,
    },
    #[command(name = "hex", about = "Print bytes as lowercase hex")]
    Hex {
        #[arg(help = "Bytes to print")]
        input: String,
    },
    #[command(name = "reverse", about = "Reverse the byte order")]
    Reverse {
        #[arg(help = "Bytes to reverse")]
        input: String,
    },
    #[command(name = "sub", about = "Extract SIZE bytes starting at START")]
    Sub {
        #[arg(help = "Source bytes")]
        input: String,
        #[arg(help = "Offset of the first byte")]
        start: usize,
        #[arg(help = "Number of bytes to take")]
        size: usize,
    },
    #[command(name = "addend", about = "Append the #END marker")]
    AddEnd {
        #[arg(help = "Bytes to terminate")]
        input: String,
    },
    #[command(name = "trim", about = "Cut bytes at the first #END marker")]
    Trim {
        #[arg(help = "Bytes to trim")]
        input: String,
    },
    #[command(
        name = "validate",
        about = "Check that a string only uses Base58 symbols"
    )]
    Validate {
        #[arg(help = "Base58 string")]
        encoded: String,
    },
}

/// Turn a command-line argument into bytes according to `format`
pub fn parse_input(input: &str, format: InputFormat) -> Result<Vec<u8>> {
    match format {
        InputFormat::Hex => from_hex(input),
        InputFormat::Text => Ok(input.as_bytes().to_vec()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ByteError;

    #[test]
    fn test_parse_hex_input() {
        assert_eq!(
            parse_input("00ff", InputFormat::Hex).unwrap(),
            vec![0x00, 0xff]
        );
        assert!(matches!(
            parse_input("0", InputFormat::Hex),
            Err(ByteError::InvalidHex(_))
        ));
    }

    #[test]
    fn test_parse_text_input() {
        assert_eq!(
            parse_input("0", InputFormat::Text).unwrap(),
            b"0".to_vec()
        );
    }

    #[test]
    fn test_cli_parses_sub_command() {
        let opt = Opt::parse_from(["chain-bytes", "sub", "00112233", "1", "2"]);
        assert!(!opt.text);
        match opt.command {
            Command::Sub { input, start, size } => {
                assert_eq!(input, "00112233");
                assert_eq!(start, 1);
                assert_eq!(size, 2);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_text_flag_after_subcommand() {
        let opt = Opt::parse_from(["chain-bytes", "addend", "hello", "--text"]);
        assert!(opt.text);
        assert!(matches!(opt.command, Command::AddEnd { .. }));
    }
}
