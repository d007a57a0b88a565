use clap::{Parser, Subcommand, ValueEnum};
use qr_payload::{BitSequence, EncodeError, Encoder, Mode, ModeEncoder};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "qrenc", version, about = "QR data payload encoder")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    Numeric,
    Alphanumeric,
    Byte,
    Kanji,
}

impl From<ModeArg> for Mode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Numeric => Mode::Numeric,
            ModeArg::Alphanumeric => Mode::Alphanumeric,
            ModeArg::Byte => Mode::Byte,
            ModeArg::Kanji => Mode::Kanji,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Encode text and print the payload bits
    Encode {
        #[arg(long, value_enum)]
        mode: ModeArg,
        /// Prefix the mode indicator and character count
        #[arg(long)]
        header: bool,
        /// Symbol version used to size the character count (1-40)
        #[arg(long, default_value_t = 1)]
        version: u8,
        text: String,
    },
    /// Check whether text is valid for a mode
    Validate {
        #[arg(long, value_enum)]
        mode: ModeArg,
        text: String,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Command::Encode {
            mode,
            header,
            version,
            text,
        } => encode_cmd(mode.into(), header, version, &text),
        Command::Validate { mode, text } => validate_cmd(mode.into(), &text),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn encode_cmd(mode: Mode, header: bool, version: u8, text: &str) -> Result<(), EncodeError> {
    let encoder = Encoder::for_mode(mode);
    let bits = if header {
        encoder.encode_segment(text)?.to_bits(version)?
    } else {
        encoder.encode(text)?
    };
    println!("{}", grouped(&bits));
    println!("{} bits", bits.len());
    Ok(())
}

fn validate_cmd(mode: Mode, text: &str) -> Result<(), EncodeError> {
    Encoder::for_mode(mode).validate(text)?;
    println!("valid {} input ({} characters)", mode, text.chars().count());
    Ok(())
}

/// Bits in groups of eight for readability
fn grouped(bits: &BitSequence) -> String {
    let digits = bits.to_string();
    digits
        .as_bytes()
        .chunks(8)
        .map(|chunk| String::from_utf8_lossy(chunk).into_owned())
        .collect::<Vec<_>>()
        .join(" ")
}
