//! Baht Text Demo
//!
//! Writes amounts out in Thai from the command line.
//!
//! Usage:
//!   cargo run --example baht_text -- <amount>... [--unit <unit>] [--places <n>] [--no-exactly]
//!   cargo run --example baht_text -- --options <options.json> <amount>...
//!
//! Examples:
//!   cargo run --example baht_text -- 121.50 -550.25 5001000000
//!   cargo run --example baht_text -- 12345600 --unit million --places 4
//!   RUST_LOG=thai_baht_text=trace cargo run --example baht_text -- 1e12

use thai_baht_text::{FormatOptions, ThaiBahtText, Unit};
use tracing_subscriber::EnvFilter;

fn usage(program: &str) -> ! {
    eprintln!(
        "Usage: {} <amount>... [--unit baht|million|billion|trillion] [--places <0-6>] [--no-exactly] [--options <file.json>]",
        program
    );
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  cargo run --example baht_text -- 121.50 -550.25");
    eprintln!("  cargo run --example baht_text -- 12345600 --unit million --places 4");
    std::process::exit(1);
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("baht_text");

    let mut options = FormatOptions::default();
    let mut amounts = Vec::new();

    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--unit" => {
                let value = iter.next().unwrap_or_else(|| usage(program));
                options = options.with_unit(value.parse::<Unit>()?);
            }
            "--places" => {
                let value = iter.next().unwrap_or_else(|| usage(program));
                options = options.with_decimal_places(value.parse()?);
            }
            "--no-exactly" => options = options.with_exactly_suffix(false),
            "--options" => {
                let path = iter.next().unwrap_or_else(|| usage(program));
                let json = std::fs::read_to_string(path)?;
                options = FormatOptions::from_json(&json)?;
            }
            "-h" | "--help" => usage(program),
            amount => amounts.push(amount.parse::<f64>()?),
        }
    }

    if amounts.is_empty() {
        usage(program);
    }

    let mut failed = false;
    for amount in amounts {
        match ThaiBahtText::format(amount, &options) {
            Ok(text) => println!("{amount}\t{text}"),
            Err(e) => {
                eprintln!("{amount}\terror: {e}");
                failed = true;
            }
        }
    }

    if failed {
        std::process::exit(2);
    }
    Ok(())
}
