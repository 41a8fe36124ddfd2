//! Link-layer/physical-layer simulator demo CLI.
//!
//! Usage:
//!   linksim [OPTIONS] <message>
//!
//! Options:
//!   -f, --framing <disc>   none, char-count, byte-stuffing, bit-stuffing (default: char-count)
//!   -e, --ecc <code>       none, even-parity, crc32, hamming (default: hamming)
//!   -l, --line <code>      nrz-polar, manchester, bipolar (default: nrz-polar)
//!   -c, --carrier <mod>    ask, fsk, qpsk, 16-qam (overrides --line when set)
//!   -n, --noise <sigma>    Gaussian noise standard deviation (default: 0.0)
//!   -s, --seed <u64>       channel RNG seed (default: 1)
//!   -h, --help             Show this help message
//!
//! Examples:
//!   linksim "Hello, world!"
//!   linksim -e crc32 -n 0.3 "Hello, world!"
//!   linksim -c qpsk -n 0.5 -s 7 "CQ test"

use linksim::error_correction::ErrorCode;
use linksim::framing::Framing;
use linksim::modulation::{Carrier, LineCode};
use linksim::{decode, encode, Channel};
use std::str::FromStr;

struct RunConfig {
    message: String,
    framing: Framing,
    error_code: ErrorCode,
    line_code: LineCode,
    carrier: Option<Carrier>,
    sigma: f64,
    seed: u64,
}

impl RunConfig {
    fn parse_args() -> Result<Self, String> {
        let args: Vec<String> = std::env::args().collect();

        let mut framing = Framing::CharCount;
        let mut error_code = ErrorCode::Hamming;
        let mut line_code = LineCode::NrzPolar;
        let mut carrier = None;
        let mut sigma = 0.0;
        let mut seed = 1u64;
        let mut message = None;

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "-f" | "--framing" => {
                    i += 1;
                    let value = args.get(i).ok_or("Missing value for --framing")?;
                    framing = Framing::from_str(value).map_err(|e| e.to_string())?;
                }
                "-e" | "--ecc" => {
                    i += 1;
                    let value = args.get(i).ok_or("Missing value for --ecc")?;
                    error_code = ErrorCode::from_str(value).map_err(|e| e.to_string())?;
                }
                "-l" | "--line" => {
                    i += 1;
                    let value = args.get(i).ok_or("Missing value for --line")?;
                    line_code = LineCode::from_str(value).map_err(|e| e.to_string())?;
                }
                "-c" | "--carrier" => {
                    i += 1;
                    let value = args.get(i).ok_or("Missing value for --carrier")?;
                    carrier = Some(Carrier::from_str(value).map_err(|e| e.to_string())?);
                }
                "-n" | "--noise" => {
                    i += 1;
                    let value = args.get(i).ok_or("Missing value for --noise")?;
                    sigma = value.parse().map_err(|_| format!("Invalid noise value: {value}"))?;
                }
                "-s" | "--seed" => {
                    i += 1;
                    let value = args.get(i).ok_or("Missing value for --seed")?;
                    seed = value.parse().map_err(|_| format!("Invalid seed value: {value}"))?;
                }
                "-h" | "--help" => {
                    print_help(&args[0]);
                    std::process::exit(0);
                }
                arg if !arg.starts_with('-') => {
                    if message.is_none() {
                        message = Some(arg.to_string());
                    } else {
                        return Err(format!("Unexpected argument: {arg}"));
                    }
                }
                arg => return Err(format!("Unknown option: {arg}")),
            }
            i += 1;
        }

        let message = message.ok_or("Missing message argument")?;

        Ok(RunConfig { message, framing, error_code, line_code, carrier, sigma, seed })
    }
}

fn print_help(program: &str) {
    eprintln!("Link-layer/physical-layer simulator");
    eprintln!();
    eprintln!("Usage: {program} [OPTIONS] <message>");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -f, --framing <disc>   none, char-count, byte-stuffing, bit-stuffing (default: char-count)");
    eprintln!("  -e, --ecc <code>       none, even-parity, crc32, hamming (default: hamming)");
    eprintln!("  -l, --line <code>      nrz-polar, manchester, bipolar (default: nrz-polar)");
    eprintln!("  -c, --carrier <mod>    ask, fsk, qpsk, 16-qam (overrides --line when set)");
    eprintln!("  -n, --noise <sigma>    Gaussian noise standard deviation (default: 0.0)");
    eprintln!("  -s, --seed <u64>       channel RNG seed (default: 1)");
    eprintln!("  -h, --help             Show this help message");
}

fn main() -> Result<(), String> {
    linksim::tracing_init::init_tracing();

    let config = RunConfig::parse_args()?;

    println!("Link simulator");
    println!("==============");
    println!("Message:  {}", config.message);
    println!("Framing:  {:?}", config.framing);
    println!("ECC:      {:?}", config.error_code);
    println!("Line:     {:?}", config.line_code);
    println!("Carrier:  {:?}", config.carrier);
    println!("Noise:    sigma = {:.3}", config.sigma);
    println!();

    let mut channel = Channel::new(config.seed);
    let samples = encode(
        &config.message,
        config.framing,
        config.error_code,
        config.line_code,
        config.carrier,
        config.sigma,
        &mut channel,
    );
    println!("Encoded to {} samples", samples.len());

    let result = decode(&samples, config.framing, config.error_code, config.line_code, config.carrier);

    println!("Decoded:  {:?}", result.text);
    println!("Report:   {:?}", result.error_report);

    if result.text != config.message {
        eprintln!("warning: decoded text does not match the original message");
    }

    Ok(())
}
