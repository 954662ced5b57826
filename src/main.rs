use clap::{ArgAction, Parser};
use env_logger::Env;
use pwm_scan::error::Result;
use pwm_scan::fasta::read_sequence;
use pwm_scan::pwm::read_pwm;
use pwm_scan::scan::{scan_sequence, scan_to_dataframe, write_table};
use pwm_scan::types::Background;
use std::io;
use std::process;

#[derive(Parser, Debug)]
#[command(
    name = "pwm-scan",
    about = "Scans a DNA sequence with a position weight matrix and reports log2-odds scores on both strands",
    long_about = "Scores every window of the sequence, as wide as the PWM, against the matrix and a \
                  background distribution. Each window is scored on the forward strand and on its \
                  reverse complement, and a tab-separated table with both scores, the better one \
                  and its strand is printed to standard output.",
    version,
    after_help = "Example usage:\n    \
                  pwm-scan esr1.pwm promoter.fa\n    \
                  pwm-scan esr1.pwm promoter.fa --bg 0.3 0.2 0.2 0.3",
    color = clap::ColorChoice::Auto
)]
struct Args {
    /// PWM file with 4 non-blank rows (A, C, G, T) of whitespace- or comma-separated numbers
    #[arg(value_name = "PROFILE_FILE")]
    profile: String,

    /// Sequence to scan, FASTA or plain text
    /// Header lines starting with '>' are ignored
    #[arg(value_name = "SEQUENCE_FILE")]
    sequence: String,

    /// Background frequencies for A, C, G and T (default: 0.25 each)
    #[arg(
        long = "bg",
        num_args = 4,
        action = ArgAction::Set,
        overrides_with = "bg",
        value_names = ["A", "C", "G", "T"],
        allow_negative_numbers = true
    )]
    bg: Option<Vec<f64>>,

    /// Log progress to standard error
    #[arg(short, long)]
    verbose: bool,
}

fn run(args: &Args) -> Result<()> {
    let pwm = read_pwm(&args.profile)?;
    let sequence = read_sequence(&args.sequence)?;

    let background = match &args.bg {
        Some(values) => Background::from_slice(values)?,
        None => Background::default(),
    };

    let rows = scan_sequence(&sequence, &pwm, &background)?;
    let mut df = scan_to_dataframe(&rows)?;
    write_table(&mut df, io::stdout().lock())
}

fn main() {
    let args = Args::parse();

    let default_filter = if args.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();

    if let Err(e) = run(&args) {
        log::debug!("{:?}", e);
        eprintln!("error: {}", e);
        process::exit(1);
    }
}
