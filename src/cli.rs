use crate::clean::CleanOptions;
use clap::{Parser, ValueHint};
use std::path::PathBuf;

/// Round GeoJSON polygon coordinates and drop the consecutive duplicates
/// left behind.
#[derive(Parser, Debug)]
#[command(name = "polyclean", version, about, allow_negative_numbers = true)]
pub struct Cli {
    /// Input GeoJSON FeatureCollection
    #[arg(value_hint = ValueHint::FilePath)]
    pub input: PathBuf,

    /// Output file, written as compact JSON
    #[arg(value_hint = ValueHint::FilePath)]
    pub output: PathBuf,

    /// Decimal digits kept per ordinate (zero and negative values allowed)
    #[arg(value_parser = parse_precision, allow_hyphen_values = true)]
    pub precision: i32,

    /// Append the first position to rings that are open after cleaning
    #[arg(long)]
    pub close_rings: bool,

    /// Do not print a line per feature with removals
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity on stderr (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn options(&self) -> CleanOptions {
        CleanOptions::new(self.precision).with_close_rings(self.close_rings)
    }

    /// Log filter directive for the requested verbosity.
    pub fn log_directive(&self) -> &'static str {
        match self.verbose {
            0 => "polyclean=warn",
            1 => "polyclean=info",
            _ => "polyclean=debug",
        }
    }
}

fn parse_precision(value: &str) -> Result<i32, String> {
    value
        .trim()
        .parse()
        .map_err(|_| format!("precision must be an integer, got \"{}\"", value))
}
