use crate::domain::constants::{
    DEFAULT_RANGE_MAX, DEFAULT_RANGE_MIN, DEFAULT_SAMPLE_COUNT, MAX_SAMPLE_COUNT,
};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "samplestat",
    version,
    about = "Draw random integer samples and report their sum, max and min"
)]
pub struct Cli {
    #[arg(long, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        short = 'n',
        long,
        default_value_t = DEFAULT_SAMPLE_COUNT,
        value_parser = parse_count,
        help = "Number of samples to draw"
    )]
    pub count: usize,
    #[arg(
        long,
        default_value_t = DEFAULT_RANGE_MIN,
        allow_negative_numbers = true,
        help = "Inclusive lower bound of each sample"
    )]
    pub min: i64,
    #[arg(
        long,
        default_value_t = DEFAULT_RANGE_MAX,
        allow_negative_numbers = true,
        help = "Inclusive upper bound of each sample"
    )]
    pub max: i64,
    #[arg(long, help = "Seed the generator for a reproducible sequence")]
    pub seed: Option<u64>,
    #[arg(
        long,
        value_delimiter = ',',
        num_args = 1..,
        allow_negative_numbers = true,
        conflicts_with_all = ["count", "seed", "min", "max"],
        help = "Use this comma-separated sequence instead of random draws"
    )]
    pub replay: Option<Vec<i64>>,
    #[arg(short, long, help = "Log debug output to stderr")]
    pub verbose: bool,
}

fn parse_count(raw: &str) -> Result<usize, String> {
    let count: usize = raw.parse().map_err(|e| format!("{e}"))?;
    if count > MAX_SAMPLE_COUNT {
        return Err(format!("at most {MAX_SAMPLE_COUNT} samples can be drawn"));
    }
    Ok(count)
}
