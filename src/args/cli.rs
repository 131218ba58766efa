use clap::Parser;

use super::defaults::{DEFAULT_CONCURRENCY, DEFAULT_REQUESTS};
use super::parsers::{parse_bool_env, parse_positive_usize};
use super::types::PositiveUsize;

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "A cli to do a stress test. Set --url <target> and fire a fixed number of GET requests with bounded concurrency."
)]
pub struct TesterArgs {
    /// Target URL for the stress test
    #[arg(long, short)]
    pub url: Option<String>,

    /// Total number of requests to send
    #[arg(long, short, default_value_t = DEFAULT_REQUESTS)]
    pub requests: u64,

    /// Maximum number of requests in flight at the same time
    #[arg(
        long,
        short,
        default_value_t = PositiveUsize::new_or_one(DEFAULT_CONCURRENCY),
        value_parser = parse_positive_usize
    )]
    pub concurrency: PositiveUsize,

    /// Enable verbose logging (sets log level to debug unless overridden by SSTRESS_LOG/RUST_LOG)
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Disable color output
    #[arg(long = "no-color", env = "NO_COLOR", value_parser = parse_bool_env)]
    pub no_color: bool,
}
