use std::ffi::OsString;
use std::sync::Arc;

use clap::{CommandFactory, FromArgMatches};

use sstress::app::{banner_line, print_summary, run_load};
use sstress::args::TesterArgs;
use sstress::config::RunConfig;
use sstress::error::{AppError, AppResult};
use sstress::http::{ReqwestTransport, Transport};

pub(crate) fn run() -> AppResult<()> {
    let args = parse_args()?;

    crate::system::logger::init_logging(args.verbose, args.no_color);

    let config = RunConfig::from_args(&args).map_err(|err| {
        tracing::error!("Missing URL (set --url).");
        AppError::validation(err)
    })?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(run_async(&config))
}

fn parse_args() -> AppResult<TesterArgs> {
    let raw_args: Vec<OsString> = std::env::args_os().collect();
    let matches = TesterArgs::command().get_matches_from(raw_args);
    Ok(TesterArgs::from_arg_matches(&matches)?)
}

async fn run_async(config: &RunConfig) -> AppResult<()> {
    println!("{}", banner_line(config));

    let transport: Arc<dyn Transport> = Arc::new(ReqwestTransport::new()?);
    let result = run_load(config, &transport).await?;

    print_summary(&result);
    Ok(())
}
