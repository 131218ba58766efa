use clap::Parser;

use super::TesterArgs;
use crate::error::{AppError, AppResult};

pub(crate) fn parse_test_args<I, T>(args: I) -> AppResult<TesterArgs>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    TesterArgs::try_parse_from(args).map_err(AppError::from)
}
