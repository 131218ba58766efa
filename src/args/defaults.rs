pub(crate) const DEFAULT_USER_AGENT: &str = concat!("sstress/", env!("CARGO_PKG_VERSION"));

/// Requests issued when `--requests` is not given.
pub const DEFAULT_REQUESTS: u64 = 100;
/// Requests in flight when `--concurrency` is not given.
pub const DEFAULT_CONCURRENCY: usize = 1;
