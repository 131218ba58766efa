use crate::config::RunConfig;
use crate::metrics::RunResult;

pub const SEPARATOR: &str = "==============================================";

#[must_use]
pub fn banner_line(config: &RunConfig) -> String {
    format!(
        "Performing load test on {} with {} requests and {} concurrent cells.",
        config.url, config.requests, config.concurrency
    )
}

/// Share of `count` in `total` as a percentage. Returns zero when `total`
/// is zero.
#[must_use]
#[expect(clippy::float_arithmetic)]
pub const fn percent(count: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    count as f64 * 100.0 / total as f64
}

/// `percent` rendered with two decimals, e.g. `33.33`.
#[must_use]
pub fn format_percent(count: u64, total: u64) -> String {
    format!("{:.2}", percent(count, total))
}

#[must_use]
pub fn summary_lines(result: &RunResult) -> Vec<String> {
    let mut lines = Vec::with_capacity(result.summary.len().saturating_add(5));
    lines.push(SEPARATOR.to_owned());
    lines.push(format!("Total execution time: {:?}", result.elapsed));
    lines.push(format!(
        "Total number of request made: {}",
        result.total_requests
    ));
    lines.push(String::new());
    lines.push("Summary:".to_owned());

    if result.total_requests == 0 {
        return lines;
    }
    for (code, count) in result.summary.iter() {
        lines.push(format!(
            "Status code {} | Count  {} ({}%)",
            code,
            count,
            format_percent(count, result.total_requests)
        ));
    }
    lines
}

pub fn print_summary(result: &RunResult) {
    for line in summary_lines(result) {
        println!("{}", line);
    }
}
