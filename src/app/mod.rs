//! Load dispatch and report rendering.
mod runner;
mod summary;


pub use runner::run_load;
pub use summary::{SEPARATOR, banner_line, format_percent, percent, print_summary, summary_lines};
