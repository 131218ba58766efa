//! Core library for the `sstress` CLI.
//!
//! `sstress` fires a fixed number of GET requests at one URL with a cap on
//! how many are in flight, counts the outcome of each by HTTP status (failed
//! or timed-out requests count as 408), and prints a summary. The library
//! exposes the pieces the binary wires together: argument types, run
//! configuration, the transport, the dispatcher, and report rendering.
pub mod app;
pub mod args;
pub mod config;
pub mod error;
pub mod http;
pub mod metrics;
