//! HTTP transport and single-request execution.
mod executor;
mod transport;


pub use executor::execute;
pub use transport::{ReqwestTransport, Transport, TransportError};
