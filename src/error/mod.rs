mod app;
mod http;
mod load;
mod validation;

pub use app::{AppError, AppResult};
pub use http::HttpError;
pub use load::LoadError;
pub use validation::ValidationError;
