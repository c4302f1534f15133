pub mod config;
pub mod error;
pub mod models;
pub mod validation;

pub use error::{ErrorCode, ErrorResponse};
pub use models::*;
pub use validation::*;
