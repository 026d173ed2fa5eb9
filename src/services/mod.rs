pub mod errors;
pub mod generate;

pub use errors::{ServiceError, ServiceResult};
