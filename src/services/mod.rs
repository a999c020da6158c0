pub mod errors;
pub mod featured;
pub mod main;
pub mod messages;

pub use errors::{ServiceError, ServiceResult};
