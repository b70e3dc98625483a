pub mod error;
pub mod format;
pub mod report;
pub mod schedule;
pub mod summary;
pub mod types;
pub mod validation;

pub use error::ParcelaError;
pub use types::*;

/// Standard result type for all parcela operations
pub type ParcelaResult<T> = Result<T, ParcelaError>;
