//! Shared data types.

pub mod error;

pub use error::{TfidfError, TfidfResult};
