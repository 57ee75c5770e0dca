pub mod assembly;
pub mod error;
pub mod geometry;
pub mod math;
pub mod query;
pub mod scheme;
pub mod tools;
pub mod wideline;

pub use error::{Result, WidelineError};
pub use wideline::{Wideline, WidelineProps};
