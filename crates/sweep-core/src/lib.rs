pub mod error;
pub mod tolerance;
pub mod traits;

pub use error::{Result, SweepError};
pub use tolerance::Tolerance;
