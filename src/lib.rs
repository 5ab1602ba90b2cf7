pub mod config;
pub mod error;
pub mod operations;
pub mod tracked;
pub mod types;

pub use error::{Result, TrackvizError};
pub use operations::Operation;
pub use tracked::TrackedArray;
pub use types::{Snapshot, Trace};
