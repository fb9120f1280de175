//! Utilities shared by the arithmetic implementations.

mod pool;
mod size;

pub use pool::Pool;
pub use size::Size;
