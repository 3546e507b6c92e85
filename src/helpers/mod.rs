//! Display helpers for command output

mod date;
mod number;

pub use date::*;
pub use number::*;
