//! CLI command implementations

pub mod calc;
pub mod list;
pub mod new;
pub mod show;
