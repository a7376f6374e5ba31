//! Helper Utilities
//!
//! Common utilities used across the application.

mod action;
mod debounce;
mod fs;

pub use action::*;
pub use debounce::*;
pub use fs::*;
