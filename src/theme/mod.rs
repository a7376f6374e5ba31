//! Theme - Colors and Typography
//!
//! Static lookup tables the components resolve their styling from.

pub mod colors;
pub mod typography;
