//! Content Blocks
//!
//! Self-contained cards rendered from content documents.

pub mod testimonial;
