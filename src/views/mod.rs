//! View Components
//!
//! Views for the content-blocks gallery.
//!
//! ## Layout Structure
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │                  TitleBar                   │
//! ├─────────────────────────────────────────────┤
//! │   Title / content source                    │
//! │   Testimonials                              │
//! │   Buttons + click counter                   │
//! └─────────────────────────────────────────────┘
//! ```

mod gallery;
mod title_bar;

pub use gallery::*;
pub use title_bar::*;
