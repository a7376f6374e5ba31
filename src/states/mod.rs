//! State Management Layer
//!
//! Gallery preferences held in a GPUI entity behind a global store:
//!
//! ```text
//! UI Action → update_app_state_and_save → State Update → background save → refresh
//! ```

mod app;
mod i18n;

pub use app::*;
pub use i18n::*;
