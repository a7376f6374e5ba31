//! Content Blocks Library
//!
//! GPUI components for content-rendering front-ends: a testimonial card and a
//! call-to-action button, plus the gallery application that showcases them.

rust_i18n::i18n!("locales", fallback = "en");

pub mod app;
pub mod assets;
pub mod components;
pub mod constants;
pub mod content;
pub mod error;
pub mod helpers;
pub mod states;
pub mod theme;
pub mod views;
