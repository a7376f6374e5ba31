//! Content - Block Documents
//!
//! The data the gallery renders: testimonials and buttons, read from TOML or
//! JSON content files.

mod loader;

pub use loader::*;

use gpui::ElementId;
use serde::{Deserialize, Serialize};

use crate::components::blocks::testimonial::TestimonialData;
use crate::components::primitives::button::{Button, ButtonSize, ButtonVariant};

/// Serializable button props
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonData {
    pub label: String,
    #[serde(default)]
    pub variant: ButtonVariant,
    #[serde(default)]
    pub size: ButtonSize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

impl ButtonData {
    /// Build the component; the caller attaches a handler if it wants one
    pub fn to_button(&self, id: impl Into<ElementId>) -> Button {
        let button = Button::new(id, self.label.clone())
            .variant(self.variant)
            .size(self.size);

        match &self.href {
            Some(href) => button.href(href.clone()),
            None => button,
        }
    }
}

/// A document of content blocks
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default)]
    pub testimonials: Vec<TestimonialData>,
    #[serde(default)]
    pub buttons: Vec<ButtonData>,
}

impl ContentDocument {
    pub fn is_empty(&self) -> bool {
        self.testimonials.is_empty() && self.buttons.is_empty()
    }
}
