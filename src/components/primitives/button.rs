//! Button Component
//!
//! A call-to-action that renders either as a link (when given an `href`) or as
//! a clickable control. Styling is resolved from static per-size and
//! per-variant tables and layered in a fixed order: base, size, variant, then
//! any caller-supplied layers.

use gpui::{
    div, prelude::*, px, App, ClickEvent, Div, ElementId, FontWeight, InteractiveElement,
    IntoElement, ParentElement, Pixels, RenderOnce, Rgba, SharedString, Stateful,
    StatefulInteractiveElement, Styled, Window,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::theme::colors::BlockColors;
use crate::theme::typography::Typography;

/// Button variant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonVariant {
    /// Filled primary button
    #[default]
    Primary,
    /// Filled neutral button
    Secondary,
    /// Bordered button with no fill
    Outline,
}

/// Button size
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ButtonSize {
    /// Small button
    #[serde(rename = "sm", alias = "small")]
    Small,
    /// Medium button (default)
    #[default]
    #[serde(rename = "md", alias = "medium")]
    Medium,
    /// Large button
    #[serde(rename = "lg", alias = "large")]
    Large,
}

/// Border stroke weight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderWeight {
    Thin,
    Thick,
}

/// Drop shadow level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Elevation {
    Flat,
    Medium,
    Large,
}

impl Elevation {
    fn apply<E: Styled>(self, element: E) -> E {
        match self {
            Elevation::Flat => element.shadow_none(),
            Elevation::Medium => element.shadow_md(),
            Elevation::Large => element.shadow_lg(),
        }
    }
}

/// A partial button style.
///
/// Every field is optional; `refine` copies the fields that are set on the
/// other layer, so a later layer wins wherever both define a value.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ButtonStyle {
    pub padding_x: Option<Pixels>,
    pub padding_y: Option<Pixels>,
    pub text_size: Option<Pixels>,
    pub corner_radius: Option<Pixels>,
    pub font_weight: Option<FontWeight>,
    pub background: Option<Rgba>,
    pub text_color: Option<Rgba>,
    pub border: Option<BorderWeight>,
    pub border_color: Option<Rgba>,
    pub elevation: Option<Elevation>,
    pub hover_background: Option<Rgba>,
    pub hover_elevation: Option<Elevation>,
}

impl ButtonStyle {
    /// Overlay `other` onto this style
    pub fn refine(&mut self, other: &ButtonStyle) {
        macro_rules! take {
            ($($field:ident),*) => {
                $(if other.$field.is_some() { self.$field = other.$field; })*
            };
        }
        take!(
            padding_x,
            padding_y,
            text_size,
            corner_radius,
            font_weight,
            background,
            text_color,
            border,
            border_color,
            elevation,
            hover_background,
            hover_elevation
        );
    }

    /// Return this style with `other` overlaid
    pub fn refined(mut self, other: &ButtonStyle) -> Self {
        self.refine(other);
        self
    }

    /// Apply the set fields to an element
    fn apply(self, mut element: Stateful<Div>) -> Stateful<Div> {
        if let Some(padding_x) = self.padding_x {
            element = element.px(padding_x);
        }
        if let Some(padding_y) = self.padding_y {
            element = element.py(padding_y);
        }
        if let Some(text_size) = self.text_size {
            element = element.text_size(text_size);
        }
        if let Some(radius) = self.corner_radius {
            element = element.rounded(radius);
        }
        if let Some(weight) = self.font_weight {
            element = element.font_weight(weight);
        }
        if let Some(background) = self.background {
            element = element.bg(background);
        }
        if let Some(color) = self.text_color {
            element = element.text_color(color);
        }
        if let Some(border) = self.border {
            element = match border {
                BorderWeight::Thin => element.border_1(),
                BorderWeight::Thick => element.border_2(),
            };
        }
        if let Some(color) = self.border_color {
            element = element.border_color(color);
        }
        if let Some(elevation) = self.elevation {
            element = elevation.apply(element);
        }

        let (hover_background, hover_elevation) = (self.hover_background, self.hover_elevation);
        if hover_background.is_some() || hover_elevation.is_some() {
            element = element.hover(move |mut style| {
                if let Some(background) = hover_background {
                    style = style.bg(background);
                }
                if let Some(elevation) = hover_elevation {
                    style = elevation.apply(style);
                }
                style
            });
        }

        element
    }
}

/// Styling shared by every button
pub fn base_layer() -> ButtonStyle {
    ButtonStyle {
        font_weight: Some(FontWeight::SEMIBOLD),
        corner_radius: Some(px(8.0)),
        ..Default::default()
    }
}

impl ButtonSize {
    /// Padding and text scale preset
    pub fn layer(self) -> ButtonStyle {
        let (padding_x, padding_y, text_size) = match self {
            ButtonSize::Small => (16.0, 8.0, Typography::TEXT_SM),
            ButtonSize::Medium => (24.0, 12.0, Typography::TEXT_BASE),
            ButtonSize::Large => (32.0, 16.0, Typography::TEXT_LG),
        };

        ButtonStyle {
            padding_x: Some(px(padding_x)),
            padding_y: Some(px(padding_y)),
            text_size: Some(px(text_size)),
            ..Default::default()
        }
    }
}

impl ButtonVariant {
    /// Color and border preset
    pub fn layer(self) -> ButtonStyle {
        match self {
            ButtonVariant::Primary => ButtonStyle {
                background: Some(BlockColors::primary_600()),
                text_color: Some(BlockColors::white()),
                elevation: Some(Elevation::Medium),
                hover_background: Some(BlockColors::primary_700()),
                hover_elevation: Some(Elevation::Large),
                ..Default::default()
            },
            ButtonVariant::Secondary => ButtonStyle {
                background: Some(BlockColors::gray_600()),
                text_color: Some(BlockColors::white()),
                hover_background: Some(BlockColors::gray_700()),
                ..Default::default()
            },
            ButtonVariant::Outline => ButtonStyle {
                border: Some(BorderWeight::Thick),
                border_color: Some(BlockColors::primary_600()),
                text_color: Some(BlockColors::primary_600()),
                hover_background: Some(BlockColors::primary_50()),
                ..Default::default()
            },
        }
    }
}

/// Resolve the final style: base, size, variant, then each extra layer in order
pub fn resolve_style(variant: ButtonVariant, size: ButtonSize, extra: &[ButtonStyle]) -> ButtonStyle {
    extra.iter().fold(
        base_layer().refined(&size.layer()).refined(&variant.layer()),
        |style, layer| style.refined(layer),
    )
}

/// What activating the button does
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ButtonTarget {
    /// Navigate to the URI
    Link(SharedString),
    /// Invoke the click handler, if any
    Control,
}

/// A styled button component
#[derive(IntoElement)]
pub struct Button {
    id: ElementId,
    label: SharedString,
    variant: ButtonVariant,
    size: ButtonSize,
    href: Option<SharedString>,
    extra: Vec<ButtonStyle>,
    on_click: Option<Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>>,
}

impl Button {
    /// Create a new button
    pub fn new(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            variant: ButtonVariant::Primary,
            size: ButtonSize::Medium,
            href: None,
            extra: Vec::new(),
            on_click: None,
        }
    }

    /// Set the button variant
    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set the button size
    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    /// Render as a link to `href`
    pub fn href(mut self, href: impl Into<SharedString>) -> Self {
        self.href = Some(href.into());
        self
    }

    /// Add a style layer on top of the size and variant presets
    pub fn extra_style(mut self, layer: ButtonStyle) -> Self {
        self.extra.push(layer);
        self
    }

    /// Set the click handler. Ignored when the button is a link.
    pub fn on_click(mut self, handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }

    /// Create an outline button
    pub fn outline(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Outline)
    }

    /// Create a secondary button
    pub fn secondary(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Secondary)
    }

    /// Link when a non-empty `href` is set, control otherwise
    pub fn target(&self) -> ButtonTarget {
        match &self.href {
            Some(href) if !href.is_empty() => ButtonTarget::Link(href.clone()),
            _ => ButtonTarget::Control,
        }
    }

    /// The style this button renders with
    pub fn resolved_style(&self) -> ButtonStyle {
        resolve_style(self.variant, self.size, &self.extra)
    }
}

impl RenderOnce for Button {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let style = self.resolved_style();
        let target = self.target();

        let element = style.apply(
            div()
                .id(self.id)
                .flex()
                .items_center()
                .justify_center()
                .cursor_pointer()
                .child(self.label),
        );

        match target {
            ButtonTarget::Link(href) => element.on_click(move |_event: &ClickEvent, _window, cx| {
                debug!(href = %href, "Opening button link");
                cx.open_url(&href);
            }),
            ButtonTarget::Control => element.when_some(self.on_click, |el, handler| el.on_click(handler)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gpui::{point, Context, Modifiers, Point, Render, TestAppContext};
    use std::cell::Cell;
    use std::rc::Rc;

    /// Mounts a freshly built button on every frame
    struct ButtonHost {
        build: Box<dyn Fn() -> Button>,
    }

    impl Render for ButtonHost {
        fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
            div().flex().child((self.build)())
        }
    }

    fn counting_handler(clicks: &Rc<Cell<usize>>) -> impl Fn(&ClickEvent, &mut Window, &mut App) + 'static {
        let clicks = clicks.clone();
        move |_, _, _| clicks.set(clicks.get() + 1)
    }

    // The host puts the button at the window origin; this lands in its padding
    fn inside_button() -> Point<Pixels> {
        point(px(4.0), px(4.0))
    }

    #[test]
    fn defaults_are_primary_medium() {
        let button = Button::new("cta", "Go");
        assert_eq!(
            button.resolved_style(),
            resolve_style(ButtonVariant::Primary, ButtonSize::Medium, &[])
        );
        assert_eq!(button.target(), ButtonTarget::Control);
    }

    #[test]
    fn size_presets() {
        let small = ButtonSize::Small.layer();
        assert_eq!(small.padding_x, Some(px(16.0)));
        assert_eq!(small.padding_y, Some(px(8.0)));
        assert_eq!(small.text_size, Some(px(Typography::TEXT_SM)));

        let large = ButtonSize::Large.layer();
        assert_eq!(large.padding_x, Some(px(32.0)));
        assert_eq!(large.padding_y, Some(px(16.0)));
        assert_eq!(large.text_size, Some(px(Typography::TEXT_LG)));
    }

    #[test]
    fn outline_has_border_and_no_fill() {
        let style = resolve_style(ButtonVariant::Outline, ButtonSize::Medium, &[]);
        assert_eq!(style.border, Some(BorderWeight::Thick));
        assert_eq!(style.border_color, Some(BlockColors::primary_600()));
        assert_eq!(style.text_color, Some(BlockColors::primary_600()));
        assert_eq!(style.background, None);
    }

    #[test]
    fn resolution_keeps_layer_order() {
        let expected = base_layer()
            .refined(&ButtonSize::Large.layer())
            .refined(&ButtonVariant::Secondary.layer());
        assert_eq!(
            resolve_style(ButtonVariant::Secondary, ButtonSize::Large, &[]),
            expected
        );

        // Base and size fields survive the variant layer untouched
        assert_eq!(expected.font_weight, Some(FontWeight::SEMIBOLD));
        assert_eq!(expected.corner_radius, Some(px(8.0)));
        assert_eq!(expected.padding_x, Some(px(32.0)));
        assert_eq!(expected.background, Some(BlockColors::gray_600()));
    }

    #[test]
    fn extra_layers_override_in_order() {
        let wide = ButtonStyle {
            padding_x: Some(px(48.0)),
            ..Default::default()
        };
        let red = ButtonStyle {
            background: Some(BlockColors::danger()),
            padding_x: Some(px(40.0)),
            ..Default::default()
        };

        let style = resolve_style(ButtonVariant::Primary, ButtonSize::Small, &[wide, red]);
        assert_eq!(style.padding_x, Some(px(40.0)));
        assert_eq!(style.background, Some(BlockColors::danger()));
        // Untouched fields still come from the presets
        assert_eq!(style.padding_y, Some(px(8.0)));
        assert_eq!(style.text_color, Some(BlockColors::white()));
    }

    #[test]
    fn resolution_is_deterministic() {
        let extra = [ButtonStyle {
            corner_radius: Some(px(2.0)),
            ..Default::default()
        }];
        for variant in [ButtonVariant::Primary, ButtonVariant::Secondary, ButtonVariant::Outline] {
            for size in [ButtonSize::Small, ButtonSize::Medium, ButtonSize::Large] {
                assert_eq!(
                    resolve_style(variant, size, &extra),
                    resolve_style(variant, size, &extra)
                );
            }
        }
    }

    #[test]
    fn href_makes_a_link() {
        let button = Button::new("docs", "Read the docs").href("https://example.com/docs");
        assert_eq!(
            button.target(),
            ButtonTarget::Link("https://example.com/docs".into())
        );
    }

    #[test]
    fn empty_href_is_a_control() {
        let button = Button::outline("empty", "Empty").href("");
        assert_eq!(button.target(), ButtonTarget::Control);
    }

    #[gpui::test]
    fn control_calls_handler_once_per_click(cx: &mut TestAppContext) {
        let clicks = Rc::new(Cell::new(0));
        let handler_clicks = clicks.clone();
        let (_host, cx) = cx.add_window_view(move |_window, _cx| ButtonHost {
            build: Box::new(move || Button::new("save", "Save").on_click(counting_handler(&handler_clicks))),
        });

        cx.simulate_click(inside_button(), Modifiers::none());
        assert_eq!(clicks.get(), 1);

        cx.simulate_click(inside_button(), Modifiers::none());
        assert_eq!(clicks.get(), 2);
        assert_eq!(cx.opened_url(), None);
    }

    #[gpui::test]
    fn link_opens_href_and_skips_handler(cx: &mut TestAppContext) {
        let clicks = Rc::new(Cell::new(0));
        let handler_clicks = clicks.clone();
        let (_host, cx) = cx.add_window_view(move |_window, _cx| ButtonHost {
            build: Box::new(move || {
                Button::new("docs", "Read the docs")
                    .href("https://example.com/docs")
                    .on_click(counting_handler(&handler_clicks))
            }),
        });

        // Drawing alone must not activate anything
        cx.run_until_parked();
        assert_eq!(clicks.get(), 0);
        assert_eq!(cx.opened_url(), None);

        cx.simulate_click(inside_button(), Modifiers::none());
        assert_eq!(clicks.get(), 0);
        assert_eq!(cx.opened_url().as_deref(), Some("https://example.com/docs"));
    }

    #[gpui::test]
    fn empty_href_click_reaches_handler(cx: &mut TestAppContext) {
        let clicks = Rc::new(Cell::new(0));
        let handler_clicks = clicks.clone();
        let (_host, cx) = cx.add_window_view(move |_window, _cx| ButtonHost {
            build: Box::new(move || {
                Button::secondary("empty", "Empty")
                    .href("")
                    .on_click(counting_handler(&handler_clicks))
            }),
        });

        cx.simulate_click(inside_button(), Modifiers::none());
        assert_eq!(clicks.get(), 1);
        assert_eq!(cx.opened_url(), None);
    }

    #[test]
    fn variant_and_size_parse_from_content_names() {
        #[derive(Deserialize)]
        struct Props {
            variant: ButtonVariant,
            size: ButtonSize,
        }

        let props: Props = toml::from_str("variant = \"outline\"\nsize = \"lg\"").expect("parse");
        assert_eq!(props.variant, ButtonVariant::Outline);
        assert_eq!(props.size, ButtonSize::Large);

        let props: Props = toml::from_str("variant = \"secondary\"\nsize = \"small\"").expect("parse");
        assert_eq!(props.variant, ButtonVariant::Secondary);
        assert_eq!(props.size, ButtonSize::Small);
    }
}
