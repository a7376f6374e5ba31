//! Gallery View
//!
//! Root view that mounts the content blocks of one document.

use std::path::PathBuf;
use std::time::Duration;

use gpui::{
    div, px, ClickEvent, Context, Entity, FocusHandle, FontWeight, InteractiveElement,
    IntoElement, ParentElement, Render, SharedString, StatefulInteractiveElement, Styled, Window,
    prelude::*,
};
use tracing::{debug, info};

use crate::components::blocks::testimonial::TestimonialBlock;
use crate::components::primitives::button::ButtonTarget;
use crate::constants::{BOUNDS_SAVE_DELAY_MS, CONTENT_MAX_WIDTH};
use crate::content::{ContentDocument, ContentSource, resolve_content};
use crate::helpers::{Debouncer, GalleryAction};
use crate::states::{i18n_format, i18n_gallery, update_app_state_and_save};
use crate::theme::colors::BlockColors;
use crate::theme::typography::Typography;
use crate::views::GalleryTitleBar;

/// Gallery root view
pub struct Gallery {
    document: ContentDocument,
    source: ContentSource,
    load_error: Option<String>,
    clicks: usize,
    focus_handle: FocusHandle,
    title_bar: Entity<GalleryTitleBar>,
    bounds_save: Debouncer,
}

impl Gallery {
    pub fn new(
        document: ContentDocument,
        source: ContentSource,
        load_error: Option<String>,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let focus_handle = cx.focus_handle();
        window.focus(&focus_handle);

        // Drags and resizes emit many bounds changes; persist only the last one
        cx.observe_window_bounds(window, |this, window, cx| {
            let bounds = window.bounds();
            this.bounds_save.schedule(cx, move |cx| {
                update_app_state_and_save(cx, "save_bounds", move |state, _cx| {
                    state.set_bounds(bounds);
                });
            });
        })
        .detach();

        Self {
            document,
            source,
            load_error,
            clicks: 0,
            focus_handle,
            title_bar: cx.new(|cx| GalleryTitleBar::new(window, cx)),
            bounds_save: Debouncer::new(Duration::from_millis(BOUNDS_SAVE_DELAY_MS)),
        }
    }

    fn content_path(&self) -> Option<PathBuf> {
        match &self.source {
            ContentSource::File(path) => Some(path.clone()),
            ContentSource::BuiltIn => None,
        }
    }

    fn reload(&mut self, _: &GalleryAction, _window: &mut Window, cx: &mut Context<Self>) {
        let path = self.content_path();
        let (document, source, load_error) = resolve_content(path.as_deref());
        info!(source = ?source, "Reloaded gallery content");

        self.document = document;
        self.source = source;
        self.load_error = load_error;
        cx.notify();
    }

    fn source_label(&self, cx: &Context<Self>) -> SharedString {
        match &self.source {
            ContentSource::BuiltIn => i18n_gallery(cx, "source_builtin"),
            ContentSource::File(path) => i18n_format(
                cx,
                "gallery.source_file",
                &[("path", &path.display().to_string())],
            ),
        }
    }

    fn render_heading(text: SharedString) -> impl IntoElement {
        div()
            .mt_4()
            .text_size(px(Typography::TEXT_2XL))
            .font_weight(FontWeight::SEMIBOLD)
            .text_color(BlockColors::text_heading())
            .child(text)
    }

    fn render_buttons(&self, cx: &Context<Self>) -> impl IntoElement {
        div().flex().flex_wrap().items_center().gap_3().my_4().children(
            self.document.buttons.iter().enumerate().map(|(ix, data)| {
                let button = data.to_button(("content-button", ix));
                match button.target() {
                    ButtonTarget::Link(_) => button,
                    ButtonTarget::Control => {
                        button.on_click(cx.listener(|this, _event: &ClickEvent, _window, cx| {
                            this.clicks += 1;
                            debug!(clicks = this.clicks, "Gallery button activated");
                            cx.notify();
                        }))
                    }
                }
            }),
        )
    }
}

impl Render for Gallery {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let title = self
            .document
            .title
            .clone()
            .map(SharedString::from)
            .unwrap_or_else(|| i18n_gallery(cx, "title"));
        let source_label = self.source_label(cx);
        let clicks_label = i18n_format(cx, "gallery.clicks", &[("count", &self.clicks.to_string())]);
        let load_error = self.load_error.clone().map(|error| {
            i18n_format(cx, "gallery.load_failed", &[("error", &error)])
        });

        let column = div()
            .w_full()
            .max_w(px(CONTENT_MAX_WIDTH))
            .mx_auto()
            .flex()
            .flex_col()
            .child(
                div()
                    .text_size(px(Typography::TEXT_2XL))
                    .font_weight(FontWeight::BOLD)
                    .text_color(BlockColors::text_heading())
                    .child(title),
            )
            .child(
                div()
                    .text_size(px(Typography::TEXT_XS))
                    .text_color(BlockColors::text_secondary())
                    .child(source_label),
            )
            .when_some(load_error, |el, error| {
                el.child(
                    div()
                        .mt_2()
                        .text_size(px(Typography::TEXT_SM))
                        .text_color(BlockColors::danger())
                        .child(error),
                )
            })
            .when(self.document.is_empty(), |el| {
                el.child(
                    div()
                        .mt_6()
                        .text_color(BlockColors::text_secondary())
                        .child(i18n_gallery(cx, "empty")),
                )
            })
            .when(!self.document.testimonials.is_empty(), |el| {
                el.child(Self::render_heading(i18n_gallery(cx, "testimonials")))
                    .children(self.document.testimonials.iter().cloned().map(TestimonialBlock::new))
            })
            .when(!self.document.buttons.is_empty(), |el| {
                el.child(Self::render_heading(i18n_gallery(cx, "buttons")))
                    .child(self.render_buttons(cx))
                    .child(
                        div()
                            .text_size(px(Typography::TEXT_SM))
                            .text_color(BlockColors::text_secondary())
                            .child(clicks_label),
                    )
            });

        div()
            .track_focus(&self.focus_handle)
            .on_action(cx.listener(Self::reload))
            .size_full()
            .flex()
            .flex_col()
            .bg(BlockColors::background())
            .child(self.title_bar.clone())
            .child(
                div()
                    .id("gallery-scroll")
                    .flex_1()
                    .overflow_y_scroll()
                    .p_6()
                    .child(column),
            )
    }
}
