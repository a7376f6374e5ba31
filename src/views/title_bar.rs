//! Title Bar Component
//!
//! Custom title bar with the language/theme menu and a reload shortcut.

use crate::helpers::GalleryAction;
use crate::states::{GalleryStore, LocaleAction, ThemeAction, i18n_gallery, i18n_menu};
use gpui::{App, Context, Corner, Window, prelude::*};
use gpui_component::{
    IconName, Sizable, ThemeMode, TitleBar,
    button::{Button, ButtonVariants},
    h_flex,
    label::Label,
    menu::{DropdownMenu, PopupMenu},
};

/// Title bar component
pub struct GalleryTitleBar;

impl GalleryTitleBar {
    /// Create a new title bar
    pub fn new(_window: &mut Window, _cx: &mut Context<Self>) -> Self {
        Self
    }

    /// Render the settings dropdown menu
    fn render_settings_menu(menu: PopupMenu, _window: &mut Window, cx: &App) -> PopupMenu {
        let store = cx.global::<GalleryStore>().read(cx);
        let (locale, theme) = (store.locale(), store.theme());

        menu
            // Language section
            .label(i18n_menu(cx, "language"))
            .menu_with_check("中文", locale == "zh", Box::new(LocaleAction::Zh))
            .menu_with_check("English", locale == "en", Box::new(LocaleAction::En))
            .separator()
            // Theme section
            .label(i18n_menu(cx, "theme"))
            .menu_with_check(
                i18n_menu(cx, "light"),
                theme == Some(ThemeMode::Light),
                Box::new(ThemeAction::Light),
            )
            .menu_with_check(
                i18n_menu(cx, "dark"),
                theme == Some(ThemeMode::Dark),
                Box::new(ThemeAction::Dark),
            )
            .menu_with_check(
                i18n_menu(cx, "system"),
                theme.is_none(),
                Box::new(ThemeAction::System),
            )
    }
}

impl Render for GalleryTitleBar {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let right_actions = h_flex()
            .items_center()
            .justify_end()
            .px_2()
            .gap_2()
            .mr_2();

        TitleBar::new()
            .child(
                h_flex()
                    .flex_1()
                    .items_center()
                    .pl_4()
                    .child(Label::new(i18n_gallery(cx, "title")).text_sm()),
            )
            .child(
                right_actions
                    .child(
                        Button::new("reload")
                            .tooltip(i18n_gallery(cx, "reload"))
                            .icon(IconName::Redo)
                            .small()
                            .ghost()
                            .on_click(|_, window, cx| {
                                window.dispatch_action(Box::new(GalleryAction::Reload), cx);
                            }),
                    )
                    .child(
                        Button::new("settings")
                            .icon(IconName::Settings2)
                            .small()
                            .ghost()
                            .dropdown_menu(move |menu, window, cx| Self::render_settings_menu(menu, window, cx))
                            .anchor(Corner::TopRight),
                    ),
            )
    }
}
