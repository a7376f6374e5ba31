//! Application - App Initialization and Window Management
//!
//! Main entry point for the GPUI application.

use std::path::{Path, PathBuf};

use gpui::{
    point, px, size, AnyView, App, AppContext, Application, Bounds, SharedString,
    TitlebarOptions, WindowBounds, WindowOptions,
};
use gpui_component::{Root, Theme, ThemeMode};
use tracing::{error, info};

use crate::assets::Assets;
use crate::constants::{DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH};
use crate::content::{resolve_content, ContentSource};
use crate::helpers::{new_key_bindings, MenuAction};
use crate::states::{
    update_app_state_and_save, GalleryAppState, GalleryStore, LocaleAction, ThemeAction,
};
use crate::views::Gallery;

fn apply_theme(mode: Option<ThemeMode>, cx: &mut App) {
    match mode {
        Some(mode) => Theme::change(mode, None, cx),
        None => Theme::sync_system_appearance(None, cx),
    }
}

fn register_actions(cx: &mut App) {
    cx.on_action(|action: &MenuAction, cx: &mut App| match action {
        MenuAction::Quit => cx.quit(),
    });

    cx.on_action(|action: &LocaleAction, cx: &mut App| {
        let code = action.code();
        update_app_state_and_save(cx, "set_locale", move |state, _cx| {
            state.set_locale(code.to_string());
        });
    });

    cx.on_action(|action: &ThemeAction, cx: &mut App| {
        let mode = match action {
            ThemeAction::Light => Some(ThemeMode::Light),
            ThemeAction::Dark => Some(ThemeMode::Dark),
            ThemeAction::System => None,
        };
        apply_theme(mode, cx);
        update_app_state_and_save(cx, "set_theme", move |state, _cx| {
            state.set_theme(mode);
        });
    });
}

/// Run the gallery application.
///
/// `content_arg` is the content file passed on the command line; without it
/// the last remembered file is used, then the bundled sample.
pub fn run_app(content_arg: Option<PathBuf>) {
    Application::new().with_assets(Assets).run(move |cx: &mut App| {
        gpui_component::init(cx);
        cx.bind_keys(new_key_bindings());
        register_actions(cx);

        // Quit the app when all windows are closed (macOS behavior)
        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        let app_state = GalleryAppState::try_load().unwrap_or_else(|e| {
            error!(error = %e, "Failed to load app state, using defaults");
            GalleryAppState::new()
        });
        apply_theme(app_state.theme(), cx);

        let content_path = content_arg
            .clone()
            .or_else(|| app_state.content_path().map(Path::to_path_buf));
        let (document, source, load_error) = resolve_content(content_path.as_deref());
        info!(
            source = ?source,
            testimonials = document.testimonials.len(),
            buttons = document.buttons.len(),
            "Gallery content resolved"
        );

        let bounds = app_state.bounds().cloned().unwrap_or_else(|| {
            Bounds::centered(None, size(px(DEFAULT_WINDOW_WIDTH), px(DEFAULT_WINDOW_HEIGHT)), cx)
        });

        let app_state_entity = cx.new(|_| app_state);
        cx.set_global(GalleryStore::new(app_state_entity));

        // Remember a file passed on the command line once it loads
        if let Some(path) = content_arg {
            if source == ContentSource::File(path.clone()) {
                update_app_state_and_save(cx, "remember_content", move |state, _cx| {
                    state.set_content_path(Some(path));
                });
            }
        }

        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: Some(TitlebarOptions {
                title: Some(SharedString::from("Content Blocks")),
                appears_transparent: true,
                traffic_light_position: Some(point(px(9.0), px(9.0))),
            }),
            ..Default::default()
        };

        let opened = cx.open_window(window_options, |window, cx| {
            let gallery = cx.new(|cx| Gallery::new(document, source, load_error, window, cx));
            cx.new(|cx| Root::new(AnyView::from(gallery), window, cx))
        });

        if let Err(e) = opened {
            error!(error = %e, "Failed to open gallery window");
            cx.quit();
            return;
        }

        cx.activate(true);
    });
}
