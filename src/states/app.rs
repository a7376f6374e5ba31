//! Application State
//!
//! Persisted gallery preferences: locale, theme, window bounds and the last
//! content file.

use crate::error::Result;
use crate::helpers::get_or_create_config_dir;
use gpui::{Action, App, AppContext, Bounds, Context, Entity, Global, Pixels};
use gpui_component::ThemeMode;
use locale_config::Locale;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{error, info};

// ==================== Actions ====================

/// Theme selection action
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub enum ThemeAction {
    Light,
    Dark,
    System,
}

/// Locale selection action
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub enum LocaleAction {
    En,
    Zh,
}

impl LocaleAction {
    pub fn code(self) -> &'static str {
        match self {
            LocaleAction::En => "en",
            LocaleAction::Zh => "zh",
        }
    }
}

// ==================== Persisted State ====================

const LIGHT_THEME_MODE: &str = "light";
const DARK_THEME_MODE: &str = "dark";
const SUPPORTED_LOCALES: [&str; 2] = ["en", "zh"];

fn get_config_path() -> Result<PathBuf> {
    let config_dir = get_or_create_config_dir()?;
    Ok(config_dir.join("content-blocks.toml"))
}

/// Reduce a locale tag such as `zh-CN` to a supported language code
fn normalize_locale(tag: &str) -> Option<&'static str> {
    let lang = tag.split(['-', '_']).next()?.to_ascii_lowercase();
    SUPPORTED_LOCALES.into_iter().find(|supported| *supported == lang)
}

/// Persisted application state
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GalleryAppState {
    locale: Option<String>,
    theme: Option<String>,
    bounds: Option<Bounds<Pixels>>,
    content_path: Option<PathBuf>,
}

impl GalleryAppState {
    /// Load state from config file
    pub fn try_load() -> Result<Self> {
        let path = get_config_path()?;
        info!(path = ?path, "Loading config file");

        let value = if path.exists() {
            std::fs::read_to_string(&path)?
        } else {
            String::new()
        };

        let mut state = Self::parse(&value).map_err(|e| {
            error!(error = %e, path = ?path, "Failed to parse config file");
            e
        })?;

        // Detect system locale if not set
        if state.locale.as_ref().is_none_or(|l| l.is_empty()) {
            state.locale = normalize_locale(&Locale::current().to_string()).map(str::to_string);
        }

        Ok(state)
    }

    /// Parse persisted state; an empty file yields defaults
    pub fn parse(value: &str) -> Result<Self> {
        if value.trim().is_empty() {
            return Ok(Self::new());
        }
        Ok(toml::from_str(value)?)
    }

    /// Create new default state
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== Getters ====================

    pub fn bounds(&self) -> Option<&Bounds<Pixels>> {
        self.bounds.as_ref()
    }

    pub fn theme(&self) -> Option<ThemeMode> {
        match self.theme.as_deref() {
            Some(LIGHT_THEME_MODE) => Some(ThemeMode::Light),
            Some(DARK_THEME_MODE) => Some(ThemeMode::Dark),
            _ => None,
        }
    }

    /// Current language code, `en` unless a supported locale is stored
    pub fn locale(&self) -> &str {
        self.locale
            .as_deref()
            .and_then(normalize_locale)
            .unwrap_or("en")
    }

    pub fn content_path(&self) -> Option<&Path> {
        self.content_path.as_deref()
    }

    // ==================== Setters ====================

    pub fn set_bounds(&mut self, bounds: Bounds<Pixels>) {
        self.bounds = Some(bounds);
    }

    pub fn set_theme(&mut self, theme: Option<ThemeMode>) {
        self.theme = match theme {
            Some(ThemeMode::Light) => Some(LIGHT_THEME_MODE.to_string()),
            Some(ThemeMode::Dark) => Some(DARK_THEME_MODE.to_string()),
            _ => None,
        };
    }

    pub fn set_locale(&mut self, locale: String) {
        self.locale = Some(locale);
    }

    pub fn set_content_path(&mut self, path: Option<PathBuf>) {
        self.content_path = path;
    }
}

// ==================== Global Store ====================

/// Global store accessible via `cx.global::<GalleryStore>()`
#[derive(Clone)]
pub struct GalleryStore {
    app_state: Entity<GalleryAppState>,
}

impl GalleryStore {
    /// Create a new global store
    pub fn new(app_state: Entity<GalleryAppState>) -> Self {
        Self { app_state }
    }

    /// Get the app state entity
    pub fn app_state(&self) -> Entity<GalleryAppState> {
        self.app_state.clone()
    }

    /// Read app state
    pub fn read<'a>(&self, cx: &'a App) -> &'a GalleryAppState {
        self.app_state.read(cx)
    }

    /// Update app state
    pub fn update<R, C: AppContext>(
        &self,
        cx: &mut C,
        update: impl FnOnce(&mut GalleryAppState, &mut Context<GalleryAppState>) -> R,
    ) -> C::Result<R> {
        self.app_state.update(cx, update)
    }
}

impl Global for GalleryStore {}

// ==================== Persistence ====================

/// Save app state to disk
pub fn save_app_state(state: &GalleryAppState) -> Result<()> {
    write_app_state(&get_config_path()?, state)
}

/// Write to a sibling temp file, then rename over `path` so readers never see
/// a partially written file. Each write gets its own temp file.
fn write_app_state(path: &Path, state: &GalleryAppState) -> Result<()> {
    static WRITE_SEQ: AtomicU64 = AtomicU64::new(0);

    let value = toml::to_string(state)?;
    let seq = WRITE_SEQ.fetch_add(1, Ordering::Relaxed);
    let tmp_path = path.with_extension(format!("toml.{seq}.tmp"));
    std::fs::write(&tmp_path, value)?;
    std::fs::rename(&tmp_path, path)?;
    Ok(())
}

/// Update app state and save to disk asynchronously
pub fn update_app_state_and_save<F>(cx: &App, action_name: &'static str, mutation: F)
where
    F: FnOnce(&mut GalleryAppState, &App) + Send + 'static,
{
    let store = cx.global::<GalleryStore>().clone();

    cx.spawn(async move |cx| {
        // Step 1: Update global state
        let current_state = store.update(cx, |state, cx| {
            mutation(state, cx);
            state.clone()
        });

        // Step 2: Persist to disk in background
        if let Ok(state) = current_state {
            cx.background_executor()
                .spawn(async move {
                    if let Err(e) = save_app_state(&state) {
                        error!(error = %e, action = action_name, "Failed to save state");
                    } else {
                        info!(action = action_name, "State saved successfully");
                    }
                })
                .await;
        }

        // Step 3: Refresh windows
        cx.update(|cx| cx.refresh_windows()).ok();
    })
    .detach();
}

#[cfg(test)]
mod tests {
    use super::*;
    use gpui::{point, px, size};

    #[test]
    fn empty_config_yields_defaults() {
        let state = GalleryAppState::parse("  \n").expect("parse");
        assert_eq!(state, GalleryAppState::default());
        assert_eq!(state.locale(), "en");
        assert_eq!(state.theme(), None);
        assert_eq!(state.content_path(), None);
    }

    #[test]
    fn locale_normalization() {
        assert_eq!(normalize_locale("zh-CN"), Some("zh"));
        assert_eq!(normalize_locale("en_US"), Some("en"));
        assert_eq!(normalize_locale("EN"), Some("en"));
        assert_eq!(normalize_locale("fr-FR"), None);

        let mut state = GalleryAppState::new();
        state.set_locale("fr".to_string());
        assert_eq!(state.locale(), "en");
        state.set_locale(LocaleAction::Zh.code().to_string());
        assert_eq!(state.locale(), "zh");
    }

    #[test]
    fn theme_round_trips_through_strings() {
        let mut state = GalleryAppState::new();
        state.set_theme(Some(ThemeMode::Dark));
        assert_eq!(state.theme(), Some(ThemeMode::Dark));
        state.set_theme(None);
        assert_eq!(state.theme(), None);
    }

    #[test]
    fn persisted_fields_survive_toml() {
        let mut state = GalleryAppState::new();
        state.set_locale("zh".to_string());
        state.set_theme(Some(ThemeMode::Light));
        state.set_content_path(Some(PathBuf::from("/tmp/blocks.toml")));
        state.set_bounds(Bounds::new(point(px(10.0), px(20.0)), size(px(800.0), px(600.0))));

        let text = toml::to_string(&state).expect("serialize");
        let loaded = GalleryAppState::parse(&text).expect("parse");
        assert_eq!(loaded, state);
        assert_eq!(loaded.content_path(), Some(Path::new("/tmp/blocks.toml")));
    }

    #[test]
    fn writes_replace_the_whole_file() {
        let dir = std::env::temp_dir().join(format!("content-blocks-state-{}", std::process::id()));
        std::fs::remove_dir_all(&dir).ok();
        std::fs::create_dir_all(&dir).expect("create dir");
        let path = dir.join("content-blocks.toml");

        let mut state = GalleryAppState::new();
        state.set_locale("zh".to_string());
        state.set_content_path(Some(PathBuf::from("/tmp/a-much-longer-content-file-name.toml")));
        write_app_state(&path, &state).expect("first write");

        let mut shorter = GalleryAppState::new();
        shorter.set_bounds(Bounds::new(point(px(0.0), px(0.0)), size(px(640.0), px(480.0))));
        write_app_state(&path, &shorter).expect("second write");

        let text = std::fs::read_to_string(&path).expect("read back");
        assert_eq!(GalleryAppState::parse(&text).expect("parse"), shorter);
        let entries = std::fs::read_dir(&dir).expect("list dir").count();
        assert_eq!(entries, 1, "temp files must not be left behind");

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn invalid_config_is_an_error() {
        assert!(GalleryAppState::parse("locale = [").is_err());
    }
}
