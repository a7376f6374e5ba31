//! Internationalization Helpers
//!
//! Provides convenient functions for translating strings based on current locale.

use super::GalleryStore;
use gpui::{App, SharedString};
use rust_i18n::t;

/// Get translated string from "gallery" namespace
pub fn i18n_gallery(cx: &App, key: &str) -> SharedString {
    let locale = cx.global::<GalleryStore>().read(cx).locale();
    t!(format!("gallery.{key}"), locale = locale).into()
}

/// Get translated string from "menu" namespace
pub fn i18n_menu(cx: &App, key: &str) -> SharedString {
    let locale = cx.global::<GalleryStore>().read(cx).locale();
    t!(format!("menu.{key}"), locale = locale).into()
}

/// Format a translated string with arguments
///
/// # Example
/// ```ignore
/// // With translation clicks = "Button clicks: %{count}"
/// i18n_format(cx, "gallery.clicks", &[("count", "3")])
/// // Returns "Button clicks: 3"
/// ```
pub fn i18n_format(cx: &App, key: &str, args: &[(&str, &str)]) -> SharedString {
    let locale = cx.global::<GalleryStore>().read(cx).locale();
    interpolate(&t!(key, locale = locale), args).into()
}

fn interpolate(template: &str, args: &[(&str, &str)]) -> String {
    let mut result = template.to_string();
    for (name, value) in args {
        result = result.replace(&format!("%{{{name}}}"), value);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interpolates_named_arguments() {
        assert_eq!(
            interpolate("Loaded from %{path}", &[("path", "/tmp/a.toml")]),
            "Loaded from /tmp/a.toml"
        );
        assert_eq!(interpolate("%{a}-%{b}-%{a}", &[("a", "1"), ("b", "2")]), "1-2-1");
        assert_eq!(interpolate("no args", &[]), "no args");
    }

    #[test]
    fn gallery_strings_exist_in_both_locales() {
        for locale in ["en", "zh"] {
            for key in ["gallery.title", "gallery.testimonials", "gallery.buttons", "menu.theme"] {
                assert_ne!(t!(key, locale = locale), key, "{key} missing for {locale}");
            }
        }
    }
}
