//! Internationalization Helpers
//!
//! Provides convenient functions for translating strings based on current locale.

use super::CloudSpaceStore;
use gpui::{App, SharedString};
use rust_i18n::t;

fn current_locale(cx: &App) -> &str {
    cx.global::<CloudSpaceStore>().read(cx).locale()
}

/// Get translated string from "nav" namespace
pub fn i18n_nav(cx: &App, key: &str) -> SharedString {
    t!(format!("nav.{key}"), locale = current_locale(cx)).into()
}

/// Get translated string from "landing" namespace
pub fn i18n_landing(cx: &App, key: &str) -> SharedString {
    t!(format!("landing.{key}"), locale = current_locale(cx)).into()
}

/// Get translated string from "features" namespace
pub fn i18n_features(cx: &App, key: &str) -> SharedString {
    t!(format!("features.{key}"), locale = current_locale(cx)).into()
}

/// Get translated string from "about" namespace
pub fn i18n_about(cx: &App, key: &str) -> SharedString {
    t!(format!("about.{key}"), locale = current_locale(cx)).into()
}

/// Get translated string from "signup" namespace
pub fn i18n_signup(cx: &App, key: &str) -> SharedString {
    t!(format!("signup.{key}"), locale = current_locale(cx)).into()
}

/// Get translated string from "login" namespace
pub fn i18n_login(cx: &App, key: &str) -> SharedString {
    t!(format!("login.{key}"), locale = current_locale(cx)).into()
}

#[cfg(test)]
mod tests {
    use crate::domain::password::{StrengthCheck, StrengthTier};
    use crate::states::Route;
    use crate::views::{
        ARCHITECTURE_LAYERS, DETAILS_PER_FEATURE, FEATURES, ITEMS_PER_LAYER, PREVIEW_CARDS,
        STACK_LAYERS, STATS,
    };
    use rust_i18n::t;

    const LOCALES: &[&str] = &["en", "zh"];

    /// Missing keys come back as `<locale>.<key>`
    fn assert_translated(key: &str) {
        for &locale in LOCALES {
            let text = t!(key, locale = locale).to_string();
            assert_ne!(text, format!("{locale}.{key}"), "{locale}: {key} is missing");
            assert!(!text.is_empty(), "{locale}: {key} is empty");
        }
    }

    #[test]
    fn nav_labels_exist_for_every_route() {
        for route in Route::all() {
            assert_translated(&format!("nav.{}", route.label_key()));
        }
    }

    #[test]
    fn strength_labels_exist() {
        for check in StrengthCheck::all() {
            assert_translated(&format!("signup.{}", check.label_key()));
        }
        for tier in [StrengthTier::Weak, StrengthTier::Medium, StrengthTier::Strong] {
            assert_translated(&format!("signup.{}", tier.label_key()));
        }
    }

    /// Keys the views and the window title pass as literals
    const LITERAL_KEYS: &[&str] = &[
        "common.app_title",
        "nav.brand",
        "nav.settings",
        "nav.theme",
        "nav.light",
        "nav.dark",
        "nav.system",
        "nav.language",
        "landing.hero_title",
        "landing.hero_subtitle",
        "landing.hero_body",
        "landing.cta_start",
        "landing.cta_explore",
        "landing.preview_title",
        "landing.preview_body",
        "landing.final_title",
        "landing.final_body",
        "landing.final_cta",
        "features.hero_title",
        "features.hero_body",
        "features.architecture_title",
        "features.architecture_body",
        "about.hero_title",
        "about.hero_subtitle",
        "about.hero_body",
        "about.vision_title",
        "about.vision_body_1",
        "about.vision_body_2",
        "about.stats_title",
        "about.stack_title",
        "about.stack_body",
        "about.cta_title",
        "about.cta_body",
        "about.cta_start",
        "about.cta_explore",
        "signup.title",
        "signup.subtitle",
        "signup.name",
        "signup.name_placeholder",
        "signup.email",
        "signup.email_placeholder",
        "signup.password",
        "signup.password_placeholder",
        "signup.confirm_password",
        "signup.confirm_placeholder",
        "signup.strength_label",
        "signup.mismatch",
        "signup.submit",
        "signup.have_account",
        "signup.sign_in",
        "signup.show_password",
        "signup.hide_password",
        "login.title",
        "login.subtitle",
        "login.email",
        "login.email_placeholder",
        "login.password",
        "login.password_placeholder",
        "login.submit",
        "login.no_account",
        "login.sign_up",
    ];

    #[test]
    fn literal_keys_are_translated() {
        for key in LITERAL_KEYS {
            assert_translated(key);
        }
    }

    #[test]
    fn mismatch_message_reads_in_english() {
        assert_eq!(t!("signup.mismatch", locale = "en"), "Passwords do not match");
    }

    #[test]
    fn page_tables_are_translated() {
        for (_, key) in PREVIEW_CARDS {
            assert_translated(&format!("landing.{key}.title"));
            assert_translated(&format!("landing.{key}.description"));
        }
        for (_, key) in FEATURES {
            assert_translated(&format!("features.{key}.title"));
            assert_translated(&format!("features.{key}.description"));
            for n in 1..=DETAILS_PER_FEATURE {
                assert_translated(&format!("features.{key}.detail_{n}"));
            }
        }
        for key in ARCHITECTURE_LAYERS {
            for field in ["title", "subtitle", "description"] {
                assert_translated(&format!("features.{key}.{field}"));
            }
        }
        for key in STATS {
            assert_translated(&format!("about.{key}.label"));
            assert_translated(&format!("about.{key}.value"));
        }
        for key in STACK_LAYERS {
            assert_translated(&format!("about.{key}.title"));
            assert_translated(&format!("about.{key}.subtitle"));
            for n in 1..=ITEMS_PER_LAYER {
                assert_translated(&format!("about.{key}.item_{n}"));
            }
        }
    }

    #[test]
    fn chinese_differs_from_english() {
        assert_ne!(
            t!("signup.submit", locale = "en"),
            t!("signup.submit", locale = "zh")
        );
    }
}
