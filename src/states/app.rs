//! Application State
//!
//! Global application state including routing, theme, locale, and window bounds.

use crate::constants::PREFERENCES_FILE;
use crate::error::Result;
use crate::helpers::get_or_create_config_dir;
use crate::states::Route;
use gpui::{Action, App, AppContext, BorrowAppContext, Bounds, Context, Entity, Global, Pixels};
use gpui_component::ThemeMode;
use locale_config::Locale;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};
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
const SUPPORTED_LOCALES: &[&str] = &["en", "zh"];

fn get_config_path() -> Result<PathBuf> {
    let config_dir = get_or_create_config_dir()?;
    let path = config_dir.join(PREFERENCES_FILE);
    if !path.exists() {
        std::fs::write(&path, "")?;
    }
    Ok(path)
}

/// Persisted shell preferences plus the (never persisted) current route
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CloudSpaceAppState {
    #[serde(skip)]
    route: Route,
    /// Bumped on every mutation that should reach disk
    #[serde(skip)]
    revision: u64,
    locale: Option<String>,
    bounds: Option<Bounds<Pixels>>,
    theme: Option<String>,
}

impl CloudSpaceAppState {
    /// Load state from the preferences file
    pub fn try_load() -> Result<Self> {
        let path = get_config_path()?;
        info!(path = ?path, "Loading preferences file");
        let value = std::fs::read_to_string(&path)?;
        Self::from_toml(&value).inspect_err(|e| {
            error!(error = %e, path = ?path, "Failed to parse preferences file");
        })
    }

    /// Parse preferences, filling in the system locale when none is stored
    pub fn from_toml(value: &str) -> Result<Self> {
        let mut state: Self = if value.trim().is_empty() {
            Self::new()
        } else {
            toml::from_str(value)?
        };

        if state.locale.as_ref().is_none_or(|l| l.is_empty()) {
            state.locale = detect_system_locale();
        }

        Ok(state)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    pub fn new() -> Self {
        Self::default()
    }

    // ==================== Getters ====================

    pub fn route(&self) -> Route {
        self.route
    }

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

    pub fn locale(&self) -> &str {
        self.locale
            .as_deref()
            .filter(|l| SUPPORTED_LOCALES.contains(l))
            .unwrap_or("en")
    }

    // ==================== Setters ====================

    pub fn go_to(&mut self, route: Route, cx: &mut Context<Self>) {
        if self.route != route {
            info!(path = route.path(), "Navigating");
            self.route = route;
            cx.notify();
        }
    }

    /// Mark the state as changed and return the new revision
    pub fn bump_revision(&mut self) -> u64 {
        self.revision += 1;
        self.revision
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

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

    pub fn set_locale(&mut self, locale: impl Into<String>) {
        self.locale = Some(locale.into());
    }
}

fn detect_system_locale() -> Option<String> {
    let current = Locale::current().to_string();
    let lang = current
        .split(['-', '_', ','])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    SUPPORTED_LOCALES.contains(&lang.as_str()).then_some(lang)
}

// ==================== Global Store ====================

/// Global store accessible via `cx.global::<CloudSpaceStore>()`
#[derive(Clone)]
pub struct CloudSpaceStore {
    app_state: Entity<CloudSpaceAppState>,
}

impl CloudSpaceStore {
    pub fn new(app_state: Entity<CloudSpaceAppState>) -> Self {
        Self { app_state }
    }

    /// Get the app state entity
    pub fn app_state(&self) -> Entity<CloudSpaceAppState> {
        self.app_state.clone()
    }

    /// Read app state
    pub fn read<'a>(&self, cx: &'a App) -> &'a CloudSpaceAppState {
        self.app_state.read(cx)
    }

    /// Update app state
    pub fn update<R, C: AppContext>(
        &self,
        cx: &mut C,
        update: impl FnOnce(&mut CloudSpaceAppState, &mut Context<CloudSpaceAppState>) -> R,
    ) -> C::Result<R> {
        self.app_state.update(cx, update)
    }
}

impl Global for CloudSpaceStore {}

/// Navigate to `route` through the global store
pub fn navigate(route: Route, cx: &mut App) {
    cx.update_global::<CloudSpaceStore, ()>(|store, cx| {
        store.update(cx, |state, cx| {
            state.go_to(route, cx);
        });
    });
}

// ==================== Persistence ====================

/// Orders preference writes so an older snapshot never lands after a newer one
#[derive(Debug, Default)]
pub struct SaveSequencer {
    last_written: Mutex<u64>,
}

impl SaveSequencer {
    pub const fn new() -> Self {
        Self {
            last_written: Mutex::new(0),
        }
    }

    /// Run `write` for `revision` unless a newer revision already ran.
    /// Returns `None` when the snapshot is stale. The lock is held for the
    /// whole write, so writes never interleave.
    pub fn commit<T>(&self, revision: u64, write: impl FnOnce() -> Result<T>) -> Option<Result<T>> {
        let mut last = self
            .last_written
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if revision <= *last {
            return None;
        }
        *last = revision;
        Some(write())
    }
}

static PREFERENCE_SAVES: SaveSequencer = SaveSequencer::new();

/// Save app state to disk
pub fn save_app_state(state: &CloudSpaceAppState) -> Result<()> {
    let path = get_config_path()?;
    std::fs::write(path, state.to_toml()?)?;
    Ok(())
}

/// Save app state unless a newer revision was already written
pub fn persist_app_state(state: &CloudSpaceAppState) -> Option<Result<()>> {
    PREFERENCE_SAVES.commit(state.revision(), || save_app_state(state))
}

/// Update app state and save to disk asynchronously
pub fn update_app_state_and_save<F>(cx: &App, action_name: &'static str, mutation: F)
where
    F: FnOnce(&mut CloudSpaceAppState, &App) + Send + 'static,
{
    let store = cx.global::<CloudSpaceStore>().clone();

    cx.spawn(async move |cx| {
        let current_state = store.update(cx, |state, cx| {
            mutation(state, cx);
            state.bump_revision();
            cx.notify();
            state.clone()
        });

        if let Ok(state) = current_state {
            cx.background_executor()
                .spawn(async move {
                    match persist_app_state(&state) {
                        Some(Ok(())) => info!(action = action_name, "Preferences saved"),
                        Some(Err(e)) => {
                            error!(error = %e, action = action_name, "Failed to save preferences")
                        }
                        None => info!(action = action_name, "Skipped stale preferences save"),
                    }
                })
                .await;
        }

        cx.update(|cx| cx.refresh_windows()).ok();
    })
    .detach();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_yields_defaults() {
        let state = CloudSpaceAppState::from_toml("  \n").expect("empty preferences");
        assert_eq!(state.route(), Route::Landing);
        assert!(state.theme().is_none());
        assert!(state.bounds().is_none());
    }

    #[test]
    fn preferences_round_trip_without_route() {
        let mut state = CloudSpaceAppState::new();
        state.set_locale("zh");
        state.set_theme(Some(ThemeMode::Dark));
        state.route = Route::SignUp;

        let text = state.to_toml().expect("serialize preferences");
        assert!(!text.contains("route"));

        let loaded = CloudSpaceAppState::from_toml(&text).expect("parse preferences");
        assert_eq!(loaded.locale(), "zh");
        assert_eq!(loaded.theme(), Some(ThemeMode::Dark));
        assert_eq!(loaded.route(), Route::Landing);
    }

    #[test]
    fn unsupported_locale_falls_back_to_english() {
        let state = CloudSpaceAppState::from_toml("locale = \"fr\"\n").expect("parse preferences");
        assert_eq!(state.locale(), "en");
    }

    #[test]
    fn unknown_theme_means_system() {
        let state =
            CloudSpaceAppState::from_toml("theme = \"sepia\"\n").expect("parse preferences");
        assert!(state.theme().is_none());
    }

    #[test]
    fn malformed_file_is_an_error() {
        assert!(CloudSpaceAppState::from_toml("locale = ").is_err());
    }

    #[test]
    fn sequencer_skips_stale_revisions() {
        let saves = SaveSequencer::new();
        let log = Mutex::new(Vec::new());
        let written = &log;
        let write = move |revision: u64| {
            move || -> Result<()> {
                written
                    .lock()
                    .expect("written revisions")
                    .push(revision);
                Ok(())
            }
        };

        // the newer snapshot finishes first
        assert!(saves.commit(2, write(2)).is_some());
        assert!(saves.commit(1, write(1)).is_none());
        assert!(saves.commit(2, write(2)).is_none());
        assert!(saves.commit(3, write(3)).is_some());

        assert_eq!(*log.lock().expect("written revisions"), vec![2, 3]);
    }

    #[test]
    fn failed_write_still_blocks_older_snapshots() {
        let saves = SaveSequencer::new();
        let failed: Result<()> = Err(crate::error::Error::Invalid {
            message: "disk full".to_string(),
        });
        assert!(matches!(saves.commit(5, || failed), Some(Err(_))));
        assert!(saves.commit(4, || Ok(())).is_none());
    }

    #[test]
    fn revision_is_not_persisted() {
        let mut state = CloudSpaceAppState::new();
        assert_eq!(state.bump_revision(), 1);
        assert_eq!(state.bump_revision(), 2);

        let text = state.to_toml().expect("serialize preferences");
        assert!(!text.contains("revision"));
        let loaded = CloudSpaceAppState::from_toml(&text).expect("parse preferences");
        assert_eq!(loaded.revision(), 0);
    }
}
