//! Application - App Initialization and Window Management
//!
//! Main entry point for the GPUI application.

use gpui::{
    AnyView, App, AppContext, Application, Bounds, SharedString, TitlebarOptions, Window,
    WindowBounds, WindowOptions, point, px, size,
};
use gpui_component::{Root, Theme, ThemeMode};
use rust_i18n::t;
use tracing::{error, info};

use crate::app::workspace::Workspace;
use crate::assets::Assets;
use crate::constants::{
    DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH,
};
use crate::helpers::{MenuAction, NavAction, new_key_bindings};
use crate::states::{
    CloudSpaceAppState, CloudSpaceStore, LocaleAction, ThemeAction, navigate, persist_app_state,
    update_app_state_and_save,
};

/// Apply a stored theme choice; `None` follows the system appearance
fn apply_theme(mode: Option<ThemeMode>, window: Option<&mut Window>, cx: &mut App) {
    match mode {
        Some(mode) => Theme::change(mode, window, cx),
        None => Theme::sync_system_appearance(window, cx),
    }
}

fn register_actions(cx: &mut App) {
    cx.bind_keys(new_key_bindings());

    cx.on_action(|action: &MenuAction, cx: &mut App| match action {
        MenuAction::Quit => cx.quit(),
    });

    cx.on_action(|action: &NavAction, cx: &mut App| navigate(action.route(), cx));

    cx.on_action(|action: &ThemeAction, cx: &mut App| {
        let mode = match action {
            ThemeAction::Light => Some(ThemeMode::Light),
            ThemeAction::Dark => Some(ThemeMode::Dark),
            ThemeAction::System => None,
        };
        apply_theme(mode, None, cx);
        update_app_state_and_save(cx, "theme", move |state, _cx| state.set_theme(mode));
    });

    cx.on_action(|action: &LocaleAction, cx: &mut App| {
        let locale = action.code();
        update_app_state_and_save(cx, "locale", move |state, _cx| state.set_locale(locale));
    });
}

/// Run the Cloud Space application
pub fn run_app() {
    Application::new().with_assets(Assets).run(|cx: &mut App| {
        gpui_component::init(cx);
        register_actions(cx);

        // Quit the app when all windows are closed (macOS behavior)
        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        let app_state = CloudSpaceAppState::try_load().unwrap_or_else(|e| {
            error!(error = %e, "Failed to load preferences, using defaults");
            CloudSpaceAppState::new()
        });
        let theme = app_state.theme();
        let title: SharedString =
            t!("common.app_title", locale = app_state.locale()).to_string().into();
        let bounds = app_state.bounds().cloned().unwrap_or_else(|| {
            Bounds::centered(
                None,
                size(px(DEFAULT_WINDOW_WIDTH), px(DEFAULT_WINDOW_HEIGHT)),
                cx,
            )
        });

        let app_state = cx.new(|_| app_state);
        cx.set_global(CloudSpaceStore::new(app_state));

        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            window_min_size: Some(size(px(MIN_WINDOW_WIDTH), px(MIN_WINDOW_HEIGHT))),
            titlebar: Some(TitlebarOptions {
                title: Some(title),
                appears_transparent: true,
                traffic_light_position: Some(point(px(9.0), px(9.0))),
            }),
            ..Default::default()
        };

        let opened = cx.open_window(window_options, |window, cx| {
            apply_theme(theme, Some(&mut *window), cx);

            // Persist the window geometry on close
            window.on_window_should_close(cx, |window, cx| {
                let bounds = window.bounds();
                let store = cx.global::<CloudSpaceStore>().clone();
                let state = store.update(cx, |state, _cx| {
                    state.set_bounds(bounds);
                    state.bump_revision();
                    state.clone()
                });
                if let Some(Err(e)) = persist_app_state(&state) {
                    error!(error = %e, "Failed to save window bounds");
                }
                true
            });

            let workspace = cx.new(|cx| Workspace::new(window, cx));
            cx.new(|cx| Root::new(AnyView::from(workspace), window, cx))
        });

        match opened {
            Ok(_) => {
                info!("Main window opened");
                cx.activate(true);
            }
            Err(e) => {
                error!(error = %e, "Failed to open main window");
                cx.quit();
            }
        }
    });
}
