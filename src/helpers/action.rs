//! Keyboard Actions and Shortcuts
//!
//! Defines global keyboard shortcuts and action dispatching.

use crate::states::Route;
use gpui::{Action, KeyBinding};
use schemars::JsonSchema;
use serde::Deserialize;

/// Menu actions (application-level)
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub enum MenuAction {
    /// Quit the application
    Quit,
}

/// Navigation actions
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub enum NavAction {
    Landing,
    Features,
    About,
    Login,
    SignUp,
}

impl NavAction {
    pub fn route(self) -> Route {
        match self {
            NavAction::Landing => Route::Landing,
            NavAction::Features => Route::Features,
            NavAction::About => Route::About,
            NavAction::Login => Route::Login,
            NavAction::SignUp => Route::SignUp,
        }
    }

    /// Keystroke bound to this action
    pub fn keystroke(self) -> &'static str {
        match self {
            NavAction::Landing => "secondary-1",
            NavAction::Features => "secondary-2",
            NavAction::About => "secondary-3",
            NavAction::Login => "secondary-4",
            NavAction::SignUp => "secondary-5",
        }
    }

    pub fn for_route(route: Route) -> Self {
        match route {
            Route::Landing => NavAction::Landing,
            Route::Features => NavAction::Features,
            Route::About => NavAction::About,
            Route::Login => NavAction::Login,
            Route::SignUp => NavAction::SignUp,
        }
    }
}

/// Convert a keystroke string to human-readable format
///
/// Platform-specific formatting:
/// - macOS: ⌘ for cmd, ⌥ for alt, ⌃ for ctrl, ⇧ for shift
/// - Others: Ctrl+, Alt+, Shift+
pub fn humanize_keystroke(keystroke: &str) -> String {
    #[cfg(target_os = "macos")]
    let separator = "";
    #[cfg(not(target_os = "macos"))]
    let separator = "+";

    keystroke
        .split('-')
        .map(|part| match part {
            #[cfg(target_os = "macos")]
            "secondary" | "cmd" => "⌘".to_string(),
            #[cfg(not(target_os = "macos"))]
            "secondary" | "cmd" | "ctrl" => "Ctrl".to_string(),
            #[cfg(target_os = "macos")]
            "ctrl" => "⌃".to_string(),
            #[cfg(target_os = "macos")]
            "alt" => "⌥".to_string(),
            #[cfg(not(target_os = "macos"))]
            "alt" => "Alt".to_string(),
            #[cfg(target_os = "macos")]
            "shift" => "⇧".to_string(),
            #[cfg(not(target_os = "macos"))]
            "shift" => "Shift".to_string(),
            "enter" => "Enter".to_string(),
            "escape" => "Esc".to_string(),
            c => c.to_uppercase(),
        })
        .collect::<Vec<_>>()
        .join(separator)
}

/// Create global keyboard bindings
pub fn new_key_bindings() -> Vec<KeyBinding> {
    let mut bindings = vec![KeyBinding::new("secondary-q", MenuAction::Quit, None)];
    bindings.extend(
        Route::all()
            .iter()
            .map(|route| NavAction::for_route(*route))
            .map(|action| KeyBinding::new(action.keystroke(), action, None)),
    );
    bindings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_actions_cover_every_route() {
        for route in Route::all() {
            assert_eq!(NavAction::for_route(*route).route(), *route);
        }
    }

    #[test]
    #[cfg(not(target_os = "macos"))]
    fn humanize_uses_plus_separator() {
        assert_eq!(humanize_keystroke("secondary-1"), "Ctrl+1");
        assert_eq!(humanize_keystroke("alt-shift-q"), "Alt+Shift+Q");
    }

    #[test]
    #[cfg(target_os = "macos")]
    fn humanize_uses_symbols() {
        assert_eq!(humanize_keystroke("secondary-1"), "⌘1");
    }
}
