//! Navigation Bar
//!
//! Title bar hosting the brand logo, route links, auth buttons and the
//! appearance/language controls.

use crate::assets::CustomIconName;
use crate::components::cosmic::FloatingParticles;
use crate::components::primitives::{CosmicButton, CosmicSize};
use crate::constants::LOGO_PARTICLES;
use crate::helpers::{NavAction, humanize_keystroke};
use crate::states::{
    CloudSpaceStore, LocaleAction, Route, ThemeAction, i18n_nav, is_active_path, navigate,
};
use crate::theme::colors::CosmicColors;
use gpui::{App, Context, Corner, Subscription, Window, div, prelude::*, px};
use gpui_component::{
    ActiveTheme, Icon, IconName, Sizable, ThemeMode, TitleBar,
    button::{Button, ButtonVariants},
    h_flex,
    label::Label,
    menu::{DropdownMenu, PopupMenu},
    tooltip::Tooltip,
};

/// Navigation bar component
pub struct CloudSpaceNavbar {
    /// Current route for link highlighting
    current_route: Route,
    _subscriptions: Vec<Subscription>,
}

impl CloudSpaceNavbar {
    pub fn new(_window: &mut Window, cx: &mut Context<Self>) -> Self {
        let store = cx.global::<CloudSpaceStore>();
        let app_state = store.app_state();
        let current_route = store.read(cx).route();

        // Route, locale and theme all live on the app state
        let subscriptions = vec![cx.observe(&app_state, |this, model, cx| {
            this.current_route = model.read(cx).route();
            cx.notify();
        })];

        Self {
            current_route,
            _subscriptions: subscriptions,
        }
    }

    fn render_logo(cx: &App) -> impl IntoElement {
        h_flex()
            .id("navbar-logo")
            .gap_2()
            .items_center()
            .cursor_pointer()
            .on_click(|_, _, cx| navigate(Route::Landing, cx))
            .child(
                div()
                    .relative()
                    .size(px(28.0))
                    .child(FloatingParticles::new("logo-particles", LOGO_PARTICLES).seed(7))
                    .child(
                        Icon::from(CustomIconName::Logo)
                            .size_7()
                            .text_color(CosmicColors::violet()),
                    ),
            )
            .child(
                Label::new(i18n_nav(cx, "brand"))
                    .font_weight(gpui::FontWeight::BOLD)
                    .text_color(cx.theme().foreground),
            )
    }

    fn render_nav_link(&self, route: Route, cx: &App) -> impl IntoElement {
        let is_active = is_active_path(self.current_route.path(), route.path());
        let shortcut = humanize_keystroke(NavAction::for_route(route).keystroke());
        let (muted, hover_bg) = (cx.theme().muted_foreground, cx.theme().list_hover);

        div()
            .id(route.path())
            .px_3()
            .py_1()
            .rounded_md()
            .text_sm()
            .cursor_pointer()
            .tooltip(move |window, cx| Tooltip::new(shortcut.clone()).build(window, cx))
            .map(|el| {
                if is_active {
                    el.text_color(CosmicColors::violet())
                        .font_weight(gpui::FontWeight::SEMIBOLD)
                        .border_b_2()
                        .border_color(CosmicColors::violet())
                } else {
                    el.text_color(muted).hover(move |s| s.bg(hover_bg))
                }
            })
            .child(i18n_nav(cx, route.label_key()))
            .on_click(move |_, _, cx| navigate(route, cx))
    }

    /// Render the settings dropdown menu
    fn render_settings_menu(menu: PopupMenu, _window: &mut Window, cx: &App) -> PopupMenu {
        let store = cx.global::<CloudSpaceStore>().read(cx);
        let (locale, theme) = (store.locale(), store.theme());

        menu.label(i18n_nav(cx, "language"))
            .menu_with_check("中文", locale == "zh", Box::new(LocaleAction::Zh))
            .menu_with_check("English", locale == "en", Box::new(LocaleAction::En))
            .separator()
            .label(i18n_nav(cx, "theme"))
            .menu_with_check(
                i18n_nav(cx, "light"),
                theme == Some(ThemeMode::Light),
                Box::new(ThemeAction::Light),
            )
            .menu_with_check(
                i18n_nav(cx, "dark"),
                theme == Some(ThemeMode::Dark),
                Box::new(ThemeAction::Dark),
            )
            .menu_with_check(
                i18n_nav(cx, "system"),
                theme.is_none(),
                Box::new(ThemeAction::System),
            )
    }

    fn render_actions(cx: &App) -> impl IntoElement {
        let is_dark = cx.theme().is_dark();
        let locale = cx.global::<CloudSpaceStore>().read(cx).locale();
        let next_locale = if locale == "zh" {
            LocaleAction::En
        } else {
            LocaleAction::Zh
        };

        h_flex()
            .items_center()
            .gap_2()
            .mr_2()
            .child(
                Button::new("toggle-theme")
                    .tooltip(i18n_nav(cx, "theme"))
                    .icon(Icon::from(if is_dark {
                        CustomIconName::Sun
                    } else {
                        CustomIconName::Moon
                    }))
                    .small()
                    .ghost()
                    .on_click(move |_, _, cx| {
                        let action = if is_dark {
                            ThemeAction::Light
                        } else {
                            ThemeAction::Dark
                        };
                        cx.dispatch_action(&action);
                    }),
            )
            .child(
                Button::new("toggle-locale")
                    .tooltip(i18n_nav(cx, "language"))
                    .icon(Icon::from(CustomIconName::Language))
                    .small()
                    .ghost()
                    .on_click(move |_, _, cx| cx.dispatch_action(&next_locale)),
            )
            .child(
                Button::new("settings")
                    .tooltip(i18n_nav(cx, "settings"))
                    .icon(IconName::Settings2)
                    .small()
                    .ghost()
                    .dropdown_menu(move |menu, window, cx| {
                        Self::render_settings_menu(menu, window, cx)
                    })
                    .anchor(Corner::TopRight),
            )
            .child(
                CosmicButton::ghost("navbar-login", i18n_nav(cx, "login"))
                    .size(CosmicSize::Small)
                    .on_click(|_, _, cx| navigate(Route::Login, cx)),
            )
            .child(
                CosmicButton::cosmic("navbar-signup", i18n_nav(cx, "signup"))
                    .size(CosmicSize::Small)
                    .on_click(|_, _, cx| navigate(Route::SignUp, cx)),
            )
    }
}

impl Render for CloudSpaceNavbar {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let links = Route::nav_links()
            .iter()
            .map(|route| self.render_nav_link(*route, cx))
            .collect::<Vec<_>>();

        TitleBar::new()
            .child(
                h_flex()
                    .flex_1()
                    .items_center()
                    .gap_6()
                    .pl_4()
                    .child(Self::render_logo(cx))
                    .child(h_flex().gap_1().children(links)),
            )
            .child(Self::render_actions(cx))
    }
}
