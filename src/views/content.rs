//! Main Content Area
//!
//! Routes to the page for the current application route.

use crate::states::{CloudSpaceStore, Route};
use crate::views::{AboutPage, FeaturesPage, LandingPage, LoginView, SignUpView};
use gpui::{Context, Entity, Subscription, Window, div, prelude::*};
use gpui_component::ActiveTheme;

/// Main content container component
pub struct CloudSpaceContent {
    /// Current route
    current_route: Route,
    /// Form views exist only while their route is showing
    signup_view: Option<Entity<SignUpView>>,
    login_view: Option<Entity<LoginView>>,
    _subscriptions: Vec<Subscription>,
}

impl CloudSpaceContent {
    pub fn new(_window: &mut Window, cx: &mut Context<Self>) -> Self {
        let store = cx.global::<CloudSpaceStore>();
        let current_route = store.read(cx).route();
        let app_state = store.app_state();

        // Subscribe to route changes; locale and theme changes re-render too
        let subscriptions = vec![cx.observe(&app_state, |this, model, cx| {
            let route = model.read(cx).route();
            if this.current_route != route {
                this.current_route = route;
                this.release_forms();
            }
            cx.notify();
        })];

        Self {
            current_route,
            signup_view: None,
            login_view: None,
            _subscriptions: subscriptions,
        }
    }

    /// Drop any form view whose route is no longer showing
    fn release_forms(&mut self) {
        if self.current_route != Route::SignUp {
            self.signup_view = None;
        }
        if self.current_route != Route::Login {
            self.login_view = None;
        }
    }

    fn signup_view(&mut self, window: &mut Window, cx: &mut Context<Self>) -> Entity<SignUpView> {
        self.signup_view
            .get_or_insert_with(|| cx.new(|cx| SignUpView::new(window, cx)))
            .clone()
    }

    fn login_view(&mut self, window: &mut Window, cx: &mut Context<Self>) -> Entity<LoginView> {
        self.login_view
            .get_or_insert_with(|| cx.new(|cx| LoginView::new(window, cx)))
            .clone()
    }
}

impl Render for CloudSpaceContent {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let content = match self.current_route {
            Route::Landing => LandingPage.into_any_element(),
            Route::Features => FeaturesPage.into_any_element(),
            Route::About => AboutPage.into_any_element(),
            Route::Login => self.login_view(window, cx).into_any_element(),
            Route::SignUp => self.signup_view(window, cx).into_any_element(),
        };

        div()
            .id("content")
            .flex_1()
            .w_full()
            .overflow_hidden()
            .bg(cx.theme().background)
            .child(content)
    }
}
