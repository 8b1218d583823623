//! Login View

use crate::assets::CustomIconName;
use crate::components::primitives::{CosmicButton, FormField};
use crate::constants::LOGIN_PARTICLES;
use crate::domain::login::LoginForm;
use crate::states::{CloudSpaceStore, Route, i18n_login, navigate};
use crate::theme::colors::CosmicColors;
use crate::views::page::{Backdrop, auth_card, page_frame, section};
use gpui::{ClickEvent, Context, Entity, Subscription, Window, div, prelude::*};
use gpui_component::{
    ActiveTheme, Icon, Sizable,
    button::{Button, ButtonVariants},
    h_flex,
    input::{InputEvent, InputState},
    label::Label,
};
use rust_i18n::t;
use tracing::info;

/// Login view
pub struct LoginView {
    form: LoginForm,
    email_input: Entity<InputState>,
    password_input: Entity<InputState>,
    _subscriptions: Vec<Subscription>,
}

impl LoginView {
    pub fn new(window: &mut Window, cx: &mut Context<Self>) -> Self {
        let locale = cx.global::<CloudSpaceStore>().read(cx).locale().to_string();

        let email_input = cx.new(|cx| {
            InputState::new(window, cx)
                .placeholder(t!("login.email_placeholder", locale = &locale).to_string())
        });
        let password_input = cx.new(|cx| {
            InputState::new(window, cx)
                .masked(true)
                .placeholder(t!("login.password_placeholder", locale = &locale).to_string())
        });

        let subscriptions = vec![
            cx.subscribe(&email_input, |this, state, event, cx| {
                if matches!(event, InputEvent::Change) {
                    let value = state.read(cx).value().to_string();
                    this.form.set_email(value);
                    cx.notify();
                }
            }),
            cx.subscribe(&password_input, |this, state, event, cx| {
                if matches!(event, InputEvent::Change) {
                    let value = state.read(cx).value().to_string();
                    this.form.set_password(value);
                    cx.notify();
                }
            }),
        ];

        Self {
            form: LoginForm::new(),
            email_input,
            password_input,
            _subscriptions: subscriptions,
        }
    }

    fn toggle_password_visibility(
        &mut self,
        _: &ClickEvent,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        let show = self.form.toggle_show_password();
        self.password_input.update(cx, |state, cx| {
            state.set_masked(!show, window, cx);
        });
        cx.notify();
    }

    fn submit(&mut self, _: &ClickEvent, _window: &mut Window, _cx: &mut Context<Self>) {
        if let Some(attempt) = self.form.submit() {
            info!(email = %attempt.email, "Login attempt");
        }
    }
}

impl Render for LoginView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let muted = cx.theme().muted_foreground;
        let eye_icon = if self.form.show_password() {
            CustomIconName::EyeSlash
        } else {
            CustomIconName::Eye
        };

        let eye = Button::new("login-toggle-password")
            .icon(Icon::from(eye_icon))
            .ghost()
            .xsmall()
            .on_click(cx.listener(Self::toggle_password_visibility));

        let card = auth_card(i18n_login(cx, "title"), i18n_login(cx, "subtitle"), cx)
            .child(FormField::new(i18n_login(cx, "email"), &self.email_input))
            .child(FormField::new(i18n_login(cx, "password"), &self.password_input).suffix(eye))
            .child(
                CosmicButton::cosmic("login-submit", i18n_login(cx, "submit"))
                    .full_width()
                    .disabled(!self.form.can_submit())
                    .on_click(cx.listener(Self::submit)),
            )
            .child(
                h_flex()
                    .justify_center()
                    .gap_1()
                    .child(Label::new(i18n_login(cx, "no_account")).text_sm().text_color(muted))
                    .child(
                        div()
                            .id("login-to-signup")
                            .text_sm()
                            .text_color(CosmicColors::cyan())
                            .cursor_pointer()
                            .hover(|s| s.underline())
                            .child(i18n_login(cx, "sign_up"))
                            .on_click(|_, _, cx| navigate(Route::SignUp, cx)),
                    ),
            );

        let backdrop = Backdrop {
            particles: LOGIN_PARTICLES,
            grid_opacity: None,
            seed: 4,
        };

        page_frame(
            "login",
            backdrop,
            [section().pt_12().child(card).into_any_element()],
            cx,
        )
    }
}
