//! Sign-Up View
//!
//! Account creation card with live password strength feedback. The form
//! state lives in this view and is dropped when the user navigates away.

use crate::assets::CustomIconName;
use crate::components::primitives::{CosmicButton, FormField};
use crate::constants::SIGNUP_PARTICLES;
use crate::domain::password::{StrengthCheck, StrengthTier};
use crate::domain::signup::SignUpForm;
use crate::states::{CloudSpaceStore, Route, i18n_signup, navigate};
use crate::theme::colors::CosmicColors;
use crate::views::page::{Backdrop, auth_card, page_frame, section};
use gpui::{App, ClickEvent, Context, Entity, Hsla, Subscription, Window, div, prelude::*, px};
use gpui_component::{
    ActiveTheme, Icon, Sizable,
    button::{Button, ButtonVariants},
    h_flex,
    input::{InputEvent, InputState},
    label::Label,
    v_flex,
};
use rust_i18n::t;
use tracing::info;

/// Input a change event came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SignUpField {
    Name,
    Email,
    Password,
    ConfirmPassword,
}

/// Sign-up view
pub struct SignUpView {
    form: SignUpForm,
    name_input: Entity<InputState>,
    email_input: Entity<InputState>,
    password_input: Entity<InputState>,
    confirm_input: Entity<InputState>,
    _subscriptions: Vec<Subscription>,
}

impl SignUpView {
    pub fn new(window: &mut Window, cx: &mut Context<Self>) -> Self {
        let locale = cx.global::<CloudSpaceStore>().read(cx).locale().to_string();
        let placeholder = |key: &str| t!(format!("signup.{key}"), locale = &locale).to_string();

        let name_input =
            cx.new(|cx| InputState::new(window, cx).placeholder(placeholder("name_placeholder")));
        let email_input =
            cx.new(|cx| InputState::new(window, cx).placeholder(placeholder("email_placeholder")));
        let password_input = cx.new(|cx| {
            InputState::new(window, cx)
                .masked(true)
                .placeholder(placeholder("password_placeholder"))
        });
        let confirm_input = cx.new(|cx| {
            InputState::new(window, cx)
                .masked(true)
                .placeholder(placeholder("confirm_placeholder"))
        });

        let mut subscriptions = Vec::new();
        for (input, field) in [
            (&name_input, SignUpField::Name),
            (&email_input, SignUpField::Email),
            (&password_input, SignUpField::Password),
            (&confirm_input, SignUpField::ConfirmPassword),
        ] {
            subscriptions.push(cx.subscribe(input, move |this, state, event, cx| {
                if matches!(event, InputEvent::Change) {
                    let value = state.read(cx).value().to_string();
                    this.apply_change(field, value);
                    cx.notify();
                }
            }));
        }

        Self {
            form: SignUpForm::new(),
            name_input,
            email_input,
            password_input,
            confirm_input,
            _subscriptions: subscriptions,
        }
    }

    fn apply_change(&mut self, field: SignUpField, value: String) {
        match field {
            SignUpField::Name => self.form.set_name(value),
            SignUpField::Email => self.form.set_email(value),
            SignUpField::Password => self.form.set_password(value),
            SignUpField::ConfirmPassword => self.form.set_confirm_password(value),
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
        // Stub: nothing leaves the process
        if let Some(attempt) = self.form.submit() {
            info!(name = %attempt.name, email = %attempt.email, "Sign up attempt");
        }
    }

    /// Meter, tier label and per-check list
    fn render_strength(&self, cx: &App) -> impl IntoElement {
        let theme = cx.theme();
        let strength = self.form.password_strength();
        let score = usize::from(strength.score());
        let tier = strength.tier();
        let tier_color = tier_color(tier, cx);
        let (muted, border, success) = (theme.muted_foreground, theme.border, theme.success);

        let segments = (0..StrengthCheck::all().len()).map(|index| {
            div()
                .flex_1()
                .h(px(4.0))
                .rounded_full()
                .bg(if index < score { tier_color } else { border })
        });

        let checks = StrengthCheck::all().iter().map(|check| {
            let color = if strength.passed(*check) { success } else { muted };
            h_flex()
                .gap_2()
                .items_center()
                .child(Icon::from(CustomIconName::Check).size_3().text_color(color))
                .child(
                    Label::new(i18n_signup(cx, check.label_key()))
                        .text_xs()
                        .text_color(color),
                )
        });

        v_flex()
            .w_full()
            .gap_2()
            .child(
                h_flex()
                    .justify_between()
                    .child(Label::new(i18n_signup(cx, "strength_label")).text_sm())
                    .child(
                        Label::new(i18n_signup(cx, tier.label_key()))
                            .text_sm()
                            .text_color(tier_color),
                    ),
            )
            .child(h_flex().w_full().gap_1().children(segments))
            .children(checks)
    }
}

fn tier_color(tier: StrengthTier, cx: &App) -> Hsla {
    match tier {
        StrengthTier::Weak => cx.theme().danger,
        StrengthTier::Medium => cx.theme().warning,
        StrengthTier::Strong => cx.theme().primary,
    }
}

impl Render for SignUpView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let show_password = self.form.show_password();
        let muted = cx.theme().muted_foreground;

        let (eye_icon, eye_tooltip) = if show_password {
            (CustomIconName::EyeSlash, "hide_password")
        } else {
            (CustomIconName::Eye, "show_password")
        };
        let eye = Button::new("signup-toggle-password")
            .icon(Icon::from(eye_icon))
            .ghost()
            .xsmall()
            .tooltip(i18n_signup(cx, eye_tooltip))
            .on_click(cx.listener(Self::toggle_password_visibility));

        let strength = (!self.form.password().is_empty()).then(|| self.render_strength(cx));
        let mismatch = self
            .form
            .password_mismatch()
            .then(|| i18n_signup(cx, "mismatch"));

        let card = auth_card(i18n_signup(cx, "title"), i18n_signup(cx, "subtitle"), cx)
            .child(FormField::new(i18n_signup(cx, "name"), &self.name_input))
            .child(FormField::new(i18n_signup(cx, "email"), &self.email_input))
            .child(FormField::new(i18n_signup(cx, "password"), &self.password_input).suffix(eye))
            .children(strength)
            .child(
                FormField::new(i18n_signup(cx, "confirm_password"), &self.confirm_input)
                    .error(mismatch),
            )
            .child(
                CosmicButton::cosmic("signup-submit", i18n_signup(cx, "submit"))
                    .full_width()
                    .disabled(!self.form.can_submit())
                    .on_click(cx.listener(Self::submit)),
            )
            .child(
                h_flex()
                    .justify_center()
                    .gap_1()
                    .child(
                        Label::new(i18n_signup(cx, "have_account"))
                            .text_sm()
                            .text_color(muted),
                    )
                    .child(
                        div()
                            .id("signup-to-login")
                            .text_sm()
                            .text_color(CosmicColors::cyan())
                            .cursor_pointer()
                            .hover(|s| s.underline())
                            .child(i18n_signup(cx, "sign_in"))
                            .on_click(|_, _, cx| navigate(Route::Login, cx)),
                    ),
            );

        let backdrop = Backdrop {
            particles: SIGNUP_PARTICLES,
            grid_opacity: None,
            seed: 5,
        };

        page_frame(
            "signup",
            backdrop,
            [section().pt_12().child(card).into_any_element()],
            cx,
        )
    }
}
