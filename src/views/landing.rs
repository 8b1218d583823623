//! Landing Page
//!
//! Hero, technology preview cards and a closing call to action.

use crate::assets::CustomIconName;
use crate::components::primitives::{CosmicButton, CosmicSize, FeatureCard, card};
use crate::constants::LANDING_PARTICLES;
use crate::states::{Route, i18n_landing, navigate};
use crate::theme::typography::Typography;
use crate::views::page::{Backdrop, headline, lead, page_frame, section, section_header};
use gpui::{App, IntoElement, ParentElement, RenderOnce, Styled, Window, div, prelude::*, px};
use gpui_component::{ActiveTheme, h_flex, v_flex};

/// Preview cards: icon and translation key prefix
pub const PREVIEW_CARDS: &[(CustomIconName, &str)] = &[
    (CustomIconName::ArrowPath, "capacity"),
    (CustomIconName::Bolt, "compression"),
    (CustomIconName::Search, "search"),
    (CustomIconName::Cloud, "sync"),
];

#[derive(IntoElement)]
pub struct LandingPage;

impl LandingPage {
    fn render_hero(cx: &App) -> impl IntoElement {
        let foreground = cx.theme().foreground;

        section()
            .pt_24()
            .child(
                v_flex()
                    .items_center()
                    .child(headline(i18n_landing(cx, "hero_title"), Typography::TEXT_6XL))
                    .child(
                        headline(i18n_landing(cx, "hero_subtitle"), Typography::TEXT_6XL)
                            .text_color(foreground),
                    ),
            )
            .child(lead(i18n_landing(cx, "hero_body"), cx))
            .child(
                h_flex()
                    .gap_4()
                    .child(
                        CosmicButton::hero("landing-start", i18n_landing(cx, "cta_start"))
                            .size(CosmicSize::ExtraLarge)
                            .on_click(|_, _, cx| navigate(Route::SignUp, cx)),
                    )
                    .child(
                        CosmicButton::neural("landing-explore", i18n_landing(cx, "cta_explore"))
                            .size(CosmicSize::ExtraLarge)
                            .on_click(|_, _, cx| navigate(Route::Features, cx)),
                    ),
            )
    }

    fn render_preview(cx: &App) -> impl IntoElement {
        let cards = PREVIEW_CARDS.iter().map(|(icon, key)| {
            div().w(px(240.0)).child(
                FeatureCard::new(
                    *icon,
                    i18n_landing(cx, &format!("{key}.title")),
                    i18n_landing(cx, &format!("{key}.description")),
                )
                .centered(),
            )
        });

        section()
            .child(section_header(
                i18n_landing(cx, "preview_title"),
                i18n_landing(cx, "preview_body"),
                cx,
            ))
            .child(h_flex().flex_wrap().justify_center().gap_6().children(cards))
    }

    fn render_call_to_action(cx: &App) -> impl IntoElement {
        section().child(
            card()
                .max_w(px(760.0))
                .p_12()
                .gap_6()
                .items_center()
                .child(headline(i18n_landing(cx, "final_title"), Typography::TEXT_3XL))
                .child(lead(i18n_landing(cx, "final_body"), cx))
                .child(
                    CosmicButton::cosmic("landing-begin", i18n_landing(cx, "final_cta"))
                        .size(CosmicSize::ExtraLarge)
                        .on_click(|_, _, cx| navigate(Route::SignUp, cx)),
                ),
        )
    }
}

impl RenderOnce for LandingPage {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let backdrop = Backdrop {
            particles: LANDING_PARTICLES,
            grid_opacity: Some(0.4),
            seed: 1,
        };

        page_frame(
            "landing",
            backdrop,
            [
                Self::render_hero(cx).into_any_element(),
                Self::render_preview(cx).into_any_element(),
                Self::render_call_to_action(cx).into_any_element(),
            ],
            cx,
        )
    }
}
