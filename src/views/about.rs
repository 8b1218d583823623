//! About Page

use crate::components::primitives::{CosmicButton, CosmicSize, card};
use crate::constants::ABOUT_PARTICLES;
use crate::states::{Route, i18n_about, navigate};
use crate::theme::colors::CosmicColors;
use crate::theme::typography::Typography;
use crate::views::page::{Backdrop, headline, lead, page_frame, section, section_header};
use gpui::{
    App, IntoElement, ParentElement, RenderOnce, Styled, Window, div, prelude::*, px, relative,
};
use gpui_component::{ActiveTheme, h_flex, label::Label, v_flex};

/// Rows of the statistics card
pub const STATS: &[&str] = &["doubling", "efficiency", "lifespan", "nodes"];

/// Technology stack layers
pub const STACK_LAYERS: &[&str] = &["storage", "compression", "archival", "retrieval"];

/// Items listed per stack layer
pub const ITEMS_PER_LAYER: usize = 4;

#[derive(IntoElement)]
pub struct AboutPage;

impl AboutPage {
    fn render_hero(cx: &App) -> impl IntoElement {
        let foreground = cx.theme().foreground;

        section()
            .pt_24()
            .child(headline(i18n_about(cx, "hero_title"), Typography::TEXT_5XL))
            .child(
                headline(i18n_about(cx, "hero_subtitle"), Typography::TEXT_4XL)
                    .text_color(foreground),
            )
            .child(lead(i18n_about(cx, "hero_body"), cx))
    }

    fn render_vision(cx: &App) -> impl IntoElement {
        let muted = cx.theme().muted_foreground;

        let paragraph = |key: &str| {
            div()
                .text_size(px(Typography::TEXT_LG))
                .line_height(relative(Typography::LEADING_RELAXED))
                .text_color(muted)
                .child(i18n_about(cx, key))
        };

        let stats = STATS.iter().map(|key| {
            h_flex()
                .justify_between()
                .child(Label::new(i18n_about(cx, &format!("{key}.label"))).text_color(muted))
                .child(
                    Label::new(i18n_about(cx, &format!("{key}.value")))
                        .font_weight(gpui::FontWeight::BOLD)
                        .text_color(CosmicColors::cyan()),
                )
        });

        section().child(
            h_flex()
                .w_full()
                .gap_12()
                .items_center()
                .child(
                    v_flex()
                        .flex_1()
                        .gap_6()
                        .child(
                            headline(i18n_about(cx, "vision_title"), Typography::TEXT_3XL)
                                .text_left(),
                        )
                        .child(paragraph("vision_body_1"))
                        .child(paragraph("vision_body_2")),
                )
                .child(
                    card()
                        .flex_1()
                        .p_8()
                        .gap_4()
                        .child(
                            div()
                                .text_center()
                                .text_xl()
                                .font_weight(gpui::FontWeight::SEMIBOLD)
                                .child(i18n_about(cx, "stats_title")),
                        )
                        .children(stats),
                ),
        )
    }

    fn render_stack(cx: &App) -> impl IntoElement {
        let muted = cx.theme().muted_foreground;

        let layers = STACK_LAYERS.iter().map(|key| {
            let items = (1..=ITEMS_PER_LAYER).map(|n| {
                Label::new(i18n_about(cx, &format!("{key}.item_{n}")))
                    .text_sm()
                    .text_color(muted)
            });

            card()
                .w(px(240.0))
                .p_6()
                .gap_2()
                .child(Label::new(i18n_about(cx, &format!("{key}.title"))).text_lg())
                .child(
                    Label::new(i18n_about(cx, &format!("{key}.subtitle")))
                        .text_sm()
                        .text_color(CosmicColors::cyan()),
                )
                .child(div().h(px(1.0)).my_2().bg(CosmicColors::card_border()))
                .children(items)
        });

        section()
            .child(section_header(
                i18n_about(cx, "stack_title"),
                i18n_about(cx, "stack_body"),
                cx,
            ))
            .child(h_flex().flex_wrap().justify_center().gap_6().children(layers))
    }

    fn render_call_to_action(cx: &App) -> impl IntoElement {
        section().child(
            card()
                .max_w(px(760.0))
                .p_12()
                .gap_6()
                .items_center()
                .child(headline(i18n_about(cx, "cta_title"), Typography::TEXT_3XL))
                .child(lead(i18n_about(cx, "cta_body"), cx))
                .child(
                    h_flex()
                        .gap_4()
                        .child(
                            CosmicButton::cosmic("about-start", i18n_about(cx, "cta_start"))
                                .size(CosmicSize::ExtraLarge)
                                .on_click(|_, _, cx| navigate(Route::SignUp, cx)),
                        )
                        .child(
                            CosmicButton::neural("about-explore", i18n_about(cx, "cta_explore"))
                                .size(CosmicSize::ExtraLarge)
                                .on_click(|_, _, cx| navigate(Route::Features, cx)),
                        ),
                ),
        )
    }
}

impl RenderOnce for AboutPage {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let backdrop = Backdrop {
            particles: ABOUT_PARTICLES,
            grid_opacity: Some(0.2),
            seed: 3,
        };

        page_frame(
            "about",
            backdrop,
            [
                Self::render_hero(cx).into_any_element(),
                Self::render_vision(cx).into_any_element(),
                Self::render_stack(cx).into_any_element(),
                Self::render_call_to_action(cx).into_any_element(),
            ],
            cx,
        )
    }
}
