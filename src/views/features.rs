//! Features Page

use crate::assets::CustomIconName;
use crate::components::primitives::{FeatureCard, card};
use crate::constants::FEATURES_PARTICLES;
use crate::states::i18n_features;
use crate::theme::colors::CosmicColors;
use crate::theme::typography::Typography;
use crate::views::page::{Backdrop, headline, lead, page_frame, section, section_header};
use gpui::{
    App, IntoElement, ParentElement, RenderOnce, SharedString, Styled, Window, div, prelude::*,
    px,
};
use gpui_component::{ActiveTheme, h_flex, label::Label, v_flex};

/// Feature cards: icon and translation key prefix
pub const FEATURES: &[(CustomIconName, &str)] = &[
    (CustomIconName::ArrowPath, "scalability"),
    (CustomIconName::Bolt, "compression"),
    (CustomIconName::Search, "retrieval"),
    (CustomIconName::CpuChip, "processing"),
    (CustomIconName::ShieldCheck, "security"),
    (CustomIconName::Beaker, "future"),
    (CustomIconName::Globe, "mesh"),
    (CustomIconName::Cloud, "sync"),
];

/// Bullet points per feature card
pub const DETAILS_PER_FEATURE: usize = 4;

/// Layers of the architecture section, in order
pub const ARCHITECTURE_LAYERS: &[&str] = &["input_layer", "processing_layer", "memory_layer"];

#[derive(IntoElement)]
pub struct FeaturesPage;

impl FeaturesPage {
    fn render_hero(cx: &App) -> impl IntoElement {
        section()
            .pt_24()
            .child(headline(i18n_features(cx, "hero_title"), Typography::TEXT_5XL))
            .child(lead(i18n_features(cx, "hero_body"), cx))
    }

    fn render_grid(cx: &App) -> impl IntoElement {
        let cards = FEATURES.iter().map(|(icon, key)| {
            let details = (1..=DETAILS_PER_FEATURE)
                .map(|n| i18n_features(cx, &format!("{key}.detail_{n}")))
                .collect::<Vec<SharedString>>();

            div().w(px(320.0)).child(
                FeatureCard::new(
                    *icon,
                    i18n_features(cx, &format!("{key}.title")),
                    i18n_features(cx, &format!("{key}.description")),
                )
                .details(details),
            )
        });

        section()
            .py_8()
            .child(h_flex().flex_wrap().justify_center().gap_6().children(cards))
    }

    fn render_architecture(cx: &App) -> impl IntoElement {
        let muted = cx.theme().muted_foreground;

        let layers = ARCHITECTURE_LAYERS.iter().enumerate().map(|(index, key)| {
            card()
                .w(px(300.0))
                .p_8()
                .gap_3()
                .items_center()
                .child(
                    div()
                        .size(px(56.0))
                        .rounded_full()
                        .bg(CosmicColors::cosmic_gradient())
                        .flex()
                        .items_center()
                        .justify_center()
                        .text_color(CosmicColors::on_gradient())
                        .text_size(px(Typography::TEXT_2XL))
                        .font_weight(gpui::FontWeight::BOLD)
                        .child(format!("{}", index + 1)),
                )
                .child(Label::new(i18n_features(cx, &format!("{key}.title"))).text_xl())
                .child(
                    Label::new(i18n_features(cx, &format!("{key}.subtitle")))
                        .text_sm()
                        .text_color(CosmicColors::cyan()),
                )
                .child(
                    div()
                        .text_center()
                        .text_color(muted)
                        .child(i18n_features(cx, &format!("{key}.description"))),
                )
        });

        section()
            .child(section_header(
                i18n_features(cx, "architecture_title"),
                i18n_features(cx, "architecture_body"),
                cx,
            ))
            .child(
                v_flex().w_full().items_center().child(
                    h_flex()
                        .flex_wrap()
                        .justify_center()
                        .gap_8()
                        .children(layers),
                ),
            )
    }
}

impl RenderOnce for FeaturesPage {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let backdrop = Backdrop {
            particles: FEATURES_PARTICLES,
            grid_opacity: Some(0.2),
            seed: 2,
        };

        page_frame(
            "features",
            backdrop,
            [
                Self::render_hero(cx).into_any_element(),
                Self::render_grid(cx).into_any_element(),
                Self::render_architecture(cx).into_any_element(),
            ],
            cx,
        )
    }
}
