//! Page Chrome
//!
//! Shared layout pieces for the marketing pages: the decorated scroll frame,
//! gradient-toned headlines and section headers.

use crate::components::cosmic::{FloatingParticles, NeuralGrid};
use crate::components::primitives::card;
use crate::constants::{AUTH_CARD_WIDTH, PAGE_MAX_WIDTH};
use crate::theme::colors::CosmicColors;
use crate::theme::typography::Typography;
use gpui::{
    AnyElement, App, ElementId, IntoElement, ParentElement, SharedString, Styled, div,
    prelude::*, px, relative,
};
use gpui_component::{ActiveTheme, v_flex};

/// Background decoration for a page
#[derive(Debug, Clone, Copy)]
pub struct Backdrop {
    pub particles: usize,
    /// `None` hides the neural grid
    pub grid_opacity: Option<f32>,
    pub seed: u64,
}

/// Decorated, vertically scrolling page frame
pub fn page_frame(
    id: &'static str,
    backdrop: Backdrop,
    sections: impl IntoIterator<Item = AnyElement>,
    cx: &App,
) -> impl IntoElement {
    let background = cx.theme().background;

    div()
        .relative()
        .size_full()
        .bg(background)
        .when_some(backdrop.grid_opacity, |el, opacity| {
            el.child(
                NeuralGrid::new(ElementId::Name(format!("{id}-grid").into()))
                    .opacity(opacity)
                    .seed(backdrop.seed),
            )
        })
        .child(
            FloatingParticles::new(
                ElementId::Name(format!("{id}-particles").into()),
                backdrop.particles,
            )
            .seed(backdrop.seed),
        )
        .child(
            div()
                .id(ElementId::Name(format!("{id}-scroll").into()))
                .absolute()
                .inset_0()
                .overflow_y_scroll()
                .child(
                    v_flex()
                        .w_full()
                        .items_center()
                        .pb_16()
                        .children(sections),
                ),
        )
}

/// Centered column inside a page
pub fn section() -> gpui::Div {
    v_flex()
        .w_full()
        .max_w(px(PAGE_MAX_WIDTH))
        .px_6()
        .py_16()
        .items_center()
        .gap_6()
}

/// Large headline in the brand accent
pub fn headline(text: impl Into<SharedString>, size: f32) -> gpui::Div {
    div()
        .text_size(px(size))
        .line_height(relative(Typography::LEADING_TIGHT))
        .font_weight(gpui::FontWeight::BOLD)
        .text_color(CosmicColors::violet())
        .text_center()
        .child(text.into())
}

/// Muted paragraph, centered
pub fn lead(text: impl Into<SharedString>, cx: &App) -> gpui::Div {
    div()
        .max_w(px(720.0))
        .text_size(px(Typography::TEXT_LG))
        .line_height(relative(Typography::LEADING_RELAXED))
        .text_color(cx.theme().muted_foreground)
        .text_center()
        .child(text.into())
}

/// Section title plus lead paragraph
pub fn section_header(
    title: impl Into<SharedString>,
    body: impl Into<SharedString>,
    cx: &App,
) -> gpui::Div {
    v_flex()
        .items_center()
        .gap_4()
        .child(headline(title, Typography::TEXT_4XL))
        .child(lead(body, cx))
}

/// Narrow card holding a sign-up or login form
pub fn auth_card(
    title: impl Into<SharedString>,
    subtitle: impl Into<SharedString>,
    cx: &App,
) -> gpui::Div {
    card()
        .w(px(AUTH_CARD_WIDTH))
        .p_8()
        .gap_5()
        .child(
            v_flex()
                .items_center()
                .gap_2()
                .child(headline(title, Typography::TEXT_3XL))
                .child(
                    div()
                        .text_sm()
                        .text_color(cx.theme().muted_foreground)
                        .text_center()
                        .child(subtitle.into()),
                ),
        )
}
