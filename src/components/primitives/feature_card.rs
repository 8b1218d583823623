//! Feature Card Component

use gpui::{
    App, IntoElement, ParentElement, RenderOnce, SharedString, Styled, Window, div, prelude::*,
    px,
};
use gpui_component::{ActiveTheme, Icon, h_flex, label::Label, v_flex};

use crate::assets::CustomIconName;
use crate::theme::colors::CosmicColors;

/// Card with an icon, a title, a description and optional detail bullets
#[derive(IntoElement)]
pub struct FeatureCard {
    icon: CustomIconName,
    title: SharedString,
    description: SharedString,
    details: Vec<SharedString>,
    centered: bool,
}

impl FeatureCard {
    pub fn new(
        icon: CustomIconName,
        title: impl Into<SharedString>,
        description: impl Into<SharedString>,
    ) -> Self {
        Self {
            icon,
            title: title.into(),
            description: description.into(),
            details: Vec::new(),
            centered: false,
        }
    }

    pub fn details(mut self, details: impl IntoIterator<Item = SharedString>) -> Self {
        self.details = details.into_iter().collect();
        self
    }

    /// Center icon and text (preview cards on the landing page)
    pub fn centered(mut self) -> Self {
        self.centered = true;
        self
    }
}

impl RenderOnce for FeatureCard {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let theme = cx.theme();
        let primary = theme.primary;
        let muted = theme.muted_foreground;
        let centered = self.centered;

        let bullets = self.details.into_iter().map(move |detail| {
            h_flex()
                .gap_2()
                .items_center()
                .child(div().size(px(6.0)).rounded_full().bg(CosmicColors::cyan()))
                .child(Label::new(detail).text_sm().text_color(muted))
        });

        card()
            .p_6()
            .gap_3()
            .when(centered, |el| el.items_center())
            .child(Icon::from(self.icon).size_10().text_color(primary))
            .child(Label::new(self.title).text_xl().font_weight(gpui::FontWeight::SEMIBOLD))
            .child(
                div()
                    .text_color(muted)
                    .when(centered, |el| el.text_center())
                    .child(self.description),
            )
            .children(bullets)
    }
}

/// Translucent bordered surface used by every marketing card
pub fn card() -> gpui::Div {
    v_flex()
        .rounded_xl()
        .border_1()
        .border_color(CosmicColors::card_border())
        .bg(CosmicColors::card_surface())
}
