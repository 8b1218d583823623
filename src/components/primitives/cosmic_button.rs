//! Cosmic Button Component

use gpui::{
    App, Background, ClickEvent, ElementId, Hsla, InteractiveElement, IntoElement,
    ParentElement, RenderOnce, SharedString, StatefulInteractiveElement, Styled, Window, div,
    prelude::*, px,
};
use gpui_component::ActiveTheme;

use crate::theme::colors::CosmicColors;

/// Button variant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CosmicVariant {
    /// Violet-to-cyan gradient
    #[default]
    Cosmic,
    /// Magenta-to-blue gradient, glowing border
    Hero,
    /// Translucent gradient with an outline
    Neural,
    /// Transparent with an outline
    GhostCosmic,
}

/// Button size
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CosmicSize {
    Small,
    #[default]
    Large,
    ExtraLarge,
}

/// A gradient button
#[derive(IntoElement)]
pub struct CosmicButton {
    id: ElementId,
    label: SharedString,
    variant: CosmicVariant,
    size: CosmicSize,
    full_width: bool,
    disabled: bool,
    on_click: Option<Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>>,
}

impl CosmicButton {
    pub fn new(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            variant: CosmicVariant::Cosmic,
            size: CosmicSize::Large,
            full_width: false,
            disabled: false,
            on_click: None,
        }
    }

    pub fn variant(mut self, variant: CosmicVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: CosmicSize) -> Self {
        self.size = size;
        self
    }

    /// Stretch to the parent width
    pub fn full_width(mut self) -> Self {
        self.full_width = true;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn on_click(
        mut self,
        handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }

    pub fn cosmic(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(CosmicVariant::Cosmic)
    }

    pub fn hero(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(CosmicVariant::Hero)
    }

    pub fn neural(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(CosmicVariant::Neural)
    }

    pub fn ghost(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(CosmicVariant::GhostCosmic)
    }
}

impl RenderOnce for CosmicButton {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let foreground = cx.theme().foreground;
        let transparent = Hsla::transparent_black();

        let (bg, text_color, border): (Background, Hsla, Hsla) = match self.variant {
            CosmicVariant::Cosmic => (
                CosmicColors::cosmic_gradient(),
                CosmicColors::on_gradient().into(),
                transparent,
            ),
            CosmicVariant::Hero => (
                CosmicColors::hero_gradient(),
                CosmicColors::on_gradient().into(),
                Hsla::from(CosmicColors::magenta()).opacity(0.6),
            ),
            CosmicVariant::Neural => (
                CosmicColors::neural_gradient(),
                foreground,
                CosmicColors::card_border().into(),
            ),
            CosmicVariant::GhostCosmic => (
                transparent.into(),
                foreground,
                CosmicColors::card_border().into(),
            ),
        };

        let (padding_x, height, font_size) = match self.size {
            CosmicSize::Small => (px(12.0), px(30.0), px(13.0)),
            CosmicSize::Large => (px(24.0), px(42.0), px(15.0)),
            CosmicSize::ExtraLarge => (px(32.0), px(52.0), px(17.0)),
        };

        let mut element = div()
            .id(self.id)
            .flex()
            .items_center()
            .justify_center()
            .px(padding_x)
            .h(height)
            .bg(bg)
            .border_1()
            .border_color(border)
            .text_color(text_color)
            .text_size(font_size)
            .font_weight(gpui::FontWeight::SEMIBOLD)
            .rounded_lg()
            .when(self.full_width, |el| el.w_full())
            .child(self.label);

        if self.disabled {
            element = element.opacity(0.5).cursor_not_allowed();
        } else {
            element = element
                .cursor_pointer()
                .hover(|s| s.opacity(0.85))
                .active(|s| s.opacity(0.7));

            if let Some(handler) = self.on_click {
                element = element.on_click(handler);
            }
        }

        element
    }
}
