//! Form Field Component
//!
//! A label above an input, with an optional trailing element and error line.

use gpui::{
    AnyElement, App, Entity, IntoElement, ParentElement, RenderOnce, SharedString, Styled, Window,
    prelude::*,
};
use gpui_component::{
    ActiveTheme,
    input::{Input, InputState},
    label::Label,
    v_flex,
};

#[derive(IntoElement)]
pub struct FormField {
    label: SharedString,
    input: Entity<InputState>,
    suffix: Option<AnyElement>,
    error: Option<SharedString>,
}

impl FormField {
    pub fn new(label: impl Into<SharedString>, input: &Entity<InputState>) -> Self {
        Self {
            label: label.into(),
            input: input.clone(),
            suffix: None,
            error: None,
        }
    }

    /// Element rendered at the trailing edge of the input
    pub fn suffix(mut self, suffix: impl IntoElement) -> Self {
        self.suffix = Some(suffix.into_any_element());
        self
    }

    /// Inline error shown under the input; `None` hides it
    pub fn error(mut self, error: Option<SharedString>) -> Self {
        self.error = error;
        self
    }
}

impl RenderOnce for FormField {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let danger = cx.theme().danger;

        let mut input = Input::new(&self.input);
        if let Some(suffix) = self.suffix {
            input = input.suffix(suffix);
        }

        v_flex()
            .w_full()
            .gap_2()
            .child(Label::new(self.label).text_sm())
            .child(input)
            .when_some(self.error, |el, error| {
                el.child(Label::new(error).text_sm().text_color(danger))
            })
    }
}
