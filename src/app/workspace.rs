//! Workspace - Main Shell
//!
//! The root view of the window: the navbar above the routed content.

use gpui::{Context, Entity, IntoElement, ParentElement, Render, Styled, Window, div, prelude::*};
use gpui_component::ActiveTheme;

use crate::views::{CloudSpaceContent, CloudSpaceNavbar};

/// Main workspace containing the application layout
pub struct Workspace {
    navbar: Entity<CloudSpaceNavbar>,
    content: Entity<CloudSpaceContent>,
}

impl Workspace {
    pub fn new(window: &mut Window, cx: &mut Context<Self>) -> Self {
        let navbar = cx.new(|cx| CloudSpaceNavbar::new(window, cx));
        let content = cx.new(|cx| CloudSpaceContent::new(window, cx));

        Self { navbar, content }
    }
}

impl Render for Workspace {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .size_full()
            .flex()
            .flex_col()
            .bg(cx.theme().background)
            .text_color(cx.theme().foreground)
            .child(self.navbar.clone())
            .child(self.content.clone())
    }
}
