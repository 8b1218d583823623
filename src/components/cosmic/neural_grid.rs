//! Neural Grid
//!
//! Evenly spaced grid lines with pulsing nodes at some intersections.

use gpui::{
    Animation, AnimationExt, App, ElementId, IntoElement, ParentElement, RenderOnce, Styled,
    Window, div, ease_in_out, prelude::*, px, relative,
};
use std::time::Duration;

use crate::components::cosmic::unit_hash;
use crate::constants::{NEURAL_GRID_COLUMNS, NEURAL_GRID_ROWS};
use crate::theme::colors::CosmicColors;

/// Fraction of intersections that carry a node
const NODE_DENSITY: f32 = 0.18;
const NODE_SIZE: f32 = 6.0;
const NODE_PULSE_MS: u64 = 3_000;

/// Intersections (column, row) that carry a pulsing node
pub fn grid_nodes(columns: usize, rows: usize, seed: u64) -> Vec<(usize, usize)> {
    (1..columns)
        .flat_map(|col| (1..rows).map(move |row| (col, row)))
        .filter(|(col, row)| {
            let index = (col * rows + row) as u64;
            unit_hash(seed, index, 0) < NODE_DENSITY
        })
        .collect()
}

/// Grid overlay, absolutely positioned over its parent
#[derive(IntoElement)]
pub struct NeuralGrid {
    id: ElementId,
    opacity: f32,
    seed: u64,
}

impl NeuralGrid {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            opacity: 0.4,
            seed: 0,
        }
    }

    pub fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

impl RenderOnce for NeuralGrid {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let line_color = CosmicColors::grid_line();
        let node_color = CosmicColors::grid_node();

        let vertical = (1..NEURAL_GRID_COLUMNS).map(move |col| {
            div()
                .absolute()
                .top_0()
                .bottom_0()
                .left(relative(col as f32 / NEURAL_GRID_COLUMNS as f32))
                .w(px(1.0))
                .bg(line_color)
        });

        let horizontal = (1..NEURAL_GRID_ROWS).map(move |row| {
            div()
                .absolute()
                .left_0()
                .right_0()
                .top(relative(row as f32 / NEURAL_GRID_ROWS as f32))
                .h(px(1.0))
                .bg(line_color)
        });

        let nodes = grid_nodes(NEURAL_GRID_COLUMNS, NEURAL_GRID_ROWS, self.seed)
            .into_iter()
            .enumerate()
            .map(move |(index, (col, row))| {
                div()
                    .absolute()
                    .left(relative(col as f32 / NEURAL_GRID_COLUMNS as f32))
                    .top(relative(row as f32 / NEURAL_GRID_ROWS as f32))
                    .ml(px(-NODE_SIZE / 2.0))
                    .mt(px(-NODE_SIZE / 2.0))
                    .size(px(NODE_SIZE))
                    .rounded_full()
                    .bg(node_color)
                    .with_animation(
                        ("grid-node", index),
                        Animation::new(Duration::from_millis(NODE_PULSE_MS + index as u64 * 150))
                            .repeat()
                            .with_easing(ease_in_out),
                        |el, delta| el.opacity(0.3 + 0.7 * (1.0 - (2.0 * delta - 1.0).abs())),
                    )
            });

        div()
            .id(self.id)
            .absolute()
            .inset_0()
            .overflow_hidden()
            .opacity(self.opacity)
            .children(vertical)
            .children(horizontal)
            .children(nodes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nodes_sit_on_interior_intersections() {
        let nodes = grid_nodes(16, 10, 0);
        assert!(!nodes.is_empty());
        for (col, row) in nodes {
            assert!((1..16).contains(&col));
            assert!((1..10).contains(&row));
        }
    }

    #[test]
    fn empty_grid_has_no_nodes() {
        assert!(grid_nodes(1, 1, 0).is_empty());
        assert!(grid_nodes(0, 0, 0).is_empty());
    }
}
