//! Floating Particles
//!
//! Glowing dots scattered over a view, each pulsing on its own cycle.

use gpui::{
    Animation, AnimationExt, App, ElementId, IntoElement, ParentElement, RenderOnce, Styled,
    Window, div, prelude::*, px, relative,
};
use std::time::Duration;

use crate::components::cosmic::unit_hash;
use crate::theme::colors::CosmicColors;

const MIN_SIZE: f32 = 2.0;
const MAX_SIZE: f32 = 6.0;
const MIN_DURATION_MS: u64 = 2_500;
const MAX_DURATION_MS: u64 = 6_000;
/// Vertical drift at the top of the pulse
const DRIFT: f32 = 12.0;

/// Placement and timing of one particle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Horizontal position as a fraction of the container width
    pub x: f32,
    /// Vertical position as a fraction of the container height
    pub y: f32,
    /// Diameter in pixels
    pub size: f32,
    /// Length of one pulse cycle
    pub duration_ms: u64,
    /// Offset into the cycle, `[0, 1)`
    pub phase: f32,
}

/// Deterministic layout for `count` particles
pub fn particle_layout(count: usize, seed: u64) -> Vec<Particle> {
    (0..count)
        .map(|index| {
            let channel = |c: u64| unit_hash(seed, index as u64, c);
            Particle {
                x: channel(0),
                y: channel(1),
                size: MIN_SIZE + channel(2) * (MAX_SIZE - MIN_SIZE),
                duration_ms: MIN_DURATION_MS
                    + (channel(3) * (MAX_DURATION_MS - MIN_DURATION_MS) as f32) as u64,
                phase: channel(4),
            }
        })
        .collect()
}

/// Triangle wave over one cycle: 0 → 1 → 0
fn pulse(delta: f32, phase: f32) -> f32 {
    let t = (delta + phase).fract();
    1.0 - (2.0 * t - 1.0).abs()
}

/// Particle overlay, absolutely positioned over its parent
#[derive(IntoElement)]
pub struct FloatingParticles {
    id: ElementId,
    count: usize,
    seed: u64,
}

impl FloatingParticles {
    pub fn new(id: impl Into<ElementId>, count: usize) -> Self {
        Self {
            id: id.into(),
            count,
            seed: 0,
        }
    }

    /// Use a different layout seed (views use distinct seeds so pages differ)
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

impl RenderOnce for FloatingParticles {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let color = CosmicColors::particle_hsla();

        div()
            .id(self.id)
            .absolute()
            .inset_0()
            .overflow_hidden()
            .children(
                particle_layout(self.count, self.seed)
                    .into_iter()
                    .enumerate()
                    .map(move |(index, particle)| {
                        div()
                            .absolute()
                            .left(relative(particle.x))
                            .top(relative(particle.y))
                            .size(px(particle.size))
                            .rounded_full()
                            .bg(color)
                            .with_animation(
                                ("particle", index),
                                Animation::new(Duration::from_millis(particle.duration_ms))
                                    .repeat(),
                                move |el, delta| {
                                    let wave = pulse(delta, particle.phase);
                                    el.opacity(0.15 + 0.75 * wave).mt(px(-DRIFT * wave))
                                },
                            )
                    }),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_has_requested_count() {
        assert!(particle_layout(0, 1).is_empty());
        assert_eq!(particle_layout(30, 1).len(), 30);
    }

    #[test]
    fn layout_stays_in_bounds() {
        for particle in particle_layout(200, 42) {
            assert!((0.0..1.0).contains(&particle.x));
            assert!((0.0..1.0).contains(&particle.y));
            assert!((0.0..1.0).contains(&particle.phase));
            assert!((MIN_SIZE..=MAX_SIZE).contains(&particle.size));
            assert!((MIN_DURATION_MS..=MAX_DURATION_MS).contains(&particle.duration_ms));
        }
    }

    #[test]
    fn layout_is_deterministic_per_seed() {
        assert_eq!(particle_layout(15, 7), particle_layout(15, 7));
        assert_ne!(particle_layout(15, 7), particle_layout(15, 8));
    }

    #[test]
    fn pulse_peaks_mid_cycle() {
        assert_eq!(pulse(0.0, 0.0), 0.0);
        assert_eq!(pulse(0.5, 0.0), 1.0);
        assert_eq!(pulse(0.25, 0.25), 1.0);
    }
}
