//! Cosmic Decorations
//!
//! Background effects layered behind page content. Placement is derived from
//! fixed-seed hashes so a view looks the same on every render.

pub mod floating_particles;
pub mod neural_grid;

pub use floating_particles::FloatingParticles;
pub use neural_grid::NeuralGrid;

use ahash::RandomState;

const HASH_SEEDS: [u64; 4] = [
    0x243f_6a88_85a3_08d3,
    0x1319_8a2e_0370_7344,
    0xa409_3822_299f_31d0,
    0x082e_fa98_ec4e_6c89,
];

/// Hash `(seed, index, channel)` into `[0, 1)`
pub(crate) fn unit_hash(seed: u64, index: u64, channel: u64) -> f32 {
    let [k0, k1, k2, k3] = HASH_SEEDS;
    let hash = RandomState::with_seeds(k0, k1, k2, k3).hash_one((seed, index, channel));
    // 24 bits fit exactly in an f32 mantissa
    (hash >> 40) as f32 / (1u64 << 24) as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_hash_is_in_unit_interval() {
        for i in 0..500 {
            let v = unit_hash(3, i, i % 5);
            assert!((0.0..1.0).contains(&v));
        }
    }
}
