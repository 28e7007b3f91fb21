//! Random draws used by the engine
//!
//! The engine only ever asks for uniform and normal draws through
//! `RandomSource`, so tests can feed scripted streams and the generator can be
//! swapped without touching the simulation loop.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng, distr::Distribution};
use rand_distr::StandardNormal;

pub trait RandomSource {
    /// Uniform draw in `[0, 1)`.
    fn next_uniform(&mut self) -> f64;

    /// Draw from `Normal(mean, std_dev)`.
    fn next_normal(&mut self, mean: f64, std_dev: f64) -> f64;
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
    fn next_uniform(&mut self) -> f64 {
        (**self).next_uniform()
    }

    fn next_normal(&mut self, mean: f64, std_dev: f64) -> f64 {
        (**self).next_normal(mean, std_dev)
    }
}

/// Adapts any `rand` generator into a `RandomSource`.
#[derive(Debug, Clone)]
pub struct RngSource<R>(pub R);

impl RngSource<SmallRng> {
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        RngSource(SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_uniform(&mut self) -> f64 {
        self.0.random::<f64>()
    }

    fn next_normal(&mut self, mean: f64, std_dev: f64) -> f64 {
        let z: f64 = StandardNormal.sample(&mut self.0);
        mean + std_dev * z
    }
}

/// Seed of the independent stream used by trajectory `index`.
#[must_use]
pub fn trajectory_seed(base_seed: u64, index: u64) -> u64 {
    splitmix64(base_seed ^ splitmix64(index.wrapping_add(0x9e37_79b9_7f4a_7c15)))
}

fn splitmix64(mut x: u64) -> u64 {
    x = x.wrapping_add(0x9e37_79b9_7f4a_7c15);
    x = (x ^ (x >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    x = (x ^ (x >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    x ^ (x >> 31)
}
