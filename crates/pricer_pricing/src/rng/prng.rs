//! Pseudo-random number generator wrapper for Monte Carlo simulations.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, StandardNormal};

/// Golden-ratio increment used to spread path indices across seed space.
const PATH_STREAM_INCREMENT: u64 = 0x9E37_79B9_7F4A_7C15;

/// Monte Carlo random number generator.
///
/// Wraps [`StdRng`]. Normal variates use the Ziggurat sampler of
/// `rand_distr::StandardNormal`.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::rng::PricerRng;
///
/// let mut rng1 = PricerRng::from_seed(12345);
/// let mut rng2 = PricerRng::from_seed(12345);
/// assert_eq!(rng1.gen_normal(), rng2.gen_normal());
/// ```
pub struct PricerRng {
    inner: StdRng,
}

impl PricerRng {
    /// Creates a generator initialised with `seed`.
    #[inline]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }

    /// Creates the independent stream for one path of a seeded run.
    ///
    /// The stream seed is a SplitMix64 finalisation of
    /// `seed + (path_index + 1) · φ`, so neighbouring paths and neighbouring
    /// run seeds land far apart.
    #[inline]
    pub fn for_path(seed: u64, path_index: u64) -> Self {
        let offset = path_index.wrapping_add(1).wrapping_mul(PATH_STREAM_INCREMENT);
        Self::from_seed(split_mix64(seed.wrapping_add(offset)))
    }

    /// Generates a standard normal variate (mean 0, std 1).
    #[inline]
    pub fn gen_normal(&mut self) -> f64 {
        StandardNormal.sample(&mut self.inner)
    }

    /// Fills `buffer` with standard normal variates.
    ///
    /// Empty buffers are a no-op.
    #[inline]
    pub fn fill_normal(&mut self, buffer: &mut [f64]) {
        for value in buffer.iter_mut() {
            *value = self.gen_normal();
        }
    }
}

/// SplitMix64 output function.
#[inline]
fn split_mix64(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
