//! Target-length sampling.
//!
//! The target character length varies between generations so repeated
//! drafts are not visually uniform. The draw sits behind a trait so tests
//! can pin it and assert on the full composed prompt.

use rand::Rng;

/// Draws a target character length from an inclusive range.
pub trait LengthSampler {
    /// Draw a length in `[min, max]`.
    fn draw(&mut self, min: u32, max: u32) -> u32;
}

/// Uniform random draw, the production sampler.
#[derive(Debug, Clone, Copy, Default)]
pub struct UniformLengthSampler;

impl LengthSampler for UniformLengthSampler {
    fn draw(&mut self, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        rand::thread_rng().gen_range(min..=max)
    }
}

/// Always returns the wrapped value, clamped into range. For tests.
///
/// # Examples
///
/// ```
/// use scrivano_prompt::{FixedLengthSampler, LengthSampler};
///
/// let mut sampler = FixedLengthSampler(120);
/// assert_eq!(sampler.draw(1, 240), 120);
/// assert_eq!(sampler.draw(1, 100), 100);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FixedLengthSampler(pub u32);

impl LengthSampler for FixedLengthSampler {
    fn draw(&mut self, min: u32, max: u32) -> u32 {
        self.0.clamp(min, max.max(min))
    }
}
