//! Bounded numeric draws over a bit source.
//!
//! This module provides [`RandomGenerator`], which maps raw words onto
//! requested integer and floating-point ranges.
//!
//! ## Endpoint conventions
//!
//! | Call                         | Result range     |
//! |------------------------------|------------------|
//! | `int_range(min, max)`        | `[min, max)`     |
//! | `int_inclusive(min, max)`    | `[min, max]`     |
//! | `int_up_to(max)`             | `[0, max]`       |
//! | `long_range(min, max)`       | `[min, max)`     |
//! | `double_range(min, max)`     | `[min, max)`     |
//! | `unit_interval()`            | `[0, 1]`         |
//!
//! A half-open integer range with `min == max` is degenerate and returns
//! `min`. Floating-point bounded draws are always computed as
//! `unit * (max - min) + min`; callers needing an inclusive upper bound must
//! widen `max` themselves. The final addition rounds, so when `|min|` is large
//! next to the width a draw can still round onto `max`.
//!
//! Every integer draw reduces through a single rejection sampler, so no
//! range suffers from modulo bias.

use num_traits::Float;
use rand::{Rng, RngCore};

use super::source::BitSource;
use crate::types::{RandomError, Result};

/// Number of lattice steps used by [`RandomGenerator::unit_interval`].
pub const UNIT_INTERVAL_PRECISION: u32 = 1_000_000_000;

const SURROGATE_START: u32 = 0xD800;
const SURROGATE_LEN: u32 = 0x800;
const SCALAR_COUNT: u32 = 0x11_0000 - SURROGATE_LEN;

/// Random value generator with exact, bias-free range semantics.
///
/// The generator owns its bit source; there is no hidden global state. Pass
/// the generator (or a `&mut` to it) to whichever component needs draws.
///
/// # Examples
///
/// ```rust
/// use randkit_core::rng::RandomGenerator;
///
/// let mut rng = RandomGenerator::seeded(42);
///
/// let die = rng.int_inclusive(1, 6).unwrap();
/// assert!((1..=6).contains(&die));
///
/// let x = rng.double_range(-1.0, 1.0).unwrap();
/// assert!(x >= -1.0 && x < 1.0);
///
/// assert!(rng.int_range(5, 1).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct RandomGenerator<R: RngCore = BitSource> {
    source: R,
}

impl RandomGenerator<BitSource> {
    /// Creates a deterministic generator from a 64-bit seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(BitSource::from_seed(seed))
    }

    /// Creates a generator seeded from operating-system entropy.
    pub fn from_entropy() -> Self {
        Self::new(BitSource::from_entropy())
    }

    /// Creates a generator reading directly from the operating-system CSPRNG.
    pub fn os() -> Self {
        Self::new(BitSource::os())
    }

    /// Returns the seed of the underlying source, if deterministic.
    pub fn seed(&self) -> Option<u64> {
        self.source.seed()
    }
}

impl Default for RandomGenerator<BitSource> {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl<R: RngCore> RandomGenerator<R> {
    /// Wraps an arbitrary bit source.
    pub fn new(source: R) -> Self {
        Self { source }
    }

    /// Borrows the underlying source.
    pub fn source(&self) -> &R {
        &self.source
    }

    /// Mutably borrows the underlying source.
    pub fn source_mut(&mut self) -> &mut R {
        &mut self.source
    }

    /// Consumes the generator, returning the source.
    pub fn into_inner(self) -> R {
        self.source
    }

    // ------------------------------------------------------------------
    // Core reduction
    // ------------------------------------------------------------------

    /// Uniform draw in `[0, range)` by rejection sampling.
    ///
    /// Words above the largest multiple of `range` that fits in 64 bits are
    /// rejected and redrawn; the rest reduce by modulo without bias.
    fn bounded_u64(&mut self, range: u64) -> u64 {
        debug_assert!(range > 0);
        let limit = u64::MAX - ((u64::MAX % range) + 1) % range;
        loop {
            let value = self.source.next_u64();
            if value <= limit {
                return value % range;
            }
        }
    }

    /// Uniform draw in `[min, max)`; `min == max` yields `min`.
    ///
    /// The caller guarantees `min <= max`.
    fn span_i64(&mut self, min: i64, max: i64) -> i64 {
        let range = max.wrapping_sub(min) as u64;
        if range == 0 {
            return min;
        }
        min.wrapping_add(self.bounded_u64(range) as i64)
    }

    // ------------------------------------------------------------------
    // Booleans and bytes
    // ------------------------------------------------------------------

    /// Fair coin flip.
    #[inline]
    pub fn next_bool(&mut self) -> bool {
        self.source.gen()
    }

    /// Uniform byte over the full `0..=255` range.
    #[inline]
    pub fn byte(&mut self) -> u8 {
        self.span_i64(0, 256) as u8
    }

    /// Uniform byte in `[min, max)`.
    ///
    /// # Errors
    ///
    /// Returns [`RandomError::InvalidRange`] when `max < min`.
    pub fn byte_range(&mut self, min: u8, max: u8) -> Result<u8> {
        if max < min {
            return Err(RandomError::range(min, max));
        }
        Ok(self.span_i64(min.into(), max.into()) as u8)
    }

    /// Uniform byte in `[0, max)`. A `max` of zero returns zero.
    pub fn byte_below(&mut self, max: u8) -> u8 {
        self.span_i64(0, max.into()) as u8
    }

    /// Buffer of `count` independent uniform bytes.
    ///
    /// # Errors
    ///
    /// Returns [`RandomError::InvalidArgument`] when `count` is zero.
    pub fn byte_array(&mut self, count: usize) -> Result<Vec<u8>> {
        if count < 1 {
            return Err(RandomError::invalid(format!(
                "cannot generate {} bytes, it is less than 1",
                count
            )));
        }
        let mut output = vec![0u8; count];
        self.source.fill_bytes(&mut output);
        Ok(output)
    }

    /// Fills a caller-owned buffer with uniform bytes. Empty buffers are a no-op.
    #[inline]
    pub fn fill_bytes(&mut self, buffer: &mut [u8]) {
        self.source.fill_bytes(buffer);
    }

    // ------------------------------------------------------------------
    // Narrow integers and characters
    // ------------------------------------------------------------------

    /// Uniform 16-bit integer over the full signed range.
    pub fn short(&mut self) -> i16 {
        self.span_i64(i16::MIN.into(), i64::from(i16::MAX) + 1) as i16
    }

    /// Uniform 16-bit integer in `[min, max)`.
    ///
    /// # Errors
    ///
    /// Returns [`RandomError::InvalidRange`] when `max < min`.
    pub fn short_range(&mut self, min: i16, max: i16) -> Result<i16> {
        if max < min {
            return Err(RandomError::range(min, max));
        }
        Ok(self.span_i64(min.into(), max.into()) as i16)
    }

    /// Uniform 16-bit integer in `[0, max)`.
    ///
    /// # Errors
    ///
    /// Returns [`RandomError::InvalidRange`] when `max` is negative.
    pub fn short_below(&mut self, max: i16) -> Result<i16> {
        self.short_range(0, max)
    }

    /// Uniform Unicode scalar value over the whole code space.
    pub fn char(&mut self) -> char {
        let index = self.span_i64(0, SCALAR_COUNT.into()) as u32;
        scalar_from_index(index)
    }

    /// Uniform Unicode scalar value in `[min, max)`.
    ///
    /// The surrogate block is skipped, so every scalar value inside the
    /// range is equally likely.
    ///
    /// # Errors
    ///
    /// Returns [`RandomError::InvalidRange`] when `max < min`.
    pub fn char_range(&mut self, min: char, max: char) -> Result<char> {
        if max < min {
            return Err(RandomError::range(u32::from(min), u32::from(max)));
        }
        let lo = index_from_scalar(min);
        let hi = index_from_scalar(max);
        let index = self.span_i64(lo.into(), hi.into()) as u32;
        Ok(scalar_from_index(index))
    }

    /// Uniform Unicode scalar value in `['\0', max)`.
    pub fn char_below(&mut self, max: char) -> char {
        let index = self.span_i64(0, index_from_scalar(max).into()) as u32;
        scalar_from_index(index)
    }

    // ------------------------------------------------------------------
    // 32-bit integers
    // ------------------------------------------------------------------

    /// Uniform 32-bit integer over the full signed range.
    pub fn int(&mut self) -> i32 {
        self.span_i64(i32::MIN.into(), i64::from(i32::MAX) + 1) as i32
    }

    /// Uniform 32-bit integer in the half-open range `[min, max)`.
    ///
    /// # Errors
    ///
    /// Returns [`RandomError::InvalidRange`] when `max < min`.
    pub fn int_range(&mut self, min: i32, max: i32) -> Result<i32> {
        if max < min {
            return Err(RandomError::range(min, max));
        }
        Ok(self.span_i64(min.into(), max.into()) as i32)
    }

    /// Uniform 32-bit integer in the closed range `[min, max]`.
    ///
    /// This is the overload dice rolls use: `int_inclusive(1, 6)` is a d6.
    ///
    /// # Errors
    ///
    /// Returns [`RandomError::InvalidRange`] when `max < min`.
    pub fn int_inclusive(&mut self, min: i32, max: i32) -> Result<i32> {
        if max < min {
            return Err(RandomError::range(min, max));
        }
        Ok(self.span_i64(min.into(), i64::from(max) + 1) as i32)
    }

    /// Uniform 32-bit integer in `[0, max]`.
    ///
    /// # Errors
    ///
    /// Returns [`RandomError::InvalidRange`] when `max` is negative.
    pub fn int_up_to(&mut self, max: i32) -> Result<i32> {
        self.int_inclusive(0, max)
    }

    // ------------------------------------------------------------------
    // 64-bit integers
    // ------------------------------------------------------------------

    /// Uniform 64-bit integer over the full signed range.
    #[inline]
    pub fn long(&mut self) -> i64 {
        self.source.next_u64() as i64
    }

    /// Uniform 64-bit unsigned integer.
    #[inline]
    pub fn ulong(&mut self) -> u64 {
        self.source.next_u64()
    }

    /// Uniform 64-bit integer in `[min, max)`.
    ///
    /// Ranges wider than `i64::MAX` (for example `[i64::MIN, i64::MAX)`) are
    /// handled in unsigned arithmetic, and the draw is rejection sampled so
    /// that ranges not dividing 2^64 stay uniform.
    ///
    /// # Errors
    ///
    /// Returns [`RandomError::InvalidRange`] when `max < min`.
    pub fn long_range(&mut self, min: i64, max: i64) -> Result<i64> {
        if max < min {
            return Err(RandomError::range(min, max));
        }
        Ok(self.span_i64(min, max))
    }

    /// Uniform 64-bit integer in `[0, max)`.
    ///
    /// # Errors
    ///
    /// Returns [`RandomError::InvalidRange`] when `max` is negative.
    pub fn long_below(&mut self, max: i64) -> Result<i64> {
        self.long_range(0, max)
    }

    // ------------------------------------------------------------------
    // Floating point
    // ------------------------------------------------------------------

    /// Uniform `f64` in `[0, 1)` with 53 bits of precision.
    #[inline]
    pub fn double(&mut self) -> f64 {
        self.source.gen()
    }

    /// Uniform `f64` in `[0, max)`.
    ///
    /// # Errors
    ///
    /// Returns [`RandomError::InvalidArgument`] when `max` is negative, NaN or
    /// infinite.
    pub fn double_below(&mut self, max: f64) -> Result<f64> {
        self.double_range(0.0, max)
    }

    /// Uniform `f64` in `[min, max)`.
    ///
    /// # Errors
    ///
    /// Returns [`RandomError::InvalidArgument`] when either bound is NaN or
    /// infinite, when `max < min`, or when `max - min` overflows.
    pub fn double_range(&mut self, min: f64, max: f64) -> Result<f64> {
        check_bounds(min, max)?;
        Ok(self.double() * (max - min) + min)
    }

    /// Uniform `f32` in `[0, 1)` with 24 bits of precision.
    #[inline]
    pub fn float(&mut self) -> f32 {
        self.source.gen()
    }

    /// Uniform `f32` in `[0, max)`.
    ///
    /// # Errors
    ///
    /// Returns [`RandomError::InvalidArgument`] when `max` is negative, NaN or
    /// infinite.
    pub fn float_below(&mut self, max: f32) -> Result<f32> {
        self.float_range(0.0, max)
    }

    /// Uniform `f32` in `[min, max)`.
    ///
    /// # Errors
    ///
    /// Returns [`RandomError::InvalidArgument`] when either bound is NaN or
    /// infinite, when `max < min`, or when `max - min` overflows.
    pub fn float_range(&mut self, min: f32, max: f32) -> Result<f32> {
        check_bounds(min, max)?;
        Ok(self.float() * (max - min) + min)
    }

    /// Value in the closed interval `[0, 1]` on a lattice of
    /// [`UNIT_INTERVAL_PRECISION`] steps.
    pub fn unit_interval(&mut self) -> f64 {
        let steps = i64::from(UNIT_INTERVAL_PRECISION);
        self.span_i64(0, steps + 1) as f64 / steps as f64
    }

    /// Heading angle in radians, in `[0, 2π)`.
    pub fn facing(&mut self) -> f32 {
        self.float() * std::f32::consts::TAU
    }
}

impl<R: RngCore> RngCore for RandomGenerator<R> {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.source.next_u32()
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.source.next_u64()
    }

    #[inline]
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.source.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> std::result::Result<(), rand::Error> {
        self.source.try_fill_bytes(dest)
    }
}

/// Validates a floating-point range: both bounds finite, `min <= max`, and
/// a width `max - min` that is itself finite.
pub(crate) fn check_bounds<T: Float + std::fmt::Display>(min: T, max: T) -> Result<()> {
    if !min.is_finite() || !max.is_finite() {
        return Err(RandomError::invalid(format!(
            "bounds must be finite, got [{}, {})",
            min, max
        )));
    }
    if max < min {
        return Err(RandomError::invalid(format!(
            "maximum value {} is less than minimum value {}",
            max, min
        )));
    }
    if !(max - min).is_finite() {
        return Err(RandomError::invalid(format!(
            "range [{}, {}) is wider than the largest finite value",
            min, max
        )));
    }
    Ok(())
}

/// Maps a scalar value onto a gap-free index (surrogates removed).
fn index_from_scalar(c: char) -> u32 {
    let code = u32::from(c);
    if code < SURROGATE_START {
        code
    } else {
        code - SURROGATE_LEN
    }
}

/// Inverse of [`index_from_scalar`].
fn scalar_from_index(index: u32) -> char {
    let code = if index < SURROGATE_START {
        index
    } else {
        index + SURROGATE_LEN
    };
    // Indices below SCALAR_COUNT never land on a surrogate or past U+10FFFF.
    char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_index_mapping_skips_surrogates() {
        assert_eq!(index_from_scalar('\u{D7FF}'), 0xD7FF);
        assert_eq!(index_from_scalar('\u{E000}'), 0xD800);
        assert_eq!(scalar_from_index(0xD800), '\u{E000}');
        assert_eq!(scalar_from_index(SCALAR_COUNT - 1), char::MAX);
    }

    #[test]
    fn test_check_bounds() {
        assert!(check_bounds(0.0_f64, 1.0).is_ok());
        assert!(check_bounds(1.0_f64, 1.0).is_ok());
        assert!(check_bounds(2.0_f64, 1.0).is_err());
        assert!(check_bounds(f64::NAN, 1.0).is_err());
        assert!(check_bounds(0.0_f32, f32::INFINITY).is_err());
        assert!(check_bounds(-f64::MAX, f64::MAX).is_err());
        assert!(check_bounds(-f32::MAX, f32::MAX).is_err());
        assert!(check_bounds(0.0_f64, f64::MAX).is_ok());
    }

    #[test]
    fn test_bounded_u64_stays_below_range() {
        let mut rng = RandomGenerator::seeded(3);
        for range in [1_u64, 2, 3, 7, 1 << 33, u64::MAX / 3 + 1, u64::MAX] {
            for _ in 0..200 {
                assert!(rng.bounded_u64(range) < range);
            }
        }
    }
}
