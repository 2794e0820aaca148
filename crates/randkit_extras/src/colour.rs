//! Hex colour strings.

use rand::RngCore;
use randkit_core::{RandomError, RandomGenerator};

use crate::error::Result;

/// Random `#RRGGBB` string with upper-case hex digits.
pub fn rgb_colour_string<R: RngCore>(rng: &mut RandomGenerator<R>) -> String {
    let [r, g, b] = [rng.byte(), rng.byte(), rng.byte()];
    format!("#{:02X}{:02X}{:02X}", r, g, b)
}

/// Random `#RRGGBBAA` string with upper-case hex digits.
pub fn rgba_colour_string<R: RngCore>(rng: &mut RandomGenerator<R>) -> String {
    let [r, g, b, a] = [rng.byte(), rng.byte(), rng.byte(), rng.byte()];
    format!("#{:02X}{:02X}{:02X}{:02X}", r, g, b, a)
}

/// `#RRGGBB` string near a base colour.
///
/// Each channel is moved by a uniform offset of at most `variance / 2` and
/// clamped to `[0, 1]` before scaling to a byte.
///
/// # Errors
///
/// Returns `InvalidArgument` when a channel or `variance` lies outside
/// `[0, 1]` (NaN included).
///
/// # Examples
/// ```
/// use randkit_core::RandomGenerator;
/// use randkit_extras::colour::colour_string;
///
/// let mut rng = RandomGenerator::seeded(1);
/// assert_eq!(colour_string(&mut rng, 1.0, 0.0, 1.0, 0.0).unwrap(), "#FF00FF");
/// ```
pub fn colour_string<R: RngCore>(
    rng: &mut RandomGenerator<R>,
    red: f32,
    green: f32,
    blue: f32,
    variance: f32,
) -> Result<String> {
    let unit = 0.0..=1.0;
    if ![red, green, blue].iter().all(|c| unit.contains(c)) {
        return Err(RandomError::InvalidArgument(format!(
            "colour channels must be within [0, 1], got ({}, {}, {})",
            red, green, blue
        ))
        .into());
    }
    if !unit.contains(&variance) {
        return Err(RandomError::InvalidArgument(format!(
            "variance must be within [0, 1], got {}",
            variance
        ))
        .into());
    }

    let delta = variance / 2.0;
    let mut jitter = |channel: f32| -> Result<u8> {
        let shifted = (channel + rng.float_range(-delta, delta)?).clamp(0.0, 1.0);
        Ok((shifted * 255.0) as u8)
    };
    let (r, g, b) = (jitter(red)?, jitter(green)?, jitter(blue)?);
    Ok(format!("#{:02X}{:02X}{:02X}", r, g, b))
}
