//! Random date-times.
//!
//! Values are `chrono` naive date-times: callers attach whatever time zone
//! their domain needs.

use chrono::{NaiveDateTime, NaiveTime, TimeDelta};
use rand::RngCore;
use randkit_core::{RandomError, RandomGenerator};

use crate::error::Result;

const SECONDS_PER_DAY: i32 = 86_400;

/// Date-time anywhere in chrono's supported range.
pub fn date_time<R: RngCore>(rng: &mut RandomGenerator<R>) -> Result<NaiveDateTime> {
    date_time_between(rng, NaiveDateTime::MIN, NaiveDateTime::MAX)
}

/// Date-time in `[lo, hi)`; the bounds may be given in either order.
///
/// Spans short enough to count in nanoseconds (about 292 years) are drawn
/// at nanosecond resolution, longer spans at whole seconds. Equal bounds
/// return that instant.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use randkit_core::RandomGenerator;
/// use randkit_extras::time::date_time_between;
///
/// let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
/// let end = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap().and_hms_opt(0, 0, 0).unwrap();
///
/// let mut rng = RandomGenerator::seeded(3);
/// let t = date_time_between(&mut rng, end, start).unwrap();
/// assert!(t >= start && t < end);
/// ```
pub fn date_time_between<R: RngCore>(
    rng: &mut RandomGenerator<R>,
    a: NaiveDateTime,
    b: NaiveDateTime,
) -> Result<NaiveDateTime> {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    let span = hi - lo;

    let offset = match span.num_nanoseconds() {
        Some(nanos) if nanos > 0 => TimeDelta::nanoseconds(rng.long_range(0, nanos)?),
        _ => TimeDelta::seconds(rng.long_range(0, span.num_seconds())?),
    };
    Ok(lo + offset)
}

/// Time of day with whole-second resolution.
pub fn time_of_day<R: RngCore>(rng: &mut RandomGenerator<R>) -> Result<NaiveTime> {
    let secs = rng.int_range(0, SECONDS_PER_DAY)?;
    NaiveTime::from_num_seconds_from_midnight_opt(secs as u32, 0).ok_or_else(|| {
        RandomError::InvalidArgument(format!("{} seconds is past midnight", secs)).into()
    })
}
