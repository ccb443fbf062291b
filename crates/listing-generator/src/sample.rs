//! Sampling primitives.
//!
//! Pure functions of the supplied bounds/pool and an injected RNG, with no
//! hidden state. Callers guarantee non-empty pools and ordered bounds;
//! catalog validation establishes both before generation starts.

use chrono::{DateTime, Utc};
use rand::seq::SliceRandom;
use rand::Rng;

/// Pick one element uniformly at random.
///
/// Panics on an empty pool.
pub fn pick_one<'a, T, R: Rng>(rng: &mut R, pool: &'a [T]) -> &'a T {
    &pool[rng.gen_range(0..pool.len())]
}

/// Random integer in `[low, high]` inclusive.
pub fn int_range<R: Rng>(rng: &mut R, low: i32, high: i32) -> i32 {
    rng.gen_range(low..=high)
}

/// Random float in `[low, high]`, rounded to `precision` decimal digits.
pub fn float_range<R: Rng>(rng: &mut R, low: f64, high: f64, precision: i32) -> f64 {
    round_to(rng.gen_range(low..=high), precision)
}

/// Perturb a `[longitude, latitude]` pair by a uniform offset in
/// `[-radius/2, +radius/2]` per axis, rounded to 4 decimals.
///
/// Keeps many listings in one city from sharing the exact same point.
pub fn jitter_coordinate<R: Rng>(rng: &mut R, point: [f64; 2], radius: f64) -> [f64; 2] {
    let [lng, lat] = point;
    [
        round_to(lng + (rng.gen::<f64>() - 0.5) * radius, 4),
        round_to(lat + (rng.gen::<f64>() - 0.5) * radius, 4),
    ]
}

/// Sample a unique subset of size uniform in `[min, max]` via a random
/// permutation of the pool (sampling without replacement).
///
/// `max` is clamped to the pool size, and `min` to the effective maximum.
pub fn pick_subset<T: Clone, R: Rng>(rng: &mut R, pool: &[T], min: usize, max: usize) -> Vec<T> {
    if pool.is_empty() || max == 0 {
        return vec![];
    }

    let effective_max = max.min(pool.len());
    let effective_min = min.min(effective_max);
    let length = rng.gen_range(effective_min..=effective_max);

    let mut shuffled = pool.to_vec();
    shuffled.shuffle(rng);
    shuffled.truncate(length);
    shuffled
}

/// Random instant in `[start, end]`, at second precision.
pub fn date_between<R: Rng>(
    rng: &mut R,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> DateTime<Utc> {
    let start_ts = start.timestamp();
    let end_ts = end.timestamp();

    if start_ts >= end_ts {
        return start;
    }

    let random_ts = rng.gen_range(start_ts..=end_ts);
    DateTime::from_timestamp(random_ts, 0).unwrap_or(start)
}

fn round_to(value: f64, digits: i32) -> f64 {
    let factor = 10f64.powi(digits);
    (value * factor).round() / factor
}
