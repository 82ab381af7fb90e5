use crate::{Error, Result};
use core::time::Duration;
use num_bigfloat::{BigFloat, ONE, TWO};

/// Closed-form collision analysis of one generation scenario.
///
/// All fields are plain values created fresh per request; nothing is shared
/// or mutated after construction.
#[derive(Clone, Copy, Debug)]
pub struct MathResult {
    /// Size of the identifier space, saturated to `u64::MAX` when the true
    /// space exceeds 64 bits.
    pub total_space: u64,
    /// Number of identifiers drawn (the effective per-second rate).
    pub total_ids: i64,
    /// Probability that at least two of the drawn identifiers coincide,
    /// in `[0, 1]`.
    pub probability: BigFloat,
    /// `floor(probability * total_ids)`.
    pub expected_collisions: i64,
    /// Elapsed time until collision probability reaches fixed thresholds.
    pub time_to_collision: TimeResult,
}

/// Time elapsed until collision probability reaches 50%, 1% and 0.1%.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeResult {
    pub p50: Duration,
    pub p01: Duration,
    pub p001: Duration,
}

/// Computes the birthday-paradox collision probability for `total_ids` draws
/// from a space of `total_space` distinct values:
///
/// ```text
/// P(collision) ≈ 1 − e^(−n² / (2N))
/// ```
///
/// Every intermediate (`n²`, `2N`, the quotient, the exponential and the
/// final subtraction) is carried in extended-precision arithmetic. With `N`
/// as large as `2^63`, fixed-width floats collapse the result to an exact
/// `0` or `1` for legitimate inputs.
///
/// Fails with [`Error::Calculation`] unless `total_ids > 0` and
/// `total_space > 0`.
///
/// # Example
///
/// ```
/// use idclash::collision_probability;
///
/// let result = collision_probability(1_000, 1 << 60).unwrap();
/// assert!(result.probability.to_f64() > 0.0);
/// assert!(result.probability.to_f64() < 1e-10);
/// ```
pub fn collision_probability(total_ids: i64, total_space: u64) -> Result<MathResult> {
    if total_ids <= 0 || total_space == 0 {
        return Err(Error::Calculation {
            reason: format!("invalid inputs: n={total_ids}, space={total_space}"),
        });
    }

    let n = BigFloat::from(total_ids);
    let space = BigFloat::from(total_space);

    let exponent = (n * n) / (TWO * space);
    // e^(-x) falls below the smallest representable decimal well before
    // x reaches 400; at that point the collision is certain at any display
    // precision, so skip the exponential.
    let probability = if exponent > BigFloat::from(400i64) {
        ONE
    } else {
        let survival = (-exponent).exp();
        if survival.is_nan() {
            ONE
        } else {
            ONE - survival
        }
    };

    let expected_collisions = (probability * n).floor().to_f64() as i64;

    Ok(MathResult {
        total_space,
        total_ids,
        probability,
        expected_collisions,
        time_to_collision: time_to_collision(total_space, 1),
    })
}

/// Inverts the birthday-paradox model to the elapsed time `T` at which the
/// collision probability reaches each of the 50%, 1% and 0.1% thresholds:
///
/// ```text
/// T = sqrt(−2N·ln(1−p)) / rate
/// ```
///
/// [`collision_probability`] always invokes this with `rate = 1`: the
/// reported durations characterize time-to-collision when generating one
/// identifier per second, independent of the configured throughput. That is
/// the contract being reproduced; callers wanting the configured rate can
/// call this directly.
///
/// # Panics
///
/// Panics if `rate <= 0`, which would produce a non-finite or negative
/// duration.
pub fn time_to_collision(total_space: u64, rate: i64) -> TimeResult {
    let space = total_space as f64;
    let rate = rate as f64;

    let seconds_until = |target: f64| (-2.0 * space * (1.0 - target).ln()).sqrt() / rate;

    TimeResult {
        p50: Duration::from_secs_f64(seconds_until(0.50)),
        p01: Duration::from_secs_f64(seconds_until(0.01)),
        p001: Duration::from_secs_f64(seconds_until(0.001)),
    }
}
