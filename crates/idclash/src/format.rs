use crate::{MathResult, SimResult};
use core::time::Duration;
use num_bigfloat::BigFloat;

/// Renders the combined mathematical and simulated results as a multi-line
/// text report.
///
/// Pure function of its inputs: no side effects, nothing is mutated. The
/// closing line exposes the approximation error as the signed difference
/// between the empirical and theoretical probability, computed by
/// extended-precision subtraction.
pub fn format_report(
    format: &str,
    length: i64,
    rate: i64,
    math: &MathResult,
    sim: &SimResult,
) -> String {
    let mut report = String::new();

    report.push_str(&format!("Collision Analysis: {format} length {length}\n\n"));

    report.push_str("Mathematical Results:\n");
    report.push_str(&format!(
        "  - Total ID Space: {}\n",
        group_thousands(math.total_space)
    ));
    report.push_str(&format!("  - Generation Rate: {rate}/sec\n"));
    report.push_str(&format!(
        "  - Collision Probability (1 sec): {}\n",
        format_probability(&math.probability)
    ));
    report.push_str(&format!(
        "  - Expected Collisions (1 sec): {}\n\n",
        math.expected_collisions
    ));

    report.push_str("  Time to Collision:\n");
    report.push_str(&format!(
        "  - 50% probability: {}\n",
        format_duration(math.time_to_collision.p50)
    ));
    report.push_str(&format!(
        "  - 1% probability: {}\n",
        format_duration(math.time_to_collision.p01)
    ));
    report.push_str(&format!(
        "  - 0.1% probability: {}\n\n",
        format_duration(math.time_to_collision.p001)
    ));

    report.push_str("Simulation Results:\n");
    report.push_str(&format!("  - Collisions Found: {}\n", sim.collisions));
    report.push_str(&format!(
        "  - Measured Probability: {} ({} in 10,000)\n",
        format_percent(sim.probability * 100.0),
        (sim.probability * 10_000.0) as i64
    ));

    let difference = BigFloat::from(sim.probability) - math.probability;
    report.push_str(&format!(
        "  - Difference: {}\n",
        format_probability(&difference)
    ));

    report
}

/// Formats an extended-precision probability as a percentage with a
/// `1 in N` rendering of the odds.
fn format_probability(probability: &BigFloat) -> String {
    format_percent((*probability * BigFloat::from(100i64)).to_f64())
}

fn format_percent(percent: f64) -> String {
    if percent >= 0.0001 {
        format!("{percent:.4}% (1 in {})", (100.0 / percent) as i64)
    } else {
        format!("{percent:.4}% (<1 in 10,000)")
    }
}

/// Scales a duration to the largest sensible unit, one decimal place
/// throughout: seconds below a minute, then minutes, hours, days, and years
/// from 365 days up.
fn format_duration(duration: Duration) -> String {
    const MINUTE: f64 = 60.0;
    const HOUR: f64 = 60.0 * MINUTE;
    const DAY: f64 = 24.0 * HOUR;
    const YEAR: f64 = 365.0 * DAY;

    let secs = duration.as_secs_f64();
    if secs < MINUTE {
        format!("{secs:.1} seconds")
    } else if secs < HOUR {
        format!("{:.1} minutes", secs / MINUTE)
    } else if secs < DAY {
        format!("{:.1} hours", secs / HOUR)
    } else if secs < YEAR {
        format!("{:.1} days", secs / DAY)
    } else {
        format!("{:.1} years", secs / YEAR)
    }
}

/// Inserts thousands separators into an unsigned decimal rendering.
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}
