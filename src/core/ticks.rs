//! "Nice" tick generation for linear axes.
//!
//! Steps are a power of ten times 1, 2 or 5, and every tick is an integer
//! multiple of the step that lies inside the domain.

const E10: f64 = 7.071_067_811_865_475_5; // sqrt(50)
const E5: f64 = 3.162_277_660_168_379_5; // sqrt(10)
const E2: f64 = std::f64::consts::SQRT_2;

/// Upper bound applied to the requested tick count.
pub const MAX_TICK_COUNT: usize = 1_000;

/// Most ticks `nice_ticks` can return. Rounding the step to 2 × 10^k may
/// shrink it to `2 / sqrt(10)` of the raw step, so the output overshoots the
/// capped request by up to that factor.
pub const MAX_TICK_OUTPUT: usize = 1_582;

#[derive(Debug, Clone, Copy, PartialEq)]
struct TickSpec {
    first: f64,
    last: f64,
    increment: f64,
}

/// Rounds half-way cases towards positive infinity.
fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

fn tick_spec(start: f64, stop: f64, count: f64) -> TickSpec {
    let step = (stop - start) / count.max(0.0);
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };

    let spec = if power < 0.0 {
        // Negative powers divide by an integer inverse to keep decimals exact.
        let inverse = 10f64.powf(-power) / factor;
        let mut first = round_half_up(start * inverse);
        let mut last = round_half_up(stop * inverse);
        if first / inverse < start {
            first += 1.0;
        }
        if last / inverse > stop {
            last -= 1.0;
        }
        TickSpec {
            first,
            last,
            increment: -inverse,
        }
    } else {
        let increment = 10f64.powf(power) * factor;
        let mut first = round_half_up(start / increment);
        let mut last = round_half_up(stop / increment);
        if first * increment < start {
            first += 1.0;
        }
        if last * increment > stop {
            last -= 1.0;
        }
        TickSpec {
            first,
            last,
            increment,
        }
    };

    if spec.last < spec.first && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }
    spec
}

/// Returns roughly `count` evenly spaced round values covering
/// `[start, stop]`, ordered like the domain.
///
/// Degenerate requests still produce a bounded, non-empty sequence for any
/// finite domain: a zero-width domain yields `[start]`, a non-finite or
/// sub-unit count is treated as one tick interval, and a count above
/// [`MAX_TICK_COUNT`] is capped. The result never exceeds
/// [`MAX_TICK_OUTPUT`] values.
#[must_use]
pub fn nice_ticks(start: f64, stop: f64, count: f64) -> Vec<f64> {
    if !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }

    let count = if count.is_finite() && count >= 1.0 {
        count.min(MAX_TICK_COUNT as f64)
    } else {
        1.0
    };
    let reverse = stop < start;
    let (low, high) = if reverse { (stop, start) } else { (start, stop) };

    let spec = tick_spec(low, high, count);
    let mut ticks: Vec<f64> = if spec.last >= spec.first && spec.increment.is_finite() {
        let len = (spec.last - spec.first + 1.0) as usize;
        (0..len)
            .map(|index| {
                let position = spec.first + index as f64;
                if spec.increment < 0.0 {
                    position / -spec.increment
                } else {
                    position * spec.increment
                }
            })
            .collect()
    } else {
        vec![low, high]
    };

    if reverse {
        ticks.reverse();
    }
    ticks
}
