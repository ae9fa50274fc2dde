/// Distribution helpers shared by every content provider.
///
/// All draws go through the explicit RNG handle owned by the current
/// `generate()` call; nothing here touches process-global state.
use rand::distributions::WeightedIndex;
use rand::prelude::Distribution;
use rand::rngs::StdRng;
use rand::Rng;

use crate::core::generator::GeneratorError;

/// Draw one payload with probability proportional to its weight.
///
/// Weights need not sum to 1. An empty list, a negative weight, or an
/// all-zero total is a `WeightedChoice` error rather than a silent
/// fallback — content code that derives weights from running totals is
/// expected to guard the zero case itself.
pub fn weighted_choice<T>(
    rng: &mut StdRng,
    mut entries: Vec<(f64, T)>,
) -> Result<T, GeneratorError> {
    let weights: Vec<f64> = entries.iter().map(|(w, _)| *w).collect();
    let dist = WeightedIndex::new(&weights).map_err(|_| GeneratorError::WeightedChoice)?;
    let (_, payload) = entries.swap_remove(dist.sample(rng));
    Ok(payload)
}

/// Truncated normal on `[min, max]`, rounded to the nearest integer.
///
/// Box–Muller with rejection; the mean sits at the midpoint with the
/// range spanning six standard deviations, so rejection is rare. After
/// a bounded number of rejected draws the midpoint is returned.
pub fn trunc_normal(rng: &mut StdRng, min: f64, max: f64) -> i64 {
    if max <= min {
        return min.round() as i64;
    }
    let mean = (min + max) / 2.0;
    let sd = (max - min) / 6.0;
    for _ in 0..64 {
        let u1 = rng.gen::<f64>().max(f64::MIN_POSITIVE);
        let u2 = rng.gen::<f64>();
        let z = (-2.0 * u1.ln()).sqrt() * (std::f64::consts::TAU * u2).cos();
        let x = mean + z * sd;
        if (min..=max).contains(&x) {
            return x.round() as i64;
        }
    }
    mean.round() as i64
}

/// Integer uniform on the inclusive range `[min, max]`.
pub fn uniform(rng: &mut StdRng, min: i64, max: i64) -> i64 {
    if max <= min {
        return min;
    }
    rng.gen_range(min..=max)
}

/// Uniform choice from a slice. Panics on an empty slice; the content
/// tables in this crate are non-empty constants.
pub fn pick<'a, T>(rng: &mut StdRng, items: &'a [T]) -> &'a T {
    &items[rng.gen_range(0..items.len())]
}
