//! Pure transforms over pre-binned histogram data.

/// Scale bin contents so the average bin value is 1 when the total is
/// nonzero: `scale = nbins / sum`. A zero total leaves the contents
/// unchanged (scale 1.0).
///
/// Returns a new vector and never mutates `counts`; callers that need
/// the unscaled original simply keep the slice they passed in.
pub fn normalize_bins(counts: &[f64]) -> Vec<f64> {
    let total: f64 = counts.iter().sum();
    let scale = if total > 0.0 { counts.len() as f64 / total } else { 1.0 };
    counts.iter().map(|&c| c * scale).collect()
}

/// Element-wise guarded division of two equal-length series. A zero
/// denominator yields 0.0 for that element, never infinity or NaN.
/// Inputs are expected to be the same length; extra trailing elements
/// in either series are ignored.
pub fn ratio_series(numerator: &[f64], denominator: &[f64]) -> Vec<f64> {
    numerator
        .iter()
        .zip(denominator)
        .map(|(&n, &d)| if d != 0.0 { n / d } else { 0.0 })
        .collect()
}

/// Count values into `nbins` uniform bins over `[lo, hi)`, returning
/// `(bin_center, count)` pairs. Values outside the range are dropped.
pub fn bin_counts(values: &[f64], nbins: usize, lo: f64, hi: f64) -> Vec<(f64, u64)> {
    if nbins == 0 || hi <= lo {
        return Vec::new();
    }
    let width = (hi - lo) / nbins as f64;
    let mut counts = vec![0u64; nbins];
    for &value in values {
        if value < lo || value >= hi {
            continue;
        }
        let bin = ((value - lo) / width) as usize;
        counts[bin.min(nbins - 1)] += 1;
    }
    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| (lo + (i as f64 + 0.5) * width, count))
        .collect()
}

/// Symmetric axis limit for a coordinate series:
/// `1.5 × max(|min|, |max|)`, or 1.0 for an empty series.
pub fn axis_limit(values: &[f64]) -> f64 {
    let mut extreme = f64::NEG_INFINITY;
    for &value in values {
        extreme = extreme.max(value.abs());
    }
    if extreme.is_finite() && extreme > 0.0 {
        1.5 * extreme
    } else {
        1.0
    }
}
