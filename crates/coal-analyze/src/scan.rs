//! Assembly of yield-ratio series across a parameter scan.
//!
//! A scan runs the coalescence executable once per baryon-preference
//! value `r` and leaves one QA file per configuration. Each file holds a
//! seven-bin `hRatio` histogram; this module turns the per-file bins
//! into per-ratio series over `r` for plotting.

use serde::{Deserialize, Serialize};

/// Published AMPT reference values for the seven ratio bins, drawn as
/// dashed guide lines on the scan figure.
pub const AMPT_REFERENCE: [f64; 7] = [
    0.220177,
    1.0 / 1.74087,
    0.272094,
    0.431481,
    0.23647,
    0.348683,
    0.359315,
];

/// The `hRatio` bins read from one configuration's QA file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanPoint {
    /// Baryon-preference parameter of the configuration.
    pub r: f64,
    /// Ratio values in `RATIO_BIN_LABELS` order.
    pub ratios: Vec<f64>,
}

/// Per-ratio series over the scanned `r` values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScanSeries {
    pub r_values: Vec<f64>,
    /// `series[ratio][point]`, parallel to `r_values`.
    pub series: Vec<Vec<f64>>,
}

impl ScanSeries {
    /// Transpose scan points into per-ratio series, sorted by `r`.
    ///
    /// Points with fewer bins than expected contribute 0.0 for the
    /// missing ratios (absent bins are a reportable condition at read
    /// time, not a reason to abort the plot).
    pub fn from_points(mut points: Vec<ScanPoint>, ratio_count: usize) -> Self {
        points.sort_by(|a, b| a.r.total_cmp(&b.r));
        let r_values: Vec<f64> = points.iter().map(|p| p.r).collect();
        let series = (0..ratio_count)
            .map(|ratio| {
                points
                    .iter()
                    .map(|p| p.ratios.get(ratio).copied().unwrap_or(0.0))
                    .collect()
            })
            .collect();
        Self { r_values, series }
    }

    pub fn is_empty(&self) -> bool {
        self.r_values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn points_are_sorted_and_transposed() {
        let points = vec![
            ScanPoint { r: 1.5, ratios: vec![0.3, 0.6] },
            ScanPoint { r: 0.5, ratios: vec![0.1, 0.4] },
        ];
        let series = ScanSeries::from_points(points, 2);
        assert_eq!(series.r_values, vec![0.5, 1.5]);
        assert_eq!(series.series, vec![vec![0.1, 0.3], vec![0.4, 0.6]]);
    }

    #[test]
    fn short_points_pad_with_zero() {
        let points = vec![ScanPoint { r: 1.0, ratios: vec![0.2] }];
        let series = ScanSeries::from_points(points, 3);
        assert_eq!(series.series, vec![vec![0.2], vec![0.0], vec![0.0]]);
    }
}
