// ---------------------------------------------------------------------------
// Fixed-width histogram binning
// ---------------------------------------------------------------------------

/// Bin counts over a fixed value range.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    /// Lower edge of the first bin.
    pub start: f64,
    /// Width of every bin.
    pub bin_width: f64,
    /// One count per bin.
    pub counts: Vec<u64>,
}

impl Histogram {
    /// Bucket `values` into `n_bins` equal-width bins spanning `range`.
    ///
    /// Values outside the range are clamped into the edge bins; non-finite
    /// values are skipped. A collapsed range (min == max) falls back to a
    /// unit bin width, so every value lands in the first bin.
    pub fn compute(values: &[f64], n_bins: usize, range: (f64, f64)) -> Histogram {
        let n_bins = n_bins.max(1);
        let (min, max) = range;
        let bin_width = if max > min { (max - min) / n_bins as f64 } else { 1.0 };

        let mut counts = vec![0u64; n_bins];
        for &v in values {
            if !v.is_finite() {
                continue;
            }
            let idx = ((v - min) / bin_width).floor();
            let idx = (idx.max(0.0) as usize).min(n_bins - 1);
            counts[idx] += 1;
        }

        Histogram {
            start: min,
            bin_width,
            counts,
        }
    }

    /// Number of bins.
    pub fn n_bins(&self) -> usize {
        self.counts.len()
    }

    /// Total number of binned values.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Center of the i-th bin, for bar placement.
    pub fn bin_center(&self, i: usize) -> f64 {
        self.start + (i as f64 + 0.5) * self.bin_width
    }
}

/// Min and max over the finite values, if any.
pub fn value_range(values: impl IntoIterator<Item = f64>) -> Option<(f64, f64)> {
    let mut range: Option<(f64, f64)> = None;
    for v in values {
        if !v.is_finite() {
            continue;
        }
        range = Some(match range {
            None => (v, v),
            Some((min, max)) => (min.min(v), max.max(v)),
        });
    }
    range
}
