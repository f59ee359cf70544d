//! Fixed-range, equal-width histogram with underflow/overflow counters and
//! nearest-rank percentiles over every value ever filled.
//!
//! Bin `i` covers `[low + i*w, low + (i+1)*w)` with `w = (high - low) / bins`.
//! The bin index is computed as `bins * (v - low) / (high - low)` and then
//! **truncated toward zero**, so values less than one bin width below `low`
//! still land in bin 0. Only a quotient of -1 or less counts as underflow.

use crate::core::{config::Config, constants::PERCENTILE_COUNT, error::HistogramError};

/// Where a single value ends up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Slot {
    Underflow,
    Bin(usize),
    Overflow,
}

#[derive(Debug, Clone)]
pub struct Histogram {
    title: String,
    low: f64,
    high: f64,
    bins: Vec<u64>,
    underflow: u64,
    overflow: u64,
    // every submitted value, in or out of range
    samples: Vec<f64>,
    sorted: bool,
}

/// Shared by [`Histogram::new`] and the config builder.
pub(crate) fn validate_geometry(bins: usize, low: f64, high: f64) -> Result<(), HistogramError> {
    if bins == 0 {
        return Err(HistogramError::InvalidBinCount(bins));
    }
    if !low.is_finite() || !high.is_finite() || low >= high {
        return Err(HistogramError::InvalidRange { low, high });
    }
    Ok(())
}

impl Histogram {
    /// All bins zero, no under/overflow, no samples.
    ///
    /// # Errors
    /// `bins == 0` or a range that is empty, inverted or non-finite.
    pub fn new(
        title: impl Into<String>,
        bins: usize,
        low: f64,
        high: f64,
    ) -> Result<Self, HistogramError> {
        validate_geometry(bins, low, high)?;
        Ok(Self {
            title: title.into(),
            low,
            high,
            bins: vec![0; bins],
            underflow: 0,
            overflow: 0,
            samples: Vec::new(),
            sorted: true,
        })
    }

    /// # Errors
    /// Same as [`Histogram::new`]; a built [`Config`] has already passed them.
    pub fn from_config(cfg: &Config) -> Result<Self, HistogramError> {
        Self::new(cfg.title.clone(), cfg.bins, cfg.low, cfg.high)
    }

    /// Classify `v` without recording it.
    #[must_use]
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    pub fn slot(&self, v: f64) -> Slot {
        let n = self.bins.len();
        // `as` truncates toward zero and saturates, NaN becomes 0
        let idx = (n as f64 * (v - self.low) / (self.high - self.low)) as i64;
        match usize::try_from(idx) {
            Err(_) => Slot::Underflow,
            Ok(i) if i >= n => Slot::Overflow,
            Ok(i) => Slot::Bin(i),
        }
    }

    /// Accumulate values in order. Repeated calls are cumulative.
    pub fn fill<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = f64>,
    {
        for v in values {
            self.samples.push(v);
            self.sorted = false;
            match self.slot(v) {
                Slot::Underflow => self.underflow += 1,
                Slot::Overflow => self.overflow += 1,
                Slot::Bin(i) => self.bins[i] += 1,
            }
        }
    }

    /// 10th, 20th, ... 100th nearest-rank percentiles of **all** samples,
    /// under/overflow included. Element `floor(n*k/10) - 1` of the sorted
    /// samples, the rank clamped at 0 when `n < 10`.
    ///
    /// Sorts the retained samples in place; the sort is skipped if nothing
    /// was filled since the last call.
    ///
    /// # Errors
    /// [`HistogramError::InsufficientSamples`] if nothing was ever filled.
    pub fn percentiles(&mut self) -> Result<[f64; PERCENTILE_COUNT], HistogramError> {
        let n = self.samples.len();
        if n == 0 {
            return Err(HistogramError::InsufficientSamples);
        }
        if !self.sorted {
            self.samples.sort_by(f64::total_cmp);
            self.sorted = true;
        }

        let mut out = [0.0; PERCENTILE_COUNT];
        for (i, p) in out.iter_mut().enumerate() {
            let rank = (n * (i + 1) / PERCENTILE_COUNT).saturating_sub(1);
            *p = self.samples[rank];
        }
        Ok(out)
    }

    /// Midpoint of bin `index`. Meaningful for `index < bin_count()` only.
    #[inline]
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn bin_center(&self, index: usize) -> f64 {
        (index as f64 + 0.5) * self.bin_width() + self.low
    }

    #[inline]
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn bin_width(&self) -> f64 {
        (self.high - self.low) / self.bins.len() as f64
    }

    /// In-range fills only; under/overflow are not entries.
    #[must_use]
    pub fn total_entries(&self) -> u64 {
        self.bins.iter().sum()
    }

    #[inline]
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }
    #[inline]
    #[must_use]
    pub fn bins(&self) -> &[u64] {
        &self.bins
    }
    #[inline]
    #[must_use]
    pub fn bin_count(&self) -> usize {
        self.bins.len()
    }
    #[inline]
    #[must_use]
    pub fn range(&self) -> (f64, f64) {
        (self.low, self.high)
    }
    #[inline]
    #[must_use]
    pub fn underflow(&self) -> u64 {
        self.underflow
    }
    #[inline]
    #[must_use]
    pub fn overflow(&self) -> u64 {
        self.overflow
    }
    #[inline]
    #[must_use]
    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }
}
