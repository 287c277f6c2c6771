//! Count → font-size interpolation.
//!
//! Each selected word gets an integer size class by linear interpolation
//! between the minimum and maximum counts observed in the selection
//! itself, not the full mapping.

use crate::types::RankedEntry;

/// Linear count-to-size mapping over one selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontScale {
    min_count: u32,
    max_count: u32,
    min_size: u32,
    max_size: u32,
}

impl FontScale {
    /// Fit a scale to the counts of `entries`, mapping onto
    /// `min_size..=max_size`.
    ///
    /// An empty selection fits a degenerate scale; the renderer never
    /// asks it for a size class.
    pub fn fit(entries: &[RankedEntry], min_size: u32, max_size: u32) -> Self {
        let min_count = entries.iter().map(|e| e.count).min().unwrap_or(0);
        let max_count = entries.iter().map(|e| e.count).max().unwrap_or(0);
        Self {
            min_count,
            max_count,
            min_size,
            max_size,
        }
    }

    /// Size class for a count within the fitted range:
    /// `min_size + floor(ratio * (max_size - min_size))` where `ratio`
    /// interpolates the count between the observed minimum and maximum.
    ///
    /// When every selected word shares one frequency the range is empty;
    /// the ratio is defined as 0 and every word renders at `min_size`.
    pub fn size_class(&self, count: u32) -> u32 {
        let span = self.max_count - self.min_count;
        if span == 0 {
            return self.min_size;
        }
        let ratio = f64::from(count - self.min_count) / f64::from(span);
        self.min_size + (ratio * f64::from(self.max_size - self.min_size)) as u32
    }

    /// Smallest count in the fitted selection.
    pub fn min_count(&self) -> u32 {
        self.min_count
    }

    /// Largest count in the fitted selection.
    pub fn max_count(&self) -> u32 {
        self.max_count
    }
}
