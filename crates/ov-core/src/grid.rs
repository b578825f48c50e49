//! Shared time grid and contiguous sample ranges over it

use serde::{Deserialize, Serialize};

/// A contiguous, half-open index range `[start, end)` over a [`TimeGrid`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleRange {
    pub start: usize,
    pub end: usize,
}

impl SampleRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self {
            start,
            end: end.max(start),
        }
    }

    /// Number of samples covered
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn contains(&self, index: usize) -> bool {
        index >= self.start && index < self.end
    }

    /// Restrict the range to a grid of `len` samples
    pub fn clamp_to(self, len: usize) -> Self {
        Self::new(self.start.min(len), self.end.min(len))
    }

    /// Split into consecutive sections of `size` samples; the trailing
    /// remainder is dropped when it is shorter than `size`.
    pub fn sections(&self, size: usize) -> Vec<SampleRange> {
        if size == 0 {
            return Vec::new();
        }
        (self.start..self.end)
            .step_by(size)
            .filter(|&s| s + size <= self.end)
            .map(|s| SampleRange::new(s, s + size))
            .collect()
    }
}

/// An ordered, immutable set of sample instants
///
/// Built once at startup and shared read-only by every example.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeGrid {
    times: Vec<f64>,
    start: f64,
    end: f64,
}

impl TimeGrid {
    /// `count` evenly spaced points over `[start, end]`, both ends included
    pub fn linspace(start: f64, end: f64, count: usize) -> Self {
        let times = match count {
            0 => Vec::new(),
            1 => vec![start],
            _ => {
                let step = (end - start) / (count - 1) as f64;
                let mut times: Vec<f64> = (0..count).map(|i| start + i as f64 * step).collect();
                // Pin the last sample so spans ending at `end` always include it
                times[count - 1] = end;
                times
            }
        };
        Self {
            times,
            start,
            end,
        }
    }

    /// `count` evenly spaced points over `[start, end)`
    pub fn linspace_half_open(start: f64, end: f64, count: usize) -> Self {
        let step = if count == 0 { 0.0 } else { (end - start) / count as f64 };
        Self {
            times: (0..count).map(|i| start + i as f64 * step).collect(),
            start,
            end,
        }
    }

    /// Same domain and sample count, with the end point excluded
    pub fn half_open(&self) -> Self {
        Self::linspace_half_open(self.start, self.end, self.times.len())
    }

    pub fn times(&self) -> &[f64] {
        &self.times
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn end(&self) -> f64 {
        self.end
    }

    /// Length of the domain (`end - start`)
    pub fn length(&self) -> f64 {
        self.end - self.start
    }

    /// Every sample on the grid
    pub fn full_range(&self) -> SampleRange {
        SampleRange::new(0, self.times.len())
    }

    /// Samples with `lo <= t <= hi`
    ///
    /// The grid is sorted, so the selection is always contiguous.
    pub fn span(&self, lo: f64, hi: f64) -> SampleRange {
        let start = self.times.partition_point(|&t| t < lo);
        let end = self.times.partition_point(|&t| t <= hi);
        SampleRange::new(start, end)
    }

    /// Time values covered by `range`
    pub fn slice(&self, range: SampleRange) -> &[f64] {
        let range = range.clamp_to(self.len());
        &self.times[range.start..range.end]
    }

    /// First and last instant covered by `range`, if it holds any sample
    pub fn bounds(&self, range: SampleRange) -> Option<(f64, f64)> {
        let slice = self.slice(range);
        Some((*slice.first()?, *slice.last()?))
    }
}

impl Default for TimeGrid {
    fn default() -> Self {
        Self::linspace(0.0, 1.0, 1000)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linspace_includes_both_ends() {
        let grid = TimeGrid::linspace(0.0, 1.0, 1000);
        assert_eq!(grid.len(), 1000);
        assert_eq!(grid.times()[0], 0.0);
        assert_eq!(grid.times()[999], 1.0);
        assert!((grid.times()[1] - 1.0 / 999.0).abs() < 1e-15);
    }

    #[test]
    fn test_half_open_excludes_end() {
        let grid = TimeGrid::default().half_open();
        assert_eq!(grid.len(), 1000);
        assert!(grid.times()[999] < grid.end());
        assert!((grid.times()[999] - 0.999).abs() < 1e-12);
        assert!((grid.times()[500] - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_span_selects_contiguous_samples() {
        let grid = TimeGrid::default();
        let half = grid.span(0.0, 0.5);
        assert_eq!(half, SampleRange::new(0, 500));
        assert!(grid.times()[half.end - 1] <= 0.5);
        assert!(grid.times()[half.end] > 0.5);

        let full = grid.span(0.0, 1.0);
        assert_eq!(full, grid.full_range());
    }

    #[test]
    fn test_inverted_span_is_empty() {
        let grid = TimeGrid::default();
        assert!(grid.span(0.8, 0.2).is_empty());
    }

    #[test]
    fn test_sections_drop_short_tail() {
        let sections = SampleRange::new(0, 1000).sections(100);
        assert_eq!(sections.len(), 10);
        assert_eq!(sections[9], SampleRange::new(900, 1000));

        let sections = SampleRange::new(0, 950).sections(100);
        assert_eq!(sections.len(), 9);
    }

    #[test]
    fn test_degenerate_grids() {
        assert!(TimeGrid::linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(TimeGrid::linspace(0.0, 1.0, 1).times(), &[0.0]);
        assert_eq!(TimeGrid::default().bounds(SampleRange::new(3, 3)), None);
    }
}
