use image::Rgb;
use itertools::Itertools;

use super::edge_sampler::EdgeSample;

/// Share of edge samples the dominant color must exceed to count as background.
pub const DEFAULT_CONFIDENCE_THRESHOLD: f64 = 0.30;

/// Most frequent border color together with how often it was seen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BackgroundEstimate {
    /// Estimated background color
    pub color: Rgb<u8>,
    /// Number of edge samples exactly equal to `color`
    pub count: usize,
    /// Total number of edge samples
    pub total: usize,
}

impl BackgroundEstimate {
    /// Finds the most frequent color of an edge sample.
    ///
    /// Colors are compared exactly. When several colors share the highest
    /// count, the one that appears first in scan order wins.
    ///
    /// Returns `None` for an empty sample.
    ///
    /// # Examples
    /// ```
    /// use image::Rgb;
    /// use imageops_chroma::{BackgroundEstimate, EdgeSample};
    ///
    /// let sample = EdgeSample::new(vec![Rgb([0, 0, 255]), Rgb([255, 0, 0]), Rgb([255, 0, 0])]);
    /// let estimate = BackgroundEstimate::from_sample(&sample).unwrap();
    /// assert_eq!(estimate.color, Rgb([255, 0, 0]));
    /// assert_eq!((estimate.count, estimate.total), (2, 3));
    /// ```
    pub fn from_sample(sample: &EdgeSample) -> Option<Self> {
        let counts = sample.colors().iter().counts();
        let max = counts.values().copied().max()?;

        // HashMap order is unspecified, so resolve ties by rescanning in order.
        let color = sample
            .colors()
            .iter()
            .find(|color| counts.get(color) == Some(&max))?;

        Some(Self {
            color: *color,
            count: max,
            total: sample.len(),
        })
    }

    /// Fraction of edge samples matching the estimated color.
    pub fn confidence(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.count as f64 / self.total as f64
    }

    /// `true` when the confidence strictly exceeds `threshold`.
    pub fn is_confident(&self, threshold: f64) -> bool {
        self.confidence() > threshold
    }
}

impl EdgeSample {
    /// Most frequent color of this sample, see [`BackgroundEstimate::from_sample`].
    pub fn estimate_background(&self) -> Option<BackgroundEstimate> {
        BackgroundEstimate::from_sample(self)
    }
}
