use super::stats::PixelStats;
use crate::config::AnalysisConfig;
use crate::error::AssessError;
use image::{imageops::FilterType, DynamicImage, RgbImage};
use tracing::{debug, warn};

/// Reduces a photograph to a single crack-complexity score in [0, 1].
///
/// The input is downsampled to a fixed small grid so the scan cost is
/// constant regardless of camera resolution and high-frequency sensor
/// noise does not dominate the edge count. Every interior pixel is then
/// classified by brightness and by its maximum gradient against the
/// right/bottom/diagonal neighbors, and the resulting ratios are combined
/// with the configured weights.
pub struct ComplexityAnalyzer {
    config: AnalysisConfig,
}

impl ComplexityAnalyzer {
    pub fn new() -> Self {
        Self {
            config: AnalysisConfig::default(),
        }
    }

    pub fn with_config(config: AnalysisConfig) -> Result<Self, AssessError> {
        config.validate().map_err(AssessError::InvalidConfig)?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Score a photograph. Total: always returns a finite value in
    /// [score_floor, 1.0].
    ///
    /// Near-zero raw scores are raised to the floor (no visible edges
    /// still reads as minimal severity, not certainty of no damage), and
    /// unscannable input degrades to the fallback score instead of
    /// failing a user-facing classification.
    pub fn analyze(&self, image: &DynamicImage) -> f32 {
        match self.scan(image) {
            Some(stats) => {
                let raw = stats.weighted_score(&self.config.weights);
                debug!(
                    "Complexity scan: edge={:.4} strong={:.4} dark={:.4} crack={:.4} raw={:.4}",
                    stats.edge_ratio(),
                    stats.strong_edge_ratio(),
                    stats.dark_ratio(),
                    stats.crack_like_ratio(),
                    raw
                );
                if raw < self.config.score_epsilon {
                    self.config.score_floor
                } else {
                    raw
                }
            }
            None => {
                warn!(
                    "Image not scannable ({}x{}), degrading to fallback score {}",
                    image.width(),
                    image.height(),
                    self.config.fallback_score
                );
                self.config.fallback_score
            }
        }
    }

    /// Downsample and count edge/dark pixels over the interior grid.
    ///
    /// Returns `None` when there is nothing to scan (zero-dimension
    /// input, or a scan grid too small to have interior pixels).
    pub fn scan(&self, image: &DynamicImage) -> Option<PixelStats> {
        if image.width() == 0 || image.height() == 0 {
            return None;
        }

        let small = image
            .resize_exact(
                self.config.scan_width,
                self.config.scan_height,
                FilterType::Triangle,
            )
            .to_rgb8();

        let stats = self.count_pixels(&small);
        (stats.total_pixels > 0).then_some(stats)
    }

    fn count_pixels(&self, rgb: &RgbImage) -> PixelStats {
        let (width, height) = rgb.dimensions();
        let thresholds = &self.config.thresholds;
        let mut stats = PixelStats::default();

        // A one-pixel border is excluded; the gradient needs the
        // right/bottom/diagonal neighbors.
        for y in 1..height.saturating_sub(1) {
            for x in 1..width.saturating_sub(1) {
                let brightness = Self::brightness(rgb, x, y);

                if brightness < thresholds.dark_brightness {
                    stats.dark_pixels += 1;
                }
                if brightness < thresholds.crack_brightness {
                    stats.crack_like_pixels += 1;
                }

                let horizontal = (brightness - Self::brightness(rgb, x + 1, y)).abs();
                let vertical = (brightness - Self::brightness(rgb, x, y + 1)).abs();
                let diagonal = (brightness - Self::brightness(rgb, x + 1, y + 1)).abs();
                let max_gradient = horizontal.max(vertical).max(diagonal);

                if max_gradient > thresholds.edge_gradient {
                    stats.edge_pixels += 1;
                }
                if max_gradient > thresholds.strong_edge_gradient {
                    stats.strong_edge_pixels += 1;
                }

                stats.total_pixels += 1;
            }
        }

        stats
    }

    fn brightness(rgb: &RgbImage, x: u32, y: u32) -> i32 {
        let [r, g, b] = rgb.get_pixel(x, y).0;
        (r as i32 + g as i32 + b as i32) / 3
    }
}

impl Default for ComplexityAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
