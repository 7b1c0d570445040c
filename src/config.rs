/// Configuration for the crack complexity scan with tunable parameters.
///
/// The numeric defaults are the calibration the classifier thresholds were
/// tuned against. They are engineering estimates, not measured physical
/// constants, which is why they live here rather than as literals in the
/// scan loop.
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    /// Width of the downsampled scan grid.
    pub scan_width: u32,
    /// Height of the downsampled scan grid.
    pub scan_height: u32,
    pub thresholds: BrightnessThresholds,
    pub weights: RatioWeights,
    /// Raw scores below this are treated as "no visible edges".
    pub score_epsilon: f32,
    /// Substituted for near-zero raw scores; a heuristic never reports
    /// zero damage with full confidence.
    pub score_floor: f32,
    /// Returned when the scan cannot run at all (malformed pixel data).
    pub fallback_score: f32,
}

#[derive(Debug, Clone)]
pub struct BrightnessThresholds {
    /// Below this mean brightness a pixel counts as shadow/crack shading.
    pub dark_brightness: i32,
    /// Below this a pixel is dark enough to lie on an actual crack line.
    pub crack_brightness: i32,
    /// Minimum neighbor gradient for an edge pixel.
    pub edge_gradient: i32,
    /// Minimum neighbor gradient for a sharp, high-contrast edge.
    pub strong_edge_gradient: i32,
}

#[derive(Debug, Clone)]
pub struct RatioWeights {
    pub edge: f32,
    pub strong_edge: f32,
    pub dark: f32,
    pub crack_like: f32,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            scan_width: 200,
            scan_height: 200,
            thresholds: BrightnessThresholds::default(),
            weights: RatioWeights::default(),
            score_epsilon: 0.02,
            score_floor: 0.05,
            fallback_score: 0.15,
        }
    }
}

impl Default for BrightnessThresholds {
    fn default() -> Self {
        Self {
            dark_brightness: 130,
            crack_brightness: 80,
            edge_gradient: 20,
            strong_edge_gradient: 50,
        }
    }
}

impl Default for RatioWeights {
    fn default() -> Self {
        // Strong, well-defined edges outweigh plain darkness: uniform
        // shadow alone should not read as damage.
        Self {
            edge: 0.4,
            strong_edge: 0.3,
            dark: 0.2,
            crack_like: 0.1,
        }
    }
}

impl AnalysisConfig {
    /// Validate configuration parameters
    pub fn validate(&self) -> Result<(), String> {
        if self.scan_width < 3 || self.scan_height < 3 {
            return Err("Scan grid must be at least 3x3 to have interior pixels".to_string());
        }

        let weights = [
            self.weights.edge,
            self.weights.strong_edge,
            self.weights.dark,
            self.weights.crack_like,
        ];
        if weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err("Ratio weights must be finite and non-negative".to_string());
        }

        if !(0.0..=1.0).contains(&self.score_floor) {
            return Err("Score floor must be between 0.0 and 1.0".to_string());
        }

        if !(0.0..=1.0).contains(&self.fallback_score) {
            return Err("Fallback score must be between 0.0 and 1.0".to_string());
        }

        if self.thresholds.crack_brightness > self.thresholds.dark_brightness {
            return Err("Crack brightness threshold cannot exceed the dark threshold".to_string());
        }

        Ok(())
    }

    /// Set the downsampled scan resolution.
    pub fn with_scan_size(mut self, width: u32, height: u32) -> Self {
        self.scan_width = width;
        self.scan_height = height;
        self
    }

    pub fn with_thresholds(mut self, thresholds: BrightnessThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    pub fn with_weights(mut self, weights: RatioWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn with_fallback_score(mut self, fallback_score: f32) -> Self {
        self.fallback_score = fallback_score.clamp(0.0, 1.0);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(AnalysisConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_degenerate_scan_grid() {
        let config = AnalysisConfig::default().with_scan_size(2, 200);
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_negative_weights() {
        let config = AnalysisConfig::default().with_weights(RatioWeights {
            edge: -0.4,
            strong_edge: 0.3,
            dark: 0.2,
            crack_like: 0.1,
        });
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_inverted_brightness_thresholds() {
        let config = AnalysisConfig::default().with_thresholds(BrightnessThresholds {
            dark_brightness: 80,
            crack_brightness: 130,
            edge_gradient: 20,
            strong_edge_gradient: 50,
        });
        assert!(config.validate().is_err());
    }
}
