use super::assessment::DamageAssessment;
use super::complexity::ComplexityAnalyzer;
use crate::common::Frame;
use crate::config::AnalysisConfig;
use crate::error::{AppError, AssessError};
use image::DynamicImage;
use std::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
    time::Instant,
};
use tower::Service;
use tracing::info;

/// A frame enriched with its completed damage assessment.
#[derive(Clone)]
pub struct AssessedFrame {
    pub frame: Frame,
    pub assessment: DamageAssessment,
}

/// Entry point a host application drives with captured photographs.
///
/// Holds no state between calls; two frames can be assessed concurrently
/// from separate service clones with no ordering constraint. The scan is
/// synchronous and bounded, so hosts with an interactive UI should drive
/// the service from a worker context, which the `tower::Service` impl
/// makes straightforward.
pub struct CrackAnalysisService {
    analyzer: ComplexityAnalyzer,
}

impl CrackAnalysisService {
    pub fn new() -> Self {
        Self {
            analyzer: ComplexityAnalyzer::new(),
        }
    }

    pub fn with_config(config: AnalysisConfig) -> Result<Self, AssessError> {
        Ok(Self {
            analyzer: ComplexityAnalyzer::with_config(config)?,
        })
    }

    /// Assess one photograph: complexity scan followed by the pure
    /// classification. Total for any decoded image.
    pub fn assess(&self, image: &DynamicImage) -> DamageAssessment {
        let start = Instant::now();

        let score = self.analyzer.analyze(image);
        let assessment = DamageAssessment::from_score(score, image.height());

        info!(
            "Crack assessment completed in {}us: {} at {:.0}% severity",
            start.elapsed().as_micros(),
            assessment.damage_type.display_name(),
            assessment.severity_percent
        );

        assessment
    }

    pub fn assess_frame(&self, frame: &Frame) -> AssessedFrame {
        AssessedFrame {
            frame: frame.clone(),
            assessment: self.assess(frame.image()),
        }
    }
}

impl Default for CrackAnalysisService {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for CrackAnalysisService {
    fn clone(&self) -> Self {
        // Detectors are stateless; a clone just re-derives from the same
        // configuration.
        Self {
            analyzer: ComplexityAnalyzer::with_config(self.analyzer.config().clone())
                .expect("configuration was validated at construction"),
        }
    }
}

impl Service<Frame> for CrackAnalysisService {
    type Response = AssessedFrame;
    type Error = AppError;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, frame: Frame) -> Self::Future {
        let assessed = self.assess_frame(&frame);
        Box::pin(async move { Ok(assessed) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::classifier::DamageType;
    use image::{ImageBuffer, Rgb};
    use tower::ServiceExt;

    fn bright_wall(width: u32, height: u32) -> Frame {
        Frame::new(DynamicImage::ImageRgb8(ImageBuffer::from_pixel(
            width,
            height,
            Rgb([210, 210, 210]),
        )))
    }

    #[test]
    fn featureless_wall_assesses_as_lowest_tier() {
        let service = CrackAnalysisService::new();
        let frame = bright_wall(640, 480);
        let assessed = service.assess_frame(&frame);
        assert_eq!(assessed.assessment.damage_type, DamageType::TypeO);
        assert_eq!(assessed.assessment.complexity, 0.05);
    }

    #[test]
    fn length_scales_with_the_input_frame_height() {
        let service = CrackAnalysisService::new();
        let short = service.assess(bright_wall(640, 200).image());
        let tall = service.assess(bright_wall(640, 800).image());
        assert!((tall.measurement.length_cm - 4.0 * short.measurement.length_cm).abs() < 1e-4);
    }

    #[test]
    fn unscannable_frame_still_classifies() {
        let service = CrackAnalysisService::new();
        let empty = DynamicImage::ImageRgb8(ImageBuffer::new(0, 0));
        let assessment = service.assess(&empty);
        assert_eq!(assessment.complexity, 0.15);
        assert_eq!(assessment.damage_type, DamageType::TypeA);
    }

    #[tokio::test]
    async fn tower_service_matches_direct_assessment() {
        let service = CrackAnalysisService::new();
        let frame = bright_wall(320, 240);
        let direct = service.assess(frame.image());

        let assessed = service
            .oneshot(frame.clone())
            .await
            .expect("assessment is total");
        assert_eq!(assessed.assessment, direct);
        assert_eq!(assessed.frame.frame_id(), frame.frame_id());
    }
}
