use super::classifier::DamageType;
use serde::{Deserialize, Serialize};

/// Crack dimensions derived from the complexity score and the height of
/// the photographed frame.
///
/// The pixel height stands in for physical scale: length grows with the
/// score through a six-band multiplier table, width is a fixed lookup per
/// band rather than an interpolation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CrackMeasurement {
    pub length_cm: f32,
    pub width_mm: f32,
    pub area_cm2: f32,
}

impl CrackMeasurement {
    pub fn from_score(score: f32, image_height_px: u32) -> Self {
        let score = score.clamp(0.0, 1.0);

        let length_factor = if score < 0.05 {
            0.1
        } else if score < 0.15 {
            0.2
        } else if score < 0.30 {
            0.4
        } else if score < 0.50 {
            0.6
        } else if score < 0.75 {
            0.8
        } else {
            0.95
        };

        let width_mm = if score < 0.05 {
            0.2
        } else if score < 0.15 {
            0.4
        } else if score < 0.30 {
            1.2
        } else if score < 0.50 {
            2.5
        } else if score < 0.75 {
            6.0
        } else {
            12.0
        };

        let length_cm = (image_height_px as f32 * length_factor) / 10.0;
        let area_cm2 = (length_cm * width_mm) / 10.0;

        Self {
            length_cm,
            width_mm,
            area_cm2,
        }
    }
}

/// Completed classification of one photograph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DamageAssessment {
    pub damage_type: DamageType,
    pub measurement: CrackMeasurement,
    /// Complexity score the classification was derived from.
    pub complexity: f32,
    /// 0-100, the score expressed as a percentage.
    pub severity_percent: f32,
    pub description: String,
    pub recommendation: String,
}

impl DamageAssessment {
    /// Pure classification of a score; never fails. Absence of a damage
    /// signal still yields the lowest tier.
    pub fn from_score(score: f32, image_height_px: u32) -> Self {
        let damage_type = DamageType::from_score(score);
        let measurement = CrackMeasurement::from_score(score, image_height_px);
        let severity_percent = (score * 100.0).clamp(0.0, 100.0);

        Self {
            damage_type,
            measurement,
            complexity: score,
            severity_percent,
            description: damage_type.description().to_string(),
            recommendation: damage_type.recommendation().to_string(),
        }
    }
}
