pub mod analysis;
pub mod common;
pub mod config;
pub mod error;
pub mod report;

pub use analysis::{
    AssessedFrame, ComplexityAnalyzer, CrackAnalysisService, CrackMeasurement, DamageAssessment,
    DamageType,
};
pub use common::Frame;
pub use config::AnalysisConfig;
pub use error::{AppError, AssessError, ReportError};
pub use report::{DamageSurveyForm, ReportDocument};
