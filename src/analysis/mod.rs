pub mod assessment;
pub mod classifier;
pub mod complexity;
pub mod service;
pub mod stats;

pub use assessment::{CrackMeasurement, DamageAssessment};
pub use classifier::DamageType;
pub use complexity::ComplexityAnalyzer;
pub use service::{AssessedFrame, CrackAnalysisService};
pub use stats::PixelStats;
