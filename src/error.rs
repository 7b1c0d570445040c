use thiserror::Error;

// Main application error type

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Assessment Error: {0}")]
    Assess(#[from] AssessError),
    #[error("Report Error: {0}")]
    Report(#[from] ReportError),
}

// Errors raised before the pixel scan ever runs. The scan itself never
// fails; a malformed image degrades to the fallback score instead.
#[derive(Error, Debug)]
pub enum AssessError {
    #[error("Failed to read image {path}: {source}")]
    ImageRead {
        path: String,
        source: image::ImageError,
    },
    #[error("Invalid analysis configuration: {0}")]
    InvalidConfig(String),
}

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}
