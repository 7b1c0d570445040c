pub mod form;
pub mod summary;

pub use form::{DamageState, DamageSurveyForm, LoadBearingElement, Signatory, StructuralSystem};
pub use summary::{ReportDocument, ReportField, ReportSection};
