use super::form::DamageSurveyForm;
use crate::analysis::DamageAssessment;
use crate::error::ReportError;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt::Write as _;
use uuid::Uuid;

/// Renderer-independent content of a damage report: ordered sections of
/// labeled fields. A platform front end lays this out on paper or screen;
/// the crate only decides what appears and in which order.
#[derive(Debug, Clone, Serialize)]
pub struct ReportDocument {
    pub report_id: Uuid,
    pub title: String,
    pub generated_at: DateTime<Utc>,
    pub sections: Vec<ReportSection>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportSection {
    pub title: &'static str,
    pub fields: Vec<ReportField>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportField {
    pub label: &'static str,
    pub value: String,
}

impl ReportField {
    fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }

    fn yes_no(label: &'static str, value: Option<bool>) -> Self {
        let rendered = match value {
            Some(true) => "Yes",
            Some(false) => "No",
            None => "-",
        };
        Self::new(label, rendered)
    }
}

impl ReportDocument {
    /// Assemble the survey sections in their printed order.
    pub fn from_form(form: &DamageSurveyForm) -> Self {
        let sections = vec![
            ReportSection {
                title: "1. Administrative information",
                fields: vec![
                    ReportField::new("Province", &form.province),
                    ReportField::new("District", &form.district),
                    ReportField::new("Town", &form.town),
                    ReportField::new("Neighborhood", &form.neighborhood),
                    ReportField::new("Village", &form.village),
                    ReportField::new("Hamlet", &form.hamlet),
                ],
            },
            ReportSection {
                title: "2. Population and households",
                fields: vec![
                    ReportField::new("Population", &form.population),
                    ReportField::new("Households", &form.households),
                ],
            },
            ReportSection {
                title: "3. Disaster information",
                fields: vec![
                    ReportField::new("Disaster kind", &form.disaster_kind),
                    ReportField::new("Disaster date", &form.disaster_date),
                    ReportField::new("Page no", &form.page_no),
                ],
            },
            ReportSection {
                title: "4. Street and building",
                fields: vec![
                    ReportField::new("Street", &form.street),
                    ReportField::new("Owner surname", &form.owner_surname),
                    ReportField::new("Father's name", &form.fathers_name),
                    ReportField::new("Building name", &form.building_name),
                    ReportField::new("Utility registration no", &form.utility_no),
                    ReportField::new("GPS coordinate", &form.gps_coordinate),
                ],
            },
            ReportSection {
                title: "5. Building characteristics",
                fields: vec![
                    ReportField::yes_no("Architectural project", form.architectural_project),
                    ReportField::new("Storey count", &form.storey_count),
                    ReportField::yes_no("Sub-basement", form.sub_basement),
                    ReportField::yes_no("Basement", form.basement),
                    ReportField::yes_no("Ground floor", form.ground_floor),
                    ReportField::yes_no("1st floor", form.first_floor),
                    ReportField::yes_no("2nd floor", form.second_floor),
                    ReportField::yes_no("3rd floor", form.third_floor),
                    ReportField::yes_no("Roof storey", form.roof_storey),
                    ReportField::new("Structural system", form.structural_system.display_name()),
                ],
            },
            ReportSection {
                title: "6. Damage information",
                fields: vec![
                    ReportField::new("Damage state", form.damage_state.display_name()),
                    ReportField::new("Damage state detail", form.damage_state.description()),
                    ReportField::new(
                        "Load-bearing element",
                        form.load_bearing_element.display_name(),
                    ),
                    ReportField::yes_no("Load capacity loss", form.load_capacity_loss),
                ],
            },
            ReportSection {
                title: "7. Remarks",
                fields: vec![ReportField::new("Remarks", &form.remarks)],
            },
            ReportSection {
                title: "8. Signatures",
                fields: vec![
                    ReportField::new("Assessor 1", &form.assessor_one.name),
                    ReportField::new("Profession", &form.assessor_one.profession),
                    ReportField::new("Unit", &form.assessor_one.unit),
                    ReportField::new("Assessor 2", &form.assessor_two.name),
                    ReportField::new("Profession", &form.assessor_two.profession),
                    ReportField::new("Unit", &form.assessor_two.unit),
                    ReportField::new("Report date", &form.report_date),
                ],
            },
        ];

        Self {
            report_id: Uuid::new_v4(),
            title: "DAMAGE ASSESSMENT REPORT".to_string(),
            generated_at: Utc::now(),
            sections,
        }
    }

    /// Append the image-analysis findings as their own section.
    pub fn with_assessment(mut self, assessment: &DamageAssessment) -> Self {
        self.sections.push(ReportSection {
            title: "9. Photographic crack analysis",
            fields: vec![
                ReportField::new("Classification", assessment.damage_type.display_name()),
                ReportField::new("Width range", assessment.damage_type.width_range()),
                ReportField::new("Symptoms", assessment.damage_type.symptoms()),
                ReportField::new(
                    "Estimated crack width",
                    format!("{:.1} mm", assessment.measurement.width_mm),
                ),
                ReportField::new(
                    "Estimated crack length",
                    format!("{:.1} cm", assessment.measurement.length_cm),
                ),
                ReportField::new(
                    "Crack area",
                    format!("{:.1} cm²", assessment.measurement.area_cm2),
                ),
                ReportField::new(
                    "Severity",
                    format!("{:.0}%", assessment.severity_percent),
                ),
                ReportField::new("Description", &assessment.description),
                ReportField::new("Recommendation", &assessment.recommendation),
            ],
        });
        self
    }

    /// Plain-text rendering, one labeled field per line.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", self.title);
        let _ = writeln!(out, "Generated: {}", self.generated_at.format("%Y-%m-%d %H:%M UTC"));

        for section in &self.sections {
            let _ = writeln!(out);
            let _ = writeln!(out, "{}", section.title);
            for field in &section.fields {
                if field.value.is_empty() {
                    continue;
                }
                let _ = writeln!(out, "  {}: {}", field.label, field.value);
            }
        }

        out
    }

    pub fn to_json(&self) -> Result<String, ReportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::form::{DamageState, Signatory, StructuralSystem};

    fn sample_form() -> DamageSurveyForm {
        DamageSurveyForm {
            province: "Hatay".to_string(),
            district: "Antakya".to_string(),
            disaster_kind: "Earthquake".to_string(),
            disaster_date: "2023-02-06".to_string(),
            structural_system: StructuralSystem::Masonry,
            damage_state: DamageState::Heavy,
            assessor_one: Signatory {
                name: "A. Engineer".to_string(),
                profession: "Civil engineer".to_string(),
                unit: "Field team 3".to_string(),
            },
            report_date: "2023-02-09".to_string(),
            ..DamageSurveyForm::default()
        }
    }

    #[test]
    fn sections_appear_in_survey_order() {
        let doc = ReportDocument::from_form(&sample_form());
        let titles: Vec<_> = doc.sections.iter().map(|s| s.title).collect();
        assert_eq!(titles.len(), 8);
        assert!(titles[0].starts_with("1."));
        assert!(titles[7].starts_with("8."));
    }

    #[test]
    fn rendered_text_skips_empty_fields() {
        let text = ReportDocument::from_form(&sample_form()).render_text();
        assert!(text.contains("Province: Hatay"));
        assert!(text.contains("Heavily damaged"));
        assert!(!text.contains("Building name:"));
    }

    #[test]
    fn assessment_section_is_appended_when_attached() {
        let assessment = DamageAssessment::from_score(0.4, 480);
        let doc = ReportDocument::from_form(&sample_form()).with_assessment(&assessment);
        assert_eq!(doc.sections.len(), 9);

        let text = doc.render_text();
        assert!(text.contains("Photographic crack analysis"));
        assert!(text.contains("Type B Damage"));
    }

    #[test]
    fn json_export_round_trips_through_serde() {
        let doc = ReportDocument::from_form(&sample_form());
        let json = doc.to_json().expect("document serializes");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
        assert_eq!(value["title"], "DAMAGE ASSESSMENT REPORT");
        assert!(value["sections"].as_array().unwrap().len() >= 8);
    }
}
