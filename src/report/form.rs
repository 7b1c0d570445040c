use crate::analysis::DamageType;
use serde::{Deserialize, Serialize};

/// Multi-section structural damage survey, filled by the assessor in the
/// field and exported as the final report.
///
/// Everything is kept as entered (free text for numeric fields included);
/// validation happens at export time via [`missing_fields`], not while
/// the assessor is still typing.
///
/// [`missing_fields`]: DamageSurveyForm::missing_fields
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DamageSurveyForm {
    // Administrative
    pub province: String,
    pub district: String,
    pub town: String,
    pub village: String,
    pub hamlet: String,
    pub neighborhood: String,

    // Population and households
    pub population: String,
    pub households: String,

    // Disaster
    pub disaster_kind: String,
    pub disaster_date: String,
    pub page_no: String,

    // Street and building identification
    pub street: String,
    pub owner_surname: String,
    pub fathers_name: String,
    pub building_name: String,
    pub utility_no: String,
    pub gps_coordinate: String,

    // Building characteristics
    pub architectural_project: Option<bool>,
    pub storey_count: String,
    pub sub_basement: Option<bool>,
    pub basement: Option<bool>,
    pub ground_floor: Option<bool>,
    pub first_floor: Option<bool>,
    pub second_floor: Option<bool>,
    pub third_floor: Option<bool>,
    pub roof_storey: Option<bool>,
    pub structural_system: StructuralSystem,

    // Damage
    pub damage_state: DamageState,
    pub load_bearing_element: LoadBearingElement,
    pub load_capacity_loss: Option<bool>,

    pub remarks: String,

    // Signatures
    pub assessor_one: Signatory,
    pub assessor_two: Signatory,
    pub report_date: String,
}

impl DamageSurveyForm {
    /// Labels of required fields that are still empty or unselected.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();

        if self.province.trim().is_empty() {
            missing.push("Province");
        }
        if self.district.trim().is_empty() {
            missing.push("District");
        }
        if self.disaster_kind.trim().is_empty() {
            missing.push("Disaster kind");
        }
        if self.disaster_date.trim().is_empty() {
            missing.push("Disaster date");
        }
        if self.structural_system == StructuralSystem::NotSelected {
            missing.push("Structural system");
        }
        if self.damage_state == DamageState::NotSelected {
            missing.push("Damage state");
        }
        if self.assessor_one.name.trim().is_empty() {
            missing.push("First assessor name");
        }
        if self.report_date.trim().is_empty() {
            missing.push("Report date");
        }

        missing
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }
}

/// One signature block at the bottom of the survey.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Signatory {
    pub name: String,
    pub profession: String,
    pub unit: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum StructuralSystem {
    #[default]
    NotSelected,
    Masonry,
    Stone,
    ReinforcedConcrete,
    Steel,
    Timber,
    Prefabricated,
    Other,
}

impl StructuralSystem {
    pub fn display_name(&self) -> &'static str {
        match self {
            StructuralSystem::NotSelected => "Not selected",
            StructuralSystem::Masonry => "Masonry",
            StructuralSystem::Stone => "Stone",
            StructuralSystem::ReinforcedConcrete => "Reinforced concrete",
            StructuralSystem::Steel => "Steel",
            StructuralSystem::Timber => "Timber",
            StructuralSystem::Prefabricated => "Prefabricated",
            StructuralSystem::Other => "Other",
        }
    }
}

/// Overall damage grade of the surveyed building. This is the assessor's
/// judgement over the whole structure, one level coarser-grained than the
/// per-surface image tiers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DamageState {
    #[default]
    NotSelected,
    Undamaged,
    Light,
    Moderate,
    Heavy,
    VeryHeavy,
    Collapsed,
}

impl DamageState {
    pub fn display_name(&self) -> &'static str {
        match self {
            DamageState::NotSelected => "Not selected",
            DamageState::Undamaged => "Undamaged",
            DamageState::Light => "Lightly damaged",
            DamageState::Moderate => "Moderately damaged",
            DamageState::Heavy => "Heavily damaged",
            DamageState::VeryHeavy => "Very heavily damaged",
            DamageState::Collapsed => "Collapsed",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            DamageState::NotSelected => "",
            DamageState::Undamaged => "No damage to the structure",
            DamageState::Light => "Usable after light repair",
            DamageState::Moderate => "Moderate repair required",
            DamageState::Heavy => "Strengthening or demolition required",
            DamageState::VeryHeavy => "Demolition required",
            DamageState::Collapsed => "The structure has fully collapsed",
        }
    }

    /// Survey grade suggested by an image-derived damage tier. The
    /// assessor can always override; a single photographed surface never
    /// proves a building collapsed, so the mapping tops out below
    /// [`DamageState::Collapsed`].
    pub fn suggested_for(damage_type: DamageType) -> Self {
        match damage_type {
            DamageType::TypeO => DamageState::Undamaged,
            DamageType::TypeA => DamageState::Light,
            DamageType::TypeB => DamageState::Moderate,
            DamageType::TypeC => DamageState::Heavy,
            DamageType::TypeD => DamageState::VeryHeavy,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoadBearingElement {
    #[default]
    NotSelected,
    Columns,
    ShearWalls,
    Beams,
    Slabs,
    Walls,
    Stairs,
    Foundation,
}

impl LoadBearingElement {
    pub fn display_name(&self) -> &'static str {
        match self {
            LoadBearingElement::NotSelected => "Not selected",
            LoadBearingElement::Columns => "Columns",
            LoadBearingElement::ShearWalls => "Shear walls",
            LoadBearingElement::Beams => "Beams",
            LoadBearingElement::Slabs => "Slabs",
            LoadBearingElement::Walls => "Walls",
            LoadBearingElement::Stairs => "Stairs",
            LoadBearingElement::Foundation => "Foundation",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> DamageSurveyForm {
        DamageSurveyForm {
            province: "Hatay".to_string(),
            district: "Antakya".to_string(),
            disaster_kind: "Earthquake".to_string(),
            disaster_date: "2023-02-06".to_string(),
            structural_system: StructuralSystem::ReinforcedConcrete,
            damage_state: DamageState::Moderate,
            assessor_one: Signatory {
                name: "A. Engineer".to_string(),
                profession: "Civil engineer".to_string(),
                unit: "Provincial directorate".to_string(),
            },
            report_date: "2023-02-09".to_string(),
            ..DamageSurveyForm::default()
        }
    }

    #[test]
    fn empty_form_lists_every_required_field() {
        let missing = DamageSurveyForm::default().missing_fields();
        assert!(missing.contains(&"Province"));
        assert!(missing.contains(&"Damage state"));
        assert!(missing.contains(&"Report date"));
        assert_eq!(missing.len(), 8);
    }

    #[test]
    fn filled_form_is_complete() {
        assert!(filled_form().is_complete());
    }

    #[test]
    fn whitespace_only_entries_count_as_missing() {
        let mut form = filled_form();
        form.province = "   ".to_string();
        assert!(form.missing_fields().contains(&"Province"));
    }

    #[test]
    fn image_tiers_suggest_monotonic_survey_grades() {
        let tiers = [
            DamageType::TypeO,
            DamageType::TypeA,
            DamageType::TypeB,
            DamageType::TypeC,
            DamageType::TypeD,
        ];
        let grades: Vec<_> = tiers.iter().map(|t| DamageState::suggested_for(*t)).collect();
        assert!(grades.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(*grades.last().unwrap(), DamageState::VeryHeavy);
    }
}
