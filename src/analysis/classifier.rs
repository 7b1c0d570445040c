use serde::{Deserialize, Serialize};

/// Five-tier damage classification, ordered from no visible damage to
/// collapse risk. Mirrors the grades used in rapid post-earthquake
/// visual screening.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DamageType {
    TypeO,
    TypeA,
    TypeB,
    TypeC,
    TypeD,
}

impl DamageType {
    /// Map a complexity score onto a tier. Upper bounds are exclusive and
    /// the bands are exhaustive over [0, 1]; out-of-range scores are
    /// clamped first, so the mapping is total.
    pub fn from_score(score: f32) -> Self {
        let score = score.clamp(0.0, 1.0);
        if score < 0.15 {
            DamageType::TypeO
        } else if score < 0.30 {
            DamageType::TypeA
        } else if score < 0.50 {
            DamageType::TypeB
        } else if score < 0.75 {
            DamageType::TypeC
        } else {
            DamageType::TypeD
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            DamageType::TypeO => "Type O Damage",
            DamageType::TypeA => "Type A Damage",
            DamageType::TypeB => "Type B Damage",
            DamageType::TypeC => "Type C Damage",
            DamageType::TypeD => "Type D Damage",
        }
    }

    /// Crack-width band label shown under the tier name.
    pub fn width_range(&self) -> &'static str {
        match self {
            DamageType::TypeO => "No measurable cracking",
            DamageType::TypeA => "w ≤ 0.5 mm",
            DamageType::TypeB => "0.5 mm < w ≤ 3 mm",
            DamageType::TypeC => "Cover spalling",
            DamageType::TypeD => "Critical damage",
        }
    }

    pub fn symptoms(&self) -> &'static str {
        match self {
            DamageType::TypeO => "No visible damage or only very faint surface marks",
            DamageType::TypeA => "Hairline cracking in plaster or render",
            DamageType::TypeB => "Visible cracks with the onset of surface spalling",
            DamageType::TypeC => "Spalling of the concrete cover over the reinforcement",
            DamageType::TypeD => "Reinforcement buckling or core crushing, collapse risk",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            DamageType::TypeO => "No structurally relevant damage was detected on the surface.",
            DamageType::TypeA => "Hairline cracks were detected on the photographed surface.",
            DamageType::TypeB => "Distinct cracking and early surface spalling were detected.",
            DamageType::TypeC => "Heavy damage with loss of the concrete cover was detected.",
            DamageType::TypeD => "Critical structural damage indicators were detected.",
        }
    }

    pub fn recommendation(&self) -> &'static str {
        match self {
            DamageType::TypeO => "Routine inspection is sufficient.",
            DamageType::TypeA => "Cosmetic repair; low structural risk.",
            DamageType::TypeB => "Have the element inspected by an expert and repaired.",
            DamageType::TypeC => "Urgent structural intervention is required.",
            DamageType::TypeD => "Immediate evacuation of the building is recommended.",
        }
    }

    /// ARGB display color for result cards and report highlights.
    pub fn color_hex(&self) -> u32 {
        match self {
            DamageType::TypeO => 0xFF4CAF50,
            DamageType::TypeA => 0xFF8BC34A,
            DamageType::TypeB => 0xFFFFA726,
            DamageType::TypeC => 0xFFFF7043,
            DamageType::TypeD => 0xFFE53935,
        }
    }

    /// Severity marker used by front ends next to the tier name.
    pub fn marker(&self) -> &'static str {
        match self {
            DamageType::TypeO => "✓",
            DamageType::TypeA => "⚠",
            DamageType::TypeB => "⚠⚠",
            DamageType::TypeC => "⚠⚠⚠",
            DamageType::TypeD => "🚨",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_score_maps_to_exactly_one_tier() {
        let mut score = 0.0f32;
        while score <= 1.0 {
            // from_score is total; just ensure it never panics and stays
            // ordered as the score grows.
            let _ = DamageType::from_score(score);
            score += 0.01;
        }
        assert!(DamageType::from_score(0.0) <= DamageType::from_score(1.0));
    }

    #[test]
    fn tier_bounds_are_exclusive_upper() {
        assert_eq!(DamageType::from_score(0.1499), DamageType::TypeO);
        assert_eq!(DamageType::from_score(0.15), DamageType::TypeA);
        assert_eq!(DamageType::from_score(0.2999), DamageType::TypeA);
        assert_eq!(DamageType::from_score(0.30), DamageType::TypeB);
        assert_eq!(DamageType::from_score(0.50), DamageType::TypeC);
        assert_eq!(DamageType::from_score(0.75), DamageType::TypeD);
        assert_eq!(DamageType::from_score(1.0), DamageType::TypeD);
    }

    #[test]
    fn out_of_range_scores_are_clamped() {
        assert_eq!(DamageType::from_score(-0.5), DamageType::TypeO);
        assert_eq!(DamageType::from_score(1.3), DamageType::TypeD);
    }

    #[test]
    fn tiers_order_by_severity() {
        assert!(DamageType::TypeO < DamageType::TypeA);
        assert!(DamageType::TypeC < DamageType::TypeD);
    }
}
