use lazy_static::lazy_static;

use crate::types::{DiseaseResult, Severity};

lazy_static! {
    static ref CATALOG: [DiseaseResult; 3] = [
        DiseaseResult {
            disease: "Tomato Late Blight".into(),
            confidence: 98.7,
            severity: Severity::High,
            treatment: "Apply fungicides containing chlorothalonil or mancozeb. Remove affected \
                        leaves and improve air circulation."
                .into(),
            description: "Late blight is caused by Phytophthora infestans and can quickly destroy \
                          entire crops if left untreated."
                .into(),
        },
        DiseaseResult {
            disease: "Bacterial Spot".into(),
            confidence: 96.3,
            severity: Severity::Medium,
            treatment: "Use copper-based bactericides. Practice crop rotation and avoid overhead \
                        irrigation."
                .into(),
            description: "Bacterial spot affects leaves and fruits, causing small dark spots that \
                          may have a yellow halo."
                .into(),
        },
        DiseaseResult {
            disease: "Early Blight".into(),
            confidence: 94.8,
            severity: Severity::Medium,
            treatment: "Apply fungicides and remove infected plant debris. Ensure proper spacing \
                        for air circulation."
                .into(),
            description: "Early blight causes dark spots with concentric rings on older leaves, \
                          progressing upward."
                .into(),
        },
    ];
}

/// The fixed sampling universe for the simulated analysis. Defined once at
/// process start and never mutated.
pub fn catalog() -> &'static [DiseaseResult] {
    &*CATALOG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_exactly_three_entries() {
        assert_eq!(catalog().len(), 3);
    }

    #[test]
    fn every_entry_satisfies_the_result_invariants() {
        for entry in catalog() {
            assert!(entry.is_valid(), "invalid catalog entry: {}", entry.disease);
            assert!(!entry.treatment.is_empty());
            assert!(!entry.description.is_empty());
        }
    }

    #[test]
    fn known_entries_keep_their_published_scores() {
        let late_blight = &catalog()[0];
        assert_eq!(late_blight.disease, "Tomato Late Blight");
        assert_eq!(late_blight.confidence, 98.7);
        assert_eq!(late_blight.severity, Severity::High);

        let labels: Vec<&str> = catalog().iter().map(|e| e.disease.as_str()).collect();
        assert_eq!(labels, ["Tomato Late Blight", "Bacterial Spot", "Early Blight"]);
    }
}
