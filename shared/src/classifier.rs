use crate::catalog::catalog;
use crate::types::{DiseaseResult, UploadedImage};

/// Seam between the orchestrator and whatever produces detection results.
/// A real model drops in here without the session noticing.
pub trait Classifier {
    fn classify(&self, image: &UploadedImage) -> DiseaseResult;
}

/// Stand-in classifier: a uniform pick over the fixed catalog, driven by an
/// injected entropy source so callers control determinism.
pub struct MockClassifier {
    entropy: Box<dyn Fn() -> f64>,
}

impl MockClassifier {
    /// `entropy` must yield values in `[0, 1)`; out-of-range values are
    /// clamped rather than allowed to index past the catalog.
    pub fn new(entropy: impl Fn() -> f64 + 'static) -> Self {
        Self {
            entropy: Box::new(entropy),
        }
    }
}

impl Classifier for MockClassifier {
    // The image is accepted and displayed elsewhere but never inspected;
    // the selection is independent of its content.
    fn classify(&self, _image: &UploadedImage) -> DiseaseResult {
        let entries = catalog();
        let roll = (self.entropy)().clamp(0.0, 1.0);
        let index = ((roll * entries.len() as f64) as usize).min(entries.len() - 1);
        entries[index].clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image() -> UploadedImage {
        UploadedImage::new("leaf.jpg", 1024, "data:image/png;base64,AAAA")
    }

    #[test]
    fn rolls_map_uniformly_onto_the_catalog() {
        let cases = [(0.0, 0), (0.32, 0), (0.34, 1), (0.65, 1), (0.67, 2), (0.999, 2)];
        for (roll, expected) in cases {
            let classifier = MockClassifier::new(move || roll);
            assert_eq!(
                classifier.classify(&image()),
                catalog()[expected],
                "roll {roll} should pick entry {expected}"
            );
        }
    }

    #[test]
    fn out_of_range_entropy_is_clamped() {
        let classifier = MockClassifier::new(|| 1.0);
        assert_eq!(classifier.classify(&image()), catalog()[2]);

        let classifier = MockClassifier::new(|| -0.5);
        assert_eq!(classifier.classify(&image()), catalog()[0]);
    }

    #[test]
    fn every_produced_result_is_a_catalog_entry() {
        for step in 0..20 {
            let roll = step as f64 / 20.0;
            let classifier = MockClassifier::new(move || roll);
            let result = classifier.classify(&image());
            assert!(
                catalog().contains(&result),
                "result {} not in catalog",
                result.disease
            );
            assert!(result.is_valid());
        }
    }
}
