use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Ordinal urgency classification attached to every detection result.
#[derive(
    Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

/// One detection outcome: disease label, confidence percentage and the
/// recommendation text shown to the user.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DiseaseResult {
    pub disease: String,
    pub confidence: f32,
    pub severity: Severity,
    pub treatment: String,
    pub description: String,
}

impl DiseaseResult {
    /// Confidence must be a percentage and the label must be non-empty.
    pub fn is_valid(&self) -> bool {
        !self.disease.is_empty() && (0.0..=100.0).contains(&self.confidence)
    }
}

/// A user-selected image, fully decoded into a self-contained data URL.
/// Replaced wholesale on re-upload, never partially mutated.
#[derive(Clone, Debug, PartialEq)]
pub struct UploadedImage {
    name: String,
    size: u64,
    data_url: String,
}

impl UploadedImage {
    pub fn new(name: impl Into<String>, size: u64, data_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size,
            data_url: data_url.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    /// Usable directly as an `<img src>` value, no further lookup needed.
    pub fn as_src(&self) -> &str {
        &self.data_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn severity_orders_by_urgency() {
        assert!(Severity::Low < Severity::Medium);
        assert!(Severity::Medium < Severity::High);
    }

    #[test]
    fn severity_displays_lowercase() {
        assert_eq!(Severity::High.to_string(), "high");
        assert_eq!(Severity::from_str("medium"), Ok(Severity::Medium));
        assert!(Severity::from_str("critical").is_err());
    }

    #[test]
    fn result_validity_checks_confidence_range() {
        let mut result = DiseaseResult {
            disease: "Early Blight".into(),
            confidence: 94.8,
            severity: Severity::Medium,
            treatment: String::new(),
            description: String::new(),
        };
        assert!(result.is_valid());

        result.confidence = 100.1;
        assert!(!result.is_valid());

        result.confidence = -0.1;
        assert!(!result.is_valid());

        result.confidence = 50.0;
        result.disease.clear();
        assert!(!result.is_valid());
    }
}
