pub mod catalog;
pub mod classifier;
pub mod intake;
pub mod session;
pub mod types;

pub use catalog::catalog;
pub use classifier::{Classifier, MockClassifier};
pub use intake::{check_upload_size, IntakeError, MAX_UPLOAD_BYTES};
pub use session::{
    AnalysisSession, AnalysisState, AnalysisTicket, AnalyzeError, Completion, ANALYSIS_DELAY_MS,
};
pub use types::{DiseaseResult, Severity, UploadedImage};
