use thiserror::Error;

use crate::types::{DiseaseResult, UploadedImage};

/// Fixed duration of the simulated inference pass.
pub const ANALYSIS_DELAY_MS: u32 = 2_500;

/// The orchestrator's four states. An image is present in every state but
/// `Idle`, and a result only ever coexists with a settled, non-busy session,
/// so the illegal combinations cannot be constructed.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum AnalysisState {
    #[default]
    Idle,
    Ready { image: UploadedImage },
    Busy { image: UploadedImage },
    Settled {
        image: UploadedImage,
        result: DiseaseResult,
    },
}

/// Opaque token handed out when an analysis starts. A completion is only
/// honored if its ticket still matches the session's current generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisTicket(u64);

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AnalyzeError {
    #[error("Please upload an image first")]
    ImageRequired,
    #[error("An analysis is already running")]
    AlreadyRunning,
}

/// Outcome of delivering a finished analysis back to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum Completion {
    Settled,
    Discarded,
}

/// Owns the image/busy/result triple and the generation counter that makes
/// stale timer completions detectable.
#[derive(Debug, Default)]
pub struct AnalysisSession {
    state: AnalysisState,
    generation: u64,
}

impl AnalysisSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &AnalysisState {
        &self.state
    }

    pub fn image(&self) -> Option<&UploadedImage> {
        match &self.state {
            AnalysisState::Idle => None,
            AnalysisState::Ready { image }
            | AnalysisState::Busy { image }
            | AnalysisState::Settled { image, .. } => Some(image),
        }
    }

    pub fn result(&self) -> Option<&DiseaseResult> {
        match &self.state {
            AnalysisState::Settled { result, .. } => Some(result),
            _ => None,
        }
    }

    pub fn is_busy(&self) -> bool {
        matches!(self.state, AnalysisState::Busy { .. })
    }

    /// Replace the current image wholesale. Clears any result and invalidates
    /// any in-flight analysis, whatever state the session was in.
    pub fn publish_image(&mut self, image: UploadedImage) {
        self.generation += 1;
        self.state = AnalysisState::Ready { image };
    }

    /// Move `Ready`/`Settled` into `Busy` and mint the ticket the eventual
    /// completion must present. `Idle` and `Busy` leave the session untouched.
    pub fn begin_analysis(&mut self) -> Result<AnalysisTicket, AnalyzeError> {
        match std::mem::take(&mut self.state) {
            AnalysisState::Idle => Err(AnalyzeError::ImageRequired),
            AnalysisState::Busy { image } => {
                self.state = AnalysisState::Busy { image };
                Err(AnalyzeError::AlreadyRunning)
            }
            AnalysisState::Ready { image } | AnalysisState::Settled { image, .. } => {
                self.generation += 1;
                self.state = AnalysisState::Busy { image };
                Ok(AnalysisTicket(self.generation))
            }
        }
    }

    /// Settle the session with `result`, unless the ticket went stale (the
    /// image was replaced or a newer run superseded this one).
    pub fn complete_analysis(
        &mut self,
        ticket: AnalysisTicket,
        result: DiseaseResult,
    ) -> Completion {
        if ticket.0 != self.generation {
            return Completion::Discarded;
        }
        match std::mem::take(&mut self.state) {
            AnalysisState::Busy { image } => {
                self.state = AnalysisState::Settled { image, result };
                Completion::Settled
            }
            other => {
                self.state = other;
                Completion::Discarded
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::catalog;

    fn image(name: &str) -> UploadedImage {
        UploadedImage::new(name, 1024, "data:image/png;base64,AAAA")
    }

    fn some_result() -> DiseaseResult {
        catalog()[0].clone()
    }

    #[test]
    fn starts_idle_with_nothing_published() {
        let session = AnalysisSession::new();
        assert_eq!(*session.state(), AnalysisState::Idle);
        assert!(session.image().is_none());
        assert!(session.result().is_none());
    }

    #[test]
    fn publishing_an_image_moves_idle_to_ready() {
        let mut session = AnalysisSession::new();
        session.publish_image(image("leaf.jpg"));

        assert!(matches!(session.state(), AnalysisState::Ready { .. }));
        assert_eq!(session.image().unwrap().name(), "leaf.jpg");
    }

    #[test]
    fn analyze_without_an_image_is_rejected_and_stays_idle() {
        let mut session = AnalysisSession::new();
        let err = session.begin_analysis().unwrap_err();

        assert_eq!(err, AnalyzeError::ImageRequired);
        assert_eq!(err.to_string(), "Please upload an image first");
        assert_eq!(*session.state(), AnalysisState::Idle);
    }

    #[test]
    fn a_full_run_settles_with_the_delivered_result() {
        let mut session = AnalysisSession::new();
        session.publish_image(image("leaf.jpg"));

        let ticket = session.begin_analysis().unwrap();
        assert!(session.is_busy());
        assert!(session.result().is_none());

        let completion = session.complete_analysis(ticket, some_result());
        assert_eq!(completion, Completion::Settled);
        assert!(!session.is_busy());
        assert_eq!(session.result(), Some(&some_result()));
        assert_eq!(session.image().unwrap().name(), "leaf.jpg");
    }

    #[test]
    fn analyze_while_busy_is_a_no_op() {
        let mut session = AnalysisSession::new();
        session.publish_image(image("leaf.jpg"));
        let ticket = session.begin_analysis().unwrap();

        assert_eq!(session.begin_analysis(), Err(AnalyzeError::AlreadyRunning));
        assert!(session.is_busy());

        // The original run's ticket is still the live one.
        assert_eq!(session.complete_analysis(ticket, some_result()), Completion::Settled);
    }

    #[test]
    fn re_analyzing_a_settled_session_clears_the_prior_result() {
        let mut session = AnalysisSession::new();
        session.publish_image(image("leaf.jpg"));
        let ticket = session.begin_analysis().unwrap();
        let _ = session.complete_analysis(ticket, some_result());

        let ticket = session.begin_analysis().unwrap();
        assert!(session.is_busy());
        assert!(session.result().is_none());

        assert_eq!(
            session.complete_analysis(ticket, catalog()[2].clone()),
            Completion::Settled
        );
        assert_eq!(session.result(), Some(&catalog()[2]));
    }

    #[test]
    fn replacing_the_image_clears_a_settled_result() {
        let mut session = AnalysisSession::new();
        session.publish_image(image("first.jpg"));
        let ticket = session.begin_analysis().unwrap();
        let _ = session.complete_analysis(ticket, some_result());

        session.publish_image(image("second.jpg"));

        assert!(matches!(session.state(), AnalysisState::Ready { .. }));
        assert!(session.result().is_none());
        assert_eq!(session.image().unwrap().name(), "second.jpg");
    }

    #[test]
    fn replacing_the_image_mid_flight_invalidates_the_ticket() {
        let mut session = AnalysisSession::new();
        session.publish_image(image("first.jpg"));
        let stale = session.begin_analysis().unwrap();

        session.publish_image(image("second.jpg"));

        assert_eq!(session.complete_analysis(stale, some_result()), Completion::Discarded);
        assert!(matches!(session.state(), AnalysisState::Ready { .. }));
        assert!(session.result().is_none());
        assert_eq!(session.image().unwrap().name(), "second.jpg");
    }

    #[test]
    fn tickets_from_superseded_runs_never_settle() {
        let mut session = AnalysisSession::new();
        session.publish_image(image("leaf.jpg"));
        let first = session.begin_analysis().unwrap();
        let _ = session.complete_analysis(first, some_result());

        let second = session.begin_analysis().unwrap();
        assert_eq!(session.complete_analysis(first, some_result()), Completion::Discarded);
        assert!(session.is_busy());
        assert_eq!(
            session.complete_analysis(second, catalog()[1].clone()),
            Completion::Settled
        );
        assert_eq!(session.result(), Some(&catalog()[1]));
    }
}
