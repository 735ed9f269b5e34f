//! Supreme Court judgment explorer.

use legal_portal_api_models::JudgmentAnswer;
use legal_portal_client::RemoteDataSource;

use crate::orchestrator::{LoadingState, OnDemandQuery};
use crate::safety::{self, GateOutcome, LOW_CONFIDENCE_MESSAGE};

/// Controller for the judgment explorer. Answers below the match
/// threshold are replaced by guidance to rephrase.
#[derive(Debug, Default)]
pub struct JudgmentExplorerPage {
    query: OnDemandQuery<JudgmentAnswer>,
}

impl JudgmentExplorerPage {
    /// Asks a question. Blank questions are ignored; returns whether a
    /// request was made.
    pub async fn ask(&mut self, source: &dyn RemoteDataSource, question: &str) -> bool {
        let Some(ticket) = self.query.submit(question) else {
            return false;
        };

        match source.query_judgments(ticket.input()).await {
            Ok(answer) => match safety::check(answer) {
                GateOutcome::Pass(answer) => {
                    self.query.apply(&ticket, Ok(answer));
                }
                GateOutcome::LowConfidence { .. } => {
                    self.query.reject(&ticket, LOW_CONFIDENCE_MESSAGE);
                }
            },
            Err(e) => {
                self.query.apply(&ticket, Err(e));
            }
        }
        true
    }

    /// The answer to the latest question, if it passed the gate.
    #[must_use]
    pub const fn answer(&self) -> Option<&JudgmentAnswer> {
        self.query.result()
    }

    /// Loading state of the latest question.
    #[must_use]
    pub const fn state(&self) -> &LoadingState {
        self.query.state()
    }
}

#[cfg(test)]
mod tests {
    use legal_portal_api_models::Confidence;

    use super::*;
    use crate::pages::fake::FakeSource;

    fn source(match_percentage: f64) -> FakeSource {
        FakeSource {
            judgment: Some(JudgmentAnswer {
                match_percentage,
                confidence: Confidence::Low,
                case_name: "K v. Union of India".to_string(),
                judgment_date: "2017-08-24".to_string(),
                matched_question: "Is privacy a fundamental right?".to_string(),
                answer: "Yes.".to_string(),
            }),
            ..FakeSource::default()
        }
    }

    #[tokio::test]
    async fn score_of_forty_nine_shows_guidance() {
        let source = source(49.0);
        let mut page = JudgmentExplorerPage::default();

        assert!(page.ask(&source, "is privacy a right").await);

        assert!(page.answer().is_none());
        assert_eq!(page.state().error(), Some(LOW_CONFIDENCE_MESSAGE));
    }

    #[tokio::test]
    async fn score_of_fifty_shows_answer() {
        let source = source(50.0);
        let mut page = JudgmentExplorerPage::default();

        page.ask(&source, "is privacy a right").await;

        assert_eq!(page.state(), &LoadingState::Loaded);
        assert_eq!(
            page.answer().map(|a| a.case_name.as_str()),
            Some("K v. Union of India")
        );
    }

    #[tokio::test]
    async fn blank_question_changes_nothing() {
        let source = source(90.0);
        let mut page = JudgmentExplorerPage::default();

        assert!(!page.ask(&source, "\n ").await);

        assert_eq!(source.calls(), 0);
        assert_eq!(page.state(), &LoadingState::Idle);
    }

    #[tokio::test]
    async fn rejected_question_clears_previous_answer() {
        let mut page = JudgmentExplorerPage::default();
        page.ask(&source(80.0), "privacy").await;
        assert!(page.answer().is_some());

        page.ask(&source(10.0), "parking").await;

        assert!(page.answer().is_none());
    }

    #[tokio::test]
    async fn backend_failure_is_reported_inline() {
        let source = FakeSource::default();
        let mut page = JudgmentExplorerPage::default();

        page.ask(&source, "privacy").await;

        assert_eq!(page.state().error(), Some("unavailable"));
        assert!(page.answer().is_none());
    }
}
