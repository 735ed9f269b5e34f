//! IPC assistant: section search and plain-language explanations.

use legal_portal_api_models::{ExplainedSection, IpcSection};
use legal_portal_client::RemoteDataSource;

use crate::orchestrator::{LoadingState, OnDemandQuery};

/// Controller for the IPC assistant page.
///
/// A search replaces the previous results and closes any open
/// explanation; explaining a section shows it in place of the results.
#[derive(Debug, Default)]
pub struct IpcAssistantPage {
    search: OnDemandQuery<Vec<IpcSection>>,
    explanation: OnDemandQuery<ExplainedSection>,
}

impl IpcAssistantPage {
    /// Searches sections by number, title or text. Blank queries are
    /// ignored; returns whether a request was made.
    pub async fn search(&mut self, source: &dyn RemoteDataSource, query: &str) -> bool {
        let Some(ticket) = self.search.submit(query) else {
            return false;
        };
        self.explanation.clear();
        let result = source.search_sections(ticket.input()).await;
        self.search.apply(&ticket, result);
        true
    }

    /// Requests the explanation for one section. Blank section numbers
    /// are ignored; returns whether a request was made.
    pub async fn explain(&mut self, source: &dyn RemoteDataSource, section: &str) -> bool {
        let Some(ticket) = self.explanation.submit(section) else {
            return false;
        };
        let result = source.explain_section(ticket.input()).await;
        self.explanation.apply(&ticket, result);
        true
    }

    /// Closes the explanation and returns to the result list.
    pub fn back_to_results(&mut self) {
        self.explanation.clear();
    }

    /// Search results, hidden while an explanation is open or loading.
    #[must_use]
    pub fn results(&self) -> &[IpcSection] {
        if self.explanation_open() {
            return &[];
        }
        self.search.result().map(Vec::as_slice).unwrap_or_default()
    }

    /// The open explanation, if any.
    #[must_use]
    pub const fn explanation(&self) -> Option<&ExplainedSection> {
        self.explanation.result()
    }

    /// Page-level state: the explanation request while one is open,
    /// otherwise the search.
    #[must_use]
    pub fn state(&self) -> &LoadingState {
        if self.explanation_open() {
            self.explanation.state()
        } else {
            self.search.state()
        }
    }

    fn explanation_open(&self) -> bool {
        !matches!(self.explanation.state(), LoadingState::Idle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::fake::FakeSource;

    fn section(number: &str, title: &str) -> IpcSection {
        IpcSection {
            section: number.to_string(),
            title: title.to_string(),
            law_text: format!("Whoever commits {title} shall be punished."),
        }
    }

    fn source() -> FakeSource {
        FakeSource {
            sections: vec![
                section("302", "Murder"),
                section("379", "Theft"),
                section("380", "Theft in dwelling house"),
            ],
            ..FakeSource::default()
        }
    }

    #[tokio::test]
    async fn blank_search_issues_no_request() {
        let source = source();
        let mut page = IpcAssistantPage::default();

        assert!(!page.search(&source, "   ").await);

        assert_eq!(source.calls(), 0);
        assert_eq!(page.state(), &LoadingState::Idle);
    }

    #[tokio::test]
    async fn search_then_explain_then_search_again() {
        let source = source();
        let mut page = IpcAssistantPage::default();

        page.search(&source, "theft").await;
        assert_eq!(page.results().len(), 2);

        page.explain(&source, "379").await;
        assert!(page.results().is_empty());
        assert_eq!(page.explanation().map(|e| e.title.as_str()), Some("Theft"));

        page.search(&source, "murder").await;
        assert!(page.explanation().is_none());
        assert_eq!(page.results()[0].section, "302");
    }

    #[tokio::test]
    async fn unknown_section_shows_backend_message() {
        let source = source();
        let mut page = IpcAssistantPage::default();

        page.explain(&source, "9999").await;

        assert_eq!(page.state().error(), Some("Section not found"));
        assert!(page.explanation().is_none());
    }

    #[tokio::test]
    async fn back_to_results_restores_list() {
        let source = source();
        let mut page = IpcAssistantPage::default();
        page.search(&source, "theft").await;
        page.explain(&source, "380").await;

        page.back_to_results();

        assert_eq!(page.results().len(), 2);
        assert_eq!(page.state(), &LoadingState::Loaded);
    }
}
