//! Landing dashboard: national IPC totals per year.

use legal_portal_api_models::CrimeSummaryRow;
use legal_portal_client::RemoteDataSource;

use crate::derive::total_ipc_crimes;
use crate::orchestrator::LoadingState;

/// Controller for the overview dashboard.
#[derive(Debug, Default)]
pub struct OverviewPage {
    rows: Vec<CrimeSummaryRow>,
    state: LoadingState,
}

impl OverviewPage {
    /// Loads the crime summary. On failure the rows are cleared, so the
    /// total reads as zero alongside the error.
    pub async fn load(&mut self, source: &dyn RemoteDataSource) {
        self.state = LoadingState::Loading;
        match source.crime_summary().await {
            Ok(rows) => {
                self.rows = rows;
                self.state = LoadingState::Loaded;
            }
            Err(e) => {
                log::warn!("Failed to load crime summary: {e}");
                self.rows.clear();
                self.state = LoadingState::Errored {
                    message: e.user_message(),
                };
            }
        }
    }

    /// Per-year summary rows.
    #[must_use]
    pub fn rows(&self) -> &[CrimeSummaryRow] {
        &self.rows
    }

    /// Total crime reports across all rows.
    #[must_use]
    pub fn total_crime_reports(&self) -> i64 {
        total_ipc_crimes(&self.rows)
    }

    /// Loading state of the summary request.
    #[must_use]
    pub const fn state(&self) -> &LoadingState {
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::fake::FakeSource;

    #[tokio::test]
    async fn sums_yearly_totals() {
        let source = FakeSource {
            summary: Some(vec![
                CrimeSummaryRow {
                    year: Some(2019),
                    total_ipc_crimes: 1_000,
                },
                CrimeSummaryRow {
                    year: Some(2020),
                    total_ipc_crimes: 500,
                },
            ]),
            ..FakeSource::default()
        };
        let mut page = OverviewPage::default();

        page.load(&source).await;

        assert_eq!(page.state(), &LoadingState::Loaded);
        assert_eq!(page.total_crime_reports(), 1_500);
    }

    #[tokio::test]
    async fn failure_reports_error_and_zero_total() {
        let source = FakeSource::default();
        let mut page = OverviewPage::default();

        page.load(&source).await;

        assert_eq!(page.state().error(), Some("unavailable"));
        assert_eq!(page.total_crime_reports(), 0);
    }
}
