//! In-memory [`RemoteDataSource`] for controller tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use legal_portal_api_models::{
    AwarenessContent, CaseDetails, CrimeSummaryRow, CrimeTotals, DashboardRecords, DistrictRow,
    ExplainedSection, Faq, HealthStatus, Helpline, IpcDashboard, IpcSection, JudgmentAnswer,
    PredictionResult, WomenDashboard, WomenReference,
};
use legal_portal_client::{ClientError, RemoteDataSource};

/// Canned responses. A `None` endpoint answers with HTTP 500.
#[derive(Default)]
pub struct FakeSource {
    pub records: Option<DashboardRecords>,
    pub ipc_totals: HashMap<(i32, String), CrimeTotals>,
    pub districts: HashMap<(i32, String), Vec<DistrictRow>>,
    pub women_reference: Option<WomenReference>,
    pub women_totals: HashMap<(i32, String), CrimeTotals>,
    pub sections: Vec<IpcSection>,
    pub judgment: Option<JudgmentAnswer>,
    pub prediction: Option<PredictionResult>,
    pub summary: Option<Vec<CrimeSummaryRow>>,
    pub awareness: Option<AwarenessContent>,
    pub faqs: Option<Vec<Faq>>,
    pub helplines: Option<Vec<Helpline>>,
    /// Artificial latency for filtered requests, keyed by state.
    pub delays: HashMap<String, Duration>,
    /// Requests served so far; read through [`Self::calls`].
    pub calls: AtomicUsize,
}

pub fn totals(pairs: &[(&str, i64)]) -> CrimeTotals {
    pairs.iter().map(|(k, v)| (*k, *v)).collect()
}

fn unavailable() -> ClientError {
    ClientError::Status {
        status: 500,
        url: "http://fake".to_string(),
        message: Some("unavailable".to_string()),
    }
}

fn canned<T: Clone>(value: Option<&T>) -> Result<T, ClientError> {
    value.cloned().ok_or_else(unavailable)
}

impl FakeSource {
    /// Number of requests served so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn record_call(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }

    async fn delay_for(&self, state: &str) {
        if let Some(delay) = self.delays.get(state) {
            tokio::time::sleep(*delay).await;
        }
    }
}

#[async_trait]
impl RemoteDataSource for FakeSource {
    async fn predict_case(&self, _details: &CaseDetails) -> Result<PredictionResult, ClientError> {
        self.record_call();
        canned(self.prediction.as_ref())
    }

    async fn crime_summary(&self) -> Result<Vec<CrimeSummaryRow>, ClientError> {
        self.record_call();
        canned(self.summary.as_ref())
    }

    async fn search_sections(&self, query: &str) -> Result<Vec<IpcSection>, ClientError> {
        self.record_call();
        let query = query.to_lowercase();
        Ok(self
            .sections
            .iter()
            .filter(|s| {
                s.section.to_lowercase().contains(&query)
                    || s.title.to_lowercase().contains(&query)
                    || s.law_text.to_lowercase().contains(&query)
            })
            .take(5)
            .cloned()
            .collect())
    }

    async fn explain_section(&self, section: &str) -> Result<ExplainedSection, ClientError> {
        self.record_call();
        self.sections
            .iter()
            .find(|s| s.section == section)
            .map(|s| ExplainedSection {
                section: s.section.clone(),
                title: s.title.clone(),
                law_text: s.law_text.clone(),
                simple_explanation: format!("IPC Section {} deals with {}.", s.section, s.title),
            })
            .ok_or_else(|| ClientError::Status {
                status: 404,
                url: "http://fake/api/ipc/assistant/explain".to_string(),
                message: Some("Section not found".to_string()),
            })
    }

    async fn ipc_records(&self) -> Result<DashboardRecords, ClientError> {
        self.record_call();
        canned(self.records.as_ref())
    }

    async fn ipc_dashboard(&self, year: i32, state: &str) -> Result<IpcDashboard, ClientError> {
        self.record_call();
        self.delay_for(state).await;
        canned(self.ipc_totals.get(&(year, state.to_string())))
            .map(|crime_totals| IpcDashboard { crime_totals })
    }

    async fn ipc_districts(
        &self,
        year: i32,
        state: &str,
    ) -> Result<Vec<DistrictRow>, ClientError> {
        self.record_call();
        self.delay_for(state).await;
        canned(self.districts.get(&(year, state.to_string())))
    }

    async fn women_reference(&self) -> Result<WomenReference, ClientError> {
        self.record_call();
        canned(self.women_reference.as_ref())
    }

    async fn women_dashboard(
        &self,
        year: i32,
        state: &str,
    ) -> Result<WomenDashboard, ClientError> {
        self.record_call();
        self.delay_for(state).await;
        let reference = self.women_reference.clone().unwrap_or_default();
        canned(self.women_totals.get(&(year, state.to_string()))).map(|crime_totals| {
            WomenDashboard {
                available_years: reference.available_years,
                available_states: reference.available_states,
                crime_totals,
            }
        })
    }

    async fn query_judgments(&self, _question: &str) -> Result<JudgmentAnswer, ClientError> {
        self.record_call();
        canned(self.judgment.as_ref())
    }

    async fn legal_awareness(&self) -> Result<AwarenessContent, ClientError> {
        self.record_call();
        canned(self.awareness.as_ref())
    }

    async fn legal_faqs(&self) -> Result<Vec<Faq>, ClientError> {
        self.record_call();
        canned(self.faqs.as_ref())
    }

    async fn helplines(&self) -> Result<Vec<Helpline>, ClientError> {
        self.record_call();
        canned(self.helplines.as_ref())
    }

    async fn health(&self) -> Result<HealthStatus, ClientError> {
        self.record_call();
        Err(unavailable())
    }
}
