//! reqwest-backed [`RemoteDataSource`].

use async_trait::async_trait;
use legal_portal_api_models::{
    AwarenessContent, CaseDetails, CrimeSummaryRow, DashboardRecords, DistrictRow,
    ExplainRequest, ExplainedSection, Faq, HealthStatus, Helpline, IpcDashboard, IpcSection,
    JudgmentAnswer, JudgmentQuery, PredictionResult, WomenDashboard, WomenReference,
};

use crate::request::send_json;
use crate::{ClientConfig, ClientError, RemoteDataSource};

/// Talks to the backend over HTTP.
pub struct HttpDataSource {
    config: ClientConfig,
    client: reqwest::Client,
}

impl HttpDataSource {
    /// Creates a client whose requests all share the configured timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the underlying HTTP client cannot
    /// be built.
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;
        Ok(Self { config, client })
    }

    /// The configuration this client was built with.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn get(&self, path: &str) -> reqwest::RequestBuilder {
        let url = self.config.endpoint(path);
        log::debug!("GET {url}");
        self.client.get(url)
    }

    fn post(&self, path: &str) -> reqwest::RequestBuilder {
        let url = self.config.endpoint(path);
        log::debug!("POST {url}");
        self.client.post(url)
    }

    fn filtered(&self, path: &str, year: i32, state: &str) -> reqwest::RequestBuilder {
        self.get(path)
            .query(&[("year", year.to_string().as_str()), ("state", state)])
    }
}

#[async_trait]
impl RemoteDataSource for HttpDataSource {
    async fn predict_case(&self, details: &CaseDetails) -> Result<PredictionResult, ClientError> {
        send_json(self.post("/api/case/predict").json(details)).await
    }

    async fn crime_summary(&self) -> Result<Vec<CrimeSummaryRow>, ClientError> {
        send_json(self.get("/api/crime/summary")).await
    }

    async fn search_sections(&self, query: &str) -> Result<Vec<IpcSection>, ClientError> {
        send_json(self.get("/api/ipc/assistant/search").query(&[("q", query)])).await
    }

    async fn explain_section(&self, section: &str) -> Result<ExplainedSection, ClientError> {
        let body = ExplainRequest {
            section: section.to_string(),
        };
        send_json(self.post("/api/ipc/assistant/explain").json(&body)).await
    }

    async fn ipc_records(&self) -> Result<DashboardRecords, ClientError> {
        send_json(self.get("/api/ipc/records")).await
    }

    async fn ipc_dashboard(&self, year: i32, state: &str) -> Result<IpcDashboard, ClientError> {
        send_json(self.filtered("/api/ipc/dashboard", year, state)).await
    }

    async fn ipc_districts(
        &self,
        year: i32,
        state: &str,
    ) -> Result<Vec<DistrictRow>, ClientError> {
        send_json(self.filtered("/api/ipc/districts", year, state)).await
    }

    async fn women_reference(&self) -> Result<WomenReference, ClientError> {
        send_json(self.get("/api/women/dashboard")).await
    }

    async fn women_dashboard(
        &self,
        year: i32,
        state: &str,
    ) -> Result<WomenDashboard, ClientError> {
        send_json(self.filtered("/api/women/dashboard", year, state)).await
    }

    async fn query_judgments(&self, question: &str) -> Result<JudgmentAnswer, ClientError> {
        let body = JudgmentQuery {
            question: question.to_string(),
        };
        send_json(self.post("/api/sc/query").json(&body)).await
    }

    async fn legal_awareness(&self) -> Result<AwarenessContent, ClientError> {
        send_json(self.get("/api/legal-awareness")).await
    }

    async fn legal_faqs(&self) -> Result<Vec<Faq>, ClientError> {
        send_json(self.get("/api/legal-faqs")).await
    }

    async fn helplines(&self) -> Result<Vec<Helpline>, ClientError> {
        send_json(self.get("/api/helplines")).await
    }

    async fn health(&self) -> Result<HealthStatus, ClientError> {
        send_json(self.get("/api/health")).await
    }
}
