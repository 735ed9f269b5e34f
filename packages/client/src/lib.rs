#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Typed client for the legal portal backend.
//!
//! The backend is a plain JSON-over-HTTP service. [`RemoteDataSource`]
//! describes every endpoint the portal consumes; [`HttpDataSource`] is
//! the reqwest-backed implementation. Page controllers depend only on the
//! trait so they can be exercised against in-memory sources.

pub mod config;
pub mod http;
pub mod request;

use async_trait::async_trait;
use legal_portal_api_models::{
    AwarenessContent, CaseDetails, CrimeSummaryRow, DashboardRecords, DistrictRow,
    ExplainedSection, Faq, HealthStatus, Helpline, IpcDashboard, IpcSection, JudgmentAnswer,
    PredictionResult, WomenDashboard, WomenReference,
};

pub use config::{ClientConfig, ConfigError};
pub use http::HttpDataSource;

/// Message shown when the backend cannot be reached at all.
pub const UNREACHABLE_MESSAGE: &str = "Backend not reachable. Please ensure server is running.";

/// Errors that can occur while talking to the backend.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The request could not be sent or the connection failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend did not answer within the configured timeout.
    #[error("Request to {url} timed out")]
    Timeout {
        /// Requested URL.
        url: String,
    },

    /// The backend answered with a non-success status.
    #[error("HTTP {status} from {url}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Requested URL.
        url: String,
        /// Error text from the backend's `{"error": ...}` body, if any.
        message: Option<String>,
    },

    /// The response body was not the expected JSON shape.
    #[error("Unexpected response from {url}: {message}")]
    Decode {
        /// Requested URL.
        url: String,
        /// Parser error.
        message: String,
    },
}

impl ClientError {
    /// Returns the inline message a page shows for this failure.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Http(_) | Self::Timeout { .. } => UNREACHABLE_MESSAGE.to_string(),
            Self::Status {
                message: Some(message),
                ..
            } => message.clone(),
            Self::Status {
                status,
                message: None,
                ..
            } => format!("Request failed (HTTP {status})."),
            Self::Decode { .. } => "Unexpected response from server.".to_string(),
        }
    }
}

/// The backend endpoints consumed by the portal.
#[async_trait]
pub trait RemoteDataSource: Send + Sync {
    /// `POST /api/case/predict`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the response does
    /// not decode.
    async fn predict_case(&self, details: &CaseDetails) -> Result<PredictionResult, ClientError>;

    /// `GET /api/crime/summary`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the response does
    /// not decode.
    async fn crime_summary(&self) -> Result<Vec<CrimeSummaryRow>, ClientError>;

    /// `GET /api/ipc/assistant/search?q=`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the response does
    /// not decode.
    async fn search_sections(&self, query: &str) -> Result<Vec<IpcSection>, ClientError>;

    /// `POST /api/ipc/assistant/explain`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails, the section is
    /// unknown, or the response does not decode.
    async fn explain_section(&self, section: &str) -> Result<ExplainedSection, ClientError>;

    /// `GET /api/ipc/records`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the response does
    /// not decode.
    async fn ipc_records(&self) -> Result<DashboardRecords, ClientError>;

    /// `GET /api/ipc/dashboard?year=&state=`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the response does
    /// not decode.
    async fn ipc_dashboard(&self, year: i32, state: &str) -> Result<IpcDashboard, ClientError>;

    /// `GET /api/ipc/districts?year=&state=`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the response does
    /// not decode.
    async fn ipc_districts(&self, year: i32, state: &str)
    -> Result<Vec<DistrictRow>, ClientError>;

    /// `GET /api/women/dashboard` without filters.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the response does
    /// not decode.
    async fn women_reference(&self) -> Result<WomenReference, ClientError>;

    /// `GET /api/women/dashboard?year=&state=`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the response does
    /// not decode.
    async fn women_dashboard(&self, year: i32, state: &str)
    -> Result<WomenDashboard, ClientError>;

    /// `POST /api/sc/query`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the response does
    /// not decode.
    async fn query_judgments(&self, question: &str) -> Result<JudgmentAnswer, ClientError>;

    /// `GET /api/legal-awareness`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the response does
    /// not decode.
    async fn legal_awareness(&self) -> Result<AwarenessContent, ClientError>;

    /// `GET /api/legal-faqs`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the response does
    /// not decode.
    async fn legal_faqs(&self) -> Result<Vec<Faq>, ClientError>;

    /// `GET /api/helplines`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the response does
    /// not decode.
    async fn helplines(&self) -> Result<Vec<Helpline>, ClientError>;

    /// `GET /api/health`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the response does
    /// not decode.
    async fn health(&self) -> Result<HealthStatus, ClientError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_with_backend_message_surfaces_it() {
        let err = ClientError::Status {
            status: 404,
            url: "http://x/api/ipc/assistant/explain".to_string(),
            message: Some("Section not found".to_string()),
        };
        assert_eq!(err.user_message(), "Section not found");
    }

    #[test]
    fn status_without_message_mentions_code() {
        let err = ClientError::Status {
            status: 500,
            url: "http://x".to_string(),
            message: None,
        };
        assert_eq!(err.user_message(), "Request failed (HTTP 500).");
    }

    #[test]
    fn timeout_reads_as_unreachable() {
        let err = ClientError::Timeout {
            url: "http://x".to_string(),
        };
        assert_eq!(err.user_message(), UNREACHABLE_MESSAGE);
    }
}
