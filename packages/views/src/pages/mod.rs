//! One controller per portal page.
//!
//! Controllers own their state exclusively. Long-running work is split
//! into a synchronous `begin_*` step that returns a ticket, a free `fetch_*`
//! function that performs the request without borrowing the page, and a
//! synchronous `finish_*` step that applies the result. The convenience
//! `async` methods chain the three for callers that handle one interaction
//! at a time.

pub mod assistant;
pub mod awareness;
pub mod ipc_dashboard;
pub mod judgments;
pub mod overview;
pub mod predictor;
pub mod women;

#[cfg(test)]
pub(crate) mod fake;

pub use assistant::IpcAssistantPage;
pub use awareness::LegalAwarenessPage;
pub use ipc_dashboard::{IpcAnalytics, IpcDashboardPage};
pub use judgments::JudgmentExplorerPage;
pub use overview::OverviewPage;
pub use predictor::{CaseForm, CasePredictorPage};
pub use women::WomenAnalyticsPage;
