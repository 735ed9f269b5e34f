//! Case outcome predictor (educational prototype).

use legal_portal_api_models::{
    CaseDetails, CaseType, EvidenceStrength, PastRecord, PredictionResult,
};
use legal_portal_client::RemoteDataSource;

use crate::ViewError;
use crate::orchestrator::{LoadingState, OnDemandQuery};

/// User-entered case details before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaseForm {
    /// Kind of case. Required.
    pub case_type: Option<CaseType>,
    /// Relevant IPC section, e.g. `"IPC 420"`.
    pub ipc_section: String,
    /// Summary of the facts. Required.
    pub case_facts_summary: String,
    /// Evidence strength; defaults to moderate.
    pub evidence_strength: EvidenceStrength,
    /// Prior record; defaults to none.
    pub past_record: PastRecord,
}

impl CaseForm {
    /// Checks required fields and builds the request body.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::MissingField`] if the case type or the facts
    /// summary is missing.
    pub fn validate(&self) -> Result<CaseDetails, ViewError> {
        let case_type = self
            .case_type
            .ok_or(ViewError::MissingField { field: "Case type" })?;
        let facts = self.case_facts_summary.trim();
        if facts.is_empty() {
            return Err(ViewError::MissingField {
                field: "Case facts summary",
            });
        }
        Ok(CaseDetails {
            case_type,
            ipc_section: self.ipc_section.trim().to_string(),
            case_facts_summary: facts.to_string(),
            evidence_strength: self.evidence_strength,
            past_record: self.past_record,
        })
    }
}

/// Controller for the case outcome predictor.
#[derive(Debug, Default)]
pub struct CasePredictorPage {
    prediction: OnDemandQuery<PredictionResult>,
}

impl CasePredictorPage {
    /// Validates `form` and requests a prediction. An invalid form makes
    /// no request and leaves the page state untouched.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError`] if the form is incomplete. Backend failures
    /// are reported through [`Self::state`] instead.
    pub async fn predict(
        &mut self,
        source: &dyn RemoteDataSource,
        form: &CaseForm,
    ) -> Result<(), ViewError> {
        let details = form.validate()?;
        let ticket = self.prediction.begin(details.case_facts_summary.clone());
        let result = source.predict_case(&details).await;
        self.prediction.apply(&ticket, result);
        Ok(())
    }

    /// The latest prediction.
    #[must_use]
    pub const fn prediction(&self) -> Option<&PredictionResult> {
        self.prediction.result()
    }

    /// Loading state of the latest prediction request.
    #[must_use]
    pub const fn state(&self) -> &LoadingState {
        self.prediction.state()
    }
}
