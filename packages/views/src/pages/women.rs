//! Crimes against women: ranked distribution by crime type for a selected
//! year and state.

use legal_portal_api_models::CrimeTotals;
use legal_portal_client::{ClientError, RemoteDataSource};

use crate::derive::{DerivedCrimeEntry, Ranking, WOMEN_PALETTE, derive_entries, top_n};
use crate::orchestrator::{
    Applied, DependentFetch, FetchTicket, FilterOptions, FilterSelection, LoadingState,
};

/// Number of crimes shown in the headline bar chart.
pub const TOP_CRIMES: usize = 3;

/// Fetches crime totals for `ticket`.
///
/// # Errors
///
/// Returns [`ClientError`] if the request fails.
pub async fn fetch_totals(
    source: &dyn RemoteDataSource,
    ticket: &FetchTicket,
) -> Result<CrimeTotals, ClientError> {
    source
        .women_dashboard(ticket.year(), ticket.state())
        .await
        .map(|d| d.crime_totals)
}

/// Controller for the women crime analytics page.
#[derive(Debug, Default)]
pub struct WomenAnalyticsPage {
    options: FilterOptions,
    totals: DependentFetch<CrimeTotals>,
}

impl WomenAnalyticsPage {
    /// Loads filter options, selects the first year and state, and loads
    /// totals for that selection.
    pub async fn load(&mut self, source: &dyn RemoteDataSource) {
        let selection = self.load_options(source).await;
        self.select(source, selection).await;
    }

    /// Loads filter options only and returns the default selection,
    /// leaving the caller to adjust it before the first [`Self::select`].
    pub async fn load_options(&mut self, source: &dyn RemoteDataSource) -> FilterSelection {
        self.options.begin();
        let reference = source
            .women_reference()
            .await
            .map(|r| (r.available_years, r.available_states));
        self.options.apply(reference)
    }

    /// Changes the selection and loads totals for it.
    pub async fn select(&mut self, source: &dyn RemoteDataSource, filter: FilterSelection) {
        if let Some(ticket) = self.begin_select(filter) {
            let result = fetch_totals(source, &ticket).await;
            self.finish_select(&ticket, result);
        }
    }

    /// Records a new selection; returns a ticket if totals should be
    /// fetched.
    pub fn begin_select(&mut self, filter: FilterSelection) -> Option<FetchTicket> {
        self.totals.select(filter)
    }

    /// Applies fetched totals if `ticket` is still current.
    pub fn finish_select(
        &mut self,
        ticket: &FetchTicket,
        result: Result<CrimeTotals, ClientError>,
    ) -> Applied {
        self.totals.apply(ticket, result)
    }

    /// Filter options.
    #[must_use]
    pub const fn options(&self) -> &FilterOptions {
        &self.options
    }

    /// Current selection.
    #[must_use]
    pub const fn filter(&self) -> &FilterSelection {
        self.totals.filter()
    }

    /// Selection the shown totals belong to, if any are shown.
    #[must_use]
    pub fn shown_filter(&self) -> Option<&FilterSelection> {
        self.totals.data_filter()
    }

    /// Page-level state: a failed option load is reported until a
    /// selection is requested.
    #[must_use]
    pub fn state(&self) -> &LoadingState {
        match (self.options.state(), self.totals.state()) {
            (options @ LoadingState::Errored { .. }, LoadingState::Idle) => options,
            (_, totals) => totals,
        }
    }

    /// All positive crime counts, largest first.
    #[must_use]
    pub fn ranked(&self) -> Vec<DerivedCrimeEntry> {
        self.totals
            .data()
            .map(|t| derive_entries(t, Ranking::Descending, WOMEN_PALETTE))
            .unwrap_or_default()
    }

    /// The [`TOP_CRIMES`] largest crime counts.
    #[must_use]
    pub fn top_crimes(&self) -> Vec<DerivedCrimeEntry> {
        top_n(&self.ranked(), TOP_CRIMES).to_vec()
    }
}
