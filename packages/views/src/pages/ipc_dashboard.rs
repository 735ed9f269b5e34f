//! IPC crime trends: district ranking and crime-type distribution for a
//! selected year and state.

use legal_portal_api_models::{CrimeTotals, DistrictRow};
use legal_portal_client::{ClientError, RemoteDataSource};

use crate::derive::{DerivedCrimeEntry, IPC_PALETTE, Ranking, derive_entries, top_districts};
use crate::orchestrator::{
    Applied, DependentFetch, FetchTicket, FilterOptions, FilterSelection, LoadingState,
};

/// Number of districts shown in the bar chart.
pub const TOP_DISTRICTS: usize = 10;

/// Dashboard and district data for one selection. Both requests must
/// succeed for either to be shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IpcAnalytics {
    /// Case counts per IPC crime head.
    pub crime_totals: CrimeTotals,
    /// Districts ranked by total IPC crimes.
    pub districts: Vec<DistrictRow>,
}

/// Fetches dashboard totals and districts for `ticket` concurrently.
///
/// # Errors
///
/// Returns the first [`ClientError`] from either request.
pub async fn fetch_analytics(
    source: &dyn RemoteDataSource,
    ticket: &FetchTicket,
) -> Result<IpcAnalytics, ClientError> {
    let (dashboard, districts) = futures::try_join!(
        source.ipc_dashboard(ticket.year(), ticket.state()),
        source.ipc_districts(ticket.year(), ticket.state()),
    )?;
    Ok(IpcAnalytics {
        crime_totals: dashboard.crime_totals,
        districts,
    })
}

/// Controller for the IPC crime trends dashboard.
#[derive(Debug, Default)]
pub struct IpcDashboardPage {
    options: FilterOptions,
    analytics: DependentFetch<IpcAnalytics>,
}

impl IpcDashboardPage {
    /// Loads filter options, selects the first year and state, and loads
    /// analytics for that selection.
    pub async fn load(&mut self, source: &dyn RemoteDataSource) {
        let selection = self.load_options(source).await;
        self.select(source, selection).await;
    }

    /// Loads filter options only and returns the default selection,
    /// leaving the caller to adjust it before the first [`Self::select`].
    pub async fn load_options(&mut self, source: &dyn RemoteDataSource) -> FilterSelection {
        self.options.begin();
        let records = source
            .ipc_records()
            .await
            .map(|r| (r.available_years, r.available_states));
        self.options.apply(records)
    }

    /// Changes the selection and loads analytics for it.
    pub async fn select(&mut self, source: &dyn RemoteDataSource, filter: FilterSelection) {
        if let Some(ticket) = self.begin_select(filter) {
            let result = fetch_analytics(source, &ticket).await;
            self.finish_select(&ticket, result);
        }
    }

    /// Records a new selection; returns a ticket if analytics should be
    /// fetched.
    pub fn begin_select(&mut self, filter: FilterSelection) -> Option<FetchTicket> {
        self.analytics.select(filter)
    }

    /// Applies fetched analytics if `ticket` is still current.
    pub fn finish_select(
        &mut self,
        ticket: &FetchTicket,
        result: Result<IpcAnalytics, ClientError>,
    ) -> Applied {
        self.analytics.apply(ticket, result)
    }

    /// Filter options.
    #[must_use]
    pub const fn options(&self) -> &FilterOptions {
        &self.options
    }

    /// Current selection.
    #[must_use]
    pub const fn filter(&self) -> &FilterSelection {
        self.analytics.filter()
    }

    /// Selection the shown analytics belong to, if any are shown.
    #[must_use]
    pub fn shown_filter(&self) -> Option<&FilterSelection> {
        self.analytics.data_filter()
    }

    /// Page-level state: a failed option load is reported until a
    /// selection is requested.
    #[must_use]
    pub fn state(&self) -> &LoadingState {
        match (self.options.state(), self.analytics.state()) {
            (options @ LoadingState::Errored { .. }, LoadingState::Idle) => options,
            (_, analytics) => analytics,
        }
    }

    /// Crime-type distribution in payload order, zero counts removed.
    #[must_use]
    pub fn distribution(&self) -> Vec<DerivedCrimeEntry> {
        self.analytics
            .data()
            .map(|a| derive_entries(&a.crime_totals, Ranking::Insertion, IPC_PALETTE))
            .unwrap_or_default()
    }

    /// Top districts for the bar chart.
    #[must_use]
    pub fn top_districts(&self) -> &[DistrictRow] {
        self.analytics
            .data()
            .map(|a| top_districts(&a.districts, TOP_DISTRICTS))
            .unwrap_or_default()
    }
}
