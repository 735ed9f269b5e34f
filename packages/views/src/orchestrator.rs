//! Fetch orchestration state machines.
//!
//! A page never awaits a request while holding its own state. Instead it
//! asks one of these machines for a ticket, performs the request with no
//! borrow on the page, and hands the result back together with the
//! ticket. The machine applies the result only if the ticket is still the
//! latest one issued, so a slow response for a superseded filter or query
//! is discarded instead of overwriting newer data.

use legal_portal_client::ClientError;

/// Which view a page should render for one fetch sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadingState {
    /// Nothing requested yet (or the request inputs are incomplete).
    #[default]
    Idle,
    /// A request is in flight.
    Loading,
    /// The latest request succeeded.
    Loaded,
    /// The latest request failed.
    Errored {
        /// Inline message for the user.
        message: String,
    },
}

impl LoadingState {
    /// Whether a request is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// The error message, if the latest request failed.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Errored { message } => Some(message.as_str()),
            _ => None,
        }
    }

    fn errored(message: impl Into<String>) -> Self {
        Self::Errored {
            message: message.into(),
        }
    }
}

/// The (year, state) pair that drives dependent analytics queries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FilterSelection {
    /// Selected year.
    pub year: Option<i32>,
    /// Selected state/UT.
    pub state: Option<String>,
}

impl FilterSelection {
    /// Creates a fully populated selection.
    #[must_use]
    pub fn new(year: i32, state: impl Into<String>) -> Self {
        Self {
            year: Some(year),
            state: Some(state.into()),
        }
    }

    /// Returns `(year, state)` when both are set and the state is not
    /// blank.
    #[must_use]
    pub fn complete(&self) -> Option<(i32, &str)> {
        let year = self.year?;
        let state = self.state.as_deref()?;
        if state.trim().is_empty() {
            return None;
        }
        Some((year, state))
    }

    /// Whether both fields are populated.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.complete().is_some()
    }
}

/// Available filter values and the outcome of loading them.
#[derive(Debug, Clone, Default)]
pub struct FilterOptions {
    years: Vec<i32>,
    states: Vec<String>,
    state: LoadingState,
}

impl FilterOptions {
    /// Marks the reference request as in flight.
    pub fn begin(&mut self) {
        self.state = LoadingState::Loading;
    }

    /// Applies the reference response and returns the default selection:
    /// the first year and the first state, each `None` when its list is
    /// empty. On failure the lists stay empty and the default selection
    /// is empty too; nothing is retried.
    pub fn apply(
        &mut self,
        result: Result<(Vec<i32>, Vec<String>), ClientError>,
    ) -> FilterSelection {
        match result {
            Ok((years, states)) => {
                self.years = years;
                self.states = states;
                self.state = LoadingState::Loaded;
                FilterSelection {
                    year: self.years.first().copied(),
                    state: self.states.first().cloned(),
                }
            }
            Err(e) => {
                log::warn!("Failed to load filter options: {e}");
                self.years.clear();
                self.states.clear();
                self.state = LoadingState::errored(e.user_message());
                FilterSelection::default()
            }
        }
    }

    /// Selectable years.
    #[must_use]
    pub fn years(&self) -> &[i32] {
        &self.years
    }

    /// Selectable states.
    #[must_use]
    pub fn states(&self) -> &[String] {
        &self.states
    }

    /// Outcome of the reference request.
    #[must_use]
    pub const fn state(&self) -> &LoadingState {
        &self.state
    }
}

/// Proof that a dependent request was issued for a particular selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    year: i32,
    state: String,
    generation: u64,
}

impl FetchTicket {
    /// Year to request.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// State to request.
    #[must_use]
    pub fn state(&self) -> &str {
        &self.state
    }

    fn matches(&self, filter: &FilterSelection) -> bool {
        filter.complete() == Some((self.year, self.state.as_str()))
    }
}

/// Whether a response was applied or thrown away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    /// The response belonged to the current request and was applied.
    Current,
    /// A newer request superseded this one; the response was discarded.
    Stale,
}

/// Data that depends on a [`FilterSelection`].
#[derive(Debug, Clone)]
pub struct DependentFetch<T> {
    filter: FilterSelection,
    generation: u64,
    state: LoadingState,
    /// Latest applied payload, tagged with the selection it was fetched for.
    data: Option<(FilterSelection, T)>,
}

impl<T> Default for DependentFetch<T> {
    fn default() -> Self {
        Self {
            filter: FilterSelection::default(),
            generation: 0,
            state: LoadingState::Idle,
            data: None,
        }
    }
}

impl<T> DependentFetch<T> {
    /// Changes the selection.
    ///
    /// Every call supersedes any request still in flight. If the new
    /// selection is incomplete the previous data is cleared and no request
    /// should be made (`None`). Otherwise the state becomes
    /// [`LoadingState::Loading`] and the returned ticket must accompany the
    /// request's result to [`Self::apply`]. Data from the previous
    /// selection stays visible until it is replaced.
    pub fn select(&mut self, filter: FilterSelection) -> Option<FetchTicket> {
        self.generation += 1;
        self.filter = filter;

        let Some((year, state)) = self.filter.complete() else {
            self.data = None;
            self.state = LoadingState::Idle;
            return None;
        };

        self.state = LoadingState::Loading;
        Some(FetchTicket {
            year,
            state: state.to_string(),
            generation: self.generation,
        })
    }

    /// Changes only the year.
    pub fn select_year(&mut self, year: i32) -> Option<FetchTicket> {
        let filter = FilterSelection {
            year: Some(year),
            ..self.filter.clone()
        };
        self.select(filter)
    }

    /// Changes only the state.
    pub fn select_state(&mut self, state: impl Into<String>) -> Option<FetchTicket> {
        let filter = FilterSelection {
            state: Some(state.into()),
            ..self.filter.clone()
        };
        self.select(filter)
    }

    /// Applies a response if `ticket` is still the latest request for the
    /// current selection; otherwise discards it and leaves all state
    /// untouched. A failure keeps whatever data was already shown.
    pub fn apply(&mut self, ticket: &FetchTicket, result: Result<T, ClientError>) -> Applied {
        if ticket.generation != self.generation || !ticket.matches(&self.filter) {
            log::debug!(
                "Discarding stale response for {} {} (current: {:?})",
                ticket.year,
                ticket.state,
                self.filter
            );
            return Applied::Stale;
        }

        match result {
            Ok(data) => {
                self.data = Some((self.filter.clone(), data));
                self.state = LoadingState::Loaded;
            }
            Err(e) => {
                log::warn!("Request for {} {} failed: {e}", ticket.year, ticket.state);
                self.state = LoadingState::errored(e.user_message());
            }
        }
        Applied::Current
    }

    /// The current selection.
    #[must_use]
    pub const fn filter(&self) -> &FilterSelection {
        &self.filter
    }

    /// The current loading state.
    #[must_use]
    pub const fn state(&self) -> &LoadingState {
        &self.state
    }

    /// The most recently applied data.
    #[must_use]
    pub fn data(&self) -> Option<&T> {
        self.data.as_ref().map(|(_, data)| data)
    }

    /// The selection [`Self::data`] was fetched for. Differs from
    /// [`Self::filter`] while a newer selection is loading or after it
    /// failed.
    #[must_use]
    pub fn data_filter(&self) -> Option<&FilterSelection> {
        self.data.as_ref().map(|(filter, _)| filter)
    }
}

/// Proof that an on-demand request was issued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryTicket {
    input: String,
    generation: u64,
}

impl QueryTicket {
    /// The trimmed user input to send.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

/// A request triggered by an explicit user submission.
///
/// Exactly one result is shown at a time: each submission clears the
/// previous result, and only the latest submission's response is applied.
#[derive(Debug, Clone)]
pub struct OnDemandQuery<T> {
    generation: u64,
    state: LoadingState,
    result: Option<T>,
}

impl<T> Default for OnDemandQuery<T> {
    fn default() -> Self {
        Self {
            generation: 0,
            state: LoadingState::Idle,
            result: None,
        }
    }
}

impl<T> OnDemandQuery<T> {
    /// Submits free-text input. Empty or whitespace-only input is ignored:
    /// no ticket is issued and nothing changes.
    pub fn submit(&mut self, input: &str) -> Option<QueryTicket> {
        let input = input.trim();
        if input.is_empty() {
            return None;
        }
        Some(self.begin(input))
    }

    /// Starts a request whose input has already been validated.
    pub fn begin(&mut self, input: impl Into<String>) -> QueryTicket {
        self.generation += 1;
        self.result = None;
        self.state = LoadingState::Loading;
        QueryTicket {
            input: input.into(),
            generation: self.generation,
        }
    }

    /// Applies the response for `ticket` if it is the latest submission.
    pub fn apply(&mut self, ticket: &QueryTicket, result: Result<T, ClientError>) -> Applied {
        match result {
            Ok(value) => self.resolve(ticket, Ok(value)),
            Err(e) => {
                log::warn!("Query {:?} failed: {e}", ticket.input);
                self.resolve(ticket, Err(e.user_message()))
            }
        }
    }

    /// Fails the latest submission with a domain-level message.
    pub fn reject(&mut self, ticket: &QueryTicket, message: impl Into<String>) -> Applied {
        self.resolve(ticket, Err(message.into()))
    }

    fn resolve(&mut self, ticket: &QueryTicket, outcome: Result<T, String>) -> Applied {
        if ticket.generation != self.generation {
            log::debug!("Discarding superseded result for {:?}", ticket.input);
            return Applied::Stale;
        }
        match outcome {
            Ok(value) => {
                self.result = Some(value);
                self.state = LoadingState::Loaded;
            }
            Err(message) => {
                self.result = None;
                self.state = LoadingState::errored(message);
            }
        }
        Applied::Current
    }

    /// Forgets the current result without issuing a request.
    pub fn clear(&mut self) {
        self.generation += 1;
        self.result = None;
        self.state = LoadingState::Idle;
    }

    /// The current loading state.
    #[must_use]
    pub const fn state(&self) -> &LoadingState {
        &self.state
    }

    /// The result of the latest successful submission.
    #[must_use]
    pub const fn result(&self) -> Option<&T> {
        self.result.as_ref()
    }
}
