#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Page controllers for the legal portal.
//!
//! Each page follows the same shape: fetch reference data, fetch
//! dependent data keyed by the user's selection (or run an on-demand query
//! on explicit submission), and derive a render-ready view model. The
//! shared state machines live in [`orchestrator`], the pure view-model
//! functions in [`derive`], and the judgment confidence cutoff in
//! [`safety`].

pub mod derive;
pub mod orchestrator;
pub mod pages;
pub mod safety;

pub use orchestrator::{
    Applied, DependentFetch, FetchTicket, FilterOptions, FilterSelection, LoadingState,
    OnDemandQuery, QueryTicket,
};

/// Errors raised by page input validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ViewError {
    /// A required form field was left empty.
    #[error("{field} is required")]
    MissingField {
        /// Label of the missing field.
        field: &'static str,
    },

    /// The requested awareness category does not exist.
    #[error("Unknown category: {name}")]
    UnknownCategory {
        /// Requested category.
        name: String,
    },
}
