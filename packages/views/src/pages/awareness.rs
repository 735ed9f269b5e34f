//! Legal awareness: rights by category, FAQs and helplines.

use legal_portal_api_models::{AwarenessContent, AwarenessItem, Faq, Helpline};
use legal_portal_client::{ClientError, RemoteDataSource};

use crate::ViewError;
use crate::derive::split_helplines;
use crate::orchestrator::LoadingState;

/// Controller for the legal awareness page.
///
/// The three sections load independently; a failed section renders empty
/// without affecting the others.
#[derive(Debug, Default)]
pub struct LegalAwarenessPage {
    categories: AwarenessContent,
    faqs: Vec<Faq>,
    helplines: Vec<Helpline>,
    categories_state: LoadingState,
    faqs_state: LoadingState,
    helplines_state: LoadingState,
    selected: Option<String>,
}

fn settle<T: Default>(section: &str, result: Result<T, ClientError>) -> (T, LoadingState) {
    match result {
        Ok(value) => (value, LoadingState::Loaded),
        Err(e) => {
            log::warn!("Failed to load {section}: {e}");
            (
                T::default(),
                LoadingState::Errored {
                    message: e.user_message(),
                },
            )
        }
    }
}

impl LegalAwarenessPage {
    /// Loads all three sections concurrently.
    pub async fn load(&mut self, source: &dyn RemoteDataSource) {
        self.categories_state = LoadingState::Loading;
        self.faqs_state = LoadingState::Loading;
        self.helplines_state = LoadingState::Loading;

        let (categories, faqs, helplines) = futures::join!(
            source.legal_awareness(),
            source.legal_faqs(),
            source.helplines(),
        );

        (self.categories, self.categories_state) = settle("legal awareness content", categories);
        (self.faqs, self.faqs_state) = settle("legal FAQs", faqs);
        (self.helplines, self.helplines_state) = settle("helplines", helplines);

        if self
            .selected
            .as_deref()
            .is_some_and(|name| self.categories.get(name).is_none())
        {
            self.selected = None;
        }
    }

    /// Category names in display order.
    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.categories.keys()
    }

    /// Opens a category.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::UnknownCategory`] if no such category was
    /// loaded; the current selection is kept.
    pub fn select_category(&mut self, name: &str) -> Result<(), ViewError> {
        if self.categories.get(name).is_none() {
            return Err(ViewError::UnknownCategory {
                name: name.to_string(),
            });
        }
        self.selected = Some(name.to_string());
        Ok(())
    }

    /// The open category's name and rights.
    #[must_use]
    pub fn selected_category(&self) -> Option<(&str, &[AwarenessItem])> {
        let name = self.selected.as_deref()?;
        self.categories
            .get(name)
            .map(|items| (name, items.as_slice()))
    }

    /// Frequently asked questions.
    #[must_use]
    pub fn faqs(&self) -> &[Faq] {
        &self.faqs
    }

    /// The nationwide helpline entry, if present.
    #[must_use]
    pub fn national_helplines(&self) -> Option<&Helpline> {
        split_helplines(&self.helplines).0
    }

    /// Per-state helpline entries.
    #[must_use]
    pub fn state_helplines(&self) -> Vec<&Helpline> {
        split_helplines(&self.helplines).1
    }

    /// Loading state of the awareness categories.
    #[must_use]
    pub const fn categories_state(&self) -> &LoadingState {
        &self.categories_state
    }

    /// Loading state of the FAQs.
    #[must_use]
    pub const fn faqs_state(&self) -> &LoadingState {
        &self.faqs_state
    }

    /// Loading state of the helplines.
    #[must_use]
    pub const fn helplines_state(&self) -> &LoadingState {
        &self.helplines_state
    }
}
