//! One handler per page for the scriptable subcommands.
//!
//! Backend failures and rejected answers print as inline notices; only
//! terminal or configuration failures propagate as errors.

use legal_portal_cli_utils::{MultiProgress, with_spinner};
use legal_portal_client::RemoteDataSource;
use legal_portal_views::pages::{
    CaseForm, CasePredictorPage, IpcAssistantPage, IpcDashboardPage, JudgmentExplorerPage,
    LegalAwarenessPage, OverviewPage, WomenAnalyticsPage,
};
use legal_portal_views::{FilterSelection, LoadingState};

use crate::render;

pub(crate) fn print_notice(state: &LoadingState) {
    if let Some(notice) = render::notice(state) {
        println!("{notice}");
    }
}

fn override_filter(
    current: &FilterSelection,
    year: Option<i32>,
    state: Option<String>,
) -> FilterSelection {
    FilterSelection {
        year: year.or(current.year),
        state: state.or_else(|| current.state.clone()),
    }
}

/// Prints the national summary.
pub async fn overview(source: &dyn RemoteDataSource, multi: &MultiProgress) {
    let mut page = OverviewPage::default();
    with_spinner(multi, "Loading crime summary...", page.load(source)).await;

    print_notice(page.state());
    println!("{}", render::overview(page.rows(), page.total_crime_reports()));
}

fn print_filter(current: &FilterSelection, shown: Option<&FilterSelection>) {
    println!("\n{}", render::filter_line(current));
    if let Some(label) = render::shown_for(current, shown) {
        println!("{label}");
    }
}

pub(crate) fn show_ipc_dashboard(page: &IpcDashboardPage) {
    print_filter(page.filter(), page.shown_filter());
    print_notice(page.state());
    println!(
        "{}",
        render::crime_chart("IPC crime distribution", &page.distribution())
    );
    println!("{}", render::district_chart(page.top_districts()));
}

/// Prints the IPC dashboard for `year`/`state`, defaulting each to the
/// first available option.
pub async fn ipc_dashboard(
    source: &dyn RemoteDataSource,
    multi: &MultiProgress,
    year: Option<i32>,
    state: Option<String>,
) {
    let mut page = IpcDashboardPage::default();
    let defaults = with_spinner(multi, "Loading filters...", page.load_options(source)).await;

    let filter = override_filter(&defaults, year, state);
    with_spinner(multi, "Loading IPC dashboard...", page.select(source, filter)).await;

    show_ipc_dashboard(&page);
}

pub(crate) fn show_women(page: &WomenAnalyticsPage) {
    print_filter(page.filter(), page.shown_filter());
    print_notice(page.state());
    println!("{}", render::crime_chart("Top crimes", &page.top_crimes()));
    println!(
        "{}",
        render::crime_chart("All crimes against women", &page.ranked())
    );
}

/// Prints women crime analytics for `year`/`state`, defaulting each to the
/// first available option.
pub async fn women(
    source: &dyn RemoteDataSource,
    multi: &MultiProgress,
    year: Option<i32>,
    state: Option<String>,
) {
    let mut page = WomenAnalyticsPage::default();
    let defaults = with_spinner(multi, "Loading filters...", page.load_options(source)).await;

    let filter = override_filter(&defaults, year, state);
    with_spinner(multi, "Loading women crime analytics...", page.select(source, filter)).await;

    show_women(&page);
}

pub(crate) fn show_assistant(page: &IpcAssistantPage) {
    print_notice(page.state());
    if let Some(explanation) = page.explanation() {
        println!("{}", render::explanation(explanation));
    } else if matches!(page.state(), LoadingState::Loaded) {
        println!("{}", render::section_list(page.results()));
    }
}

/// Searches IPC sections.
pub async fn search(source: &dyn RemoteDataSource, multi: &MultiProgress, query: &str) {
    let mut page = IpcAssistantPage::default();
    if !with_spinner(multi, "Searching...", page.search(source, query)).await {
        println!("Enter a section number or keyword to search.");
        return;
    }
    show_assistant(&page);
}

/// Explains one IPC section.
pub async fn explain(source: &dyn RemoteDataSource, multi: &MultiProgress, section: &str) {
    let mut page = IpcAssistantPage::default();
    if !with_spinner(multi, "Explaining...", page.explain(source, section)).await {
        println!("Enter a section number to explain.");
        return;
    }
    show_assistant(&page);
}

pub(crate) fn show_judgment(page: &JudgmentExplorerPage) {
    print_notice(page.state());
    if let Some(answer) = page.answer() {
        println!("{}", render::judgment(answer));
    }
}

/// Asks the judgment explorer a question.
pub async fn ask(source: &dyn RemoteDataSource, multi: &MultiProgress, question: &str) {
    let mut page = JudgmentExplorerPage::default();
    if !with_spinner(multi, "Searching judgments...", page.ask(source, question)).await {
        println!("Enter a legal question.");
        return;
    }
    show_judgment(&page);
}

/// Requests a case outcome prediction.
pub async fn predict(source: &dyn RemoteDataSource, multi: &MultiProgress, form: &CaseForm) {
    let mut page = CasePredictorPage::default();
    if let Err(e) = with_spinner(multi, "Predicting outcome...", page.predict(source, form)).await {
        println!("⚠ {e}");
        return;
    }

    print_notice(page.state());
    if let Some(prediction) = page.prediction() {
        println!("{}", render::prediction(prediction));
    }
}

pub(crate) fn show_awareness_overview(page: &LegalAwarenessPage) {
    print_notice(page.categories_state());
    let names: Vec<&str> = page.category_names().collect();
    if names.is_empty() {
        println!("No awareness categories available.");
    } else {
        println!("\nCategories: {}", names.join(", "));
    }

    print_notice(page.faqs_state());
    println!("{}", render::faqs(page.faqs()));

    print_notice(page.helplines_state());
    println!(
        "{}",
        render::helplines(page.national_helplines(), &page.state_helplines())
    );
}

pub(crate) fn show_category(page: &LegalAwarenessPage) {
    if let Some((name, items)) = page.selected_category() {
        println!("{}", render::awareness_items(name, items));
    }
}

/// Prints legal awareness content, optionally opening one category.
pub async fn awareness(
    source: &dyn RemoteDataSource,
    multi: &MultiProgress,
    category: Option<&str>,
) {
    let mut page = LegalAwarenessPage::default();
    with_spinner(multi, "Loading legal awareness...", page.load(source)).await;

    match category {
        Some(name) => match page.select_category(name) {
            Ok(()) => show_category(&page),
            Err(e) => println!("⚠ {e}"),
        },
        None => show_awareness_overview(&page),
    }
}

/// Checks the backend's health endpoint.
///
/// # Errors
///
/// Returns the client error if the backend is unreachable or unhealthy.
pub async fn health(
    source: &dyn RemoteDataSource,
    multi: &MultiProgress,
) -> Result<(), Box<dyn std::error::Error>> {
    match with_spinner(multi, "Checking backend...", source.health()).await {
        Ok(status) => {
            println!("{}", render::health(&status));
            Ok(())
        }
        Err(e) => {
            println!("⚠ {}", e.user_message());
            Err(e.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_filter_keeps_unspecified_parts() {
        let current = FilterSelection::new(2019, "Kerala");

        let filter = override_filter(&current, Some(2020), None);

        assert_eq!(filter, FilterSelection::new(2020, "Kerala"));
    }

    #[test]
    fn override_filter_replaces_state() {
        let current = FilterSelection::new(2019, "Kerala");

        let filter = override_filter(&current, None, Some("Goa".to_string()));

        assert_eq!(filter, FilterSelection::new(2019, "Goa"));
    }
}
