//! Menu-driven portal browsing using `dialoguer`.

use dialoguer::{Input, Select};
use legal_portal_api_models::{CaseType, EvidenceStrength, PastRecord};
use legal_portal_cli_utils::{MultiProgress, with_spinner};
use legal_portal_client::RemoteDataSource;
use legal_portal_views::pages::{
    CaseForm, IpcAssistantPage, IpcDashboardPage, JudgmentExplorerPage, LegalAwarenessPage,
    WomenAnalyticsPage,
};
use legal_portal_views::{FilterOptions, FilterSelection};
use strum::IntoEnumIterator;

use crate::commands;

type PromptResult<T> = Result<T, Box<dyn std::error::Error>>;

/// Top-level portal pages.
enum Page {
    Overview,
    IpcDashboard,
    WomenAnalytics,
    IpcAssistant,
    Judgments,
    Predictor,
    Awareness,
    Health,
    Quit,
}

impl Page {
    const ALL: &[Self] = &[
        Self::Overview,
        Self::IpcDashboard,
        Self::WomenAnalytics,
        Self::IpcAssistant,
        Self::Judgments,
        Self::Predictor,
        Self::Awareness,
        Self::Health,
        Self::Quit,
    ];

    #[must_use]
    const fn label(&self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::IpcDashboard => "IPC crime dashboard",
            Self::WomenAnalytics => "Crimes against women",
            Self::IpcAssistant => "IPC section assistant",
            Self::Judgments => "Supreme Court judgment explorer",
            Self::Predictor => "Case outcome predictor",
            Self::Awareness => "Legal awareness & helplines",
            Self::Health => "Check backend status",
            Self::Quit => "Quit",
        }
    }
}

/// Actions available on the filtered analytics pages.
enum FilterAction {
    ChangeYear,
    ChangeState,
    Back,
}

impl FilterAction {
    const ALL: &[Self] = &[Self::ChangeYear, Self::ChangeState, Self::Back];

    #[must_use]
    const fn label(&self) -> &'static str {
        match self {
            Self::ChangeYear => "Change year",
            Self::ChangeState => "Change state",
            Self::Back => "Back",
        }
    }
}

/// Runs the interactive portal menu until the user quits.
///
/// # Errors
///
/// Returns an error if a terminal prompt fails.
pub async fn run(source: &dyn RemoteDataSource, multi: &MultiProgress) -> PromptResult<()> {
    let labels: Vec<&str> = Page::ALL.iter().map(Page::label).collect();

    loop {
        println!();
        let idx = Select::new()
            .with_prompt("Where would you like to go?")
            .items(&labels)
            .default(0)
            .interact()?;

        match Page::ALL[idx] {
            Page::Overview => commands::overview(source, multi).await,
            Page::IpcDashboard => ipc_dashboard(source, multi).await?,
            Page::WomenAnalytics => women(source, multi).await?,
            Page::IpcAssistant => assistant(source, multi).await?,
            Page::Judgments => judgments(source, multi).await?,
            Page::Predictor => predictor(source, multi).await?,
            Page::Awareness => awareness(source, multi).await?,
            Page::Health => {
                // Already reported inline; stay in the menu.
                let _ = commands::health(source, multi).await;
            }
            Page::Quit => break,
        }
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Filtered analytics
// ---------------------------------------------------------------------------

/// Prompts for a new filter; `None` means "back".
fn prompt_filter(
    options: &FilterOptions,
    current: &FilterSelection,
) -> PromptResult<Option<FilterSelection>> {
    let labels: Vec<&str> = FilterAction::ALL.iter().map(FilterAction::label).collect();
    let idx = Select::new()
        .with_prompt("Filter")
        .items(&labels)
        .default(0)
        .interact()?;

    let filter = match FilterAction::ALL[idx] {
        FilterAction::ChangeYear => {
            if options.years().is_empty() {
                println!("No years available.");
                return Ok(Some(current.clone()));
            }
            let years: Vec<String> = options.years().iter().map(ToString::to_string).collect();
            let default = current
                .year
                .and_then(|y| options.years().iter().position(|o| *o == y))
                .unwrap_or(0);
            let idx = Select::new()
                .with_prompt("Year")
                .items(&years)
                .default(default)
                .interact()?;
            FilterSelection {
                year: Some(options.years()[idx]),
                ..current.clone()
            }
        }
        FilterAction::ChangeState => {
            if options.states().is_empty() {
                println!("No states available.");
                return Ok(Some(current.clone()));
            }
            let default = current
                .state
                .as_ref()
                .and_then(|s| options.states().iter().position(|o| o == s))
                .unwrap_or(0);
            let idx = Select::new()
                .with_prompt("State")
                .items(options.states())
                .default(default)
                .interact()?;
            FilterSelection {
                state: Some(options.states()[idx].clone()),
                ..current.clone()
            }
        }
        FilterAction::Back => return Ok(None),
    };

    Ok(Some(filter))
}

async fn ipc_dashboard(source: &dyn RemoteDataSource, multi: &MultiProgress) -> PromptResult<()> {
    let mut page = IpcDashboardPage::default();
    with_spinner(multi, "Loading IPC dashboard...", page.load(source)).await;

    loop {
        commands::show_ipc_dashboard(&page);
        let Some(filter) = prompt_filter(page.options(), page.filter())? else {
            return Ok(());
        };
        if &filter != page.filter() {
            with_spinner(multi, "Loading selection...", page.select(source, filter)).await;
        }
    }
}

async fn women(source: &dyn RemoteDataSource, multi: &MultiProgress) -> PromptResult<()> {
    let mut page = WomenAnalyticsPage::default();
    with_spinner(multi, "Loading women crime analytics...", page.load(source)).await;

    loop {
        commands::show_women(&page);
        let Some(filter) = prompt_filter(page.options(), page.filter())? else {
            return Ok(());
        };
        if &filter != page.filter() {
            with_spinner(multi, "Loading selection...", page.select(source, filter)).await;
        }
    }
}

// ---------------------------------------------------------------------------
// On-demand queries
// ---------------------------------------------------------------------------

/// Reads a line of text; empty input is allowed and means "back".
fn prompt_text(prompt: &str) -> PromptResult<String> {
    let text: String = Input::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?;
    Ok(text)
}

async fn assistant(source: &dyn RemoteDataSource, multi: &MultiProgress) -> PromptResult<()> {
    let mut page = IpcAssistantPage::default();

    loop {
        let query = prompt_text("Search IPC sections (empty to go back)")?;
        if !with_spinner(multi, "Searching...", page.search(source, &query)).await {
            return Ok(());
        }
        commands::show_assistant(&page);

        loop {
            let results = page.results();
            if results.is_empty() {
                break;
            }
            let mut labels: Vec<String> = results
                .iter()
                .map(|s| format!("{}  {}", s.section, s.title))
                .collect();
            labels.push("New search".to_string());

            let idx = Select::new()
                .with_prompt("Explain a section")
                .items(&labels)
                .default(0)
                .interact()?;
            let Some(section) = results.get(idx).map(|s| s.section.clone()) else {
                break;
            };

            with_spinner(multi, "Explaining...", page.explain(source, &section)).await;
            commands::show_assistant(&page);
            page.back_to_results();
        }
    }
}

async fn judgments(source: &dyn RemoteDataSource, multi: &MultiProgress) -> PromptResult<()> {
    let mut page = JudgmentExplorerPage::default();

    loop {
        let question = prompt_text("Ask a legal question (empty to go back)")?;
        if !with_spinner(multi, "Searching judgments...", page.ask(source, &question)).await {
            return Ok(());
        }
        commands::show_judgment(&page);
    }
}

fn select_variant<T: IntoEnumIterator + std::fmt::Display + PartialEq>(
    prompt: &str,
    default: Option<T>,
) -> PromptResult<T> {
    let variants: Vec<T> = T::iter().collect();
    let labels: Vec<String> = variants.iter().map(ToString::to_string).collect();
    let default = default
        .and_then(|d| variants.iter().position(|v| *v == d))
        .unwrap_or(0);
    let idx = Select::new()
        .with_prompt(prompt)
        .items(&labels)
        .default(default)
        .interact()?;
    variants
        .into_iter()
        .nth(idx)
        .ok_or_else(|| "selection out of range".into())
}

async fn predictor(source: &dyn RemoteDataSource, multi: &MultiProgress) -> PromptResult<()> {
    println!("Educational prototype. Predictions are not legal advice.");

    let form = CaseForm {
        case_type: Some(select_variant::<CaseType>("Case type", None)?),
        ipc_section: prompt_text("IPC section (e.g. IPC 420)")?,
        case_facts_summary: prompt_text("Summary of case facts")?,
        evidence_strength: select_variant(
            "Evidence strength",
            Some(EvidenceStrength::default()),
        )?,
        past_record: select_variant("Past record", Some(PastRecord::default()))?,
    };

    commands::predict(source, multi, &form).await;
    Ok(())
}

async fn awareness(source: &dyn RemoteDataSource, multi: &MultiProgress) -> PromptResult<()> {
    let mut page = LegalAwarenessPage::default();
    with_spinner(multi, "Loading legal awareness...", page.load(source)).await;
    commands::show_awareness_overview(&page);

    let mut labels: Vec<String> = page.category_names().map(ToString::to_string).collect();
    if labels.is_empty() {
        return Ok(());
    }
    labels.push("Back".to_string());

    loop {
        let idx = Select::new()
            .with_prompt("Know your rights")
            .items(&labels)
            .default(0)
            .interact()?;
        if idx + 1 == labels.len() {
            return Ok(());
        }
        page.select_category(&labels[idx])?;
        commands::show_category(&page);
    }
}
