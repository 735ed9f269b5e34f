//! Pure transformations from API payloads into render-ready view models.

use legal_portal_api_models::{ALL_INDIA, CrimeSummaryRow, CrimeTotals, DistrictRow, Helpline};

/// Chart colours for the IPC crime-type distribution.
pub const IPC_PALETTE: &[&str] = &[
    "#ff9933", "#1a2847", "#ff6b6b", "#6a5acd", "#2ecc71", "#e84393", "#00cec9", "#fdcb6e",
];

/// Chart colours for the crimes-against-women distribution.
pub const WOMEN_PALETTE: &[&str] = &[
    "#ff6b6b", "#ff9f43", "#1dd1a1", "#54a0ff", "#5f27cd", "#00d2d3", "#e84393",
];

/// How derived entries are ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ranking {
    /// Keep the order the backend sent.
    Insertion,
    /// Largest value first; ties keep their original order.
    Descending,
}

/// One chart slice/bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedCrimeEntry {
    /// Crime category.
    pub name: String,
    /// Case count, always positive.
    pub value: i64,
    /// Palette colour for this position.
    pub color: &'static str,
}

/// Drops non-positive counts, orders the rest per `ranking`, and colours
/// each entry by its position (cycling through `palette`).
///
/// The same position always gets the same colour, but a category may
/// change colour when the filter changes the set or order of entries.
#[must_use]
pub fn derive_entries(
    totals: &CrimeTotals,
    ranking: Ranking,
    palette: &'static [&'static str],
) -> Vec<DerivedCrimeEntry> {
    let mut positive: Vec<(&str, i64)> = totals
        .iter()
        .filter(|(_, value)| **value > 0)
        .map(|(name, value)| (name, *value))
        .collect();

    if ranking == Ranking::Descending {
        positive.sort_by(|a, b| b.1.cmp(&a.1));
    }

    positive
        .into_iter()
        .enumerate()
        .map(|(i, (name, value))| DerivedCrimeEntry {
            name: name.to_string(),
            value,
            color: palette_color(palette, i),
        })
        .collect()
}

/// Colour for position `index`, or `""` for an empty palette.
#[must_use]
pub fn palette_color(palette: &'static [&'static str], index: usize) -> &'static str {
    if palette.is_empty() {
        return "";
    }
    palette[index % palette.len()]
}

/// The first `n` entries (fewer if there are not that many).
#[must_use]
pub fn top_n<T>(entries: &[T], n: usize) -> &[T] {
    &entries[..entries.len().min(n)]
}

/// Sum of `TOTAL IPC CRIMES` across all summary rows.
#[must_use]
pub fn total_ipc_crimes(rows: &[CrimeSummaryRow]) -> i64 {
    rows.iter().map(|row| row.total_ipc_crimes).sum()
}

/// Separates the nationwide helpline entry from the per-state ones.
#[must_use]
pub fn split_helplines(helplines: &[Helpline]) -> (Option<&Helpline>, Vec<&Helpline>) {
    let national = helplines.iter().find(|h| h.state == ALL_INDIA);
    let states = helplines.iter().filter(|h| h.state != ALL_INDIA).collect();
    (national, states)
}

/// Districts as the backend ranked them, capped at `n`.
#[must_use]
pub fn top_districts(rows: &[DistrictRow], n: usize) -> &[DistrictRow] {
    top_n(rows, n)
}

#[cfg(test)]
mod tests {
    use legal_portal_api_models::HelplineService;

    use super::*;

    fn totals(pairs: &[(&str, i64)]) -> CrimeTotals {
        pairs.iter().map(|(k, v)| (*k, *v)).collect()
    }

    fn names(entries: &[DerivedCrimeEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn top_three_excludes_zero_and_sorts_descending() {
        let entries = derive_entries(
            &totals(&[("Theft", 0), ("Assault", 120), ("Fraud", 45)]),
            Ranking::Descending,
            WOMEN_PALETTE,
        );
        let top = top_n(&entries, 3);

        assert_eq!(
            top.iter()
                .map(|e| (e.name.as_str(), e.value))
                .collect::<Vec<_>>(),
            [("Assault", 120), ("Fraud", 45)]
        );
    }

    #[test]
    fn insertion_ranking_keeps_payload_order() {
        let entries = derive_entries(
            &totals(&[("Murder", 5), ("Theft", 0), ("Riots", 9), ("Hurt", -1)]),
            Ranking::Insertion,
            IPC_PALETTE,
        );
        assert_eq!(names(&entries), ["Murder", "Riots"]);
    }

    #[test]
    fn descending_sort_is_stable_for_ties() {
        let entries = derive_entries(
            &totals(&[("B", 10), ("A", 10), ("C", 20)]),
            Ranking::Descending,
            IPC_PALETTE,
        );
        assert_eq!(names(&entries), ["C", "B", "A"]);
    }

    #[test]
    fn colours_cycle_through_palette_by_position() {
        let pairs: Vec<(String, i64)> = (1..=10).map(|i| (format!("c{i}"), i)).collect();
        let map: CrimeTotals = pairs.into_iter().collect();
        let entries = derive_entries(&map, Ranking::Insertion, IPC_PALETTE);

        assert_eq!(entries[0].color, "#ff9933");
        assert_eq!(entries[7].color, "#fdcb6e");
        assert_eq!(entries[8].color, "#ff9933");
        assert_eq!(entries[9].color, "#1a2847");
    }

    #[test]
    fn empty_totals_derive_nothing() {
        let entries = derive_entries(&CrimeTotals::new(), Ranking::Descending, IPC_PALETTE);
        assert!(entries.is_empty());
        assert!(top_n(&entries, 3).is_empty());
    }

    #[test]
    fn empty_palette_yields_blank_colour() {
        assert_eq!(palette_color(&[], 3), "");
    }

    #[test]
    fn sums_summary_rows() {
        let rows = vec![
            CrimeSummaryRow {
                year: Some(2019),
                total_ipc_crimes: 10,
            },
            CrimeSummaryRow {
                year: Some(2020),
                total_ipc_crimes: 32,
            },
        ];
        assert_eq!(total_ipc_crimes(&rows), 42);
        assert_eq!(total_ipc_crimes(&[]), 0);
    }

    #[test]
    fn caps_districts() {
        let rows: Vec<DistrictRow> = (0..12)
            .map(|i| DistrictRow {
                district: format!("D{i}"),
                total_ipc_crimes: 100 - i,
            })
            .collect();
        let top = top_districts(&rows, 10);
        assert_eq!(top.len(), 10);
        assert_eq!(top[0].district, "D0");
    }

    #[test]
    fn separates_national_helplines() {
        let line = |state: &str| Helpline {
            state: state.to_string(),
            services: vec![HelplineService {
                service_type: "Police".to_string(),
                number: "112".to_string(),
            }],
        };
        let lines = vec![line("Goa"), line(ALL_INDIA), line("Kerala")];

        let (national, states) = split_helplines(&lines);

        assert_eq!(national.map(|h| h.state.as_str()), Some(ALL_INDIA));
        assert_eq!(
            states.iter().map(|h| h.state.as_str()).collect::<Vec<_>>(),
            ["Goa", "Kerala"]
        );
    }
}
