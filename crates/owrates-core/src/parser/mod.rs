//! Extraction of hero records from the statistics page
//!
//! This is the core of the scraper: turning an unstructured flattened
//! text dump into `(name, pick rate, win rate)` triples. Two
//! decomposition strategies live behind one contract:
//! - `regex_scan`: token scan over the raw span (default; tolerates the
//!   missing separators the flattening produces)
//! - `stride`: positional line grouping (fallback for layouts that keep
//!   line breaks)
//!
//! Extraction is a pure function. It never logs and it never fails on
//! "no data" conditions: missing boundaries or a zero-match scan yield an
//! empty record list, and the `ExtractionTrace` carries the diagnostics
//! for the logging layer to render.

mod regex_scan;
mod stride;
pub mod text;

pub use text::ColumnOrder;

use crate::types::HeroRecord;

/// Reserved tokens that are known false positives from header/footer
/// text leaking into the matched span
const RESERVED_NAMES: [&str; 3] = ["All", "PC", "Role"];

/// Record decomposition strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Token scan over the raw span
    #[default]
    RegexScan,
    /// Fixed-stride positional line grouping
    PositionalStride,
}

/// Raw output of one decomposition pass
#[derive(Debug, Default)]
pub(crate) struct Decomposition {
    pub heroes: Vec<HeroRecord>,
    pub candidates: usize,
    pub rejected: usize,
}

/// Diagnostics from one extraction run, rendered by the logging layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionTrace {
    /// Length of the flattened page text
    pub text_len: usize,
    /// Length of the located hero-data span; `None` when a boundary was
    /// missing
    pub span_len: Option<usize>,
    /// Candidate triples seen by the decomposition
    pub candidates: usize,
    /// Candidates dropped by name validation
    pub rejected: usize,
}

/// Result of one extraction run
#[derive(Debug)]
pub struct Extraction {
    /// Parsed records in source order; empty is a valid "no data" outcome
    pub heroes: Vec<HeroRecord>,
    /// Column order applied to every record of this run
    pub column_order: ColumnOrder,
    /// False when the order could not be derived from the page header and
    /// the documented default was used
    pub order_verified: bool,
    pub trace: ExtractionTrace,
}

/// Extract hero records from raw page HTML.
pub fn extract(html: &str, strategy: Strategy) -> Extraction {
    extract_from_text(&text::flatten(html), strategy)
}

/// Extract hero records from already-flattened page text.
///
/// The column order is re-derived per run from the header tokens and
/// applied uniformly to every record; it is never hard-coded. A missing
/// boundary yields an empty record list, not an error.
pub fn extract_from_text(flat: &str, strategy: Strategy) -> Extraction {
    let (column_order, order_verified) = match ColumnOrder::detect(flat) {
        Some(order) => (order, true),
        None => (ColumnOrder::default(), false),
    };

    let Some(span) = text::hero_span(flat) else {
        return Extraction {
            heroes: Vec::new(),
            column_order,
            order_verified,
            trace: ExtractionTrace {
                text_len: flat.len(),
                span_len: None,
                candidates: 0,
                rejected: 0,
            },
        };
    };

    let decomposition = match strategy {
        Strategy::RegexScan => regex_scan::decompose(span, column_order),
        Strategy::PositionalStride => stride::decompose(span, column_order),
    };

    Extraction {
        heroes: decomposition.heroes,
        column_order,
        order_verified,
        trace: ExtractionTrace {
            text_len: flat.len(),
            span_len: Some(span.len()),
            candidates: decomposition.candidates,
            rejected: decomposition.rejected,
        },
    }
}

/// True when a trimmed candidate name is acceptable: at least two
/// characters and not a reserved token.
pub(crate) fn valid_name(name: &str) -> bool {
    let name = name.trim();
    name.chars().count() >= 2 && !RESERVED_NAMES.contains(&name)
}

/// True when a whole line is a single percentage token like `46.9%`
pub(crate) fn is_percent_token(line: &str) -> bool {
    match regex_lite::Regex::new(r"^\d+(?:\.\d+)?%$") {
        Ok(re) => re.is_match(line),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::strategy::Strategy as _;
    use proptest::{prop_assert, prop_assert_eq, proptest};

    const HEADER: &str = "HeroPick RateWin Rate";
    const FOOTER: &str = "Frequently Asked Questions";

    #[test]
    fn test_valid_name() {
        assert!(valid_name("Ana"));
        assert!(valid_name("  D.Va  "));
        assert!(!valid_name("All"));
        assert!(!valid_name("PC"));
        assert!(!valid_name("Role"));
        assert!(!valid_name("X"));
        assert!(!valid_name(" "));
    }

    #[test]
    fn test_is_percent_token() {
        assert!(is_percent_token("46.9%"));
        assert!(is_percent_token("5%"));
        assert!(!is_percent_token("46.9"));
        assert!(!is_percent_token("about 50%"));
        assert!(!is_percent_token("%"));
        assert!(!is_percent_token(""));
    }

    #[test]
    fn test_extract_end_to_end_scenario() {
        let flat = format!("preamble{HEADER}Ana46.9%22.6%Reinhardt52.3%12.3%{FOOTER}tail");
        let extraction = extract_from_text(&flat, Strategy::RegexScan);

        assert!(extraction.order_verified);
        assert_eq!(extraction.column_order, ColumnOrder::PickThenWin);
        assert_eq!(extraction.heroes.len(), 2);
        assert_eq!(extraction.heroes[0].name, "Ana");
        assert_eq!(extraction.heroes[0].pick_rate, "46.9%");
        assert_eq!(extraction.heroes[0].win_rate, "22.6%");
        assert_eq!(extraction.heroes[1].name, "Reinhardt");
        assert_eq!(extraction.trace.candidates, 2);
        assert_eq!(extraction.trace.span_len, Some("Ana46.9%22.6%Reinhardt52.3%12.3%".len()));
    }

    #[test]
    fn test_extract_from_html() {
        let html = format!(
            "<html><body><h2>Hero</h2><span>Pick Rate</span><span>Win Rate</span>\
             <table><tr><td>Ana</td><td>46.9%</td><td>22.6%</td></tr></table>\
             <h2>{FOOTER}</h2></body></html>"
        );
        let extraction = extract(&html, Strategy::RegexScan);

        assert_eq!(extraction.heroes.len(), 1);
        assert_eq!(extraction.heroes[0].name, "Ana");
    }

    #[test]
    fn test_extract_missing_header_is_soft_failure() {
        let flat = format!("Ana46.9%22.6%{FOOTER}");
        let extraction = extract_from_text(&flat, Strategy::RegexScan);

        assert!(extraction.heroes.is_empty());
        assert_eq!(extraction.trace.span_len, None);
        assert!(!extraction.order_verified);
        assert_eq!(extraction.column_order, ColumnOrder::PickThenWin);
    }

    #[test]
    fn test_extract_missing_end_marker_is_soft_failure() {
        let flat = format!("{HEADER}Ana46.9%22.6%");
        let extraction = extract_from_text(&flat, Strategy::RegexScan);

        assert!(extraction.heroes.is_empty());
        assert_eq!(extraction.trace.span_len, None);
        // Header tokens were present, so the order is still derived
        assert!(extraction.order_verified);
    }

    #[test]
    fn test_extract_applies_discovered_win_first_order_uniformly() {
        // The header itself asserts Win Rate before Pick Rate, so the
        // first captured percentage of every row is the win rate
        let flat =
            format!("HeroWin RatePick RateAna22.6%46.9%Reinhardt12.3%52.3%{FOOTER}");
        let extraction = extract_from_text(&flat, Strategy::RegexScan);

        assert!(extraction.order_verified);
        assert_eq!(extraction.column_order, ColumnOrder::WinThenPick);
        for (hero, (pick, win)) in extraction
            .heroes
            .iter()
            .zip([("46.9%", "22.6%"), ("52.3%", "12.3%")])
        {
            assert_eq!(hero.pick_rate, pick);
            assert_eq!(hero.win_rate, win);
        }
    }

    #[test]
    fn test_extract_order_follows_header_not_preceding_prose() {
        // A sort control naming "Win Rate" ahead of the header must not
        // flip the assignment the header asserts
        let flat = format!("Sort by Win Rate{HEADER}Ana46.9%22.6%{FOOTER}");
        let extraction = extract_from_text(&flat, Strategy::RegexScan);

        assert!(extraction.order_verified);
        assert_eq!(extraction.column_order, ColumnOrder::PickThenWin);
        assert_eq!(extraction.heroes[0].pick_rate, "46.9%");
        assert_eq!(extraction.heroes[0].win_rate, "22.6%");
    }

    #[test]
    fn test_extract_zero_match_span() {
        let flat = format!("{HEADER}nothing that parses{FOOTER}");
        let extraction = extract_from_text(&flat, Strategy::RegexScan);

        assert!(extraction.heroes.is_empty());
        assert_eq!(extraction.trace.span_len, Some("nothing that parses".len()));
        assert_eq!(extraction.trace.candidates, 0);
    }

    #[test]
    fn test_extract_stride_strategy() {
        let flat = format!("{HEADER}\nAna\n46.9%\n22.6%\n{FOOTER}");
        let extraction = extract_from_text(&flat, Strategy::PositionalStride);

        assert_eq!(extraction.heroes.len(), 1);
        assert_eq!(extraction.heroes[0].pick_rate, "46.9%");
    }

    #[test]
    fn test_extract_is_deterministic() {
        let flat = format!("{HEADER}Ana46.9%22.6%{FOOTER}");
        let first = extract_from_text(&flat, Strategy::RegexScan);
        let second = extract_from_text(&flat, Strategy::RegexScan);

        assert_eq!(first.heroes, second.heroes);
        assert_eq!(first.trace, second.trace);
    }

    /// Synthetic rows for the round-trip property: plain capitalized
    /// names (reserved tokens excluded) with two in-range rates each
    fn arb_rows() -> impl proptest::strategy::Strategy<Value = Vec<(String, String, String)>> {
        proptest::collection::vec(
            ("[A-Z][a-z]{3,8}", 0u32..100, 0u32..10, 0u32..100, 0u32..10).prop_filter_map(
                "reserved name",
                |(name, p_int, p_frac, w_int, w_frac)| {
                    if RESERVED_NAMES.contains(&name.as_str()) {
                        return None;
                    }
                    Some((
                        name,
                        format!("{p_int}.{p_frac}%"),
                        format!("{w_int}.{w_frac}%"),
                    ))
                },
            ),
            0..16,
        )
    }

    proptest! {
        #[test]
        fn prop_regex_scan_recovers_injected_rows(rows in arb_rows()) {
            let mut flat = String::from(HEADER);
            for (name, pick, win) in &rows {
                flat.push_str(name);
                flat.push_str(pick);
                flat.push_str(win);
            }
            flat.push_str(FOOTER);

            let extraction = extract_from_text(&flat, Strategy::RegexScan);

            prop_assert!(extraction.order_verified);
            prop_assert_eq!(extraction.heroes.len(), rows.len());
            for (hero, (name, pick, win)) in extraction.heroes.iter().zip(&rows) {
                prop_assert_eq!(&hero.name, name);
                prop_assert_eq!(&hero.pick_rate, pick);
                prop_assert_eq!(&hero.win_rate, win);
            }
        }

        #[test]
        fn prop_stride_recovers_injected_rows(rows in arb_rows()) {
            let mut flat = format!("{HEADER}\n");
            for (name, pick, win) in &rows {
                flat.push_str(&format!("{name}\n{pick}\n{win}\n"));
            }
            flat.push_str(FOOTER);

            let extraction = extract_from_text(&flat, Strategy::PositionalStride);

            prop_assert_eq!(extraction.heroes.len(), rows.len());
            for (hero, (name, _, win)) in extraction.heroes.iter().zip(&rows) {
                prop_assert_eq!(&hero.name, name);
                prop_assert_eq!(&hero.win_rate, win);
            }
        }
    }
}
