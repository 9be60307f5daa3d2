//! Text flattening and span location
//!
//! The statistics page renders its table client-side; the only stable
//! structure is the flattened text: the header run `Hero` + the two rate
//! column tokens (possibly concatenated without separators, in either
//! order), the hero rows, and the "Frequently Asked Questions" section
//! that follows them.

use scraper::{Html, Node};

/// Literal marker ending the hero-data span
const END_MARKER: &str = "Frequently Asked Questions";

/// Header run opening the hero-data span. The column tokens are matched
/// in either order; the first one is captured so the column order can be
/// read off the header itself rather than from stray prose elsewhere on
/// the page (sort controls and FAQ text also mention the column names).
const HEADER_PATTERN: &str = r"Hero\s*(Pick|Win)\s*Rate\s*(?:Pick|Win)\s*Rate";

/// Flatten an HTML document to its text content.
///
/// Tags are discarded; `script`, `style` and `noscript` subtrees are
/// dropped entirely. Adjacent table-cell contents end up concatenated
/// with no guaranteed separator.
pub fn flatten(html: &str) -> String {
    let document = Html::parse_document(html);
    let mut out = String::new();

    for node in document.tree.root().descendants() {
        if let Node::Text(text) = node.value() {
            let hidden = node.ancestors().any(|ancestor| match ancestor.value() {
                Node::Element(el) => matches!(el.name(), "script" | "style" | "noscript"),
                _ => false,
            });
            if !hidden {
                out.push_str(text);
            }
        }
    }

    out
}

/// Locate the hero-data span within flattened text.
///
/// The span starts immediately after the header run and ends immediately
/// before the FAQ marker. Returns `None` when either boundary is missing;
/// that is a soft failure, not an error.
pub fn hero_span(text: &str) -> Option<&str> {
    let header = regex_lite::Regex::new(HEADER_PATTERN).ok()?;
    let start = header.find(text)?.end();
    let rest = &text[start..];
    let end = rest.find(END_MARKER)?;
    Some(&rest[..end])
}

/// Which of the two percentage columns comes first in the page layout.
///
/// The page header literally reads "Pick Rate" before "Win Rate", but the
/// layout has flipped across page revisions, so the order is re-derived
/// from the header tokens on every run instead of being hard-coded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnOrder {
    /// First percentage is the pick rate, second is the win rate
    PickThenWin,
    /// First percentage is the win rate, second is the pick rate
    WinThenPick,
}

impl Default for ColumnOrder {
    /// Documented fallback when no header can be located: the literal
    /// header wording, pick rate first.
    fn default() -> Self {
        ColumnOrder::PickThenWin
    }
}

impl ColumnOrder {
    /// Derive the column order from the header run itself: the first
    /// column token captured by the header match decides. Prose mentions
    /// of "Pick Rate"/"Win Rate" elsewhere in the text never participate.
    /// `None` when no header matches; callers fall back to the default
    /// and flag the run as order-unverified.
    pub fn detect(text: &str) -> Option<ColumnOrder> {
        let header = regex_lite::Regex::new(HEADER_PATTERN).ok()?;
        let caps = header.captures(text)?;
        match caps.get(1)?.as_str() {
            "Pick" => Some(ColumnOrder::PickThenWin),
            _ => Some(ColumnOrder::WinThenPick),
        }
    }

    /// Map the two captured percentage tokens, in source order, to
    /// `(pick_rate, win_rate)`.
    pub fn assign(self, first: String, second: String) -> (String, String) {
        match self {
            ColumnOrder::PickThenWin => (first, second),
            ColumnOrder::WinThenPick => (second, first),
        }
    }
}
