//! Regex token-scan decomposition
//!
//! Scans the hero-data span for repeating occurrences of a name run
//! immediately followed by two percentage tokens. Tolerates missing line
//! breaks, which makes it the default strategy for the flattened page.

use crate::types::HeroRecord;

use super::text::ColumnOrder;
use super::{valid_name, Decomposition};

/// Candidate pattern: a non-greedy name run followed by two percentage
/// tokens back to back.
///
/// The name must start with a letter and may continue with letters,
/// digits, spaces, colons, periods, apostrophes and hyphens, so names
/// like "Soldier: 76", "D.Va" and "Torbjörn" match. It is non-greedy:
/// it grows only as far as needed to reach the first valid percentage
/// pair, which keeps it from swallowing adjacent row content. Percentage
/// tokens allow at most two integer digits plus the exact value 100, so
/// a trailing digit in a name ("...76") is not absorbed into the
/// following rate while a 100% rate still lexes whole.
const CANDIDATE: &str = r"([A-Za-zÀ-ÿ][A-Za-zÀ-ÿ0-9\s:.'\-]*?)((?:100|\d{1,2})(?:\.\d+)?%)((?:100|\d{1,2})(?:\.\d+)?%)";

/// Decompose the hero-data span by scanning for candidate triples.
pub fn decompose(span: &str, order: ColumnOrder) -> Decomposition {
    let mut result = Decomposition::default();

    let Ok(re) = regex_lite::Regex::new(CANDIDATE) else {
        return result;
    };

    for caps in re.captures_iter(span) {
        let (Some(name), Some(first), Some(second)) = (caps.get(1), caps.get(2), caps.get(3))
        else {
            continue;
        };

        result.candidates += 1;

        let name = name.as_str().trim();
        if !valid_name(name) {
            result.rejected += 1;
            continue;
        }

        let (pick_rate, win_rate) =
            order.assign(first.as_str().to_string(), second.as_str().to_string());
        result.heroes.push(HeroRecord {
            name: name.to_string(),
            pick_rate,
            win_rate,
        });
    }

    result
}
