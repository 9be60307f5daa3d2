//! Fixed-stride positional decomposition
//!
//! Interprets the hero-data span as cleaned lines and walks them in a
//! sliding window of three, reading `[name, percent, percent]` rows.
//! Only useful for layouts that keep line breaks between cells; kept as
//! the fallback behind the same contract as the regex scan.

use crate::types::HeroRecord;

use super::text::ColumnOrder;
use super::{is_percent_token, valid_name, Decomposition};

/// Decompose the hero-data span by positional line grouping.
///
/// A window `[i, i+1, i+2]` is read as `(name, first, second)` only when
/// both trailing lines are whole percentage tokens. An accepted window
/// advances the cursor by 3; a rejected one advances by 1 so the walk
/// resynchronizes after stray lines.
pub fn decompose(span: &str, order: ColumnOrder) -> Decomposition {
    let mut result = Decomposition::default();

    let lines: Vec<&str> = span
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let mut i = 0;
    while i + 3 <= lines.len() {
        if !is_percent_token(lines[i + 1]) || !is_percent_token(lines[i + 2]) {
            i += 1;
            continue;
        }

        result.candidates += 1;

        let name = lines[i];
        if !valid_name(name) {
            result.rejected += 1;
            i += 3;
            continue;
        }

        let (pick_rate, win_rate) =
            order.assign(lines[i + 1].to_string(), lines[i + 2].to_string());
        result.heroes.push(HeroRecord {
            name: name.to_string(),
            pick_rate,
            win_rate,
        });
        i += 3;
    }

    result
}
