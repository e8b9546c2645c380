//! Applying compiled rules to text
//!
//! The highlighter holds no language state. Callers keep their own
//! compiled rule sequence and pass it in with each block (normally one
//! line); nothing carries over from one block to the next.

use super::rules::CompiledRule;
use super::style::{FormatSpan, StyledRun};

/// Highlight one block of text
///
/// Rules are applied in sequence order and every match of every rule
/// becomes a span, so spans of different rules may overlap. When they
/// do, the span that comes later wins (see `paint`).
pub fn highlight(text: &str, rules: &[CompiledRule]) -> Vec<FormatSpan> {
    rules.iter().flat_map(|rule| rule.spans(text)).collect()
}

/// Resolve overlapping spans into contiguous runs covering all of `text`
///
/// Each byte takes the format of the last span that covers it.
/// Adjacent bytes with the same winner are merged into one run.
pub fn paint(text: &str, spans: &[FormatSpan]) -> Vec<StyledRun> {
    let mut owners: Vec<Option<usize>> = vec![None; text.len()];
    for (idx, span) in spans.iter().enumerate() {
        let end = span.end().min(text.len());
        for owner in owners.iter_mut().take(end).skip(span.start) {
            *owner = Some(idx);
        }
    }

    let same = |a: Option<usize>, b: Option<usize>| match (a, b) {
        (Some(a), Some(b)) => spans[a].category == spans[b].category && spans[a].format == spans[b].format,
        (None, None) => true,
        _ => false,
    };

    let mut runs: Vec<StyledRun> = Vec::new();
    let mut start = 0;
    for pos in 1..=owners.len() {
        if pos < owners.len() && same(owners[start], owners[pos]) {
            continue;
        }
        let winner = owners[start].map(|idx| &spans[idx]);
        runs.push(StyledRun {
            start,
            end: pos,
            category: winner.map(|s| s.category),
            format: winner.map(|s| s.format.clone()),
        });
        start = pos;
    }
    runs
}
