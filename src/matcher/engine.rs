use std::sync::Arc;

use nucleo::pattern::{CaseMatching, Normalization};
use nucleo::{Config, Nucleo};

use crate::source::Entry;

/// Fuzzy matcher over picker entries, keyed by the navigation binding's
/// trimmed search. An empty search shows every entry in input order.
pub struct Matcher {
    nucleo: Nucleo<Entry>,
    entries: Vec<Entry>,
    query: String,
}

impl Matcher {
    pub fn new(entries: Vec<Entry>) -> Self {
        let nucleo = Nucleo::new(
            Config::DEFAULT,
            Arc::new(|| {}), // polled on a timer instead
            None,
            1,
        );
        let injector = nucleo.injector();
        for entry in &entries {
            injector.push(entry.clone(), |entry, cols| {
                cols[0] = entry.title.as_str().into();
            });
        }
        Self {
            nucleo,
            entries,
            query: String::new(),
        }
    }

    /// Search the matcher is currently filtering with
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn update_query(&mut self, query: &str) {
        if query == self.query {
            return;
        }
        // Appending only narrows the previous matches
        let is_append = !self.query.is_empty() && query.starts_with(self.query.as_str());
        self.nucleo.pattern.reparse(
            0,
            query,
            CaseMatching::Smart,
            Normalization::Smart,
            is_append,
        );
        self.query = query.to_string();
    }

    /// Advance matching. Returns the new result list, best first and at most
    /// `max` long, when it changed since the last call.
    pub fn refresh(&mut self, max: usize) -> Option<Vec<Entry>> {
        if !self.nucleo.tick(10).changed {
            return None;
        }
        if self.query.is_empty() {
            return Some(self.entries.clone());
        }
        let snapshot = self.nucleo.snapshot();
        let count = (snapshot.matched_item_count() as usize).min(max);
        Some(
            snapshot
                .matched_items(0..count as u32)
                .map(|item| item.data.clone())
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::entries_from_lines;

    fn matcher(titles: &[&str]) -> Matcher {
        Matcher::new(entries_from_lines(titles.iter().map(|t| t.to_string())))
    }

    #[test]
    fn tracks_query() {
        let mut m = matcher(&["alpha"]);
        assert_eq!(m.query(), "");
        m.update_query("al");
        m.update_query("alp");
        assert_eq!(m.query(), "alp");
        m.update_query("");
        assert_eq!(m.query(), "");
    }

    #[test]
    fn empty_query_keeps_input_order() {
        let mut m = matcher(&["beta", "alpha"]);
        let mut results = None;
        for _ in 0..100 {
            if let Some(r) = m.refresh(50) {
                results = Some(r);
                break;
            }
        }
        let titles: Vec<String> = results.unwrap_or_default().into_iter().map(|e| e.title).collect();
        assert_eq!(titles, vec!["beta", "alpha"]);
    }
}
