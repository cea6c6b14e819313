use crate::gateways::geocode::GeoSuggestion;

/// Queries with fewer characters are never looked up.
pub const MIN_QUERY_LEN: usize = 3;

pub const MAX_SUGGESTIONS: usize = 5;

/// What to do after the query text changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryAction {
    /// The query is too short, suggestions have been cleared.
    Clear,
    /// The query is the name of an offered suggestion.
    Skip,
    /// Look up the query after the debounce delay.
    Lookup(String),
}

/// State of a free text location input.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct LocationSearch {
    query: String,
    suggestions: Vec<GeoSuggestion>,
    /// Names of the most recent lookup.
    offered: Vec<String>,
}

impl LocationSearch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn suggestions(&self) -> &[GeoSuggestion] {
        &self.suggestions
    }

    pub fn set_query(&mut self, query: impl Into<String>) -> QueryAction {
        self.query = query.into();
        let trimmed = self.query.trim();
        if trimmed.chars().count() < MIN_QUERY_LEN {
            self.suggestions.clear();
            self.offered.clear();
            return QueryAction::Clear;
        }
        if self.offered.iter().any(|name| name == &self.query) {
            return QueryAction::Skip;
        }
        QueryAction::Lookup(trimmed.to_owned())
    }

    /// Applies the results of a lookup.
    ///
    /// Results of a query that has been changed in the meantime
    /// are discarded.
    pub fn set_suggestions(&mut self, query: &str, mut suggestions: Vec<GeoSuggestion>) -> bool {
        if self.query.trim() != query {
            log::debug!("Discarding outdated suggestions for '{query}'");
            return false;
        }
        suggestions.truncate(MAX_SUGGESTIONS);
        self.offered = suggestions.iter().map(|s| s.display_name.clone()).collect();
        self.suggestions = suggestions;
        true
    }

    /// Picks a suggestion and clears the list.
    pub fn choose(&mut self, index: usize) -> Option<GeoSuggestion> {
        if index >= self.suggestions.len() {
            return None;
        }
        let chosen = self.suggestions.swap_remove(index);
        self.suggestions.clear();
        self.query = chosen.display_name.clone();
        Some(chosen)
    }
}
