/// Anything the search box can match against.
pub trait NamedEntry {
    fn display_name(&self) -> &str;
}

impl NamedEntry for crate::model::MatchEvent {
    fn display_name(&self) -> &str {
        &self.name
    }
}

impl NamedEntry for crate::model::StandingsRow {
    fn display_name(&self) -> &str {
        &self.team
    }
}

/// Case-insensitive substring filter, applied at render time only.
///
/// `query` is expected pre-trimmed and pre-lowercased (see
/// [`AppState::set_query`](crate::AppState::set_query)); an empty query
/// matches everything. The stored collection is never mutated, so clearing
/// the query always re-derives the full last-fetched dataset.
pub fn filter_entries<'a, T: NamedEntry>(items: &'a [T], query: &str) -> Vec<&'a T> {
    if query.is_empty() {
        return items.iter().collect();
    }
    items
        .iter()
        .filter(|item| item.display_name().to_lowercase().contains(query))
        .collect()
}
