//! Query-driven list controller
//!
//! The contract shared by searchable, filterable, paginated list pages:
//! a URL-synced query state store, a fetch coordinator that discards
//! stale responses, and page-count/badge derivation.

mod coordinator;
mod pagination;
mod query;
pub mod url;

pub use coordinator::*;
pub use pagination::*;
pub use query::*;

/// What the list body should render for a loaded page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListBody {
    /// At least one record to show.
    Results,
    /// Nothing exists yet and nothing is filtered out: offer creation.
    CreateNew,
    /// Records exist elsewhere but the active filters match none.
    NoMatches,
}

/// An empty unfiltered collection invites creating the first record; an
/// empty filtered one reports that the filters matched nothing.
pub fn list_body(item_count: usize, has_filters: bool) -> ListBody {
    if item_count > 0 {
        ListBody::Results
    } else if has_filters {
        ListBody::NoMatches
    } else {
        ListBody::CreateNew
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_without_filters_offers_creation() {
        assert_eq!(list_body(0, false), ListBody::CreateNew);
    }

    #[test]
    fn empty_with_filters_reports_no_matches() {
        assert_eq!(list_body(0, true), ListBody::NoMatches);
    }

    #[test]
    fn cleared_search_still_offers_creation() {
        // Clearing the search drops the key entirely, so the state reads
        // as unfiltered and the creation affordance comes back.
        let mut state = QueryState::default();
        state.apply([("search", Some("clinic".to_string()))]);
        state.apply([("search", None::<String>)]);
        assert_eq!(list_body(0, state.has_filters()), ListBody::CreateNew);
    }

    #[test]
    fn results_win_regardless_of_filters() {
        assert_eq!(list_body(3, true), ListBody::Results);
        assert_eq!(list_body(3, false), ListBody::Results);
    }
}
