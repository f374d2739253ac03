//! Query state for list views
//!
//! Holds the filter/search/pagination parameters that drive a list page.
//! The state round-trips through the URL query string so a reload (or a
//! shared link) restores the identical view.

use std::collections::BTreeMap;

/// Default page size for facility lists.
pub const DEFAULT_PAGE_SIZE: u32 = 14;

/// Reserved key for the current page number.
const PAGE_KEY: &str = "page";

/// The current filter/search/pagination parameters of a list view.
///
/// Keys map to non-empty string values; an unset key means "no filter",
/// and clearing a filter removes the key entirely, so the two states are
/// indistinguishable. The page size is fixed per view and is not part of
/// the shareable state.
#[derive(Clone, Debug, PartialEq)]
pub struct QueryState {
    params: BTreeMap<String, String>,
    limit: u32,
}

impl Default for QueryState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl QueryState {
    pub fn new(limit: u32) -> Self {
        Self {
            params: BTreeMap::new(),
            limit,
        }
    }

    /// Current value for a key, if any. Values are never empty strings.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    /// Current page number, always >= 1. Junk values count as page 1.
    pub fn page(&self) -> u32 {
        self.get(PAGE_KEY)
            .and_then(|raw| raw.parse::<u32>().ok())
            .filter(|page| *page >= 1)
            .unwrap_or(1)
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Zero-based record offset for the current page.
    pub fn offset(&self) -> u32 {
        (self.page() - 1) * self.limit
    }

    /// Merge a partial update into the state.
    ///
    /// A `None` or blank value removes the key. Touching any key other
    /// than `page` invalidates the current page and resets it to 1.
    pub fn apply<K, I>(&mut self, updates: I)
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Option<String>)>,
    {
        let mut filters_touched = false;
        for (key, value) in updates {
            let key = key.into();
            let value = value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty());
            match value {
                Some(v) => {
                    self.params.insert(key.clone(), v);
                }
                None => {
                    self.params.remove(&key);
                }
            }
            if key != PAGE_KEY {
                filters_touched = true;
            }
        }
        if filters_touched {
            self.params.remove(PAGE_KEY);
        }
    }

    /// Move to a page without disturbing any filter.
    pub fn set_page(&mut self, page: u32) {
        self.apply([(PAGE_KEY, Some(page.max(1).to_string()))]);
    }

    /// Whether any filter or search term is active. Pagination alone does
    /// not count.
    pub fn has_filters(&self) -> bool {
        self.params.keys().any(|key| key != PAGE_KEY)
    }

    /// Encode the state as a URL query string (no leading `?`).
    pub fn to_query_string(&self) -> String {
        self.params
            .iter()
            .map(|(key, value)| {
                format!("{}={}", urlencoding::encode(key), urlencoding::encode(value))
            })
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Decode a state from a raw query string, ignoring malformed pairs.
    pub fn from_query_string(raw: &str, limit: u32) -> Self {
        let mut state = Self::new(limit);
        let raw = raw.strip_prefix('?').unwrap_or(raw);
        let updates = raw.split('&').filter_map(|pair| {
            let (key, value) = pair.split_once('=')?;
            let key = urlencoding::decode(key).ok()?.into_owned();
            let value = urlencoding::decode(value).ok()?.into_owned();
            Some((key, Some(value)))
        });
        // apply() normalizes blanks away; restoring must not reset the
        // page carried by the URL, so page is merged last on its own.
        let (pages, filters): (Vec<_>, Vec<_>) =
            updates.partition(|(key, _)| key == PAGE_KEY);
        state.apply(filters);
        state.apply(pages);
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_defaults_to_one() {
        let state = QueryState::default();
        assert_eq!(state.page(), 1);
        assert_eq!(state.offset(), 0);
    }

    #[test]
    fn filter_update_resets_page() {
        let mut state = QueryState::default();
        state.set_page(3);
        assert_eq!(state.page(), 3);

        state.apply([("district", Some("7".to_string()))]);
        assert_eq!(state.page(), 1, "changing a filter must reset the page");
        assert_eq!(state.get("district"), Some("7"));
    }

    #[test]
    fn page_update_keeps_filters_and_page() {
        let mut state = QueryState::default();
        state.apply([("search", Some("general".to_string()))]);
        state.set_page(5);
        assert_eq!(state.page(), 5);
        assert_eq!(state.get("search"), Some("general"));
    }

    #[test]
    fn blank_value_removes_key() {
        let mut state = QueryState::default();
        state.apply([("search", Some("clinic".to_string()))]);
        state.apply([("search", Some("   ".to_string()))]);
        assert_eq!(state.get("search"), None);
        assert!(!state.has_filters());
    }

    #[test]
    fn cleared_search_counts_as_no_filter() {
        // An explicitly cleared search is the same observable state as a
        // search that was never set.
        let mut cleared = QueryState::default();
        cleared.apply([("search", Some("x".to_string()))]);
        cleared.apply([("search", Some(String::new()))]);
        assert_eq!(cleared, QueryState::default());
    }

    #[test]
    fn offset_follows_page_and_limit() {
        let mut state = QueryState::new(14);
        state.set_page(3);
        assert_eq!(state.offset(), 28);
    }

    #[test]
    fn junk_page_is_coerced() {
        let state = QueryState::from_query_string("page=banana", 14);
        assert_eq!(state.page(), 1);
        let state = QueryState::from_query_string("page=0", 14);
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn query_string_round_trip() {
        let mut state = QueryState::default();
        state.apply([
            ("search", Some("st mary's".to_string())),
            ("facility_type", Some("860".to_string())),
        ]);
        state.set_page(2);

        let restored = QueryState::from_query_string(&state.to_query_string(), 14);
        assert_eq!(restored, state);
        assert_eq!(restored.page(), 2);
        assert_eq!(restored.get("search"), Some("st mary's"));
    }

    #[test]
    fn pagination_alone_is_not_a_filter() {
        let mut state = QueryState::default();
        state.set_page(4);
        assert!(!state.has_filters());

        state.apply([("kasp_empanelled", Some("true".to_string()))]);
        assert!(state.has_filters());
    }
}
