//! Page-count math and active-filter badges

use super::query::QueryState;

/// Number of pages needed for `total_count` records, never less than 1 so
/// an empty result still renders as a single page.
pub fn page_count(total_count: u32, limit: u32) -> u32 {
    if limit == 0 {
        return 1;
    }
    total_count.div_ceil(limit).max(1)
}

/// One active filter, summarized for display.
#[derive(Clone, Debug, PartialEq)]
pub struct Badge {
    pub key: String,
    pub label: String,
    pub value: String,
}

/// Turns a raw query value into the text shown on a badge. Resolvers are
/// pure; returning an empty string suppresses the badge (e.g. a lookup
/// name that has not arrived, or an unmapped code).
pub struct BadgeResolver<'a> {
    pub key: &'a str,
    pub label: &'a str,
    pub resolve: &'a dyn Fn(&str) -> String,
}

impl<'a> BadgeResolver<'a> {
    pub fn new(key: &'a str, label: &'a str, resolve: &'a dyn Fn(&str) -> String) -> Self {
        Self { key, label, resolve }
    }
}

/// One badge per resolver whose key is present in the state and whose
/// resolved value is non-empty.
pub fn active_badges(state: &QueryState, resolvers: &[BadgeResolver<'_>]) -> Vec<Badge> {
    resolvers
        .iter()
        .filter_map(|resolver| {
            let raw = state.get(resolver.key)?;
            let value = (resolver.resolve)(raw);
            if value.is_empty() {
                return None;
            }
            Some(Badge {
                key: resolver.key.to_string(),
                label: resolver.label.to_string(),
                value,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_count_boundaries() {
        assert_eq!(page_count(0, 14), 1);
        assert_eq!(page_count(14, 14), 1);
        assert_eq!(page_count(15, 14), 2);
        assert_eq!(page_count(1, 14), 1);
        assert_eq!(page_count(28, 14), 2);
    }

    #[test]
    fn page_count_survives_zero_limit() {
        assert_eq!(page_count(100, 0), 1);
    }

    #[test]
    fn badges_cover_present_keys_only() {
        let mut state = QueryState::default();
        state.apply([("district", Some("7".to_string()))]);

        let identity = |raw: &str| raw.to_string();
        let badges = active_badges(
            &state,
            &[
                BadgeResolver::new("district", "District", &identity),
                BadgeResolver::new("state", "State", &identity),
            ],
        );

        assert_eq!(badges.len(), 1);
        assert_eq!(badges[0].key, "district");
        assert_eq!(badges[0].label, "District");
        assert_eq!(badges[0].value, "7");
    }

    #[test]
    fn empty_resolved_value_suppresses_badge() {
        let mut state = QueryState::default();
        state.apply([("facility_type", Some("424242".to_string()))]);

        let unmapped = |_: &str| String::new();
        let badges = active_badges(
            &state,
            &[BadgeResolver::new("facility_type", "Facility type", &unmapped)],
        );

        assert!(badges.is_empty(), "unresolvable filters must not render a badge");
    }
}
