//! Typed server functions for the facility backend
//!
//! Each page talks to the backend through these; the raw HTTP hop happens
//! server-side via [`ApiClient`](super::ApiClient).

use dioxus::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::export::ExportKind;
use crate::listing::QueryState;
use crate::types::{FacilityModel, PaginatedResponse};

/// One logical list request, derived deterministically from a query-state
/// snapshot. The snapshot is read-only; building a request never mutates
/// the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacilityRequest {
    pub limit: u32,
    pub page: u32,
    pub offset: u32,
    pub search_text: Option<String>,
    pub state: Option<String>,
    pub district: Option<String>,
    pub local_body: Option<String>,
    pub facility_type: Option<String>,
    pub kasp_empanelled: Option<String>,
}

impl FacilityRequest {
    pub fn from_state(state: &QueryState) -> Self {
        let field = |key: &str| state.get(key).map(str::to_string);
        Self {
            limit: state.limit(),
            page: state.page(),
            offset: state.offset(),
            search_text: field("search"),
            state: field("state"),
            district: field("district"),
            local_body: field("local_body"),
            facility_type: field("facility_type"),
            kasp_empanelled: field("kasp_empanelled"),
        }
    }

    /// Query pairs for the list endpoint; unset filters are omitted, not
    /// sent as empty strings.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("limit", self.limit.to_string()),
            ("offset", self.offset.to_string()),
        ];
        let optional = [
            ("search_text", &self.search_text),
            ("state", &self.state),
            ("district", &self.district),
            ("local_body", &self.local_body),
            ("facility_type", &self.facility_type),
            ("kasp_empanelled", &self.kasp_empanelled),
        ];
        for (key, value) in optional {
            if let Some(value) = value {
                pairs.push((key, value.clone()));
            }
        }
        pairs
    }
}

/// Which name-lookup collection to hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LookupKind {
    State,
    District,
    LocalBody,
}

impl LookupKind {
    fn path(&self, id: u64) -> String {
        match self {
            LookupKind::State => format!("/state/{id}"),
            LookupKind::District => format!("/district/{id}"),
            LookupKind::LocalBody => format!("/local_body/{id}"),
        }
    }
}

/// Lookups only fire for values that parse as a nonzero id; everything
/// else (absent, junk, zero) resolves to no lookup at all.
pub fn numeric_id(value: Option<&str>) -> Option<u64> {
    value?.parse::<u64>().ok().filter(|id| *id > 0)
}

/// Fetch one page of facilities the current user may see.
#[server]
pub async fn fetch_facilities(
    request: FacilityRequest,
) -> Result<PaginatedResponse<FacilityModel>, ServerFnError> {
    let client = super::session_client().await;
    client
        .get("/facility", &request.query_pairs())
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

/// Resolve a state/district/local-body id to its display name.
#[server]
pub async fn fetch_lookup_name(kind: LookupKind, id: u64) -> Result<String, ServerFnError> {
    let client = super::session_client().await;
    let response: crate::types::NameResponse = client
        .get(&kind.path(id), &[])
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;
    Ok(response.name)
}

/// Fetch a CSV export payload.
#[server]
pub async fn export_csv(kind: ExportKind) -> Result<String, ServerFnError> {
    let client = super::session_client().await;
    client
        .get_text("/facility/export", &[("kind", kind.slug().to_string())])
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[derive(Serialize, Deserialize)]
struct NotifyPayload {
    message: String,
}

/// Send an ad-hoc notification to one facility. Callers validate the
/// message first; see [`super::notify`].
#[server]
pub async fn notify_facility(id: Uuid, message: String) -> Result<(), ServerFnError> {
    let client = super::session_client().await;
    client
        .post(&format!("/facility/{id}/notify"), &NotifyPayload { message })
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_derives_offset_from_page() {
        let mut state = QueryState::new(14);
        state.set_page(3);
        let request = FacilityRequest::from_state(&state);
        assert_eq!(request.page, 3);
        assert_eq!(request.offset, 28);
        assert_eq!(request.limit, 14);
    }

    #[test]
    fn unset_filters_are_omitted_from_query_pairs() {
        let mut state = QueryState::new(14);
        state.apply([("district", Some("7".to_string()))]);
        let pairs = FacilityRequest::from_state(&state).query_pairs();

        assert!(pairs.contains(&("district", "7".to_string())));
        assert!(pairs.iter().all(|(key, _)| *key != "search_text"));
        assert!(pairs.iter().all(|(key, _)| *key != "state"));
    }

    #[test]
    fn numeric_id_gates_lookups() {
        assert_eq!(numeric_id(Some("7")), Some(7));
        assert_eq!(numeric_id(Some("0")), None);
        assert_eq!(numeric_id(Some("kerala")), None);
        assert_eq!(numeric_id(None), None);
    }
}
