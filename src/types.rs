//! Type definitions for the facility backend's REST API

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// Common Types
// ============================================================================

/// One page of a remote collection. A new page replaces the previous one
/// wholesale; pages are never merged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    pub results: Vec<T>,
    pub count: u32,
}

/// Name payload returned by the state/district/local-body lookups.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NameResponse {
    pub name: String,
}

// ============================================================================
// Facility Types
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocalBodyObject {
    pub name: String,
}

/// A facility record as the list endpoint returns it. Coded fields are
/// resolved to labels by the projector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FacilityModel {
    pub id: Uuid,
    pub name: String,
    pub facility_type: Option<u32>,
    pub features: Option<Vec<u32>>,
    pub local_body_object: Option<LocalBodyObject>,
    pub phone_number: Option<String>,
    pub kasp_empanelled: Option<bool>,
    pub read_cover_image_url: Option<String>,
}

// ============================================================================
// Auth Types
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserRole {
    Volunteer,
    Staff,
    DistrictAdmin,
    StateAdmin,
}

impl UserRole {
    /// Staff accounts may browse but not send ad-hoc notifications.
    pub fn can_notify(&self) -> bool {
        !matches!(self, UserRole::Staff)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthUser {
    pub username: String,
    pub user_type: UserRole,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn staff_cannot_notify() {
        assert!(!UserRole::Staff.can_notify());
        assert!(UserRole::DistrictAdmin.can_notify());
        assert!(UserRole::StateAdmin.can_notify());
        assert!(UserRole::Volunteer.can_notify());
    }

    #[test]
    fn user_role_round_trips_backend_strings() {
        let role: UserRole = serde_json::from_str("\"DistrictAdmin\"").unwrap();
        assert_eq!(role, UserRole::DistrictAdmin);
        assert_eq!(serde_json::to_string(&UserRole::Staff).unwrap(), "\"Staff\"");
    }
}
