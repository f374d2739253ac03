//! Result projection: raw facility records to list-item view models
//!
//! Pure lookups only; coded fields resolve against the static tables
//! below and anything unmapped degrades to an empty label.

use uuid::Uuid;

use crate::types::FacilityModel;

/// Facility-type codes as assigned by the backend.
pub const FACILITY_TYPES: &[(u32, &str)] = &[
    (1, "Educational Inst"),
    (2, "Private Hospital"),
    (3, "Other"),
    (4, "Hostel"),
    (5, "Shelter"),
    (800, "Primary Health Centres"),
    (802, "Family Health Centres"),
    (803, "Community Health Centres"),
    (840, "Women and Child Health Centres"),
    (850, "General hospitals"),
    (860, "District Hospitals"),
    (870, "Govt Medical College Hospitals"),
    (950, "Corona Testing Labs"),
    (1000, "Corona Care Centre"),
];

/// Feature codes a facility may advertise.
pub const FACILITY_FEATURES: &[(u32, &str)] = &[
    (1, "CT Scan"),
    (2, "Maternity Care"),
    (3, "X-Ray"),
    (4, "Neonatal Care"),
    (5, "Operation Theater"),
    (6, "Blood Bank"),
];

/// Label shown on facilities empanelled under the state insurance scheme.
pub const KASP_LABEL: &str = "KASP";

/// Human-readable label for a facility-type code, empty when unmapped.
pub fn facility_type_label(code: u32) -> &'static str {
    FACILITY_TYPES
        .iter()
        .find(|(id, _)| *id == code)
        .map(|(_, label)| *label)
        .unwrap_or("")
}

fn feature_label(code: u32) -> Option<&'static str> {
    FACILITY_FEATURES
        .iter()
        .find(|(id, _)| *id == code)
        .map(|(_, label)| *label)
}

/// What a facility card needs to render.
#[derive(Clone, Debug, PartialEq)]
pub struct FacilityView {
    pub id: Uuid,
    pub name: String,
    pub facility_type: &'static str,
    pub features: Vec<&'static str>,
    pub local_body: String,
    pub phone_number: String,
    pub kasp_empanelled: bool,
    pub cover_image_url: Option<String>,
}

/// Project raw records into view models. Unknown feature codes are
/// skipped rather than rendered as numbers.
pub fn project(records: &[FacilityModel]) -> Vec<FacilityView> {
    records
        .iter()
        .map(|facility| FacilityView {
            id: facility.id,
            name: facility.name.clone(),
            facility_type: facility
                .facility_type
                .map(facility_type_label)
                .unwrap_or(""),
            features: facility
                .features
                .iter()
                .flatten()
                .filter_map(|code| feature_label(*code))
                .collect(),
            local_body: facility
                .local_body_object
                .as_ref()
                .map(|body| body.name.clone())
                .unwrap_or_default(),
            phone_number: facility.phone_number.clone().unwrap_or_default(),
            kasp_empanelled: facility.kasp_empanelled.unwrap_or(false),
            cover_image_url: facility.read_cover_image_url.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LocalBodyObject;

    fn record(facility_type: Option<u32>) -> FacilityModel {
        FacilityModel {
            id: Uuid::new_v4(),
            name: "General Hospital".to_string(),
            facility_type,
            features: Some(vec![2, 999, 6]),
            local_body_object: Some(LocalBodyObject {
                name: "North Ward".to_string(),
            }),
            phone_number: Some("+911234567890".to_string()),
            kasp_empanelled: Some(true),
            read_cover_image_url: None,
        }
    }

    #[test]
    fn known_code_resolves_to_label() {
        assert_eq!(facility_type_label(860), "District Hospitals");
        assert_eq!(facility_type_label(2), "Private Hospital");
    }

    #[test]
    fn unmapped_code_resolves_to_empty_string() {
        assert_eq!(facility_type_label(12345), "");
    }

    #[test]
    fn projection_resolves_codes_and_drops_unknown_features() {
        let views = project(&[record(Some(850))]);
        assert_eq!(views.len(), 1);
        let view = &views[0];
        assert_eq!(view.facility_type, "General hospitals");
        assert_eq!(view.features, vec!["Maternity Care", "Blood Bank"]);
        assert_eq!(view.local_body, "North Ward");
        assert!(view.kasp_empanelled);
    }

    #[test]
    fn projection_tolerates_missing_fields() {
        let mut bare = record(None);
        bare.features = None;
        bare.local_body_object = None;
        bare.phone_number = None;
        bare.kasp_empanelled = None;

        let view = &project(&[bare])[0];
        assert_eq!(view.facility_type, "");
        assert!(view.features.is_empty());
        assert_eq!(view.local_body, "");
        assert_eq!(view.phone_number, "");
        assert!(!view.kasp_empanelled);
    }
}
