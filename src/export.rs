//! CSV export kinds and download payloads
//!
//! The set of exports is a closed enumeration; label, request parameter,
//! and file stem for each kind are declared here and nowhere else. The
//! export flow produces a [`CsvDownload`] value and hands it to the
//! caller; only the platform layer touches the browser to save it.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// The CSV exports the facility backend offers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExportKind {
    Facilities,
    Capacities,
    Doctors,
    Triages,
}

impl ExportKind {
    pub const ALL: [ExportKind; 4] = [
        ExportKind::Facilities,
        ExportKind::Capacities,
        ExportKind::Doctors,
        ExportKind::Triages,
    ];

    /// Menu label.
    pub fn label(&self) -> &'static str {
        match self {
            ExportKind::Facilities => "Facility List",
            ExportKind::Capacities => "Facility Capacity List",
            ExportKind::Doctors => "Facility Doctors List",
            ExportKind::Triages => "Facility Triage Data",
        }
    }

    /// Value of the `kind` request parameter, doubling as the file stem.
    pub fn slug(&self) -> &'static str {
        match self {
            ExportKind::Facilities => "facilities",
            ExportKind::Capacities => "facility-capacity",
            ExportKind::Doctors => "facility-doctors",
            ExportKind::Triages => "facility-triage",
        }
    }

    /// Suggested filename for a download produced at `at`. The timestamp
    /// uses a 12-hour clock, matching the backend's historical exports.
    pub fn filename_at(&self, at: DateTime<Local>) -> String {
        format!("{}-{}.csv", self.slug(), at.format("%d-%m-%Y:%I:%M:%S"))
    }

    pub fn filename(&self) -> String {
        self.filename_at(Local::now())
    }
}

/// A completed export, ready for the platform layer to save.
#[derive(Clone, Debug, PartialEq)]
pub struct CsvDownload {
    pub filename: String,
    pub data: String,
}

/// Trigger a browser download of the payload via a transient data-URL
/// anchor.
#[cfg(feature = "web")]
pub fn save_in_browser(download: &CsvDownload) {
    use web_sys::wasm_bindgen::JsCast;

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Ok(anchor) = document.create_element("a") else {
        return;
    };
    let href = format!(
        "data:text/csv;charset=utf-8,{}",
        urlencoding::encode(&download.data)
    );
    let _ = anchor.set_attribute("href", &href);
    let _ = anchor.set_attribute("download", &download.filename);
    if let Some(anchor) = anchor.dyn_ref::<web_sys::HtmlElement>() {
        anchor.click();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn filename_matches_export_pattern() {
        let at = Local.with_ymd_and_hms(2023, 4, 7, 15, 4, 5).unwrap();
        assert_eq!(
            ExportKind::Facilities.filename_at(at),
            "facilities-07-04-2023:03:04:05.csv"
        );
        assert_eq!(
            ExportKind::Capacities.filename_at(at),
            "facility-capacity-07-04-2023:03:04:05.csv"
        );
    }

    #[test]
    fn every_kind_has_distinct_slug_and_label() {
        for kind in ExportKind::ALL {
            assert!(!kind.label().is_empty());
            assert!(!kind.slug().is_empty());
        }
        let slugs: Vec<_> = ExportKind::ALL.iter().map(|k| k.slug()).collect();
        let mut unique = slugs.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), slugs.len());
    }
}
