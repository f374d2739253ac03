//! Route definitions for the application

use dioxus::prelude::*;

use crate::components::Shell;
use crate::pages::{FacilityCreate, FacilityDetail, FacilityList, FacilityPatients, Login};

/// All application routes
#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[route("/login")]
    Login {},

    #[layout(Shell)]
        #[route("/")]
        FacilityList {},

        #[route("/facility/create")]
        FacilityCreate {},

        #[route("/facility/:id")]
        FacilityDetail { id: String },

        #[route("/facility/:id/patients")]
        FacilityPatients { id: String },
}
