//! App shell with top navigation

use dioxus::prelude::*;

use crate::auth::{logout, use_auth};
use crate::routes::Route;

/// Layout wrapping every page with the navigation bar.
#[component]
pub fn Shell() -> Element {
    let auth = use_auth();
    let navigator = use_navigator();

    let handle_logout = move |_| {
        spawn(async move {
            if logout().await.is_ok() {
                auth.clear();
                navigator.push(Route::Login {});
            }
        });
    };

    rsx! {
        div {
            class: "min-h-screen bg-gray-100",

            nav {
                class: "bg-white border-b border-gray-200 px-6 py-3",
                div {
                    class: "flex items-center justify-between",

                    Link {
                        to: Route::FacilityList {},
                        class: "text-xl font-bold text-emerald-700",
                        "Facility Management"
                    }

                    div {
                        class: "flex items-center gap-4",
                        if let Some(user) = auth.user.read().as_ref() {
                            span {
                                class: "text-sm text-gray-600",
                                "{user.username}"
                            }
                            button {
                                class: "text-sm text-gray-600 hover:text-gray-900 px-3 py-1.5 rounded hover:bg-gray-100",
                                onclick: handle_logout,
                                "Sign Out"
                            }
                        } else {
                            Link {
                                to: Route::Login {},
                                class: "text-sm font-medium text-emerald-700 px-3 py-1.5 rounded hover:bg-emerald-50",
                                "Sign In"
                            }
                        }
                    }
                }
            }

            main {
                Outlet::<Route> {}
            }
        }
    }
}
