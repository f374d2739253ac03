//! Facility list page and facility stubs

use dioxus::prelude::*;

use crate::api::{fetch_facilities, fetch_lookup_name, numeric_id, FacilityRequest, LookupKind};
use crate::auth::use_auth;
use crate::components::{
    ExportMenu, FacilityCard, FacilityCardSkeleton, FilterBadges, FilterPanel, LoadingDots,
    Pagination,
};
use crate::export::CsvDownload;
use crate::listing::{
    active_badges, list_body, BadgeResolver, FetchCoordinator, FetchResult, ListBody, ListPhase,
    QueryState, DEFAULT_PAGE_SIZE,
};
use crate::projection::{facility_type_label, project};
use crate::routes::Route;
use crate::types::FacilityModel;

/// Seed the query state from the address bar so shared links and reloads
/// restore the same view.
fn initial_query() -> QueryState {
    #[cfg(feature = "web")]
    if let Some(raw) = crate::listing::url::current_search() {
        return QueryState::from_query_string(&raw, DEFAULT_PAGE_SIZE);
    }
    QueryState::new(DEFAULT_PAGE_SIZE)
}

/// Drop a dismissed filter from the query. Dismissing the search badge
/// also empties the search box, which otherwise would keep showing a
/// term that is no longer applied.
fn dismiss_filter(query: &mut QueryState, search_box: &mut String, key: &str) {
    if key == "search" {
        search_box.clear();
    }
    query.apply([(key.to_string(), None::<String>)]);
}

/// Facility list page - searchable, filterable, paginated.
#[component]
pub fn FacilityList() -> Element {
    let auth = use_auth();
    let can_notify = auth.can_notify();

    let mut query = use_signal(initial_query);
    let coordinator = use_hook(FetchCoordinator::default);
    let mut phase = use_signal(|| ListPhase::<FacilityModel>::Idle);
    let mut search_input =
        use_signal(|| query.peek().get("search").unwrap_or_default().to_string());
    let mut show_filters = use_signal(|| false);

    // Refetch whenever the query state changes. A superseded in-flight
    // request may still resolve later; its ticket will no longer be
    // current and its response is dropped.
    use_effect(move || {
        let request = FacilityRequest::from_state(&query.read());
        #[cfg(feature = "web")]
        crate::listing::url::publish(&query.read().to_query_string());

        let ticket = coordinator.begin();
        phase.set(ListPhase::Loading);
        spawn(async move {
            let outcome = fetch_facilities(request).await;
            if !ticket.is_current() {
                tracing::debug!("discarding superseded facility page response");
                return;
            }
            match outcome {
                Ok(page) => phase.set(ListPhase::Loaded(FetchResult {
                    items: page.results,
                    total_count: page.count,
                })),
                Err(e) => {
                    tracing::warn!(error = %e, "facility list fetch failed");
                    phase.set(ListPhase::Failed(e.to_string()));
                }
            }
        });
    });

    // Resolve location filter ids to display names for the badges. Each
    // lookup has its own coordinator so a rapid filter change cannot pin
    // a name from a superseded request.
    let mut state_name = use_signal(String::new);
    let state_lookup = use_hook(FetchCoordinator::default);
    use_effect(move || {
        let id = numeric_id(query.read().get("state"));
        let ticket = state_lookup.begin();
        spawn(async move {
            let name = match id {
                Some(id) => fetch_lookup_name(LookupKind::State, id)
                    .await
                    .unwrap_or_default(),
                None => String::new(),
            };
            if ticket.is_current() {
                state_name.set(name);
            }
        });
    });

    let mut district_name = use_signal(String::new);
    let district_lookup = use_hook(FetchCoordinator::default);
    use_effect(move || {
        let id = numeric_id(query.read().get("district"));
        let ticket = district_lookup.begin();
        spawn(async move {
            let name = match id {
                Some(id) => fetch_lookup_name(LookupKind::District, id)
                    .await
                    .unwrap_or_default(),
                None => String::new(),
            };
            if ticket.is_current() {
                district_name.set(name);
            }
        });
    });

    let mut local_body_name = use_signal(String::new);
    let local_body_lookup = use_hook(FetchCoordinator::default);
    use_effect(move || {
        let id = numeric_id(query.read().get("local_body"));
        let ticket = local_body_lookup.begin();
        spawn(async move {
            let name = match id {
                Some(id) => fetch_lookup_name(LookupKind::LocalBody, id)
                    .await
                    .unwrap_or_default(),
                None => String::new(),
            };
            if ticket.is_current() {
                local_body_name.set(name);
            }
        });
    });

    let commit_search = move |value: String| {
        query.with_mut(|q| q.apply([("search", Some(value))]));
    };

    // Debounce keystrokes; only the value still in the box when the
    // timer fires reaches the query state.
    let handle_search = move |e: FormEvent| {
        let value = e.value();
        search_input.set(value.clone());
        #[cfg(feature = "web")]
        {
            let mut commit = commit_search;
            spawn(async move {
                gloo_timers::future::TimeoutFuture::new(450).await;
                if *search_input.peek() == value {
                    commit(value);
                }
            });
        }
        #[cfg(not(feature = "web"))]
        {
            let mut commit = commit_search;
            commit(value);
        }
    };

    let handle_download = move |download: CsvDownload| {
        #[cfg(feature = "web")]
        crate::export::save_in_browser(&download);
        #[cfg(not(feature = "web"))]
        let _ = download;
    };

    let (page, limit, has_filters) = {
        let q = query.read();
        (q.page(), q.limit(), q.has_filters())
    };
    let total_count = phase.read().total_count();
    let is_loading = phase.read().is_loading();

    let badges = {
        let q = query.read();
        let identity = |raw: &str| raw.to_string();
        let resolve_state = |_: &str| state_name();
        let resolve_district = |_: &str| district_name();
        let resolve_local_body = |_: &str| local_body_name();
        let resolve_type = |raw: &str| {
            raw.parse::<u32>()
                .map(facility_type_label)
                .unwrap_or("")
                .to_string()
        };
        let resolve_kasp = |raw: &str| match raw {
            "true" => "Yes".to_string(),
            "false" => "No".to_string(),
            _ => String::new(),
        };
        active_badges(
            &q,
            &[
                BadgeResolver::new("search", "Facility/District Name", &identity),
                BadgeResolver::new("state", "State", &resolve_state),
                BadgeResolver::new("district", "District", &resolve_district),
                BadgeResolver::new("local_body", "Local Body", &resolve_local_body),
                BadgeResolver::new("facility_type", "Facility type", &resolve_type),
                BadgeResolver::new("kasp_empanelled", "KASP Empanelled", &resolve_kasp),
            ],
        )
    };

    let list_section = match phase() {
        ListPhase::Idle | ListPhase::Loading => rsx! {
            div {
                class: "grid lg:grid-cols-2 md:grid-cols-1 gap-4",
                for i in 0..4 {
                    FacilityCardSkeleton { key: "{i}" }
                }
            }
        },
        ListPhase::Failed(err) => rsx! {
            div {
                class: "bg-red-50 border border-red-200 text-red-700 p-4 rounded-lg",
                "Unable to load facilities: {err}"
            }
        },
        ListPhase::Loaded(result) => {
            let views = project(&result.items);
            match list_body(views.len(), has_filters) {
                ListBody::Results => rsx! {
                    div {
                        class: "grid lg:grid-cols-2 md:grid-cols-1 gap-4",
                        for facility in views.iter() {
                            FacilityCard {
                                key: "{facility.id}",
                                facility: facility.clone(),
                                can_notify,
                            }
                        }
                    }
                    Pagination {
                        page,
                        total_count: result.total_count,
                        limit,
                        on_change: move |p| query.with_mut(|q| q.set_page(p)),
                    }
                },
                ListBody::NoMatches => rsx! {
                    div {
                        class: "w-full bg-white rounded-lg p-6",
                        p {
                            class: "text-2xl mt-4 text-gray-600 font-bold flex justify-center w-full",
                            "No facilities match the selected filters"
                        }
                    }
                },
                ListBody::CreateNew => rsx! {
                    Link {
                        to: Route::FacilityCreate {},
                        class: "block p-16 mt-4 bg-white shadow rounded-md border border-gray-300 text-center cursor-pointer hover:bg-gray-100",
                        span { class: "text-3xl block", "+" }
                        span { class: "mt-2 text-xl block font-semibold", "Create a new facility" }
                        span {
                            class: "text-xs mt-1 text-red-700 block",
                            "Check for duplicates before creating"
                        }
                    }
                },
            }
        }
    };

    rsx! {
        div {
            class: "px-6 py-4",

            // Title + downloads
            div {
                class: "grid md:grid-cols-2 gap-4 items-start",
                h1 { class: "text-3xl font-bold text-gray-900", "Facilities" }
                div {
                    class: "flex md:justify-end",
                    ExportMenu { on_ready: handle_download }
                }
            }

            // Stat card + search + filter trigger
            div {
                class: "lg:flex gap-4 mt-6 items-start",
                div {
                    class: "bg-white overflow-hidden shadow rounded-lg p-6 min-w-fit",
                    dl {
                        dt { class: "text-sm font-medium text-gray-500 truncate", "Total Facilities" }
                        dd {
                            class: "mt-4 text-5xl font-semibold text-gray-900",
                            if is_loading {
                                LoadingDots {}
                            } else {
                                "{total_count}"
                            }
                        }
                    }
                }
                div {
                    class: "flex flex-col md:flex-row gap-2 flex-grow my-4",
                    input {
                        r#type: "text",
                        value: "{search_input}",
                        oninput: handle_search,
                        placeholder: "Search by facility or district name...",
                        class: "w-full px-4 py-3 bg-white border border-gray-200 rounded-lg focus:outline-none focus:ring-2 focus:ring-emerald-500"
                    }
                    button {
                        class: "px-4 py-3 border border-emerald-600 text-emerald-700 rounded-lg hover:bg-emerald-50 whitespace-nowrap",
                        onclick: move |_| show_filters.set(true),
                        "Advanced Filters"
                    }
                }
            }

            FilterPanel {
                show: show_filters(),
                query: query(),
                on_close: move |_| show_filters.set(false),
                on_apply: move |updates: Vec<(String, Option<String>)>| {
                    query.with_mut(|q| q.apply(updates));
                },
            }

            FilterBadges {
                badges,
                on_remove: move |key: String| {
                    let mut box_text = search_input();
                    query.with_mut(|q| dismiss_filter(q, &mut box_text, &key));
                    search_input.set(box_text);
                },
            }

            div {
                class: "mt-6 pb-6",
                {list_section}
            }
        }
    }
}

/// Facility detail page
#[component]
pub fn FacilityDetail(id: String) -> Element {
    rsx! {
        div {
            class: "px-6 py-4",
            h1 { class: "text-2xl font-bold text-gray-900 mb-6", "Facility Detail" }
            p { class: "text-gray-600", "Facility ID: {id}" }
            // TODO: Implement full facility detail view
        }
    }
}

/// Patients of one facility
#[component]
pub fn FacilityPatients(id: String) -> Element {
    rsx! {
        div {
            class: "px-6 py-4",
            h1 { class: "text-2xl font-bold text-gray-900 mb-6", "Patients" }
            p { class: "text-gray-600", "Facility ID: {id}" }
            // TODO: Implement the patient list for a facility
        }
    }
}

/// Facility creation page
#[component]
pub fn FacilityCreate() -> Element {
    rsx! {
        div {
            class: "px-6 py-4",
            h1 { class: "text-2xl font-bold text-gray-900 mb-6", "Create Facility" }
            p { class: "text-gray-600", "Facility registration form" }
            // TODO: Implement the facility registration form
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dismissing_search_badge_empties_the_box() {
        let mut query = QueryState::default();
        query.apply([("search", Some("clinic".to_string()))]);
        let mut box_text = "clinic".to_string();

        dismiss_filter(&mut query, &mut box_text, "search");

        assert_eq!(query.get("search"), None);
        assert_eq!(box_text, "", "the box must not show an unapplied term");
    }

    #[test]
    fn dismissing_other_badges_leaves_the_box_alone() {
        let mut query = QueryState::default();
        query.apply([
            ("search", Some("clinic".to_string())),
            ("district", Some("7".to_string())),
        ]);
        let mut box_text = "clinic".to_string();

        dismiss_filter(&mut query, &mut box_text, "district");

        assert_eq!(query.get("district"), None);
        assert_eq!(query.get("search"), Some("clinic"));
        assert_eq!(box_text, "clinic");
    }
}
