//! Advanced-filter slide-over panel

use dioxus::prelude::*;

use crate::listing::QueryState;
use crate::projection::FACILITY_TYPES;

#[derive(Props, Clone, PartialEq)]
pub struct FilterPanelProps {
    pub show: bool,
    /// Snapshot used to seed the fields when the panel opens.
    pub query: QueryState,
    pub on_close: EventHandler<()>,
    /// Emits the full set of filter updates; empty values clear keys.
    pub on_apply: EventHandler<Vec<(String, Option<String>)>>,
}

/// The field values a query snapshot seeds the panel with.
#[derive(Clone, Debug, PartialEq)]
struct FieldValues {
    state: String,
    district: String,
    local_body: String,
    facility_type: String,
    kasp: String,
}

impl FieldValues {
    fn from_query(query: &QueryState) -> Self {
        let seed = |key: &str| query.get(key).unwrap_or_default().to_string();
        Self {
            state: seed("state"),
            district: seed("district"),
            local_body: seed("local_body"),
            facility_type: seed("facility_type"),
            kasp: seed("kasp_empanelled"),
        }
    }
}

/// Slide-over with the location/type/empanelment filters. The panel only
/// collects values; the query store applies them.
#[component]
pub fn FilterPanel(props: FilterPanelProps) -> Element {
    let fields = FieldValues::from_query(&props.query);
    let mut state_id = use_signal(|| fields.state.clone());
    let mut district_id = use_signal(|| fields.district.clone());
    let mut local_body_id = use_signal(|| fields.local_body.clone());
    let mut facility_type = use_signal(|| fields.facility_type.clone());
    let mut kasp = use_signal(|| fields.kasp.clone());

    // The component stays mounted across open/close, so the fields must
    // re-seed from the current snapshot every time the panel opens;
    // otherwise a filter dismissed from its badge lingers here and Apply
    // would silently re-apply it.
    let show = props.show;
    use_effect(use_reactive(
        (&show, &fields),
        move |(show, fields): (bool, FieldValues)| {
            if show {
                state_id.set(fields.state);
                district_id.set(fields.district);
                local_body_id.set(fields.local_body);
                facility_type.set(fields.facility_type);
                kasp.set(fields.kasp);
            }
        },
    ));

    if !props.show {
        return rsx! {};
    }

    let on_apply = props.on_apply;
    let on_close = props.on_close;

    let updates_from = |state: String,
                             district: String,
                             local_body: String,
                             ftype: String,
                             kasp: String| {
        vec![
            ("state".to_string(), Some(state)),
            ("district".to_string(), Some(district)),
            ("local_body".to_string(), Some(local_body)),
            ("facility_type".to_string(), Some(ftype)),
            ("kasp_empanelled".to_string(), Some(kasp)),
        ]
    };

    let handle_apply = move |_| {
        on_apply.call(updates_from(
            state_id(),
            district_id(),
            local_body_id(),
            facility_type(),
            kasp(),
        ));
        on_close.call(());
    };

    let handle_clear = move |_| {
        state_id.set(String::new());
        district_id.set(String::new());
        local_body_id.set(String::new());
        facility_type.set(String::new());
        kasp.set(String::new());
        on_apply.call(updates_from(
            String::new(),
            String::new(),
            String::new(),
            String::new(),
            String::new(),
        ));
        on_close.call(());
    };

    rsx! {
        div {
            class: "fixed inset-0 z-10 flex justify-end bg-black/30",
            onclick: move |_| on_close.call(()),
            div {
                class: "bg-white w-full max-w-sm min-h-screen p-4 overflow-y-auto",
                onclick: move |e| e.stop_propagation(),

                div {
                    class: "flex items-center justify-between mb-4",
                    h2 { class: "text-lg font-semibold text-gray-900", "Filters" }
                    button {
                        class: "text-gray-400 hover:text-gray-700 text-xl",
                        onclick: move |_| on_close.call(()),
                        "\u{00d7}"
                    }
                }

                div {
                    class: "space-y-4",
                    div {
                        label { class: "block text-sm font-medium text-gray-700 mb-1", "State ID" }
                        input {
                            r#type: "number",
                            value: "{state_id}",
                            oninput: move |e| state_id.set(e.value()),
                            class: "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-emerald-500"
                        }
                    }
                    div {
                        label { class: "block text-sm font-medium text-gray-700 mb-1", "District ID" }
                        input {
                            r#type: "number",
                            value: "{district_id}",
                            oninput: move |e| district_id.set(e.value()),
                            class: "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-emerald-500"
                        }
                    }
                    div {
                        label { class: "block text-sm font-medium text-gray-700 mb-1", "Local Body ID" }
                        input {
                            r#type: "number",
                            value: "{local_body_id}",
                            oninput: move |e| local_body_id.set(e.value()),
                            class: "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-emerald-500"
                        }
                    }
                    div {
                        label { class: "block text-sm font-medium text-gray-700 mb-1", "Facility Type" }
                        select {
                            value: "{facility_type}",
                            oninput: move |e| facility_type.set(e.value()),
                            class: "w-full px-3 py-2 border border-gray-300 rounded-md bg-white",
                            option { value: "", "Any" }
                            for (code, label) in FACILITY_TYPES.iter() {
                                option { key: "{code}", value: "{code}", "{label}" }
                            }
                        }
                    }
                    div {
                        label { class: "block text-sm font-medium text-gray-700 mb-1", "KASP Empanelled" }
                        select {
                            value: "{kasp}",
                            oninput: move |e| kasp.set(e.value()),
                            class: "w-full px-3 py-2 border border-gray-300 rounded-md bg-white",
                            option { value: "", "Any" }
                            option { value: "true", "Yes" }
                            option { value: "false", "No" }
                        }
                    }
                }

                div {
                    class: "flex gap-2 mt-6",
                    button {
                        class: "flex-1 px-4 py-2 bg-emerald-600 text-white rounded-md hover:bg-emerald-700",
                        onclick: handle_apply,
                        "Apply"
                    }
                    button {
                        class: "flex-1 px-4 py-2 bg-gray-100 text-gray-700 rounded-md hover:bg-gray-200",
                        onclick: handle_clear,
                        "Clear"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_reflects_the_current_snapshot() {
        let mut query = QueryState::default();
        query.apply([("district", Some("7".to_string()))]);
        assert_eq!(FieldValues::from_query(&query).district, "7");
    }

    #[test]
    fn removed_filter_does_not_linger_in_a_reseed() {
        // Apply a district filter, then dismiss it from its badge: a
        // panel re-seeded afterwards must show the field empty, not the
        // old value.
        let mut query = QueryState::default();
        query.apply([("district", Some("7".to_string()))]);
        query.apply([("district", None::<String>)]);

        let reseeded = FieldValues::from_query(&query);
        assert_eq!(reseeded.district, "");
        assert_eq!(reseeded, FieldValues::from_query(&QueryState::default()));
    }
}
