//! Facility card component

use dioxus::prelude::*;

use crate::api::notify::{submit_notification, NotifyError};
use crate::api::notify_facility;
use crate::projection::{FacilityView, KASP_LABEL};
use crate::routes::Route;

/// Props for FacilityCard
#[derive(Props, Clone, PartialEq)]
pub struct FacilityCardProps {
    pub facility: FacilityView,
    /// Whether the signed-in role may notify facilities. Decided by the
    /// page from the auth context, not read here.
    pub can_notify: bool,
}

/// Card for a single facility, with an inline notify dialog.
#[component]
pub fn FacilityCard(props: FacilityCardProps) -> Element {
    let facility = &props.facility;

    let mut show_notify = use_signal(|| false);
    let mut message = use_signal(String::new);
    let mut feedback = use_signal(|| None::<Result<(), String>>);
    let mut is_sending = use_signal(|| false);

    let facility_id = facility.id;
    let handle_notify = move |e: FormEvent| {
        e.prevent_default();
        if is_sending() {
            return;
        }
        spawn(async move {
            is_sending.set(true);
            let outcome = submit_notification(&message(), |text| async move {
                notify_facility(facility_id, text)
                    .await
                    .map_err(|e| e.to_string())
            })
            .await;

            match outcome {
                Ok(()) => {
                    feedback.set(Some(Ok(())));
                    message.set(String::new());
                    show_notify.set(false);
                }
                Err(NotifyError::EmptyMessage) => {
                    feedback.set(Some(Err(NotifyError::EmptyMessage.to_string())));
                }
                Err(NotifyError::Send(reason)) => {
                    tracing::warn!(%facility_id, reason, "facility notification failed");
                    feedback.set(Some(Err("Something went wrong...".to_string())));
                }
            }
            is_sending.set(false);
        });
    };

    rsx! {
        div {
            class: "bg-white rounded-lg shadow border border-gray-100 overflow-hidden flex flex-col h-full hover:border-emerald-500 transition-colors",

            // Cover image / placeholder
            div {
                class: "h-32 bg-gray-200 flex items-center justify-center",
                if let Some(url) = &facility.cover_image_url {
                    img {
                        src: "{url}",
                        alt: "{facility.name}",
                        class: "w-full h-full object-cover"
                    }
                } else {
                    span { class: "text-4xl text-gray-400", "\u{1F3E5}" }
                }
            }

            div {
                class: "p-4 flex flex-col flex-grow",

                // Name + KASP badge
                div {
                    class: "flex items-start justify-between gap-2",
                    h3 { class: "text-lg font-bold text-gray-900 capitalize", "{facility.name}" }
                    if facility.kasp_empanelled {
                        span {
                            class: "px-2.5 py-0.5 rounded-md text-sm font-medium bg-yellow-100 text-yellow-800",
                            "{KASP_LABEL}"
                        }
                    }
                }

                // Type + feature chips
                div {
                    class: "flex flex-wrap gap-2 mt-2",
                    if !facility.facility_type.is_empty() {
                        span {
                            class: "px-2.5 py-0.5 rounded-md text-sm font-medium bg-blue-100 text-blue-800",
                            "{facility.facility_type}"
                        }
                    }
                    for feature in facility.features.iter() {
                        span {
                            key: "{feature}",
                            class: "px-2.5 py-0.5 rounded-md text-sm font-medium bg-emerald-100 text-emerald-700",
                            "{feature}"
                        }
                    }
                }

                if !facility.local_body.is_empty() {
                    p { class: "mt-2 font-semibold text-sm text-gray-700", "{facility.local_body}" }
                }
                if !facility.phone_number.is_empty() {
                    a {
                        href: "tel:{facility.phone_number}",
                        class: "text-sm font-medium tracking-widest text-gray-600",
                        "{facility.phone_number}"
                    }
                }

                // Actions
                div {
                    class: "mt-auto pt-3 border-t border-gray-100 flex justify-between flex-wrap gap-2",
                    div {
                        if props.can_notify {
                            button {
                                class: "px-3 py-1.5 bg-white shadow text-sm rounded hover:bg-gray-50",
                                onclick: move |_| {
                                    feedback.set(None);
                                    show_notify.set(true);
                                },
                                "Notify"
                            }
                        }
                    }
                    div {
                        class: "flex gap-2",
                        Link {
                            to: Route::FacilityDetail { id: facility.id.to_string() },
                            class: "px-3 py-1.5 bg-white shadow text-sm rounded hover:bg-gray-50",
                            "Facility"
                        }
                        Link {
                            to: Route::FacilityPatients { id: facility.id.to_string() },
                            class: "px-3 py-1.5 bg-white shadow text-sm rounded hover:bg-gray-50",
                            "Patients"
                        }
                    }
                }
            }

            // Notify dialog
            if show_notify() {
                div {
                    class: "fixed inset-0 z-20 flex items-center justify-center bg-black/40",
                    form {
                        class: "bg-white rounded shadow p-8 m-4 max-w-lg w-2/3 flex flex-col",
                        onsubmit: handle_notify,
                        h2 { class: "text-2xl mb-4", "Notify: {facility.name}" }
                        if let Some(Err(err)) = feedback() {
                            div {
                                class: "mb-3 p-2 bg-red-50 border border-red-200 text-red-700 rounded text-sm",
                                "{err}"
                            }
                        }
                        textarea {
                            rows: "6",
                            class: "w-full border rounded p-2",
                            placeholder: "Type your message...",
                            value: "{message}",
                            oninput: move |e| message.set(e.value()),
                        }
                        div {
                            class: "flex flex-col-reverse md:flex-row gap-2 mt-4 justify-end",
                            button {
                                r#type: "button",
                                class: "px-4 py-2 bg-red-100 text-red-700 rounded hover:bg-red-200",
                                onclick: move |_| show_notify.set(false),
                                "Cancel"
                            }
                            button {
                                r#type: "submit",
                                class: "px-4 py-2 bg-emerald-600 text-white rounded hover:bg-emerald-700 disabled:opacity-50",
                                disabled: is_sending(),
                                if is_sending() { "Sending..." } else { "Send Notification" }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Placeholder card shown while a page is loading.
#[component]
pub fn FacilityCardSkeleton() -> Element {
    rsx! {
        div {
            class: "bg-white rounded-lg shadow border border-gray-100 overflow-hidden animate-pulse",
            div { class: "h-32 bg-gray-200" }
            div {
                class: "p-4 space-y-3",
                div { class: "h-5 bg-gray-200 rounded w-2/3" }
                div { class: "h-4 bg-gray-200 rounded w-1/2" }
                div { class: "h-4 bg-gray-200 rounded w-1/3" }
            }
        }
    }
}
