//! CSV export menu

use dioxus::prelude::*;

use crate::api::export_csv;
use crate::export::{CsvDownload, ExportKind};
use crate::components::LoadingDots;

#[derive(Props, Clone, PartialEq)]
pub struct ExportMenuProps {
    /// Receives the finished download; the platform layer saves it.
    pub on_ready: EventHandler<CsvDownload>,
}

/// Download-type picker plus trigger button. Fetches the chosen export
/// and emits a [`CsvDownload`] instead of touching the DOM itself.
#[component]
pub fn ExportMenu(props: ExportMenuProps) -> Element {
    let mut selected = use_signal(|| ExportKind::Facilities);
    let mut is_downloading = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    let on_ready = props.on_ready;
    let handle_download = move |_| {
        if is_downloading() {
            return;
        }
        let kind = selected();
        spawn(async move {
            is_downloading.set(true);
            error.set(None);

            match export_csv(kind).await {
                Ok(data) => on_ready.call(CsvDownload {
                    filename: kind.filename(),
                    data,
                }),
                Err(e) => {
                    tracing::warn!(kind = kind.slug(), error = %e, "export failed");
                    error.set(Some("Export failed. Try again.".to_string()));
                }
            }

            is_downloading.set(false);
        });
    };

    rsx! {
        details {
            class: "bg-white shadow-md rounded-lg p-3",
            summary { class: "cursor-pointer text-lg select-none", "Downloads" }
            div {
                class: "mt-3",
                label { class: "block text-sm text-gray-700 mb-2", "Download type" }
                div {
                    class: "flex flex-row gap-4 items-center",
                    select {
                        value: "{selected().slug()}",
                        oninput: move |e| {
                            if let Some(kind) = ExportKind::ALL
                                .iter()
                                .find(|kind| kind.slug() == e.value())
                            {
                                selected.set(*kind);
                            }
                        },
                        class: "px-3 py-2 border border-gray-300 rounded-md bg-white",
                        for kind in ExportKind::ALL.iter() {
                            option { key: "{kind.slug()}", value: "{kind.slug()}", "{kind.label()}" }
                        }
                    }
                    if is_downloading() {
                        LoadingDots {}
                    } else {
                        button {
                            class: "px-4 py-2 bg-emerald-600 text-white rounded-full hover:shadow-md",
                            onclick: handle_download,
                            "\u{2B07}"
                        }
                    }
                }
                if let Some(err) = error() {
                    p { class: "mt-2 text-sm text-red-600", "{err}" }
                }
            }
        }
    }
}
