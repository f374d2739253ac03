//! Pagination widget

use dioxus::prelude::*;

use crate::listing::page_count;

#[derive(Props, Clone, PartialEq)]
pub struct PaginationProps {
    pub page: u32,
    pub total_count: u32,
    pub limit: u32,
    pub on_change: EventHandler<u32>,
}

/// Prev/next pager with the current position. Emits the requested page;
/// the query store owns the actual state.
#[component]
pub fn Pagination(props: PaginationProps) -> Element {
    let pages = page_count(props.total_count, props.limit);
    let page = props.page.min(pages);
    let at_start = page <= 1;
    let at_end = page >= pages;

    rsx! {
        div {
            class: "flex items-center justify-center gap-4 mt-6",
            button {
                class: "px-3 py-1.5 bg-white shadow text-sm rounded hover:bg-gray-50 disabled:opacity-40 disabled:cursor-not-allowed",
                disabled: at_start,
                onclick: move |_| props.on_change.call(page.saturating_sub(1).max(1)),
                "Previous"
            }
            span {
                class: "text-sm text-gray-600",
                "Page "
                span { class: "font-medium text-gray-900", "{page}" }
                " of "
                span { class: "font-medium text-gray-900", "{pages}" }
            }
            button {
                class: "px-3 py-1.5 bg-white shadow text-sm rounded hover:bg-gray-50 disabled:opacity-40 disabled:cursor-not-allowed",
                disabled: at_end,
                onclick: move |_| props.on_change.call(page + 1),
                "Next"
            }
        }
    }
}
