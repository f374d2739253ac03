//! Active-filter badge row

use dioxus::prelude::*;

use crate::listing::Badge;

#[derive(Props, Clone, PartialEq)]
pub struct FilterBadgesProps {
    pub badges: Vec<Badge>,
    /// Called with the query key of a dismissed badge.
    pub on_remove: EventHandler<String>,
}

/// One chip per active filter, each dismissible.
#[component]
pub fn FilterBadges(props: FilterBadgesProps) -> Element {
    if props.badges.is_empty() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "flex flex-wrap gap-2 mt-4",
            for badge in props.badges.iter() {
                span {
                    key: "{badge.key}",
                    class: "inline-flex items-center gap-1.5 px-2.5 py-1 rounded-full text-xs font-medium bg-gray-100 text-gray-700",
                    span { class: "text-gray-500", "{badge.label}:" }
                    "{badge.value}"
                    button {
                        class: "ml-1 text-gray-400 hover:text-gray-700",
                        onclick: {
                            let key = badge.key.clone();
                            move |_| props.on_remove.call(key.clone())
                        },
                        "\u{00d7}"
                    }
                }
            }
        }
    }
}
