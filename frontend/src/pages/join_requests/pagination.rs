use dioxus::prelude::*;
use joinboard_shared::{Pager, ShowingRange};

#[component]
pub fn Pagination(range: ShowingRange, pager: Pager, on_change: EventHandler<usize>) -> Element {
    rsx! {
        div { class: "flex items-center justify-between p-4 border-t border-purple-900/50",
            p { class: "text-gray-400 text-sm", "{range}" }
            div { class: "flex gap-1",
                button {
                    class: "bg-gray-700 text-white px-3 py-1 rounded text-sm disabled:opacity-50 disabled:cursor-not-allowed",
                    disabled: !pager.has_previous(),
                    onclick: move |_| {
                        let mut pager = pager;
                        pager.previous();
                        on_change.call(pager.page());
                    },
                    "Previous"
                }
                for n in pager.numbered_pages() {
                    button {
                        key: "{n}",
                        class: if n == pager.page() {
                            "bg-purple-600 text-white px-3 py-1 rounded text-sm"
                        } else {
                            "bg-gray-700 hover:bg-gray-600 text-white px-3 py-1 rounded text-sm"
                        },
                        onclick: move |_| {
                            let mut pager = pager;
                            pager.go_to(n);
                            on_change.call(pager.page());
                        },
                        "{n}"
                    }
                }
                button {
                    class: "bg-gray-700 text-white px-3 py-1 rounded text-sm disabled:opacity-50 disabled:cursor-not-allowed",
                    disabled: !pager.has_next(),
                    onclick: move |_| {
                        let mut pager = pager;
                        pager.next();
                        on_change.call(pager.page());
                    },
                    "Next"
                }
            }
        }
    }
}
