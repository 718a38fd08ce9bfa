mod employee_table;
mod member_sidebar;
mod pagination;

use std::rc::Rc;

use dioxus::prelude::*;
use joinboard_shared::{derive_employee_page, EmployeeRecord, Pager, SortOrder};

use crate::seed;

use employee_table::EmployeeTable;
use member_sidebar::MemberSidebar;
use pagination::Pagination;

#[component]
pub fn JoinRequests() -> Element {
    let seed = use_hook(|| Rc::new(seed::load()));
    let mut store = use_signal({
        let seed = seed.clone();
        move || seed.employee_store()
    });
    let mut search = use_signal(String::new);
    let mut sort = use_signal(SortOrder::default);
    let mut page = use_signal(|| 1usize);

    let (rows, range, page_count_now) = {
        let store = store.read();
        let view = derive_employee_page(store.records(), &search.read(), sort(), page());
        let rows: Vec<EmployeeRecord> = view.rows.into_iter().cloned().collect();
        (rows, view.range, view.page_count)
    };
    let pager = Pager::at(page(), page_count_now);

    let accept = move |id: String| {
        store.write().toggle_active(&id);
        tracing::info!("Toggled join request {}", id);
    };

    let reject = move |id: String| {
        let next = store.write().reject_on_page(&id, &search.read(), page());
        tracing::info!("Rejected join request {}", id);
        page.set(next);
    };

    let mut restart = move || {
        let mut pager = pager;
        pager.reset();
        page.set(pager.page());
    };

    rsx! {
        div { class: "min-h-screen bg-gray-950 flex",
            MemberSidebar { members: seed.members.clone() }

            main { class: "flex-1 p-6",
                div { class: "flex items-center justify-between mb-6",
                    h1 { class: "text-2xl font-bold text-white", "Join Requests" }

                    div { class: "flex gap-3",
                        input {
                            class: "bg-gray-700 text-white px-4 py-2 rounded-lg focus:outline-none focus:ring-2 focus:ring-purple-500",
                            r#type: "text",
                            placeholder: "Search",
                            value: "{search}",
                            oninput: move |e| {
                                search.set(e.value());
                                restart();
                            },
                        }
                        select {
                            class: "bg-gray-700 text-white px-3 py-2 rounded-lg",
                            value: sort().as_str(),
                            onchange: move |e| match e.value().parse::<SortOrder>() {
                                Ok(order) => {
                                    sort.set(order);
                                    restart();
                                }
                                Err(err) => tracing::warn!("Ignoring sort selection: {}", err),
                            },
                            for order in SortOrder::variants() {
                                option {
                                    value: order.as_str(),
                                    selected: *order == sort(),
                                    "Sort by: {order}"
                                }
                            }
                        }
                    }
                }

                div { class: "bg-gray-900/90 border border-purple-900/50 rounded-lg",
                    EmployeeTable {
                        rows,
                        on_accept: accept,
                        on_reject: reject,
                    }
                    Pagination {
                        range,
                        pager,
                        on_change: move |p| page.set(p),
                    }
                }
            }
        }
    }
}
