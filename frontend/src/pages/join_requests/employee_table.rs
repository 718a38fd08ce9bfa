use dioxus::prelude::*;
use joinboard_shared::EmployeeRecord;

#[component]
pub fn EmployeeTable(
    rows: Vec<EmployeeRecord>,
    on_accept: EventHandler<String>,
    on_reject: EventHandler<String>,
) -> Element {
    rsx! {
        table { class: "w-full text-left text-sm",
            thead { class: "text-gray-400 border-b border-purple-900/50",
                tr {
                    th { class: "p-4", "Name" }
                    th { class: "p-4", "Position" }
                    th { class: "p-4", "Role" }
                    th { class: "p-4", "Email" }
                    th { class: "p-4", "Attendance" }
                    th { class: "p-4", "Action" }
                }
            }
            tbody {
                for row in rows.iter() {
                    EmployeeRow {
                        key: "{row.id}",
                        row: row.clone(),
                        on_accept,
                        on_reject,
                    }
                }
                if rows.is_empty() {
                    tr {
                        td {
                            class: "p-8 text-center text-gray-500",
                            colspan: "6",
                            "No employees found"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn EmployeeRow(
    row: EmployeeRecord,
    on_accept: EventHandler<String>,
    on_reject: EventHandler<String>,
) -> Element {
    let accept_id = row.id.clone();
    let reject_id = row.id.clone();

    rsx! {
        tr { class: "border-b border-gray-800 text-gray-300",
            td { class: "p-4 text-white font-semibold", "{row.name}" }
            td { class: "p-4", "{row.position}" }
            td { class: "p-4", "{row.role}" }
            td { class: "p-4", "{row.email}" }
            td { class: "p-4", "{row.attendance}" }
            td { class: "p-4 flex gap-2",
                button {
                    class: if row.active {
                        "bg-green-700 text-white px-3 py-1 rounded transition-colors"
                    } else {
                        "bg-purple-600 hover:bg-purple-700 text-white px-3 py-1 rounded transition-colors"
                    },
                    onclick: move |_| on_accept.call(accept_id.clone()),
                    if row.active {
                        "Accepted"
                    } else {
                        "Accept"
                    }
                }
                button {
                    class: "bg-gray-700 hover:bg-red-700 text-white px-3 py-1 rounded transition-colors",
                    onclick: move |_| on_reject.call(reject_id.clone()),
                    "Reject"
                }
            }
        }
    }
}
