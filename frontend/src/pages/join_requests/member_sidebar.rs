use dioxus::prelude::*;
use joinboard_shared::{group_members, MemberRecord};

#[component]
pub fn MemberSidebar(members: Vec<MemberRecord>) -> Element {
    let mut query = use_signal(String::new);

    let groups = group_members(&members, &query.read());
    let (online_count, offline_count) = (groups.online_count(), groups.offline_count());
    let online: Vec<MemberRecord> = groups.online.into_iter().cloned().collect();
    let offline: Vec<MemberRecord> = groups.offline.into_iter().cloned().collect();

    rsx! {
        aside { class: "w-64 bg-gray-900/90 border-r border-purple-900/50 p-4",
            input {
                class: "w-full bg-gray-700 text-white px-3 py-2 rounded text-sm mb-4 focus:outline-none focus:ring-2 focus:ring-purple-500",
                r#type: "text",
                placeholder: "Search members",
                value: "{query}",
                oninput: move |e| query.set(e.value()),
            }
            MemberSection { title: "Online", count: online_count, members: online }
            MemberSection { title: "Offline", count: offline_count, members: offline }
        }
    }
}

#[component]
fn MemberSection(title: String, count: usize, members: Vec<MemberRecord>) -> Element {
    rsx! {
        div { class: "mb-4",
            h3 { class: "text-gray-400 text-sm font-semibold mb-3", "{title} ({count})" }
            div { class: "space-y-2",
                for member in members.iter() {
                    div {
                        key: "{member.id}",
                        class: "flex items-center gap-2",
                        div {
                            class: if member.is_online() {
                                "w-2 h-2 rounded-full bg-green-500"
                            } else {
                                "w-2 h-2 rounded-full bg-gray-500"
                            }
                        }
                        span {
                            class: if member.is_online() {
                                "text-white"
                            } else {
                                "text-gray-500"
                            },
                            "{member.name}"
                        }
                    }
                }
                if members.is_empty() {
                    div { class: "text-gray-500 text-sm", "No members" }
                }
            }
        }
    }
}
