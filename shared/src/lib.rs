#[cfg(test)]
mod fixtures;
mod pager;
mod seed;
mod store;
mod view;

pub use pager::{MAX_NUMBERED_PAGES, Pager};
pub use seed::{SeedData, SeedError};
pub use store::EmployeeStore;
pub use view::{
    EmployeePage, MemberGroups, PAGE_SIZE, ShowingRange, SortOrder, SortOrderError,
    derive_employee_page, filter_employees, group_members, page_count, page_slice, sort_employees,
};

use serde::{Deserialize, Serialize};
use std::fmt;

/// A pending join request, as shown in one row of the requests table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    pub id: String,
    pub name: String,
    pub position: String,
    pub role: Role,
    pub email: String,
    pub attendance: u32,
    #[serde(default)]
    pub active: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Admin,
    User,
    Manager,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::User => "User",
            Role::Manager => "Manager",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Presence {
    Online,
    Offline,
}

/// An entry of the member directory shown in the sidebar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberRecord {
    pub id: u32,
    pub name: String,
    pub status: Presence,
}

impl MemberRecord {
    pub fn is_online(&self) -> bool {
        self.status == Presence::Online
    }
}
