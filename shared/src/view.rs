//! Projections of the store and member directory used for rendering.
//!
//! Everything here is a pure function of its inputs and borrows the records
//! it returns, so the UI may recompute a view on every render.

use std::fmt;
use std::str::FromStr;

use crate::{EmployeeRecord, MemberRecord};

/// Rows per page of the requests table
pub const PAGE_SIZE: usize = 8;

/// Ordering of the requests table by attendance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortOrder {
    /// Highest attendance first
    #[default]
    Newest,
    /// Lowest attendance first
    Oldest,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Newest => "newest",
            SortOrder::Oldest => "oldest",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortOrder::Newest => "Newest",
            SortOrder::Oldest => "Oldest",
        }
    }

    pub fn variants() -> &'static [SortOrder] {
        &[SortOrder::Newest, SortOrder::Oldest]
    }
}

#[derive(Debug, Clone)]
pub struct SortOrderError(String);

impl fmt::Display for SortOrderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for SortOrderError {}

impl FromStr for SortOrder {
    type Err = SortOrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "newest" => Ok(SortOrder::Newest),
            "oldest" => Ok(SortOrder::Oldest),
            other => Err(SortOrderError(format!("Unknown sort order: {}", other))),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Lower-cased needle, or `None` when the query is blank and matches everything.
/// A non-blank query is matched as typed, surrounding whitespace included.
fn needle(query: &str) -> Option<String> {
    (!query.trim().is_empty()).then(|| query.to_lowercase())
}

fn contains(field: &str, needle: &str) -> bool {
    field.to_lowercase().contains(needle)
}

/// Records whose name, email or position contains `query`, ignoring case.
pub fn filter_employees<'a>(records: &'a [EmployeeRecord], query: &str) -> Vec<&'a EmployeeRecord> {
    match needle(query) {
        None => records.iter().collect(),
        Some(needle) => records
            .iter()
            .filter(|r| {
                contains(&r.name, &needle)
                    || contains(&r.email, &needle)
                    || contains(&r.position, &needle)
            })
            .collect(),
    }
}

/// Stable sort by attendance; equal counts keep their store order.
pub fn sort_employees(rows: &mut [&EmployeeRecord], order: SortOrder) {
    match order {
        SortOrder::Newest => rows.sort_by(|a, b| b.attendance.cmp(&a.attendance)),
        SortOrder::Oldest => rows.sort_by(|a, b| a.attendance.cmp(&b.attendance)),
    }
}

/// Number of pages needed for `total` rows, never less than one.
pub fn page_count(total: usize) -> usize {
    total.div_ceil(PAGE_SIZE).max(1)
}

/// Rows of the 1-indexed `page`. Out of range pages give an empty slice.
pub fn page_slice<T>(rows: &[T], page: usize) -> &[T] {
    let Some(start) = page.checked_sub(1).and_then(|p| p.checked_mul(PAGE_SIZE)) else {
        return &[];
    };
    if start >= rows.len() {
        return &[];
    }
    let end = (start + PAGE_SIZE).min(rows.len());
    &rows[start..end]
}

/// The "Showing X to Y of Z" line under the table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShowingRange {
    pub start: usize,
    pub end: usize,
    pub total: usize,
}

impl ShowingRange {
    /// An empty result reads "Showing 1 to 0 of 0"; otherwise both ends are
    /// capped at `total`.
    pub fn new(page: usize, total: usize) -> Self {
        let first = page
            .saturating_sub(1)
            .saturating_mul(PAGE_SIZE)
            .saturating_add(1);
        let start = if total == 0 { 1 } else { first.min(total) };

        Self {
            start,
            end: page.saturating_mul(PAGE_SIZE).min(total),
            total,
        }
    }
}

impl fmt::Display for ShowingRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Showing {} to {} of {}",
            self.start, self.end, self.total
        )
    }
}

/// One page of the requests table
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeePage<'a> {
    pub rows: Vec<&'a EmployeeRecord>,
    pub total: usize,
    pub page: usize,
    pub page_count: usize,
    pub range: ShowingRange,
}

impl EmployeePage<'_> {
    /// True when the "no employees found" placeholder should be shown
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Filter, sort and paginate the store for the requests table.
pub fn derive_employee_page<'a>(
    records: &'a [EmployeeRecord],
    query: &str,
    order: SortOrder,
    page: usize,
) -> EmployeePage<'a> {
    let mut filtered = filter_employees(records, query);
    sort_employees(&mut filtered, order);

    let total = filtered.len();
    EmployeePage {
        rows: page_slice(&filtered, page).to_vec(),
        total,
        page,
        page_count: page_count(total),
        range: ShowingRange::new(page, total),
    }
}

/// Sidebar members split by presence
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MemberGroups<'a> {
    pub online: Vec<&'a MemberRecord>,
    pub offline: Vec<&'a MemberRecord>,
}

impl MemberGroups<'_> {
    pub fn online_count(&self) -> usize {
        self.online.len()
    }

    pub fn offline_count(&self) -> usize {
        self.offline.len()
    }
}

/// Members whose name contains `query`, ignoring case, grouped by presence.
pub fn group_members<'a>(members: &'a [MemberRecord], query: &str) -> MemberGroups<'a> {
    let needle = needle(query);
    let (online, offline): (Vec<_>, Vec<_>) = members
        .iter()
        .filter(|m| needle.as_deref().is_none_or(|n| contains(&m.name, n)))
        .partition(|m| m.is_online());

    MemberGroups { online, offline }
}
