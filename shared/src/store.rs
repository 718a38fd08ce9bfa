use std::collections::HashSet;

use tracing::{debug, warn};

use crate::{EmployeeRecord, Pager, filter_employees};

/// In-memory list of pending join requests.
///
/// Ids are unique within the store. The records can only be changed through
/// [`EmployeeStore::toggle_active`] and [`EmployeeStore::reject`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeStore {
    records: Vec<EmployeeRecord>,
}

impl EmployeeStore {
    /// Build a store from seed records, keeping the first record for any repeated id.
    pub fn new(records: Vec<EmployeeRecord>) -> Self {
        let mut seen = HashSet::with_capacity(records.len());
        let records = records
            .into_iter()
            .filter(|record| {
                let fresh = seen.insert(record.id.clone());
                if !fresh {
                    warn!("Dropping employee with duplicate id: {}", record.id);
                }
                fresh
            })
            .collect();

        Self { records }
    }

    pub fn records(&self) -> &[EmployeeRecord] {
        &self.records
    }

    pub fn get(&self, id: &str) -> Option<&EmployeeRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Flip the active flag of the record with `id`. Unknown ids are ignored.
    pub fn toggle_active(&mut self, id: &str) {
        match self.records.iter_mut().find(|r| r.id == id) {
            Some(record) => record.active = !record.active,
            None => debug!("toggle_active: no employee with id {}", id),
        }
    }

    /// Remove the record with `id`. Unknown ids are ignored.
    pub fn reject(&mut self, id: &str) {
        match self.records.iter().position(|r| r.id == id) {
            Some(index) => {
                self.records.remove(index);
            }
            None => debug!("reject: no employee with id {}", id),
        }
    }

    /// Reject `id` while the table shows `page` for `query`, and return the
    /// page to show next: `page` itself, or the new last page when the rows
    /// it held are gone.
    pub fn reject_on_page(&mut self, id: &str, query: &str, page: usize) -> usize {
        self.reject(id);

        let mut pager = Pager::at(page, 1);
        pager.shrink_to(filter_employees(&self.records, query).len());
        pager.page()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{employee, numbered_employees, seed_store};

    #[test]
    fn toggle_flips_exactly_one_record() {
        let mut store = seed_store();
        let before = store.clone();

        store.toggle_active("2");

        assert_eq!(store.len(), before.len());
        for (after, before) in store.records().iter().zip(before.records()) {
            if after.id == "2" {
                assert_ne!(after.active, before.active);
            } else {
                assert_eq!(after, before);
            }
        }
    }

    #[test]
    fn toggle_twice_restores_flag() {
        let mut store = seed_store();
        let before = store.clone();

        store.toggle_active("3");
        store.toggle_active("3");

        assert_eq!(store, before);
    }

    #[test]
    fn toggle_unknown_id_is_noop() {
        let mut store = seed_store();
        let before = store.clone();

        store.toggle_active("missing");

        assert_eq!(store, before);
    }

    #[test]
    fn reject_removes_one_record() {
        let mut store = seed_store();

        store.reject("2");

        assert_eq!(store.len(), 4);
        assert!(store.get("2").is_none());
        assert_eq!(
            store.records().iter().map(|r| r.id.as_str()).collect::<Vec<_>>(),
            ["1", "3", "4", "5"]
        );
    }

    #[test]
    fn reject_unknown_id_is_noop() {
        let mut store = seed_store();

        store.reject("42");
        store.reject("");

        assert_eq!(store.len(), 5);
    }

    #[test]
    fn reject_twice_removes_once() {
        let mut store = seed_store();

        store.reject("1");
        store.reject("1");

        assert_eq!(store.len(), 4);
    }

    #[test]
    fn rejecting_only_row_on_last_page_moves_back() {
        let mut store = EmployeeStore::new(numbered_employees(9));

        let page = store.reject_on_page("9", "", 2);

        assert_eq!(page, 1);
        assert_eq!(store.len(), 8);
    }

    #[test]
    fn rejecting_keeps_page_with_rows_left() {
        let mut store = EmployeeStore::new(numbered_employees(10));

        assert_eq!(store.reject_on_page("10", "", 2), 2);
        assert_eq!(store.reject_on_page("missing", "", 2), 2);
    }

    #[test]
    fn reject_on_page_counts_only_matching_rows() {
        let mut store = EmployeeStore::new(numbered_employees(17));

        // "Employee 1" matches ids 1 and 10..=17: nine rows over two pages
        assert_eq!(store.reject_on_page("17", "Employee 1", 2), 1);
        assert_eq!(store.len(), 16);
    }

    #[test]
    fn duplicate_ids_keep_first_record() {
        let store = EmployeeStore::new(vec![
            employee("1", "First", 1),
            employee("1", "Second", 2),
            employee("2", "Third", 3),
        ]);

        assert_eq!(store.len(), 2);
        assert_eq!(store.get("1").unwrap().name, "First");
    }

    #[test]
    fn empty_store() {
        let store = EmployeeStore::default();
        assert!(store.is_empty());
        assert!(store.get("1").is_none());
    }
}
