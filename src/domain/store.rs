// src/domain/store.rs

use crate::domain::record::{Listing, RecordId};
use std::collections::HashSet;

/// The mutable collection of records behind one dashboard.
///
/// Mutations on unknown ids are no-ops. Every applied mutation bumps
/// `revision`, which is logged next to each status history row.
#[derive(Debug, Clone)]
pub struct ListingStore<T: Listing> {
    records: Vec<T>,
    revision: u64,
}

impl<T: Listing> Default for ListingStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Listing> ListingStore<T> {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            revision: 0,
        }
    }

    /// Builds a store from seed records, keeping the first record for any
    /// repeated id.
    pub fn seeded(records: Vec<T>) -> Self {
        let mut seen = HashSet::new();
        let mut kept = Vec::with_capacity(records.len());
        for record in records {
            if seen.insert(record.id()) {
                kept.push(record);
            } else {
                tracing::warn!(kind = T::KIND, id = %record.id(), "dropping seed record with duplicate id");
            }
        }
        Self {
            records: kept,
            revision: 0,
        }
    }

    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn get(&self, id: RecordId) -> Option<&T> {
        self.records.iter().find(|r| r.id() == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Max existing id + 1, or 1 for an empty store.
    pub fn next_id(&self) -> RecordId {
        self.records
            .iter()
            .map(|r| r.id().0)
            .max()
            .map(|max| RecordId(max + 1))
            .unwrap_or(RecordId(1))
    }

    /// Appends `record` under a fresh id. Returns `None` without touching the
    /// store when required fields are blank.
    pub fn create(&mut self, mut record: T) -> Option<RecordId> {
        if !record.is_valid() {
            tracing::debug!(kind = T::KIND, "ignoring create with blank required fields");
            return None;
        }
        let id = self.next_id();
        record.assign_id(id);
        self.records.push(record);
        self.revision += 1;
        tracing::debug!(kind = T::KIND, %id, "record created");
        Some(id)
    }

    pub fn update(&mut self, id: RecordId, patch: T::Patch) -> bool {
        self.modify(id, |record| record.apply_patch(patch))
    }

    /// Runs `f` against the record with `id`. Returns false if there is none.
    pub fn modify<F>(&mut self, id: RecordId, f: F) -> bool
    where
        F: FnOnce(&mut T),
    {
        let Some(record) = self.records.iter_mut().find(|r| r.id() == id) else {
            tracing::debug!(kind = T::KIND, %id, "modify on unknown id");
            return false;
        };
        f(record);
        self.revision += 1;
        true
    }

    pub fn remove(&mut self, id: RecordId) -> bool {
        let before = self.records.len();
        self.records.retain(|r| r.id() != id);
        let removed = self.records.len() != before;
        if removed {
            self.revision += 1;
            tracing::debug!(kind = T::KIND, %id, "record removed");
        }
        removed
    }

    /// `None` clears back to the neutral state. Setting the active value
    /// again leaves the record unchanged; any other change drops the
    /// clarification that came with the previous status.
    pub fn set_status(&mut self, id: RecordId, status: Option<T::Status>) -> bool {
        self.modify(id, |record| {
            if record.status() != status {
                record.set_status(status);
                record.set_clarification(None);
            }
        })
    }

    /// Sets the status together with the note that justifies it.
    pub fn set_status_with(
        &mut self,
        id: RecordId,
        status: Option<T::Status>,
        clarification: Option<String>,
    ) -> bool {
        self.modify(id, |record| {
            record.set_status(status);
            record.set_clarification(clarification);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::record::{JobPatch, JobPosting, Report};
    use crate::domain::status::ReportStatus;
    use chrono::NaiveDate;

    fn job(id: u32, title: &str) -> JobPosting {
        let mut job = JobPosting::draft(title, "Acme", "Engineering");
        job.id = RecordId(id);
        job
    }

    fn report(id: u32) -> Report {
        Report {
            id: RecordId(id),
            title: format!("Report {id}"),
            student: "Mariam Adel".into(),
            major: "CS".into(),
            submitted: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            body: String::new(),
            status: None,
            clarification: None,
        }
    }

    #[test]
    fn create_assigns_max_plus_one() {
        let mut store = ListingStore::seeded(vec![job(1, "a"), job(3, "b"), job(7, "c")]);
        let id = store.create(JobPosting::draft("New", "Acme", "Design"));

        assert_eq!(id, Some(RecordId(8)));
        assert_eq!(store.get(RecordId(8)).unwrap().title, "New");
    }

    #[test]
    fn create_in_empty_store_starts_at_one() {
        let mut store = ListingStore::new();
        assert_eq!(store.create(JobPosting::draft("New", "Acme", "Design")), Some(RecordId(1)));
    }

    #[test]
    fn create_with_blank_title_is_a_no_op() {
        let mut store = ListingStore::seeded(vec![job(1, "a")]);
        let revision = store.revision();

        assert_eq!(store.create(JobPosting::draft("", "Acme", "Design")), None);
        assert_eq!(store.len(), 1);
        assert_eq!(store.revision(), revision);
    }

    #[test]
    fn unknown_ids_are_ignored() {
        let mut store = ListingStore::seeded(vec![report(1)]);

        assert!(!store.update(RecordId(9), Default::default()));
        assert!(!store.remove(RecordId(9)));
        assert!(!store.set_status(RecordId(9), Some(ReportStatus::Accepted)));
        assert_eq!(store.revision(), 0);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn set_status_twice_equals_once() {
        let mut store = ListingStore::seeded(vec![report(1)]);
        store.set_status(RecordId(1), Some(ReportStatus::Flagged));
        store.set_status(RecordId(1), Some(ReportStatus::Flagged));
        assert_eq!(store.get(RecordId(1)).unwrap().status, Some(ReportStatus::Flagged));

        store.set_status(RecordId(1), None);
        assert_eq!(store.get(RecordId(1)).unwrap().status, None);
    }

    #[test]
    fn changing_status_drops_rejection_note() {
        let mut store = ListingStore::seeded(vec![report(1)]);
        store.set_status_with(RecordId(1), Some(ReportStatus::Rejected), Some("Late".into()));
        assert_eq!(store.get(RecordId(1)).unwrap().clarification.as_deref(), Some("Late"));

        // Re-setting the active status is a no-op and keeps the note.
        store.set_status(RecordId(1), Some(ReportStatus::Rejected));
        assert_eq!(store.get(RecordId(1)).unwrap().clarification.as_deref(), Some("Late"));

        store.set_status(RecordId(1), None);
        let cleared = store.get(RecordId(1)).unwrap();
        assert_eq!(cleared.status, None);
        assert_eq!(cleared.clarification, None);

        store.set_status_with(RecordId(1), Some(ReportStatus::Rejected), Some("Late".into()));
        store.set_status(RecordId(1), Some(ReportStatus::Accepted));
        let accepted = store.get(RecordId(1)).unwrap();
        assert_eq!(accepted.status, Some(ReportStatus::Accepted));
        assert_eq!(accepted.clarification, None);
    }

    #[test]
    fn update_and_remove() {
        let mut store = ListingStore::seeded(vec![job(1, "a"), job(2, "b")]);
        assert!(store.update(
            RecordId(2),
            JobPatch {
                title: Some("renamed".into()),
                ..JobPatch::default()
            }
        ));
        assert_eq!(store.get(RecordId(2)).unwrap().title, "renamed");

        assert!(store.remove(RecordId(1)));
        assert!(store.get(RecordId(1)).is_none());
        assert_eq!(store.revision(), 2);
    }

    #[test]
    fn seeded_drops_duplicate_ids() {
        let store = ListingStore::seeded(vec![job(1, "first"), job(1, "second"), job(2, "c")]);
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(RecordId(1)).unwrap().title, "first");
    }
}
