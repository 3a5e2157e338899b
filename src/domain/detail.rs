// src/domain/detail.rs

use crate::domain::record::{Applicant, DetailField, Listing, RecordId};
use crate::domain::store::ListingStore;

/// Which record (if any) is open in the detail pane, and whether its
/// applicants layer is showing on top of it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailPresenter {
    selected: Option<RecordId>,
    sub_records_open: bool,
}

/// Read-only projection of the selected record.
#[derive(Debug)]
pub struct DetailView<'a, T> {
    pub record: &'a T,
    pub fields: Vec<DetailField>,
    /// Present only while the applicants layer is open.
    pub sub_records: Option<&'a [Applicant]>,
}

impl DetailPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<RecordId> {
        self.selected
    }

    pub fn sub_records_open(&self) -> bool {
        self.sub_records_open
    }

    pub fn select(&mut self, id: RecordId) {
        if self.selected != Some(id) {
            self.sub_records_open = false;
        }
        self.selected = Some(id);
    }

    pub fn close(&mut self) {
        self.selected = None;
        self.sub_records_open = false;
    }

    /// Opens the applicants layer for `id`, selecting it first if needed.
    pub fn open_sub_records(&mut self, id: RecordId) {
        self.select(id);
        self.sub_records_open = true;
    }

    pub fn close_sub_records(&mut self) {
        self.sub_records_open = false;
    }

    pub fn view<'a, T: Listing>(&self, store: &'a ListingStore<T>) -> Option<DetailView<'a, T>> {
        let record = store.get(self.selected?)?;
        Some(DetailView {
            record,
            fields: record.detail_fields(),
            sub_records: self.sub_records_open.then(|| record.sub_records()),
        })
    }

    pub fn edit_selected<T: Listing>(&self, store: &mut ListingStore<T>, patch: T::Patch) -> bool {
        match self.selected {
            Some(id) => store.update(id, patch),
            None => false,
        }
    }

    /// Removes the selected record and closes the detail pane.
    pub fn delete_selected<T: Listing>(&mut self, store: &mut ListingStore<T>) -> bool {
        let Some(id) = self.selected else {
            return false;
        };
        let removed = store.remove(id);
        self.close();
        removed
    }
}
