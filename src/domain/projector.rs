// src/domain/projector.rs

use crate::domain::record::Listing;
use crate::domain::status::status_label;

/// Picks one searchable text field out of a record.
pub type FieldSelector<T> = fn(&T) -> &str;

/// Free-text query plus optional status filter, as typed into a dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pub text: String,
    pub status: String,
}

impl Query {
    pub fn new(text: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            status: status.into(),
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::new(text, "")
    }

    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty() && self.status.trim().is_empty()
    }
}

/// Derives the visible subset of a store. Holds nothing but the field set, so
/// a projection is a pure function of (records, query).
pub struct Projector<T> {
    fields: Vec<FieldSelector<T>>,
}

impl<T> Clone for Projector<T> {
    fn clone(&self) -> Self {
        Self {
            fields: self.fields.clone(),
        }
    }
}

impl<T: Listing> Projector<T> {
    pub fn new(fields: Vec<FieldSelector<T>>) -> Self {
        Self { fields }
    }

    pub fn matches(&self, record: &T, query: &Query) -> bool {
        let text = query.text.trim().to_lowercase();
        let status = query.status.trim().to_lowercase();

        let text_ok = text.is_empty()
            || self
                .fields
                .iter()
                .any(|field| field(record).to_lowercase().contains(&text));

        let status_ok = status.is_empty()
            || status_label(record.status())
                .to_lowercase()
                .contains(&status);

        text_ok && status_ok
    }

    /// Records matching `query`, in store order.
    pub fn project<'a>(&self, records: &'a [T], query: &Query) -> Vec<&'a T> {
        records.iter().filter(|r| self.matches(r, query)).collect()
    }
}
