// src/domain/transition.rs

use crate::domain::record::{Listing, RecordId};
use crate::domain::status::StatusKind;
use crate::domain::store::ListingStore;

/// Justification text for a rejection. Only constructible from non-blank
/// input, so an empty rejection cannot reach the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clarification(String);

impl Clarification {
    pub fn new(text: impl Into<String>) -> Option<Self> {
        let text = text.into();
        let trimmed = text.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    /// Whether the submit control for `text` should be enabled.
    pub fn accepts(text: &str) -> bool {
        !text.trim().is_empty()
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Outcome of one click on a status control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition<S> {
    /// The status was committed.
    Applied { id: RecordId, status: S },
    /// The clicked status was already active; the record is neutral again.
    Cleared { id: RecordId, previous: S },
    /// A clarification must be submitted before `status` commits.
    AwaitingClarification { id: RecordId, status: S },
    /// A clarification step is open; other clicks wait until it closes.
    Blocked,
    /// No record with that id, or nothing pending to submit.
    Ignored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingClarification<S> {
    pub id: RecordId,
    pub status: S,
}

/// Toggle state machine over one store's review statuses.
#[derive(Debug, Clone)]
pub struct TransitionEngine<S: StatusKind> {
    pending: Option<PendingClarification<S>>,
}

impl<S: StatusKind> Default for TransitionEngine<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: StatusKind> TransitionEngine<S> {
    pub fn new() -> Self {
        Self { pending: None }
    }

    pub fn pending(&self) -> Option<PendingClarification<S>> {
        self.pending
    }

    /// Handles a click on the `status` control of record `id`.
    pub fn toggle<T>(&mut self, store: &mut ListingStore<T>, id: RecordId, status: S) -> Transition<S>
    where
        T: Listing<Status = S>,
    {
        if self.pending.is_some() {
            return Transition::Blocked;
        }
        let Some(record) = store.get(id) else {
            return Transition::Ignored;
        };

        if record.status() == Some(status) {
            store.set_status_with(id, None, None);
            tracing::info!(kind = T::KIND, %id, status = status.label(), "status cleared");
            return Transition::Cleared {
                id,
                previous: status,
            };
        }

        if status.requires_clarification() {
            self.pending = Some(PendingClarification { id, status });
            return Transition::AwaitingClarification { id, status };
        }

        store.set_status_with(id, Some(status), None);
        tracing::info!(kind = T::KIND, %id, status = status.label(), "status applied");
        Transition::Applied { id, status }
    }

    /// Commits the pending transition with its clarification.
    pub fn submit<T>(&mut self, store: &mut ListingStore<T>, clarification: Clarification) -> Transition<S>
    where
        T: Listing<Status = S>,
    {
        let Some(PendingClarification { id, status }) = self.pending.take() else {
            return Transition::Ignored;
        };
        let applied = store.set_status_with(id, Some(status), Some(clarification.into_inner()));
        if !applied {
            // Record vanished while the dialog was open.
            return Transition::Ignored;
        }
        tracing::info!(kind = T::KIND, %id, status = status.label(), "status applied with clarification");
        Transition::Applied { id, status }
    }

    /// Closes the clarification step without touching the record.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }
}
