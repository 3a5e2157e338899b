// src/state.rs
use crate::db::history::{latest_changes, StatusChange};
use crate::db::notifications::{clear_notifications, insert_notification};
use crate::db::{init_db, Database};
use crate::domain::notifications::{Notification, NotificationEmitter, Subscriber};
use crate::domain::record::{Listing, RecordId};
use crate::domain::status::{StatusKind, NEUTRAL_LABEL};
use crate::domain::{Dashboards, ReviewBoard, ReviewBoardMut, ReviewKey};
use crate::errors::ServerError;
use std::sync::{Mutex, MutexGuard};

/// Shared by every worker. Each request holds the dashboards lock for the
/// whole of its handler, so mutations never interleave.
pub struct AppState {
    pub db: Database,
    dashboards: Mutex<Dashboards>,
    notifications: Mutex<NotificationEmitter>,
}

/// Subscriber that mirrors every notice into the `notifications` table.
fn persisting_subscriber(db: Database) -> Subscriber {
    Box::new(move |n: &Notification| {
        if let Err(e) = db.with_conn(|conn| insert_notification(conn, n)) {
            tracing::warn!(id = n.id, error = %e, "failed to persist notification");
        }
    })
}

/// Puts each record back into the state its last history row left it in.
fn restore_decisions<T: Listing>(board: &mut ReviewBoard<T>, changes: &[StatusChange]) -> usize {
    let mut restored = 0;
    for change in changes {
        let status = if change.current_status == NEUTRAL_LABEL {
            None
        } else if let Some(status) = T::Status::from_label(&change.current_status) {
            Some(status)
        } else {
            tracing::warn!(
                record = change.record_id,
                status = %change.current_status,
                "skipping history row with unknown status"
            );
            continue;
        };
        if board.store.set_status_with(
            RecordId(change.record_id),
            status,
            change.clarification.clone(),
        ) {
            restored += 1;
        }
    }
    restored
}

/// Applies the recorded review decisions of every review board.
pub fn restore_reviews(db: &Database, dashboards: &mut Dashboards) -> Result<(), ServerError> {
    for key in ReviewKey::ALL {
        let changes = db.with_conn(|conn| latest_changes(conn, key.dashboard()))?;
        let restored = match dashboards.review(key) {
            ReviewBoardMut::Applications(board) => restore_decisions(board, &changes),
            ReviewBoardMut::Reports(board) => restore_decisions(board, &changes),
        };
        if restored > 0 {
            tracing::info!(board = key.path(), restored, "review decisions restored");
        }
    }
    Ok(())
}

impl AppState {
    pub fn new(db: Database, mut dashboards: Dashboards) -> Result<Self, ServerError> {
        init_db(&db)?;
        restore_reviews(&db, &mut dashboards)?;

        let stale = db.with_conn(|conn| clear_notifications(conn))?;
        if stale > 0 {
            tracing::info!(stale, "dropped notifications from a previous run");
        }
        let mut emitter = NotificationEmitter::new(None);
        emitter.subscribe(persisting_subscriber(db.clone()));

        Ok(Self {
            db,
            dashboards: Mutex::new(dashboards),
            notifications: Mutex::new(emitter),
        })
    }

    pub fn seeded(db: Database) -> Result<Self, ServerError> {
        Self::new(db, Dashboards::seeded()?)
    }

    pub fn dashboards(&self) -> Result<MutexGuard<'_, Dashboards>, ServerError> {
        self.dashboards.lock().map_err(|_| ServerError::InternalError)
    }

    pub fn notifications(&self) -> Result<MutexGuard<'_, NotificationEmitter>, ServerError> {
        self.notifications
            .lock()
            .map_err(|_| ServerError::InternalError)
    }
}
