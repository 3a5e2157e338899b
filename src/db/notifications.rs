// src/db/notifications.rs
use crate::domain::notifications::Notification;
use crate::errors::ServerError;
use rusqlite::{params, Connection};

pub fn insert_notification(conn: &Connection, n: &Notification) -> Result<(), ServerError> {
    conn.execute(
        r#"
        INSERT INTO notifications (id, message, created_at)
        VALUES (?1, ?2, ?3)
        ON CONFLICT(id) DO UPDATE SET
            message = excluded.message,
            created_at = excluded.created_at,
            dismissed = 0
        "#,
        params![n.id, n.message, n.created_at],
    )
    .map_err(|e| ServerError::DbError(format!("insert notification failed: {e}")))?;
    Ok(())
}

pub fn dismiss_notification(conn: &Connection, id: u32) -> Result<(), ServerError> {
    conn.execute(
        "UPDATE notifications SET dismissed = 1 WHERE id = ?",
        params![id],
    )
    .map_err(|e| ServerError::DbError(format!("dismiss notification failed: {e}")))?;
    Ok(())
}

/// Drops every stored notice. Notices point at in-memory job postings, so
/// they only live as long as the process that emitted them.
pub fn clear_notifications(conn: &Connection) -> Result<usize, ServerError> {
    conn.execute("DELETE FROM notifications", [])
        .map_err(|e| ServerError::DbError(format!("clear notifications failed: {e}")))
}

/// Notifications not yet dismissed, oldest first.
#[cfg(test)]
pub fn load_active(conn: &Connection) -> Result<Vec<Notification>, ServerError> {
    let mut stmt = conn
        .prepare("SELECT id, message, created_at FROM notifications WHERE dismissed = 0 ORDER BY id")
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    let rows = stmt
        .query_map([], |row| {
            Ok(Notification {
                id: row.get(0)?,
                message: row.get(1)?,
                created_at: row.get(2)?,
            })
        })
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r.map_err(|e| ServerError::DbError(e.to_string()))?);
    }
    Ok(out)
}
