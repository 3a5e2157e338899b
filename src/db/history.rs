// src/db/history.rs
use crate::errors::ServerError;
use chrono::NaiveDateTime;
use rusqlite::{params, Connection, Row};

/// One committed status transition, as stored in `status_history`.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusChange {
    pub board: String,
    pub record_kind: String,
    pub record_id: u32,
    pub previous_status: Option<String>,
    pub current_status: String,
    pub clarification: Option<String>,
    pub changed_at: NaiveDateTime,
}

pub fn record_change(conn: &Connection, change: &StatusChange) -> Result<i64, ServerError> {
    conn.execute(
        r#"
        INSERT INTO status_history (
            board, record_kind, record_id,
            previous_status, current_status, clarification, changed_at
        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
        "#,
        params![
            change.board,
            change.record_kind,
            change.record_id,
            change.previous_status,
            change.current_status,
            change.clarification,
            change.changed_at,
        ],
    )
    .map_err(|e| ServerError::DbError(format!("record status change failed: {e}")))?;
    Ok(conn.last_insert_rowid())
}

fn change_from_row(row: &Row<'_>) -> rusqlite::Result<StatusChange> {
    Ok(StatusChange {
        board: row.get(0)?,
        record_kind: row.get(1)?,
        record_id: row.get(2)?,
        previous_status: row.get(3)?,
        current_status: row.get(4)?,
        clarification: row.get(5)?,
        changed_at: row.get(6)?,
    })
}

/// Changes for one record on one board, oldest first.
pub fn history_for(
    conn: &Connection,
    board: &str,
    record_id: u32,
) -> Result<Vec<StatusChange>, ServerError> {
    let mut stmt = conn
        .prepare(
            r#"
            SELECT board, record_kind, record_id,
                   previous_status, current_status, clarification, changed_at
            FROM status_history
            WHERE board = ?1 AND record_id = ?2
            ORDER BY changed_at, id
            "#,
        )
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    let rows = stmt
        .query_map(params![board, record_id], change_from_row)
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r.map_err(|e| ServerError::DbError(e.to_string()))?);
    }
    Ok(out)
}

/// The most recent change of every record on `board`, i.e. the state each
/// record was left in.
pub fn latest_changes(conn: &Connection, board: &str) -> Result<Vec<StatusChange>, ServerError> {
    let mut stmt = conn
        .prepare(
            r#"
            SELECT board, record_kind, record_id,
                   previous_status, current_status, clarification, changed_at
            FROM status_history h
            WHERE board = ?1
              AND id = (
                  SELECT MAX(id) FROM status_history
                  WHERE board = h.board AND record_id = h.record_id
              )
            ORDER BY record_id
            "#,
        )
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    let rows = stmt
        .query_map(params![board], change_from_row)
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r.map_err(|e| ServerError::DbError(e.to_string()))?);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn memory_conn() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(include_str!("../../sql/schema.sql")).unwrap();
        conn
    }

    fn at(hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 9, 10)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    #[test]
    fn history_is_scoped_to_board_and_ordered() {
        let conn = memory_conn();
        let change = |board: &str, id, prev: Option<&str>, cur: &str, hour| StatusChange {
            board: board.to_string(),
            record_kind: "report".to_string(),
            record_id: id,
            previous_status: prev.map(str::to_string),
            current_status: cur.to_string(),
            clarification: None,
            changed_at: at(hour),
        };

        record_change(&conn, &change("scad", 1, None, "Flagged", 9)).unwrap();
        record_change(&conn, &change("scad", 1, Some("Flagged"), "Pending", 11)).unwrap();
        record_change(&conn, &change("faculty", 1, None, "Accepted", 10)).unwrap();
        record_change(&conn, &change("scad", 2, None, "Accepted", 10)).unwrap();

        let history = history_for(&conn, "scad", 1).unwrap();
        let statuses: Vec<_> = history.iter().map(|c| c.current_status.as_str()).collect();
        assert_eq!(statuses, vec!["Flagged", "Pending"]);
        assert_eq!(history[1].previous_status.as_deref(), Some("Flagged"));
        assert_eq!(history[0].changed_at, at(9));
    }

    #[test]
    fn latest_change_per_record() {
        let conn = memory_conn();
        let change = |id, cur: &str, note: Option<&str>, hour| StatusChange {
            board: "scad".to_string(),
            record_kind: "report".to_string(),
            record_id: id,
            previous_status: None,
            current_status: cur.to_string(),
            clarification: note.map(str::to_string),
            changed_at: at(hour),
        };

        record_change(&conn, &change(1, "Accepted", None, 9)).unwrap();
        record_change(&conn, &change(1, "Rejected", Some("Missing appendix"), 10)).unwrap();
        record_change(&conn, &change(3, "Flagged", None, 9)).unwrap();

        let latest = latest_changes(&conn, "scad").unwrap();
        assert_eq!(latest.len(), 2);
        assert_eq!(latest[0].record_id, 1);
        assert_eq!(latest[0].current_status, "Rejected");
        assert_eq!(latest[0].clarification.as_deref(), Some("Missing appendix"));
        assert_eq!(latest[1].record_id, 3);
        assert!(latest_changes(&conn, "faculty").unwrap().is_empty());
    }
}
