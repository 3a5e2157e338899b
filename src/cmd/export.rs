use crate::db::{init_db, Database};
use crate::domain::{Dashboards, Query, ReviewBoardMut, ReviewKey};
use crate::errors::ServerError;
use crate::spreadsheets::board_workbook;
use crate::state::restore_reviews;

/// Writes the filtered board, with the decisions recorded in `db`, to `out`.
/// Returns the number of data rows.
pub fn write(
    db: &Database,
    board: &str,
    out: &str,
    text: &str,
    status: &str,
) -> Result<usize, ServerError> {
    let key = board
        .trim_matches('/')
        .split_once('/')
        .and_then(|(dashboard, collection)| ReviewKey::from_path(dashboard, collection))
        .ok_or_else(|| {
            let known: Vec<_> = ReviewKey::ALL.iter().map(|k| k.path()).collect();
            ServerError::BadRequest(format!(
                "unknown board '{board}', expected one of {}",
                known.join(", ")
            ))
        })?;

    let query = Query::new(text, status);
    let mut dashboards = Dashboards::seeded()?;
    init_db(db)?;
    restore_reviews(db, &mut dashboards)?;
    let (bytes, rows) = match dashboards.review(key) {
        ReviewBoardMut::Applications(b) => {
            let rows = b.visible_for(&query);
            (board_workbook(&rows, key.dashboard())?, rows.len())
        }
        ReviewBoardMut::Reports(b) => {
            let rows = b.visible_for(&query);
            (board_workbook(&rows, key.dashboard())?, rows.len())
        }
    };

    std::fs::write(out, bytes)
        .map_err(|e| ServerError::XlsxError(format!("writing {out}: {e}")))?;
    tracing::info!(board = key.path(), rows, out, "export written");
    Ok(rows)
}
