use crate::domain::Tabular;
use crate::errors::ServerError;
use crate::responses::xlsx_response;
use crate::responses::ResultResp;
use rust_xlsxwriter::{Format, Workbook};

/// Writes `rows` under the record type's column headers and returns the file bytes.
pub fn board_workbook<T: Tabular>(rows: &[&T], sheet_name: &str) -> Result<Vec<u8>, ServerError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name(sheet_name)
        .map_err(|e| ServerError::XlsxError(format!("Invalid sheet name '{sheet_name}': {e}")))?;

    let bold = Format::new().set_bold();

    // Headers
    for (col, header) in T::COLUMNS.iter().enumerate() {
        worksheet
            .write_string_with_format(0, col as u16, *header, &bold)
            .map_err(|e| {
                ServerError::XlsxError(format!("Failed to write header '{}': {}", header, e))
            })?;
    }

    // Rows
    for (i, row) in rows.iter().enumerate() {
        let r = (i + 1) as u32;
        for (col, cell) in row.cells().iter().enumerate() {
            worksheet
                .write_string(r, col as u16, cell)
                .map_err(|e| ServerError::XlsxError(format!("Failed to write row {r}: {e}")))?;
        }
    }

    workbook
        .save_to_buffer()
        .map_err(|e| ServerError::XlsxError(format!("Failed to save workbook: {}", e)))
}

pub fn export_board_xlsx<T: Tabular>(rows: &[&T], board: &str) -> ResultResp {
    let buffer = board_workbook(rows, "Review")?;
    xlsx_response(buffer, &format!("{board}_review.xlsx"), rows.len())
}
