pub mod export_xlsx;

pub use export_xlsx::{board_workbook, export_board_xlsx};
