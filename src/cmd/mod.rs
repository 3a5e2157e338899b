use crate::conf::Settings;
use crate::db::Database;
use crate::errors::ServerError;
use clap::{Parser, Subcommand};

mod export;
mod listen;

#[derive(Parser)]
#[command(about = "internship review dashboards")]
struct Cmd {
    #[command(subcommand)]
    command: Option<SubCommandType>,
}

#[derive(Subcommand)]
enum SubCommandType {
    /// Serve the dashboards over HTTP (default)
    Listen,
    /// Write the filtered view of a review board to an .xlsx file
    Export {
        /// e.g. `scad/reports`, `faculty/reports`, `company/applications`
        board: String,
        out: String,
        #[arg(long, default_value = "")]
        query: String,
        #[arg(long, default_value = "")]
        status: String,
    },
}

pub fn run(settings: &Settings) -> Result<(), ServerError> {
    let args = Cmd::parse();
    match args.command {
        Some(SubCommandType::Listen) | None => listen::serve(settings),
        Some(SubCommandType::Export {
            board,
            out,
            query,
            status,
        }) => {
            let db = Database::new(settings.database_path.clone());
            export::write(&db, &board, &out, &query, &status).map(|_| ())
        }
    }
}
