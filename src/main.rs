use crate::conf::Settings;
use crate::logging::{init_logging, LogFormat};

mod cmd;
mod conf;
mod db;
mod domain;
mod errors;
mod forms;
mod logging;
mod responses;
mod router;
mod spreadsheets;
mod state;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    let settings = match Settings::new() {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&settings.log_level, LogFormat::parse(&settings.log_format));

    if let Err(e) = cmd::run(&settings) {
        tracing::error!(error = %e, "fatal");
        std::process::exit(1);
    }
}
