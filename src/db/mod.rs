pub mod connection;
pub mod history;
pub mod notifications;

pub use connection::{init_db, Database};
