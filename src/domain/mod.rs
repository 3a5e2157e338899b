pub mod board;
pub mod detail;
pub mod notifications;
pub mod projector;
pub mod record;
pub mod seed;
pub mod status;
pub mod store;
pub mod transition;

pub use board::{BrowseView, Dashboards, ReviewBoard, ReviewBoardMut, ReviewKey};
pub use projector::Query;
pub use record::{Listing, RecordId, Tabular};
