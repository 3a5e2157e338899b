pub mod error;
pub mod home;
pub mod jobs;
pub mod notifications;
pub mod reviews;

pub use error::error_page;
pub use home::home_page;
pub use jobs::{company_jobs_page, job_created_page, JobsVm};
pub use notifications::notifications_page;
pub use reviews::{browse_page, review_page, PendingVm, ReviewVm};
