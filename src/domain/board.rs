// src/domain/board.rs

use crate::domain::detail::DetailPresenter;
use crate::domain::projector::{FieldSelector, Projector, Query};
use crate::domain::record::{Application, JobPosting, Listing, Report};
use crate::domain::seed;
use crate::domain::store::ListingStore;
use crate::domain::transition::TransitionEngine;
use crate::errors::ServerError;

/// Everything one dashboard collection needs: its records, the query typed
/// into its search box, and the UI state of its transition and detail panes.
pub struct ReviewBoard<T: Listing> {
    pub store: ListingStore<T>,
    pub projector: Projector<T>,
    pub engine: TransitionEngine<T::Status>,
    pub presenter: DetailPresenter,
    pub query: Query,
}

impl<T: Listing> ReviewBoard<T> {
    pub fn new(records: Vec<T>, fields: Vec<FieldSelector<T>>) -> Self {
        Self {
            store: ListingStore::seeded(records),
            projector: Projector::new(fields),
            engine: TransitionEngine::new(),
            presenter: DetailPresenter::new(),
            query: Query::default(),
        }
    }

    pub fn visible(&self) -> Vec<&T> {
        self.projector.project(self.store.records(), &self.query)
    }

    pub fn visible_for(&self, query: &Query) -> Vec<&T> {
        self.projector.project(self.store.records(), query)
    }
}

/// A read-only search over a store owned by another board.
pub struct BrowseView<T: Listing> {
    pub projector: Projector<T>,
    pub query: Query,
}

impl<T: Listing> BrowseView<T> {
    pub fn new(fields: Vec<FieldSelector<T>>) -> Self {
        Self {
            projector: Projector::new(fields),
            query: Query::default(),
        }
    }

    pub fn visible<'a>(&self, store: &'a ListingStore<T>) -> Vec<&'a T> {
        self.projector.project(store.records(), &self.query)
    }
}

fn job_title(job: &JobPosting) -> &str {
    &job.title
}

fn job_company(job: &JobPosting) -> &str {
    &job.company
}

fn application_title(app: &Application) -> &str {
    &app.job_title
}

fn application_company(app: &Application) -> &str {
    &app.company
}

fn application_student(app: &Application) -> &str {
    &app.student
}

fn report_title(report: &Report) -> &str {
    &report.title
}

fn report_student(report: &Report) -> &str {
    &report.student
}

fn application_fields() -> Vec<FieldSelector<Application>> {
    vec![
        application_title as FieldSelector<Application>,
        application_company,
        application_student,
    ]
}

fn report_fields() -> Vec<FieldSelector<Report>> {
    vec![report_title as FieldSelector<Report>, report_student]
}

/// Collections that carry a review status and accept status clicks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewKey {
    CompanyApplications,
    ScadReports,
    FacultyReports,
}

impl ReviewKey {
    pub const ALL: [ReviewKey; 3] = [
        ReviewKey::CompanyApplications,
        ReviewKey::ScadReports,
        ReviewKey::FacultyReports,
    ];

    pub fn from_path(dashboard: &str, collection: &str) -> Option<Self> {
        match (dashboard, collection) {
            ("company", "applications") => Some(ReviewKey::CompanyApplications),
            ("scad", "reports") => Some(ReviewKey::ScadReports),
            ("faculty", "reports") => Some(ReviewKey::FacultyReports),
            _ => None,
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            ReviewKey::CompanyApplications => "/company/applications",
            ReviewKey::ScadReports => "/scad/reports",
            ReviewKey::FacultyReports => "/faculty/reports",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ReviewKey::CompanyApplications => "Company: Applications",
            ReviewKey::ScadReports => "SCAD: Internship Reports",
            ReviewKey::FacultyReports => "Faculty: Internship Reports",
        }
    }

    pub fn dashboard(self) -> &'static str {
        match self {
            ReviewKey::CompanyApplications => "company",
            ReviewKey::ScadReports => "scad",
            ReviewKey::FacultyReports => "faculty",
        }
    }
}

/// Mutable handle to one review board, typed by its record kind.
pub enum ReviewBoardMut<'a> {
    Applications(&'a mut ReviewBoard<Application>),
    Reports(&'a mut ReviewBoard<Report>),
}

/// All boards of one running instance. Students browse the company's job
/// and application stores; SCAD and faculty each review their own copy of
/// the reports.
pub struct Dashboards {
    pub company_jobs: ReviewBoard<JobPosting>,
    pub company_applications: ReviewBoard<Application>,
    pub student_jobs: BrowseView<JobPosting>,
    pub student_applications: BrowseView<Application>,
    pub scad_reports: ReviewBoard<Report>,
    pub faculty_reports: ReviewBoard<Report>,
}

impl Dashboards {
    pub fn new(jobs: Vec<JobPosting>, applications: Vec<Application>, reports: Vec<Report>) -> Self {
        Self {
            company_jobs: ReviewBoard::new(jobs, vec![job_title as FieldSelector<JobPosting>]),
            company_applications: ReviewBoard::new(applications, application_fields()),
            student_jobs: BrowseView::new(vec![job_title as FieldSelector<JobPosting>, job_company]),
            student_applications: BrowseView::new(application_fields()),
            scad_reports: ReviewBoard::new(reports.clone(), report_fields()),
            faculty_reports: ReviewBoard::new(reports, report_fields()),
        }
    }

    pub fn seeded() -> Result<Self, ServerError> {
        Ok(Self::new(seed::jobs()?, seed::applications()?, seed::reports()?))
    }

    pub fn review(&mut self, key: ReviewKey) -> ReviewBoardMut<'_> {
        match key {
            ReviewKey::CompanyApplications => {
                ReviewBoardMut::Applications(&mut self.company_applications)
            }
            ReviewKey::ScadReports => ReviewBoardMut::Reports(&mut self.scad_reports),
            ReviewKey::FacultyReports => ReviewBoardMut::Reports(&mut self.faculty_reports),
        }
    }
}
