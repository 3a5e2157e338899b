// src/domain/record.rs

use crate::domain::status::{
    status_label, ApplicationStatus, ReportStatus, StatusKind, Unreviewed,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub u32);

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for RecordId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(RecordId)
    }
}

/// One labelled line of a detail view.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailField {
    pub label: &'static str,
    pub value: String,
}

impl DetailField {
    fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }
}

/// A record held by a `ListingStore`: a job posting, a report or an application.
pub trait Listing: Clone {
    type Status: StatusKind;
    type Patch;

    /// Lower-case noun used in log lines and history rows.
    const KIND: &'static str;

    fn id(&self) -> RecordId;
    fn assign_id(&mut self, id: RecordId);
    fn title(&self) -> &str;

    /// Required fields are present and not blank.
    fn is_valid(&self) -> bool;

    fn status(&self) -> Option<Self::Status>;
    fn set_status(&mut self, status: Option<Self::Status>);
    fn apply_patch(&mut self, patch: Self::Patch);

    fn clarification(&self) -> Option<&str> {
        None
    }
    fn set_clarification(&mut self, _note: Option<String>) {}

    /// Bumps the record's interest counter. Returns false for records without one.
    fn register_interest(&mut self) -> bool {
        false
    }

    fn detail_fields(&self) -> Vec<DetailField>;

    fn sub_records(&self) -> &[Applicant] {
        &[]
    }
}

/// Column layout shared by the dashboard tables and the spreadsheet export.
pub trait Tabular {
    const COLUMNS: &'static [&'static str];

    fn cells(&self) -> Vec<String>;
}

fn blank(s: &str) -> bool {
    s.trim().is_empty()
}

// ---------------------------------------------------------------------------
// Applicants
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Applicant {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub major: String,
}

// ---------------------------------------------------------------------------
// Job postings
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPosting {
    pub id: RecordId,
    pub title: String,
    pub company: String,
    pub category: String,
    #[serde(default)]
    pub duration: String,
    // Seed listings exist without these three; they stay optional and the
    // listing is flagged as incomplete instead of defaulting them.
    #[serde(default)]
    pub paid: Option<bool>,
    #[serde(default)]
    pub salary: Option<u32>,
    #[serde(default)]
    pub skills_required: Option<String>,
    #[serde(default, rename = "jobDescription")]
    pub description: Option<String>,
    #[serde(default)]
    pub applicant_count: u32,
    #[serde(default)]
    pub applicants: Vec<Applicant>,
}

impl JobPosting {
    /// A fresh posting as entered in the create form; the store assigns the id.
    pub fn draft(title: impl Into<String>, company: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id: RecordId(0),
            title: title.into(),
            company: company.into(),
            category: category.into(),
            duration: String::new(),
            paid: None,
            salary: None,
            skills_required: None,
            description: None,
            applicant_count: 0,
            applicants: Vec::new(),
        }
    }

    pub fn is_paid(&self) -> bool {
        self.paid == Some(true)
    }

    pub fn is_incomplete(&self) -> bool {
        self.paid.is_none() || self.skills_required.is_none() || self.description.is_none()
    }

    /// Salary is only visible for paid postings.
    pub fn visible_salary(&self) -> Option<u32> {
        if self.is_paid() {
            self.salary
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobPatch {
    pub title: Option<String>,
    pub company: Option<String>,
    pub category: Option<String>,
    pub duration: Option<String>,
    pub paid: Option<bool>,
    pub salary: Option<Option<u32>>,
    pub skills_required: Option<String>,
    pub description: Option<String>,
}

impl Listing for JobPosting {
    type Status = Unreviewed;
    type Patch = JobPatch;

    const KIND: &'static str = "job";

    fn id(&self) -> RecordId {
        self.id
    }

    fn assign_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn is_valid(&self) -> bool {
        !blank(&self.title) && !blank(&self.category)
    }

    fn status(&self) -> Option<Unreviewed> {
        None
    }

    fn set_status(&mut self, status: Option<Unreviewed>) {
        if let Some(s) = status {
            match s {}
        }
    }

    fn apply_patch(&mut self, patch: JobPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(company) = patch.company {
            self.company = company;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(duration) = patch.duration {
            self.duration = duration;
        }
        if let Some(paid) = patch.paid {
            self.paid = Some(paid);
        }
        if let Some(salary) = patch.salary {
            self.salary = salary;
        }
        if let Some(skills) = patch.skills_required {
            self.skills_required = Some(skills);
        }
        if let Some(description) = patch.description {
            self.description = Some(description);
        }
    }

    fn register_interest(&mut self) -> bool {
        self.applicant_count += 1;
        true
    }

    fn detail_fields(&self) -> Vec<DetailField> {
        let mut fields = vec![
            DetailField::new("Title", self.title.as_str()),
            DetailField::new("Company", self.company.as_str()),
            DetailField::new("Category", self.category.as_str()),
            DetailField::new("Duration", self.duration.as_str()),
            DetailField::new(
                "Paid",
                match self.paid {
                    Some(true) => "Yes",
                    Some(false) => "No",
                    None => "Not specified",
                },
            ),
        ];
        if let Some(salary) = self.visible_salary() {
            fields.push(DetailField::new("Salary", format!("{salary} / month")));
        }
        fields.push(DetailField::new(
            "Skills required",
            self.skills_required.as_deref().unwrap_or("Not specified"),
        ));
        fields.push(DetailField::new(
            "Description",
            self.description.as_deref().unwrap_or("Not specified"),
        ));
        fields.push(DetailField::new(
            "Applicants",
            self.applicant_count.to_string(),
        ));
        fields
    }

    fn sub_records(&self) -> &[Applicant] {
        &self.applicants
    }
}

impl Tabular for JobPosting {
    const COLUMNS: &'static [&'static str] =
        &["ID", "Title", "Company", "Category", "Duration", "Paid", "Applicants"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.title.clone(),
            self.company.clone(),
            self.category.clone(),
            self.duration.clone(),
            match self.paid {
                Some(true) => "Yes".to_string(),
                Some(false) => "No".to_string(),
                None => "-".to_string(),
            },
            self.applicant_count.to_string(),
        ]
    }
}

// ---------------------------------------------------------------------------
// Internship reports
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub id: RecordId,
    pub title: String,
    pub student: String,
    pub major: String,
    pub submitted: NaiveDate,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub status: Option<ReportStatus>,
    #[serde(default)]
    pub clarification: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportPatch {
    pub title: Option<String>,
    pub body: Option<String>,
}

impl Listing for Report {
    type Status = ReportStatus;
    type Patch = ReportPatch;

    const KIND: &'static str = "report";

    fn id(&self) -> RecordId {
        self.id
    }

    fn assign_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn is_valid(&self) -> bool {
        !blank(&self.title) && !blank(&self.major)
    }

    fn status(&self) -> Option<ReportStatus> {
        self.status
    }

    fn set_status(&mut self, status: Option<ReportStatus>) {
        self.status = status;
    }

    fn apply_patch(&mut self, patch: ReportPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(body) = patch.body {
            self.body = body;
        }
    }

    fn clarification(&self) -> Option<&str> {
        self.clarification.as_deref()
    }

    fn set_clarification(&mut self, note: Option<String>) {
        self.clarification = note;
    }

    fn detail_fields(&self) -> Vec<DetailField> {
        let mut fields = vec![
            DetailField::new("Title", self.title.as_str()),
            DetailField::new("Student", self.student.as_str()),
            DetailField::new("Major", self.major.as_str()),
            DetailField::new("Submitted", self.submitted.format("%Y-%m-%d").to_string()),
            DetailField::new("Status", status_label(self.status)),
            DetailField::new("Report", self.body.as_str()),
        ];
        if let Some(note) = &self.clarification {
            fields.push(DetailField::new("Clarification", note.as_str()));
        }
        fields
    }
}

impl Tabular for Report {
    const COLUMNS: &'static [&'static str] =
        &["ID", "Title", "Student", "Major", "Submitted", "Status", "Clarification"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.title.clone(),
            self.student.clone(),
            self.major.clone(),
            self.submitted.format("%Y-%m-%d").to_string(),
            status_label(self.status).to_string(),
            self.clarification.clone().unwrap_or_default(),
        ]
    }
}

// ---------------------------------------------------------------------------
// Applications
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: RecordId,
    pub job_title: String,
    pub company: String,
    pub student: String,
    pub submitted: NaiveDate,
    #[serde(default)]
    pub status: Option<ApplicationStatus>,
    #[serde(default)]
    pub clarification: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApplicationPatch {
    pub job_title: Option<String>,
    pub company: Option<String>,
}

impl Listing for Application {
    type Status = ApplicationStatus;
    type Patch = ApplicationPatch;

    const KIND: &'static str = "application";

    fn id(&self) -> RecordId {
        self.id
    }

    fn assign_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn title(&self) -> &str {
        &self.job_title
    }

    fn is_valid(&self) -> bool {
        !blank(&self.job_title) && !blank(&self.company)
    }

    fn status(&self) -> Option<ApplicationStatus> {
        self.status
    }

    fn set_status(&mut self, status: Option<ApplicationStatus>) {
        self.status = status;
    }

    fn apply_patch(&mut self, patch: ApplicationPatch) {
        if let Some(job_title) = patch.job_title {
            self.job_title = job_title;
        }
        if let Some(company) = patch.company {
            self.company = company;
        }
    }

    fn clarification(&self) -> Option<&str> {
        self.clarification.as_deref()
    }

    fn set_clarification(&mut self, note: Option<String>) {
        self.clarification = note;
    }

    fn detail_fields(&self) -> Vec<DetailField> {
        let mut fields = vec![
            DetailField::new("Position", self.job_title.as_str()),
            DetailField::new("Company", self.company.as_str()),
            DetailField::new("Student", self.student.as_str()),
            DetailField::new("Submitted", self.submitted.format("%Y-%m-%d").to_string()),
            DetailField::new("Status", status_label(self.status)),
        ];
        if let Some(note) = &self.clarification {
            fields.push(DetailField::new("Clarification", note.as_str()));
        }
        fields
    }
}

impl Tabular for Application {
    const COLUMNS: &'static [&'static str] =
        &["ID", "Position", "Company", "Student", "Submitted", "Status", "Clarification"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.job_title.clone(),
            self.company.clone(),
            self.student.clone(),
            self.submitted.format("%Y-%m-%d").to_string(),
            status_label(self.status).to_string(),
            self.clarification.clone().unwrap_or_default(),
        ]
    }
}
