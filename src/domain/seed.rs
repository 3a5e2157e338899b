// src/domain/seed.rs

use crate::domain::record::{Application, JobPosting, Report};
use crate::errors::ServerError;
use serde::de::DeserializeOwned;

const SEED_JOBS: &str = include_str!("../../data/seed/jobs.json");
const SEED_APPLICATIONS: &str = include_str!("../../data/seed/applications.json");
const SEED_REPORTS: &str = include_str!("../../data/seed/reports.json");

fn parse<T: DeserializeOwned>(name: &str, raw: &str) -> Result<Vec<T>, ServerError> {
    serde_json::from_str(raw)
        .map_err(|e| ServerError::ConfigError(format!("invalid seed file {name}: {e}")))
}

pub fn jobs() -> Result<Vec<JobPosting>, ServerError> {
    let jobs: Vec<JobPosting> = parse("jobs.json", SEED_JOBS)?;
    for job in jobs.iter().filter(|j| j.is_incomplete()) {
        tracing::warn!(id = %job.id, title = %job.title, "seed job listing is incomplete");
    }
    Ok(jobs)
}

pub fn applications() -> Result<Vec<Application>, ServerError> {
    parse("applications.json", SEED_APPLICATIONS)
}

pub fn reports() -> Result<Vec<Report>, ServerError> {
    parse("reports.json", SEED_REPORTS)
}
