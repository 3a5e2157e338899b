use crate::domain::detail::DetailView;
use crate::domain::record::{JobPosting, Listing};
use crate::domain::Query;
use crate::forms::{text, Params};
use crate::templates::components::{applicants_layer, card, detail_fields, search_form};
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub struct JobsVm<'a> {
    pub query: &'a Query,
    pub rows: Vec<&'a JobPosting>,
    pub detail: Option<DetailView<'a, JobPosting>>,
    /// Input of a rejected create attempt; keeps the form open and filled.
    pub draft: Option<&'a Params>,
}

fn incomplete_badge() -> Markup {
    html! {
        span class="badge" style="background: #f59e0b;" title="Missing paid flag, skills or description" {
            "Incomplete listing"
        }
    }
}

pub fn company_jobs_page(vm: &JobsVm) -> Markup {
    desktop_layout(
        "Company: Job postings",
        html! {
            main class="container" {
                h1 { "Job postings" }

                (search_form("/company/jobs", vm.query, false))

                @if vm.rows.is_empty() {
                    p { "No job postings match." }
                } @else {
                    table {
                        thead {
                            tr {
                                th { "Title" }
                                th { "Category" }
                                th { "Duration" }
                                th { "Paid" }
                                th { "Applicants" }
                                th {}
                            }
                        }
                        tbody {
                            @for job in &vm.rows {
                                tr class=[(vm.detail.as_ref().map(|d| d.record.id) == Some(job.id)).then_some("selected")] {
                                    td {
                                        (job.title)
                                        @if job.is_incomplete() { " " (incomplete_badge()) }
                                    }
                                    td { (job.category) }
                                    td { (job.duration) }
                                    td {
                                        @match job.paid {
                                            Some(true) => "Yes",
                                            Some(false) => "No",
                                            None => "-",
                                        }
                                    }
                                    td { (job.applicant_count) }
                                    td { a href=(format!("/company/jobs/{}", job.id)) { "View" } }
                                }
                            }
                        }
                    }
                }

                @if let Some(detail) = &vm.detail {
                    (job_detail(detail))
                }

                (create_form(vm.draft))
            }
        },
    )
}

fn job_detail(view: &DetailView<'_, JobPosting>) -> Markup {
    let job = view.record;
    let base = format!("/company/jobs/{}", job.id);
    card(
        &format!("{} · {}", job.title, job.company),
        html! {
            @if job.is_incomplete() { p { (incomplete_badge()) } }
            (detail_fields(&view.fields))

            div style="display: flex; gap: 8px;" {
                a href=(format!("{base}/applicants")) { "View applicants (" (job.sub_records().len()) ")" }
                form method="post" action=(format!("{base}/close")) class="inline" {
                    button type="submit" { "Close" }
                }
                form method="post" action=(format!("{base}/delete")) class="inline" {
                    button type="submit" style="color: #dc2626;" { "Delete" }
                }
            }

            (applicants_layer(view, &format!("{base}/applicants/close")))

            details style="margin-top: 1rem;" {
                summary { "Edit posting" }
                form method="post" action=(format!("{base}/edit")) {
                    (job_fields(
                        &job.title,
                        &job.company,
                        &job.category,
                        &job.duration,
                        job.is_paid(),
                        &job.salary.map(|s| s.to_string()).unwrap_or_default(),
                        job.skills_required.as_deref().unwrap_or(""),
                        job.description.as_deref().unwrap_or(""),
                    ))
                    button type="submit" { "Save" }
                }
            }
        },
    )
}

fn create_form(draft: Option<&Params>) -> Markup {
    let value = |key: &str| draft.map(|p| text(p, key)).unwrap_or_default();
    let paid = draft.map(|p| crate::forms::flag(p, "paid")).unwrap_or(false);
    html! {
        details open[draft.is_some()] class="card" id="create-job" {
            summary { strong { "Post a new internship" } }
            @if draft.is_some() {
                p style="color: #dc2626;" { "Title and category are required." }
            }
            form method="post" action="/company/jobs" {
                (job_fields(
                    &value("title"),
                    &value("company"),
                    &value("category"),
                    &value("duration"),
                    paid,
                    &value("salary"),
                    &value("skills_required"),
                    &value("description"),
                ))
                button type="submit" { "Create" }
            }
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn job_fields(
    title: &str,
    company: &str,
    category: &str,
    duration: &str,
    paid: bool,
    salary: &str,
    skills: &str,
    description: &str,
) -> Markup {
    html! {
        div style="display: grid; grid-template-columns: 10rem 1fr; gap: 6px; margin: 8px 0;" {
            label for="title" { "Title *" }
            input type="text" id="title" name="title" value=(title);
            label for="company" { "Company" }
            input type="text" id="company" name="company" value=(company);
            label for="category" { "Category *" }
            input type="text" id="category" name="category" value=(category);
            label for="duration" { "Duration" }
            input type="text" id="duration" name="duration" value=(duration);
            label for="paid" { "Paid" }
            input type="checkbox" id="paid" name="paid" checked[paid]
                onchange="this.form.querySelectorAll('.salary-row').forEach(e => e.hidden = !this.checked)";
            label for="salary" class="salary-row" hidden[!paid] { "Salary / month" }
            input type="number" id="salary" name="salary" class="salary-row" min="0" value=(salary) hidden[!paid];
            label for="skills_required" { "Skills required" }
            input type="text" id="skills_required" name="skills_required" value=(skills);
            label for="description" { "Description" }
            textarea id="description" name="description" rows="3" { (description) }
        }
    }
}

pub fn job_created_page(job: &JobPosting) -> Markup {
    desktop_layout(
        "Posting created",
        html! {
            main class="container" {
                div class="dialog" style="border-color: #10b981; background: #ecfdf5;" role="dialog" {
                    h3 { "Internship posted" }
                    p { strong { (job.title) } " at " (job.company) " is now visible to students." }
                    form method="post" action=(format!("/company/jobs/{}/acknowledge", job.id)) {
                        button type="submit" { "Close" }
                    }
                }
            }
        },
    )
}
