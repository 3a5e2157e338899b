use crate::domain::detail::DetailView;
use crate::domain::record::{DetailField, Listing, RecordId, Tabular};
use crate::domain::status::{status_color, status_label, StatusKind};
use crate::domain::Query;
use maud::{html, Markup};

pub mod clarification;

pub use clarification::clarification_dialog;

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        section class="card" {
            h3 { (title) }
            (body)
        }
    }
}

pub fn status_badge<S: StatusKind>(status: Option<S>) -> Markup {
    html! {
        span class="badge" style=(format!("background: {};", status_color(status).hex())) {
            (status_label(status))
        }
    }
}

/// GET form that re-renders `action` with `q` (and optionally `status`).
pub fn search_form(action: &str, query: &Query, with_status: bool) -> Markup {
    html! {
        form method="get" action=(action) style="display: flex; gap: 10px; align-items: center; margin-bottom: 1rem;" {
            label for="q" class="sr-only" { "Search" }
            input type="search" id="q" name="q" placeholder="Search..." value=(query.text);
            @if with_status {
                label for="status" class="sr-only" { "Status" }
                input type="text" id="status" name="status" placeholder="Status filter" value=(query.status);
            }
            button type="submit" { "Filter" }
            @if !query.is_empty() {
                a href=(action) { "Clear" }
            }
        }
    }
}

/// Table of `rows`; each row links to `{base}/{id}`.
pub fn records_table<T: Listing + Tabular>(
    rows: &[&T],
    base: &str,
    selected: Option<RecordId>,
) -> Markup {
    html! {
        @if rows.is_empty() {
            p { "No records match." }
        } @else {
            table {
                thead {
                    tr {
                        @for header in T::COLUMNS {
                            th { (header) }
                        }
                        th {}
                    }
                }
                tbody {
                    @for row in rows {
                        tr class=[(selected == Some(row.id())).then_some("selected")] {
                            @for cell in row.cells() {
                                td { (cell) }
                            }
                            td { a href=(format!("{base}/{}", row.id())) { "View" } }
                        }
                    }
                }
            }
        }
    }
}

pub fn detail_fields(fields: &[DetailField]) -> Markup {
    html! {
        dl {
            @for field in fields {
                dt { strong { (field.label) } }
                dd { (field.value) }
            }
        }
    }
}

/// Nested applicants layer, closable on its own.
pub fn applicants_layer<T: Listing>(view: &DetailView<'_, T>, close_action: &str) -> Markup {
    html! {
        @if let Some(applicants) = view.sub_records {
            div class="layer" id="applicants" {
                h4 { "Applicants for " (view.record.title()) }
                @if applicants.is_empty() {
                    p { "No applicants yet." }
                } @else {
                    ul {
                        @for a in applicants {
                            li { strong { (a.name) } " · " (a.email) " · " (a.major) }
                        }
                    }
                }
                form method="post" action=(close_action) class="inline" {
                    button type="submit" { "Close applicants" }
                }
            }
        }
    }
}
