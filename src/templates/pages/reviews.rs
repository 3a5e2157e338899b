use crate::db::history::StatusChange;
use crate::domain::detail::DetailView;
use crate::domain::record::{Listing, RecordId, Tabular};
use crate::domain::status::StatusKind;
use crate::domain::{Query, ReviewKey};
use crate::templates::components::{
    card, clarification_dialog, detail_fields, records_table, search_form, status_badge,
};
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub struct PendingVm<'a, S> {
    pub id: RecordId,
    pub status: S,
    pub record_title: &'a str,
    pub message: String,
    pub show_error: bool,
}

pub struct ReviewVm<'a, T: Listing> {
    pub key: ReviewKey,
    pub query: &'a Query,
    pub rows: Vec<&'a T>,
    pub detail: Option<DetailView<'a, T>>,
    pub pending: Option<PendingVm<'a, T::Status>>,
    pub history: Vec<StatusChange>,
}

fn export_href(base: &str, query: &Query) -> String {
    let qs = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("q", &query.text)
        .append_pair("status", &query.status)
        .finish();
    format!("{base}/export?{qs}")
}

fn status_controls<T: Listing>(base: &str, record: &T, blocked: bool) -> Markup {
    let controls = <T::Status as StatusKind>::CONTROLS;
    html! {
        div style="display: flex; gap: 8px; margin: 8px 0;" {
            @for status in controls {
                @let active = record.status() == Some(*status);
                form method="post" action=(format!("{base}/{}/status", record.id())) class="inline" {
                    input type="hidden" name="status" value=(status.slug());
                    button
                        type="submit"
                        disabled[blocked]
                        style=(format!(
                            "border: 2px solid {}; background: {}; color: {}; border-radius: 4px; padding: 4px 10px; cursor: pointer;",
                            status.color().hex(),
                            if active { status.color().hex() } else { "white" },
                            if active { "white" } else { "#111827" },
                        ))
                        title=(if active { "Click again to clear" } else { "" })
                    { (status.label()) }
                }
            }
        }
    }
}

fn history_list(history: &[StatusChange]) -> Markup {
    html! {
        @if !history.is_empty() {
            h4 { "Status history" }
            ol {
                @for change in history {
                    li {
                        (change.changed_at.format("%Y-%m-%d %H:%M")) ": "
                        (change.previous_status.as_deref().unwrap_or("Pending"))
                        " → " strong { (change.current_status) }
                        @if let Some(note) = &change.clarification {
                            " (" em { (note) } ")"
                        }
                    }
                }
            }
        }
    }
}

pub fn review_page<T: Listing + Tabular>(vm: &ReviewVm<T>) -> Markup {
    let base = vm.key.path();
    desktop_layout(
        vm.key.title(),
        html! {
            main class="container" {
                h1 { (vm.key.title()) }

                @if let Some(p) = &vm.pending {
                    (clarification_dialog(base, p.id, p.record_title, p.status.label(), &p.message, p.show_error))
                }

                (search_form(base, vm.query, true))
                p { a href=(export_href(base, vm.query)) { "Export view (.xlsx)" } }

                (records_table(&vm.rows, base, vm.detail.as_ref().map(|d| d.record.id())))

                @if let Some(detail) = &vm.detail {
                    (card(detail.record.title(), html! {
                        p { "Status: " (status_badge(detail.record.status())) }
                        (status_controls(base, detail.record, vm.pending.is_some()))
                        (detail_fields(&detail.fields))
                        (history_list(&vm.history))
                        form method="post" action=(format!("{base}/{}/close", detail.record.id())) class="inline" {
                            button type="submit" { "Close" }
                        }
                    }))
                }
            }
        },
    )
}

/// Read-only list for the student dashboards.
pub fn browse_page<T: Listing + Tabular>(
    title: &str,
    base: &str,
    query: &Query,
    with_status: bool,
    rows: &[&T],
) -> Markup {
    desktop_layout(
        title,
        html! {
            main class="container" {
                h1 { (title) }
                (search_form(base, query, with_status))
                @if rows.is_empty() {
                    p { "No records match." }
                } @else {
                    table {
                        thead {
                            tr {
                                @for header in T::COLUMNS { th { (header) } }
                            }
                        }
                        tbody {
                            @for row in rows {
                                tr {
                                    @for cell in row.cells() { td { (cell) } }
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}
