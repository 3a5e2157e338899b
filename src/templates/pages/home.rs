// templates/pages/home.rs

use crate::domain::ReviewKey;
use crate::templates::{components::card, desktop_layout};
use maud::{html, Markup};

pub fn home_page(open_notifications: usize) -> Markup {
    desktop_layout(
        "Dashboards",
        html! {
            main class="container" {
                h1 { "Dashboards" }

                (card("Company", html! {
                    ul {
                        li { a href="/company/jobs" { "Job postings" } }
                        li { a href=(ReviewKey::CompanyApplications.path()) { "Applications" } }
                    }
                }))

                (card("Student", html! {
                    ul {
                        li { a href="/student/jobs" { "Browse internships" } }
                        li { a href="/student/applications" { "My applications" } }
                    }
                }))

                (card("SCAD office", html! {
                    a href=(ReviewKey::ScadReports.path()) { "Review internship reports" }
                }))

                (card("Faculty", html! {
                    a href=(ReviewKey::FacultyReports.path()) { "Review internship reports" }
                }))

                p {
                    a href="/notifications" { "Notifications (" (open_notifications) ")" }
                }
            }
        },
    )
}
