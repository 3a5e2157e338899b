use crate::domain::notifications::Notification;
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn notifications_page(notifications: &[Notification]) -> Markup {
    desktop_layout(
        "Notifications",
        html! {
            main class="container" {
                h1 { "Notifications" }
                @if notifications.is_empty() {
                    p { "You're all caught up." }
                } @else {
                    ul {
                        // Newest first.
                        @for n in notifications.iter().rev() {
                            li {
                                (n.message)
                                " "
                                small style="color: #6b7280;" { (n.created_at.format("%Y-%m-%d %H:%M")) }
                                " "
                                form method="post" action=(format!("/notifications/{}/dismiss", n.id)) class="inline" {
                                    button type="submit" { "Dismiss" }
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}
