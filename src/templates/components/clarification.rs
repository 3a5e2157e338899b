use crate::domain::record::RecordId;
use crate::domain::transition::Clarification;
use maud::{html, Markup};

/// Blocking rejection dialog. Submit stays disabled until the message has
/// non-blank text.
pub fn clarification_dialog(
    base: &str,
    id: RecordId,
    record_title: &str,
    status_label: &str,
    message: &str,
    show_error: bool,
) -> Markup {
    html! {
        div class="dialog" role="dialog" aria-modal="true" id="clarification-dialog" {
            h3 { "Clarification required" }
            p {
                "Explain why " strong { (record_title) } " (#" (id) ") is being marked "
                strong { (status_label) } "."
            }
            @if show_error {
                p style="color: #dc2626;" { "A clarification message is required." }
            }
            form method="post" action=(format!("{base}/clarify")) {
                textarea
                    name="message"
                    rows="4"
                    style="width: 100%;"
                    oninput="this.form.querySelector('button[type=submit]').disabled = !this.value.trim()"
                { (message) }
                div style="display: flex; gap: 8px; margin-top: 8px;" {
                    button type="submit" disabled[!Clarification::accepts(message)] { "Submit" }
                    button type="submit" formaction=(format!("{base}/cancel")) { "Cancel" }
                }
            }
        }
    }
}
