use maud::{html, Markup, DOCTYPE};

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0; color: #111827; }
header { display: flex; align-items: center; justify-content: space-between; padding: 0.75rem 1.5rem; box-shadow: 0 1px 3px rgba(0,0,0,0.1); }
header nav ul { display: flex; gap: 1rem; list-style: none; margin: 0; padding: 0; }
main.container { max-width: 1100px; margin: 1.5rem auto; padding: 0 1rem; }
.card { border: 1px solid #e5e7eb; border-radius: 8px; padding: 1rem 1.25rem; margin-bottom: 1.5rem; }
table { width: 100%; border-collapse: collapse; }
th { padding: 10px 8px; border-bottom: 2px solid #e5e7eb; text-align: left; }
td { padding: 8px; border-bottom: 1px solid #f3f4f6; }
tr.selected td { background: #eef2ff; }
.badge { display: inline-block; padding: 2px 8px; border-radius: 999px; color: white; font-size: 0.85em; }
.dialog { border: 2px solid #dc2626; border-radius: 8px; padding: 1rem 1.25rem; margin-bottom: 1.5rem; background: #fef2f2; }
.layer { border: 1px dashed #3b82f6; border-radius: 8px; padding: 0.75rem 1rem; margin-top: 1rem; }
.inline { display: inline; margin: 0; }
"#;

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " · InternHub" }
                style { (maud::PreEscaped(STYLE)) }
            }
            body {
                header {
                    a href="/" { strong { "InternHub" } }
                    nav {
                        ul {
                            li { a href="/company/jobs" { "Company" } }
                            li { a href="/student/jobs" { "Student" } }
                            li { a href="/scad/reports" { "SCAD" } }
                            li { a href="/faculty/reports" { "Faculty" } }
                            li { a href="/notifications" { "Notifications" } }
                        }
                    }
                }
                (content)
            }
        }
    }
}
