use maud::{html, Markup, PreEscaped, DOCTYPE};

// Small enough to inline; no static file route needed.
const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0; background: #eef2ff; color: #1f2937; }
header.site { display: flex; align-items: center; gap: 12px; padding: 16px 24px;
  background: #fff; box-shadow: 0 1px 3px rgba(0,0,0,.1); }
header.site h1 { font-size: 1.5rem; margin: 0; }
main.container { max-width: 960px; margin: 0 auto; padding: 24px; }
section.card { background: #fff; border-radius: 8px; box-shadow: 0 1px 3px rgba(0,0,0,.1);
  padding: 20px; margin-bottom: 24px; }
section.card h2 { margin-top: 0; border-bottom: 1px solid #e5e7eb; padding-bottom: 8px; }
.record { border: 1px solid #e5e7eb; border-radius: 8px; padding: 12px 16px; margin-bottom: 12px;
  display: flex; justify-content: space-between; align-items: flex-start; gap: 16px; }
.record h3 { margin: 0 0 4px; }
.record p { margin: 2px 0; font-size: .9rem; color: #4b5563; }
.record .notes { font-style: italic; color: #6b7280; }
.record-actions { display: flex; align-items: center; gap: 8px; }
.field { display: flex; flex-direction: column; gap: 4px; margin-bottom: 12px; }
.field label { font-size: .85rem; font-weight: 500; }
.field input, .field select { padding: 8px; border: 1px solid #d1d5db; border-radius: 6px; }
.form-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 0 16px; }
button.primary { background: #4f46e5; color: #fff; border: none; border-radius: 6px;
  padding: 8px 20px; cursor: pointer; }
button.danger { background: none; border: none; color: #ef4444; cursor: pointer; }
.status-pending { background: #f3f4f6; color: #374151; }
.status-accepted { background: #d1fae5; color: #047857; }
.status-rejected { background: #fee2e2; color: #b91c1c; }
.status-deferred { background: #fef3c7; color: #b45309; }
.status-waitlisted { background: #dbeafe; color: #1d4ed8; }
.status-withdrawn { background: #ede9fe; color: #6d28d9; }
select.status { border-radius: 999px; padding: 4px 10px; font-size: .85rem; border: none; }
.empty-state { text-align: center; padding: 48px 0; color: #6b7280; font-size: 1.1rem; }
"#;

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(STYLE)) }
            }
            body {
                header class="site" {
                    // graduation cap
                    svg
                        xmlns="http://www.w3.org/2000/svg"
                        width="28"
                        height="28"
                        viewBox="0 0 24 24"
                        fill="none"
                        stroke="#4f46e5"
                        stroke-width="2"
                        stroke-linecap="round"
                        stroke-linejoin="round"
                    {
                        path d="M22 10L12 5L2 10l10 5l10 -5v6" {}
                        path d="M6 12v5c3 3 9 3 12 0v-5" {}
                    }
                    h1 { "College Application Tracker" }
                }
                (content)
            }
        }
    }
}
