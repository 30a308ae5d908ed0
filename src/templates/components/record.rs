use crate::domain::record::{ApplicationRecord, Status};
use maud::{html, Markup};

/// One college application entry inside its group card.
pub fn record_card(record: &ApplicationRecord) -> Markup {
    html! {
        div class="record" {
            div {
                h3 { (record.name) }
                @if let Some(major) = &record.major {
                    p { "Major: " (major) }
                }
                @if let Some(deadline) = record.deadline {
                    p { "Deadline: " (deadline.format("%b %-d, %Y")) }
                }
                @if let Some(notes) = &record.notes {
                    p class="notes" { (notes) }
                }
            }
            div class="record-actions" {
                (status_select(record))
                form action="/delete" method="post" {
                    input type="hidden" name="id" value=(record.id);
                    button type="submit" class="danger" title="Delete" { "✕" }
                }
            }
        }
    }
}

/// Status dropdown that posts straight back to the store. Submits on change;
/// the button is the no-script fallback.
pub fn status_select(record: &ApplicationRecord) -> Markup {
    html! {
        form action="/status" method="post" {
            input type="hidden" name="id" value=(record.id);
            select
                name="status"
                class=(format!("status status-{}", record.status.as_str()))
                onchange="this.form.submit()"
            {
                @for status in Status::ALL {
                    option value=(status.as_str()) selected[record.status == status] {
                        (status.label())
                    }
                }
            }
            noscript { button type="submit" { "Update" } }
        }
    }
}
