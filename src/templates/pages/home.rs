// templates/pages/home.rs

use crate::domain::grouping::GroupKey;
use crate::domain::record::{ApplicationRecord, Country, Status};
use crate::templates::{components::record_card, desktop_layout};
use maud::{html, Markup};

/// The whole tracker lives on one page: the add form on top, the grouped
/// list beneath it.
pub fn home_page(groups: &[(GroupKey, Vec<&ApplicationRecord>)]) -> Markup {
    desktop_layout(
        "College Application Tracker",
        html! {
            main class="container" {
                (add_college_form())

                @if groups.is_empty() {
                    section class="card" {
                        p class="empty-state" {
                            "No colleges added yet. Add your first college to get started!"
                        }
                    }
                } @else {
                    @for ((country, ty), records) in groups {
                        section class="card" {
                            h2 { (country.as_str()) " - " (ty.as_str()) }
                            @for record in records {
                                (record_card(record))
                            }
                        }
                    }
                }
            }
        },
    )
}

fn add_college_form() -> Markup {
    html! {
        section class="card" {
            h2 { "Add New College" }
            form action="/add" method="post" {
                div class="form-grid" {
                    div class="field" {
                        label for="name" { "College Name" }
                        input
                            type="text"
                            id="name"
                            name="name"
                            required
                            placeholder="e.g., Harvard University";
                    }
                    div class="field" {
                        label for="country" { "Country" }
                        select id="country" name="country" {
                            option value="US" { "United States" }
                            option value="UK" { "United Kingdom" }
                        }
                    }
                    div class="field" {
                        label for="type" { "Application Type" }
                        // Grouped by country; a pick from the wrong group is
                        // rejected server-side.
                        select id="type" name="type" {
                            @for country in Country::ALL {
                                optgroup label=(country.as_str()) {
                                    @for ty in country.allowed_types() {
                                        option value=(ty.as_str()) { (ty.as_str()) }
                                    }
                                }
                            }
                        }
                    }
                    div class="field" {
                        label for="status" { "Status" }
                        select id="status" name="status" {
                            @for status in Status::ALL {
                                option value=(status.as_str()) { (status.label()) }
                            }
                        }
                    }
                    div class="field" {
                        label for="deadline" { "Deadline" }
                        input type="date" id="deadline" name="deadline";
                    }
                    div class="field" {
                        label for="major" { "Major/Course" }
                        input
                            type="text"
                            id="major"
                            name="major"
                            placeholder="e.g., Computer Science";
                    }
                    div class="field" {
                        label for="notes" { "Notes" }
                        input
                            type="text"
                            id="notes"
                            name="notes"
                            placeholder="Stats, requirements, etc.";
                    }
                }
                button type="submit" class="primary" { "Add College" }
            }
        }
    }
}
