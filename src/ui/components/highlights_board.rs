use dioxus::prelude::*;

#[component]
pub fn HighlightsBoard() -> Element {
    rsx! {
        section {
            style: "border: 1px solid #bbb; border-radius: 6px; padding: 12px 16px; background: #fff;",
            h3 { style: "margin: 0 0 8px;", "Highlights" }
            ul {
                style: "margin: 0; padding-left: 18px; color: #555;",
                li { "A dash in the delay column means the flight is on time." }
                li { "Times are shown in your local timezone." }
                li { "Use the pager below the table to browse all departures." }
            }
        }
    }
}
