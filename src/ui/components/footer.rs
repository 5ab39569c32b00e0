use dioxus::prelude::*;

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer {
            style: "padding: 12px 0; border-top: 1px solid #bbb; color: #888; font-size: 13px; text-align: center;",
            span { "Flightboard" }
        }
    }
}
