use dioxus::prelude::*;

#[component]
pub fn Disclaimer() -> Element {
    rsx! {
        section {
            style: "padding: 16px 0; color: #888; font-size: 13px;",
            p {
                style: "margin: 0;",
                "Flight information is provided for reference only. Departure "
                "times, delays and statuses may change without notice; always "
                "confirm with your airline before travelling."
            }
        }
    }
}
