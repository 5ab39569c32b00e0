use dioxus::prelude::*;

#[component]
pub fn FlightsBoard() -> Element {
    rsx! {
        section {
            style: "border: 1px solid #bbb; border-radius: 6px; padding: 12px 16px; background: #fff;",
            h3 { style: "margin: 0 0 8px;", "Flights" }
            p {
                style: "margin: 0; color: #555;",
                "Scheduled departures with their estimated times, current "
                "delays and live status, as reported by the carrier."
            }
        }
    }
}
