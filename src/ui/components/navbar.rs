use dioxus::prelude::*;

use crate::FLIGHT_DATE;

#[component]
pub fn Navbar() -> Element {
    rsx! {
        nav {
            style: "display: flex; justify-content: space-between; align-items: center; padding: 12px 16px; background: #f2f2f2; border-bottom: 1px solid #bbb;",
            span { style: "font-size: 18px; font-weight: 700;", "Flightboard" }
            span { style: "color: #555;", "Departures for {FLIGHT_DATE}" }
        }
    }
}
