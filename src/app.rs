use dioxus::prelude::*;

use crate::ui::components::{
    Disclaimer, FlightsBoard, FlightsList, FlightsTable, Footer, HighlightsBoard, Navbar,
};

/// Page shell. The widgets below share no data; each fetches or renders
/// on its own.
#[component]
pub fn App() -> Element {
    rsx! {
        div {
            style: "font-family: 'Noto Sans', sans-serif; background: #fafafa; min-height: 100vh;",
            Navbar {}
            section {
                style: "max-width: 1000px; margin: 0 auto; padding: 16px; display: flex; flex-direction: column; gap: 16px;",
                section {
                    style: "display: grid; grid-template-columns: 1fr 1fr; gap: 16px;",
                    FlightsBoard {}
                    HighlightsBoard {}
                }
                section {
                    style: "width: 100%;",
                    FlightsTable {}
                    FlightsList {}
                }
                Disclaimer {}
                Footer {}
            }
        }
    }
}
