use std::sync::Arc;

use dioxus::prelude::*;

use crate::domain::entities::flight::FlightRecord;
use crate::domain::entities::page::Pagination;
use crate::infra::api::client::FlightsClient;
use crate::platform::desktop::blocking::run_blocking;
use crate::ui::format::{delay_cell, estimated_cell, route_cell};
use crate::usecase::services::flight_service::FlightService;
use crate::{FLIGHT_DATE, PAGE_SIZE};

/// Compact card list of the day's first page of flights. Fetches on its
/// own; shares nothing with the table. A failed fetch renders no cards.
#[component]
pub fn FlightsList() -> Element {
    let mut entries = use_signal(Vec::<FlightRecord>::new);
    let service = use_hook(|| Arc::new(FlightService::new(Arc::new(FlightsClient::from_env()))));

    use_effect(move || {
        let request = Pagination::new(PAGE_SIZE).request(FLIGHT_DATE);
        match run_blocking(|| service.fetch_page(&request)) {
            Ok(page) => {
                *entries.write() = page.records;
            }
            Err(err) => {
                tracing::warn!("flight list fetch failed: {err}");
                *entries.write() = Vec::new();
            }
        }
    });

    rsx! {
        section {
            style: "display: flex; flex-direction: column; gap: 8px; padding: 16px 0;",
            for record in entries() {
                div {
                    style: "border: 1px solid #bbb; border-radius: 6px; padding: 8px 12px; background: #fff;",
                    div {
                        style: "display: flex; justify-content: space-between; font-weight: 600;",
                        span { "Flight {record.flight_number}" }
                        span { "{record.status}" }
                    }
                    div {
                        style: "display: flex; gap: 12px; color: #555;",
                        span { "{route_cell(&record)}" }
                        span { "{estimated_cell(&record.departure_estimated)}" }
                        span { "Delay: {delay_cell(record.departure_delay)}" }
                    }
                }
            }
        }
    }
}
