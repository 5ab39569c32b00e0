use std::sync::Arc;

use dioxus::prelude::*;

use crate::domain::entities::page::Pagination;
use crate::infra::api::client::FlightsClient;
use crate::platform::desktop::blocking::run_blocking;
use crate::ui::format::{delay_cell, estimated_cell, route_cell};
use crate::ui::state::table_state::TableState;
use crate::usecase::services::flight_service::FlightService;
use crate::{FLIGHT_DATE, PAGE_SIZE};

const HEADER_CELL_STYLE: &str =
    "border: 1px solid #bbb; padding: 6px; background: #f2f2f2; text-align: left;";
const BODY_CELL_STYLE: &str = "border: 1px solid #bbb; padding: 6px; white-space: nowrap;";
const PAGER_BUTTON_STYLE: &str =
    "padding: 4px 10px; border: 1px solid #bbb; background: #fff; border-radius: 6px;";
const PAGER_BUTTON_SELECTED_STYLE: &str =
    "padding: 4px 10px; border: 1px solid #4c6ef5; background: #eef4ff; border-radius: 6px;";

/// Paginated table of one day's flights. Owns the pager cursor; every
/// transition fetches that page and replaces the rows wholesale.
#[component]
pub fn FlightsTable() -> Element {
    let TableState {
        mut records,
        mut total,
        mut pagination,
        mut busy,
        mut status,
    } = TableState::new();

    let service = use_hook(|| Arc::new(FlightService::new(Arc::new(FlightsClient::from_env()))));

    let service_for_load = service.clone();
    let load_page = move |next: Pagination| {
        *busy.write() = true;

        let request = next.request(FLIGHT_DATE);
        match run_blocking(|| service_for_load.fetch_page(&request)) {
            Ok(page) => {
                // The backend's total may have moved since the last fetch;
                // re-clamp so the cursor never points past the last page.
                let mut applied = next;
                applied.jump_to(next.page_index, page.total);
                *records.write() = page.records;
                *total.write() = page.total;
                *pagination.write() = applied;
                *status.write() = String::new();
            }
            Err(err) => {
                *records.write() = Vec::new();
                *total.write() = 0;
                *pagination.write() = Pagination::new(next.page_size);
                *status.write() = format!("Failed to load flights: {err}");
            }
        }

        *busy.write() = false;
    };

    let mut load_for_init = load_page.clone();
    use_effect(move || {
        load_for_init(Pagination::new(PAGE_SIZE));
    });

    let mut load_for_previous = load_page.clone();
    let mut load_for_next = load_page.clone();

    let page_rows = records();
    let current = pagination();
    let current_total = total();
    let page_count = current.page_count(current_total);
    let can_previous = current.can_previous();
    let can_next = current.can_next(current_total);
    let current_status = status();

    rsx! {
        section {
            style: "width: 100%;",
            table {
                style: "border-collapse: collapse; width: 100%; border: 1px solid #bbb; background: #fff;",
                thead {
                    tr {
                        th { style: "{HEADER_CELL_STYLE}", "Flight #" }
                        th { style: "{HEADER_CELL_STYLE}", "Route" }
                        th { style: "{HEADER_CELL_STYLE}", "Estimated Departure Time" }
                        th { style: "{HEADER_CELL_STYLE}", "Delay" }
                        th { style: "{HEADER_CELL_STYLE}", "Flight Status" }
                    }
                }
                tbody {
                    if page_rows.is_empty() {
                        tr {
                            td {
                                style: "{BODY_CELL_STYLE}",
                                colspan: "5",
                                "No flights for this date"
                            }
                        }
                    } else {
                        for record in page_rows {
                            tr {
                                td { style: "{BODY_CELL_STYLE}", "{record.flight_number}" }
                                td { style: "{BODY_CELL_STYLE}", "{route_cell(&record)}" }
                                td { style: "{BODY_CELL_STYLE}", "{estimated_cell(&record.departure_estimated)}" }
                                td { style: "{BODY_CELL_STYLE}", "{delay_cell(record.departure_delay)}" }
                                td { style: "{BODY_CELL_STYLE}", "{record.status}" }
                            }
                        }
                    }
                }
            }

            nav {
                style: "display: flex; gap: 6px; align-items: center; flex-wrap: wrap; padding: 8px 0;",
                span {
                    style: "margin-right: 12px; color: #555;",
                    "Page {current.page_index + 1} of {page_count}"
                }

                button {
                    style: "{PAGER_BUTTON_STYLE}",
                    disabled: busy() || !can_previous,
                    onclick: move |_| {
                        if busy() {
                            return;
                        }
                        let mut next = pagination();
                        if !next.can_previous() {
                            return;
                        }
                        next.previous();
                        load_for_previous(next);
                    },
                    "Previous"
                }

                for index in 0..page_count {
                    button {
                        style: if index == current.page_index {
                            "{PAGER_BUTTON_SELECTED_STYLE}"
                        } else {
                            "{PAGER_BUTTON_STYLE}"
                        },
                        disabled: busy(),
                        onclick: {
                            let mut load = load_page.clone();
                            move |_| {
                                if busy() {
                                    return;
                                }
                                let mut next = pagination();
                                next.jump_to(index, total());
                                if next == pagination() {
                                    return;
                                }
                                load(next);
                            }
                        },
                        "{index + 1}"
                    }
                }

                button {
                    style: "{PAGER_BUTTON_STYLE}",
                    disabled: busy() || !can_next,
                    onclick: move |_| {
                        if busy() {
                            return;
                        }
                        let current_total = total();
                        let mut next = pagination();
                        if !next.can_next(current_total) {
                            return;
                        }
                        next.next(current_total);
                        load_for_next(next);
                    },
                    "Next"
                }

                if !current_status.is_empty() {
                    span { style: "color: #d24;", " {current_status}" }
                }
            }
        }
    }
}
