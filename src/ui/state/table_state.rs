use dioxus::prelude::{use_signal, Signal};

use crate::domain::entities::flight::FlightRecord;
use crate::domain::entities::page::Pagination;
use crate::PAGE_SIZE;

pub struct TableState {
    pub records: Signal<Vec<FlightRecord>>,
    pub total: Signal<i64>,
    pub pagination: Signal<Pagination>,
    pub busy: Signal<bool>,
    pub status: Signal<String>,
}

impl TableState {
    pub fn new() -> Self {
        Self {
            records: use_signal(Vec::<FlightRecord>::new),
            total: use_signal(|| 0_i64),
            pagination: use_signal(|| Pagination::new(PAGE_SIZE)),
            busy: use_signal(|| false),
            status: use_signal(String::new),
        }
    }
}
