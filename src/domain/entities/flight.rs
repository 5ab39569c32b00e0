/// One flight as displayed on the dashboard. Immutable once received;
/// owned by the current page's record list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlightRecord {
    pub flight_number: String,
    pub departure_airport: String,
    pub departure_estimated: String,
    pub departure_delay: Option<i64>,
    pub arrival_airport: String,
    pub status: String,
}

/// One retrieved batch of flights plus the backend's total record count.
/// Replaced wholesale on each fetch.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FlightPage {
    pub records: Vec<FlightRecord>,
    pub total: i64,
}
