use serde::Deserialize;

use crate::domain::entities::flight::{FlightPage, FlightRecord};

/// Wire shape of the flights endpoint. The backend may omit or null any
/// field, so everything decodes through defaults and the conversion into
/// domain types fills in empty strings.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct FlightsResponse {
    #[serde(default)]
    pub pagination: PaginationInfo,
    #[serde(default)]
    pub data: Vec<FlightDatum>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct PaginationInfo {
    #[serde(default)]
    pub total: i64,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct FlightDatum {
    #[serde(default)]
    pub flight_status: Option<String>,
    #[serde(default)]
    pub departure: EndpointInfo,
    #[serde(default)]
    pub arrival: EndpointInfo,
    #[serde(default)]
    pub flight: FlightIdent,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct EndpointInfo {
    #[serde(default)]
    pub airport: Option<String>,
    #[serde(default)]
    pub estimated: Option<String>,
    #[serde(default)]
    pub delay: Option<i64>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct FlightIdent {
    #[serde(default)]
    pub number: Option<String>,
}

impl FlightsResponse {
    pub fn into_page(self) -> FlightPage {
        FlightPage {
            total: self.pagination.total,
            records: self.data.into_iter().map(FlightRecord::from).collect(),
        }
    }
}

impl From<FlightDatum> for FlightRecord {
    fn from(datum: FlightDatum) -> Self {
        FlightRecord {
            flight_number: datum.flight.number.unwrap_or_default(),
            departure_airport: datum.departure.airport.unwrap_or_default(),
            departure_estimated: datum.departure.estimated.unwrap_or_default(),
            departure_delay: datum.departure.delay,
            arrival_airport: datum.arrival.airport.unwrap_or_default(),
            status: datum.flight_status.unwrap_or_default(),
        }
    }
}
