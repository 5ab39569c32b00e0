use crate::domain::entities::flight::FlightPage;
use crate::domain::entities::page::PageRequest;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    Network(String),
    Decode(String),
}

impl std::fmt::Display for GatewayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GatewayError::Network(message) => write!(f, "network error: {message}"),
            GatewayError::Decode(message) => write!(f, "decode error: {message}"),
        }
    }
}

impl std::error::Error for GatewayError {}

/// Seam between the UI and the flight data backend. The table only ever
/// asks for whole pages; partial updates do not exist.
pub trait FlightsGateway: Send + Sync {
    fn fetch_page(&self, request: &PageRequest) -> Result<FlightPage, GatewayError>;
}
