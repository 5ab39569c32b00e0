use crate::domain::entities::flight::FlightPage;
use crate::domain::entities::page::PageRequest;
use crate::infra::api::model::FlightsResponse;
use crate::usecase::ports::gateway::{FlightsGateway, GatewayError};

const DEFAULT_BASE_URL: &str = "https://api.aviationstack.com/v1";

/// Blocking HTTP client for the flights endpoint.
pub struct FlightsClient {
    base_url: String,
    access_key: Option<String>,
    client: reqwest::blocking::Client,
}

impl FlightsClient {
    pub fn with_config(base_url: String, access_key: Option<String>) -> Self {
        Self {
            base_url,
            access_key,
            client: reqwest::blocking::Client::new(),
        }
    }

    /// Default configuration with `FLIGHTBOARD_API_URL` and
    /// `FLIGHTBOARD_ACCESS_KEY` overrides.
    pub fn from_env() -> Self {
        let base_url = std::env::var("FLIGHTBOARD_API_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let access_key = std::env::var("FLIGHTBOARD_ACCESS_KEY").ok();
        Self::with_config(base_url, access_key)
    }

    /// Query pairs for one page fetch. The endpoint paginates by
    /// offset/limit, so the page index is converted here.
    pub(crate) fn page_query(&self, request: &PageRequest) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(key) = &self.access_key {
            params.push(("access_key", key.clone()));
        }
        params.push(("flight_date", request.flight_date.clone()));
        params.push(("offset", request.offset().to_string()));
        params.push(("limit", request.page_size.to_string()));
        params
    }
}

impl FlightsGateway for FlightsClient {
    fn fetch_page(&self, request: &PageRequest) -> Result<FlightPage, GatewayError> {
        let url = format!("{}/flights", self.base_url);
        tracing::debug!(
            page_index = request.page_index,
            page_size = request.page_size,
            "requesting flight page"
        );

        let response = self
            .client
            .get(&url)
            .query(&self.page_query(request))
            .send()
            .map_err(|err| GatewayError::Network(err.to_string()))?;

        let decoded: FlightsResponse = response
            .json()
            .map_err(|err| GatewayError::Decode(err.to_string()))?;

        Ok(decoded.into_page())
    }
}
