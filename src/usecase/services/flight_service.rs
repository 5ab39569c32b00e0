use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::domain::entities::flight::FlightPage;
use crate::domain::entities::page::PageRequest;
use crate::usecase::ports::gateway::{FlightsGateway, GatewayError};

/// Gateway wrapper with a per-request page cache. A page already seen for
/// a given (date, index, size) is served without touching the network;
/// failed fetches are never cached.
pub struct FlightService {
    gateway: Arc<dyn FlightsGateway>,
    cache: Mutex<HashMap<PageRequest, FlightPage>>,
}

impl FlightService {
    pub fn new(gateway: Arc<dyn FlightsGateway>) -> Self {
        Self {
            gateway,
            cache: Mutex::new(HashMap::new()),
        }
    }

    pub fn fetch_page(&self, request: &PageRequest) -> Result<FlightPage, GatewayError> {
        if let Ok(cache) = self.cache.lock() {
            if let Some(page) = cache.get(request) {
                tracing::debug!(page_index = request.page_index, "flight page cache hit");
                return Ok(page.clone());
            }
        }

        let page = self.gateway.fetch_page(request)?;

        if let Ok(mut cache) = self.cache.lock() {
            cache.insert(request.clone(), page.clone());
        }

        Ok(page)
    }
}
