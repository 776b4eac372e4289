use std::time::Duration;

use serde::Deserialize;

use super::enrich::{GeocodeError, Geocoder};
use super::Coordinates;
use crate::config::GeocoderConfig;

/// Blocking client for the Nominatim `/search` endpoint.
pub struct NominatimClient {
    base_url: String,
    user_agent: String,
    client: reqwest::blocking::Client,
    timeout_secs: u64,
}

impl NominatimClient {
    pub fn new(config: &GeocoderConfig) -> Result<Self, GeocodeError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| GeocodeError::HttpClient(e.to_string()))?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            user_agent: config.user_agent.clone(),
            client,
            timeout_secs: config.timeout_secs,
        })
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

/// One entry of a Nominatim search result. Coordinates arrive as strings.
#[derive(Deserialize)]
struct SearchHit {
    lat: String,
    lon: String,
}

impl Geocoder for NominatimClient {
    fn geocode(&self, address: &str) -> Result<Option<Coordinates>, GeocodeError> {
        let url = format!("{}/search", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[("q", address), ("format", "json"), ("limit", "1")])
            .send()
            .map_err(|e| {
                if e.is_connect() {
                    GeocodeError::Connection(self.base_url.clone())
                } else if e.is_timeout() {
                    GeocodeError::Timeout(self.timeout_secs)
                } else {
                    GeocodeError::HttpClient(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(GeocodeError::Status {
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .map_err(|e| GeocodeError::ResponseParsing(e.to_string()))?;
        parse_search_response(&body)
    }
}

/// Parse a `/search?format=json` body into the first hit's coordinates.
pub(crate) fn parse_search_response(body: &str) -> Result<Option<Coordinates>, GeocodeError> {
    let hits: Vec<SearchHit> =
        serde_json::from_str(body).map_err(|e| GeocodeError::ResponseParsing(e.to_string()))?;

    let Some(first) = hits.into_iter().next() else {
        return Ok(None);
    };

    let lat = first
        .lat
        .parse::<f64>()
        .map_err(|e| GeocodeError::ResponseParsing(format!("lat: {e}")))?;
    let lng = first
        .lon
        .parse::<f64>()
        .map_err(|e| GeocodeError::ResponseParsing(format!("lon: {e}")))?;

    Ok(Some(Coordinates { lat, lng }))
}
