//! Address lookup for map display.

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};

use crate::error::{CollaboratorResultExt, PlannerError, Result};

pub const DEFAULT_NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org";
const USER_AGENT: &str = concat!("wayfarer/", env!("CARGO_PKG_VERSION"));

/// A resolved location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
    /// The geocoder's canonical name for the place, if it returned one
    pub display_name: Option<String>,
}

/// Resolves free-text addresses to coordinates.
#[async_trait]
pub trait Geocoder: Send + Sync {
    /// `Ok(None)` means the service found nothing; that is not an error.
    async fn geocode(&self, address: &str) -> Result<Option<Coordinates>>;
}

#[derive(Debug, Deserialize)]
struct Place {
    lat: String,
    lon: String,
    display_name: Option<String>,
}

/// [`Geocoder`] backed by an OpenStreetMap Nominatim instance.
pub struct NominatimGeocoder {
    client: Client,
    base_url: String,
}

impl NominatimGeocoder {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(10))
            .build()
            .collaborator_context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    fn search_url(&self, address: &str) -> Result<Url> {
        let base = self.base_url.trim_end_matches('/');
        let mut url = Url::parse(&format!("{base}/search")).map_err(|e| {
            PlannerError::Configuration {
                message: format!("Invalid geocoder URL '{}': {e}", self.base_url),
            }
        })?;
        url.query_pairs_mut()
            .append_pair("format", "json")
            .append_pair("limit", "1")
            .append_pair("q", address);
        Ok(url)
    }
}

#[async_trait]
impl Geocoder for NominatimGeocoder {
    async fn geocode(&self, address: &str) -> Result<Option<Coordinates>> {
        let url = self.search_url(address)?;
        debug!("Geocoding '{address}'");

        let places: Vec<Place> = self
            .client
            .get(url)
            .send()
            .await
            .collaborator_context("Geocoding request failed")?
            .error_for_status()
            .collaborator_context("Geocoder returned an error")?
            .json()
            .await
            .collaborator_context("Geocoder returned malformed JSON")?;

        let Some(place) = places.into_iter().next() else {
            return Ok(None);
        };

        let latitude = place
            .lat
            .parse::<f64>()
            .map_err(|e| PlannerError::collaborator("Geocoder returned a bad latitude", e))?;
        let longitude = place
            .lon
            .parse::<f64>()
            .map_err(|e| PlannerError::collaborator("Geocoder returned a bad longitude", e))?;

        Ok(Some(Coordinates {
            latitude,
            longitude,
            display_name: place.display_name,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_url() {
        let geocoder = NominatimGeocoder::new("https://geo.example.com/").unwrap();
        let url = geocoder.search_url("10 Downing St, London").unwrap();
        assert_eq!(
            url.as_str(),
            "https://geo.example.com/search?format=json&limit=1&q=10+Downing+St%2C+London"
        );
    }
}
