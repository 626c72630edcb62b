//! Flight and hotel search against third-party booking APIs.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use jiff::civil::Date;
use log::debug;
use reqwest::{header::CONTENT_TYPE, Client, RequestBuilder, Url};
use serde::Deserialize;
use serde_json::Value;
use tokio::sync::Mutex;

use crate::error::{CollaboratorResultExt, PlannerError, Result};

const API_KEY_HEADER: &str = "api-key";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
/// Tokens are refreshed this long before the issuer says they expire.
const TOKEN_EXPIRY_MARGIN: Duration = Duration::from_secs(30);

/// A one-way flight search.
#[derive(Debug, Clone)]
pub struct FlightQuery {
    pub origin: String,
    pub destination: String,
    pub departure: Date,
}

/// A hotel availability search.
#[derive(Debug, Clone)]
pub struct HotelQuery {
    pub location: String,
    pub check_in: Date,
    pub check_out: Date,
}

/// Searches for bookable flights and hotels.
///
/// Payloads are returned untouched; the planner never interprets them.
#[async_trait]
pub trait BookingSearch: Send + Sync {
    async fn search_flights(&self, query: &FlightQuery) -> Result<Value>;
    async fn search_hotels(&self, query: &HotelQuery) -> Result<Value>;
}

/// OAuth2 client-credentials settings for APIs that want a bearer token.
#[derive(Debug, Clone)]
pub struct TokenConfig {
    pub token_url: String,
    pub client_id: String,
    pub client_secret: String,
}

/// Endpoints and credentials for [`HttpBookingSearch`].
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Base URL; origin, destination and date are appended as path segments
    pub flights_url: String,
    /// Search URL; location and dates are appended as query parameters
    pub hotels_url: String,
    /// Sent on every request in the `api-key` header
    pub api_key: String,
    /// When set, a bearer token is fetched and attached as well
    pub token: Option<TokenConfig>,
    pub timeout: Duration,
}

impl SearchConfig {
    pub fn new(
        flights_url: impl Into<String>,
        hotels_url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            flights_url: flights_url.into(),
            hotels_url: hotels_url.into(),
            api_key: api_key.into(),
            token: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_token(mut self, token: TokenConfig) -> Self {
        self.token = Some(token);
        self
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    expires_in: Option<u64>,
}

struct CachedToken {
    value: String,
    expires_at: Option<Instant>,
}

impl CachedToken {
    fn is_fresh(&self) -> bool {
        self.expires_at.is_none_or(|at| Instant::now() < at)
    }
}

/// [`BookingSearch`] over plain HTTP GET requests.
pub struct HttpBookingSearch {
    client: Client,
    config: SearchConfig,
    token: Mutex<Option<CachedToken>>,
}

impl HttpBookingSearch {
    pub fn new(config: SearchConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .collaborator_context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            config,
            token: Mutex::new(None),
        })
    }

    fn flights_url(&self, query: &FlightQuery) -> Result<Url> {
        let mut url = parse_url("flights_url", &self.config.flights_url)?;
        let departure = query.departure.to_string();
        url.path_segments_mut()
            .map_err(|()| {
                PlannerError::Configuration {
                    message: format!("flights_url cannot take a path: {}", self.config.flights_url),
                }
            })?
            .pop_if_empty()
            .extend([query.origin.as_str(), query.destination.as_str(), departure.as_str()]);
        Ok(url)
    }

    fn hotels_url(&self, query: &HotelQuery) -> Result<Url> {
        let mut url = parse_url("hotels_url", &self.config.hotels_url)?;
        url.query_pairs_mut()
            .append_pair("location", &query.location)
            .append_pair("check_in", &query.check_in.to_string())
            .append_pair("check_out", &query.check_out.to_string());
        Ok(url)
    }

    /// Returns a valid bearer token, fetching a new one when none is cached
    /// or the cached one is about to expire.
    async fn bearer_token(&self, config: &TokenConfig) -> Result<String> {
        let mut cached = self.token.lock().await;
        if let Some(token) = cached.as_ref().filter(|t| t.is_fresh()) {
            return Ok(token.value.clone());
        }

        debug!("Requesting booking search token from {}", config.token_url);
        let response: TokenResponse = self
            .client
            .post(&config.token_url)
            .basic_auth(&config.client_id, Some(&config.client_secret))
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body("grant_type=client_credentials")
            .send()
            .await
            .collaborator_context("Token request failed")?
            .error_for_status()
            .collaborator_context("Token endpoint rejected the credentials")?
            .json()
            .await
            .collaborator_context("Malformed token response")?;

        let expires_at = response.expires_in.map(|secs| {
            Instant::now() + Duration::from_secs(secs).saturating_sub(TOKEN_EXPIRY_MARGIN)
        });
        let value = response.access_token;
        *cached = Some(CachedToken {
            value: value.clone(),
            expires_at,
        });
        Ok(value)
    }

    async fn authorize(&self, request: RequestBuilder) -> Result<RequestBuilder> {
        let request = request.header(API_KEY_HEADER, &self.config.api_key);
        match &self.config.token {
            Some(token) => Ok(request.bearer_auth(self.bearer_token(token).await?)),
            None => Ok(request),
        }
    }

    async fn get_json(&self, url: Url) -> Result<Value> {
        debug!("Booking search GET {url}");
        self.authorize(self.client.get(url))
            .await?
            .send()
            .await
            .collaborator_context("Booking search request failed")?
            .error_for_status()
            .collaborator_context("Booking search returned an error")?
            .json()
            .await
            .collaborator_context("Booking search returned malformed JSON")
    }
}

#[async_trait]
impl BookingSearch for HttpBookingSearch {
    async fn search_flights(&self, query: &FlightQuery) -> Result<Value> {
        let url = self.flights_url(query)?;
        self.get_json(url).await
    }

    async fn search_hotels(&self, query: &HotelQuery) -> Result<Value> {
        let url = self.hotels_url(query)?;
        self.get_json(url).await
    }
}

fn parse_url(field: &str, value: &str) -> Result<Url> {
    Url::parse(value).map_err(|e| PlannerError::Configuration {
        message: format!("Invalid {field} '{value}': {e}"),
    })
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    fn search() -> HttpBookingSearch {
        HttpBookingSearch::new(SearchConfig::new(
            "https://flights.example.com/browseroutes/",
            "https://hotels.example.com/v1/search",
            "secret",
        ))
        .unwrap()
    }

    #[test]
    fn test_flights_url_appends_path_segments() {
        let url = search()
            .flights_url(&FlightQuery {
                origin: "SFO".to_string(),
                destination: "CDG".to_string(),
                departure: date(2024, 6, 1),
            })
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://flights.example.com/browseroutes/SFO/CDG/2024-06-01"
        );
    }

    #[test]
    fn test_hotels_url_encodes_location() {
        let url = search()
            .hotels_url(&HotelQuery {
                location: "New York".to_string(),
                check_in: date(2024, 6, 1),
                check_out: date(2024, 6, 3),
            })
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://hotels.example.com/v1/search?location=New+York&check_in=2024-06-01&check_out=2024-06-03"
        );
    }

    #[test]
    fn test_invalid_base_url_is_configuration_error() {
        let search = HttpBookingSearch::new(SearchConfig::new("not a url", "", "k")).unwrap();
        let err = search
            .flights_url(&FlightQuery {
                origin: "A".to_string(),
                destination: "B".to_string(),
                departure: date(2024, 1, 1),
            })
            .unwrap_err();
        assert!(matches!(err, PlannerError::Configuration { .. }));
    }
}
