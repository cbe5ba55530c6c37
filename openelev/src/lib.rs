//! Open-Elevation lookup client.
//!
//! Batches a list of coordinates into a single `POST` against an
//! [Open-Elevation](https://open-elevation.com) compatible endpoint
//! and returns the elevations in request order.
//!
//! # References
//!
//! 1. [API docs](https://github.com/Jorl17/open-elevation/blob/master/docs/api.md)

mod error;

pub use crate::error::OpenElevError;
use geo::geometry::Coord;
use log::debug;
use reqwest::{blocking, header, Url};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Base floating point type used for coordinates and elevations.
pub type C = f64;

/// Public Open-Elevation lookup endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.open-elevation.com/api/v1/lookup";

/// The public service can take minutes to answer large batches.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10_000);

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: C,
    pub longitude: C,
}

impl From<Coord<C>> for Location {
    fn from(Coord { x, y }: Coord<C>) -> Self {
        Self {
            latitude: y,
            longitude: x,
        }
    }
}

#[derive(Debug, Serialize)]
struct LookupRequest {
    locations: Vec<Location>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LookupResult {
    pub elevation: C,
    pub latitude: C,
    pub longitude: C,
}

#[derive(Debug, Deserialize)]
struct LookupResponse {
    results: Vec<LookupResult>,
}

pub struct Client {
    /// Lookup URL requests are posted to.
    endpoint: Url,

    http: blocking::Client,
}

impl Client {
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self, OpenElevError> {
        let endpoint =
            Url::parse(endpoint).map_err(|_| OpenElevError::Endpoint(endpoint.to_owned()))?;
        let http = blocking::Client::builder().timeout(timeout).build()?;
        Ok(Self { endpoint, http })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Returns the full lookup result for each coordinate, in the
    /// order given.
    pub fn lookup(&self, coords: &[Coord<C>]) -> Result<Vec<LookupResult>, OpenElevError> {
        if coords.is_empty() {
            return Ok(Vec::new());
        }

        let request = LookupRequest {
            locations: coords.iter().copied().map(Location::from).collect(),
        };

        let now = std::time::Instant::now();
        let response = self
            .http
            .post(self.endpoint.clone())
            .header(header::CONTENT_TYPE, "application/json")
            .json(&request)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(OpenElevError::Status(status));
        }

        // Decode ourselves so a missing `results` field is reported
        // as a malformed response rather than a transport failure.
        let body = response.text()?;
        let LookupResponse { results } = serde_json::from_str(&body)?;

        debug!(
            "lookup; endpoint: {}, points: {}, exec: {:?}",
            self.endpoint,
            coords.len(),
            now.elapsed()
        );

        if results.len() == coords.len() {
            Ok(results)
        } else {
            Err(OpenElevError::ResultCount {
                expected: coords.len(),
                got: results.len(),
            })
        }
    }

    /// Returns only the elevation (meters) of each coordinate.
    pub fn elevations(&self, coords: &[Coord<C>]) -> Result<Vec<C>, OpenElevError> {
        Ok(self
            .lookup(coords)?
            .into_iter()
            .map(|LookupResult { elevation, .. }| elevation)
            .collect())
    }
}
