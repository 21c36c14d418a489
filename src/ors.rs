//! OpenRouteService HTTP adapter for road distance matrices.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone)]
pub struct OrsConfig {
    pub base_url: String,
    pub api_key: String,
    pub timeout_secs: u64,
}

impl OrsConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: "https://api.openrouteservice.org/v2/matrix/driving-car".to_string(),
            api_key: api_key.into(),
            timeout_secs: 10,
        }
    }
}

#[derive(Debug)]
pub enum OrsError {
    Http(reqwest::Error),
    MissingDistances,
    Shape { expected: usize, rows: usize },
}

impl From<reqwest::Error> for OrsError {
    fn from(err: reqwest::Error) -> Self {
        OrsError::Http(err)
    }
}

#[derive(Debug, Clone)]
pub struct OrsClient {
    config: OrsConfig,
    client: reqwest::blocking::Client,
}

impl OrsClient {
    pub fn new(config: OrsConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }

    /// Requests a distance matrix for the given (lat, lng) points.
    ///
    /// One request, no retry. Distances come back in kilometers, aligned to
    /// the input order. Any transport error, non-success status, or matrix
    /// shape mismatch is an `OrsError`.
    pub fn try_matrix(&self, locations: &[(f64, f64)]) -> Result<Vec<Vec<f64>>, OrsError> {
        // ORS expects [lng, lat] order.
        let body = OrsMatrixRequest {
            locations: locations.iter().map(|&(lat, lng)| [lng, lat]).collect(),
            metrics: vec!["distance".to_string()],
            units: "km".to_string(),
        };

        let response = self
            .client
            .post(&self.config.base_url)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .json(&body)
            .send()?
            .error_for_status()?
            .json::<OrsMatrixResponse>()?;

        let matrix = response.distances.ok_or(OrsError::MissingDistances)?;
        if matrix.len() != locations.len()
            || matrix.iter().any(|row| row.len() != locations.len())
        {
            return Err(OrsError::Shape {
                expected: locations.len(),
                rows: matrix.len(),
            });
        }

        Ok(matrix)
    }
}

#[derive(Debug, Serialize)]
struct OrsMatrixRequest {
    locations: Vec<[f64; 2]>,
    metrics: Vec<String>,
    units: String,
}

#[derive(Debug, Deserialize)]
struct OrsMatrixResponse {
    distances: Option<Vec<Vec<f64>>>,
}
