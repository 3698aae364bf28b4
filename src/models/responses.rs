use serde::{Deserialize, Serialize};
use crate::models::domain::Listing;

const STATUS_SUCCESS: &str = "success";
const STATUS_ERROR: &str = "error";

/// Response for the price recommendation endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceRecommendResponse {
    pub status: String,
    pub data: Vec<Listing>,
}

impl PriceRecommendResponse {
    pub fn success(data: Vec<Listing>) -> Self {
        Self { status: STATUS_SUCCESS.to_string(), data }
    }
}

/// Response for location, occupancy and nearby endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationsResponse<T> {
    pub status: String,
    pub recommendations: Vec<T>,
}

impl<T> RecommendationsResponse<T> {
    pub fn success(recommendations: Vec<T>) -> Self {
        Self { status: STATUS_SUCCESS.to_string(), recommendations }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Uniform error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self { status: STATUS_ERROR.to_string(), message: message.into() }
    }
}
