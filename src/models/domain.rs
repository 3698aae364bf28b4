use geo::Point;
use serde::{Deserialize, Serialize};

/// Popularity attached to every listing until a computed metric exists.
pub const DEFAULT_POPULARITY: f64 = 7.5;

/// Image shown for listings without an uploaded main image
pub const PLACEHOLDER_IMAGE_URL: &str = "https://placehold.co/300x200?text=No+Image";

/// A dormitory or room record as handed to the recommendation core
///
/// Listings are built by the data-access layer per request and never
/// mutated by the core; every recommender returns derived copies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: i64,
    pub name: String,
    pub address: String,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub occupancy_type: Option<String>,
    #[serde(default = "default_popularity")]
    pub popularity: f64,
    #[serde(default = "default_image")]
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room: Option<RoomDetails>,
}

impl Listing {
    /// Listing with no price, coordinates or occupancy label yet
    pub fn new(id: i64, name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            address: address.into(),
            latitude: None,
            longitude: None,
            price: None,
            occupancy_type: None,
            popularity: DEFAULT_POPULARITY,
            image: default_image(),
            room: None,
        }
    }

    /// Price usable for filtering, if any
    pub fn known_price(&self) -> Option<f64> {
        self.price.filter(|p| !p.is_nan())
    }

    /// Position as a `geo::Point` (x = longitude, y = latitude)
    pub fn position(&self) -> Option<Point<f64>> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => Some(Point::new(lon, lat)),
            _ => None,
        }
    }

    /// Occupancy label, empty when the record has none
    pub fn occupancy_label(&self) -> &str {
        self.occupancy_type.as_deref().unwrap_or("")
    }
}

fn default_popularity() -> f64 { DEFAULT_POPULARITY }
fn default_image() -> String { PLACEHOLDER_IMAGE_URL.to_string() }

/// Room-level details for listings sourced from the rooms table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomDetails {
    pub room_type: Option<String>,
    pub furnishing_status: Option<String>,
    pub capacity: Option<i64>,
}

/// A listing with the score it earned for a particular request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredListing {
    #[serde(flatten)]
    pub listing: Listing,
    pub score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
}

/// Requested occupancy category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OccupancyPreference {
    Male,
    Female,
    Mixed,
    All,
    /// Anything unrecognised; matches no listing
    Unknown,
}

impl OccupancyPreference {
    /// Parse a free-text request value, ignoring case and surrounding whitespace
    pub fn parse(requested: &str) -> Self {
        match requested.trim().to_lowercase().as_str() {
            "male" => Self::Male,
            "female" => Self::Female,
            "mixed" => Self::Mixed,
            "all" => Self::All,
            _ => Self::Unknown,
        }
    }
}

/// Tunables the recommender applies on top of the pure core functions
#[derive(Debug, Clone, Copy)]
pub struct RecommendationDefaults {
    pub top_n: usize,
    pub max_top_n: usize,
    pub max_price: f64,
    pub location_match_score: f64,
    pub nearby_limit: usize,
}

impl Default for RecommendationDefaults {
    fn default() -> Self {
        Self {
            top_n: 10,
            max_top_n: 100,
            max_price: 999_999.0,
            location_match_score: 10.0,
            nearby_limit: 10,
        }
    }
}
