// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Listing, RoomDetails, ScoredListing, OccupancyPreference, RecommendationDefaults, DEFAULT_POPULARITY, PLACEHOLDER_IMAGE_URL};
pub use requests::{PriceRecommendRequest, LocationSearchRequest, OccupancyRecommendRequest, NearbyRecommendRequest};
pub use responses::{PriceRecommendResponse, RecommendationsResponse, HealthResponse, ErrorResponse};
