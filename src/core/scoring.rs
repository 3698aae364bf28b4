use crate::core::distance::{haversine_distance, is_valid_coordinate};
use crate::error::RecommendError;
use crate::models::Listing;

/// Distance at which proximity stops adding to the score
pub const PROXIMITY_RADIUS_KM: f64 = 10.0;

/// Score a listing by proximity plus popularity
///
/// Scoring formula:
/// score = max((10 - distance_km) + popularity, 0)
///
/// Listings closer than 10 km gain, farther ones lose; the result is never
/// negative. Returns the score together with the distance it was based on.
pub fn geo_score_with_distance(
    listing: &Listing,
    user_lat: f64,
    user_lon: f64,
) -> Result<(f64, f64), RecommendError> {
    if !is_valid_coordinate(user_lat, user_lon) {
        return Err(RecommendError::validation(format!(
            "Invalid user coordinates ({}, {})",
            user_lat, user_lon
        )));
    }

    let (lat, lon) = match (listing.latitude, listing.longitude) {
        (Some(lat), Some(lon)) if is_valid_coordinate(lat, lon) => (lat, lon),
        _ => {
            return Err(RecommendError::validation(format!(
                "Listing {} has no usable coordinates",
                listing.id
            )))
        }
    };

    let distance_km = haversine_distance(user_lat, user_lon, lat, lon);
    let score = (PROXIMITY_RADIUS_KM - distance_km) + listing.popularity;

    Ok((score.max(0.0), distance_km))
}

/// Score a listing by proximity plus popularity, see [`geo_score_with_distance`]
pub fn geo_score(listing: &Listing, user_lat: f64, user_lon: f64) -> Result<f64, RecommendError> {
    geo_score_with_distance(listing, user_lat, user_lon).map(|(score, _)| score)
}
