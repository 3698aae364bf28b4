use actix_web::{web, HttpResponse, Responder};
use geo::Point;
use validator::Validate;

use crate::core::{normalize, Recommender};
use crate::error::RecommendError;
use crate::models::{
    HealthResponse, LocationSearchRequest, NearbyRecommendRequest, OccupancyRecommendRequest,
    PriceRecommendRequest, PriceRecommendResponse, RecommendationsResponse,
};
use crate::services::ListingSource;
use std::sync::Arc;

/// Application state shared across all handlers
pub struct AppState<S> {
    pub store: Arc<S>,
    pub recommender: Recommender,
}

/// Configure all recommendation routes
pub fn configure<S: ListingSource + 'static>(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check::<S>))
        .route("/api/recommend", web::post().to(recommend_by_price::<S>))
        .route("/api/gender-recommend", web::post().to(recommend_by_occupancy::<S>))
        .route("/api/nearby-recommend", web::post().to(recommend_nearby::<S>))
        .route("/search-locations", web::post().to(search_locations::<S>));
}

/// Health check endpoint
async fn health_check<S: ListingSource + 'static>(state: web::Data<AppState<S>>) -> impl Responder {
    let status = if state.store.health_check().await { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Price recommendation endpoint
///
/// POST /api/recommend
///
/// Request body:
/// ```json
/// {
///   "min_price": 5000,
///   "max_price": 8000,
///   "top_n": 10
/// }
/// ```
async fn recommend_by_price<S: ListingSource + 'static>(
    state: web::Data<AppState<S>>,
    req: web::Json<PriceRecommendRequest>,
) -> Result<HttpResponse, RecommendError> {
    req.validate()?;

    let rooms = state.store.available_rooms().await?;
    let data = state
        .recommender
        .recommend_by_price(&rooms, req.min_price, req.max_price, req.top_n);

    tracing::info!(
        "Price recommendation returned {} of {} rooms (min: {:?}, max: {:?})",
        data.len(),
        rooms.len(),
        req.min_price,
        req.max_price
    );

    Ok(HttpResponse::Ok().json(PriceRecommendResponse::success(data)))
}

/// Location keyword search endpoint
///
/// POST /search-locations
///
/// Request body:
/// ```json
/// { "location": "mactan" }
/// ```
async fn search_locations<S: ListingSource + 'static>(
    state: web::Data<AppState<S>>,
    req: web::Json<LocationSearchRequest>,
) -> Result<HttpResponse, RecommendError> {
    let keyword = req.location.trim().to_lowercase();

    // An empty keyword would match every address
    if keyword.is_empty() {
        return Err(RecommendError::validation("Missing location keyword"));
    }
    if normalize(&keyword).is_empty() {
        return Err(RecommendError::validation(
            "Location keyword must contain letters or digits",
        ));
    }

    let dorms = state.store.geolocated_dorms().await?;
    let recommendations = state.recommender.search_location(&dorms, &keyword);

    tracing::info!(
        "Location search {:?} matched {} of {} dorms",
        keyword,
        recommendations.len(),
        dorms.len()
    );

    Ok(HttpResponse::Ok().json(RecommendationsResponse::success(recommendations)))
}

/// Occupancy-type recommendation endpoint
///
/// POST /api/gender-recommend
///
/// Request body:
/// ```json
/// { "occupancy_type": "male|female|mixed|all" }
/// ```
async fn recommend_by_occupancy<S: ListingSource + 'static>(
    state: web::Data<AppState<S>>,
    req: web::Json<OccupancyRecommendRequest>,
) -> Result<HttpResponse, RecommendError> {
    let dorms = state.store.geolocated_dorms().await?;
    let recommendations = state
        .recommender
        .recommend_by_occupancy(&dorms, &req.occupancy_type);

    tracing::info!(
        "Occupancy {:?} matched {} of {} dorms",
        req.occupancy_type,
        recommendations.len(),
        dorms.len()
    );

    Ok(HttpResponse::Ok().json(RecommendationsResponse::success(recommendations)))
}

/// Nearby recommendation endpoint
///
/// POST /api/nearby-recommend
///
/// Request body:
/// ```json
/// {
///   "latitude": 10.3103,
///   "longitude": 123.9494,
///   "limit": 10
/// }
/// ```
async fn recommend_nearby<S: ListingSource + 'static>(
    state: web::Data<AppState<S>>,
    req: web::Json<NearbyRecommendRequest>,
) -> Result<HttpResponse, RecommendError> {
    req.validate()?;

    let dorms = state.store.geolocated_dorms().await?;
    let user = Point::new(req.longitude, req.latitude);
    let recommendations = state.recommender.recommend_nearby(&dorms, user, req.limit)?;

    tracing::info!(
        "Nearby recommendation for ({}, {}) returned {} dorms",
        req.latitude,
        req.longitude,
        recommendations.len()
    );

    Ok(HttpResponse::Ok().json(RecommendationsResponse::success(recommendations)))
}
