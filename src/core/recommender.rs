use std::sync::Arc;

use geo::Point;

use crate::core::{
    distance::is_valid_coordinate,
    location::{keyword_matches_address, SynonymTable},
    occupancy::preference_matches,
    price::filter_and_rank,
    scoring::geo_score_with_distance,
};
use crate::error::RecommendError;
use crate::models::{Listing, OccupancyPreference, RecommendationDefaults, ScoredListing};

/// Orchestrates the pure recommendation components for each endpoint
///
/// Holds only read-only state (defaults and the shared synonym table), so it
/// is cheap to clone into every worker.
#[derive(Debug, Clone)]
pub struct Recommender {
    defaults: RecommendationDefaults,
    synonyms: Arc<SynonymTable>,
}

impl Recommender {
    pub fn new(defaults: RecommendationDefaults, synonyms: Arc<SynonymTable>) -> Self {
        Self { defaults, synonyms }
    }

    pub fn with_defaults() -> Self {
        Self::new(RecommendationDefaults::default(), Arc::new(SynonymTable::default()))
    }

    /// Cap a requested result count, falling back to `fallback`
    fn effective_limit(&self, requested: Option<usize>, fallback: usize) -> usize {
        requested.unwrap_or(fallback).min(self.defaults.max_top_n)
    }

    /// Cheapest listings inside the widened price band
    ///
    /// Missing bounds default to `0` and the configured maximum price.
    pub fn recommend_by_price(
        &self,
        listings: &[Listing],
        min_price: Option<f64>,
        max_price: Option<f64>,
        top_n: Option<usize>,
    ) -> Vec<Listing> {
        let min_price = min_price.unwrap_or(0.0);
        let max_price = max_price.unwrap_or(self.defaults.max_price);
        let top_n = self.effective_limit(top_n, self.defaults.top_n);

        let ranked = filter_and_rank(listings, min_price, max_price, top_n);

        tracing::debug!(
            "Price band [{}, {}] kept {} of {} listings",
            min_price,
            max_price,
            ranked.len(),
            listings.len()
        );

        ranked
    }

    /// Listings whose address matches the keyword, each with the constant
    /// location score
    ///
    /// The keyword must already be validated as non-empty by the caller.
    pub fn search_location(&self, listings: &[Listing], keyword: &str) -> Vec<ScoredListing> {
        listings
            .iter()
            .filter(|listing| keyword_matches_address(keyword, &listing.address, &self.synonyms))
            .map(|listing| ScoredListing {
                listing: listing.clone(),
                score: self.defaults.location_match_score,
                distance_km: None,
            })
            .collect()
    }

    /// Listings whose occupancy label satisfies the requested category
    pub fn recommend_by_occupancy(&self, listings: &[Listing], requested: &str) -> Vec<Listing> {
        let preference = OccupancyPreference::parse(requested);

        listings
            .iter()
            .filter(|listing| preference_matches(preference, listing.occupancy_label()))
            .cloned()
            .collect()
    }

    /// Listings ranked by proximity plus popularity
    ///
    /// Listings without usable coordinates are skipped; only an invalid user
    /// point is an error. Results are sorted by score (descending) and then
    /// by distance (ascending).
    pub fn recommend_nearby(
        &self,
        listings: &[Listing],
        user: Point<f64>,
        limit: Option<usize>,
    ) -> Result<Vec<ScoredListing>, RecommendError> {
        if !is_valid_coordinate(user.y(), user.x()) {
            return Err(RecommendError::validation(format!(
                "Invalid user coordinates ({}, {})",
                user.y(),
                user.x()
            )));
        }

        let limit = self.effective_limit(limit, self.defaults.nearby_limit);

        let mut scored = listings
            .iter()
            .filter(|listing| {
                listing
                    .position()
                    .is_some_and(|point| is_valid_coordinate(point.y(), point.x()))
            })
            .map(|listing| {
                let (score, distance_km) = geo_score_with_distance(listing, user.y(), user.x())?;
                Ok(ScoredListing {
                    listing: listing.clone(),
                    score,
                    distance_km: Some(distance_km),
                })
            })
            .collect::<Result<Vec<_>, RecommendError>>()?;

        scored.sort_by(|a, b| {
            b.score
                .total_cmp(&a.score)
                .then_with(|| {
                    let a_km = a.distance_km.unwrap_or(f64::MAX);
                    let b_km = b.distance_km.unwrap_or(f64::MAX);
                    a_km.total_cmp(&b_km)
                })
        });

        scored.truncate(limit);

        Ok(scored)
    }
}

impl Default for Recommender {
    fn default() -> Self {
        Self::with_defaults()
    }
}
