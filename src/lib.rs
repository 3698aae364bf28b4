//! DormHub Recommender - recommendation service for DormHub dormitory listings
//!
//! This library provides the recommendation core used by the DormHub web app:
//! price-band ranking, location keyword matching with synonym groups,
//! distance-plus-popularity scoring and occupancy-type filtering.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{Recommender, SynonymTable, filter_and_rank, keyword_matches_address, occupancy_matches, geo_score, haversine_distance};
pub use error::RecommendError;
pub use models::{Listing, ScoredListing, RecommendationDefaults};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work correctly
        let table = SynonymTable::default();
        assert!(keyword_matches_address("opon", "Mactan Newtown", &table));
    }
}
