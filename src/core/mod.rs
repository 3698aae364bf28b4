// Core algorithm exports
pub mod distance;
pub mod location;
pub mod occupancy;
pub mod price;
pub mod recommender;
pub mod scoring;

pub use distance::{haversine_distance, is_valid_coordinate};
pub use location::{normalize, keyword_matches_address, SynonymGroup, SynonymTable};
pub use occupancy::{occupancy_matches, preference_matches};
pub use price::{filter_and_rank, within_price_band};
pub use recommender::Recommender;
pub use scoring::{geo_score, geo_score_with_distance};
