use crate::models::OccupancyPreference;

/// Check whether a listing's occupancy label satisfies the requested category
///
/// Rules, first applicable wins:
/// - `male` matches exactly `male only`
/// - `female` matches exactly `female only`
/// - `mixed` matches any label containing `mixed`
/// - `all` matches everything
/// - anything else matches nothing
pub fn occupancy_matches(requested: &str, listing_type: &str) -> bool {
    preference_matches(OccupancyPreference::parse(requested), listing_type)
}

/// Same as [`occupancy_matches`] with the request already parsed
#[inline]
pub fn preference_matches(preference: OccupancyPreference, listing_type: &str) -> bool {
    let listing_type = listing_type.trim().to_lowercase();

    match preference {
        OccupancyPreference::Male => listing_type == "male only",
        OccupancyPreference::Female => listing_type == "female only",
        OccupancyPreference::Mixed => listing_type.contains("mixed"),
        OccupancyPreference::All => true,
        OccupancyPreference::Unknown => false,
    }
}
