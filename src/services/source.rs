use crate::models::Listing;
use crate::services::StoreError;

/// Supplier of listings for a single request
///
/// Implementations return freshly built listings with popularity and images
/// already attached. Handlers are generic over this trait so the HTTP layer
/// can run against any backing store.
#[allow(async_fn_in_trait)]
pub trait ListingSource {
    /// Rooms with a price that are currently available, joined with their dorm
    async fn available_rooms(&self) -> Result<Vec<Listing>, StoreError>;

    /// Dorms that have both coordinates
    async fn geolocated_dorms(&self) -> Result<Vec<Listing>, StoreError>;

    /// Whether the backing store answers queries
    async fn health_check(&self) -> bool;
}
