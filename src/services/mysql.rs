use sqlx::mysql::{MySqlPool, MySqlPoolOptions};
use std::future::Future;
use std::time::Duration;
use thiserror::Error;

use crate::config::{DatabaseSettings, RecommendationSettings};
use crate::core::is_valid_coordinate;
use crate::models::{Listing, RoomDetails};
use crate::services::ListingSource;

/// Errors that can occur when reading listings from MySQL
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("SQLx error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("Query timed out after {0}s")]
    Timeout(u64),
}

/// Available rooms joined with their dorm
const AVAILABLE_ROOMS_QUERY: &str = r#"
    SELECT
        CAST(r.room_id AS SIGNED) AS room_id,
        d.dorm_name,
        d.address,
        CAST(d.latitude AS CHAR) AS latitude,
        CAST(d.longitude AS CHAR) AS longitude,
        CAST(r.price AS CHAR) AS price,
        d.occupancy_type,
        r.room_type,
        r.furnishing_status,
        CAST(r.capacity AS SIGNED) AS capacity
    FROM rooms r
    JOIN dorms d ON r.dormitory_id = d.dorm_id
    WHERE r.price IS NOT NULL AND LOWER(r.availability) = 'available'
"#;

/// Dorms with both coordinates, one main image each
const GEOLOCATED_DORMS_QUERY: &str = r#"
    SELECT
        CAST(d.dorm_id AS SIGNED) AS dorm_id,
        d.dorm_name,
        d.address,
        CAST(d.latitude AS CHAR) AS latitude,
        CAST(d.longitude AS CHAR) AS longitude,
        d.occupancy_type,
        MIN(i.main_image) AS main_image
    FROM dorms d
    LEFT JOIN dorm_images i ON i.dormitory_id = d.dorm_id
    WHERE d.latitude IS NOT NULL AND d.longitude IS NOT NULL
    GROUP BY d.dorm_id, d.dorm_name, d.address, d.latitude, d.longitude, d.occupancy_type
"#;

#[derive(Debug, sqlx::FromRow)]
struct RoomRow {
    room_id: i64,
    dorm_name: Option<String>,
    address: Option<String>,
    latitude: Option<String>,
    longitude: Option<String>,
    price: Option<String>,
    occupancy_type: Option<String>,
    room_type: Option<String>,
    furnishing_status: Option<String>,
    capacity: Option<i64>,
}

#[derive(Debug, sqlx::FromRow)]
struct DormRow {
    dorm_id: i64,
    dorm_name: Option<String>,
    address: Option<String>,
    latitude: Option<String>,
    longitude: Option<String>,
    occupancy_type: Option<String>,
    main_image: Option<String>,
}

/// Coerce a textual column to a number, `None` when it does not parse
fn parse_numeric(value: Option<&str>) -> Option<f64> {
    value
        .and_then(|v| v.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
}

/// Values the store attaches to every listing it returns
#[derive(Debug, Clone)]
struct Decoration {
    popularity: f64,
    placeholder_image: String,
}

impl Decoration {
    fn image(&self, image: Option<String>) -> String {
        image
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| self.placeholder_image.clone())
    }

    fn room(&self, row: RoomRow) -> Listing {
        Listing {
            id: row.room_id,
            name: row.dorm_name.unwrap_or_default(),
            address: row.address.unwrap_or_default(),
            latitude: parse_numeric(row.latitude.as_deref()),
            longitude: parse_numeric(row.longitude.as_deref()),
            price: parse_numeric(row.price.as_deref()),
            occupancy_type: row.occupancy_type,
            popularity: self.popularity,
            image: self.image(None),
            room: Some(RoomDetails {
                room_type: row.room_type,
                furnishing_status: row.furnishing_status,
                capacity: row.capacity,
            }),
        }
    }

    /// Dorms whose coordinates do not parse or fall outside WGS84 are dropped here
    fn dorm(&self, row: DormRow) -> Option<Listing> {
        let latitude = parse_numeric(row.latitude.as_deref());
        let longitude = parse_numeric(row.longitude.as_deref());

        match (latitude, longitude) {
            (Some(lat), Some(lon)) if is_valid_coordinate(lat, lon) => {}
            _ => {
                tracing::warn!("Skipping dorm {} with unusable coordinates", row.dorm_id);
                return None;
            }
        }

        Some(Listing {
            id: row.dorm_id,
            name: row.dorm_name.unwrap_or_default(),
            address: row.address.unwrap_or_default(),
            latitude,
            longitude,
            price: None,
            occupancy_type: row.occupancy_type,
            popularity: self.popularity,
            image: self.image(row.main_image),
            room: None,
        })
    }
}

/// MySQL-backed listing store
///
/// Reads rooms and dorms from the DormHub schema, coerces numeric columns
/// and attaches popularity and placeholder images before handing listings
/// to the recommendation core.
pub struct MySqlListingStore {
    pool: MySqlPool,
    query_timeout: Duration,
    decoration: Decoration,
}

impl MySqlListingStore {
    /// Create a new store from settings
    pub async fn from_settings(
        database: &DatabaseSettings,
        recommendation: &RecommendationSettings,
    ) -> Result<Self, StoreError> {
        tracing::info!(
            "Connecting to MySQL (max: {}, min: {} connections)",
            database.max_connections,
            database.min_connections
        );

        let pool = MySqlPoolOptions::new()
            .max_connections(database.max_connections)
            .min_connections(database.min_connections)
            .acquire_timeout(Duration::from_secs(database.acquire_timeout_secs))
            .idle_timeout(Duration::from_secs(database.idle_timeout_secs))
            .test_before_acquire(true)
            .connect(&database.url)
            .await?;

        Ok(Self {
            pool,
            query_timeout: Duration::from_secs(database.query_timeout_secs),
            decoration: Decoration {
                popularity: recommendation.popularity,
                placeholder_image: recommendation.placeholder_image.clone(),
            },
        })
    }

    async fn with_timeout<T, F>(&self, query: F) -> Result<T, StoreError>
    where
        F: Future<Output = Result<T, sqlx::Error>>,
    {
        match tokio::time::timeout(self.query_timeout, query).await {
            Ok(result) => result.map_err(StoreError::from),
            Err(_) => Err(StoreError::Timeout(self.query_timeout.as_secs())),
        }
    }
}

impl ListingSource for MySqlListingStore {
    async fn available_rooms(&self) -> Result<Vec<Listing>, StoreError> {
        let rows: Vec<RoomRow> = self
            .with_timeout(sqlx::query_as::<_, RoomRow>(AVAILABLE_ROOMS_QUERY).fetch_all(&self.pool))
            .await?;

        tracing::debug!("Fetched {} available rooms", rows.len());

        Ok(rows.into_iter().map(|row| self.decoration.room(row)).collect())
    }

    async fn geolocated_dorms(&self) -> Result<Vec<Listing>, StoreError> {
        let rows: Vec<DormRow> = self
            .with_timeout(sqlx::query_as::<_, DormRow>(GEOLOCATED_DORMS_QUERY).fetch_all(&self.pool))
            .await?;

        tracing::debug!("Fetched {} geolocated dorms", rows.len());

        Ok(rows.into_iter().filter_map(|row| self.decoration.dorm(row)).collect())
    }

    async fn health_check(&self) -> bool {
        self.with_timeout(sqlx::query("SELECT 1").fetch_one(&self.pool))
            .await
            .map(|_| true)
            .unwrap_or_else(|e| {
                tracing::warn!("MySQL health check failed: {}", e);
                false
            })
    }
}
