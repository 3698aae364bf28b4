use serde::{de, Deserialize, Deserializer, Serialize};
use validator::Validate;

/// Request for price-based recommendations
///
/// Prices may arrive as JSON numbers or numeric strings; `null` or a missing
/// field falls back to the configured defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct PriceRecommendRequest {
    #[validate(range(min = 0.0))]
    #[serde(default, deserialize_with = "lenient_price")]
    pub min_price: Option<f64>,
    #[validate(range(min = 0.0))]
    #[serde(default, deserialize_with = "lenient_price")]
    pub max_price: Option<f64>,
    #[validate(range(min = 1))]
    #[serde(default, alias = "limit")]
    pub top_n: Option<usize>,
}

/// Request for location keyword search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationSearchRequest {
    #[serde(default)]
    pub location: String,
}

/// Request for occupancy-type recommendations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OccupancyRecommendRequest {
    #[serde(default)]
    pub occupancy_type: String,
}

/// Request for dorms near a coordinate
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NearbyRecommendRequest {
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
    #[validate(range(min = 1))]
    #[serde(default)]
    pub limit: Option<usize>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(f64),
    Text(String),
}

fn lenient_price<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<NumberOrText>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumberOrText::Number(n)) => Ok(Some(n)),
        Some(NumberOrText::Text(text)) => text
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|p| p.is_finite())
            .map(Some)
            .ok_or_else(|| de::Error::custom(format!("price must be numeric, got {:?}", text))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_request_accepts_numeric_strings() {
        let req: PriceRecommendRequest =
            serde_json::from_str(r#"{"min_price": "5000", "max_price": 8000}"#).unwrap();
        assert_eq!(req.min_price, Some(5000.0));
        assert_eq!(req.max_price, Some(8000.0));
        assert_eq!(req.top_n, None);
    }

    #[test]
    fn test_price_request_null_and_missing() {
        let req: PriceRecommendRequest =
            serde_json::from_str(r#"{"min_price": null}"#).unwrap();
        assert!(req.min_price.is_none());
        assert!(req.max_price.is_none());
    }

    #[test]
    fn test_price_request_rejects_text() {
        let result: Result<PriceRecommendRequest, _> =
            serde_json::from_str(r#"{"min_price": "cheap"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_price_request_rejects_negative() {
        let req: PriceRecommendRequest =
            serde_json::from_str(r#"{"min_price": -1}"#).unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_limit_alias() {
        let req: PriceRecommendRequest = serde_json::from_str(r#"{"limit": 3}"#).unwrap();
        assert_eq!(req.top_n, Some(3));
    }

    #[test]
    fn test_nearby_request_range() {
        let req = NearbyRecommendRequest { latitude: 95.0, longitude: 0.0, limit: None };
        assert!(req.validate().is_err());

        let req = NearbyRecommendRequest { latitude: 10.3, longitude: 123.9, limit: Some(5) };
        assert!(req.validate().is_ok());
    }
}
