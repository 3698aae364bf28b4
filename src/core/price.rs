use crate::models::Listing;

/// Lower edge of the tolerance band, applied to `min_price`
pub const MIN_PRICE_TOLERANCE: f64 = 0.8;
/// Upper edge of the tolerance band, applied to `max_price`
pub const MAX_PRICE_TOLERANCE: f64 = 1.2;

/// Check whether a price falls inside the widened `[min, max]` band
#[inline]
pub fn within_price_band(price: f64, min_price: f64, max_price: f64) -> bool {
    price >= min_price * MIN_PRICE_TOLERANCE && price <= max_price * MAX_PRICE_TOLERANCE
}

/// Filter listings by a ±20% price band and return the `top_n` cheapest
///
/// Listings without a known price never qualify. Sorting is stable, so equal
/// prices keep their input order.
pub fn filter_and_rank(
    listings: &[Listing],
    min_price: f64,
    max_price: f64,
    top_n: usize,
) -> Vec<Listing> {
    let mut ranked: Vec<(f64, &Listing)> = listings
        .iter()
        .filter_map(|listing| listing.known_price().map(|price| (price, listing)))
        .filter(|(price, _)| within_price_band(*price, min_price, max_price))
        .collect();

    ranked.sort_by(|a, b| a.0.total_cmp(&b.0));

    ranked
        .into_iter()
        .take(top_n)
        .map(|(_, listing)| listing.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn priced(id: i64, price: Option<f64>) -> Listing {
        let mut listing = Listing::new(id, format!("Dorm {}", id), "Cebu City");
        listing.price = price;
        listing
    }

    fn prices(listings: &[Listing]) -> Vec<f64> {
        listings.iter().filter_map(|l| l.price).collect()
    }

    #[test]
    fn test_band_edges() {
        assert!(within_price_band(4000.0, 5000.0, 8000.0));
        assert!(within_price_band(9600.0, 5000.0, 8000.0));
        assert!(!within_price_band(3999.0, 5000.0, 8000.0));
        assert!(!within_price_band(9601.0, 5000.0, 8000.0));
    }

    #[test]
    fn test_sorted_and_truncated() {
        let listings = vec![
            priced(1, Some(3000.0)),
            priced(2, Some(1000.0)),
            priced(3, Some(2000.0)),
        ];

        let result = filter_and_rank(&listings, 0.0, 999_999.0, 2);
        assert_eq!(prices(&result), vec![1000.0, 2000.0]);
    }

    #[test]
    fn test_unknown_prices_excluded() {
        let listings = vec![
            priced(1, None),
            priced(2, Some(f64::NAN)),
            priced(3, Some(1500.0)),
        ];

        let result = filter_and_rank(&listings, 0.0, 999_999.0, 10);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, 3);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let listings = vec![
            priced(1, Some(2000.0)),
            priced(2, Some(1000.0)),
            priced(3, Some(2000.0)),
            priced(4, Some(1000.0)),
        ];

        let ids: Vec<i64> = filter_and_rank(&listings, 0.0, 999_999.0, 10)
            .iter()
            .map(|l| l.id)
            .collect();
        assert_eq!(ids, vec![2, 4, 1, 3]);
    }

    #[test]
    fn test_empty_input() {
        assert!(filter_and_rank(&[], 0.0, 100.0, 5).is_empty());
    }

    #[test]
    fn test_input_untouched() {
        let listings = vec![priced(1, Some(3000.0)), priced(2, Some(1000.0))];
        let before = listings.clone();
        let _ = filter_and_rank(&listings, 0.0, 999_999.0, 10);
        assert_eq!(listings, before);
    }
}
