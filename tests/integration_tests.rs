// Integration tests for DormHub Recommender

use dormhub_recommender::core::{Recommender, SynonymTable};
use dormhub_recommender::models::{Listing, RecommendationDefaults};
use geo::Point;
use std::sync::Arc;

fn create_test_dorm(
    id: i64,
    address: &str,
    occupancy: &str,
    lat: f64,
    lon: f64,
) -> Listing {
    let mut listing = Listing::new(id, format!("Dorm {}", id), address);
    listing.occupancy_type = Some(occupancy.to_string());
    listing.latitude = Some(lat);
    listing.longitude = Some(lon);
    listing
}

fn create_test_room(id: i64, price: Option<f64>) -> Listing {
    let mut listing = Listing::new(id, format!("Room {}", id), "Lahug, Cebu City");
    listing.price = price;
    listing
}

fn metro_cebu_dorms() -> Vec<Listing> {
    vec![
        create_test_dorm(1, "Pusok, Lapu-Lapu City", "Male Only", 10.3230, 123.9660),
        create_test_dorm(2, "Near Opon Public Market", "Female Only", 10.3100, 123.9500),
        create_test_dorm(3, "MCAC Road, Lapulapu", "Mixed Gender", 10.3130, 123.9800),
        create_test_dorm(4, "Banilad, Cebu City", "Mixed - Premium", 10.3450, 123.9110),
        create_test_dorm(5, "Talamban, Cebu City", "female only", 10.3700, 123.9200),
        create_test_dorm(6, "Mandaue City", "co-ed", 10.3330, 123.9330),
    ]
}

#[test]
fn test_integration_price_pipeline() {
    let recommender = Recommender::with_defaults();

    let rooms = vec![
        create_test_room(1, Some(6500.0)),
        create_test_room(2, None),
        create_test_room(3, Some(3500.0)),
        create_test_room(4, Some(4000.0)),
        create_test_room(5, Some(9600.0)),
        create_test_room(6, Some(12_000.0)),
        create_test_room(7, Some(4000.0)),
    ];

    let result = recommender.recommend_by_price(&rooms, Some(5000.0), Some(8000.0), None);
    let ids: Vec<i64> = result.iter().map(|l| l.id).collect();

    assert_eq!(ids, vec![4, 7, 1, 5]);
    assert_eq!(rooms.len(), 7, "input must not be consumed");
}

#[test]
fn test_integration_location_search() {
    let recommender = Recommender::with_defaults();
    let dorms = metro_cebu_dorms();

    let lapu: Vec<i64> = recommender
        .search_location(&dorms, "lapu lapu")
        .iter()
        .map(|s| s.listing.id)
        .collect();
    assert_eq!(lapu, vec![1, 3]);

    let airport: Vec<i64> = recommender
        .search_location(&dorms, "airport")
        .iter()
        .map(|s| s.listing.id)
        .collect();
    assert_eq!(airport, vec![2, 3]);

    let cebu = recommender.search_location(&dorms, "cebu city");
    assert_eq!(cebu.len(), 2);
    assert!(cebu.iter().all(|s| s.score == 10.0));

    assert!(recommender.search_location(&dorms, "toledo").is_empty());
}

#[test]
fn test_integration_occupancy() {
    let recommender = Recommender::with_defaults();
    let dorms = metro_cebu_dorms();

    let ids = |requested: &str| -> Vec<i64> {
        recommender
            .recommend_by_occupancy(&dorms, requested)
            .iter()
            .map(|l| l.id)
            .collect()
    };

    assert_eq!(ids("male"), vec![1]);
    assert_eq!(ids("female"), vec![2, 5]);
    assert_eq!(ids("mixed"), vec![3, 4]);
    assert_eq!(ids("all").len(), dorms.len());
    assert!(ids("co-ed").is_empty());
}

#[test]
fn test_integration_nearby_ranking() {
    let recommender = Recommender::with_defaults();
    let dorms = metro_cebu_dorms();
    let user = Point::new(123.9500, 10.3100);

    let result = recommender.recommend_nearby(&dorms, user, None).unwrap();

    assert_eq!(result.len(), dorms.len());
    assert_eq!(result[0].listing.id, 2);

    for pair in result.windows(2) {
        assert!(pair[0].score >= pair[1].score, "Nearby results not sorted by score");
    }
    for scored in &result {
        assert!(scored.score >= 0.0);
        assert!(scored.distance_km.is_some());
    }
}

#[test]
fn test_integration_custom_defaults() {
    let defaults = RecommendationDefaults {
        top_n: 2,
        location_match_score: 3.0,
        nearby_limit: 1,
        ..Default::default()
    };
    let mut groups = SynonymTable::default_groups();
    groups.insert("banilad".to_string(), vec!["banilad".to_string(), "gov m cuenco".to_string()]);
    let recommender = Recommender::new(defaults, Arc::new(SynonymTable::from_map(&groups)));

    let rooms: Vec<Listing> = (0..5).map(|i| create_test_room(i, Some(1000.0 * (5 - i) as f64))).collect();
    let cheapest = recommender.recommend_by_price(&rooms, None, None, None);
    assert_eq!(cheapest.iter().map(|l| l.id).collect::<Vec<_>>(), vec![4, 3]);

    let dorms = metro_cebu_dorms();
    let banilad = recommender.search_location(&dorms, "Gov. M. Cuenco");
    assert_eq!(banilad.len(), 1);
    assert_eq!(banilad[0].score, 3.0);

    let nearest = recommender
        .recommend_nearby(&dorms, Point::new(123.9110, 10.3450), None)
        .unwrap();
    assert_eq!(nearest.len(), 1);
    assert_eq!(nearest[0].listing.id, 4);
}
