use crate::models::{AccommodationType, Listing, MarketPoint, SearchResult};
use tracing::info;

/// Canned result used whenever the model is unavailable
///
/// Listings and market points never change; only the summary mentions `college`.
pub fn search_result(college: &str) -> SearchResult {
    info!("📋 Generating fallback listings for {:?}", college);

    SearchResult {
        location_summary: format!(
            "The area around {} is vibrant with student life, featuring numerous affordable eateries and safe residential blocks.",
            college
        ),
        hostels: listings(),
        market_insights: market_insights(),
    }
}

pub fn listings() -> Vec<Listing> {
    vec![
        Listing {
            id: "1".to_string(),
            name: "Scholars Inn".to_string(),
            kind: AccommodationType::Hostel,
            price_per_month: 8500.0,
            currency: "INR".to_string(),
            distance: "0.5 km".to_string(),
            rating: 4.5,
            review_count: 120,
            amenities: vec!["Wifi".to_string(), "3 meals".to_string(), "Laundry".to_string()],
            description: "Closest hostel to the library gate. Perfect for serious students."
                .to_string(),
            coordinates: None,
            availability: 5,
        },
        Listing {
            id: "2".to_string(),
            name: "The Student Hub PG".to_string(),
            kind: AccommodationType::PG,
            price_per_month: 12000.0,
            currency: "INR".to_string(),
            distance: "1.2 km".to_string(),
            rating: 4.2,
            review_count: 85,
            amenities: vec![
                "AC".to_string(),
                "Wifi".to_string(),
                "Gym".to_string(),
                "Attached Washroom".to_string(),
            ],
            description: "Luxury living with gym access and high-speed internet.".to_string(),
            coordinates: None,
            availability: 2,
        },
        Listing {
            id: "3".to_string(),
            name: "Green View Residency".to_string(),
            kind: AccommodationType::Apartment,
            price_per_month: 15000.0,
            currency: "INR".to_string(),
            distance: "2.0 km".to_string(),
            rating: 4.8,
            review_count: 40,
            amenities: vec![
                "Full Kitchen".to_string(),
                "Balcony".to_string(),
                "Security".to_string(),
            ],
            description:
                "Shared apartments for those who prefer privacy and cooking their own meals."
                    .to_string(),
            coordinates: None,
            availability: 1,
        },
    ]
}

pub fn market_insights() -> Vec<MarketPoint> {
    [
        ("Jan", 9000.0),
        ("Feb", 9200.0),
        ("Mar", 8800.0),
        ("Apr", 9500.0),
        ("May", 10000.0),
        ("Jun", 11000.0),
    ]
    .into_iter()
    .map(|(month, avg_price)| MarketPoint {
        month: month.to_string(),
        avg_price,
    })
    .collect()
}
