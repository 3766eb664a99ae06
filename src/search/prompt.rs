use serde_json::{json, Value};

/// Instruction sent to the model for a college or locality name
pub fn search_prompt(college: &str) -> String {
    format!(
        r#"User wants to find student accommodation (Hostels and PGs) near "{college}".
Generate a realistic list of 6-9 fictional but plausible hostels/PGs near this college.
Also generate a "market trend" dataset showing average rental prices for the last 6 months in that area.

Requirements:
1. Vary the prices, distances (keep them close to the college), and amenities.
2. Ensure "type" is one of: Hostel, PG, Apartment.
3. "description" should be catchy and highlight proximity to the college.
4. "locationSummary" should be a 2-sentence overview of the student living area around {college}."#
    )
}

/// Response schema in the Gemini `responseSchema` dialect
pub fn search_result_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "locationSummary": { "type": "STRING" },
            "hostels": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "id": { "type": "STRING" },
                        "name": { "type": "STRING" },
                        "type": { "type": "STRING", "enum": ["Hostel", "PG", "Apartment"] },
                        "pricePerMonth": { "type": "NUMBER" },
                        "currency": { "type": "STRING" },
                        "distance": { "type": "STRING" },
                        "rating": { "type": "NUMBER" },
                        "reviewCount": { "type": "INTEGER" },
                        "amenities": { "type": "ARRAY", "items": { "type": "STRING" } },
                        "description": { "type": "STRING" },
                        "availability": { "type": "INTEGER" }
                    },
                    "required": [
                        "id", "name", "type", "pricePerMonth", "currency", "distance",
                        "rating", "reviewCount", "amenities", "description", "availability"
                    ]
                }
            },
            "marketInsights": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "month": { "type": "STRING" },
                        "avgPrice": { "type": "NUMBER" }
                    },
                    "required": ["month", "avgPrice"]
                }
            }
        },
        "required": ["locationSummary", "hostels", "marketInsights"]
    })
}
