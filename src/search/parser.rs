use crate::error::AcquisitionError;
use crate::models::SearchResult;

/// Decode model output into a `SearchResult`
///
/// Only the shape is checked. Ratings, counts and categories are taken as given.
pub fn parse_search_result(text: &str) -> Result<SearchResult, AcquisitionError> {
    let body = strip_code_fence(text.trim());
    if body.is_empty() {
        return Err(AcquisitionError::EmptyResponse);
    }
    Ok(serde_json::from_str(body)?)
}

fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    // Drop the info string ("json") up to the first newline
    let rest = rest.split_once('\n').map(|(_, body)| body).unwrap_or("");
    rest.trim_end().strip_suffix("```").unwrap_or(rest).trim()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AccommodationType;
    use serde_json::json;

    fn sample() -> serde_json::Value {
        json!({
            "locationSummary": "Busy and affordable. Lots of cafes.",
            "hostels": [{
                "id": "a1",
                "name": "Campus Nest",
                "type": "Hostel",
                "pricePerMonth": 7000,
                "currency": "INR",
                "distance": "300 m",
                "rating": 4.0,
                "reviewCount": 12,
                "amenities": ["Wifi", "Mess"],
                "description": "Right by the main gate.",
                "availability": 4
            }],
            "marketInsights": [{ "month": "Jan", "avgPrice": 7100.5 }]
        })
    }

    #[test]
    fn parses_well_formed_json() {
        let result = parse_search_result(&sample().to_string()).unwrap();
        assert_eq!(result.hostels.len(), 1);
        assert_eq!(result.hostels[0].kind, AccommodationType::Hostel);
        assert_eq!(result.market_insights[0].avg_price, 7100.5);
    }

    #[test]
    fn accepts_fenced_json() {
        let text = format!("```json\n{}\n```", sample());
        assert!(parse_search_result(&text).is_ok());
    }

    #[test]
    fn out_of_range_values_are_not_rejected() {
        let mut value = sample();
        value["hostels"][0]["rating"] = json!(11.0);
        value["hostels"][0]["availability"] = json!(-2);
        value["hostels"][0]["type"] = json!("Villa");

        let result = parse_search_result(&value.to_string()).unwrap();
        assert_eq!(result.hostels[0].rating, 11.0);
        assert_eq!(result.hostels[0].availability, -2);
        assert_eq!(
            result.hostels[0].kind,
            AccommodationType::Other("Villa".to_string())
        );
    }

    #[test]
    fn loosely_typed_counts_still_parse() {
        let mut value = sample();
        value["hostels"][0]["reviewCount"] = json!(120.0);
        value["hostels"][0]
            .as_object_mut()
            .unwrap()
            .remove("availability");

        let result = parse_search_result(&value.to_string()).unwrap();
        assert_eq!(result.hostels[0].review_count, 120);
        assert_eq!(result.hostels[0].availability, 0);
    }

    #[test]
    fn structural_mismatch_is_malformed() {
        let mut value = sample();
        value["hostels"][0]["pricePerMonth"] = json!("cheap");
        let err = parse_search_result(&value.to_string()).unwrap_err();
        assert!(matches!(err, AcquisitionError::Malformed(_)));

        let err = parse_search_result(r#"{"locationSummary": "x"}"#).unwrap_err();
        assert!(matches!(err, AcquisitionError::Malformed(_)));

        let err = parse_search_result("Sorry, I can't help with that.").unwrap_err();
        assert!(matches!(err, AcquisitionError::Malformed(_)));
    }

    #[test]
    fn blank_text_is_empty_response() {
        assert!(matches!(
            parse_search_result("  \n").unwrap_err(),
            AcquisitionError::EmptyResponse
        ));
        assert!(matches!(
            parse_search_result("```json\n```").unwrap_err(),
            AcquisitionError::EmptyResponse
        ));
    }
}
