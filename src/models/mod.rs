use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Kind of accommodation a listing offers
///
/// The model is asked to stick to the three known categories, but any other
/// label it sends is preserved in `Other` instead of failing the whole result.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AccommodationType {
    Hostel,
    PG,
    Apartment,
    Other(String),
}

impl AccommodationType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Hostel => "Hostel",
            Self::PG => "PG",
            Self::Apartment => "Apartment",
            Self::Other(label) => label,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl From<String> for AccommodationType {
    fn from(label: String) -> Self {
        match label.as_str() {
            "Hostel" => Self::Hostel,
            "PG" => Self::PG,
            "Apartment" => Self::Apartment,
            _ => Self::Other(label),
        }
    }
}

impl From<AccommodationType> for String {
    fn from(kind: AccommodationType) -> Self {
        match kind {
            AccommodationType::Other(label) => label,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for AccommodationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Geographic position of a listing
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// A single hostel, PG or apartment offering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: AccommodationType,
    pub price_per_month: f64,
    pub currency: String,
    /// Free text, e.g. "0.5 km"
    pub distance: String,
    pub rating: f64,
    #[serde(default, deserialize_with = "whole_number")]
    pub review_count: u32,
    #[serde(default)]
    pub amenities: Vec<String>,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
    /// Beds left
    #[serde(default, deserialize_with = "whole_number")]
    pub availability: i64,
}

/// Integer field that models sometimes send as `120.0`
fn whole_number<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<i64>,
{
    use serde::de::Error;

    let raw = f64::deserialize(deserializer)?;
    if raw.fract() != 0.0 || !raw.is_finite() {
        return Err(D::Error::custom(format!("expected a whole number, got {}", raw)));
    }
    T::try_from(raw as i64).map_err(|_| D::Error::custom(format!("{} is out of range", raw)))
}

/// One month's average rent sample
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketPoint {
    pub month: String,
    pub avg_price: f64,
}

/// Aggregate answer to a location query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub location_summary: String,
    pub hostels: Vec<Listing>,
    pub market_insights: Vec<MarketPoint>,
}

/// How long the student intends to stay
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum StayDuration {
    #[default]
    #[serde(rename = "6 Months")]
    SixMonths,
    #[serde(rename = "1 Year")]
    OneYear,
    #[serde(rename = "2 Years")]
    TwoYears,
}

impl StayDuration {
    pub fn label(&self) -> &'static str {
        match self {
            Self::SixMonths => "6 Months",
            Self::OneYear => "1 Year",
            Self::TwoYears => "2 Years",
        }
    }
}

impl fmt::Display for StayDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A student's submitted interest in a listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub hostel_id: String,
    pub hostel_name: String,
    pub student_name: String,
    pub email: String,
    pub phone_number: String,
    pub move_in_date: String,
    pub duration: StayDuration,
    pub submitted_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn listing_uses_wire_field_names() {
        let listing: Listing = serde_json::from_value(json!({
            "id": "7",
            "name": "Lakeside PG",
            "type": "PG",
            "pricePerMonth": 9500,
            "currency": "INR",
            "distance": "0.8 km",
            "rating": 4.1,
            "reviewCount": 33,
            "amenities": ["Wifi"],
            "description": "Walk to class.",
            "availability": 3
        }))
        .unwrap();

        assert_eq!(listing.kind, AccommodationType::PG);
        assert_eq!(listing.price_per_month, 9500.0);
        assert!(listing.coordinates.is_none());

        let back = serde_json::to_value(&listing).unwrap();
        assert_eq!(back["type"], "PG");
        assert_eq!(back["reviewCount"], 33);
        assert!(back.get("coordinates").is_none());
    }

    #[test]
    fn counts_accept_whole_floats_and_default_when_missing() {
        let listing: Listing = serde_json::from_value(json!({
            "id": "8",
            "name": "Hilltop Hostel",
            "type": "Hostel",
            "pricePerMonth": 6000,
            "currency": "INR",
            "distance": "1.5 km",
            "rating": 3.9,
            "reviewCount": 120.0,
            "description": "Quiet."
        }))
        .unwrap();

        assert_eq!(listing.review_count, 120);
        assert_eq!(listing.availability, 0);
        assert!(listing.amenities.is_empty());
    }

    #[test]
    fn fractional_or_negative_review_count_is_rejected() {
        let base = json!({
            "id": "8", "name": "x", "type": "PG", "pricePerMonth": 1, "currency": "INR",
            "distance": "1 km", "rating": 4, "description": "", "availability": 1
        });

        let mut fractional = base.clone();
        fractional["reviewCount"] = json!(12.5);
        assert!(serde_json::from_value::<Listing>(fractional).is_err());

        let mut negative = base;
        negative["reviewCount"] = json!(-3);
        assert!(serde_json::from_value::<Listing>(negative).is_err());
    }

    #[test]
    fn unknown_category_is_kept_verbatim() {
        let kind: AccommodationType = serde_json::from_value(json!("Dormitory")).unwrap();
        assert_eq!(kind, AccommodationType::Other("Dormitory".to_string()));
        assert!(!kind.is_known());
        assert_eq!(serde_json::to_value(&kind).unwrap(), json!("Dormitory"));
    }

    #[test]
    fn duration_labels_match_form_options() {
        assert_eq!(StayDuration::default(), StayDuration::SixMonths);
        let parsed: StayDuration = serde_json::from_value(json!("1 Year")).unwrap();
        assert_eq!(parsed, StayDuration::OneYear);
        assert_eq!(serde_json::to_value(StayDuration::TwoYears).unwrap(), json!("2 Years"));
        assert!(serde_json::from_value::<StayDuration>(json!("3 Weeks")).is_err());
    }
}
