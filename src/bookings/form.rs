use crate::error::BookingError;
use crate::models::{Booking, Listing, StayDuration};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Fields a student fills in to request a listing
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingForm {
    pub student_name: String,
    pub email: String,
    pub phone_number: String,
    /// Free text, usually YYYY-MM-DD from a date picker
    pub move_in_date: String,
    #[serde(default)]
    pub duration: StayDuration,
}

impl BookingForm {
    /// Every field is required; email must at least contain `@`
    pub fn validate(&self) -> Result<(), BookingError> {
        let required = [
            ("studentName", &self.student_name),
            ("email", &self.email),
            ("phoneNumber", &self.phone_number),
            ("moveInDate", &self.move_in_date),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(BookingError::MissingField(field));
            }
        }

        if !self.email.contains('@') {
            return Err(BookingError::InvalidEmail(self.email.clone()));
        }

        Ok(())
    }
}

impl Booking {
    /// New booking for `listing`, stamped now
    pub fn from_form(listing: &Listing, form: BookingForm) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            hostel_id: listing.id.clone(),
            hostel_name: listing.name.clone(),
            student_name: form.student_name,
            email: form.email,
            phone_number: form.phone_number,
            move_in_date: form.move_in_date,
            duration: form.duration,
            submitted_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::fallback;
    use chrono::DateTime;

    fn jane() -> BookingForm {
        BookingForm {
            student_name: "Jane Doe".to_string(),
            email: "jane@uni.edu".to_string(),
            phone_number: "+911234567890".to_string(),
            move_in_date: "2024-08-01".to_string(),
            duration: StayDuration::OneYear,
        }
    }

    #[test]
    fn booking_copies_listing_and_contact_fields() {
        let listing = &fallback::listings()[0];
        let booking = Booking::from_form(listing, jane());

        assert!(!booking.id.is_empty());
        assert_eq!(booking.hostel_id, listing.id);
        assert_eq!(booking.hostel_name, "Scholars Inn");
        assert_eq!(booking.student_name, "Jane Doe");
        assert_eq!(booking.phone_number, "+911234567890");
        assert_eq!(booking.email, "jane@uni.edu");
        assert_eq!(booking.move_in_date, "2024-08-01");
        assert_eq!(booking.duration, StayDuration::OneYear);

        let wire = serde_json::to_value(&booking).unwrap();
        let stamp = wire["submittedAt"].as_str().unwrap();
        assert!(DateTime::parse_from_rfc3339(stamp).is_ok());
        assert_eq!(wire["duration"], "1 Year");
    }

    #[test]
    fn ids_are_unique_per_submission() {
        let listing = &fallback::listings()[1];
        let a = Booking::from_form(listing, jane());
        let b = Booking::from_form(listing, jane());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn validate_rejects_blank_fields() {
        assert_eq!(jane().validate(), Ok(()));

        let mut form = jane();
        form.phone_number = "  ".to_string();
        assert_eq!(
            form.validate(),
            Err(BookingError::MissingField("phoneNumber"))
        );

        let mut form = jane();
        form.student_name.clear();
        assert_eq!(
            form.validate(),
            Err(BookingError::MissingField("studentName"))
        );
    }

    #[test]
    fn validate_rejects_email_without_at() {
        let mut form = jane();
        form.email = "jane.uni.edu".to_string();
        assert!(matches!(form.validate(), Err(BookingError::InvalidEmail(_))));
    }

    #[test]
    fn duration_defaults_when_omitted() {
        let form: BookingForm = serde_json::from_value(serde_json::json!({
            "studentName": "Ravi",
            "email": "ravi@college.in",
            "phoneNumber": "98765",
            "moveInDate": "2025-01-10"
        }))
        .unwrap();
        assert_eq!(form.duration, StayDuration::SixMonths);
    }
}
