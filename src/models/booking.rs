use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A reservation request as the form submits it. Held only for the duration
/// of the request; converted into a `BookingRecord` on successful validation.
#[derive(Debug, Clone, Deserialize)]
pub struct BookingDraft {
    #[serde(default)]
    pub passenger_name: String,
    #[serde(default)]
    pub contact_phone: String,
    #[serde(default)]
    pub origin: String,
    #[serde(default)]
    pub destination: String,
    #[serde(default)]
    pub travel_date: String,
    #[serde(default)]
    pub service: String,
    #[serde(default = "default_seat_count")]
    pub seat_count: u32,
}

fn default_seat_count() -> u32 {
    1
}

impl BookingDraft {
    /// Submit-time check: every text field must be populated. Seat count is
    /// range-limited by the form's stepper control and is not re-checked
    /// here; neither is origin != destination.
    pub fn validate(&self) -> Result<(), String> {
        let required = [
            &self.passenger_name,
            &self.contact_phone,
            &self.origin,
            &self.destination,
            &self.travel_date,
            &self.service,
        ];
        if required.iter().any(|field| field.trim().is_empty()) {
            return Err("Please complete the reservation form before submitting.".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum PaymentStatus {
    Pending,
    Confirmed,
    Failed,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "Pending",
            PaymentStatus::Confirmed => "Confirmed",
            PaymentStatus::Failed => "Failed",
        }
    }

    /// Lenient decode for sheet cells; anything unrecognized reads as
    /// Pending. Payment state is advanced only by the out-of-band bank
    /// transfer reconciliation, never by this service.
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "confirmed" => PaymentStatus::Confirmed,
            "failed" => PaymentStatus::Failed,
            _ => PaymentStatus::Pending,
        }
    }
}

/// A booking in internal field naming, either freshly assembled at submission
/// or normalized out of the external store's row shape.
#[derive(Debug, Clone, Serialize)]
pub struct BookingRecord {
    pub id: String,
    pub passenger_name: String,
    pub contact_phone: String,
    pub origin: String,
    pub destination: String,
    pub travel_date: String,
    pub service: String,
    pub seat_count: u32,
    pub total_cost: i64,
    pub payment_status: PaymentStatus,
    /// Departure time, assigned by the operator in the store. Lookup only.
    pub departure_time: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_draft() -> BookingDraft {
        BookingDraft {
            passenger_name: "A. Perera".to_string(),
            contact_phone: "94712223333".to_string(),
            origin: "Nintavur".to_string(),
            destination: "Kandy".to_string(),
            travel_date: "2025-03-01".to_string(),
            service: "Star Travels".to_string(),
            seat_count: 2,
        }
    }

    #[test]
    fn test_validate_accepts_full_draft() {
        assert!(full_draft().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_each_missing_field() {
        for blank in 0..6 {
            let mut draft = full_draft();
            match blank {
                0 => draft.passenger_name.clear(),
                1 => draft.contact_phone.clear(),
                2 => draft.origin.clear(),
                3 => draft.destination.clear(),
                4 => draft.travel_date.clear(),
                _ => draft.service.clear(),
            }
            assert!(draft.validate().is_err(), "field {blank} should be required");
        }
    }

    #[test]
    fn test_validate_rejects_whitespace_only() {
        let mut draft = full_draft();
        draft.passenger_name = "   ".to_string();
        assert!(draft.validate().is_err());
    }

    #[test]
    fn test_validate_ignores_seat_count_bounds() {
        // The stepper control owns the [1, 6] range; submit does not.
        let mut draft = full_draft();
        draft.seat_count = 0;
        assert!(draft.validate().is_ok());
        draft.seat_count = 9;
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_validate_allows_same_origin_and_destination() {
        let mut draft = full_draft();
        draft.destination = draft.origin.clone();
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_payment_status_lenient_decode() {
        assert_eq!(PaymentStatus::from_str("Confirmed"), PaymentStatus::Confirmed);
        assert_eq!(PaymentStatus::from_str("failed"), PaymentStatus::Failed);
        assert_eq!(PaymentStatus::from_str("Pending"), PaymentStatus::Pending);
        assert_eq!(PaymentStatus::from_str("paid??"), PaymentStatus::Pending);
        assert_eq!(PaymentStatus::from_str(""), PaymentStatus::Pending);
    }
}
