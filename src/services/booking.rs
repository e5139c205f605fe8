use std::sync::Arc;

use chrono::Utc;
use rand::Rng;

use crate::errors::AppError;
use crate::models::{format_lkr, BookingDraft, BookingRecord, PaymentStatus};
use crate::services::store::LookupOutcome;
use crate::state::AppState;

const ID_PREFIX: &str = "LGN";
const ID_TOKEN_LEN: usize = 9;
const BASE36: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

pub struct SubmissionOutcome {
    pub record: BookingRecord,
    pub message: String,
    pub whatsapp_url: String,
}

/// Submission workflow: validate, assemble the record, mirror it into the
/// store without waiting, and hand back the WhatsApp deep-link the user
/// opens to complete the human confirmation loop.
pub async fn submit(
    state: &Arc<AppState>,
    draft: BookingDraft,
) -> Result<SubmissionOutcome, AppError> {
    draft.validate().map_err(AppError::Validation)?;

    let record = BookingRecord {
        id: generate_booking_id(),
        total_cost: state.catalog.fare(&draft.service, draft.seat_count),
        passenger_name: draft.passenger_name,
        contact_phone: draft.contact_phone,
        origin: draft.origin,
        destination: draft.destination,
        travel_date: draft.travel_date,
        service: draft.service,
        seat_count: draft.seat_count,
        payment_status: PaymentStatus::Pending,
        departure_time: None,
        created_at: Some(Utc::now()),
    };

    // The store is a convenience mirror; the WhatsApp message is what the
    // operator actually works from, so the write never gates the hand-off.
    sync_to_store(state, &record);

    let message = confirmation_message(&record);
    let whatsapp_url = whatsapp_link(&state.config.admin_phone, &message);

    tracing::info!(booking_id = %record.id, total_cost = record.total_cost, "reservation request prepared");

    Ok(SubmissionOutcome {
        record,
        message,
        whatsapp_url,
    })
}

fn sync_to_store(state: &Arc<AppState>, record: &BookingRecord) {
    let state = Arc::clone(state);
    let record = record.clone();
    tokio::spawn(async move {
        if let Err(e) = state.store.add_booking(&record).await {
            tracing::warn!(error = %e, booking_id = %record.id, "store sync failed");
        }
    });
}

/// 36^9 id space; collisions are not checked against the store.
fn generate_booking_id() -> String {
    let mut rng = rand::thread_rng();
    let token: String = (0..ID_TOKEN_LEN)
        .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
        .collect();
    format!("{ID_PREFIX}-{token}")
}

pub fn confirmation_message(record: &BookingRecord) -> String {
    format!(
        "*ELITE RESERVATION REQUEST*\n\n\
         🆔 *Booking ID:* {}\n\
         👤 *Passenger:* {}\n\
         📱 *Contact:* {}\n\
         📍 *Route:* {} ➔ {}\n\
         📅 *Date:* {}\n\
         🚌 *Service:* {}\n\
         💺 *Seats:* {}\n\
         💰 *Premium Cost:* LKR {}\n\n\
         _Cloud Synchronized Security Checked_",
        record.id,
        record.passenger_name,
        record.contact_phone,
        record.origin,
        record.destination,
        record.travel_date,
        record.service,
        record.seat_count,
        format_lkr(record.total_cost),
    )
}

pub fn whatsapp_link(admin_phone: &str, message: &str) -> String {
    format!(
        "https://wa.me/{admin_phone}?text={}",
        urlencoding::encode(message)
    )
}

/// Lookup workflow: one search round trip, normalized into internal naming.
pub async fn lookup(state: &Arc<AppState>, phone: &str) -> Result<BookingRecord, AppError> {
    let phone = phone.trim();
    if phone.is_empty() {
        return Err(AppError::Validation(
            "Please enter the phone number used for the booking.".to_string(),
        ));
    }

    match state.store.find_by_phone(phone).await {
        Ok(LookupOutcome::Found(record)) => Ok(record),
        Ok(LookupOutcome::NotFound(message)) => Err(AppError::NotFound(message.unwrap_or_else(
            || "No booking found for this phone number.".to_string(),
        ))),
        Err(e) => {
            tracing::error!(error = %e, "booking lookup failed");
            Err(AppError::Store(
                "Connection to the booking records failed. Please try again.".to_string(),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> BookingRecord {
        BookingRecord {
            id: "LGN-AB12CD34E".to_string(),
            passenger_name: "A. Perera".to_string(),
            contact_phone: "94712223333".to_string(),
            origin: "Nintavur".to_string(),
            destination: "Kandy".to_string(),
            travel_date: "2025-03-01".to_string(),
            service: "Star Travels".to_string(),
            seat_count: 2,
            total_cost: 3200,
            payment_status: PaymentStatus::Pending,
            departure_time: None,
            created_at: None,
        }
    }

    #[test]
    fn test_booking_id_format() {
        for _ in 0..50 {
            let id = generate_booking_id();
            let token = id.strip_prefix("LGN-").expect("prefix");
            assert_eq!(token.len(), 9);
            assert!(token
                .chars()
                .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
        }
    }

    #[test]
    fn test_confirmation_message_fields() {
        let message = confirmation_message(&sample_record());
        assert!(message.contains("LGN-AB12CD34E"));
        assert!(message.contains("A. Perera"));
        assert!(message.contains("Nintavur ➔ Kandy"));
        assert!(message.contains("Star Travels"));
        assert!(message.contains("LKR 3,200"));
        assert!(message.contains("💺 *Seats:* 2"));
    }

    #[test]
    fn test_whatsapp_link_encodes_message() {
        let url = whatsapp_link("94701362527", "Route: Nintavur ➔ Kandy");
        assert!(url.starts_with("https://wa.me/94701362527?text="));
        assert!(url.contains("Route%3A%20Nintavur"));
        assert!(!url.contains(' '));
    }
}
