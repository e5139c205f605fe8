use crate::models::{format_lkr, BookingRecord};

const RULE: &str = "==========================================";
const THIN_RULE: &str = "------------------------------------------";

/// Render a fetched booking as a fixed-format one-page boarding pass. Pure
/// rendering; the handler is responsible for fetching the record.
pub fn render_ticket(record: &BookingRecord) -> String {
    let schedule = match &record.departure_time {
        Some(time) => format!("{} @ {}", record.travel_date, time),
        None => record.travel_date.clone(),
    };

    format!(
        "{RULE}\n\
         {:^42}\n\
         {RULE}\n\
         PASS ID    : {}\n\
         PASSENGER  : {}\n\
         CONTACT    : {}\n\
         ROUTE      : {} -> {}\n\
         SCHEDULE   : {}\n\
         SERVICE    : {}\n\
         SEATS      : {}\n\
         PAYMENT    : {}\n\
         AMOUNT     : LKR {}\n\
         {THIN_RULE}\n\
         Gate closes 15 minutes before departure.\n\
         Baggage allowance: 30kg per passenger.\n\
         {RULE}\n",
        "LAGAN PREMIUM PASS",
        record.id,
        record.passenger_name,
        record.contact_phone,
        record.origin,
        record.destination,
        schedule,
        record.service,
        record.seat_count,
        record.payment_status.as_str(),
        format_lkr(record.total_cost),
    )
}
