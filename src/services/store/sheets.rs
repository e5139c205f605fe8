use anyhow::Context;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::{BookingStore, LookupOutcome};
use crate::models::{BookingRecord, PaymentStatus};

/// Client for the spreadsheet-backed Apps Script endpoint. The script speaks
/// a query-string protocol: `method=add` writes a row (response ignored),
/// `method=search&phone=...` returns `{success, booking?, message?}`.
pub struct SheetStore {
    url: String,
    client: reqwest::Client,
}

impl SheetStore {
    pub fn new(url: String) -> Self {
        Self {
            url,
            client: reqwest::Client::new(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct SearchReply {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    booking: Option<SheetBooking>,
    #[serde(default)]
    message: Option<String>,
}

/// A booking row as the sheet labels its columns. Field names here are the
/// store's, not ours; `into_record` does the mapping.
#[derive(Debug, Deserialize)]
struct SheetBooking {
    #[serde(rename = "BookingID", default)]
    booking_id: String,
    #[serde(rename = "Name", default)]
    name: String,
    #[serde(rename = "Phone", default)]
    phone: String,
    #[serde(rename = "Pickup", default)]
    pickup: String,
    #[serde(rename = "Drop", default)]
    drop: String,
    #[serde(rename = "Date", default)]
    date: String,
    #[serde(rename = "Bus", default)]
    bus: String,
    #[serde(rename = "SeatNumbers", default)]
    seat_numbers: Option<CellValue>,
    #[serde(rename = "Payment", default)]
    payment: String,
    #[serde(rename = "TotalAmount", default)]
    total_amount: Option<CellValue>,
    #[serde(rename = "Time", default)]
    time: Option<String>,
    #[serde(rename = "Timestamp", default)]
    timestamp: Option<String>,
}

/// Sheet cells are untyped; numeric columns arrive as numbers or strings
/// depending on how the cell was last written.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CellValue {
    Number(f64),
    Text(String),
}

impl CellValue {
    fn as_i64(&self) -> i64 {
        match self {
            CellValue::Number(n) => *n as i64,
            CellValue::Text(s) => s.trim().replace(',', "").parse().unwrap_or(0),
        }
    }
}

impl SheetBooking {
    fn into_record(self) -> BookingRecord {
        BookingRecord {
            id: self.booking_id,
            passenger_name: self.name,
            contact_phone: self.phone,
            origin: self.pickup,
            destination: self.drop,
            travel_date: self.date,
            service: self.bus,
            seat_count: self
                .seat_numbers
                .map(|v| v.as_i64().max(0) as u32)
                .unwrap_or(0),
            total_cost: self.total_amount.map(|v| v.as_i64()).unwrap_or(0),
            payment_status: PaymentStatus::from_str(&self.payment),
            departure_time: self.time.filter(|t| !t.trim().is_empty()),
            created_at: self
                .timestamp
                .as_deref()
                .and_then(|t| DateTime::parse_from_rfc3339(t).ok())
                .map(|t| t.with_timezone(&Utc)),
        }
    }
}

#[async_trait]
impl BookingStore for SheetStore {
    async fn add_booking(&self, record: &BookingRecord) -> anyhow::Result<()> {
        if self.url.is_empty() {
            anyhow::bail!("booking store URL not configured");
        }

        // The Apps Script reads e.parameter, so writes travel as query
        // parameters. Booking id and cost are not part of the row; the
        // operator reconciles them from the WhatsApp message.
        let seats = record.seat_count.to_string();
        let params = [
            ("method", "add"),
            ("name", record.passenger_name.as_str()),
            ("phone", record.contact_phone.as_str()),
            ("from", record.origin.as_str()),
            ("to", record.destination.as_str()),
            ("date", record.travel_date.as_str()),
            ("bus", record.service.as_str()),
            ("seats", seats.as_str()),
        ];

        self.client
            .post(&self.url)
            .query(&params)
            .send()
            .await
            .context("failed to reach booking store")?;

        Ok(())
    }

    async fn find_by_phone(&self, phone: &str) -> anyhow::Result<LookupOutcome> {
        if self.url.is_empty() {
            anyhow::bail!("booking store URL not configured");
        }

        let resp = self
            .client
            .get(&self.url)
            .query(&[("method", "search"), ("phone", phone)])
            .send()
            .await
            .context("failed to reach booking store")?;

        let reply: SearchReply = resp
            .json()
            .await
            .context("failed to parse booking store response")?;

        match reply {
            SearchReply {
                success: true,
                booking: Some(row),
                ..
            } => Ok(LookupOutcome::Found(row.into_record())),
            SearchReply { message, .. } => Ok(LookupOutcome::NotFound(message)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_search_reply_with_numeric_cells() {
        let json = r#"{
            "success": true,
            "booking": {
                "BookingID": "LGN-AB12CD34E",
                "Name": "A. Perera",
                "Phone": "94771234567",
                "Pickup": "Nintavur",
                "Drop": "Kandy",
                "Date": "2025-03-01",
                "Bus": "Star Travels",
                "SeatNumbers": 2,
                "Payment": "Confirmed",
                "TotalAmount": 3200,
                "Time": "09:45 PM"
            }
        }"#;

        let reply: SearchReply = serde_json::from_str(json).unwrap();
        let record = reply.booking.unwrap().into_record();
        assert_eq!(record.id, "LGN-AB12CD34E");
        assert_eq!(record.passenger_name, "A. Perera");
        assert_eq!(record.origin, "Nintavur");
        assert_eq!(record.destination, "Kandy");
        assert_eq!(record.seat_count, 2);
        assert_eq!(record.total_cost, 3200);
        assert_eq!(record.payment_status, PaymentStatus::Confirmed);
        assert_eq!(record.departure_time.as_deref(), Some("09:45 PM"));
        assert!(record.created_at.is_none());
    }

    #[test]
    fn test_decode_search_reply_with_string_cells() {
        // Same columns, but the sheet hands numbers back as text.
        let json = r#"{
            "success": true,
            "booking": {
                "BookingID": "LGN-ZZ99YY88X",
                "Name": "K. Silva",
                "Phone": "94770000000",
                "Pickup": "Kalmunai",
                "Drop": "Badulla",
                "Date": "2025-04-10",
                "Bus": "RS Express",
                "SeatNumbers": "3",
                "Payment": "pending",
                "TotalAmount": "8,700",
                "Timestamp": "2025-04-01T08:30:00+05:30"
            }
        }"#;

        let reply: SearchReply = serde_json::from_str(json).unwrap();
        let record = reply.booking.unwrap().into_record();
        assert_eq!(record.seat_count, 3);
        assert_eq!(record.total_cost, 8700);
        assert_eq!(record.payment_status, PaymentStatus::Pending);
        assert!(record.departure_time.is_none());
        assert!(record.created_at.is_some());
    }

    #[test]
    fn test_decode_not_found_reply() {
        let json = r#"{ "success": false, "message": "Record not found." }"#;
        let reply: SearchReply = serde_json::from_str(json).unwrap();
        assert!(!reply.success);
        assert!(reply.booking.is_none());
        assert_eq!(reply.message.as_deref(), Some("Record not found."));
    }

    #[test]
    fn test_decode_unrecognized_shape_is_an_error() {
        let err = serde_json::from_str::<SearchReply>("[1, 2, 3]");
        assert!(err.is_err());
    }
}
