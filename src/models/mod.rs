pub mod booking;
pub mod catalog;

pub use booking::{BookingDraft, BookingRecord, PaymentStatus};
pub use catalog::{format_lkr, Catalog, CoachService};
