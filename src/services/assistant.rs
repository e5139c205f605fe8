use crate::models::{format_lkr, Catalog};
use crate::services::ai::LlmProvider;

pub const FALLBACK_REPLY: &str =
    "I'm sorry, I'm having trouble connecting to my travel database. Please try again later.";

const SUPPORT_HOURS: &str = "7:00 AM - 10:00 PM";
const SUPPORT_CONTACT: &str = "Mr. Fawas (+94701362527)";

/// Fixed instruction for the travel assistant. The service list is rendered
/// from the catalog so the chat quotes the same prices the fare calculator
/// charges.
pub fn advice_prompt(catalog: &Catalog) -> String {
    let mut services = String::new();
    for s in &catalog.services {
        services.push_str(&format!("- {}: LKR {}\n", s.name, format_lkr(s.price)));
    }

    format!(
        "You are Lagan Bus Travel Assistant. \
         You help users with routes in Sri Lanka, especially Nintavur and Kandy. \
         Keep responses concise, friendly, and helpful. \
         Mention that for official bookings, they should use the booking form on the main page.\n\n\
         Bus services and prices:\n{services}\n\
         Routes: Primary routes connect Nintavur to Kandy, Badulla, Nuwara Eliya, etc.\n\
         Support Hours: {SUPPORT_HOURS}\n\
         Support Contact: {SUPPORT_CONTACT}"
    )
}

/// Forward a single user turn to the advice provider. Any provider failure
/// degrades to the fixed fallback reply; the caller never sees an error.
pub async fn advise(llm: &dyn LlmProvider, catalog: &Catalog, user_text: &str) -> String {
    match llm.complete(&advice_prompt(catalog), user_text).await {
        Ok(reply) => reply,
        Err(e) => {
            tracing::error!(error = %e, "advice provider call failed");
            FALLBACK_REPLY.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_lists_catalog_prices() {
        let prompt = advice_prompt(&Catalog::standard());
        assert!(prompt.contains("- Star Travels: LKR 1,600"));
        assert!(prompt.contains("- RS Express: LKR 2,900"));
        assert!(prompt.contains("Support Hours: 7:00 AM - 10:00 PM"));
        assert!(prompt.contains("Mr. Fawas"));
    }
}
