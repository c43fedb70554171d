//! Build-time settings and company master data.

#[cfg(debug_assertions)]
const DEFAULT_CHAT_WEBHOOK_URL: &str = "http://localhost:5678/webhook/brandt-chat/chat";

#[cfg(not(debug_assertions))]
const DEFAULT_CHAT_WEBHOOK_URL: &str = "https://automation.brandt-logistik.de/webhook/brandt-chat/chat";

const DEFAULT_QUOTE_RECIPIENT: &str = "anfrage@brandt-logistik.de";

/// Webhook the chat widget posts to. Override with `CHAT_WEBHOOK_URL` at build time.
pub fn get_chat_webhook_url() -> &'static str {
    option_env!("CHAT_WEBHOOK_URL").unwrap_or(DEFAULT_CHAT_WEBHOOK_URL)
}

/// Address quote requests are mailed to. Override with `QUOTE_RECIPIENT` at build time.
pub fn get_quote_recipient() -> &'static str {
    option_env!("QUOTE_RECIPIENT").unwrap_or(DEFAULT_QUOTE_RECIPIENT)
}

pub mod storage_keys {
    pub const LANGUAGE: &str = "brandt.language";
    pub const COOKIE_PREFERENCES: &str = "brandt.cookie_preferences";
    pub const CHAT_SESSION: &str = "brandt.chat_session";
}

pub mod company {
    pub const NAME: &str = "Brandt Logistik GmbH";
    pub const SHORT_NAME: &str = "Brandt Logistik";
    pub const STREET: &str = "Hafenstraße 24";
    pub const POSTAL_CODE: &str = "28197";
    pub const CITY: &str = "Bremen";
    pub const PHONE: &str = "+49 421 555 310";
    pub const EMAIL: &str = "info@brandt-logistik.de";
    pub const MANAGING_DIRECTOR: &str = "Jana Brandt";
    pub const REGISTER_COURT: &str = "Amtsgericht Bremen";
    pub const REGISTER_NUMBER: &str = "HRB 31742";
    pub const VAT_ID: &str = "DE 318 447 291";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_usable_urls_and_addresses() {
        assert!(get_chat_webhook_url().starts_with("http"));
        assert!(get_quote_recipient().contains('@'));
    }
}
