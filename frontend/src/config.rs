use thiserror::Error;

pub const EMAILJS_SEND_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

// Fallbacks used when the build environment does not override them.
const DEFAULT_SERVICE_ID: &str = "service_ey81dlo";
const DEFAULT_TEMPLATE_ID: &str = "template_ltkp4sr";
const DEFAULT_PUBLIC_KEY: &str = "0iORqeR7J_GxuaDIY";

/// How often the featured testimonial advances on its own.
pub const CAROUSEL_INTERVAL_MS: u32 = 6_000;
/// How long a success/error banner stays up before the form goes back to idle.
pub const STATUS_RESET_MS: u32 = 4_000;

pub const WHATSAPP_GROUP_LINK: &str = "https://chat.whatsapp.com/JspuEE7kxMV6aMS3LedY7R?mode=ems_wa_t";
pub const CONTACT_EMAIL: &str = "bebesitterbrasil@gmail.com";
pub const CONTACT_PHONE: &str = "(71) 98318-1133";
pub const WHATSAPP_GREETING: &str = "Olá! Quero saber mais sobre o curso Bebê Sitter.";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("EmailJS {0} is empty")]
    Empty(&'static str),
    #[error("EmailJS {0} contains whitespace")]
    Whitespace(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailJsConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

impl EmailJsConfig {
    /// Reads identifiers baked in at build time, e.g.
    /// `BEBE_SITTER_EMAILJS_SERVICE_ID=service_x trunk build --release`.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::new(
            option_env!("BEBE_SITTER_EMAILJS_SERVICE_ID").unwrap_or(DEFAULT_SERVICE_ID),
            option_env!("BEBE_SITTER_EMAILJS_TEMPLATE_ID").unwrap_or(DEFAULT_TEMPLATE_ID),
            option_env!("BEBE_SITTER_EMAILJS_PUBLIC_KEY").unwrap_or(DEFAULT_PUBLIC_KEY),
        )
    }

    pub fn new(service_id: &str, template_id: &str, public_key: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            service_id: checked("service id", service_id)?,
            template_id: checked("template id", template_id)?,
            public_key: checked("public key", public_key)?,
        })
    }
}

fn checked(what: &'static str, value: &str) -> Result<String, ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Empty(what));
    }
    if value.chars().any(char::is_whitespace) {
        return Err(ConfigError::Whitespace(what));
    }
    Ok(value.to_string())
}

/// `https://wa.me/` link for the contact phone with a pre-filled greeting.
pub fn whatsapp_chat_link() -> String {
    let digits: String = CONTACT_PHONE.chars().filter(char::is_ascii_digit).collect();
    format!(
        "https://wa.me/55{}?text={}",
        digits,
        urlencoding::encode(WHATSAPP_GREETING)
    )
}

#[cfg(debug_assertions)]
pub fn log_level() -> log::Level {
    log::Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> log::Level {
    log::Level::Info
}
