use gloo_net::http::Request;
use serde::Serialize;
use thiserror::Error;

use super::phone::digits_only;
use super::validation::FormFields;
use crate::config::{EmailJsConfig, EMAILJS_SEND_URL};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ConsentAnswer {
    #[serde(rename = "Aceito")]
    Accepted,
    #[serde(rename = "Não aceito")]
    Declined,
}

/// Variables the EmailJS template interpolates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateParams {
    pub from_name: String,
    pub from_email: String,
    pub phone: String,
    pub consent: ConsentAnswer,
}

impl TemplateParams {
    pub fn from_fields(fields: &FormFields) -> Self {
        Self {
            from_name: fields.name.clone(),
            from_email: fields.email.clone(),
            phone: digits_only(&fields.phone),
            consent: if fields.consent {
                ConsentAnswer::Accepted
            } else {
                ConsentAnswer::Declined
            },
        }
    }
}

#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a TemplateParams,
}

#[derive(Debug, Error)]
pub enum SendError {
    #[error("could not encode request: {0}")]
    Encode(String),
    #[error("request failed: {0}")]
    Network(String),
    #[error("email service answered {status}: {body}")]
    Rejected { status: u16, body: String },
}

/// Delivers a lead somewhere. Any error means the lead was not delivered.
#[allow(async_fn_in_trait)]
pub trait LeadMailer {
    async fn send(&self, params: &TemplateParams) -> Result<(), SendError>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct EmailJsClient {
    config: EmailJsConfig,
}

impl EmailJsClient {
    pub fn new(config: EmailJsConfig) -> Self {
        Self { config }
    }

    fn request_body<'a>(&'a self, params: &'a TemplateParams) -> SendRequest<'a> {
        SendRequest {
            service_id: &self.config.service_id,
            template_id: &self.config.template_id,
            user_id: &self.config.public_key,
            template_params: params,
        }
    }
}

impl LeadMailer for EmailJsClient {
    async fn send(&self, params: &TemplateParams) -> Result<(), SendError> {
        let response = Request::post(EMAILJS_SEND_URL)
            .json(&self.request_body(params))
            .map_err(|e| SendError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| SendError::Network(e.to_string()))?;

        if response.ok() {
            Ok(())
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(SendError::Rejected { status, body })
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn lead(consent: bool) -> FormFields {
        FormFields {
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            phone: "(71) 98318-1133".to_string(),
            consent,
        }
    }

    #[test]
    fn template_params_carry_digits_and_consent_label() {
        let params = TemplateParams::from_fields(&lead(true));
        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({
                "from_name": "Ana",
                "from_email": "ana@example.com",
                "phone": "71983181133",
                "consent": "Aceito",
            })
        );

        let declined = TemplateParams::from_fields(&lead(false));
        assert_eq!(serde_json::to_value(declined.consent).unwrap(), json!("Não aceito"));
    }

    #[test]
    fn request_body_matches_emailjs_send_api() {
        let config = EmailJsConfig::new("service_a", "template_b", "key_c").unwrap();
        let client = EmailJsClient::new(config);
        let params = TemplateParams::from_fields(&lead(true));

        let body = serde_json::to_value(client.request_body(&params)).unwrap();
        assert_eq!(body["service_id"], "service_a");
        assert_eq!(body["template_id"], "template_b");
        assert_eq!(body["user_id"], "key_c");
        assert_eq!(body["template_params"]["from_email"], "ana@example.com");
    }
}
