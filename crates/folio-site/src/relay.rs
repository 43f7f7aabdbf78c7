//! Client for the hosted transactional email relay.
//!
//! The contact form never talks to a mail server itself. It fills a
//! template on the relay with five named values and waits for a status.

use std::rc::Rc;

use async_trait::async_trait;
use serde::Serialize;

use crate::config::RelayConfig;
use crate::error::RelayError;

/// Named values substituted into the relay's message template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateParams {
    pub from_name: String,
    pub from_email: String,
    pub subject: String,
    pub message: String,
    /// The site owner, who receives the message.
    pub to_name: String,
}

/// Status and body returned by the relay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayResponse {
    pub status: u16,
    pub text: String,
}

impl RelayResponse {
    /// 200 is the only status treated as delivered.
    pub fn is_success(&self) -> bool {
        self.status == 200
    }
}

/// Something that can deliver a filled template.
#[async_trait(?Send)]
pub trait EmailRelay {
    async fn send(&self, params: &TemplateParams) -> Result<RelayResponse, RelayError>;
}

/// Shared handle to the active relay.
pub type SharedRelay = Rc<dyn EmailRelay>;

#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a TemplateParams,
}

/// REST client for EmailJS.
#[derive(Debug, Clone)]
pub struct EmailJsClient {
    config: RelayConfig,
    http: reqwest::Client,
}

impl EmailJsClient {
    pub fn new(config: RelayConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    fn request_body(&self, params: &TemplateParams) -> serde_json::Value {
        let request = SendRequest {
            service_id: &self.config.service_id,
            template_id: &self.config.template_id,
            user_id: &self.config.public_key,
            template_params: params,
        };
        // Plain strings only; this cannot fail.
        serde_json::to_value(&request).unwrap_or_default()
    }
}

#[async_trait(?Send)]
impl EmailRelay for EmailJsClient {
    async fn send(&self, params: &TemplateParams) -> Result<RelayResponse, RelayError> {
        if !self.config.is_configured() {
            return Err(RelayError::NotConfigured);
        }

        let response = self
            .http
            .post(self.config.send_url())
            .json(&self.request_body(params))
            .send()
            .await?;

        let status = response.status().as_u16();
        let text = response.text().await?;
        tracing::debug!(status, "Email relay responded");

        Ok(RelayResponse { status, text })
    }
}
