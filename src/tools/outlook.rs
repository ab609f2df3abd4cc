// ABOUTME: SendOutlookEmail - sends mail through the Microsoft Graph sendMail API.
// ABOUTME: Authenticated with a bearer access token captured at construction.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{default_http_client, env_var};
use crate::error::{ConfigError, ToolError};
use crate::schema::{Field, InputSchema};
use crate::tool::{Describe, Descriptor, Tool};

const GRAPH_API_URL: &str = "https://graph.microsoft.com/v1.0";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SendEmailInput {
    pub recipient: String,
    pub subject: String,
    pub body: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SendMailRequest<'a> {
    message: GraphMessage<'a>,
    save_to_sent_items: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GraphMessage<'a> {
    subject: &'a str,
    body: GraphBody<'a>,
    to_recipients: Vec<GraphRecipient<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GraphBody<'a> {
    content_type: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GraphRecipient<'a> {
    email_address: GraphAddress<'a>,
}

#[derive(Debug, Serialize)]
struct GraphAddress<'a> {
    address: &'a str,
}

/// Graph API error response.
#[derive(Debug, Deserialize)]
struct GraphError {
    error: GraphErrorDetail,
}

#[derive(Debug, Deserialize)]
struct GraphErrorDetail {
    message: String,
}

/// Sends an email on behalf of a user via Microsoft Graph.
pub struct SendOutlookEmail {
    descriptor: Descriptor,
    schema: InputSchema,
    access_token: String,
    user_principal_name: String,
    base_url: String,
    http: reqwest::Client,
}

impl SendOutlookEmail {
    /// Create a tool sending as `user_principal_name` with the given access token.
    pub fn new(
        access_token: impl Into<String>,
        user_principal_name: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            descriptor: Descriptor::new(
                "Send Outlook Email",
                "Use this tool to send an Outlook email via Microsoft Graph",
            ),
            schema: InputSchema::new()
                .field(Field::email("recipient").describe("The email address of the recipient"))
                .field(Field::string("subject").describe("The subject of the email"))
                .field(Field::string("body").describe("The body content of the email")),
            access_token: access_token.into(),
            user_principal_name: user_principal_name.into(),
            base_url: GRAPH_API_URL.to_string(),
            http: default_http_client()?,
        })
    }

    /// Create from the OUTLOOK_ACCESS_TOKEN and OUTLOOK_USER_PRINCIPAL_NAME
    /// environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let token = env_var("OUTLOOK_ACCESS_TOKEN")?;
        let upn = env_var("OUTLOOK_USER_PRINCIPAL_NAME")?;
        Self::new(token, upn)
    }

    /// Use a custom reqwest client.
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.http = client;
        self
    }

    /// Point at a different Graph endpoint, e.g. a national cloud.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    fn send_mail_url(&self) -> String {
        format!(
            "{}/users/{}/sendMail",
            self.base_url,
            urlencoding::encode(&self.user_principal_name)
        )
    }

    async fn send_mail(&self, input: &SendEmailInput) -> Result<(), anyhow::Error> {
        let payload = SendMailRequest {
            message: GraphMessage {
                subject: &input.subject,
                body: GraphBody {
                    content_type: "Text",
                    content: &input.body,
                },
                to_recipients: vec![GraphRecipient {
                    email_address: GraphAddress {
                        address: &input.recipient,
                    },
                }],
            },
            save_to_sent_items: "true",
        };

        let response = self
            .http
            .post(self.send_mail_url())
            .bearer_auth(&self.access_token)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<GraphError>(&text)
                .map(|e| e.error.message)
                .unwrap_or(text);
            anyhow::bail!("Graph API error ({}): {}", status.as_u16(), message);
        }

        Ok(())
    }
}

impl Describe for SendOutlookEmail {
    fn descriptor(&self) -> &Descriptor {
        &self.descriptor
    }

    fn schema(&self) -> &InputSchema {
        &self.schema
    }
}

#[async_trait]
impl Tool for SendOutlookEmail {
    type Input = SendEmailInput;

    async fn invoke(&self, input: SendEmailInput) -> Result<String, ToolError> {
        match self.send_mail(&input).await {
            Ok(()) => {
                debug!(recipient = %input.recipient, "email sent");
                Ok("Email sent successfully.".to_string())
            }
            Err(e) => {
                warn!(recipient = %input.recipient, error = %e, "email delivery failed");
                Err(ToolError::Delivery(e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_mail_url_encodes_principal() {
        let tool = SendOutlookEmail::new("token", "first last@example.com")
            .unwrap()
            .with_base_url("http://localhost:9999/");
        assert_eq!(
            tool.send_mail_url(),
            "http://localhost:9999/users/first%20last%40example.com/sendMail"
        );
    }

    #[test]
    fn test_payload_shape() {
        let payload = SendMailRequest {
            message: GraphMessage {
                subject: "Hi",
                body: GraphBody {
                    content_type: "Text",
                    content: "Hello",
                },
                to_recipients: vec![GraphRecipient {
                    email_address: GraphAddress {
                        address: "a@example.com",
                    },
                }],
            },
            save_to_sent_items: "true",
        };

        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            serde_json::json!({
                "message": {
                    "subject": "Hi",
                    "body": { "contentType": "Text", "content": "Hello" },
                    "toRecipients": [{ "emailAddress": { "address": "a@example.com" } }]
                },
                "saveToSentItems": "true"
            })
        );
    }

    #[test]
    fn test_descriptor() {
        let tool = SendOutlookEmail::new("token", "me@example.com").unwrap();
        assert_eq!(tool.name(), "Send Outlook Email");
        assert_eq!(
            tool.schema().to_json_schema()["properties"]["recipient"]["format"],
            "email"
        );
    }
}
