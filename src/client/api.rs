//! Sprout API Client

use anyhow::{Context, Result, bail};
use reqwest::{Client, RequestBuilder, Response};
use serde::{Deserialize, Serialize};

use crate::models::chat::ChatLog;

/// API client for the chat endpoints
pub struct SproutClient {
    client: Client,
    base_url: String,
    token: String,
}

#[derive(Debug, Serialize)]
struct SendMessageBody<'a> {
    message: &'a str,
}

#[derive(Debug, Deserialize)]
struct SendMessageReply {
    response: String,
}

#[derive(Debug, Deserialize)]
struct StatusMessage {
    message: String,
}

impl SproutClient {
    /// Create a new API client
    pub fn new(base_url: &str, token: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        }
    }

    /// Test connection with health check
    pub async fn health(&self) -> Result<bool> {
        let url = format!("{}/", self.base_url);
        let resp = self.client.get(&url).send().await?;
        Ok(resp.status().is_success())
    }

    /// Send a message and return the assistant's reply
    pub async fn send_message(&self, message: &str) -> Result<String> {
        let url = format!("{}/api/chat/send", self.base_url);
        let resp = self
            .authorized(self.client.post(&url))
            .json(&SendMessageBody { message })
            .send()
            .await
            .context("Failed to connect to Sprout API")?;

        let reply: SendMessageReply = Self::checked(resp)
            .await?
            .json()
            .await
            .context("Failed to parse response")?;

        Ok(reply.response)
    }

    /// Fetch the caller's chat log
    pub async fn fetch_history(&self) -> Result<ChatLog> {
        let url = format!("{}/api/history", self.base_url);
        let resp = self
            .authorized(self.client.get(&url))
            .send()
            .await
            .context("Failed to connect to Sprout API")?;

        let log: ChatLog = Self::checked(resp)
            .await?
            .json()
            .await
            .context("Failed to parse response")?;

        Ok(log)
    }

    /// Delete the caller's chat log
    pub async fn clear_history(&self) -> Result<String> {
        let url = format!("{}/api/history", self.base_url);
        let resp = self
            .authorized(self.client.delete(&url))
            .send()
            .await
            .context("Failed to connect to Sprout API")?;

        let status: StatusMessage = Self::checked(resp)
            .await?
            .json()
            .await
            .context("Failed to parse response")?;

        Ok(status.message)
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        builder.header("Authorization", format!("Bearer {}", self.token))
    }

    async fn checked(resp: Response) -> Result<Response> {
        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            bail!("API error ({}): {}", status, body);
        }
        Ok(resp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_send_message_carries_token() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/chat/send"))
            .and(header("Authorization", "Bearer t0ken"))
            .and(body_json(json!({"message": "hello"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"response": "hi!"})))
            .expect(1)
            .mount(&server)
            .await;

        let client = SproutClient::new(&format!("{}/", server.uri()), "t0ken");
        assert_eq!(client.send_message("hello").await.unwrap(), "hi!");
    }

    #[tokio::test]
    async fn test_fetch_history_parses_log() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/history"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "userId": "u1",
                "messages": [
                    {"text": "hello", "sender": "user", "timestamp": "2024-05-01T10:00:00Z"},
                    {"text": "hi!", "sender": "bot", "timestamp": "2024-05-01T10:00:00Z"}
                ]
            })))
            .mount(&server)
            .await;

        let log = SproutClient::new(&server.uri(), "t0ken")
            .fetch_history()
            .await
            .unwrap();
        assert_eq!(log.owner, "u1");
        assert_eq!(log.len(), 2);
    }

    #[tokio::test]
    async fn test_clear_history_returns_message() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/api/history"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"message": "Chat history deleted"})),
            )
            .mount(&server)
            .await;

        let message = SproutClient::new(&server.uri(), "t0ken")
            .clear_history()
            .await
            .unwrap();
        assert_eq!(message, "Chat history deleted");
    }

    #[tokio::test]
    async fn test_error_status_is_reported() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/chat/send"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "message": "Authentication failed",
                "error": "No token, authorization denied"
            })))
            .mount(&server)
            .await;

        let err = SproutClient::new(&server.uri(), "")
            .send_message("hello")
            .await
            .unwrap_err();
        assert!(err.to_string().contains("401"));
    }

    #[tokio::test]
    async fn test_health() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        assert!(SproutClient::new(&server.uri(), "").health().await.unwrap());
    }
}
