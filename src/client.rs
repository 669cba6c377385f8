//! BizHealth API client
//!
//! Implements the three endpoints the dashboard consumes:
//! - `GET /summary` - metrics, health score, alerts
//! - `GET /trends` - chart series (opaque)
//! - `POST /add-data` - new financial record
//!
//! The origin comes from `Config`, so tests can aim it at a mock server.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::Config;
use crate::error::{DashboardError, Result};
use crate::types::{ApiErrorBody, FormEntryPayload, SummaryPayload, TrendsPayload};

/// BizHealth API client
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: Config,
}

impl ApiClient {
    /// Create new client for the configured origin
    pub fn new(config: Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get aggregate metrics, health score and alerts
    pub async fn get_summary(&self) -> Result<SummaryPayload> {
        self.get("/summary").await
    }

    /// Get the trends series for the chart
    pub async fn get_trends(&self) -> Result<TrendsPayload> {
        self.get("/trends").await
    }

    /// Record a new data entry
    pub async fn add_data(&self, entry: &FormEntryPayload) -> Result<serde_json::Value> {
        self.post("/add-data", entry).await
    }

    /// Perform GET request
    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.config.endpoint(path);
        log::debug!("GET {url}");

        let response = self.http.get(&url).send().await?;

        Self::handle_response(response).await
    }

    /// Perform POST request with a JSON body
    async fn post<T: DeserializeOwned, B: Serialize>(&self, path: &str, body: &B) -> Result<T> {
        let url = self.config.endpoint(path);
        log::debug!("POST {url}");

        let response = self
            .http
            .post(&url)
            .json(body)
            .send()
            .await?;

        Self::handle_response(response).await
    }

    /// Handle API response, checking for errors.
    ///
    /// The body is decoded separately from the transport so a malformed
    /// payload surfaces as `DashboardError::Json`.
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(DashboardError::Api {
                status: status.as_u16(),
                message: Self::error_message(&body),
            });
        }

        Ok(serde_json::from_str(&body)?)
    }

    /// Server-supplied `{error}` text, or the raw body when it has another shape
    fn error_message(body: &str) -> String {
        match serde_json::from_str::<ApiErrorBody>(body) {
            Ok(err) => err.error,
            Err(_) if body.trim().is_empty() => "Unknown error".to_string(),
            Err(_) => body.trim().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::summary_json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> ApiClient {
        ApiClient::new(Config::new(server.uri()))
    }

    #[test]
    fn test_error_message_shapes() {
        assert_eq!(ApiClient::error_message(r#"{"error":"Invalid date"}"#), "Invalid date");
        assert_eq!(ApiClient::error_message("Internal Server Error\n"), "Internal Server Error");
        assert_eq!(ApiClient::error_message(""), "Unknown error");
    }

    #[tokio::test]
    async fn test_get_summary() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/summary"))
            .respond_with(ResponseTemplate::new(200).set_body_json(summary_json(55.0, &["WARNING: low stock"])))
            .expect(1)
            .mount(&server)
            .await;

        let summary = client_for(&server).get_summary().await.unwrap();
        assert_eq!(summary.health_score, 55.0);
        assert_eq!(summary.alerts.len(), 1);
    }

    #[tokio::test]
    async fn test_malformed_body_is_json_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/summary"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let err = client_for(&server).get_summary().await.unwrap_err();
        assert!(matches!(err, DashboardError::Json(_)));
    }

    #[tokio::test]
    async fn test_add_data_posts_json() {
        let server = MockServer::start().await;
        let entry = FormEntryPayload {
            date: "2026-03-01".into(),
            revenue: 2500.0,
            expenses: 1800.0,
            inventory_cost: 300.0,
            category: "Retail".into(),
        };

        Mock::given(method("POST"))
            .and(path("/add-data"))
            .and(header("content-type", "application/json"))
            .and(body_json(serde_json::json!({
                "date": "2026-03-01",
                "revenue": 2500.0,
                "expenses": 1800.0,
                "inventory_cost": 300.0,
                "category": "Retail"
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "message": "Data recorded successfully",
                "status": "success"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let reply = client_for(&server).add_data(&entry).await.unwrap();
        assert_eq!(reply["status"], "success");
    }

    #[tokio::test]
    async fn test_add_data_sends_nan_as_null() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/add-data"))
            .and(header("content-type", "application/json"))
            .and(body_json(serde_json::json!({
                "date": "",
                "revenue": null,
                "expenses": 12.5,
                "inventory_cost": null,
                "category": "General"
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({})))
            .expect(1)
            .mount(&server)
            .await;

        let entry = FormEntryPayload {
            date: String::new(),
            revenue: f64::NAN,
            expenses: 12.5,
            inventory_cost: f64::NAN,
            category: "General".into(),
        };
        client_for(&server).add_data(&entry).await.unwrap();
    }

    #[tokio::test]
    async fn test_add_data_surfaces_server_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/add-data"))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({"error": "Invalid date"})))
            .mount(&server)
            .await;

        let entry = FormEntryPayload {
            date: "yesterday".into(),
            revenue: 1.0,
            expenses: 1.0,
            inventory_cost: 1.0,
            category: String::new(),
        };
        let err = client_for(&server).add_data(&entry).await.unwrap_err();
        match err {
            DashboardError::Api { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "Invalid date");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_unreachable_server_is_http_error() {
        let client = ApiClient::new(Config::new("http://127.0.0.1:9"));
        let err = client.get_trends().await.unwrap_err();
        assert!(matches!(err, DashboardError::Http(_)));
    }
}
