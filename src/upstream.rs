use anyhow::{anyhow, Context, Result};
use axum::http::StatusCode;
use serde_json::Value as JsonValue;
use std::time::Duration;
use url::Url;

use crate::config::Config;

/// Outcome of one upstream request that completed at the HTTP level
#[derive(Debug)]
pub enum UpstreamReply {
    /// Status 200 with a parseable JSON body
    Success(JsonValue),
    /// Any other status; the body is discarded
    Failure(StatusCode),
}

/// Shareable client for the Spoonacular API, for use across async handlers
///
/// Owns the HTTP connection pool, the base URL and the API key. The key is
/// appended as the final query parameter of every request and must never
/// appear anywhere else, in particular not in error text or logs.
#[derive(Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
    base_url: Url,
    api_key: String,
}

impl std::fmt::Debug for UpstreamClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpstreamClient")
            .field("http", &self.http)
            .field("base_url", &self.base_url)
            .field("api_key", &"[redacted]")
            .finish()
    }
}

impl UpstreamClient {
    /// Create a new upstream client from configuration
    ///
    /// The request timeout is only set when configured; without it the
    /// client places no overall bound on an upstream call.
    pub fn from_config(config: &Config) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.upstream_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder.build().context("Failed to build HTTP client")?;

        let base_url = Url::parse(&config.upstream_base_url)
            .context("SPOONACULAR_BASE_URL must be a valid URL")?;

        Ok(Self {
            http,
            base_url,
            api_key: config.api_key.clone(),
        })
    }

    /// Build the full upstream URL for a request
    ///
    /// Path segments and query values go through standard percent-encoding,
    /// so client-supplied values cannot break out of their query pair. The
    /// declared query parameters keep their given order and the API key is
    /// always the final pair.
    pub fn build_url(&self, path: &str, query: &[(String, String)]) -> Result<Url> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| anyhow!("Upstream base URL cannot be a base"))?;
            segments.pop_if_empty();
            for segment in path.split('/') {
                segments.push(segment);
            }
        }
        {
            let mut pairs = url.query_pairs_mut();
            for (name, value) in query {
                pairs.append_pair(name, value);
            }
            pairs.append_pair("apiKey", &self.api_key);
        }
        Ok(url)
    }

    /// Issue a single GET against the upstream API
    ///
    /// A 200 response is parsed as JSON; any other status is reported as
    /// `UpstreamReply::Failure` without reading the body. Transport-level
    /// failures (connect, DNS, timeout, malformed body) surface as errors
    /// with the request URL stripped, since the URL carries the API key.
    pub async fn get(&self, path: &str, query: &[(String, String)]) -> Result<UpstreamReply> {
        let url = self.build_url(path, query)?;

        let response = self.http.get(url).send().await.map_err(strip_url)?;

        let status = response.status();
        if status != StatusCode::OK {
            return Ok(UpstreamReply::Failure(status));
        }

        let body = response.json::<JsonValue>().await.map_err(strip_url)?;
        Ok(UpstreamReply::Success(body))
    }
}

fn strip_url(err: reqwest::Error) -> anyhow::Error {
    anyhow::Error::new(err.without_url())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(base_url: &str) -> UpstreamClient {
        let config = Config {
            api_key: "test-key".to_string(),
            upstream_base_url: base_url.to_string(),
            upstream_timeout_secs: Some(5),
            service_port: 3000,
            service_host: "0.0.0.0".to_string(),
        };
        UpstreamClient::from_config(&config).expect("Failed to create upstream client")
    }

    #[test]
    fn test_build_url_appends_credential_last() {
        let client = test_client("https://api.spoonacular.com");

        let url = client
            .build_url(
                "recipes/complexSearch",
                &[
                    ("query".to_string(), "pasta".to_string()),
                    ("maxFat".to_string(), "25".to_string()),
                    ("number".to_string(), "2".to_string()),
                ],
            )
            .unwrap();

        assert_eq!(url.path(), "/recipes/complexSearch");
        assert_eq!(
            url.query(),
            Some("query=pasta&maxFat=25&number=2&apiKey=test-key")
        );
    }

    #[test]
    fn test_build_url_encodes_client_values() {
        let client = test_client("https://api.spoonacular.com");

        let url = client
            .build_url(
                "recipes/complexSearch",
                &[("query".to_string(), "mac & cheese".to_string())],
            )
            .unwrap();

        let query = url.query().unwrap();
        assert!(query.contains("query=mac+%26+cheese"));
        assert!(query.ends_with("apiKey=test-key"));
    }

    #[test]
    fn test_build_url_with_path_identifier() {
        let client = test_client("https://api.spoonacular.com");

        let url = client.build_url("recipes/716429/similar", &[]).unwrap();

        assert_eq!(url.path(), "/recipes/716429/similar");
        assert_eq!(url.query(), Some("apiKey=test-key"));
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        let config = Config {
            api_key: "test-key".to_string(),
            upstream_base_url: "not a url".to_string(),
            upstream_timeout_secs: None,
            service_port: 3000,
            service_host: "0.0.0.0".to_string(),
        };

        let result = UpstreamClient::from_config(&config);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("SPOONACULAR_BASE_URL"));
    }

    #[tokio::test]
    async fn test_get_success_parses_json() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/food/jokes/random"))
            .and(query_param("apiKey", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"text": "a joke"})))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let reply = client.get("food/jokes/random", &[]).await.unwrap();

        match reply {
            UpstreamReply::Success(body) => assert_eq!(body, json!({"text": "a joke"})),
            other => panic!("Expected success, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_get_non_success_status_is_reported() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/food/jokes/random"))
            .respond_with(ResponseTemplate::new(402))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let reply = client.get("food/jokes/random", &[]).await.unwrap();

        match reply {
            UpstreamReply::Failure(status) => assert_eq!(status, StatusCode::PAYMENT_REQUIRED),
            other => panic!("Expected failure status, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_get_transport_error_does_not_leak_credential() {
        // Nothing listens on port 1, so the request fails at connect time.
        let client = test_client("http://127.0.0.1:1");

        let error = client.get("food/jokes/random", &[]).await.unwrap_err();
        let description = format!("{:#}", error);

        assert!(!description.is_empty());
        assert!(!description.contains("test-key"));
    }

    #[tokio::test]
    async fn test_get_malformed_body_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/food/jokes/random"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let result = client.get("food/jokes/random", &[]).await;

        assert!(result.is_err());
        assert!(!format!("{:#}", result.unwrap_err()).contains("test-key"));
    }
}
