use crate::config::HttpConfig;
use crate::utils::error::{ResolverError, Result};
use reqwest::{header::HeaderValue, Client};
use serde::de::DeserializeOwned;
use std::time::Duration;

const DEFAULT_USER_AGENT: &str = concat!("bookshelf-resolver/", env!("CARGO_PKG_VERSION"));

/// Builds the client shared by every source. The timeout bounds each
/// request end to end, so a hung source surfaces as an error instead of
/// stalling the fallback chain.
pub fn build_client(config: &HttpConfig) -> Result<Client> {
    let user_agent = config.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT);
    let user_agent =
        HeaderValue::from_str(user_agent).map_err(|e| ResolverError::InvalidConfigValueError {
            field: "http.user_agent".to_string(),
            value: user_agent.to_string(),
            reason: e.to_string(),
        })?;

    let client = Client::builder()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(user_agent)
        .build()?;
    Ok(client)
}

/// GETs `url` with `query` and decodes a JSON body. Non-2xx statuses are
/// reported as [`ResolverError::SourceError`].
pub(crate) async fn get_json<T: DeserializeOwned>(
    client: &Client,
    source_name: &str,
    url: &str,
    query: &[(&str, &str)],
) -> Result<T> {
    tracing::debug!("[{}] GET {} {:?}", source_name, url, query);
    let response = client
        .get(url)
        .header("Accept", "application/json")
        .query(query)
        .send()
        .await?;

    let status = response.status();
    tracing::debug!("[{}] response status: {}", source_name, status);
    if !status.is_success() {
        return Err(ResolverError::SourceError {
            source_name: source_name.to_string(),
            message: format!("HTTP {}", status),
        });
    }

    let body = response.bytes().await?;
    Ok(serde_json::from_slice(&body)?)
}

/// Joins a configured base URL and an endpoint path.
pub(crate) fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        assert_eq!(
            endpoint("https://api.openbd.jp/v1/", "get"),
            "https://api.openbd.jp/v1/get"
        );
        assert_eq!(
            endpoint("https://api.openbd.jp/v1", "get"),
            "https://api.openbd.jp/v1/get"
        );
    }

    #[test]
    fn test_build_client_with_defaults() {
        assert!(build_client(&HttpConfig::default()).is_ok());
    }

    #[test]
    fn test_build_client_rejects_header_breaking_user_agent() {
        let config = HttpConfig {
            user_agent: Some("bookshelf\nX-Injected: 1".to_string()),
            ..HttpConfig::default()
        };

        let err = build_client(&config).unwrap_err();
        assert!(matches!(
            err,
            ResolverError::InvalidConfigValueError { ref field, .. } if field == "http.user_agent"
        ));
    }

    #[tokio::test]
    async fn test_get_json_sends_user_agent_and_query() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET)
                .path("/v1/get")
                .query_param("isbn", "9784873119038")
                .header("user-agent", "bookshelf-test/1.0");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!([null]));
        });

        let client = build_client(&HttpConfig {
            timeout_seconds: 5,
            user_agent: Some("bookshelf-test/1.0".to_string()),
        })
        .unwrap();

        let body: Vec<Option<serde_json::Value>> = get_json(
            &client,
            "test",
            &server.url("/v1/get"),
            &[("isbn", "9784873119038")],
        )
        .await
        .unwrap();

        api_mock.assert();
        assert_eq!(body, vec![None]);
    }

    #[tokio::test]
    async fn test_get_json_non_success_is_source_error() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/v1/get");
            then.status(503);
        });

        let client = build_client(&HttpConfig::default()).unwrap();
        let result: Result<serde_json::Value> =
            get_json(&client, "test", &server.url("/v1/get"), &[]).await;

        api_mock.assert();
        match result {
            Err(ResolverError::SourceError { source_name, message }) => {
                assert_eq!(source_name, "test");
                assert!(message.contains("503"));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_get_json_malformed_body_is_serialization_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/v1/get");
            then.status(200).body("<html>maintenance</html>");
        });

        let client = build_client(&HttpConfig::default()).unwrap();
        let result: Result<serde_json::Value> =
            get_json(&client, "test", &server.url("/v1/get"), &[]).await;

        assert!(matches!(result, Err(ResolverError::SerializationError(_))));
    }
}
