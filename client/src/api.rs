use anyhow::{Context, Result, bail};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// Per-request timeout shared by every service client.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

pub(crate) trait HandleApiError: Sized {
    async fn handle_error(self) -> anyhow::Result<Self>;
}

impl HandleApiError for Response {
    async fn handle_error(self) -> anyhow::Result<Self> {
        let status = self.status();
        if status.is_client_error() || status.is_server_error() {
            let url = self.url().clone();
            let text = self.text().await?;
            warn!("{} answered {}: {}", url, status, text);
            Err(anyhow::anyhow!("Api Error {}. {}", status.as_str(), text))
        } else {
            Ok(self)
        }
    }
}

/// Base URL plus the HTTP client used to reach one REST service.
#[derive(Debug, Clone)]
pub(crate) struct RestClient {
    base: Url,
    pub(crate) client: Client,
}

impl RestClient {
    pub(crate) fn new(base: &str) -> Result<Self> {
        let base = Url::parse(base).with_context(|| format!("Invalid service URL '{base}'"))?;
        if base.cannot_be_a_base() {
            bail!("Service URL '{base}' cannot carry a path");
        }

        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { base, client })
    }

    pub(crate) fn base(&self) -> &Url {
        &self.base
    }

    /// Appends `segments` to the base path, percent-encoding each one.
    pub(crate) fn url<I>(&self, segments: I) -> Result<Url>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| anyhow::anyhow!("Service URL '{}' cannot carry a path", self.base))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        debug!("GET {}", url);

        let resp = self.client.get(url).send().await?.handle_error().await?;

        Ok(resp.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tracing_test::traced_test;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_url_appends_encoded_segments() {
        let rest = RestClient::new("http://blueos.local:9119/v1.0/").unwrap();
        let url = rest.url(["modem", "id with/slash", "details"]).unwrap();

        assert_eq!(
            url.as_str(),
            "http://blueos.local:9119/v1.0/modem/id%20with%2Fslash/details"
        );
    }

    #[test]
    fn test_rejects_non_base_urls() {
        assert!(RestClient::new("mailto:modem@example.com").is_err());
        assert!(RestClient::new("not a url").is_err());
    }

    #[tokio::test]
    #[traced_test]
    async fn test_error_status_is_propagated_and_logged() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1.0/modem"))
            .respond_with(ResponseTemplate::new(500).set_body_string("serial port busy"))
            .mount(&server)
            .await;

        let rest = RestClient::new(&format!("{}/v1.0", server.uri())).unwrap();
        let err = rest
            .get_json::<serde_json::Value>(rest.url(["modem"]).unwrap())
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Api Error 500. serial port busy");
        assert!(logs_contain("serial port busy"));
    }

    #[tokio::test]
    async fn test_get_json_decodes_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/ping"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": true })))
            .mount(&server)
            .await;

        let rest = RestClient::new(&server.uri()).unwrap();
        let body: serde_json::Value = rest.get_json(rest.url(["ping"]).unwrap()).await.unwrap();

        assert_eq!(body["ok"], true);
    }
}
