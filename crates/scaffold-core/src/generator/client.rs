//! HTTP client for the remote project generator
//!
//! The generator exposes three endpoints, all plain unauthenticated GETs:
//! - `config`: framework versions, boms and templates (YAML)
//! - `modules/<version>`: modules compatible with a framework version (YAML)
//! - `app?<query>`: zip archive of the generated project

use super::model::{GeneratorConfig, Module};
use crate::project::ProjectDescriptor;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use thiserror::Error;
use url::Url;

/// Body fragment served by the router when the generator is down
pub const UNAVAILABLE_MARKER: &str = "Application is not available";

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("invalid generator URL {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("URL cannot have path segments: {0}")]
    NotABase(Url),

    #[error("failed to set up the HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request to {url} failed: {source}")]
    Request {
        url: Url,
        #[source]
        source: reqwest::Error,
    },

    #[error("Generator service is not available ({url})")]
    Unavailable { url: Url },

    #[error("{url} answered with HTTP {status}")]
    Status { url: Url, status: StatusCode },

    #[error("failed to parse response from {url}: {source}")]
    Parse {
        url: Url,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Decode a YAML body, treating the unavailability page as an error of its own
pub fn decode_body<T: DeserializeOwned>(url: &Url, body: &str) -> Result<T, GeneratorError> {
    if body.contains(UNAVAILABLE_MARKER) {
        return Err(GeneratorError::Unavailable { url: url.clone() });
    }
    serde_yaml::from_str(body).map_err(|source| GeneratorError::Parse {
        url: url.clone(),
        source,
    })
}

/// Client bound to one generator base URL
pub struct GeneratorClient {
    base: Url,
    client: reqwest::Client,
}

impl GeneratorClient {
    /// Create a new client with a custom user agent
    pub fn new(base_url: &str, user_agent: &str) -> Result<Self, GeneratorError> {
        let base = Url::parse(base_url).map_err(|source| GeneratorError::InvalidUrl {
            url: base_url.to_string(),
            source,
        })?;
        if base.cannot_be_a_base() {
            return Err(GeneratorError::NotABase(base));
        }

        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .build()
            .map_err(GeneratorError::Client)?;

        Ok(Self { base, client })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// Build `<base>/<path>`, percent-encoding each `/`-separated segment
    pub fn endpoint(&self, path: &str) -> Result<Url, GeneratorError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| GeneratorError::NotABase(self.base.clone()))?
            .pop_if_empty()
            .extend(path.split('/'));
        Ok(url)
    }

    async fn get(&self, url: &Url) -> Result<reqwest::Response, GeneratorError> {
        self.client
            .get(url.clone())
            .send()
            .await
            .map_err(|source| GeneratorError::Request {
                url: url.clone(),
                source,
            })
    }

    /// Fetch and decode a YAML document from `<base>/<path>`
    pub async fn fetch_yaml<T: DeserializeOwned>(&self, path: &str) -> Result<T, GeneratorError> {
        let url = self.endpoint(path)?;
        self.fetch_yaml_at(url).await
    }

    async fn fetch_yaml_at<T: DeserializeOwned>(&self, url: Url) -> Result<T, GeneratorError> {
        let response = self.get(&url).await?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|source| GeneratorError::Request {
                url: url.clone(),
                source,
            })?;

        // The unavailability page comes back with an error status
        if !status.is_success() && !body.contains(UNAVAILABLE_MARKER) {
            return Err(GeneratorError::Status { url, status });
        }
        decode_body(&url, &body)
    }

    pub async fn fetch_config(&self) -> Result<GeneratorConfig, GeneratorError> {
        self.fetch_yaml("config").await
    }

    pub async fn fetch_modules(&self, version: &str) -> Result<Vec<Module>, GeneratorError> {
        self.fetch_yaml_at(self.modules_url(version)?).await
    }

    /// `<base>/modules/<version>`, the version kept as a single segment
    pub fn modules_url(&self, version: &str) -> Result<Url, GeneratorError> {
        let mut url = self.endpoint("modules")?;
        url.path_segments_mut()
            .map_err(|_| GeneratorError::NotABase(self.base.clone()))?
            .push(version);
        Ok(url)
    }

    /// `<base>/app?<query>` for a project
    pub fn app_url(&self, project: &ProjectDescriptor) -> Result<Url, GeneratorError> {
        let mut url = self.endpoint("app")?;
        {
            let mut query = url.query_pairs_mut();
            for (key, value) in project.query_pairs() {
                query.append_pair(key, value);
            }
        }
        Ok(url)
    }

    /// Download the generated project archive
    pub async fn download_app(
        &self,
        project: &ProjectDescriptor,
    ) -> Result<(Url, Vec<u8>), GeneratorError> {
        let url = self.app_url(project)?;
        let response = self.get(&url).await?;

        if !response.status().is_success() {
            return Err(GeneratorError::Status {
                url,
                status: response.status(),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|source| GeneratorError::Request {
                url: url.clone(),
                source,
            })?;
        Ok((url, bytes.to_vec()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::testing::serve_once;
    use crate::project::ProjectBuilder;

    fn client(base: &str) -> GeneratorClient {
        GeneratorClient::new(base, "snowdrop-scaffold/1.0").unwrap()
    }

    #[test]
    fn test_endpoint_appends_segments() {
        let c = client("http://generator.example.com");
        assert_eq!(
            c.endpoint("config").unwrap().as_str(),
            "http://generator.example.com/config"
        );

        let c = client("http://generator.example.com/api/");
        assert_eq!(
            c.endpoint("modules/2.1.0").unwrap().as_str(),
            "http://generator.example.com/api/modules/2.1.0"
        );
    }

    #[test]
    fn test_modules_url_keeps_version_whole() {
        let c = client("http://generator.example.com");
        assert_eq!(
            c.modules_url("2.1.0.RELEASE").unwrap().as_str(),
            "http://generator.example.com/modules/2.1.0.RELEASE"
        );
        assert_eq!(
            c.modules_url("a/b").unwrap().as_str(),
            "http://generator.example.com/modules/a%2Fb"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(matches!(
            GeneratorClient::new("not a url", "ua"),
            Err(GeneratorError::InvalidUrl { .. })
        ));
        assert!(matches!(
            GeneratorClient::new("mailto:someone@example.com", "ua"),
            Err(GeneratorError::NotABase(_))
        ));
    }

    #[test]
    fn test_decode_body_detects_unavailable_service() {
        let url = Url::parse("http://generator.example.com/config").unwrap();
        let body = "<html><h1>Application is not available</h1></html>";
        let result: Result<GeneratorConfig, _> = decode_body(&url, body);
        assert!(matches!(result, Err(GeneratorError::Unavailable { .. })));
    }

    #[test]
    fn test_decode_body_parses_yaml() {
        let url = Url::parse("http://generator.example.com/config").unwrap();
        let body = "boms:\n  \"2.1.0\":\n    snowdrop: x.y\ntemplates:\n  - name: rest\n";
        let config: GeneratorConfig = decode_body(&url, body).unwrap();
        assert_eq!(config.versions(), vec!["2.1.0"]);
        assert_eq!(config.template_names(), vec!["rest"]);
    }

    #[test]
    fn test_decode_body_reports_parse_errors() {
        let url = Url::parse("http://generator.example.com/modules/2.1.0").unwrap();
        let result: Result<Vec<Module>, _> = decode_body(&url, "name: [unterminated");
        assert!(matches!(result, Err(GeneratorError::Parse { .. })));
    }

    #[test]
    fn test_app_url_encodes_project() {
        let project = ProjectBuilder::new()
            .spring_boot_version("2.1.0")
            .snowdrop_bom("x.y")
            .modules(vec!["web".to_string(), "data-jpa".to_string()])
            .group_id("me.snowdrop")
            .artifact_id("my project")
            .version("1.0.0-SNAPSHOT")
            .package_name("me.snowdrop.myproject")
            .out_dir("demo")
            .build()
            .unwrap();

        let url = client("http://generator.example.com").app_url(&project).unwrap();
        assert_eq!(url.path(), "/app");

        let query = url.query().unwrap();
        assert!(query.contains("artifactid=my+project"));
        assert!(query.ends_with("module=web&module=data-jpa"));
        assert!(!query.contains("template="));
    }

    fn rest_project() -> ProjectDescriptor {
        ProjectBuilder::new()
            .spring_boot_version("2.1.0")
            .template("rest")
            .out_dir("demo")
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn test_unavailable_page_wins_over_error_status() {
        let (base, _) = serve_once(
            "503 Service Unavailable",
            "<html><h1>Application is not available</h1></html>",
        )
        .await;

        let result = client(&base).fetch_config().await;
        assert!(matches!(result, Err(GeneratorError::Unavailable { .. })));
    }

    #[tokio::test]
    async fn test_error_status_without_marker() {
        let (base, _) = serve_once("500 Internal Server Error", "boom").await;

        let result = client(&base).fetch_config().await;
        assert!(matches!(
            result,
            Err(GeneratorError::Status { status, .. }) if status == StatusCode::INTERNAL_SERVER_ERROR
        ));
    }

    #[tokio::test]
    async fn test_fetch_modules_requests_version_path_with_user_agent() {
        let body = "- name: web\n  description: Spring Web\n- name: data-jpa\n  versions: [\"2.1.0\"]\n";
        let (base, request) = serve_once("200 OK", body).await;

        let modules = client(&base).fetch_modules("2.1.0").await.unwrap();
        let names: Vec<&str> = modules.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["web", "data-jpa"]);

        let request = request.await.unwrap().to_lowercase();
        assert!(request.starts_with("get /modules/2.1.0 http/1.1\r\n"));
        assert!(request.contains("user-agent: snowdrop-scaffold/1.0\r\n"));
    }

    #[tokio::test]
    async fn test_download_app_rejects_error_status() {
        let (base, request) = serve_once("404 Not Found", "no such template").await;

        let result = client(&base).download_app(&rest_project()).await;
        assert!(matches!(
            result,
            Err(GeneratorError::Status { status, .. }) if status == StatusCode::NOT_FOUND
        ));

        let request = request.await.unwrap();
        assert!(request.starts_with("GET /app?template=rest&"));
    }
}
