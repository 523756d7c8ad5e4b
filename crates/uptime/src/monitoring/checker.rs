use anyhow::{Result, anyhow};
use std::time::Duration;

/// Checker trait for the transport used by a probe
///
/// `Ok` carries the HTTP status code. Any status code counts as a response;
/// only transport-level failures (timeout, DNS, refused connection, TLS)
/// are errors.
#[async_trait::async_trait]
pub trait Checker: Send + Sync {
    async fn check(&self, target: &str) -> Result<u16>;
}

/// HTTP/HTTPS checker
pub struct HttpChecker {
    client: reqwest::Client,
}

impl HttpChecker {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("uptime/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait::async_trait]
impl Checker for HttpChecker {
    async fn check(&self, target: &str) -> Result<u16> {
        let response = self
            .client
            .get(target)
            .send()
            .await
            .map_err(|e| anyhow!("HTTP request failed: {e}"))?;

        Ok(response.status().as_u16())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_http_check_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let checker = HttpChecker::new(Duration::from_secs(2)).unwrap();
        let status = checker.check(&server.uri()).await.unwrap();
        assert_eq!(status, 200);
    }

    #[tokio::test]
    async fn test_http_error_status_is_not_a_transport_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let checker = HttpChecker::new(Duration::from_secs(2)).unwrap();
        let status = checker.check(&format!("{}/status", server.uri())).await.unwrap();
        assert_eq!(status, 503);
    }

    #[tokio::test]
    async fn test_http_check_times_out() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(500)))
            .mount(&server)
            .await;

        let checker = HttpChecker::new(Duration::from_millis(50)).unwrap();
        assert!(checker.check(&server.uri()).await.is_err());
    }

    #[tokio::test]
    async fn test_http_check_connection_refused() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let checker = HttpChecker::new(Duration::from_secs(2)).unwrap();
        let err = checker.check(&format!("http://127.0.0.1:{port}/")).await.unwrap_err();
        assert!(err.to_string().contains("HTTP request failed"));
    }
}
