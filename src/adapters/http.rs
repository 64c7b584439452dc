use crate::domain::ports::TextSource;
use crate::utils::error::{AppError, Result};
use async_trait::async_trait;
use reqwest::Client;

/// A plain-text document behind a single HTTP GET.
#[derive(Debug, Clone)]
pub struct HttpTextSource {
    url: String,
    client: Client,
}

impl HttpTextSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: Client::new(),
        }
    }
}

#[async_trait]
impl TextSource for HttpTextSource {
    fn location(&self) -> &str {
        &self.url
    }

    async fn fetch_lines(&self) -> Result<Vec<String>> {
        tracing::debug!("Making request to: {}", self.url);
        let response = self.client.get(&self.url).send().await?;
        tracing::debug!("Response status: {}", response.status());

        if !response.status().is_success() {
            return Err(AppError::HttpStatusError {
                url: self.url.clone(),
                status: response.status().as_u16(),
            });
        }

        let body = response.text().await?;
        Ok(body.lines().map(str::to_string).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[tokio::test]
    async fn test_fetch_lines() {
        let server = MockServer::start_async().await;
        let book_mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/bok.txt");
                then.status(200)
                    .header("Content-Type", "text/plain; charset=utf-8")
                    .body("Första raden\nAndra raden\n");
            })
            .await;

        let source = HttpTextSource::new(server.url("/bok.txt"));
        let lines = source.fetch_lines().await.unwrap();

        book_mock.assert_async().await;
        assert_eq!(lines, vec!["Första raden", "Andra raden"]);
    }

    #[tokio::test]
    async fn test_error_status_is_reported() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/saknas.txt");
                then.status(404);
            })
            .await;

        let source = HttpTextSource::new(server.url("/saknas.txt"));
        assert!(matches!(
            source.fetch_lines().await,
            Err(AppError::HttpStatusError { status: 404, .. })
        ));
    }
}
