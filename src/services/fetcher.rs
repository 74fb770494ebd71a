use std::time::Duration;

use reqwest::{header::USER_AGENT, Client, StatusCode};
use url::Url;

use crate::{configuration::FetcherSettings, domain::webpage::WebPage};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FetchFailure {
    #[error("timed out")]
    Timeout,
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("transport error: {0}")]
    Transport(String),
    #[error("malformed response: {0}")]
    Malformed(String),
}

impl FetchFailure {
    /// The server answered; the page is just not there.
    pub fn is_missing_page(&self) -> bool {
        matches!(self, FetchFailure::Status(_))
    }
}

impl From<reqwest::Error> for FetchFailure {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            FetchFailure::Timeout
        } else if e.is_body() || e.is_decode() {
            FetchFailure::Malformed(e.to_string())
        } else {
            FetchFailure::Transport(e.to_string())
        }
    }
}

pub type FetchResult = Result<WebPage, FetchFailure>;

pub struct Fetcher {
    client: Client,
    user_agent: String,
    settings: FetcherSettings,
}

impl Fetcher {
    pub fn new(settings: FetcherSettings) -> Self {
        let user_agent = settings
            .user_agent
            .clone()
            .unwrap_or_else(|| fake_user_agent::get_rua().to_string());

        Fetcher {
            client: Client::new(),
            user_agent,
            settings,
        }
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    pub async fn fetch_seed(&self, url: &str) -> FetchResult {
        self.fetch(url, self.settings.seed_timeout()).await
    }

    pub async fn fetch_probe(&self, url: &str) -> FetchResult {
        self.fetch(url, self.settings.probe_timeout()).await
    }

    /// Single GET, no retries. Only a 200 counts as success.
    pub async fn fetch(&self, url: &str, timeout: Duration) -> FetchResult {
        let parsed_url = Url::parse(url)
            .map_err(|e| FetchFailure::Transport(format!("invalid url {}: {}", url, e)))?;

        let res = self
            .client
            .get(parsed_url)
            .header(USER_AGENT, self.user_agent.as_str())
            .timeout(timeout)
            .send()
            .await?;

        if res.status() != StatusCode::OK {
            log::debug!("Got status {} from {}", res.status(), url);
            return Err(FetchFailure::Status(res.status().as_u16()));
        }

        let page_source = res.text().await?;

        Ok(WebPage::new(url, page_source))
    }
}
