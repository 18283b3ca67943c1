// src/core/net.rs
// Blocking HTTP GET, one request at a time.

use std::time::Instant;

use reqwest::blocking::Client;

use crate::config::options::NetOptions;
use crate::error::ScrapeError;

/// Where page HTML comes from. The runner only ever asks for whole documents.
pub trait PageSource {
    fn get(&self, url: &str) -> Result<String, ScrapeError>;
}

/// Live site over HTTPS. One client per run, reused for every page.
pub struct HttpSource {
    client: Client,
}

impl HttpSource {
    pub fn new(opts: &NetOptions) -> Result<Self, ScrapeError> {
        // The blocking builder defaults to 30 s; `None` is passed through explicitly
        // so an unset timeout means no timeout at all.
        let client = Client::builder()
            .user_agent(opts.user_agent.as_str())
            .timeout(opts.timeout)
            .build()
            .map_err(ScrapeError::Client)?;
        Ok(Self { client })
    }
}

impl PageSource for HttpSource {
    fn get(&self, url: &str) -> Result<String, ScrapeError> {
        let started = Instant::now();
        let transport = |source: reqwest::Error| ScrapeError::Transport { url: s!(url), source };

        let resp = self.client.get(url).send().map_err(transport)?;
        let status = resp.status();
        if !status.is_success() {
            return Err(ScrapeError::Status { url: s!(url), status: status.as_u16() });
        }
        let body = resp.text().map_err(transport)?;

        log::debug!(
            "GET {url} -> {} ({} bytes, {} ms)",
            status.as_u16(),
            body.len(),
            started.elapsed().as_millis()
        );
        Ok(body)
    }
}
