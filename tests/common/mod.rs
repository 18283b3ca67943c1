// tests/common/mod.rs
#![allow(dead_code)]

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use pfr_scrape::ScrapeError;
use pfr_scrape::core::PageSource;

pub fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("pfr_scrape_{}_{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

/// Minimal stats page: one header row, body rows as given.
pub fn page(columns: &[&str], rows: &[&[&str]]) -> String {
    let mut html = String::from("<html><body><table class=\"stats_table\"><thead><tr>");
    for c in columns {
        html.push_str(&format!("<th>{c}</th>"));
    }
    html.push_str("</tr></thead><tbody>");
    for r in rows {
        html.push_str("<tr>");
        for cell in *r {
            html.push_str(&format!("<td>{cell}</td>"));
        }
        html.push_str("</tr>");
    }
    html.push_str("</tbody></table></body></html>");
    html
}

/// In-memory site: URL → page body, or an HTTP status for failing URLs.
#[derive(Default)]
pub struct FakeSite {
    pages: HashMap<String, Result<String, u16>>,
}

impl FakeSite {
    pub fn with_page(mut self, url: &str, body: String) -> Self {
        self.pages.insert(url.to_string(), Ok(body));
        self
    }

    pub fn with_status(mut self, url: &str, status: u16) -> Self {
        self.pages.insert(url.to_string(), Err(status));
        self
    }
}

impl PageSource for FakeSite {
    fn get(&self, url: &str) -> Result<String, ScrapeError> {
        match self.pages.get(url) {
            Some(Ok(body)) => Ok(body.clone()),
            Some(Err(status)) => Err(ScrapeError::Status { url: url.to_string(), status: *status }),
            None => Err(ScrapeError::Status { url: url.to_string(), status: 404 }),
        }
    }
}
