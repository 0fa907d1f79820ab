//! HTTP client for the timetable feed.

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::header::{ACCEPT, COOKIE};
use schedcal_core::FeedResponse;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// How much of a bad response body to show in errors.
const BODY_PREVIEW_LEN: usize = 200;

pub struct FeedClient {
    http: reqwest::Client,
    url: String,
    cookie: Option<String>,
}

impl FeedClient {
    pub fn new(url: &str, cookie: Option<&str>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(FeedClient {
            http,
            url: url.to_string(),
            cookie: cookie.map(str::to_string),
        })
    }

    /// Fetch one group's schedule. Fails fast on a non-success status
    /// or a non-JSON body; there is no retry.
    pub async fn fetch_group(&self, group: &str) -> Result<FeedResponse> {
        let mut request = self
            .http
            .get(&self.url)
            .query(&[("group", group)])
            .header(ACCEPT, "application/json");

        if let Some(cookie) = &self.cookie {
            request = request.header(COOKIE, cookie.as_str());
        }

        let response = request
            .send()
            .await
            .with_context(|| format!("Failed to fetch schedule for group '{}'", group))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .with_context(|| format!("Failed to read feed response for group '{}'", group))?;

        if !status.is_success() {
            anyhow::bail!(
                "Feed returned {} for group '{}': {}",
                status,
                group,
                preview(&body)
            );
        }

        serde_json::from_str(&body).with_context(|| {
            format!(
                "Feed returned non-JSON body for group '{}': {}",
                group,
                preview(&body)
            )
        })
    }
}

fn preview(body: &str) -> &str {
    match body.char_indices().nth(BODY_PREVIEW_LEN) {
        Some((pos, _)) => &body[..pos],
        None => body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_truncates_long_bodies() {
        let long = "x".repeat(500);
        assert_eq!(preview(&long).len(), BODY_PREVIEW_LEN);
        assert_eq!(preview("short"), "short");
    }

    #[test]
    fn test_preview_respects_char_boundaries() {
        let cyrillic = "ы".repeat(300);
        let p = preview(&cyrillic);
        assert_eq!(p.chars().count(), BODY_PREVIEW_LEN);
    }
}
