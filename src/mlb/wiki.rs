//! Encyclopedia summaries (Wikipedia REST `page/summary`).

use reqwest::{StatusCode, Url};
use tracing::{debug, warn};

use super::{http::MlbClient, types::RawWikiSummary};
use crate::model::WikiSummary;

impl MlbClient {
    /// Summary for a page title. Missing pages and failures yield `None`.
    pub async fn wiki_summary(&self, title: &str) -> Option<WikiSummary> {
        let title = title.trim();
        if title.is_empty() {
            return None;
        }

        let Ok(mut url) = Url::parse(&self.config().wiki_base_url) else {
            warn!(base = %self.config().wiki_base_url, "invalid encyclopedia base URL");
            return None;
        };
        match url.path_segments_mut() {
            Ok(mut segments) => {
                segments.pop_if_empty().push(title);
            }
            Err(()) => return None,
        }

        debug!(%url, "GET");
        let res = match self.http().get(url).send().await {
            Ok(res) => res,
            Err(e) => {
                warn!(%title, error = %e, "failed to load encyclopedia summary");
                return None;
            }
        };
        if res.status() == StatusCode::NOT_FOUND {
            debug!(%title, "no encyclopedia page");
            return None;
        }
        let res = match res.error_for_status() {
            Ok(res) => res,
            Err(e) => {
                warn!(%title, error = %e, "failed to load encyclopedia summary");
                return None;
            }
        };
        match res.json::<RawWikiSummary>().await {
            Ok(raw) => raw.into_summary(),
            Err(e) => {
                warn!(%title, error = %e, "unreadable encyclopedia summary");
                None
            }
        }
    }
}
