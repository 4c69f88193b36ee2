//! HoYoverse お知らせフィード（adapter 層）
//!
//! getAnnContent API をロケール指定で 1 回ずつブロッキング取得する。
//! キャッシュは持たない。同じロケールを再度要求すれば再度取得する。

use crate::domain::{Announcement, Lang};
use crate::ports::outbound::AnnouncementFeed;
use common::error::Error;
use serde::Deserialize;

/// 既定のフィード URL
pub const DEFAULT_FEED_URL: &str =
    "https://sg-hk4e-api-static.hoyoverse.com/common/hk4e_global/announcement/api/getAnnContent";

/// HoYoverse お知らせフィード実装
pub struct HoyoAnnouncementFeed {
    url: String,
}

impl HoyoAnnouncementFeed {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

#[derive(Debug, Deserialize)]
struct FeedResponse {
    data: Option<FeedData>,
}

#[derive(Debug, Deserialize)]
struct FeedData {
    #[serde(default)]
    list: Vec<Announcement>,
}

impl AnnouncementFeed for HoyoAnnouncementFeed {
    fn fetch(&self, lang: Lang) -> Result<Vec<Announcement>, Error> {
        let client = reqwest::blocking::Client::new();
        let response = client
            .get(&self.url)
            .query(&[
                ("game", "hk4e"),
                ("game_biz", "hk4e_global"),
                ("region", "os_asia"),
                ("bundle_id", "hk4e_global"),
                ("channel_id", "1"),
                ("level", "55"),
                ("platform", "pc"),
                ("lang", lang.code()),
                ("uid", "100000000"),
            ])
            .send()
            .map_err(|e| Error::http(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        let response_text = response
            .text()
            .map_err(|e| Error::http(format!("Failed to read response: {}", e)))?;

        if !status.is_success() {
            return Err(Error::http(format!(
                "announcement feed error: HTTP {}: {}",
                status, response_text
            )));
        }

        let parsed: FeedResponse = serde_json::from_str(&response_text)
            .map_err(|e| Error::json(format!("Failed to parse feed response: {}", e)))?;
        let data = parsed
            .data
            .ok_or_else(|| Error::http("announcement feed returned no data"))?;
        Ok(data.list)
    }
}
