//! お知らせフィード Outbound ポート

use crate::domain::{Announcement, Lang};
use common::error::Error;

/// ロケール別のお知らせ一覧を取得する Outbound ポート
///
/// 実装は `adapter::HoyoAnnouncementFeed`（ブロッキング HTTP）や
/// テスト用のメモリフィードなど。呼び出しは常に直列で、1 回の呼び出しが
/// 1 回のブロッキング取得に対応する。
pub trait AnnouncementFeed: Send + Sync {
    fn fetch(&self, lang: Lang) -> Result<Vec<Announcement>, Error>;
}
