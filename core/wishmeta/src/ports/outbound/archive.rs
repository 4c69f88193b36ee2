//! お知らせアーカイブ Outbound ポート
//!
//! 生のお知らせ本文をロケール別に書き残す記録用の口。Sink 系のポートなので
//! `anyhow::Result` を使う。アーカイブ失敗はログに残すだけで処理は続行する。

use crate::domain::Lang;
use anyhow::Result;

/// 生のお知らせ本文を書き残す Outbound ポート
pub trait AnnouncementArchive: Send + Sync {
    /// 1 ロケール分の本文を保存する
    fn save_content(&self, ann_id: i64, lang: Lang, content: &str) -> Result<()>;

    /// 祈願と判定された ann_id を一覧へ追記する
    fn append_banner_id(&self, ann_id: i64) -> Result<()>;
}
