//! アダプター（外界の I/O を ports の trait で差し替え可能にする実装）
//!
//! ブロッキング HTTP・ファイル書き出しはすべてここに置く。
//! usecase / domain からは ports の trait 経由でのみ触れる。

pub mod file_archive;
pub mod hoyo_feed;
pub mod json_store;
pub mod memo_resolver;
pub mod uigf_resolver;

pub use file_archive::FileArchive;
pub use hoyo_feed::{HoyoAnnouncementFeed, DEFAULT_FEED_URL};
pub use json_store::JsonBannerStore;
pub use memo_resolver::MemoItemResolver;
pub use uigf_resolver::{UigfItemResolver, DEFAULT_TRANSLATE_URL};
