//! Outbound ポート: アプリが外界（フィード・ID 解決・保存・アーカイブ）を使うための trait

pub mod archive;
pub mod feed;
pub mod item_resolver;
pub mod store;

pub use archive::AnnouncementArchive;
pub use feed::AnnouncementFeed;
pub use item_resolver::ItemIdResolver;
pub use store::BannerStore;
