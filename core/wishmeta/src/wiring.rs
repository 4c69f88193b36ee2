//! 配線: 標準アダプタで UseCase を組み立てる

use std::sync::Arc;

use common::adapter::{FileJsonLog, StdFileSystem, StderrLog, TeeLog};
use common::ports::outbound::{FileSystem, Log};

use crate::adapter::{
    FileArchive, HoyoAnnouncementFeed, JsonBannerStore, MemoItemResolver, UigfItemResolver,
    DEFAULT_FEED_URL, DEFAULT_TRANSLATE_URL,
};
use crate::cli::Config;
use crate::ports::outbound::{AnnouncementArchive, AnnouncementFeed, BannerStore, ItemIdResolver};
use crate::usecase::RefreshUseCase;

const DEFAULT_OUTPUT: &str = "banner-data.json";
const DEFAULT_ARCHIVE_DIR: &str = "ann_archive";
const DEFAULT_LOG_FILE: &str = "wishmeta-log.jsonl";

/// 組み立て済みのアプリケーション
pub struct App {
    pub refresh: RefreshUseCase,
    pub logger: Arc<dyn Log>,
}

/// 配線: 標準アダプタで RefreshUseCase を組み立てる
pub fn wire(config: &Config) -> App {
    let fs: Arc<dyn FileSystem> = Arc::new(StdFileSystem);

    let log_path = config.log_file.as_deref().unwrap_or(DEFAULT_LOG_FILE);
    let file_log: Arc<dyn Log> = Arc::new(FileJsonLog::new(Arc::clone(&fs), log_path));
    let logger: Arc<dyn Log> = if config.verbose {
        Arc::new(TeeLog::new(vec![file_log, Arc::new(StderrLog)]))
    } else {
        file_log
    };

    let feed: Arc<dyn AnnouncementFeed> = Arc::new(HoyoAnnouncementFeed::new(DEFAULT_FEED_URL));
    let resolver: Arc<dyn ItemIdResolver> = Arc::new(MemoItemResolver::new(Arc::new(
        UigfItemResolver::new(DEFAULT_TRANSLATE_URL),
    )));
    let output = config.output.as_deref().unwrap_or(DEFAULT_OUTPUT);
    let store: Arc<dyn BannerStore> = Arc::new(JsonBannerStore::new(Arc::clone(&fs), output));
    let archive: Option<Arc<dyn AnnouncementArchive>> = if config.no_archive {
        None
    } else {
        let dir = config.archive_dir.as_deref().unwrap_or(DEFAULT_ARCHIVE_DIR);
        Some(Arc::new(FileArchive::new(Arc::clone(&fs), dir)))
    };

    App {
        refresh: RefreshUseCase::new(feed, resolver, store, archive, Arc::clone(&logger)),
        logger,
    }
}
