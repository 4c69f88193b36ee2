//! 更新ラン usecase（1 回分のバッチ実行）
//!
//! 基準ロケールのお知らせ一覧を 1 回取得し、1 件ずつ分類 → 抽出 → 時間解決 →
//! ロケール展開の順に処理して出力ドキュメントを組み立てる。1 件の失敗は
//! その 1 件の報告（ann_id / stage / 診断）に留め、ランは続行する。
//! 例外はメンテナンス検出のみで、その場合はラン全体を打ち切る。

use crate::domain::announcement::Announcement;
use crate::domain::record::{build_entry, BannerData, BannerRecord};
use crate::domain::timewindow::{StartResolution, StartSpec};
use crate::domain::{banner_name, classify, html, items, timewindow};
use crate::domain::{BannerKind, Lang};
use crate::ports::outbound::{AnnouncementArchive, AnnouncementFeed, BannerStore, ItemIdResolver};
use common::error::Error;
use common::ports::outbound::{now_iso8601, Log, LogLevel, LogRecord};
use std::collections::BTreeMap;
use std::sync::Arc;

/// ランごとの集計。プロセス全体のカウンタは持たず、この構造体を持ち回る
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    /// 読んだお知らせの件数
    pub processed: usize,
    /// 祈願として出力した件数
    pub banners: usize,
    /// 祈願ではなかった件数
    pub skipped: usize,
    /// 失敗して報告した件数
    pub failed: usize,
}

/// ランの結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    Completed(RunStats),
    /// 更新説明も維持予告も見つからない。メンテナンス中とみなし再実行を促す
    Maintenance,
}

/// 失敗したステージ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Classify,
    Items,
    ItemResolve,
    TimeWindow,
    StartResolve,
    LocaleLookup,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Classify => "classify",
            Stage::Items => "items",
            Stage::ItemResolve => "item_resolve",
            Stage::TimeWindow => "time_window",
            Stage::StartResolve => "start_resolve",
            Stage::LocaleLookup => "locale_lookup",
        }
    }
}

/// 1 件分の失敗報告
#[derive(Debug, Clone)]
pub struct StageError {
    pub ann_id: i64,
    pub stage: Stage,
    pub diagnostic: String,
}

impl StageError {
    fn new(ann_id: i64, stage: Stage, diagnostic: impl Into<String>) -> Self {
        Self {
            ann_id,
            stage,
            diagnostic: diagnostic.into(),
        }
    }
}

/// 1 件のお知らせの処理結果
enum AnnOutcome {
    Banner {
        base: BannerRecord,
        variants: Vec<BannerRecord>,
    },
    NotABanner,
    UnderMaintenance,
}

/// 更新ランの usecase
pub struct RefreshUseCase {
    feed: Arc<dyn AnnouncementFeed>,
    resolver: Arc<dyn ItemIdResolver>,
    store: Arc<dyn BannerStore>,
    archive: Option<Arc<dyn AnnouncementArchive>>,
    logger: Arc<dyn Log>,
}

impl RefreshUseCase {
    pub fn new(
        feed: Arc<dyn AnnouncementFeed>,
        resolver: Arc<dyn ItemIdResolver>,
        store: Arc<dyn BannerStore>,
        archive: Option<Arc<dyn AnnouncementArchive>>,
        logger: Arc<dyn Log>,
    ) -> Self {
        Self {
            feed,
            resolver,
            store,
            archive,
            logger,
        }
    }

    /// ランを 1 回実行する
    pub fn run(&self) -> Result<RunOutcome, Error> {
        self.log(LogLevel::Info, "lifecycle", "run started", None);
        let corpus = self.feed.fetch(Lang::BASE)?;
        let mut stats = RunStats::default();
        let mut data = BannerData::new();

        for ann in &corpus {
            stats.processed += 1;
            self.archive_content(ann.ann_id, Lang::BASE, &ann.content);
            match self.process_announcement(ann, &corpus) {
                Ok(AnnOutcome::Banner { base, variants }) => {
                    self.archive_banner_id(ann.ann_id);
                    data.insert(ann.ann_id.to_string(), build_entry(&base, &variants));
                    stats.banners += 1;
                    self.log(
                        LogLevel::Info,
                        "pipeline",
                        "banner recorded",
                        Some(fields(&[
                            ("ann_id", serde_json::json!(ann.ann_id)),
                            ("pool_type", serde_json::json!(base.pool_type.code())),
                            ("version", serde_json::json!(base.version)),
                            ("order", serde_json::json!(base.order)),
                        ])),
                    );
                }
                Ok(AnnOutcome::NotABanner) => {
                    stats.skipped += 1;
                    self.log(
                        LogLevel::Debug,
                        "pipeline",
                        "not a banner announcement",
                        Some(fields(&[
                            ("ann_id", serde_json::json!(ann.ann_id)),
                            ("subtitle", serde_json::json!(ann.subtitle)),
                        ])),
                    );
                }
                Ok(AnnOutcome::UnderMaintenance) => {
                    self.log(
                        LogLevel::Warn,
                        "lifecycle",
                        "no update log found; game is most likely under maintenance",
                        Some(fields(&[("ann_id", serde_json::json!(ann.ann_id))])),
                    );
                    return Ok(RunOutcome::Maintenance);
                }
                Err(err) => {
                    stats.failed += 1;
                    self.log(
                        LogLevel::Warn,
                        "error",
                        "announcement failed",
                        Some(fields(&[
                            ("ann_id", serde_json::json!(err.ann_id)),
                            ("stage", serde_json::json!(err.stage.as_str())),
                            ("diagnostic", serde_json::json!(err.diagnostic)),
                        ])),
                    );
                }
            }
        }

        self.store.save(&data)?;
        self.log(
            LogLevel::Info,
            "lifecycle",
            "run finished",
            Some(fields(&[
                ("processed", serde_json::json!(stats.processed)),
                ("banners", serde_json::json!(stats.banners)),
                ("skipped", serde_json::json!(stats.skipped)),
                ("failed", serde_json::json!(stats.failed)),
            ])),
        );
        Ok(RunOutcome::Completed(stats))
    }

    /// 1 件のお知らせを処理する
    fn process_announcement(
        &self,
        ann: &Announcement,
        corpus: &[Announcement],
    ) -> Result<AnnOutcome, StageError> {
        let content_text = html::strip_tags(&ann.content);
        let kind = classify::classify(&ann.title, &ann.subtitle, &content_text)
            .map_err(|e| StageError::new(ann.ann_id, Stage::Classify, e.to_string()))?;

        let names = match kind {
            BannerKind::NotABanner => return Ok(AnnOutcome::NotABanner),
            BannerKind::Character(_) => items::extract_character_names(&content_text),
            BannerKind::Weapon => items::extract_weapon_names(&content_text),
            BannerKind::Chronicled => items::extract_chronicled_names(&content_text),
        }
        .map_err(|e| StageError::new(ann.ann_id, Stage::Items, e.to_string()))?;

        let chronicled = matches!(kind, BannerKind::Chronicled);
        let window = timewindow::extract_window(&content_text, chronicled)
            .map_err(|e| StageError::new(ann.ann_id, Stage::TimeWindow, e.to_string()))?;

        let (start_time, version, order) = match window.start {
            StartSpec::AfterUpdate { version } => {
                match timewindow::resolve_relative_start(&version, corpus)
                    .map_err(|e| StageError::new(ann.ann_id, Stage::StartResolve, e.to_string()))?
                {
                    StartResolution::Resolved(time) => (time, version, 1),
                    StartResolution::UnderMaintenance => {
                        return Ok(AnnOutcome::UnderMaintenance)
                    }
                }
            }
            StartSpec::Absolute(time) => {
                let version = timewindow::infer_live_version(corpus)
                    .map_err(|e| StageError::new(ann.ann_id, Stage::StartResolve, e.to_string()))?;
                (time, version, 2)
            }
        };

        let rare_item_ids = self.resolve_ids(ann.ann_id, &names.rare)?;
        let common_item_ids = self.resolve_ids(ann.ann_id, &names.common)?;

        let base = BannerRecord {
            lang: Lang::BASE,
            ann_id: ann.ann_id,
            version,
            order,
            name: banner_name::canonical_banner_name(Lang::BASE, &ann.subtitle),
            pool_type: kind.pool_type(),
            banner_image_url: ann.banner.clone(),
            backup_image_url: ann.banner.clone(),
            start_time,
            end_time: window.end,
            rare_item_ids,
            common_item_ids,
        };
        let variants = self.collect_locale_variants(&base)?;
        Ok(AnnOutcome::Banner { base, variants })
    }

    /// 各ターゲットロケールの表現を 1 件ずつ取得して変種を作る
    fn collect_locale_variants(&self, base: &BannerRecord) -> Result<Vec<BannerRecord>, StageError> {
        let mut variants = Vec::with_capacity(Lang::TARGETS.len());
        for lang in Lang::TARGETS {
            let list = self
                .feed
                .fetch(lang)
                .map_err(|e| StageError::new(base.ann_id, Stage::LocaleLookup, e.to_string()))?;
            let rendition = list
                .into_iter()
                .find(|a| a.ann_id == base.ann_id)
                .ok_or_else(|| {
                    StageError::new(
                        base.ann_id,
                        Stage::LocaleLookup,
                        format!("no {lang} rendition for announcement"),
                    )
                })?;
            self.archive_content(base.ann_id, lang, &rendition.content);
            let name = banner_name::canonical_banner_name(lang, &rendition.subtitle);
            variants.push(base.locale_variant(lang, name, rendition.banner));
        }
        Ok(variants)
    }

    /// 表示名を順に ID へ解決する。未解決の名前は adapter が 0 を返す
    fn resolve_ids(&self, ann_id: i64, names: &[String]) -> Result<Vec<i64>, StageError> {
        names
            .iter()
            .map(|name| {
                self.resolver.resolve(name).map_err(|e| {
                    StageError::new(ann_id, Stage::ItemResolve, format!("{name}: {e}"))
                })
            })
            .collect()
    }

    /// アーカイブは失敗してもランを止めない
    fn archive_content(&self, ann_id: i64, lang: Lang, content: &str) {
        if let Some(archive) = &self.archive {
            if let Err(e) = archive.save_content(ann_id, lang, content) {
                self.log(
                    LogLevel::Warn,
                    "error",
                    "archive failed",
                    Some(fields(&[
                        ("ann_id", serde_json::json!(ann_id)),
                        ("lang", serde_json::json!(lang.code())),
                        ("error", serde_json::json!(e.to_string())),
                    ])),
                );
            }
        }
    }

    fn archive_banner_id(&self, ann_id: i64) {
        if let Some(archive) = &self.archive {
            if let Err(e) = archive.append_banner_id(ann_id) {
                self.log(
                    LogLevel::Warn,
                    "error",
                    "archive failed",
                    Some(fields(&[
                        ("ann_id", serde_json::json!(ann_id)),
                        ("error", serde_json::json!(e.to_string())),
                    ])),
                );
            }
        }
    }

    fn log(
        &self,
        level: LogLevel,
        kind: &str,
        message: &str,
        fields: Option<BTreeMap<String, serde_json::Value>>,
    ) {
        let _ = self.logger.log(&LogRecord {
            ts: now_iso8601(),
            level,
            message: message.to_string(),
            layer: Some("usecase".to_string()),
            kind: Some(kind.to_string()),
            fields,
        });
    }
}

fn fields(pairs: &[(&str, serde_json::Value)]) -> BTreeMap<String, serde_json::Value> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}
