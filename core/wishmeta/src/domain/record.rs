//! バナーレコードと出力ドキュメント

use crate::domain::lang::Lang;
use crate::domain::pool::PoolType;
use serde::Serialize;
use std::collections::BTreeMap;

/// 1 ロケール分のバナーレコード
///
/// 基準ロケール（zh-cn）のレコードを最初に組み立て、他ロケールは
/// `name` と `banner_image_url` 以外を引き継いだ変種として作る。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BannerRecord {
    pub lang: Lang,
    pub ann_id: i64,
    /// 正規化済みの数値バージョン（例: "6.2"）
    pub version: String,
    /// 前半バナーは 1、後半バナーは 2
    pub order: u8,
    pub name: String,
    pub pool_type: PoolType,
    pub banner_image_url: String,
    pub backup_image_url: String,
    pub start_time: String,
    pub end_time: String,
    pub rare_item_ids: Vec<i64>,
    pub common_item_ids: Vec<i64>,
}

impl BannerRecord {
    /// ロケール変種を作る。`name` と `banner_image_url` だけを差し替え、
    /// 時刻・アイテム・種別・バージョンは基準レコードの値を共有する。
    pub fn locale_variant(&self, lang: Lang, name: String, banner_image_url: String) -> Self {
        Self {
            lang,
            name,
            banner_image_url,
            ..self.clone()
        }
    }
}

/// 出力ドキュメントのロケール別サブキー
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocaleEntry {
    pub name: String,
    pub banner_image_url: String,
}

/// 出力ドキュメントの 1 エントリ（ann_id ごと）
///
/// フィールド名とロケール別サブキーの構造は公開契約。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BannerEntry {
    pub rare_item_ids: Vec<i64>,
    pub common_item_ids: Vec<i64>,
    pub pool_type: PoolType,
    pub start_time: String,
    pub end_time: String,
    pub version: String,
    pub order: u8,
    /// ロケールコード → {name, banner_image_url}。基準ロケールも含む
    #[serde(flatten)]
    pub locales: BTreeMap<String, LocaleEntry>,
}

/// 出力ドキュメント全体（ann_id の文字列キー → エントリ）
pub type BannerData = BTreeMap<String, BannerEntry>;

/// 基準レコードとロケール変種から 1 エントリを組み立てる
pub fn build_entry(base: &BannerRecord, variants: &[BannerRecord]) -> BannerEntry {
    let mut locales = BTreeMap::new();
    for record in std::iter::once(base).chain(variants) {
        locales.insert(
            record.lang.code().to_string(),
            LocaleEntry {
                name: record.name.clone(),
                banner_image_url: record.banner_image_url.clone(),
            },
        );
    }
    BannerEntry {
        rare_item_ids: base.rare_item_ids.clone(),
        common_item_ids: base.common_item_ids.clone(),
        pool_type: base.pool_type,
        start_time: base.start_time.clone(),
        end_time: base.end_time.clone(),
        version: base.version.clone(),
        order: base.order,
        locales,
    }
}
