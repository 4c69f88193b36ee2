//! 集約結果を JSON ファイルへ書き出す BannerStore 実装（adapter 層）

use crate::domain::BannerData;
use crate::ports::outbound::BannerStore;
use common::error::Error;
use common::ports::outbound::FileSystem;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// 整形 JSON を 1 ファイルに書き出す BannerStore 実装
///
/// 一時ファイルへ書いてから rename で置き換える。読み手が書きかけの
/// ドキュメントを見ることはない。
pub struct JsonBannerStore {
    fs: Arc<dyn FileSystem>,
    path: PathBuf,
}

impl JsonBannerStore {
    pub fn new(fs: Arc<dyn FileSystem>, path: impl AsRef<Path>) -> Self {
        Self {
            fs,
            path: path.as_ref().to_path_buf(),
        }
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "banner-data.json".to_string());
        name.push_str(".tmp");
        self.path.with_file_name(name)
    }
}

impl BannerStore for JsonBannerStore {
    fn save(&self, data: &BannerData) -> Result<(), Error> {
        let json = serde_json::to_string_pretty(data)
            .map_err(|e| Error::json(format!("Failed to serialize banner data: {}", e)))?;
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                self.fs.create_dir_all(parent)?;
            }
        }
        let tmp = self.tmp_path();
        self.fs.write(&tmp, &json)?;
        self.fs.rename(&tmp, &self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::record::{build_entry, BannerRecord};
    use crate::domain::{Lang, PoolType};
    use common::adapter::StdFileSystem;

    fn sample_data() -> BannerData {
        let base = BannerRecord {
            lang: Lang::ZhCn,
            ann_id: 100,
            version: "6.2".to_string(),
            order: 1,
            name: "浮生孰来".to_string(),
            pool_type: PoolType::CharacterEvent,
            banner_image_url: "https://img/zh.png".to_string(),
            backup_image_url: "https://img/zh.png".to_string(),
            start_time: "2025/03/12 06:00:00".to_string(),
            end_time: "2025/04/02 05:59:59".to_string(),
            rare_item_ids: vec![10000098],
            common_item_ids: vec![10000023, 10000036, 10000024],
        };
        let mut data = BannerData::new();
        data.insert("100".to_string(), build_entry(&base, &[]));
        data
    }

    #[test]
    fn test_save_writes_pretty_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("banner-data.json");
        let store = JsonBannerStore::new(Arc::new(StdFileSystem), &path);
        store.save(&sample_data()).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        // 整形出力で、非 ASCII はエスケープされない
        assert!(text.contains("\n  "));
        assert!(text.contains("浮生孰来"));
        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed["100"]["pool_type"], 301);
        assert_eq!(parsed["100"]["zh-cn"]["name"], "浮生孰来");
    }

    #[test]
    fn test_save_replaces_previous_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("banner-data.json");
        let store = JsonBannerStore::new(Arc::new(StdFileSystem), &path);
        store.save(&sample_data()).unwrap();
        store.save(&BannerData::new()).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.trim(), "{}");
        assert!(!path.with_file_name("banner-data.json.tmp").exists());
    }
}
