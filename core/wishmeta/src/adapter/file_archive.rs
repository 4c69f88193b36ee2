//! 生お知らせのファイルアーカイブ（adapter 層）
//!
//! `<base>/<ann_id>/<lang>.txt` に本文を、`<base>/banner_ann_list.txt` に
//! 祈願と判定した ann_id を追記する。

use crate::domain::Lang;
use crate::ports::outbound::AnnouncementArchive;
use anyhow::Result;
use common::ports::outbound::FileSystem;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// ファイルへ書き残す AnnouncementArchive 実装
pub struct FileArchive {
    fs: Arc<dyn FileSystem>,
    base_dir: PathBuf,
}

impl FileArchive {
    pub fn new(fs: Arc<dyn FileSystem>, base_dir: impl AsRef<Path>) -> Self {
        Self {
            fs,
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }
}

impl AnnouncementArchive for FileArchive {
    fn save_content(&self, ann_id: i64, lang: Lang, content: &str) -> Result<()> {
        let dir = self.base_dir.join(ann_id.to_string());
        self.fs
            .create_dir_all(&dir)
            .map_err(|e| anyhow::anyhow!("create archive dir {:?}: {}", dir, e))?;
        let path = dir.join(format!("{}.txt", lang.code()));
        self.fs
            .write(&path, content)
            .map_err(|e| anyhow::anyhow!("write archive {:?}: {}", path, e))?;
        Ok(())
    }

    fn append_banner_id(&self, ann_id: i64) -> Result<()> {
        self.fs
            .create_dir_all(&self.base_dir)
            .map_err(|e| anyhow::anyhow!("create archive dir {:?}: {}", self.base_dir, e))?;
        let path = self.base_dir.join("banner_ann_list.txt");
        let mut w = self
            .fs
            .open_append(&path)
            .map_err(|e| anyhow::anyhow!("open banner list {:?}: {}", path, e))?;
        use std::io::Write;
        w.write_all(format!("{}\n", ann_id).as_bytes())
            .map_err(|e| anyhow::anyhow!("append banner list: {}", e))?;
        Ok(())
    }
}
