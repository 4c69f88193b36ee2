//! お知らせレコード（フィードから取得する不変の入力）

use serde::Deserialize;

/// 1 件のお知らせ
///
/// `content` は HTML のまま保持し、解析直前に [`crate::domain::html::strip_tags`]
/// でテキスト化する。`subtitle` はタグを含んだまま使う（ロケールによっては
/// リテラルの `<br />` が入る）。
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Announcement {
    pub ann_id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub content: String,
    /// バナー画像 URL。お知らせによっては空
    #[serde(default)]
    pub banner: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_with_missing_banner() {
        let json = r#"{"ann_id": 42, "title": "t", "subtitle": "s", "content": "<p>c</p>"}"#;
        let ann: Announcement = serde_json::from_str(json).unwrap();
        assert_eq!(ann.ann_id, 42);
        assert_eq!(ann.banner, "");
    }

    #[test]
    fn test_deserialize_ignores_unknown_fields() {
        let json = r#"{"ann_id": 1, "title": "", "subtitle": "", "content": "", "banner": "u", "type_label": "x"}"#;
        let ann: Announcement = serde_json::from_str(json).unwrap();
        assert_eq!(ann.banner, "u");
    }
}
