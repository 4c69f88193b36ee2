//! UIGF 翻訳 API によるアイテム ID 解決（adapter 層）

use crate::ports::outbound::ItemIdResolver;
use common::error::Error;
use serde_json::Value;

/// 既定の翻訳 API URL
pub const DEFAULT_TRANSLATE_URL: &str = "https://api.uigf.org/translate/";

/// UIGF 翻訳 API 実装
///
/// 表示名 1 件につき 1 回の POST を行う。レスポンスに `item_id` が無い、
/// または数値でない場合は未解決として `0` を返す（エラーにしない）。
pub struct UigfItemResolver {
    url: String,
}

impl UigfItemResolver {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl ItemIdResolver for UigfItemResolver {
    fn resolve(&self, name: &str) -> Result<i64, Error> {
        let body = serde_json::json!({
            "lang": "zh-cn",
            "type": "normal",
            "game": "genshin",
            "item_name": name,
        });
        let client = reqwest::blocking::Client::new();
        let response = client
            .post(&self.url)
            .json(&body)
            .send()
            .map_err(|e| Error::http(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        let response_text = response
            .text()
            .map_err(|e| Error::http(format!("Failed to read response: {}", e)))?;

        if !status.is_success() {
            return Err(Error::http(format!(
                "translate API error: HTTP {}: {}",
                status, response_text
            )));
        }

        let v: Value = serde_json::from_str(&response_text)
            .map_err(|e| Error::json(format!("Failed to parse translate response: {}", e)))?;
        Ok(v.get("item_id").and_then(Value::as_i64).unwrap_or(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_item_id_degrades_to_zero() {
        let v: Value = serde_json::from_str(r#"{"message":"not found"}"#).unwrap();
        assert_eq!(v.get("item_id").and_then(Value::as_i64).unwrap_or(0), 0);
    }

    #[test]
    fn test_item_id_is_read_as_integer() {
        let v: Value = serde_json::from_str(r#"{"item_id":10000098}"#).unwrap();
        assert_eq!(v.get("item_id").and_then(Value::as_i64).unwrap_or(0), 10000098);
    }
}
